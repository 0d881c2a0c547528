//! Character classes of the RPAL lexical grammar.
//!
//! Every character falls into exactly one [`CharClass`]. The classes are
//! checked in a fixed priority order (letter, digit, operator symbol, quote,
//! whitespace, punctuation) so that the first character of a token alone
//! decides which builder scans it.

/// Characters that build operator tokens.
///
/// `_` is listed here: it continues identifiers but cannot start one, so a
/// leading underscore scans as an operator.
pub const OPERATOR_SYMBOLS: &str = "+-/~:=|!#%_{}\"*<>.&$^[]?@";

/// Delimiter of string literals.
pub const QUOTE: char = '\'';

/// Escape character inside string literals.
pub const ESCAPE: char = '\\';

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharClass {
    Letter,
    Digit,
    OperatorSymbol,
    Quote,
    Whitespace,
    Punctuation,
    /// Matches no class; produces no token.
    Other,
}

/// Classifies the first character of a token.
///
/// ```
/// use rpal_scanner::charclass::{classify, CharClass};
///
/// assert_eq!(classify('x'), CharClass::Letter);
/// assert_eq!(classify('_'), CharClass::OperatorSymbol);
/// assert_eq!(classify(';'), CharClass::Punctuation);
/// assert_eq!(classify('é'), CharClass::Other);
/// ```
pub fn classify(c: char) -> CharClass {
    if is_letter(c) {
        CharClass::Letter
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_operator_symbol(c) {
        CharClass::OperatorSymbol
    } else if c == QUOTE {
        CharClass::Quote
    } else if is_whitespace(c) {
        CharClass::Whitespace
    } else if is_punctuation(c) {
        CharClass::Punctuation
    } else {
        CharClass::Other
    }
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Letters, digits and underscore.
pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}

pub fn is_operator_symbol(c: char) -> bool {
    OPERATOR_SYMBOLS.contains(c)
}

/// Space, tab, newline, carriage return, vertical tab and form feed.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

pub fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | ';' | ',')
}

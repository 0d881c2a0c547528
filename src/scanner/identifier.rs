use std::io::Read;

use crate::charclass::is_ident_continue;
use crate::error::ScanError;
use crate::scanner::Scanner;
use crate::token::{Kind, Token};

impl<R: Read> Scanner<R> {
    /// Letters, then any mix of letters, digits and underscores.
    ///
    /// Reserved words are not recognized here; `let` is an identifier.
    pub(super) fn scan_identifier(&mut self, first: char, line: usize) -> Result<Token, ScanError> {
        let mut text = String::from(first);
        self.extend_while(&mut text, is_ident_continue)?;
        Ok(Token::new(Kind::Identifier, text, line))
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;
    use crate::token::Kind;

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        let mut scanner = Scanner::from_text("fact_2x+1");
        let token = scanner.next_token().unwrap().unwrap();
        assert_eq!(token.kind(), Kind::Identifier);
        assert_eq!(token.text(), "fact_2x");

        let op = scanner.next_token().unwrap().unwrap();
        assert_eq!(op.kind(), Kind::Operator);
        assert_eq!(op.text(), "+");
    }

    #[test]
    fn test_case_is_preserved() {
        let token = Scanner::from_text("Print").next_token().unwrap().unwrap();
        assert_eq!(token.text(), "Print");
    }

    #[test]
    fn test_reserved_words_stay_identifiers() {
        let kinds: Vec<Kind> = Scanner::from_text("let in where")
            .map(|t| t.unwrap().kind())
            .filter(|k| !k.is_deletable())
            .collect();
        assert_eq!(kinds, vec![Kind::Identifier; 3]);
    }
}

use std::fmt;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    pub(crate) kind: Kind,
    pub(crate) text: String,
    pub(crate) line: usize,
}

impl Token {
    pub fn new(kind: Kind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The lexeme. String literals carry their content without the quotes.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based line of the token's first character.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_deletable(&self) -> bool {
        self.kind.is_deletable()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token[type={}, value='{}', line={}]",
            self.kind, self.text, self.line
        )
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum Kind {
    // Words and literals
    #[serde(rename = "IDENTIFIER")]
    Identifier,    // x, fact_1
    #[serde(rename = "INTEGER")]
    Integer,       // 42
    #[serde(rename = "STRING")]
    StringLiteral, // 'text'

    // Maximal run of operator symbols, split further by the parser
    #[serde(rename = "OPERATOR")]
    Operator,      // +, ->, <>=

    // Whitespace runs and // comments
    #[serde(rename = "DELETE")]
    Delete,

    // Structural punctuation
    #[serde(rename = "L_PAREN")]
    LeftParen,     // (
    #[serde(rename = "R_PAREN")]
    RightParen,    // )
    #[serde(rename = "SEMICOLON")]
    Semicolon,     // ;
    #[serde(rename = "COMMA")]
    Comma,         // ,

    /// Reserved words such as `let` and `in`.
    ///
    /// The scanner never produces this kind: every word comes out as
    /// [`Kind::Identifier`] and reserved-word recognition is left to the
    /// parser.
    #[serde(rename = "RESERVED")]
    Reserved,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Identifier => "IDENTIFIER",
            Kind::Integer => "INTEGER",
            Kind::StringLiteral => "STRING",
            Kind::Operator => "OPERATOR",
            Kind::Delete => "DELETE",
            Kind::LeftParen => "L_PAREN",
            Kind::RightParen => "R_PAREN",
            Kind::Semicolon => "SEMICOLON",
            Kind::Comma => "COMMA",
            Kind::Reserved => "RESERVED",
        }
    }

    /// Whitespace and comments, which a parser drops before building syntax.
    pub fn is_deletable(self) -> bool {
        self == Kind::Delete
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_driver_format() {
        let token = Token::new(Kind::Identifier, "fact", 3);
        assert_eq!(token.to_string(), "Token[type=IDENTIFIER, value='fact', line=3]");
    }

    #[test]
    fn test_string_literal_display_has_no_quotes_in_value() {
        let token = Token::new(Kind::StringLiteral, "", 1);
        assert_eq!(token.to_string(), "Token[type=STRING, value='', line=1]");
    }

    #[test]
    fn test_only_delete_is_deletable() {
        assert!(Kind::Delete.is_deletable());
        assert!(!Kind::Operator.is_deletable());
        assert!(!Kind::Reserved.is_deletable());
    }

    #[test]
    fn test_json_uses_kind_names() {
        let token = Token::new(Kind::LeftParen, "(", 2);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"L_PAREN","text":"(","line":2}"#);
    }
}

use std::io::Read;

use crate::charclass::is_digit;
use crate::error::ScanError;
use crate::scanner::Scanner;
use crate::token::{Kind, Token};

impl<R: Read> Scanner<R> {
    /// A run of digits, kept as text. No sign, no fraction, no range check.
    pub(super) fn scan_integer(&mut self, first: char, line: usize) -> Result<Token, ScanError> {
        let mut text = String::from(first);
        self.extend_while(&mut text, is_digit)?;
        Ok(Token::new(Kind::Integer, text, line))
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;
    use crate::token::Kind;

    fn lex(source: &str) -> Vec<(Kind, String)> {
        Scanner::from_text(source)
            .map(|t| t.unwrap())
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    #[test]
    fn test_integer_stops_at_letter() {
        assert_eq!(
            lex("42abc"),
            vec![
                (Kind::Integer, "42".to_string()),
                (Kind::Identifier, "abc".to_string())
            ]
        );
    }

    #[test]
    fn test_no_decimal_point() {
        assert_eq!(
            lex("3.14"),
            vec![
                (Kind::Integer, "3".to_string()),
                (Kind::Operator, ".".to_string()),
                (Kind::Integer, "14".to_string())
            ]
        );
    }

    #[test]
    fn test_leading_zeros_and_huge_values_kept_verbatim() {
        let digits = "000123456789012345678901234567890";
        assert_eq!(lex(digits), vec![(Kind::Integer, digits.to_string())]);
    }

    #[test]
    fn test_minus_is_an_operator() {
        assert_eq!(
            lex("-7"),
            vec![
                (Kind::Operator, "-".to_string()),
                (Kind::Integer, "7".to_string())
            ]
        );
    }
}

use std::io::Read;

use crate::error::ScanError;
use crate::scanner::Scanner;
use crate::token::{Kind, Token};

impl<R: Read> Scanner<R> {
    /// Rest of a `//` comment, called once both slashes are consumed.
    ///
    /// The terminating newline is consumed but kept out of the text and not
    /// pushed back.
    pub(super) fn scan_comment(&mut self, line: usize) -> Result<Token, ScanError> {
        let mut text = String::from("//");
        while let Some((c, _)) = self.advance()? {
            if c == '\n' {
                break;
            }
            text.push(c);
        }
        Ok(Token::new(Kind::Delete, text, line))
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;
    use crate::token::{Kind, Token};

    #[test]
    fn test_comment_swallows_its_newline() {
        let mut scanner = Scanner::from_text("// comment\nx");
        let comment = scanner.next_token().unwrap().unwrap();
        assert_eq!(comment, Token::new(Kind::Delete, "// comment", 1));

        let x = scanner.next_token().unwrap().unwrap();
        assert_eq!(x, Token::new(Kind::Identifier, "x", 2));
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let mut scanner = Scanner::from_text("x //done");
        let tokens: Vec<Token> = scanner.by_ref().map(|t| t.unwrap()).collect();
        assert_eq!(tokens.last(), Some(&Token::new(Kind::Delete, "//done", 1)));
        assert!(!scanner.has_more_input());
    }

    #[test]
    fn test_comment_keeps_quotes_and_symbols() {
        let token = Scanner::from_text("//it's (a) 'test' \"ok\"; \\ @")
            .next_token()
            .unwrap()
            .unwrap();
        assert_eq!(token.text(), "//it's (a) 'test' \"ok\"; \\ @");
    }

    #[test]
    fn test_empty_comment() {
        let mut scanner = Scanner::from_text("//\n1");
        assert_eq!(scanner.next_token().unwrap().unwrap().text(), "//");
        assert_eq!(
            scanner.next_token().unwrap().unwrap(),
            Token::new(Kind::Integer, "1", 2)
        );
    }
}

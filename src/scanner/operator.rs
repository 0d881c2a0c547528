use std::io::Read;

use crate::charclass::is_operator_symbol;
use crate::error::ScanError;
use crate::scanner::Scanner;
use crate::token::{Kind, Token};

impl<R: Read> Scanner<R> {
    /// The longest run of operator symbols, unless it opens with `//`.
    ///
    /// The run is not split into primitive operators: `<>=` is one token.
    pub(super) fn scan_operator(&mut self, first: char, line: usize) -> Result<Token, ScanError> {
        let mut text = String::from(first);

        if first == '/' {
            match self.advance()? {
                Some(('/', _)) => return self.scan_comment(line),
                Some((c, at)) => self.push_back(c, at),
                None => return Ok(Token::new(Kind::Operator, text, line)),
            }
        }

        self.extend_while(&mut text, is_operator_symbol)?;
        Ok(Token::new(Kind::Operator, text, line))
    }

    pub(super) fn scan_punctuation(c: char, line: usize) -> Token {
        let kind = match c {
            '(' => Kind::LeftParen,
            ')' => Kind::RightParen,
            ';' => Kind::Semicolon,
            _ => Kind::Comma,
        };
        Token::new(kind, c, line)
    }
}

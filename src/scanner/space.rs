use std::io::Read;

use crate::charclass::is_whitespace;
use crate::error::ScanError;
use crate::scanner::Scanner;
use crate::token::{Kind, Token};

impl<R: Read> Scanner<R> {
    /// A whitespace run, handed out as a `Delete` token with its raw text.
    pub(super) fn scan_whitespace(&mut self, first: char, line: usize) -> Result<Token, ScanError> {
        let mut text = String::from(first);
        self.extend_while(&mut text, is_whitespace)?;
        Ok(Token::new(Kind::Delete, text, line))
    }
}

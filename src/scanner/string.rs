use std::io::Read;

use tracing::debug;

use crate::charclass::{ESCAPE, QUOTE};
use crate::config::RecoveryPolicy;
use crate::error::ScanError;
use crate::scanner::Scanner;
use crate::token::{Kind, Token};

impl<R: Read> Scanner<R> {
    /// Body of a single-quoted string, called once the opening quote is
    /// consumed. The token's text excludes both quotes.
    ///
    /// A backslash escapes the character after it; the pair is kept verbatim
    /// and an escaped quote does not close the literal. Running out of input
    /// before the closing quote yields no token, or an error under
    /// [`RecoveryPolicy::Error`].
    pub(super) fn scan_string(&mut self, line: usize) -> Result<Option<Token>, ScanError> {
        let mut text = String::new();

        while let Some((c, _)) = self.advance()? {
            match c {
                QUOTE => return Ok(Some(Token::new(Kind::StringLiteral, text, line))),
                ESCAPE => {
                    text.push(c);
                    match self.advance()? {
                        Some((escaped, _)) => text.push(escaped),
                        None => break,
                    }
                }
                _ => text.push(c),
            }
        }

        match self.options().unterminated_strings {
            RecoveryPolicy::Discard => {
                debug!(line, discarded = text.chars().count() + 1, "unterminated string literal dropped");
                Ok(None)
            }
            RecoveryPolicy::Error => Err(ScanError::UnterminatedString { line }),
        }
    }
}

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::charclass::{classify, CharClass};
use crate::config::{IoErrorPolicy, RecoveryPolicy, ScanOptions};
use crate::error::ScanError;
use crate::source::CharSource;
use crate::token::Token;

/// Pull-based scanner over a character source.
///
/// Call [`has_more_input`](Scanner::has_more_input) and
/// [`next_token`](Scanner::next_token) in a loop, or iterate. At most one
/// character is ever read ahead; it waits in a single pushback slot for the
/// next call.
///
/// ```
/// use rpal_scanner::{Kind, Scanner};
///
/// let mut scanner = Scanner::from_text("let x = 5");
/// let first = scanner.next_token().unwrap().unwrap();
/// assert_eq!(first.kind(), Kind::Identifier);
/// assert_eq!(first.text(), "let");
/// ```
pub struct Scanner<R> {
    source: CharSource<R>,
    pending: Option<(char, usize)>,
    options: ScanOptions,
}

impl<'a> Scanner<&'a [u8]> {
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl Scanner<File> {
    /// Opens `path` for scanning. Failing to open is reported regardless of
    /// [`IoErrorPolicy`].
    pub fn open(path: impl AsRef<Path>, options: ScanOptions) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened source");
        Ok(Self::with_options(file, options))
    }
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ScanOptions::default())
    }

    pub fn with_options(reader: R, options: ScanOptions) -> Self {
        Self {
            source: CharSource::new(reader),
            pending: None,
            options,
        }
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Line of the next character to be scanned.
    pub fn line(&self) -> usize {
        match self.pending {
            Some((_, line)) => line,
            None => self.source.line(),
        }
    }

    /// True while a character is pending or the source is still open.
    ///
    /// Only a hint: the next call may still produce nothing, for instance
    /// when the remaining input is an unterminated string.
    pub fn has_more_input(&self) -> bool {
        self.pending.is_some() || !self.source.is_closed()
    }

    /// Scans the next token.
    ///
    /// `Ok(None)` means this call produced no token: either the input is
    /// exhausted, or what was consumed was discarded (an unrecognized
    /// character or an unterminated string under [`RecoveryPolicy::Discard`]).
    /// Check [`has_more_input`](Scanner::has_more_input) to tell them apart.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        let Some((first, line)) = self.advance()? else {
            return Ok(None);
        };

        let token = match classify(first) {
            CharClass::Letter => Some(self.scan_identifier(first, line)?),
            CharClass::Digit => Some(self.scan_integer(first, line)?),
            CharClass::OperatorSymbol => Some(self.scan_operator(first, line)?),
            CharClass::Quote => self.scan_string(line)?,
            CharClass::Whitespace => Some(self.scan_whitespace(first, line)?),
            CharClass::Punctuation => Some(Self::scan_punctuation(first, line)),
            CharClass::Other => {
                self.unrecognized(first, line)?;
                None
            }
        };

        if let Some(token) = &token {
            trace!(kind = %token.kind, line = token.line, text = token.text.as_str(), "token");
        }
        Ok(token)
    }

    /// Takes the pending character, or reads a fresh one.
    pub(super) fn advance(&mut self) -> Result<Option<(char, usize)>, ScanError> {
        if let Some(pending) = self.pending.take() {
            return Ok(Some(pending));
        }

        match self.source.next_char() {
            Ok(next) => Ok(next),
            Err(err) => match self.options.io_errors {
                IoErrorPolicy::Surface => Err(ScanError::Io(err)),
                IoErrorPolicy::TreatAsEof => {
                    warn!(error = %err, "read failure treated as end of input");
                    Ok(None)
                }
            },
        }
    }

    pub(super) fn push_back(&mut self, c: char, line: usize) {
        debug_assert!(self.pending.is_none(), "pushback slot holds one character");
        self.pending = Some((c, line));
    }

    /// Appends characters to `text` while `accept` holds. The first rejected
    /// character is pushed back.
    pub(super) fn extend_while(
        &mut self,
        text: &mut String,
        accept: fn(char) -> bool,
    ) -> Result<(), ScanError> {
        while let Some((c, line)) = self.advance()? {
            if !accept(c) {
                self.push_back(c, line);
                break;
            }
            text.push(c);
        }
        Ok(())
    }

    fn unrecognized(&self, c: char, line: usize) -> Result<(), ScanError> {
        match self.options.unknown_chars {
            RecoveryPolicy::Discard => {
                debug!(line, ch = ?c, "dropping unrecognized character");
                Ok(())
            }
            RecoveryPolicy::Error => Err(ScanError::UnrecognizedCharacter { ch: c, line }),
        }
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Token, ScanError>;

    /// Skips calls that produce nothing and stops once input is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        while self.has_more_input() {
            match self.next_token() {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}

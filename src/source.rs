//! Lazy character source.
//!
//! Reads UTF-8 text one character at a time from any [`Read`], tagging each
//! character with the line it sits on. The reader is dropped, and so closed,
//! the first time end of input or a read failure is observed.

use std::io::{self, BufRead, BufReader, Read};

use tracing::debug;

/// Decoded in place of malformed UTF-8.
pub const REPLACEMENT: char = '\u{FFFD}';

pub struct CharSource<R> {
    reader: Option<BufReader<R>>,
    line: usize,
}

impl<R: Read> CharSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(BufReader::new(reader)),
            line: 1,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Line of the next unread character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Reads the next character together with its line.
    ///
    /// A newline is reported on the line it ends; the counter moves on only
    /// after it has been handed out. Returns `Ok(None)` once closed.
    pub fn next_char(&mut self) -> io::Result<Option<(char, usize)>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        match decode_char(reader) {
            Ok(Some(c)) => {
                let line = self.line;
                if c == '\n' {
                    self.line += 1;
                }
                Ok(Some((c, line)))
            }
            Ok(None) => {
                debug!(line = self.line, "end of input, closing source");
                self.reader = None;
                Ok(None)
            }
            Err(err) => {
                debug!(line = self.line, error = %err, "read failed, closing source");
                self.reader = None;
                Err(err)
            }
        }
    }
}

fn decode_char<R: Read>(reader: &mut BufReader<R>) -> io::Result<Option<char>> {
    let Some(first) = next_byte(reader)? else {
        return Ok(None);
    };

    let width = match first {
        0x00..=0x7F => return Ok(Some(char::from(first))),
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Ok(Some(REPLACEMENT)),
    };

    let mut bytes = [first, 0, 0, 0];
    for slot in bytes.iter_mut().take(width).skip(1) {
        // A truncated sequence leaves the offending byte for the next read.
        match peek_byte(reader)? {
            Some(b @ 0x80..=0xBF) => {
                reader.consume(1);
                *slot = b;
            }
            _ => return Ok(Some(REPLACEMENT)),
        }
    }

    let decoded = std::str::from_utf8(&bytes[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(REPLACEMENT);
    Ok(Some(decoded))
}

fn peek_byte<R: Read>(reader: &mut BufReader<R>) -> io::Result<Option<u8>> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}

fn next_byte<R: Read>(reader: &mut BufReader<R>) -> io::Result<Option<u8>> {
    let byte = peek_byte(reader)?;
    if byte.is_some() {
        reader.consume(1);
    }
    Ok(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(bytes: &[u8]) -> Vec<(char, usize)> {
        let mut source = CharSource::new(bytes);
        let mut chars = Vec::new();
        while let Some(pair) = source.next_char().unwrap() {
            chars.push(pair);
        }
        chars
    }

    #[test]
    fn test_newline_belongs_to_the_line_it_ends() {
        assert_eq!(
            drain(b"a\nb\n\nc"),
            vec![
                ('a', 1),
                ('\n', 1),
                ('b', 2),
                ('\n', 2),
                ('\n', 3),
                ('c', 4)
            ]
        );
    }

    #[test]
    fn test_closes_once_at_end() {
        let mut source = CharSource::new(&b"x"[..]);
        assert!(!source.is_closed());
        assert_eq!(source.next_char().unwrap(), Some(('x', 1)));
        assert!(!source.is_closed());
        assert_eq!(source.next_char().unwrap(), None);
        assert!(source.is_closed());
        assert_eq!(source.next_char().unwrap(), None);
    }

    #[test]
    fn test_decodes_multibyte_utf8() {
        let chars: String = drain("λ→😀".as_bytes()).into_iter().map(|(c, _)| c).collect();
        assert_eq!(chars, "λ→😀");
    }

    #[test]
    fn test_malformed_utf8_becomes_replacement() {
        let chars: Vec<char> = drain(&[b'a', 0xFF, 0xCE, b'b']).into_iter().map(|(c, _)| c).collect();
        assert_eq!(chars, vec!['a', REPLACEMENT, REPLACEMENT, 'b']);
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device error"))
        }
    }

    #[test]
    fn test_read_failure_closes_source() {
        let mut source = CharSource::new(Failing);
        assert!(source.next_char().is_err());
        assert!(source.is_closed());
        assert_eq!(source.next_char().unwrap(), None);
    }
}

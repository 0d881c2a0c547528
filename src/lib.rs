//! rpal-scanner - lexical scanner for RPAL
//!
//! Turns source text into a stream of classified, line-tagged tokens for a
//! parser to consume. Whitespace and `//` comments come out as
//! [`Kind::Delete`] tokens, which the consumer filters out.
//!
//! ```
//! use rpal_scanner::{tokenize, Kind};
//!
//! let tokens = tokenize("let x = 'hi' in Print x // done");
//! let words: Vec<&str> = tokens
//!     .iter()
//!     .filter(|t| !t.is_deletable())
//!     .map(|t| t.text())
//!     .collect();
//! assert_eq!(words, ["let", "x", "=", "hi", "in", "Print", "x"]);
//! assert_eq!(tokens[6].kind(), Kind::StringLiteral);
//! ```

pub mod charclass;
pub mod config;
pub mod error;
pub mod scanner;
pub mod source;
pub mod token;

pub use config::{Config, IoErrorPolicy, OutputFormat, RecoveryPolicy, ScanOptions};
pub use error::{ConfigError, DriverError, ScanError};
pub use scanner::Scanner;
pub use token::{Kind, Token};

/// Scans all of `text` with [`ScanOptions::compatible`], which never fails.
pub fn tokenize(text: &str) -> Vec<Token> {
    Scanner::with_options(text.as_bytes(), ScanOptions::compatible())
        .filter_map(Result::ok)
        .collect()
}

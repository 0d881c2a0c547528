//! The scanner and its per-kind token builders.
//!
//! - `core` - `Scanner` state, the pull protocol and dispatch
//! - `identifier` - identifiers
//! - `number` - integer literals
//! - `operator` - operator runs and structural punctuation
//! - `comment` - `//` line comments
//! - `string` - quoted string literals
//! - `space` - whitespace runs

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod space;
mod string;

pub use self::core::Scanner;

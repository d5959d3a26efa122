//! magiclog
//!
//! Generates debug log statements from a single line of source code, and
//! rotates existing ones through a cycle of log formats.
//!
//! # Example
//!
//! ```
//! use magiclog::MagicLog;
//!
//! let mut magic = MagicLog::default();
//! let edit = magic.create_or_rotate("var foo = 1;", "javascript", 1);
//! assert_eq!(edit.text(), "console.log('foo:', foo);");
//!
//! let edit = magic.create_or_rotate(edit.text(), "javascript", 1);
//! assert_eq!(edit.text(), "console.info('foo:', foo);");
//! ```
//!
//! # Layout
//!
//! - `frontend`: tokenizer, token utilities, forward parser and rotator
//! - `backends`: statement rendering
//! - `languages`: built-in language profiles
//! - `magic`: the entry point tying them together

#![doc(html_root_url = "https://docs.rs/magiclog")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod backends;
pub mod frontend;
pub mod languages;
pub mod magic;

// Utility modules
pub mod util;

// Re-exports
pub use backends::logger::{LogFormat, LogStatement, Logger, LoggerConfig, LoggerError};
pub use frontend::lexer::{tokenize, LexError, Token, TokenKind, TokenizerConfig};
pub use frontend::parser::{ParseResult, ParseStep, Parser};
pub use frontend::rotator::LogRotator;
pub use frontend::shared::Direction;
pub use magic::{CompiledLanguage, EditKind, LineRequest, LogEdit, MagicLog};
pub use util::config::{ConfigError, Settings};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "magiclog";

//! Line frontend
//!
//! ```text
//! source line --lexer--> tokens --parser--> ParseResult (create)
//!                               \--rotator--> ParseResult (rotate)
//! ```
//!
//! Both paths hand their result to [`crate::backends::logger`].

pub mod lexer;
pub mod parser;
pub mod rotator;
pub mod shared;

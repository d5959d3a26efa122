//! Output backends
//!
//! ```text
//! ParseResult (from parser or rotator)
//!         |
//!         v
//!      Logger + LogFormat
//!         |
//!         v
//!    LogStatement (text + caret)
//! ```

pub mod logger;

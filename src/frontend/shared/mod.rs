//! Shared token-sequence utilities
//!
//! Every parse step and the rotator are built from these primitives:
//! paired-delimiter blocks, expression boundaries, fuzzy multi-token matching
//! and serialization back to source text.

pub mod blocks;
pub mod matching;
pub mod serialize;

pub use blocks::{
    enclosing_opener, expression_bounds, find_block, is_closer, is_opener, CodeBlock, Delimiters,
    BRACKETS, BRACKETS_AND_ANGLES, ANGLES,
};
pub use matching::{match_any, match_text};
pub use serialize::{escape, quote, serialize, serialize_all, DEFAULT_QUOTE};

/// Walking direction over a token sequence, also used as the rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `1` for forward, `-1` for backward
    #[inline]
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

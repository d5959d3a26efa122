//! Paired-delimiter blocks and expression boundaries

use std::ops::Range;

use super::Direction;
use crate::frontend::lexer::Token;

/// Opener/closer pairs a scan treats as nesting delimiters.
pub type Delimiters = &'static [(&'static str, &'static str)];

pub const BRACKETS: Delimiters = &[("(", ")"), ("[", "]"), ("{", "}")];

pub const ANGLES: Delimiters = &[("<", ">")];

/// Brackets plus `<...>` for generic argument lists
pub const BRACKETS_AND_ANGLES: Delimiters = &[("(", ")"), ("[", "]"), ("{", "}"), ("<", ">")];

/// A delimiter-bounded token run, inclusive on both ends.
///
/// When the scan ran off the end of the sequence before the nesting depth
/// returned to zero the block is not `complete`; callers must then leave the
/// construct alone rather than guess a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlock {
    pub start: usize,
    pub end: usize,
    pub complete: bool,
}

impl CodeBlock {
    /// Exclusive range over the whole block
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end + 1
    }

    /// Tokens between the delimiters
    #[inline]
    pub fn inner(&self) -> Range<usize> {
        self.start + 1..self.end
    }
}

#[inline]
pub fn is_opener(
    token: &Token,
    delimiters: Delimiters,
) -> bool {
    delimiters.iter().any(|(open, _)| token.is_symbol(open))
}

#[inline]
pub fn is_closer(
    token: &Token,
    delimiters: Delimiters,
) -> bool {
    delimiters.iter().any(|(_, close)| token.is_symbol(close))
}

#[inline]
fn is_break(token: &Token) -> bool {
    token.is_symbol(",") || token.is_symbol(";")
}

/// Find the block that starts at `index`.
///
/// Walking forward, `index` must sit on an opener; walking backward it must
/// sit on a closer. Only delimiters of the same pair affect the depth.
/// Returns `None` when `index` is not on a suitable delimiter.
pub fn find_block(
    tokens: &[Token],
    index: usize,
    direction: Direction,
    delimiters: Delimiters,
) -> Option<CodeBlock> {
    let token = tokens.get(index)?;

    match direction {
        Direction::Forward => {
            let (open, close) = delimiters.iter().find(|(open, _)| token.is_symbol(open))?;
            let mut depth = 0usize;
            for (i, t) in tokens.iter().enumerate().skip(index) {
                if t.is_symbol(open) {
                    depth += 1;
                } else if t.is_symbol(close) {
                    depth -= 1;
                    if depth == 0 {
                        return Some(CodeBlock {
                            start: index,
                            end: i,
                            complete: true,
                        });
                    }
                }
            }
            Some(CodeBlock {
                start: index,
                end: tokens.len() - 1,
                complete: false,
            })
        }
        Direction::Backward => {
            let (open, close) = delimiters.iter().find(|(_, close)| token.is_symbol(close))?;
            let mut depth = 0usize;
            for i in (0..=index).rev() {
                let t = &tokens[i];
                if t.is_symbol(close) {
                    depth += 1;
                } else if t.is_symbol(open) {
                    depth -= 1;
                    if depth == 0 {
                        return Some(CodeBlock {
                            start: i,
                            end: index,
                            complete: true,
                        });
                    }
                }
            }
            Some(CodeBlock {
                start: 0,
                end: index,
                complete: false,
            })
        }
    }
}

/// Extent of the expression containing `start`, walking in `direction`.
///
/// Stops at a bare `,` or `;`, or at a delimiter that would leave the
/// enclosing block (a closer going forward, an opener going backward).
/// Complete nested blocks are skipped as one unit; an incomplete one ends the
/// expression. Returns `None` when `start` is itself a break token.
pub fn expression_bounds(
    tokens: &[Token],
    start: usize,
    direction: Direction,
    delimiters: Delimiters,
) -> Option<Range<usize>> {
    let first = tokens.get(start)?;
    if is_break(first) {
        return None;
    }

    match direction {
        Direction::Forward => {
            if is_closer(first, delimiters) {
                return None;
            }
            let mut i = start;
            while i < tokens.len() {
                let t = &tokens[i];
                if is_break(t) || is_closer(t, delimiters) {
                    break;
                }
                if is_opener(t, delimiters) {
                    match find_block(tokens, i, Direction::Forward, delimiters) {
                        Some(block) if block.complete => {
                            i = block.end + 1;
                            continue;
                        }
                        _ => break,
                    }
                }
                i += 1;
            }
            (i > start).then_some(start..i)
        }
        Direction::Backward => {
            if is_opener(first, delimiters) {
                return None;
            }
            // one past the earliest token taken so far
            let mut i = start + 1;
            while i > 0 {
                let t = &tokens[i - 1];
                if is_break(t) || is_opener(t, delimiters) {
                    break;
                }
                if is_closer(t, delimiters) {
                    match find_block(tokens, i - 1, Direction::Backward, delimiters) {
                        Some(block) if block.complete => {
                            i = block.start;
                            continue;
                        }
                        _ => break,
                    }
                }
                i -= 1;
            }
            (i <= start).then_some(i..start + 1)
        }
    }
}

/// Index of the innermost unclosed opener before `index`.
pub fn enclosing_opener(
    tokens: &[Token],
    index: usize,
    delimiters: Delimiters,
) -> Option<usize> {
    let mut depth = 0usize;
    for i in (0..index.min(tokens.len())).rev() {
        let t = &tokens[i];
        if is_closer(t, delimiters) {
            depth += 1;
        } else if is_opener(t, delimiters) {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
        }
    }
    None
}

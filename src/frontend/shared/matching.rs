//! Fuzzy multi-token string matching
//!
//! A configured string such as `console.log(` spans several tokens. Tokens are
//! serialized one at a time and appended (or prepended, walking backward) to a
//! running text that must stay a prefix (suffix) of the target.

use super::serialize::serialize;
use super::Direction;
use crate::frontend::lexer::Token;

/// Match `target` against the tokens starting at `index`.
///
/// Walking backward, `index` is the last token of the candidate run. Returns
/// the number of tokens that spell `target` exactly, or `None` as soon as the
/// accumulated text stops being a prefix (suffix) of it. An empty target
/// matches zero tokens.
pub fn match_text(
    tokens: &[Token],
    index: usize,
    direction: Direction,
    target: &str,
    quote_char: char,
) -> Option<usize> {
    if target.is_empty() {
        return Some(0);
    }
    if index >= tokens.len() {
        return None;
    }

    let mut text = String::new();
    let mut count = 0;

    match direction {
        Direction::Forward => {
            for token in &tokens[index..] {
                text.push_str(&serialize(token, quote_char));
                count += 1;
                if text == target {
                    return Some(count);
                }
                if !target.starts_with(&text) {
                    return None;
                }
            }
        }
        Direction::Backward => {
            for token in tokens[..=index].iter().rev() {
                text.insert_str(0, &serialize(token, quote_char));
                count += 1;
                if text == target {
                    return Some(count);
                }
                if !target.ends_with(&text) {
                    return None;
                }
            }
        }
    }

    None
}

/// First of `targets` that matches at `index`.
pub fn match_any(
    tokens: &[Token],
    index: usize,
    direction: Direction,
    targets: &[&str],
    quote_char: char,
) -> Option<usize> {
    targets
        .iter()
        .filter(|target| !target.is_empty())
        .find_map(|target| match_text(tokens, index, direction, target, quote_char))
}

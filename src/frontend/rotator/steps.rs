//! Rotation steps

use std::ops::Range;

use crate::backends::logger::{key_for, LogFormat, LoggerConfig};
use crate::frontend::lexer::{Token, TokenKind};
use crate::frontend::parser::ParseResult;
use crate::frontend::shared::{
    find_block, is_opener, match_text, serialize_all, Direction, BRACKETS_AND_ANGLES,
};

use super::RotationStep;

/// `range` without leading and trailing whitespace tokens
fn trimmed(
    tokens: &[Token],
    range: Range<usize>,
) -> Range<usize> {
    let mut start = range.start;
    let mut end = range.end;
    while start < end && tokens[start].is_whitespace() {
        start += 1;
    }
    while end > start && tokens[end - 1].is_whitespace() {
        end -= 1;
    }
    start..end
}

/// Length of the separator run at `index`, if one starts there.
///
/// The separator is matched as configured first, then without its padding.
/// A blank separator matches any run of whitespace tokens.
fn separator_at(
    tokens: &[Token],
    index: usize,
    separator: &str,
    quote_char: char,
) -> Option<usize> {
    let bare = separator.trim();
    if bare.is_empty() {
        let run = tokens[index..].iter().take_while(|t| t.is_whitespace()).count();
        return (!separator.is_empty() && run > 0).then_some(run);
    }
    match_text(tokens, index, Direction::Forward, separator, quote_char)
        .filter(|&n| n > 0)
        .or_else(|| match_text(tokens, index, Direction::Forward, bare, quote_char))
        .filter(|&n| n > 0)
}

/// Split on `separator`, treating complete bracket and angle blocks as atomic.
///
/// Always yields at least one (possibly empty) range.
fn segments(
    tokens: &[Token],
    separator: &str,
    quote_char: char,
) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        if is_opener(&tokens[i], BRACKETS_AND_ANGLES) {
            if let Some(block) = find_block(tokens, i, Direction::Forward, BRACKETS_AND_ANGLES) {
                if block.complete {
                    i = block.end + 1;
                    continue;
                }
            }
        }
        if let Some(len) = separator_at(tokens, i, separator, quote_char) {
            if start == i && separator.trim().is_empty() {
                i += len;
                start = i;
                continue;
            }
            ranges.push(start..i);
            i += len;
            start = i;
            continue;
        }
        i += 1;
    }

    ranges.push(start..tokens.len());
    ranges
}

/// The part of `item` inside the format's identifier prefix and suffix.
///
/// Both ends must match (an unconfigured end always does); otherwise the
/// item is returned whole.
fn unwrapped(
    item: &[Token],
    format: &LogFormat,
) -> Range<usize> {
    if item.is_empty() {
        return 0..0;
    }
    let q = format.quote_character;
    let front = match_text(item, 0, Direction::Forward, &format.identifier_prefix, q);
    let back = match_text(item, item.len() - 1, Direction::Backward, &format.identifier_suffix, q);

    match (front, back) {
        (Some(front), Some(back)) if front + back <= item.len() => {
            trimmed(item, front..item.len() - back)
        }
        _ => 0..item.len(),
    }
}

/// Is segment `k` a `'key:'` string the logger generated for segment `k + 1`?
fn is_key(
    tokens: &[Token],
    segments: &[Range<usize>],
    k: usize,
    format: &LogFormat,
) -> bool {
    let [token] = &tokens[trimmed(tokens, segments[k].clone())] else {
        return false;
    };
    let key = token.value.trim();
    if token.kind != TokenKind::String || !key.ends_with(':') {
        return false;
    }
    let Some(next) = segments.get(k + 1) else {
        return false;
    };

    let value = &tokens[trimmed(tokens, next.clone())];
    let value = &value[unwrapped(value, format)];
    !value.is_empty() && key_for(&serialize_all(value, format.quote_character)) == key
}

/// Find the first format whose prefix starts the line and consume it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectFormat;

impl RotationStep for DetectFormat {
    fn name(&self) -> &'static str {
        "detect-format"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
        config: &LoggerConfig,
    ) -> Option<()> {
        let tokens = &result.tokens;
        let start = tokens.iter().position(|t| !t.is_whitespace())?;
        let (format, len) = config
            .iter()
            .filter(|format| !format.log_prefix.is_empty())
            .find_map(|format| {
                match_text(tokens, start, Direction::Forward, &format.log_prefix, format.quote_character)
                    .map(|len| (format, len))
            })?;

        result.log_format = Some(format.clone());
        result.tokens.drain(..start + len);
        Some(())
    }
}

/// Remove the detected format's suffix; a line without it is not rotatable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripSuffix;

impl RotationStep for StripSuffix {
    fn name(&self) -> &'static str {
        "strip-suffix"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
        _config: &LoggerConfig,
    ) -> Option<()> {
        let format = result.log_format.as_ref()?;
        let tokens = &mut result.tokens;
        let Some(last) = tokens.iter().rposition(|t| !t.is_whitespace()) else {
            return format.log_suffix.is_empty().then_some(());
        };
        let len = match_text(tokens, last, Direction::Backward, &format.log_suffix, format.quote_character)?;
        tokens.truncate(last + 1 - len);
        Some(())
    }
}

/// Lift a leading string that is not a generated key into the log id.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoverLogId;

impl RotationStep for RecoverLogId {
    fn name(&self) -> &'static str {
        "recover-log-id"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
        _config: &LoggerConfig,
    ) -> Option<()> {
        let format = result.log_format.as_ref()?;
        let tokens = &result.tokens;
        let segments = segments(tokens, &format.parameter_separator, format.quote_character);

        let first = trimmed(tokens, segments[0].clone());
        if first.len() != 1 || tokens[first.start].kind != TokenKind::String || is_key(tokens, &segments, 0, format) {
            return Some(());
        }

        let value = tokens[first.start].value.trim();
        let value = value.strip_suffix(':').unwrap_or(value).trim();
        result.log_id = Some(Token::string(value));
        result.tokens.remove(first.start);
        Some(())
    }
}

/// Remove the `'name:'` strings the logger put before each value.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripItemKeys;

impl RotationStep for StripItemKeys {
    fn name(&self) -> &'static str {
        "strip-item-keys"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
        _config: &LoggerConfig,
    ) -> Option<()> {
        let format = result.log_format.as_ref()?;
        let tokens = &result.tokens;
        let segments = segments(tokens, &format.parameter_separator, format.quote_character);

        let keys: Vec<usize> = (0..segments.len())
            .filter(|&k| is_key(tokens, &segments, k, format))
            .map(|k| trimmed(tokens, segments[k].clone()).start)
            .collect();

        for index in keys.into_iter().rev() {
            result.tokens.remove(index);
        }
        Some(())
    }
}

/// Split what is left into items at each top-level separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentItems;

impl RotationStep for SegmentItems {
    fn name(&self) -> &'static str {
        "segment-items"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
        _config: &LoggerConfig,
    ) -> Option<()> {
        let format = result.log_format.as_ref()?;
        let tokens = std::mem::take(&mut result.tokens);

        result.log_items = segments(&tokens, &format.parameter_separator, format.quote_character)
            .into_iter()
            .map(|range| tokens[trimmed(&tokens, range)].to_vec())
            .collect();
        Some(())
    }
}

/// Strip the identifier prefix and suffix from every item.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwrapItems;

impl RotationStep for UnwrapItems {
    fn name(&self) -> &'static str {
        "unwrap-items"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
        _config: &LoggerConfig,
    ) -> Option<()> {
        let format = result.log_format.as_ref()?;
        for item in &mut result.log_items {
            let range = unwrapped(item, format);
            if range.len() != item.len() {
                *item = item[range].to_vec();
            }
        }
        Some(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PruneEmptyItems;

impl RotationStep for PruneEmptyItems {
    fn name(&self) -> &'static str {
        "prune-empty-items"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
        _config: &LoggerConfig,
    ) -> Option<()> {
        result.log_items.retain(|item| !item.is_empty());
        Some(())
    }
}

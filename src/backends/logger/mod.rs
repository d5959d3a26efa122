//! Log statement rendering
//!
//! Turns a [`ParseResult`] into source text such as
//! `console.log('foo:', foo);` according to a [`LogFormat`].

pub mod format;

pub use format::{LogFormat, LoggerConfig};

use std::fmt;

use crate::frontend::lexer::{Token, TokenKind};
use crate::frontend::parser::ParseResult;
use crate::frontend::shared::{quote, serialize_all};

/// Keys longer than this many characters are abbreviated.
pub const KEY_ABBREVIATION_THRESHOLD: usize = 20;

/// Characters kept from each end of an abbreviated key
const KEY_FRAGMENT_LEN: usize = 8;

/// Logger error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggerError {
    #[error("No log format given: bind one to the logger or set it on the parse result")]
    MissingFormat,
}

/// Shorten `text` to `head..tail` when it is longer than the threshold.
pub fn abbreviate(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= KEY_ABBREVIATION_THRESHOLD {
        return text.to_string();
    }
    let head: String = chars[..KEY_FRAGMENT_LEN].iter().collect();
    let tail: String = chars[chars.len() - KEY_FRAGMENT_LEN..].iter().collect();
    format!("{head}..{tail}")
}

/// The label generated for a value whose source text is `text`, colon included.
///
/// Padding from `insert_spaces` is not part of the key.
pub fn key_for(text: &str) -> String {
    format!("{}:", abbreviate(text))
}

/// Items made only of literals get no key
fn is_literal(item: &[Token]) -> bool {
    !item.iter().any(Token::is_named)
}

/// Text an item is compared by when deciding whether the log id repeats it
fn plain_text(
    item: &[Token],
    quote_char: char,
) -> String {
    match item {
        [single] => single.value.clone(),
        _ => serialize_all(item, quote_char),
    }
}

/// A rendered statement and the cursor position inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStatement {
    pub text: String,
    /// Character index right before the format's log suffix
    pub caret: usize,
}

impl fmt::Display for LogStatement {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders parse results with a bound format, or with the format the rotator
/// recorded on the result.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    format: Option<LogFormat>,
}

impl Logger {
    /// A logger that relies on `ParseResult::log_format`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: LogFormat) -> Self {
        Self {
            format: Some(format),
        }
    }

    pub fn format(&self) -> Option<&LogFormat> {
        self.format.as_ref()
    }

    /// Render with the bound format, falling back to the one on `result`.
    pub fn render(
        &self,
        result: &ParseResult,
    ) -> Result<LogStatement, LoggerError> {
        let format = self
            .format
            .as_ref()
            .or(result.log_format.as_ref())
            .ok_or(LoggerError::MissingFormat)?;
        Ok(Self::render_with(result, format))
    }

    /// Render `result` with an explicit format.
    pub fn render_with(
        result: &ParseResult,
        format: &LogFormat,
    ) -> LogStatement {
        let params = Self::params(result, format);

        let mut text = String::with_capacity(
            format.log_prefix.len() + format.log_suffix.len() + params.iter().map(String::len).sum::<usize>(),
        );
        text.push_str(&format.log_prefix);
        text.push_str(&params.join(&format.parameter_separator));
        let caret = text.chars().count();
        text.push_str(&format.log_suffix);

        LogStatement { text, caret }
    }

    fn params(
        result: &ParseResult,
        format: &LogFormat,
    ) -> Vec<String> {
        let q = format.quote_character;
        let mut params = Vec::new();

        if let Some(id) = &result.log_id {
            let repeated = result
                .log_items
                .first()
                .is_some_and(|first| plain_text(first, q) == id.value);
            if !repeated {
                params.push(quote(&id.value, q));
            }
        }

        for item in result.log_items.iter().filter(|item| !item.is_empty()) {
            let text = serialize_all(item, q);
            if is_literal(item) {
                params.push(text);
                continue;
            }

            let lead = if format.insert_spaces && !params.is_empty() { " " } else { "" };
            let trail = if format.insert_spaces { " " } else { "" };
            params.push(quote(&format!("{lead}{}{trail}", key_for(&text)), q));
            params.push(format!(
                "{}{text}{}",
                format.identifier_prefix, format.identifier_suffix
            ));
        }

        params
    }
}

/// Log id used when a line cannot be tokenized: `L<line>`
pub fn placeholder(line_number: usize) -> ParseResult {
    ParseResult {
        log_id: Some(Token::new(TokenKind::String, format!("L{line_number}"))),
        ..ParseResult::default()
    }
}

#[cfg(test)]
mod tests;

//! Token serialization back to source-like text

use crate::frontend::lexer::{Token, TokenKind};

/// Quote used when a parse step has to render a string before any log format is known.
pub const DEFAULT_QUOTE: char = '\'';

/// Escape every occurrence of `quote` in `text` with a backslash.
pub fn escape(
    text: &str,
    quote: char,
) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render `text` as a string literal delimited by `quote`.
pub fn quote(
    text: &str,
    quote: char,
) -> String {
    format!("{quote}{}{quote}", escape(text, quote))
}

/// Render one token. Strings are re-quoted with `quote_char`, everything else is raw.
pub fn serialize(
    token: &Token,
    quote_char: char,
) -> String {
    match token.kind {
        TokenKind::String => quote(&token.value, quote_char),
        _ => token.value.clone(),
    }
}

pub fn serialize_all(
    tokens: &[Token],
    quote_char: char,
) -> String {
    tokens.iter().map(|t| serialize(t, quote_char)).collect()
}

//! Picking the log id and the items

use crate::frontend::lexer::TokenKind;
use crate::frontend::parser::{ParseResult, ParseStep};

/// Choose the token that names the statement.
///
/// First control-flow keyword from `interesting`, otherwise the first
/// identifier, otherwise the first string. The token stays in the stream.
#[derive(Debug, Clone)]
pub struct SelectLogId {
    interesting: &'static [&'static str],
}

impl SelectLogId {
    pub fn new(interesting: &'static [&'static str]) -> Self {
        Self { interesting }
    }
}

impl ParseStep for SelectLogId {
    fn name(&self) -> &'static str {
        "select-log-id"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &result.tokens;
        let found = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Keyword && self.interesting.contains(&t.value.as_str()))
            .or_else(|| tokens.iter().find(|t| t.kind == TokenKind::Identifier))
            .or_else(|| tokens.iter().find(|t| t.kind == TokenKind::String));

        if let Some(token) = found {
            result.log_id = Some(token.clone());
        }
    }
}

/// One log item per remaining token.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectItems;

impl ParseStep for CollectItems {
    fn name(&self) -> &'static str {
        "collect-items"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        result.log_items = result.tokens.iter().map(|t| vec![t.clone()]).collect();
    }
}

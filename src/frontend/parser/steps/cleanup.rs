//! Token stripping

use std::collections::HashSet;

use crate::frontend::lexer::TokenKind;
use crate::frontend::parser::{ParseResult, ParseStep};

/// Drop every token of the listed kinds.
#[derive(Debug, Clone)]
pub struct RemoveKinds {
    name: &'static str,
    kinds: &'static [TokenKind],
}

impl RemoveKinds {
    pub fn new(
        name: &'static str,
        kinds: &'static [TokenKind],
    ) -> Self {
        Self { name, kinds }
    }

    pub fn comments() -> Self {
        Self::new("remove-comments", &[TokenKind::Comment])
    }

    pub fn whitespace() -> Self {
        Self::new("remove-whitespace", &[TokenKind::Whitespace])
    }

    /// Everything that is not a value: literals, keywords, punctuation, operators
    pub fn non_values() -> Self {
        Self::new(
            "remove-non-values",
            &[
                TokenKind::Keyword,
                TokenKind::Number,
                TokenKind::String,
                TokenKind::Punctuation,
                TokenKind::Operator,
                TokenKind::Comment,
                TokenKind::Whitespace,
            ],
        )
    }
}

impl ParseStep for RemoveKinds {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        result.tokens.retain(|t| !self.kinds.contains(&t.kind));
    }
}

/// Keep only the first token for each (kind, value) pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveDuplicates;

impl ParseStep for RemoveDuplicates {
    fn name(&self) -> &'static str {
        "remove-duplicates"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let mut seen = HashSet::new();
        result
            .tokens
            .retain(|t| seen.insert((t.kind, t.value.clone())));
    }
}

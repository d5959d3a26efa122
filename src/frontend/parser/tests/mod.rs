//! Parser tests module


use crate::frontend::lexer::{tokenize, Token, TokenizerConfig};
use crate::frontend::parser::{ParseResult, ParseStep};

/// Tokenize without whitespace, the way steps see a line after cleanup
pub(crate) fn lex(
    source: &str,
    grammar: &TokenizerConfig,
) -> Vec<Token> {
    let mut tokens = tokenize(source, grammar).unwrap();
    tokens.retain(|t| !t.is_whitespace());
    tokens
}

/// Apply a single step and return the values of the remaining tokens
pub(crate) fn run(
    step: &dyn ParseStep,
    source: &str,
    grammar: &TokenizerConfig,
) -> Vec<String> {
    let mut result = ParseResult::new(lex(source, grammar));
    step.apply(&mut result);
    result.tokens.into_iter().map(|t| t.value).collect()
}

//! Forward parser
//!
//! A [`Parser`] is nothing but an ordered list of [`ParseStep`]s. Each step
//! mutates the shared [`ParseResult`] in place and sees what the previous step
//! left behind; the language lives entirely in which steps are listed and in
//! what order.

pub mod steps;

use tracing::trace;

use crate::backends::logger::LogFormat;
use crate::frontend::lexer::Token;

/// Upper bound on scanning loops inside a single step.
pub const MAX_ITERATIONS: usize = 1000;

/// Accumulator threaded through a step pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    /// Tokens still in play
    pub tokens: Vec<Token>,
    /// Groups of tokens to print, one group per logged value
    pub log_items: Vec<Vec<Token>>,
    /// Headline label of the statement
    pub log_id: Option<Token>,
    /// Format recognised by the rotator
    pub log_format: Option<LogFormat>,
}

impl ParseResult {
    /// Start a new result around `tokens`
    #[inline]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }
}

/// One order-dependent rewrite over a [`ParseResult`].
///
/// A step that cannot find its pattern leaves the result untouched.
pub trait ParseStep: Send + Sync {
    /// Short name used in traces
    fn name(&self) -> &'static str;

    fn apply(
        &self,
        result: &mut ParseResult,
    );
}

/// Ordered step list
pub type ParseSequence = Vec<Box<dyn ParseStep>>;

/// A compiled step pipeline
pub struct Parser {
    steps: ParseSequence,
}

impl std::fmt::Debug for Parser {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("steps", &self.step_names().collect::<Vec<_>>())
            .finish()
    }
}

impl Parser {
    pub fn new(steps: ParseSequence) -> Self {
        Self { steps }
    }

    /// Run every step, in order, over a fresh result.
    pub fn parse(
        &self,
        tokens: Vec<Token>,
    ) -> ParseResult {
        let mut result = ParseResult::new(tokens);
        for step in &self.steps {
            step.apply(&mut result);
            trace!(
                step = step.name(),
                tokens = result.tokens.len(),
                items = result.log_items.len(),
                "parse step applied"
            );
        }
        result
    }

    pub fn step_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|step| step.name())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests;

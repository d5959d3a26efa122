//! Log rotator
//!
//! The reverse of the forward parser: recognise a statement the
//! [`Logger`](crate::backends::logger::Logger) produced, recover its log id
//! and items, and render it again with the next (or previous) format of the
//! rotation list.
//!
//! The rotator's steps are conservative. Where the forward parser drops
//! anything that is not worth logging, these steps only peel off what the
//! logger added, so that rotating never loses a value.

mod steps;

pub use steps::{DetectFormat, PruneEmptyItems, RecoverLogId, SegmentItems, StripItemKeys, StripSuffix, UnwrapItems};

use tracing::{debug, trace};

use crate::backends::logger::{LogStatement, Logger, LoggerConfig};
use crate::frontend::lexer::Token;
use crate::frontend::parser::ParseResult;
use crate::frontend::shared::Direction;

/// One step of the rotation pipeline.
///
/// Returning `None` aborts the rotation: the tokens are not a log statement
/// produced under this configuration. That is the normal answer for ordinary
/// source lines and not an error.
pub trait RotationStep: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(
        &self,
        result: &mut ParseResult,
        config: &LoggerConfig,
    ) -> Option<()>;
}

/// Recognises and rotates statements for one [`LoggerConfig`].
pub struct LogRotator {
    config: LoggerConfig,
    steps: Vec<Box<dyn RotationStep>>,
}

impl std::fmt::Debug for LogRotator {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("LogRotator")
            .field("config", &self.config)
            .field("steps", &self.steps.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl LogRotator {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            steps: vec![
                Box::new(DetectFormat),
                Box::new(StripSuffix),
                Box::new(RecoverLogId),
                Box::new(StripItemKeys),
                Box::new(SegmentItems),
                Box::new(UnwrapItems),
                Box::new(PruneEmptyItems),
            ],
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Run the rotation steps, yielding the recovered id, items and format.
    pub fn recover(
        &self,
        tokens: Vec<Token>,
    ) -> Option<ParseResult> {
        let mut result = ParseResult::new(tokens);
        for step in &self.steps {
            if step.apply(&mut result, &self.config).is_none() {
                debug!(step = step.name(), "not a recognised log statement");
                return None;
            }
            trace!(step = step.name(), tokens = result.tokens.len(), "rotation step applied");
        }
        Some(result)
    }

    /// Render `tokens` with the format one step away in `direction`.
    pub fn rotate(
        &self,
        tokens: Vec<Token>,
        direction: Direction,
    ) -> Option<LogStatement> {
        let result = self.recover(tokens)?;
        let current = result
            .log_format
            .as_ref()
            .and_then(|format| self.config.index_of(format))?;
        let next = self.config.rotate(current, direction);
        debug!(from = current, to = next, %direction, "rotating log statement");

        let format = self.config.get(next)?;
        Some(Logger::render_with(&result, format))
    }
}

#[cfg(test)]
mod tests;

//! Top-level entry point
//!
//! [`MagicLog`] ties the pieces together for one line at a time:
//!
//! ```text
//! line ──► tokenize ──► LogRotator ──► re-rendered statement     (rotate)
//!                  └──► Parser ──► Logger ──► new statement      (create)
//! ```
//!
//! Languages are compiled on first use and memoized per resolved language id.
//! The table is owned by the entry point and cleared with [`MagicLog::reset`].

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::backends::logger::{placeholder, LogStatement, Logger, LoggerConfig};
use crate::frontend::lexer::tokenize;
use crate::frontend::rotator::LogRotator;
use crate::frontend::shared::Direction;
use crate::languages::{builtin, canonical, javascript, LanguageProfile};
use crate::util::cache::MemoTable;
use crate::util::config::Settings;

/// Compiled languages kept at most
const CACHE_SIZE: usize = 32;

/// A language profile together with the rotation list in effect for it.
#[derive(Debug)]
pub struct CompiledLanguage {
    pub profile: LanguageProfile,
    pub rotator: LogRotator,
}

impl CompiledLanguage {
    /// The effective rotation list: a valid override, or the built-in one
    pub fn logger_config(&self) -> &LoggerConfig {
        self.rotator.config()
    }

    fn create(
        &self,
        text: &str,
        line_number: usize,
    ) -> LogEdit {
        let format = self.logger_config().first();
        let (result, kind) = match tokenize(text.trim(), &self.profile.grammar) {
            Ok(tokens) => (self.profile.parser.parse(tokens), EditKind::Created),
            Err(err) => {
                warn!(line = line_number, %err, "falling back to a placeholder log id");
                (placeholder(line_number), EditKind::Fallback)
            }
        };
        LogEdit {
            statement: Logger::render_with(&result, format),
            kind,
        }
    }

    fn rotate(
        &self,
        text: &str,
        direction: Direction,
    ) -> Option<LogEdit> {
        let tokens = match tokenize(text.trim(), &self.profile.grammar) {
            Ok(tokens) => tokens,
            Err(err) => {
                debug!(%err, "line cannot be rotated");
                return None;
            }
        };
        let statement = self.rotator.rotate(tokens, direction)?;
        Some(LogEdit {
            statement,
            kind: EditKind::Rotated,
        })
    }

    fn create_or_rotate(
        &self,
        text: &str,
        line_number: usize,
    ) -> LogEdit {
        self.rotate(text, Direction::Forward)
            .unwrap_or_else(|| self.create(text, line_number))
    }
}

/// One line handed to [`MagicLog::process_batch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRequest {
    pub text: String,
    pub language: String,
    /// Used for the placeholder label when the line cannot be tokenized
    pub line_number: usize,
}

impl LineRequest {
    pub fn new(
        text: impl Into<String>,
        language: impl Into<String>,
        line_number: usize,
    ) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            line_number,
        }
    }
}

/// How a [`LogEdit`] was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// A new statement built from the line
    Created,
    /// An existing statement moved to another format
    Rotated,
    /// The line could not be tokenized; the statement logs `L<line>`
    Fallback,
}

/// The text to put in place of (or after) a line, and where the cursor goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEdit {
    pub statement: LogStatement,
    pub kind: EditKind,
}

impl LogEdit {
    #[inline]
    pub fn text(&self) -> &str {
        &self.statement.text
    }

    #[inline]
    pub fn caret(&self) -> usize {
        self.statement.caret
    }
}

/// Creates and rotates log statements for any configured language.
#[derive(Debug)]
pub struct MagicLog {
    settings: Settings,
    cache: MemoTable<String, Arc<CompiledLanguage>>,
}

impl Default for MagicLog {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl MagicLog {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            cache: MemoTable::new(CACHE_SIZE),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Built-in id `language` resolves to: the language itself, then the
    /// configured default, then the baseline.
    pub fn resolve(
        &self,
        language: &str,
    ) -> &'static str {
        canonical(language)
            .or_else(|| canonical(&self.settings.default_language))
            .unwrap_or(crate::languages::BASELINE)
    }

    /// The compiled language for `language`, built on first use.
    pub fn compiled(
        &mut self,
        language: &str,
    ) -> Arc<CompiledLanguage> {
        let id = self.resolve(language);
        let settings = &self.settings;
        Arc::clone(
            self.cache
                .get_or_insert_with(id.to_string(), || Arc::new(compile(settings, id))),
        )
    }

    /// Build a new statement for `line`.
    pub fn create(
        &mut self,
        line: &str,
        language: &str,
        line_number: usize,
    ) -> LogEdit {
        self.compiled(language).create(line, line_number)
    }

    /// Rotate `line` one format in `direction`; `None` when it is not a
    /// statement of the language's rotation list.
    pub fn rotate(
        &mut self,
        line: &str,
        language: &str,
        direction: Direction,
    ) -> Option<LogEdit> {
        self.compiled(language).rotate(line, direction)
    }

    /// Rotate forward if `line` already is a log statement, otherwise create one.
    pub fn create_or_rotate(
        &mut self,
        line: &str,
        language: &str,
        line_number: usize,
    ) -> LogEdit {
        self.compiled(language).create_or_rotate(line, line_number)
    }

    /// Whether `line` starts with the prefix of any format of the language.
    ///
    /// Only the prefix is looked at; the line is not tokenized.
    pub fn is_log_statement(
        &mut self,
        line: &str,
        language: &str,
    ) -> bool {
        self.compiled(language)
            .logger_config()
            .iter()
            .any(|format| format.matches_line(line))
    }

    /// Run [`create_or_rotate`](Self::create_or_rotate) over many lines.
    ///
    /// Languages are compiled up front; the lines are then handled in
    /// parallel. Edits come back in request order.
    pub fn process_batch(
        &mut self,
        requests: &[LineRequest],
    ) -> Vec<LogEdit> {
        let languages: Vec<Arc<CompiledLanguage>> = requests
            .iter()
            .map(|request| self.compiled(&request.language))
            .collect();

        requests
            .par_iter()
            .zip(languages.par_iter())
            .map(|(request, language)| language.create_or_rotate(&request.text, request.line_number))
            .collect()
    }

    /// Drop every compiled language
    pub fn reset(&mut self) {
        debug!(languages = self.cache.len(), "resetting language cache");
        self.cache.clear();
    }

    /// Number of languages compiled so far
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

fn compile(
    settings: &Settings,
    id: &'static str,
) -> CompiledLanguage {
    debug!(language = id, "compiling language");
    let profile = builtin(id).unwrap_or_else(javascript::profile);

    let logger_config = match settings.logger_override(id) {
        Ok(Some(config)) => config,
        Ok(None) => profile.logger_config.clone(),
        Err(err) => {
            warn!(language = id, %err, "invalid log formats, using the built-in ones");
            profile.logger_config.clone()
        }
    };

    CompiledLanguage {
        rotator: LogRotator::new(logger_config),
        profile,
    }
}

//! Log formats and rotation lists

use serde::{Deserialize, Serialize};

use crate::frontend::shared::Direction;

/// One rendering template for a log call.
///
/// A statement renders as `log_prefix + params.join(parameter_separator) +
/// log_suffix`; logged values are wrapped in `identifier_prefix` and
/// `identifier_suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFormat {
    pub log_prefix: String,
    pub parameter_separator: String,
    pub identifier_prefix: String,
    pub identifier_suffix: String,
    pub log_suffix: String,
    pub quote_character: char,
    /// Pad generated keys with spaces (for `+` concatenation)
    pub insert_spaces: bool,
}

impl LogFormat {
    pub fn new(
        log_prefix: impl Into<String>,
        parameter_separator: impl Into<String>,
        log_suffix: impl Into<String>,
        quote_character: char,
    ) -> Self {
        Self {
            log_prefix: log_prefix.into(),
            parameter_separator: parameter_separator.into(),
            identifier_prefix: String::new(),
            identifier_suffix: String::new(),
            log_suffix: log_suffix.into(),
            quote_character,
            insert_spaces: false,
        }
    }

    /// Wrap every logged value, e.g. in `String(` and `)`
    pub fn with_identifier_wrap(
        mut self,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        self.identifier_prefix = prefix.into();
        self.identifier_suffix = suffix.into();
        self
    }

    pub fn with_insert_spaces(
        mut self,
        insert_spaces: bool,
    ) -> Self {
        self.insert_spaces = insert_spaces;
        self
    }

    /// Does `line` start with this format's prefix, ignoring indentation?
    pub fn matches_line(
        &self,
        line: &str,
    ) -> bool {
        !self.log_prefix.is_empty() && line.trim_start().starts_with(&self.log_prefix)
    }
}

/// Ordered, non-empty rotation cycle of formats.
///
/// The first format is the one new statements are created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LoggerConfig {
    formats: Vec<LogFormat>,
}

impl LoggerConfig {
    /// Returns `None` for an empty list.
    pub fn new(formats: Vec<LogFormat>) -> Option<Self> {
        (!formats.is_empty()).then_some(Self { formats })
    }

    pub fn single(format: LogFormat) -> Self {
        Self {
            formats: vec![format],
        }
    }

    /// `first` followed by `rest`
    pub fn cycle(
        first: LogFormat,
        rest: impl IntoIterator<Item = LogFormat>,
    ) -> Self {
        let mut formats = vec![first];
        formats.extend(rest);
        Self { formats }
    }

    /// The format new statements use
    #[inline]
    pub fn first(&self) -> &LogFormat {
        &self.formats[0]
    }

    #[inline]
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&LogFormat> {
        self.formats.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Always false; kept for the `len` convention.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogFormat> {
        self.formats.iter()
    }

    pub fn index_of(
        &self,
        format: &LogFormat,
    ) -> Option<usize> {
        self.formats.iter().position(|f| f == format)
    }

    /// Index one step away from `index`, wrapping in both directions.
    pub fn rotate(
        &self,
        index: usize,
        direction: Direction,
    ) -> usize {
        let len = self.formats.len() as isize;
        (index as isize + direction.step()).rem_euclid(len) as usize
    }
}

impl<'a> IntoIterator for &'a LoggerConfig {
    type Item = &'a LogFormat;
    type IntoIter = std::slice::Iter<'a, LogFormat>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.iter()
    }
}

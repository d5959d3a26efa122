//! Field-by-field validation of log format overrides

use serde_json::Value;

use super::ConfigError;
use crate::backends::logger::{LogFormat, LoggerConfig};

/// Text fields of a format record, in the order they are checked
const STRING_FIELDS: &[&str] = &[
    "logPrefix",
    "parameterSeparator",
    "identifierPrefix",
    "identifierSuffix",
    "logSuffix",
];

const CHAR_FIELDS: &[&str] = &["quoteCharacter"];

const BOOL_FIELDS: &[&str] = &["insertSpaces"];

fn field<'a>(
    record: &'a serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, ConfigError> {
    record
        .get(field)
        .ok_or(ConfigError::MissingField { index, field })
}

fn string_field(
    record: &serde_json::Map<String, Value>,
    index: usize,
    name: &'static str,
) -> Result<String, ConfigError> {
    field(record, index, name)?
        .as_str()
        .map(str::to_string)
        .ok_or(ConfigError::WrongType {
            index,
            field: name,
            expected: "a string",
        })
}

fn validate_format(
    value: &Value,
    index: usize,
) -> Result<LogFormat, ConfigError> {
    let record = value.as_object().ok_or(ConfigError::NotAnObject { index })?;

    let [log_prefix, parameter_separator, identifier_prefix, identifier_suffix, log_suffix] = [
        string_field(record, index, STRING_FIELDS[0])?,
        string_field(record, index, STRING_FIELDS[1])?,
        string_field(record, index, STRING_FIELDS[2])?,
        string_field(record, index, STRING_FIELDS[3])?,
        string_field(record, index, STRING_FIELDS[4])?,
    ];

    let quote = string_field(record, index, CHAR_FIELDS[0])?;
    let mut chars = quote.chars();
    let quote_character = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(ConfigError::InvalidQuote { index, found: quote }),
    };

    let insert_spaces = field(record, index, BOOL_FIELDS[0])?
        .as_bool()
        .ok_or(ConfigError::WrongType {
            index,
            field: BOOL_FIELDS[0],
            expected: "a boolean",
        })?;

    Ok(LogFormat {
        log_prefix,
        parameter_separator,
        identifier_prefix,
        identifier_suffix,
        log_suffix,
        quote_character,
        insert_spaces,
    })
}

impl LoggerConfig {
    /// Validate a user-supplied list of format records.
    ///
    /// Every field of every record must be present and correctly typed; the
    /// first violation is returned.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let records = value.as_array().ok_or(ConfigError::NotAnArray)?;
        let formats = records
            .iter()
            .enumerate()
            .map(|(index, record)| validate_format(record, index))
            .collect::<Result<Vec<_>, _>>()?;
        LoggerConfig::new(formats).ok_or(ConfigError::EmptyFormats)
    }
}

//! Built-in language profiles
//!
//! A profile bundles the three things a language contributes: its grammar
//! table, its forward-parse step sequence and its default rotation list.
//! Profiles are resolved by id through [`canonical`], which also folds the
//! editor aliases (`jsx`, `tsx`, `cs`, ...) onto the built-in ids.

pub mod csharp;
pub mod java;
pub mod javascript;
pub mod python;
pub mod typescript;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::backends::logger::LoggerConfig;
use crate::frontend::lexer::TokenizerConfig;
use crate::frontend::parser::Parser;

/// The language every lookup ends at when nothing else matches
pub const BASELINE: &str = "javascript";

/// Built-in language ids
pub const LANGUAGES: &[&str] = &["javascript", "typescript", "java", "csharp", "python"];

/// Editor language ids that map onto a built-in profile
pub const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("javascriptreact", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("typescriptreact", "typescript"),
    ("cs", "csharp"),
    ("c#", "csharp"),
    ("py", "python"),
];

/// Numeric literals of the C family: hex, binary, decimals, exponents and
/// type suffixes (`10UL`, `1.5f`, `2m`)
pub(crate) static C_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d[\d_]*)?|\.\d[\d_]*(?:[eE][+-]?\d[\d_]*)?)[uUlLfFdDmM]*")
        .expect("valid number pattern")
});

/// Everything one language needs to create and rotate statements.
#[derive(Debug)]
pub struct LanguageProfile {
    pub id: &'static str,
    pub grammar: TokenizerConfig,
    pub parser: Parser,
    /// Built-in rotation list; the first entry is used for new statements
    pub logger_config: LoggerConfig,
}

/// Resolve `id` (case-insensitive, aliases allowed) to a built-in id.
pub fn canonical(id: &str) -> Option<&'static str> {
    let id = id.trim().to_ascii_lowercase();
    LANGUAGES
        .iter()
        .copied()
        .find(|lang| *lang == id)
        .or_else(|| ALIASES.iter().find(|(alias, _)| *alias == id).map(|(_, lang)| *lang))
}

/// Build the profile for `id`, if it names a built-in language.
pub fn builtin(id: &str) -> Option<LanguageProfile> {
    let profile = match canonical(id)? {
        "javascript" => javascript::profile(),
        "typescript" => typescript::profile(),
        "java" => java::profile(),
        "csharp" => csharp::profile(),
        "python" => python::profile(),
        _ => return None,
    };
    Some(profile)
}

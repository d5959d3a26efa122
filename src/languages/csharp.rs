//! C#

use super::{LanguageProfile, C_NUMBER};
use crate::backends::logger::{LogFormat, LoggerConfig};
use crate::frontend::lexer::{is_identifier_body, is_identifier_start, TokenizerConfig};
use crate::frontend::parser::steps::{
    CollectItems, CombineBrackets, CombineChains, CombineKeywords, CombineNumbers, RemoveCasts, RemoveDuplicates,
    RemoveFunctionCalls, RemoveGenerics, RemoveKinds, RemoveLambdas, RemoveTypePrefixes, SelectLogId,
};
use crate::frontend::parser::{ParseSequence, Parser};

pub const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event",
    "explicit", "extern", "false", "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in",
    "int", "interface", "internal", "is", "lock", "long", "namespace", "new", "null", "object", "operator", "out",
    "override", "params", "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
    "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true", "try",
    "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "var", "virtual", "void", "volatile",
    "while", "yield",
];

pub const OPERATORS: &[&str] = &[
    "<<=", "??=", "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "<<", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?",
];

pub const INTERESTING: &[&str] = &[
    "if", "else if", "else", "for", "foreach", "while", "switch", "case", "return", "throw", "yield", "catch",
];

const COMBINED_KEYWORDS: &[&[&str]] = &[&["else", "if"]];

const CHAIN_SEPARATORS: &[&str] = &[".", "?."];

const CHAIN_LINKS: &[&str] = &["this", "base"];

/// Verbatim identifiers (`@class`)
const CHAIN_PREFIXES: &[&str] = &["@"];

pub fn grammar() -> TokenizerConfig {
    TokenizerConfig {
        // `$` and `@` prefix interpolated and verbatim strings
        punctuation: "()[]{},;.:@$",
        operators: OPERATORS,
        identifier_start: is_identifier_start,
        identifier_body: is_identifier_body,
        string_quotes: "\"'",
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        keywords: KEYWORDS,
        keep_whitespace: true,
    }
}

pub fn steps() -> ParseSequence {
    vec![
        Box::new(RemoveKinds::comments()),
        Box::new(CombineNumbers::new(&C_NUMBER)),
        Box::new(RemoveKinds::whitespace()),
        Box::new(CombineKeywords::new(COMBINED_KEYWORDS)),
        Box::new(
            CombineChains::new(CHAIN_SEPARATORS)
                .with_links(CHAIN_LINKS)
                .with_prefixes(CHAIN_PREFIXES),
        ),
        Box::new(RemoveGenerics),
        Box::new(CombineBrackets::new(false, CHAIN_SEPARATORS, '"')),
        Box::new(RemoveCasts::keyword("as").with_parenthesized()),
        Box::new(RemoveLambdas::arrow("=>")),
        Box::new(RemoveTypePrefixes),
        Box::new(SelectLogId::new(INTERESTING)),
        Box::new(RemoveFunctionCalls),
        Box::new(RemoveKinds::non_values()),
        Box::new(RemoveDuplicates),
        Box::new(CollectItems),
    ]
}

pub fn formats() -> LoggerConfig {
    let writer = |class: &str| {
        LogFormat::new(format!("{class}.WriteLine("), " + ", ");", '"').with_insert_spaces(true)
    };
    LoggerConfig::cycle(writer("Console"), ["Debug", "Trace"].map(writer))
}

pub fn profile() -> LanguageProfile {
    LanguageProfile {
        id: "csharp",
        grammar: grammar(),
        parser: Parser::new(steps()),
        logger_config: formats(),
    }
}

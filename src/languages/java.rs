//! Java

use super::{LanguageProfile, C_NUMBER};
use crate::backends::logger::{LogFormat, LoggerConfig};
use crate::frontend::lexer::{is_dollar_identifier_body, is_dollar_identifier_start, TokenizerConfig};
use crate::frontend::parser::steps::{
    CollectItems, CombineBrackets, CombineChains, CombineKeywords, CombineNumbers, RemoveCasts, RemoveDuplicates,
    RemoveFunctionCalls, RemoveGenerics, RemoveKinds, RemoveLambdas, RemoveTypePrefixes, SelectLogId,
};
use crate::frontend::parser::{ParseSequence, Parser};

pub const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue",
    "default", "do", "double", "else", "enum", "extends", "false", "final", "finally", "float", "for", "goto",
    "if", "implements", "import", "instanceof", "int", "interface", "long", "native", "new", "null", "package",
    "private", "protected", "public", "record", "return", "short", "static", "strictfp", "super", "switch",
    "synchronized", "this", "throw", "throws", "transient", "true", "try", "var", "void", "volatile", "while",
    "yield",
];

/// No `>>`/`>>>`: `List<List<String>>` must close as two angles
pub const OPERATORS: &[&str] = &[
    "<<=", "->", "::", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=",
    "^=", "<<", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?",
];

pub const INTERESTING: &[&str] = &[
    "if", "else if", "else", "for", "while", "switch", "case", "return", "throw", "yield", "catch",
];

const COMBINED_KEYWORDS: &[&[&str]] = &[&["else", "if"]];

const CHAIN_SEPARATORS: &[&str] = &[".", "::"];

const CHAIN_LINKS: &[&str] = &["this", "super"];

pub fn grammar() -> TokenizerConfig {
    TokenizerConfig {
        punctuation: "()[]{},;.:@",
        operators: OPERATORS,
        identifier_start: is_dollar_identifier_start,
        identifier_body: is_dollar_identifier_body,
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
        Box::new(CombineChains::new(CHAIN_SEPARATORS).with_links(CHAIN_LINKS)),
        Box::new(RemoveGenerics),
        Box::new(CombineBrackets::new(false, CHAIN_SEPARATORS, '"')),
        Box::new(RemoveCasts::parenthesized()),
        Box::new(RemoveLambdas::arrow("->")),
        Box::new(RemoveTypePrefixes),
        Box::new(SelectLogId::new(INTERESTING)),
        Box::new(RemoveFunctionCalls),
        Box::new(RemoveKinds::non_values()),
        Box::new(RemoveDuplicates),
        Box::new(CollectItems),
    ]
}

pub fn formats() -> LoggerConfig {
    let stream = |name: &str| {
        LogFormat::new(format!("System.{name}.println("), " + ", ");", '"').with_insert_spaces(true)
    };
    LoggerConfig::cycle(stream("out"), [stream("err")])
}

pub fn profile() -> LanguageProfile {
    LanguageProfile {
        id: "java",
        grammar: grammar(),
        parser: Parser::new(steps()),
        logger_config: formats(),
    }
}

//! Python

use once_cell::sync::Lazy;
use regex::Regex;

use super::LanguageProfile;
use crate::backends::logger::{LogFormat, LoggerConfig};
use crate::frontend::lexer::{is_identifier_body, is_identifier_start, TokenizerConfig};
use crate::frontend::parser::steps::{
    CollectItems, CombineBrackets, CombineChains, CombineNumbers, LambdaStyle, RemoveDuplicates, RemoveFunctionCalls,
    RemoveKeywordArguments, RemoveKinds, RemoveLambdas, RemoveObjectKeys, RemoveReturnTypes, RemoveTypeAnnotations, SelectLogId,
};
use crate::frontend::parser::{ParseSequence, Parser};

pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
    "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

pub const OPERATORS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "->", ":=", "**", "//", "==", "!=", "<=", ">=", "<<", ">>", "+=", "-=", "*=", "/=",
    "%=", "&=", "|=", "^=", "@=", "+", "-", "*", "/", "%", "=", "<", ">", "&", "|", "^", "~", "@",
];

pub const INTERESTING: &[&str] = &[
    "if", "elif", "else", "for", "while", "return", "yield", "raise", "assert", "with", "except",
];

const CHAIN_SEPARATORS: &[&str] = &["."];

const RETURN_TYPE_ENDS: &[&str] = &[":"];

const DECLARATIONS: &[&str] = &["def", "class"];

/// Hex, octal, binary, decimals, exponents, imaginary suffix
pub static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+|(?:\d[\d_]*(?:\.\d[\d_]*)?|\.\d[\d_]*)(?:[eE][+-]?\d[\d_]*)?[jJ]?)")
        .expect("valid number pattern")
});

pub fn grammar() -> TokenizerConfig {
    TokenizerConfig {
        punctuation: "()[]{},;.:",
        operators: OPERATORS,
        identifier_start: is_identifier_start,
        identifier_body: is_identifier_body,
        string_quotes: "\"'",
        line_comment: Some("#"),
        block_comment: None,
        keywords: KEYWORDS,
        keep_whitespace: true,
    }
}

pub fn steps() -> ParseSequence {
    vec![
        Box::new(RemoveKinds::comments()),
        Box::new(CombineNumbers::new(&NUMBER)),
        Box::new(RemoveKinds::whitespace()),
        Box::new(CombineChains::new(CHAIN_SEPARATORS)),
        Box::new(CombineBrackets::new(false, CHAIN_SEPARATORS, '"')),
        Box::new(RemoveLambdas::new(LambdaStyle::Keyword {
            keyword: "lambda",
            separator: ":",
        })),
        Box::new(RemoveReturnTypes::new("->", RETURN_TYPE_ENDS)),
        Box::new(RemoveTypeAnnotations),
        Box::new(RemoveObjectKeys),
        Box::new(RemoveKeywordArguments::new(DECLARATIONS)),
        Box::new(SelectLogId::new(INTERESTING)),
        Box::new(RemoveFunctionCalls),
        Box::new(RemoveKinds::non_values()),
        Box::new(RemoveDuplicates),
        Box::new(CollectItems),
    ]
}

pub fn formats() -> LoggerConfig {
    let print = LogFormat::new("print(", ", ", ")", '"');
    let logging = |level: &str| LogFormat::new(format!("logging.{level}("), ", ", ")", '"');
    LoggerConfig::cycle(print, ["info", "warning", "error"].map(logging))
}

pub fn profile() -> LanguageProfile {
    LanguageProfile {
        id: "python",
        grammar: grammar(),
        parser: Parser::new(steps()),
        logger_config: formats(),
    }
}

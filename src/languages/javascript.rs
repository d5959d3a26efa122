//! JavaScript

use once_cell::sync::Lazy;
use regex::Regex;

use super::LanguageProfile;
use crate::backends::logger::{LogFormat, LoggerConfig};
use crate::frontend::lexer::{is_dollar_identifier_body, is_dollar_identifier_start, TokenizerConfig};
use crate::frontend::parser::steps::{
    CollectItems, CombineBrackets, CombineChains, CombineKeywords, CombineNumbers, RemoveDeclarationAssignee,
    RemoveDuplicates, RemoveFunctionCalls, RemoveKinds, RemoveLambdas, RemoveObjectKeys, SelectLogId,
};
use crate::frontend::parser::{ParseSequence, Parser};

pub const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "export", "extends", "false", "finally", "for", "function", "if", "import", "in", "instanceof",
    "let", "new", "null", "of", "return", "super", "switch", "this", "throw", "true", "try", "typeof",
    "undefined", "var", "void", "while", "with", "yield",
];

pub const OPERATORS: &[&str] = &[
    "===", "!==", "**=", "...", ">>>", "<<=", ">>=", "&&=", "||=", "??=", "=>", "==", "!=", "<=", ">=", "&&",
    "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "**", "<<", ">>", "+", "-",
    "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?",
];

/// Keywords that make a better log id than the first identifier
pub const INTERESTING: &[&str] = &[
    "if", "else if", "else", "for", "while", "switch", "case", "return", "throw", "yield", "catch",
];

pub const COMBINED_KEYWORDS: &[&[&str]] = &[&["else", "if"]];

pub const CHAIN_SEPARATORS: &[&str] = &[".", "?."];

pub const CHAIN_LINKS: &[&str] = &["this", "super"];

pub static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:0[xXbBoO][0-9a-fA-F_]+n?|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d[\d_]*)?n?|\.\d[\d_]*(?:[eE][+-]?\d[\d_]*)?)")
        .expect("valid number pattern")
});

/// `#` starts private class members (`this.#count`)
fn is_js_identifier_start(c: char) -> bool {
    is_dollar_identifier_start(c) || c == '#'
}

pub fn grammar() -> TokenizerConfig {
    TokenizerConfig {
        punctuation: "()[]{},;.:@",
        operators: OPERATORS,
        identifier_start: is_js_identifier_start,
        identifier_body: is_dollar_identifier_body,
        string_quotes: "\"'`",
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        keywords: KEYWORDS,
        keep_whitespace: true,
    }
}

pub fn steps() -> ParseSequence {
    vec![
        Box::new(RemoveKinds::comments()),
        Box::new(CombineNumbers::new(&NUMBER)),
        Box::new(RemoveKinds::whitespace()),
        Box::new(CombineKeywords::new(COMBINED_KEYWORDS)),
        Box::new(CombineChains::new(CHAIN_SEPARATORS).with_links(CHAIN_LINKS)),
        Box::new(CombineBrackets::new(true, CHAIN_SEPARATORS, '\'')),
        Box::new(RemoveDeclarationAssignee::new("=>", "function")),
        Box::new(RemoveLambdas::arrow("=>")),
        Box::new(RemoveObjectKeys),
        Box::new(SelectLogId::new(INTERESTING)),
        Box::new(RemoveFunctionCalls),
        Box::new(RemoveKinds::non_values()),
        Box::new(RemoveDuplicates),
        Box::new(CollectItems),
    ]
}

pub fn formats() -> LoggerConfig {
    let console = |method: &str| LogFormat::new(format!("console.{method}("), ", ", ");", '\'');
    LoggerConfig::cycle(console("log"), ["info", "warn", "error"].map(console))
}

pub fn profile() -> LanguageProfile {
    LanguageProfile {
        id: "javascript",
        grammar: grammar(),
        parser: Parser::new(steps()),
        logger_config: formats(),
    }
}

//! TypeScript
//!
//! JavaScript plus type syntax. `<<`, `>>` and `>>>` are left out of the
//! operator table so nested generics (`Map<K, Array<V>>`) close one angle at
//! a time.

use super::javascript;
use super::LanguageProfile;
use crate::frontend::lexer::TokenizerConfig;
use crate::frontend::parser::steps::{
    CollectItems, CombineBrackets, CombineChains, CombineKeywords, CombineNumbers, RemoveCasts,
    RemoveDeclarationAssignee, RemoveDuplicates, RemoveFunctionCalls, RemoveGenerics, RemoveKinds, RemoveLambdas,
    RemoveObjectKeys, RemoveReturnTypes, RemoveTypeAnnotations, SelectLogId,
};
use crate::frontend::parser::{ParseSequence, Parser};

pub const KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "async", "await", "boolean", "break", "case", "catch", "class", "const", "continue",
    "debugger", "declare", "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "is", "keyof", "let",
    "namespace", "never", "new", "null", "number", "of", "private", "protected", "public", "readonly", "return",
    "string", "super", "switch", "this", "throw", "true", "try", "type", "typeof", "undefined", "unknown", "var",
    "void", "while", "with", "yield",
];

pub const OPERATORS: &[&str] = &[
    "===", "!==", "**=", "...", "&&=", "||=", "??=", "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++",
    "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "**", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&",
    "|", "^", "~", "?",
];

/// Non-null assertion (`user!.name`)
const CHAIN_SUFFIXES: &[&str] = &["!"];

const RETURN_TYPE_ENDS: &[&str] = &["{", "=>", ";"];

pub fn grammar() -> TokenizerConfig {
    TokenizerConfig {
        operators: OPERATORS,
        keywords: KEYWORDS,
        ..javascript::grammar()
    }
}

pub fn steps() -> ParseSequence {
    vec![
        Box::new(RemoveKinds::comments()),
        Box::new(CombineNumbers::new(&javascript::NUMBER)),
        Box::new(RemoveKinds::whitespace()),
        Box::new(CombineKeywords::new(javascript::COMBINED_KEYWORDS)),
        Box::new(
            CombineChains::new(javascript::CHAIN_SEPARATORS)
                .with_links(javascript::CHAIN_LINKS)
                .with_suffixes(CHAIN_SUFFIXES),
        ),
        Box::new(CombineBrackets::new(true, javascript::CHAIN_SEPARATORS, '\'')),
        Box::new(RemoveGenerics),
        Box::new(RemoveReturnTypes::new(":", RETURN_TYPE_ENDS)),
        Box::new(RemoveTypeAnnotations),
        Box::new(RemoveCasts::keyword("as")),
        Box::new(RemoveDeclarationAssignee::new("=>", "function")),
        Box::new(RemoveLambdas::arrow("=>")),
        Box::new(RemoveObjectKeys),
        Box::new(SelectLogId::new(javascript::INTERESTING)),
        Box::new(RemoveFunctionCalls),
        Box::new(RemoveKinds::non_values()),
        Box::new(RemoveDuplicates),
        Box::new(CollectItems),
    ]
}

pub fn profile() -> LanguageProfile {
    LanguageProfile {
        id: "typescript",
        grammar: grammar(),
        parser: Parser::new(steps()),
        logger_config: javascript::formats(),
    }
}

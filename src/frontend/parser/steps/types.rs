//! Type syntax stripping for statically typed languages

use crate::frontend::lexer::{Token, TokenKind};
use crate::frontend::parser::{ParseResult, ParseStep, MAX_ITERATIONS};
use crate::frontend::shared::{
    enclosing_opener, expression_bounds, find_block, is_closer, is_opener, Direction, ANGLES,
    BRACKETS,
};

/// Tokens allowed inside a `<...>` block for it to count as a type argument list
fn is_type_argument(token: &Token) -> bool {
    token.is_named()
        || [",", "<", ">", "[", "]", ".", "?"]
            .iter()
            .any(|symbol| token.is_symbol(symbol))
}

/// Remove `<...>` after an identifier when it reads as a generic argument list.
///
/// The block must be complete and hold nothing but names, commas and nested
/// angle/array brackets, so `a < b` and `a < b && c > d` stay untouched.
/// `a < b, c > d` does pass the test and is stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveGenerics;

impl ParseStep for RemoveGenerics {
    fn name(&self) -> &'static str {
        "remove-generics"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let mut i = 1;

        while i < tokens.len() {
            if tokens[i].is_symbol("<") && tokens[i - 1].kind == TokenKind::Identifier {
                if let Some(block) = find_block(tokens, i, Direction::Forward, ANGLES) {
                    if block.complete && tokens[block.inner()].iter().all(is_type_argument) {
                        tokens.drain(block.range());
                        continue;
                    }
                }
            }
            i += 1;
        }
    }
}

/// True when the expression around `index` contains a `?` before `limit`.
fn has_ternary(
    tokens: &[Token],
    index: usize,
    limit: usize,
) -> bool {
    expression_bounds(tokens, index, Direction::Backward, BRACKETS)
        .is_some_and(|range| tokens[range.start..limit].iter().any(|t| t.is_symbol("?")))
}

/// Strip `name: Type` annotations on parameters and variables.
///
/// The annotation runs from the colon to the next `,` `;` `=` `=>` or closer
/// at the same depth. Colons inside `{...}` (object literals, destructuring)
/// and colons that may belong to a ternary are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveTypeAnnotations;

impl ParseStep for RemoveTypeAnnotations {
    fn name(&self) -> &'static str {
        "remove-type-annotations"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let mut i = 1;

        while i < tokens.len() {
            if !tokens[i].is_symbol(":") {
                i += 1;
                continue;
            }

            // `name?: Type`
            let optional = i >= 2 && tokens[i - 1].is_symbol("?");
            let name = if optional { i - 2 } else { i - 1 };
            if tokens[name].kind != TokenKind::Identifier {
                i += 1;
                continue;
            }
            if enclosing_opener(tokens, i, BRACKETS).is_some_and(|open| tokens[open].is_symbol("{")) {
                i += 1;
                continue;
            }
            if has_ternary(tokens, name, name + 1) {
                i += 1;
                continue;
            }

            let mut end = i + 1;
            while end < tokens.len() {
                let t = &tokens[end];
                if [",", ";", "=", "=>"].iter().any(|s| t.is_symbol(s)) || is_closer(t, BRACKETS) {
                    break;
                }
                if is_opener(t, BRACKETS) {
                    match find_block(tokens, end, Direction::Forward, BRACKETS) {
                        Some(block) if block.complete => {
                            end = block.end + 1;
                            continue;
                        }
                        _ => break,
                    }
                }
                end += 1;
            }

            tokens.drain(i..end);
            i += 1;
        }
    }
}

/// Strip return types between a parameter list and the body or arrow.
///
/// `introducer` is the token right after `)` (`:` in TypeScript, `->` in
/// Python). The type runs up to the first terminator, or to the end of the
/// line for body-less declarations.
#[derive(Debug, Clone)]
pub struct RemoveReturnTypes {
    introducer: &'static str,
    terminators: &'static [&'static str],
}

impl RemoveReturnTypes {
    pub fn new(
        introducer: &'static str,
        terminators: &'static [&'static str],
    ) -> Self {
        Self {
            introducer,
            terminators,
        }
    }
}

impl ParseStep for RemoveReturnTypes {
    fn name(&self) -> &'static str {
        "remove-return-types"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let mut i = 0;

        while i + 1 < tokens.len() {
            if !(tokens[i].is_symbol(")") && tokens[i + 1].is_symbol(self.introducer)) {
                i += 1;
                continue;
            }
            let Some(params) = find_block(tokens, i, Direction::Backward, BRACKETS) else {
                i += 1;
                continue;
            };
            // `cond ? f(x) : y`
            if !params.complete || has_ternary(tokens, i, params.start) {
                i += 1;
                continue;
            }

            let mut end = i + 2;
            while end < tokens.len() {
                let t = &tokens[end];
                if self.terminators.iter().any(|s| t.is_symbol(s)) || is_closer(t, BRACKETS) {
                    break;
                }
                if is_opener(t, BRACKETS) {
                    match find_block(tokens, end, Direction::Forward, BRACKETS) {
                        Some(block) if block.complete => {
                            end = block.end + 1;
                            continue;
                        }
                        _ => break,
                    }
                }
                end += 1;
            }

            tokens.drain(i + 1..end);
            i += 1;
        }
    }
}

/// Control-flow keywords whose parenthesised condition is not a cast
const CONDITION_KEYWORDS: &[&str] = &[
    "if",
    "while",
    "for",
    "foreach",
    "switch",
    "catch",
    "using",
    "lock",
    "synchronized",
];

/// Strip `as Type` and `(Type) value` casts.
#[derive(Debug, Clone, Default)]
pub struct RemoveCasts {
    keyword: Option<&'static str>,
    parenthesized: bool,
}

impl RemoveCasts {
    /// `value as Type`
    pub fn keyword(keyword: &'static str) -> Self {
        Self {
            keyword: Some(keyword),
            parenthesized: false,
        }
    }

    /// `(Type) value`
    pub fn parenthesized() -> Self {
        Self {
            keyword: None,
            parenthesized: true,
        }
    }

    pub fn with_parenthesized(mut self) -> Self {
        self.parenthesized = true;
        self
    }

    fn is_parenthesized_cast(
        tokens: &[Token],
        i: usize,
    ) -> bool {
        let shape = tokens[i].is_symbol("(")
            && tokens.get(i + 1).is_some_and(Token::is_named)
            && tokens.get(i + 2).is_some_and(|t| t.is_symbol(")"));
        let operand = tokens.get(i + 3).is_some_and(|t| {
            matches!(
                t.kind,
                TokenKind::Identifier | TokenKind::Number | TokenKind::String
            ) || t.is_symbol("(")
        });
        let after_value = i > 0 && {
            let prev = &tokens[i - 1];
            prev.kind == TokenKind::Identifier
                || prev.is_symbol(")")
                || prev.is_symbol("]")
                || (prev.kind == TokenKind::Keyword
                    && CONDITION_KEYWORDS.contains(&prev.value.as_str()))
        };
        shape && operand && !after_value
    }
}

impl ParseStep for RemoveCasts {
    fn name(&self) -> &'static str {
        "remove-casts"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;

        if let Some(keyword) = self.keyword {
            let mut i = 0;
            while i < tokens.len() {
                if tokens[i].is_keyword(keyword) {
                    let len = if tokens.get(i + 1).is_some_and(Token::is_named) { 2 } else { 1 };
                    tokens.drain(i..i + len);
                    continue;
                }
                i += 1;
            }
        }

        if self.parenthesized {
            let mut i = 0;
            let mut iterations = 0;
            while i < tokens.len() && iterations < MAX_ITERATIONS {
                iterations += 1;
                if Self::is_parenthesized_cast(tokens, i) {
                    tokens.drain(i..i + 3);
                    continue;
                }
                i += 1;
            }
        }
    }
}

/// Drop the type in `Type name` declarations (an identifier directly followed
/// by another identifier).
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveTypePrefixes;

impl ParseStep for RemoveTypePrefixes {
    fn name(&self) -> &'static str {
        "remove-type-prefixes"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let mut i = 0;

        while i + 1 < tokens.len() {
            if tokens[i].kind == TokenKind::Identifier && tokens[i + 1].kind == TokenKind::Identifier {
                tokens.remove(i);
                continue;
            }
            i += 1;
        }
    }
}

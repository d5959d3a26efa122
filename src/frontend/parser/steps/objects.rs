//! Object literal and destructuring keys

use std::ops::Range;

use crate::frontend::lexer::{Token, TokenKind};
use crate::frontend::parser::{ParseResult, ParseStep};
use crate::frontend::shared::{enclosing_opener, find_block, is_opener, Direction, BRACKETS};

/// Keywords that introduce a statement body rather than an object literal
const BODY_KEYWORDS: &[&str] = &["else", "try", "finally", "do"];

/// Remove `key:` from every entry of a complete `{...}` literal.
///
/// `{ a: x, b }` keeps `x` and `b`; renamed destructuring `{ a: b }` keeps the
/// local name. Braces that open a statement or function body are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveObjectKeys;

fn is_body(
    tokens: &[Token],
    open: usize,
) -> bool {
    let Some(prev) = open.checked_sub(1).map(|i| &tokens[i]) else {
        return false;
    };
    prev.is_symbol(")")
        || prev.is_symbol("=>")
        || prev.kind == TokenKind::Identifier
        || (prev.kind == TokenKind::Keyword && BODY_KEYWORDS.contains(&prev.value.as_str()))
}

/// Flag `key ... :` of each comma-separated entry inside `inner`.
fn mark_keys(
    tokens: &[Token],
    inner: Range<usize>,
    remove: &mut [bool],
) {
    let mut entry = inner.start;
    while entry < inner.end {
        let mut i = entry;
        let mut colon = None;
        while i < inner.end {
            let t = &tokens[i];
            if t.is_symbol(",") {
                break;
            }
            if colon.is_none() && t.is_symbol(":") {
                colon = Some(i);
            }
            if is_opener(t, BRACKETS) {
                // nested blocks inside a complete block are complete
                if let Some(block) = find_block(tokens, i, Direction::Forward, BRACKETS) {
                    i = block.end + 1;
                    continue;
                }
            }
            i += 1;
        }
        if let Some(colon) = colon.filter(|&colon| colon > entry) {
            remove[entry..=colon].iter_mut().for_each(|flag| *flag = true);
        }
        entry = i + 1;
    }
}

impl ParseStep for RemoveObjectKeys {
    fn name(&self) -> &'static str {
        "remove-object-keys"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &result.tokens;
        let mut remove = vec![false; tokens.len()];

        for (i, t) in tokens.iter().enumerate() {
            if !t.is_symbol("{") || is_body(tokens, i) {
                continue;
            }
            match find_block(tokens, i, Direction::Forward, BRACKETS) {
                Some(block) if block.complete => mark_keys(tokens, block.inner(), &mut remove),
                _ => {}
            }
        }

        let mut flags = remove.into_iter();
        result.tokens.retain(|_| !flags.next().unwrap_or(false));
    }
}

/// Remove `name=` keyword arguments from call parentheses.
///
/// `f(a, key=b)` keeps `a` and `b`. Parentheses after a `declarations`
/// keyword (`def f(a=1)`) hold parameters and are left alone.
#[derive(Debug, Clone, Copy)]
pub struct RemoveKeywordArguments {
    declarations: &'static [&'static str],
}

impl RemoveKeywordArguments {
    pub fn new(declarations: &'static [&'static str]) -> Self {
        Self { declarations }
    }

    fn in_call(
        &self,
        tokens: &[Token],
        index: usize,
    ) -> bool {
        let Some(open) = enclosing_opener(tokens, index, BRACKETS) else {
            return false;
        };
        if !tokens[open].is_symbol("(") || open == 0 || tokens[open - 1].kind != TokenKind::Identifier {
            return false;
        }
        !open
            .checked_sub(2)
            .map(|i| &tokens[i])
            .is_some_and(|t| t.kind == TokenKind::Keyword && self.declarations.contains(&t.value.as_str()))
    }
}

impl ParseStep for RemoveKeywordArguments {
    fn name(&self) -> &'static str {
        "remove-keyword-arguments"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &result.tokens;
        let mut remove = vec![false; tokens.len()];

        for i in 1..tokens.len().saturating_sub(1) {
            let named = tokens[i].kind == TokenKind::Identifier
                && tokens[i + 1].is_symbol("=")
                && (tokens[i - 1].is_symbol("(") || tokens[i - 1].is_symbol(","));
            if named && self.in_call(tokens, i) {
                remove[i] = true;
                remove[i + 1] = true;
            }
        }

        let mut flags = remove.into_iter();
        result.tokens.retain(|_| !flags.next().unwrap_or(false));
    }
}

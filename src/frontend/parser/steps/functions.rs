//! Function-shaped constructs: calls, lambdas, function-valued declarations

use crate::frontend::lexer::{Token, TokenKind};
use crate::frontend::parser::{ParseResult, ParseStep, MAX_ITERATIONS};
use crate::frontend::shared::{expression_bounds, find_block, is_closer, is_opener, Direction, BRACKETS};

/// Drop identifiers that are called: `name(` keeps its arguments, loses `name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveFunctionCalls;

impl ParseStep for RemoveFunctionCalls {
    fn name(&self) -> &'static str {
        "remove-function-calls"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let mut i = 0;

        while i + 1 < tokens.len() {
            if tokens[i].kind == TokenKind::Identifier && tokens[i + 1].is_symbol("(") {
                tokens.remove(i);
            } else {
                i += 1;
            }
        }
    }
}

/// Lambda syntax of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LambdaStyle {
    /// `(params) => body`, `x -> body`
    Arrow(&'static str),
    /// `lambda params: body`
    Keyword {
        keyword: &'static str,
        separator: &'static str,
    },
}

/// Remove complete lambdas, parameters and body included.
///
/// A lambda whose body is still open on this line (`x => {` or `x ->` at the
/// end) is the line's real subject and is left alone.
#[derive(Debug, Clone, Copy)]
pub struct RemoveLambdas {
    style: LambdaStyle,
}

impl RemoveLambdas {
    pub fn new(style: LambdaStyle) -> Self {
        Self { style }
    }

    pub fn arrow(arrow: &'static str) -> Self {
        Self::new(LambdaStyle::Arrow(arrow))
    }
}

/// Exclusive end of the lambda body after the arrow at `arrow`.
fn arrow_body_end(
    tokens: &[Token],
    arrow: usize,
) -> Option<usize> {
    let next = tokens.get(arrow + 1)?;
    if next.is_symbol("{") {
        let block = find_block(tokens, arrow + 1, Direction::Forward, BRACKETS)?;
        return block.complete.then_some(block.end + 1);
    }
    expression_bounds(tokens, arrow + 1, Direction::Forward, BRACKETS).map(|range| range.end)
}

/// First token of the parameter list before the arrow at `arrow`.
fn arrow_params_start(
    tokens: &[Token],
    arrow: usize,
) -> Option<usize> {
    let mut start = match arrow.checked_sub(1).map(|prev| &tokens[prev]) {
        Some(prev) if prev.is_symbol(")") => {
            let block = find_block(tokens, arrow - 1, Direction::Backward, BRACKETS)?;
            if !block.complete {
                return None;
            }
            block.start
        }
        Some(prev) if prev.kind == TokenKind::Identifier => arrow - 1,
        _ => arrow,
    };
    if start > 0 && tokens[start - 1].is_keyword("async") {
        start -= 1;
    }
    Some(start)
}

impl RemoveLambdas {
    fn remove_arrows(
        tokens: &mut Vec<Token>,
        arrow: &str,
    ) {
        let mut i = 0;
        let mut iterations = 0;

        while i < tokens.len() && iterations < MAX_ITERATIONS {
            iterations += 1;
            if !tokens[i].is_symbol(arrow) {
                i += 1;
                continue;
            }
            let (Some(end), Some(start)) = (arrow_body_end(tokens, i), arrow_params_start(tokens, i)) else {
                i += 1;
                continue;
            };
            tokens.drain(start..end);
            i = start;
        }
    }

    fn remove_keyword_lambdas(
        tokens: &mut Vec<Token>,
        keyword: &str,
        separator: &str,
    ) {
        let mut i = 0;
        let mut iterations = 0;

        while i < tokens.len() && iterations < MAX_ITERATIONS {
            iterations += 1;
            if !tokens[i].is_keyword(keyword) {
                i += 1;
                continue;
            }
            let body = (i + 1..tokens.len())
                .find(|&j| tokens[j].is_symbol(separator))
                .and_then(|sep| expression_bounds(tokens, sep + 1, Direction::Forward, BRACKETS));
            match body {
                Some(range) => {
                    tokens.drain(i..range.end);
                }
                None => i += 1,
            }
        }
    }
}

impl ParseStep for RemoveLambdas {
    fn name(&self) -> &'static str {
        "remove-lambdas"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        match self.style {
            LambdaStyle::Arrow(arrow) => Self::remove_arrows(&mut result.tokens, arrow),
            LambdaStyle::Keyword { keyword, separator } => {
                Self::remove_keyword_lambdas(&mut result.tokens, keyword, separator)
            }
        }
    }
}

/// Drop `name =` when the right-hand side opens a function body on this line.
///
/// `const handler = async (event) => {` logs `event`, not `handler`.
#[derive(Debug, Clone, Copy)]
pub struct RemoveDeclarationAssignee {
    arrow: &'static str,
    function_keyword: &'static str,
}

impl RemoveDeclarationAssignee {
    pub fn new(
        arrow: &'static str,
        function_keyword: &'static str,
    ) -> Self {
        Self {
            arrow,
            function_keyword,
        }
    }

    /// Is a function expression starting at `index`?
    fn starts_function(
        &self,
        tokens: &[Token],
        index: usize,
    ) -> bool {
        let Some(first) = tokens.get(index) else {
            return false;
        };
        if first.is_keyword(self.function_keyword) {
            return true;
        }
        let after_params = if first.is_symbol("(") {
            find_block(tokens, index, Direction::Forward, BRACKETS)
                .filter(|block| block.complete)
                .map(|block| block.end + 1)
        } else if first.kind == TokenKind::Identifier {
            Some(index + 1)
        } else {
            None
        };
        after_params.is_some_and(|next| tokens.get(next).is_some_and(|t| t.is_symbol(self.arrow)))
    }
}

/// First `=` outside any bracket
fn top_level_assignment(tokens: &[Token]) -> Option<usize> {
    let mut depth = 0usize;
    for (i, t) in tokens.iter().enumerate() {
        if is_opener(t, BRACKETS) {
            depth += 1;
        } else if is_closer(t, BRACKETS) {
            depth = depth.saturating_sub(1);
        } else if depth == 0 && t.is_symbol("=") {
            return Some(i);
        }
    }
    None
}

impl ParseStep for RemoveDeclarationAssignee {
    fn name(&self) -> &'static str {
        "remove-declaration-assignee"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let Some(eq) = top_level_assignment(tokens) else {
            return;
        };

        let mut value = eq + 1;
        if tokens.get(value).is_some_and(|t| t.is_keyword("async")) {
            value += 1;
        }
        if !self.starts_function(tokens, value) {
            return;
        }

        let opens_body = (value..tokens.len()).any(|i| {
            tokens[i].is_symbol("{")
                && find_block(tokens, i, Direction::Forward, BRACKETS).is_some_and(|block| !block.complete)
        });
        if opens_body {
            tokens.drain(..=eq);
        }
    }
}

//! Token combination: numbers, multi-word keywords, identifier chains, bracket notation

use regex::Regex;

use super::merge;
use crate::frontend::lexer::{Token, TokenKind};
use crate::frontend::parser::{ParseResult, ParseStep, MAX_ITERATIONS};
use crate::frontend::shared::{find_block, match_any, serialize_all, Delimiters, Direction, DEFAULT_QUOTE};

const SQUARE: Delimiters = &[("[", "]")];

/// How many tokens a numeric literal may span (`0`, `x1F` or `2 . 5 e - 3` ...)
const NUMBER_LOOKAHEAD: usize = 8;

/// Re-join a number split by the tokenizer, using a per-language literal pattern.
///
/// The concatenated text of the following tokens is matched against `pattern`
/// and every token lying entirely inside the match is merged into one
/// `Number`. Whitespace, comments and strings end the candidate run.
#[derive(Debug, Clone)]
pub struct CombineNumbers {
    pattern: &'static Regex,
}

impl CombineNumbers {
    pub fn new(pattern: &'static Regex) -> Self {
        Self { pattern }
    }
}

/// A token after which `.` is member access rather than a decimal point
fn continues_value(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Identifier | TokenKind::Number)
        || token.is_symbol(")")
        || token.is_symbol("]")
}

impl ParseStep for CombineNumbers {
    fn name(&self) -> &'static str {
        "combine-numbers"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let mut i = 0;
        let mut iterations = 0;

        while i < tokens.len() && iterations < MAX_ITERATIONS {
            iterations += 1;
            if tokens[i].kind != TokenKind::Number {
                i += 1;
                continue;
            }

            let leading_dot =
                i > 0 && tokens[i - 1].is_symbol(".") && !(i >= 2 && continues_value(&tokens[i - 2]));
            let start = if leading_dot { i - 1 } else { i };

            let mut text = String::new();
            let mut ends = Vec::new();
            for t in tokens[start..].iter().take(NUMBER_LOOKAHEAD) {
                if matches!(
                    t.kind,
                    TokenKind::Whitespace | TokenKind::Comment | TokenKind::String
                ) {
                    break;
                }
                text.push_str(&t.value);
                ends.push(text.len());
            }

            let count = self
                .pattern
                .find(&text)
                .filter(|m| m.start() == 0)
                .map(|m| ends.iter().take_while(|&&end| end <= m.end()).count())
                .unwrap_or(0);

            if count > 1 {
                merge(tokens, start..start + count, TokenKind::Number);
                i = start + 1;
            } else {
                i += 1;
            }
        }
    }
}

/// Merge adjacent keywords such as `else` `if` into one keyword token.
#[derive(Debug, Clone)]
pub struct CombineKeywords {
    sequences: &'static [&'static [&'static str]],
}

impl CombineKeywords {
    pub fn new(sequences: &'static [&'static [&'static str]]) -> Self {
        Self { sequences }
    }
}

impl ParseStep for CombineKeywords {
    fn name(&self) -> &'static str {
        "combine-keywords"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let mut i = 0;

        while i < tokens.len() {
            let found = self.sequences.iter().find(|words| {
                words.len() > 1
                    && i + words.len() <= tokens.len()
                    && words.iter().zip(&tokens[i..]).all(|(word, t)| t.is_keyword(word))
            });
            if let Some(words) = found {
                tokens.splice(i..i + words.len(), std::iter::once(Token::keyword(words.join(" "))));
            }
            i += 1;
        }
    }
}

/// Merge `a.b.c` style chains into one identifier.
///
/// A chain is `(prefix member | link) (suffix? separator member)* suffix?`.
/// A link is an identifier or one of the configured keywords (`this`,
/// `super` ...); a member is any identifier or keyword. A trailing separator
/// is never absorbed.
#[derive(Debug, Clone)]
pub struct CombineChains {
    separators: &'static [&'static str],
    prefixes: &'static [&'static str],
    suffixes: &'static [&'static str],
    links: &'static [&'static str],
}

impl CombineChains {
    pub fn new(separators: &'static [&'static str]) -> Self {
        Self {
            separators,
            prefixes: &[],
            suffixes: &[],
            links: &[],
        }
    }

    pub fn with_links(
        mut self,
        links: &'static [&'static str],
    ) -> Self {
        self.links = links;
        self
    }

    pub fn with_prefixes(
        mut self,
        prefixes: &'static [&'static str],
    ) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn with_suffixes(
        mut self,
        suffixes: &'static [&'static str],
    ) -> Self {
        self.suffixes = suffixes;
        self
    }

    fn is_link(
        &self,
        token: &Token,
    ) -> bool {
        token.kind == TokenKind::Identifier
            || (token.kind == TokenKind::Keyword && self.links.contains(&token.value.as_str()))
    }

    /// Exclusive end of the chain that starts at `start`, if one does.
    fn chain_end(
        &self,
        tokens: &[Token],
        start: usize,
    ) -> Option<usize> {
        let prefix = match_any(tokens, start, Direction::Forward, self.prefixes, DEFAULT_QUOTE)
            .filter(|&n| tokens.get(start + n).is_some_and(Token::is_named));
        let mut j = match prefix {
            Some(n) => start + n + 1,
            None if tokens.get(start).is_some_and(|t| self.is_link(t)) => start + 1,
            None => return None,
        };

        loop {
            let mut k = j;
            if let Some(n) = match_any(tokens, k, Direction::Forward, self.suffixes, DEFAULT_QUOTE) {
                k += n;
            }
            // after a separator any name is a member: `event.type`, `a.default`
            match match_any(tokens, k, Direction::Forward, self.separators, DEFAULT_QUOTE) {
                Some(n) if tokens.get(k + n).is_some_and(Token::is_named) => j = k + n + 1,
                _ => return Some(k),
            }
        }
    }
}

impl ParseStep for CombineChains {
    fn name(&self) -> &'static str {
        "combine-chains"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let mut i = 0;

        while i < tokens.len() {
            if let Some(end) = self.chain_end(tokens, i) {
                if end - i > 1 {
                    merge(tokens, i..end, TokenKind::Identifier);
                }
            }
            i += 1;
        }
    }
}

/// Merge `name[...]` (and whatever chain follows it) into one identifier.
///
/// Every complete bracket block is folded into the identifier text. Index
/// expressions that mention other identifiers keep their text in the merged
/// name; whether those inner identifiers also survive as tokens of their own
/// is up to `keep_inner_identifiers`.
#[derive(Debug, Clone)]
pub struct CombineBrackets {
    keep_inner_identifiers: bool,
    separators: &'static [&'static str],
    quote: char,
}

impl CombineBrackets {
    pub fn new(
        keep_inner_identifiers: bool,
        separators: &'static [&'static str],
        quote: char,
    ) -> Self {
        Self {
            keep_inner_identifiers,
            separators,
            quote,
        }
    }
}

impl ParseStep for CombineBrackets {
    fn name(&self) -> &'static str {
        "combine-brackets"
    }

    fn apply(
        &self,
        result: &mut ParseResult,
    ) {
        let tokens = &mut result.tokens;
        let mut i = 0;

        while i < tokens.len() {
            if tokens[i].kind != TokenKind::Identifier
                || !tokens.get(i + 1).is_some_and(|t| t.is_symbol("["))
            {
                i += 1;
                continue;
            }

            let mut end = i;
            let mut inner = Vec::new();
            let mut bracketed = false;
            loop {
                while let Some(block) = find_block(tokens, end + 1, Direction::Forward, SQUARE) {
                    if !block.complete {
                        break;
                    }
                    inner.extend(
                        tokens[block.inner()]
                            .iter()
                            .filter(|t| t.kind == TokenKind::Identifier)
                            .cloned(),
                    );
                    end = block.end;
                    bracketed = true;
                }
                if !bracketed {
                    break;
                }
                match match_any(tokens, end + 1, Direction::Forward, self.separators, self.quote) {
                    Some(n)
                        if tokens
                            .get(end + 1 + n)
                            .is_some_and(|t| t.kind == TokenKind::Identifier) =>
                    {
                        end += 1 + n;
                    }
                    _ => break,
                }
            }

            if end > i {
                let value = serialize_all(&tokens[i..=end], self.quote);
                let mut replacement = vec![Token::identifier(value)];
                if self.keep_inner_identifiers {
                    replacement.append(&mut inner);
                }
                tokens.splice(i..=end, replacement);
            }
            i += 1;
        }
    }
}

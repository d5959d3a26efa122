//! Lexer module
//!
//! Turns one line of source text into a flat list of [`Token`]s under a
//! declarative [`TokenizerConfig`]. The lexer knows nothing about any
//! particular language: punctuation, operators, quotes, comment markers and
//! keywords all come from the grammar table.

pub mod tokens;

pub use tokens::{Token, TokenKind};
pub use tokenizer::tokenize;

/// Lexer error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Unable to tokenize input at {position}: `{fragment}`")]
    UnparsableInput { position: usize, fragment: String },
}

/// Per-language grammar table consumed by [`tokenize`].
///
/// The character classes should be disjoint: at every position exactly one
/// scanning rule must apply, otherwise the line fails to tokenize.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Single-character punctuation marks
    pub punctuation: &'static str,
    /// Operators, matched longest first
    pub operators: &'static [&'static str],
    pub identifier_start: fn(char) -> bool,
    pub identifier_body: fn(char) -> bool,
    /// Characters that open (and close) a string literal
    pub string_quotes: &'static str,
    pub line_comment: Option<&'static str>,
    pub block_comment: Option<(&'static str, &'static str)>,
    pub keywords: &'static [&'static str],
    /// Emit whitespace runs as tokens instead of dropping them
    pub keep_whitespace: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            punctuation: "()[]{},;.:",
            operators: &[
                "==", "!=", "<=", ">=", "&&", "||", "+", "-", "*", "/", "%", "=", "<", ">", "!",
                "&", "|", "^", "~", "?",
            ],
            identifier_start: is_identifier_start,
            identifier_body: is_identifier_body,
            string_quotes: "\"'",
            line_comment: Some("//"),
            block_comment: Some(("/*", "*/")),
            keywords: &[],
            keep_whitespace: true,
        }
    }
}

impl TokenizerConfig {
    #[inline]
    pub fn is_keyword(
        &self,
        text: &str,
    ) -> bool {
        self.keywords.contains(&text)
    }
}

/// Unicode identifier start, plus `_`
pub fn is_identifier_start(c: char) -> bool {
    unicode_ident::is_xid_start(c) || c == '_'
}

/// Unicode identifier continue
pub fn is_identifier_body(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Identifier start for the C family that allows `$` (JavaScript, Java)
pub fn is_dollar_identifier_start(c: char) -> bool {
    is_identifier_start(c) || c == '$'
}

pub fn is_dollar_identifier_body(c: char) -> bool {
    is_identifier_body(c) || c == '$'
}

/// Tokenize a single line
mod tokenizer {
    use super::*;

    /// Longest fragment quoted back in a [`LexError`]
    const FRAGMENT_LEN: usize = 16;

    pub fn tokenize(
        source: &str,
        config: &TokenizerConfig,
    ) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new(source, config);
        let mut tokens = Vec::new();

        while let Some(token) = lexer.next_token()? {
            if token.kind == TokenKind::Whitespace && !config.keep_whitespace {
                continue;
            }
            tokens.push(token);
        }

        Ok(tokens)
    }

    struct Lexer<'a> {
        source: &'a str,
        offset: usize,
        config: &'a TokenizerConfig,
    }

    impl<'a> Lexer<'a> {
        fn new(
            source: &'a str,
            config: &'a TokenizerConfig,
        ) -> Self {
            Self {
                source,
                offset: 0,
                config,
            }
        }

        fn rest(&self) -> &'a str {
            &self.source[self.offset..]
        }

        fn peek(&self) -> Option<char> {
            self.rest().chars().next()
        }

        fn advance(&mut self) -> Option<char> {
            let c = self.peek()?;
            self.offset += c.len_utf8();
            Some(c)
        }

        /// Consume `len` bytes and return them as a token of `kind`.
        fn take(
            &mut self,
            kind: TokenKind,
            len: usize,
        ) -> Token {
            let value = &self.source[self.offset..self.offset + len];
            self.offset += len;
            Token::new(kind, value)
        }

        fn next_token(&mut self) -> Result<Option<Token>, LexError> {
            let Some(c) = self.peek() else {
                return Ok(None);
            };
            let rest = self.rest();

            if let Some(marker) = self.config.line_comment {
                if rest.starts_with(marker) {
                    return Ok(Some(self.take(TokenKind::Comment, rest.len())));
                }
            }

            if let Some((start, end)) = self.config.block_comment {
                if rest.starts_with(start) {
                    let len = rest[start.len()..]
                        .find(end)
                        .map(|pos| start.len() + pos + end.len())
                        .unwrap_or(rest.len());
                    return Ok(Some(self.take(TokenKind::Comment, len)));
                }
            }

            if c.is_ascii_digit() {
                return Ok(Some(self.scan_number()));
            }

            if let Some(len) = self.match_operator() {
                return Ok(Some(self.take(TokenKind::Operator, len)));
            }

            if self.config.punctuation.contains(c) {
                return Ok(Some(self.take(TokenKind::Punctuation, c.len_utf8())));
            }

            if self.config.string_quotes.contains(c) {
                return Ok(Some(self.scan_string(c)));
            }

            if (self.config.identifier_start)(c) {
                return Ok(Some(self.scan_identifier()));
            }

            if c.is_whitespace() {
                return Ok(Some(self.scan_whitespace()));
            }

            Err(LexError::UnparsableInput {
                position: self.offset,
                fragment: rest.chars().take(FRAGMENT_LEN).collect(),
            })
        }

        /// Length of the longest configured operator at the cursor
        fn match_operator(&self) -> Option<usize> {
            let rest = self.rest();
            self.config
                .operators
                .iter()
                .filter(|op| !op.is_empty() && rest.starts_with(*op))
                .map(|op| op.len())
                .max()
        }

        /// Digits only; decimals, prefixes and suffixes are recombined later.
        fn scan_number(&mut self) -> Token {
            let len = self
                .rest()
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(self.rest().len());
            self.take(TokenKind::Number, len)
        }

        fn scan_string(
            &mut self,
            quote: char,
        ) -> Token {
            self.advance();
            let mut value = String::new();

            while let Some(c) = self.advance() {
                match c {
                    '\\' => match self.advance() {
                        Some(escaped) if escaped == quote => value.push(quote),
                        Some(escaped) => {
                            value.push('\\');
                            value.push(escaped);
                        }
                        None => value.push('\\'),
                    },
                    c if c == quote => break,
                    c => value.push(c),
                }
            }

            Token::new(TokenKind::String, value)
        }

        fn scan_identifier(&mut self) -> Token {
            let start = self.offset;
            self.advance();
            while let Some(c) = self.peek() {
                if !(self.config.identifier_body)(c) {
                    break;
                }
                self.advance();
            }

            let value = &self.source[start..self.offset];
            let kind = if self.config.is_keyword(value) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            Token::new(kind, value)
        }

        fn scan_whitespace(&mut self) -> Token {
            let len = self
                .rest()
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(self.rest().len());
            self.take(TokenKind::Whitespace, len)
        }
    }
}

#[cfg(test)]
mod tests;

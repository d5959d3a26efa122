//! Token types

use std::fmt;

/// Token kind
///
/// The tokenizer only ever produces these eight classes. Parse steps may
/// re-type a token (several chain tokens collapse into one `Identifier`,
/// `else` + `if` collapse into one `Keyword`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    String,
    Identifier,
    Keyword,
    Punctuation,
    Operator,
    Comment,
    Whitespace,
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Punctuation => write!(f, "punctuation"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Whitespace => write!(f, "whitespace"),
        }
    }
}

/// Token
///
/// `value` holds the raw text of the atom. For strings it is the content
/// between the quotes, with escaped quote characters unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    /// Create a new token
    #[inline]
    pub fn new(
        kind: TokenKind,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    #[inline]
    pub fn identifier(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, value)
    }

    #[inline]
    pub fn keyword(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, value)
    }

    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(TokenKind::String, value)
    }

    /// Check whether this is a punctuation or operator token with exactly `text`.
    ///
    /// String tokens never count, so a quoted `"("` is not an opener.
    #[inline]
    pub fn is_symbol(
        &self,
        text: &str,
    ) -> bool {
        matches!(self.kind, TokenKind::Punctuation | TokenKind::Operator) && self.value == text
    }

    #[inline]
    pub fn is_keyword(
        &self,
        text: &str,
    ) -> bool {
        self.kind == TokenKind::Keyword && self.value == text
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Identifiers and keywords are the tokens that name something.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

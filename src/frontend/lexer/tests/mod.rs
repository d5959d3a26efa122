//! Lexer 单元测试
//!
//! 测试词法分析器的分词功能

use crate::frontend::lexer::{
    is_dollar_identifier_body, is_dollar_identifier_start, tokenize, LexError, Token, TokenKind,
    TokenizerConfig,
};

fn config() -> TokenizerConfig {
    TokenizerConfig {
        keywords: &["if", "else", "return", "const"],
        ..TokenizerConfig::default()
    }
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn values(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.value.as_str()).collect()
}

#[cfg(test)]
mod lexer_basic_tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        assert!(tokenize("", &config()).unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_is_one_token() {
        let tokens = tokenize("  \t ", &config()).unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::Whitespace, "  \t ")]);
    }

    #[test]
    fn test_whitespace_can_be_dropped() {
        let config = TokenizerConfig {
            keep_whitespace: false,
            ..config()
        };
        let tokens = tokenize("a = b", &config).unwrap();
        assert_eq!(values(&tokens), vec!["a", "=", "b"]);
    }

    #[test]
    fn test_keywords_are_retagged() {
        let tokens = tokenize("if (x) return y", &config()).unwrap();
        let named: Vec<_> = tokens.iter().filter(|t| t.is_named()).collect();
        assert_eq!(named[0].kind, TokenKind::Keyword);
        assert_eq!(named[1].kind, TokenKind::Identifier);
        assert_eq!(named[2].kind, TokenKind::Keyword);
        assert_eq!(named[3].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keyword_prefix_is_an_identifier() {
        let tokens = tokenize("iffy", &config()).unwrap();
        assert_eq!(tokens, vec![Token::identifier("iffy")]);
    }

    #[test]
    fn test_unicode_identifier() {
        let tokens = tokenize("größe_1", &config()).unwrap();
        assert_eq!(tokens, vec![Token::identifier("größe_1")]);
    }

    #[test]
    fn test_dollar_identifiers() {
        let config = TokenizerConfig {
            identifier_start: is_dollar_identifier_start,
            identifier_body: is_dollar_identifier_body,
            ..config()
        };
        let tokens = tokenize("$el.a$b", &config).unwrap();
        assert_eq!(values(&tokens), vec!["$el", ".", "a$b"]);
    }
}

#[cfg(test)]
mod lexer_number_tests {
    use super::*;

    #[test]
    fn test_numbers_are_digit_runs() {
        let tokens = tokenize("2.5", &config()).unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Number, TokenKind::Punctuation, TokenKind::Number]
        );
    }

    #[test]
    fn test_hex_prefix_is_split() {
        let tokens = tokenize("0x1F", &config()).unwrap();
        assert_eq!(values(&tokens), vec!["0", "x1F"]);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }
}

#[cfg(test)]
mod lexer_operator_tests {
    use super::*;

    #[test]
    fn test_longest_operator_wins() {
        let tokens = tokenize("a<=b", &config()).unwrap();
        assert_eq!(values(&tokens), vec!["a", "<=", "b"]);
        assert_eq!(tokens[1].kind, TokenKind::Operator);
    }

    #[test]
    fn test_punctuation() {
        let tokens = tokenize("f(a,b);", &config()).unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::Punctuation,
                TokenKind::Identifier,
                TokenKind::Punctuation,
                TokenKind::Identifier,
                TokenKind::Punctuation,
                TokenKind::Punctuation,
            ]
        );
    }
}

#[cfg(test)]
mod lexer_string_tests {
    use super::*;

    #[test]
    fn test_string_value_is_content() {
        let tokens = tokenize("'abc'", &config()).unwrap();
        assert_eq!(tokens, vec![Token::string("abc")]);
    }

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        let tokens = tokenize(r#""say \"hi\"" + x"#, &config()).unwrap();
        assert_eq!(tokens[0], Token::string("say \"hi\""));
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_other_escapes_are_kept() {
        let tokens = tokenize(r"'a\nb'", &config()).unwrap();
        assert_eq!(tokens[0].value, r"a\nb");
    }

    #[test]
    fn test_other_quote_is_content() {
        let tokens = tokenize(r#"'"'"#, &config()).unwrap();
        assert_eq!(tokens, vec![Token::string("\"")]);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = tokenize("'abc", &config()).unwrap();
        assert_eq!(tokens, vec![Token::string("abc")]);
    }
}

#[cfg(test)]
mod lexer_comment_tests {
    use super::*;

    #[test]
    fn test_line_comment_runs_to_end() {
        let tokens = tokenize("a // b (c", &config()).unwrap();
        assert_eq!(tokens.last(), Some(&Token::new(TokenKind::Comment, "// b (c")));
    }

    #[test]
    fn test_block_comment_ends_at_marker() {
        let tokens = tokenize("a /* b */ c", &config()).unwrap();
        assert_eq!(values(&tokens), vec!["a", " ", "/* b */", " ", "c"]);
    }

    #[test]
    fn test_open_block_comment_runs_to_end() {
        let tokens = tokenize("a /* b", &config()).unwrap();
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Comment));
    }

    #[test]
    fn test_hash_comment() {
        let config = TokenizerConfig {
            line_comment: Some("#"),
            block_comment: None,
            ..config()
        };
        let tokens = tokenize("x = 1  # note", &config).unwrap();
        assert_eq!(tokens.last().map(|t| t.value.as_str()), Some("# note"));
    }
}

#[cfg(test)]
mod lexer_error_tests {
    use super::*;

    #[test]
    fn test_unknown_character_fails() {
        let err = tokenize("a @ b", &config()).unwrap_err();
        assert_eq!(
            err,
            LexError::UnparsableInput {
                position: 2,
                fragment: "@ b".to_string(),
            }
        );
    }

    #[test]
    fn test_error_fragment_is_bounded() {
        let line = format!("x = `{}`", "y".repeat(40));
        let LexError::UnparsableInput { position, fragment } = tokenize(&line, &config()).unwrap_err();
        assert_eq!(position, 4);
        assert_eq!(fragment.chars().count(), 16);
    }
}

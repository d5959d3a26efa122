//! Logger 单元测试
//!
//! Rendering, key generation and caret placement

use crate::backends::logger::{
    abbreviate, key_for, placeholder, LogFormat, Logger, LoggerConfig, LoggerError,
};
use crate::frontend::lexer::{Token, TokenKind};
use crate::frontend::parser::ParseResult;
use crate::frontend::shared::Direction;

fn console(method: &str) -> LogFormat {
    LogFormat::new(format!("console.{method}("), ", ", ");", '\'')
}

fn java() -> LogFormat {
    LogFormat::new("System.out.println(", " + ", ");", '"').with_insert_spaces(true)
}

fn items(names: &[&str]) -> Vec<Vec<Token>> {
    names.iter().map(|name| vec![Token::identifier(*name)]).collect()
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_id_matching_first_item_is_suppressed() {
        let result = ParseResult {
            log_id: Some(Token::identifier("foo")),
            log_items: items(&["foo"]),
            ..ParseResult::default()
        };
        let statement = Logger::render_with(&result, &console("log"));
        assert_eq!(statement.text, "console.log('foo:', foo);");
    }

    #[test]
    fn test_keyword_id_is_quoted_without_key() {
        let result = ParseResult {
            log_id: Some(Token::keyword("if")),
            log_items: items(&["a", "b"]),
            ..ParseResult::default()
        };
        let statement = Logger::render_with(&result, &console("log"));
        assert_eq!(statement.text, "console.log('if', 'a:', a, 'b:', b);");
    }

    #[test]
    fn test_literal_item_has_no_key() {
        let result = ParseResult {
            log_items: vec![vec![Token::string("done")], vec![Token::new(TokenKind::Number, "42")]],
            ..ParseResult::default()
        };
        let statement = Logger::render_with(&result, &console("log"));
        assert_eq!(statement.text, "console.log('done', 42);");
    }

    #[test]
    fn test_insert_spaces_pads_keys() {
        let result = ParseResult {
            log_items: items(&["a", "b"]),
            ..ParseResult::default()
        };
        let statement = Logger::render_with(&result, &java());
        assert_eq!(statement.text, "System.out.println(\"a: \" + a + \" b: \" + b);");
    }

    #[test]
    fn test_insert_spaces_after_log_id() {
        let result = ParseResult {
            log_id: Some(Token::keyword("return")),
            log_items: items(&["x"]),
            ..ParseResult::default()
        };
        let statement = Logger::render_with(&result, &java());
        assert_eq!(statement.text, "System.out.println(\"return\" + \" x: \" + x);");
    }

    #[test]
    fn test_identifier_wrap() {
        let format = console("log").with_identifier_wrap("String(", ")");
        let result = ParseResult {
            log_items: items(&["foo"]),
            ..ParseResult::default()
        };
        let statement = Logger::render_with(&result, &format);
        assert_eq!(statement.text, "console.log('foo:', String(foo));");
    }

    #[test]
    fn test_quote_in_key_is_escaped() {
        let result = ParseResult {
            log_items: vec![vec![Token::identifier("map['k']")]],
            ..ParseResult::default()
        };
        let statement = Logger::render_with(&result, &console("log"));
        assert_eq!(statement.text, "console.log('map[\\'k\\']:', map['k']);");
    }

    #[test]
    fn test_empty_result_renders_bare_call() {
        let statement = Logger::render_with(&ParseResult::default(), &console("log"));
        assert_eq!(statement.text, "console.log();");
        assert_eq!(statement.caret, "console.log(".len());
    }

    #[test]
    fn test_caret_sits_before_suffix() {
        let result = ParseResult {
            log_items: items(&["foo"]),
            ..ParseResult::default()
        };
        let statement = Logger::render_with(&result, &console("log"));
        assert_eq!(&statement.text[statement.caret..], ");");
    }

    #[test]
    fn test_caret_counts_characters() {
        let result = ParseResult {
            log_items: items(&["größe"]),
            ..ParseResult::default()
        };
        let statement = Logger::render_with(&result, &console("log"));
        let chars = statement.text.chars().count();
        assert_eq!(statement.caret, chars - 2);
    }

    #[test]
    fn test_placeholder() {
        let statement = Logger::render_with(&placeholder(12), &console("log"));
        assert_eq!(statement.text, "console.log('L12');");
    }
}

#[cfg(test)]
mod format_source_tests {
    use super::*;

    #[test]
    fn test_missing_format_is_an_error() {
        let result = ParseResult::default();
        assert_eq!(Logger::new().render(&result), Err(LoggerError::MissingFormat));
    }

    #[test]
    fn test_result_format_is_used_when_unbound() {
        let result = ParseResult {
            log_items: items(&["x"]),
            log_format: Some(console("warn")),
            ..ParseResult::default()
        };
        let statement = Logger::new().render(&result).unwrap();
        assert_eq!(statement.text, "console.warn('x:', x);");
    }

    #[test]
    fn test_bound_format_wins() {
        let result = ParseResult {
            log_items: items(&["x"]),
            log_format: Some(console("warn")),
            ..ParseResult::default()
        };
        let statement = Logger::with_format(console("info")).render(&result).unwrap();
        assert_eq!(statement.text, "console.info('x:', x);");
    }
}

#[cfg(test)]
mod key_tests {
    use super::*;

    #[test]
    fn test_short_key_is_kept() {
        assert_eq!(abbreviate("foo.bar"), "foo.bar");
        assert_eq!(key_for("foo"), "foo:");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let text = "a".repeat(20);
        assert_eq!(abbreviate(&text), text);
    }

    #[test]
    fn test_long_key_is_abbreviated() {
        assert_eq!(
            abbreviate("this.state.someVeryLongName"),
            "this.sta..LongName"
        );
        assert_eq!(key_for("this.state.someVeryLongName"), "this.sta..LongName:");
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    fn cycle() -> LoggerConfig {
        LoggerConfig::new(vec![console("log"), console("info"), console("warn"), console("error")]).unwrap()
    }

    #[test]
    fn test_empty_config_is_rejected() {
        assert!(LoggerConfig::new(Vec::new()).is_none());
    }

    #[test]
    fn test_rotation_wraps_both_ways() {
        let config = cycle();
        assert_eq!(config.rotate(0, Direction::Forward), 1);
        assert_eq!(config.rotate(3, Direction::Forward), 0);
        assert_eq!(config.rotate(0, Direction::Backward), 3);
    }

    #[test]
    fn test_single_format_rotates_to_itself() {
        let config = LoggerConfig::single(console("log"));
        assert_eq!(config.rotate(0, Direction::Forward), 0);
        assert_eq!(config.rotate(0, Direction::Backward), 0);
    }

    #[test]
    fn test_index_of() {
        let config = cycle();
        assert_eq!(config.index_of(&console("warn")), Some(2));
        assert_eq!(config.index_of(&console("debug")), None);
    }

    #[test]
    fn test_matches_line_ignores_indentation() {
        assert!(console("log").matches_line("    console.log('x:', x);"));
        assert!(!console("log").matches_line("console.info(x);"));
    }
}

//! Rotator 单元测试

use crate::backends::logger::{LogFormat, LoggerConfig};
use crate::frontend::lexer::{tokenize, Token, TokenizerConfig};
use crate::frontend::rotator::LogRotator;
use crate::frontend::shared::Direction;

fn console(method: &str) -> LogFormat {
    LogFormat::new(format!("console.{method}("), ", ", ");", '\'')
}

fn console_rotator() -> LogRotator {
    let formats = ["log", "info", "warn", "error"].iter().map(|m| console(m)).collect();
    LogRotator::new(LoggerConfig::new(formats).unwrap())
}

fn lex(line: &str) -> Vec<Token> {
    tokenize(line, &TokenizerConfig::default()).unwrap()
}

fn rotate(
    rotator: &LogRotator,
    line: &str,
    direction: Direction,
) -> Option<String> {
    rotator.rotate(lex(line), direction).map(|statement| statement.text)
}

fn item_texts(items: &[Vec<Token>]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.iter().map(|t| t.value.as_str()).collect())
        .collect()
}

#[cfg(test)]
mod rotation_tests {
    use super::*;

    #[test]
    fn test_rotate_forward() {
        let rotator = console_rotator();
        assert_eq!(
            rotate(&rotator, "console.log('foo:', foo);", Direction::Forward).as_deref(),
            Some("console.info('foo:', foo);")
        );
    }

    #[test]
    fn test_rotate_wraps_to_first() {
        let rotator = console_rotator();
        assert_eq!(
            rotate(&rotator, "console.error('if', 'a:', a, 'b:', b);", Direction::Forward).as_deref(),
            Some("console.log('if', 'a:', a, 'b:', b);")
        );
    }

    #[test]
    fn test_rotate_backward_wraps_to_last() {
        let rotator = console_rotator();
        assert_eq!(
            rotate(&rotator, "console.log('foo:', foo);", Direction::Backward).as_deref(),
            Some("console.error('foo:', foo);")
        );
    }

    #[test]
    fn test_indentation_is_ignored() {
        let rotator = console_rotator();
        assert_eq!(
            rotate(&rotator, "    console.warn('x:', x);", Direction::Forward).as_deref(),
            Some("console.error('x:', x);")
        );
    }

    #[test]
    fn test_caret_before_suffix() {
        let rotator = console_rotator();
        let statement = rotator
            .rotate(lex("console.log('foo:', foo);"), Direction::Forward)
            .unwrap();
        assert_eq!(statement.caret, statement.text.chars().count() - 2);
    }

    #[test]
    fn test_quote_follows_new_format() {
        let config = LoggerConfig::new(vec![
            console("log"),
            LogFormat::new("console.debug(", ", ", ");", '"'),
        ])
        .unwrap();
        let rotator = LogRotator::new(config);
        assert_eq!(
            rotate(&rotator, "console.log('it\\'s', x);", Direction::Forward).as_deref(),
            Some("console.debug(\"it's\", \"x:\", x);")
        );
    }

    #[test]
    fn test_concatenation_format_round_trip() {
        let out = LogFormat::new("System.out.println(", " + ", ");", '"').with_insert_spaces(true);
        let err = LogFormat::new("System.err.println(", " + ", ");", '"').with_insert_spaces(true);
        let rotator = LogRotator::new(LoggerConfig::new(vec![out, err]).unwrap());
        let line = "System.out.println(\"if\" + \" a: \" + a + \" b: \" + b);";

        let rotated = rotate(&rotator, line, Direction::Forward).unwrap();
        assert_eq!(rotated, "System.err.println(\"if\" + \" a: \" + a + \" b: \" + b);");
        assert_eq!(rotate(&rotator, &rotated, Direction::Forward).as_deref(), Some(line));
    }

    #[test]
    fn test_blank_separator_full_cycle() {
        let log = LogFormat::new("log(", " ", ")", '\'');
        let warn = LogFormat::new("warn(", " ", ")", '\'');
        let rotator = LogRotator::new(LoggerConfig::new(vec![log, warn]).unwrap());
        let line = "log('if' 'a:' a 'b:' b)";

        let rotated = rotate(&rotator, line, Direction::Forward).unwrap();
        assert_eq!(rotated, "warn('if' 'a:' a 'b:' b)");
        assert_eq!(rotate(&rotator, &rotated, Direction::Forward).as_deref(), Some(line));
    }

    #[test]
    fn test_blank_separator_recovers_items() {
        let log = LogFormat::new("log(", " ", ")", '\'');
        let rotator = LogRotator::new(LoggerConfig::new(vec![log]).unwrap());
        let result = rotator.recover(lex("log( 'x:'  x  'y:' y )")).unwrap();
        assert_eq!(result.log_id, None);
        assert_eq!(item_texts(&result.log_items), vec!["x", "y"]);
    }

    #[test]
    fn test_unpadded_separator_still_splits() {
        let rotator = console_rotator();
        let result = rotator.recover(lex("console.log('a:',a,'b:',b);")).unwrap();
        assert_eq!(item_texts(&result.log_items), vec!["a", "b"]);
    }
}

#[cfg(test)]
mod recovery_tests {
    use super::*;

    #[test]
    fn test_not_rotatable() {
        let rotator = console_rotator();
        assert!(rotator.recover(lex("somethingElse(123);")).is_none());
        assert!(rotate(&rotator, "somethingElse(123);", Direction::Forward).is_none());
    }

    #[test]
    fn test_missing_suffix_is_not_rotatable() {
        let rotator = console_rotator();
        assert!(rotator.recover(lex("console.log('foo:', foo")).is_none());
    }

    #[test]
    fn test_empty_line_is_not_rotatable() {
        let rotator = console_rotator();
        assert!(rotator.recover(Vec::new()).is_none());
    }

    #[test]
    fn test_recovers_id_and_items() {
        let rotator = console_rotator();
        let result = rotator
            .recover(lex("console.info('if', 'a:', a, 'b:', b);"))
            .unwrap();
        assert_eq!(result.log_id, Some(Token::string("if")));
        assert_eq!(item_texts(&result.log_items), vec!["a", "b"]);
        assert_eq!(result.log_format, Some(console("info")));
    }

    #[test]
    fn test_mismatched_key_is_kept_as_id() {
        let rotator = console_rotator();
        let result = rotator.recover(lex("console.log('x:', y);")).unwrap();
        assert_eq!(result.log_id, Some(Token::string("x")));
        assert_eq!(item_texts(&result.log_items), vec!["y"]);
    }

    #[test]
    fn test_nested_separators_stay_in_one_item() {
        let rotator = console_rotator();
        let result = rotator
            .recover(lex("console.log('f(a, b):', f(a, b), 'c:', c);"))
            .unwrap();
        assert_eq!(result.log_id, None);
        assert_eq!(item_texts(&result.log_items), vec!["f(a, b)", "c"]);
    }

    #[test]
    fn test_literal_items_survive() {
        let rotator = console_rotator();
        let result = rotator.recover(lex("console.log('x:', x, 42);")).unwrap();
        assert_eq!(item_texts(&result.log_items), vec!["x", "42"]);
    }

    #[test]
    fn test_identifier_wrap_is_removed() {
        let wrapped = console("log").with_identifier_wrap("String(", ")");
        let plain = console("info");
        let rotator = LogRotator::new(LoggerConfig::new(vec![wrapped, plain]).unwrap());
        assert_eq!(
            rotate(&rotator, "console.log('foo:', String(foo));", Direction::Forward).as_deref(),
            Some("console.info('foo:', foo);")
        );
    }

    #[test]
    fn test_log_id_loses_trailing_colon() {
        let rotator = console_rotator();
        assert_eq!(
            rotate(&rotator, "console.log('label:');", Direction::Forward).as_deref(),
            Some("console.info('label');")
        );
    }

    #[test]
    fn test_long_key_is_recognised() {
        let rotator = console_rotator();
        let line = "console.log('this.sta..LongName:', this.state.someVeryLongName);";
        let result = rotator.recover(lex(line)).unwrap();
        assert_eq!(result.log_id, None);
        assert_eq!(item_texts(&result.log_items), vec!["this.state.someVeryLongName"]);
    }
}

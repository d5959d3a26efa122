//! JavaScript statements end to end

use super::create;
use magiclog::{Direction, EditKind, MagicLog};

fn js(line: &str) -> String {
    create(line, "javascript")
}

#[test]
fn test_declaration() {
    assert_eq!(js("var foo = 1;"), "console.log('foo:', foo);");
}

#[test]
fn test_condition_uses_keyword_as_id() {
    assert_eq!(js("if (a + b)"), "console.log('if', 'a:', a, 'b:', b);");
    assert_eq!(
        js("} else if (count > max) {"),
        "console.log('else if', 'count:', count, 'max:', max);"
    );
}

#[test]
fn test_destructuring_drops_keys_and_calls() {
    assert_eq!(js("const {a, b} = getObj();"), "console.log('a:', a, 'b:', b);");
}

#[test]
fn test_member_chains() {
    assert_eq!(
        js("this.user.name = getName(id);"),
        "console.log('this.user.name:', this.user.name, 'id:', id);"
    );
}

#[test]
fn test_arrow_function_logs_its_parameters() {
    assert_eq!(js("const handler = async (event) => {"), "console.log('event:', event);");
}

#[test]
fn test_inline_lambda_is_dropped() {
    assert_eq!(js("const ids = items.map(x => x.id);"), "console.log('ids:', ids);");
}

#[test]
fn test_bracket_access_keeps_index() {
    assert_eq!(
        js("return arr[i] * 2;"),
        "console.log('return', 'arr[i]:', arr[i], 'i:', i);"
    );
}

#[test]
fn test_long_keys_are_abbreviated() {
    assert_eq!(
        js("const result = this.configuration.settings.value;"),
        "console.log('result:', result, 'this.con..gs.value:', this.configuration.settings.value);"
    );
}

#[test]
fn test_literals_only() {
    assert_eq!(js("throw new Error(\"bad\");"), "console.log('throw');");
    assert_eq!(js("\"hello\""), "console.log('hello');");
}

#[test]
fn test_jsx_alias() {
    assert_eq!(create("var foo = 1;", "javascriptreact"), "console.log('foo:', foo);");
}

#[test]
fn test_cycle() {
    let mut magic = MagicLog::default();
    let mut line = magic.create("var foo = 1;", "javascript", 1).statement.text;
    let mut seen = Vec::new();
    for _ in 0..4 {
        let edit = magic.create_or_rotate(&line, "javascript", 1);
        assert_eq!(edit.kind, EditKind::Rotated);
        line = edit.statement.text;
        seen.push(line.clone());
    }
    assert_eq!(
        seen,
        vec![
            "console.info('foo:', foo);",
            "console.warn('foo:', foo);",
            "console.error('foo:', foo);",
            "console.log('foo:', foo);",
        ]
    );
}

#[test]
fn test_other_calls_are_not_rotated() {
    let mut magic = MagicLog::default();
    assert!(magic
        .rotate("somethingElse(123);", "javascript", Direction::Forward)
        .is_none());
    assert!(!magic.is_log_statement("somethingElse(123);", "javascript"));
}

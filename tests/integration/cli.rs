//! Integration tests for the `magiclog` command

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Helper function to get the path to the magiclog binary
fn magiclog_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_magiclog"))
}

/// Run with an empty settings file so the user's own config never leaks in
fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();
    Command::new(magiclog_bin())
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("Failed to execute magiclog")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_create() {
    let output = run(&["create", "var foo = 1;"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "console.log('foo:', foo);\n");
}

#[test]
fn test_create_with_caret() {
    let output = run(&["--caret", "-l", "python", "create", "x = 1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "print(\"x:\", x)\t13\n");
}

#[test]
fn test_rotate_backward() {
    let output = run(&["rotate", "--backward", "console.log('foo:', foo);"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "console.error('foo:', foo);\n");
}

#[test]
fn test_rotate_rejects_plain_code() {
    let output = run(&["rotate", "foo(1);"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not a log statement"));
}

#[test]
fn test_check() {
    assert!(run(&["check", "  console.warn(x);"]).status.success());
    assert!(!run(&["check", "warn(x);"]).status.success());
}

#[test]
fn test_magic_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    let mut child = Command::new(magiclog_bin())
        .args(["--config"])
        .arg(&config)
        .args(["--language", "java", "magic"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to execute magiclog");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"String name = user.getName();\nSystem.out.println(\"name: \" + name);\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "System.out.println(\"name: \" + name);\nSystem.err.println(\"name: \" + name);\n"
    );
}

#[test]
fn test_missing_config_is_an_error() {
    let output = Command::new(magiclog_bin())
        .args(["--config", "/nonexistent/magiclog.toml", "create", "x"])
        .output()
        .expect("Failed to execute magiclog");
    assert!(!output.status.success());
}

#[test]
fn test_languages() {
    let output = run(&["languages"]);
    assert!(output.status.success());
    let out = stdout(&output);
    for id in ["javascript", "typescript", "java", "csharp", "python"] {
        assert!(out.contains(id));
    }
    assert!(out.contains("jsx"));
}

#[test]
fn test_tokens() {
    let output = run(&["tokens", "a.b"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 3);
    assert!(out.starts_with("identifier"));
}

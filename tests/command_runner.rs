#![cfg(unix)]

use anyhow::Result;
use serde_json::json;
use std::path::Path;
use test_cmd::runner::{CommandRunner, Runner};

const ECHO: &str = "/bin/echo";

#[test]
fn passes_data_then_stdin_marker() -> Result<()> {
    if !Path::new(ECHO).is_file() {
        return Ok(());
    }
    let runner = CommandRunner::new(ECHO);

    let out = runner.run(&json!({}), b"ignored by echo")?;
    assert_eq!(out, b"-d {} -\n");

    let out = runner.run(&json!({"x": 1}), b"")?;
    assert_eq!(out, b"-d {\"x\":1} -\n");
    Ok(())
}

#[test]
fn argument_list_is_fixed() {
    assert_eq!(
        CommandRunner::args(&json!({"a": [1, null]})),
        vec!["-d", r#"{"a":[1,null]}"#, "-"]
    );
    assert_eq!(CommandRunner::args(&json!(null)), vec!["-d", "null", "-"]);
}

#[test]
fn command_that_cannot_start_produces_no_output() -> Result<()> {
    let runner = CommandRunner::new("/nonexistent/definitely-not-here");
    assert!(runner.run(&json!({}), b"input")?.is_empty());
    Ok(())
}

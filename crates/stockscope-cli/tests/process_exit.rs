//! Behavior-driven tests for the stockscope binary as a process
//!
//! These run the built executable offline and check stdout and the exit
//! status the shell sees.

use std::process::{Command, Output};

fn stockscope(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stockscope"))
        .args(["--offline", "--no-color"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("stockscope binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn unknown_slash_command_prints_usage_and_exits_zero() {
    // Given/When: An unrecognised slash command
    let output = stockscope(&["--no-banner", "/foo"]);

    // Then: The error and the command table are shown on a successful exit
    assert!(output.status.success(), "status: {:?}", output.status);
    let text = stdout(&output);
    assert!(text.starts_with("Unknown command: /foo\n"), "stdout: {text}");
    assert!(text.contains("Usage: stockscope"));
    assert!(text.contains("/gov [--past|--future]"));
}

#[test]
fn unknown_leading_option_is_an_unknown_command() {
    for token in ["--bogus", "-x"] {
        // Given/When: A leading dash token that is no global option
        let output = stockscope(&["--no-banner", token]);

        // Then: It is reported like any other unknown command
        assert!(output.status.success(), "status: {:?}", output.status);
        let text = stdout(&output);
        assert!(
            text.starts_with(&format!("Unknown command: {token}\n")),
            "stdout: {text}"
        );
        assert!(text.contains("Usage: stockscope"));
    }
}

#[test]
fn banner_precedes_command_output() {
    // Given/When: Help without suppressing the home screen
    let output = stockscope(&["/help"]);

    // Then: The welcome line comes first and usage follows
    assert!(output.status.success());
    let text = stdout(&output);
    let welcome = text.find("Welcome to Stockscope!").expect("banner shown");
    let usage = text.find("Usage: stockscope").expect("usage shown");
    assert!(welcome < usage);
}

#[test]
fn offline_view_shows_the_demo_company() {
    // Given/When: A demo ticker with stray arguments
    let output = stockscope(&["--no-banner", "/view", "aapl", "extra", "-c"]);

    // Then: The chart view renders and the process succeeds
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("(AAPL)"), "stdout: {text}");
    assert!(text.contains("50-Day Moving Average (MA): "));
}

#[test]
fn json_mode_writes_only_the_report() {
    let output = stockscope(&["--format", "json", "/gov", "--past"]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    assert_eq!(value["report"], "gov");
}

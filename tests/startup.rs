//! Process-level tests for startup configuration failures.

use std::process::{Command, Output};

use rstest::rstest;

fn run_binary(vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sard-todo"));
    command.env_clear().env("RUST_LOG", "info");
    for (name, value) in vars {
        command.env(name, value);
    }
    command.output().expect("binary runs")
}

fn combined_output(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[rstest]
fn missing_graphql_url_stops_before_serving() {
    let output = run_binary(&[("PORT", "0")]);

    assert!(!output.status.success());
    let logs = combined_output(&output);
    assert!(logs.contains("GRAPHQL_URL not set"), "unexpected logs: {logs}");
    assert!(!logs.contains("listening"), "unexpected logs: {logs}");
}

#[rstest]
#[case("USER")]
#[case("PASS")]
#[case("LIST")]
#[case("BOARD")]
fn missing_board_variable_stops_before_serving(#[case] missing: &str) {
    let vars: Vec<(&str, &str)> = [
        ("PORT", "0"),
        ("GRAPHQL_URL", "http://127.0.0.1:1/graphql"),
        ("USER", "analyst"),
        ("PASS", "hunter2"),
        ("LIST", "Evidence"),
        ("BOARD", "Cases"),
    ]
    .into_iter()
    .filter(|(name, _)| *name != missing)
    .collect();

    let output = run_binary(&vars);

    assert!(!output.status.success());
    let logs = combined_output(&output);
    assert!(
        logs.contains(&format!("{missing} not set")),
        "unexpected logs: {logs}"
    );
}

#[rstest]
fn invalid_port_stops_before_serving() {
    let output = run_binary(&[("PORT", "http"), ("MONGO_URL", "mongodb://127.0.0.1:1")]);

    assert!(!output.status.success());
    assert!(combined_output(&output).contains("invalid value 'http' for PORT"));
}

#[rstest]
fn failed_board_login_stops_before_serving() {
    let output = run_binary(&[
        ("PORT", "0"),
        ("GRAPHQL_URL", "http://127.0.0.1:1/graphql"),
        ("USER", "analyst"),
        ("PASS", "hunter2"),
        ("LIST", "Evidence"),
        ("BOARD", "Cases"),
        ("UPSTREAM_TIMEOUT_SECS", "2"),
    ]);

    assert!(!output.status.success());
    let logs = combined_output(&output);
    assert!(
        logs.contains("board authentication failed"),
        "unexpected logs: {logs}"
    );
    assert!(!logs.contains("listening"), "unexpected logs: {logs}");
}

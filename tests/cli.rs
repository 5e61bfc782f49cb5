use std::process::{Command, Output};

use httptest::matchers::{all_of, any, eq, json_decoded, request};
use httptest::responders::status_code;
use httptest::{Expectation, Server};
use serde::Deserialize;

/// Decodes only when `text` is a string and `blocks` holds exactly two entries.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct WireShape {
    text: String,
    blocks: (serde_json::Value, serde_json::Value),
}

fn probe(webhook_url: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_slack_alert_probe"));
    cmd.current_dir(std::env::temp_dir())
        .env_remove("SLACK_WEBHOOK_URL")
        .env("RUST_LOG", "off");
    if let Some(url) = webhook_url {
        cmd.env("SLACK_WEBHOOK_URL", url);
    }
    cmd.output().expect("failed to run probe binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// `main` returns before `notifier::run` when configuration fails, so these
// two cases never reach the network.
#[test]
fn missing_url_exits_with_usage() {
    let output = probe(None);

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("ERROR: SLACK_WEBHOOK_URL environment variable not set!"));
    assert!(text.contains("Usage:"));
    assert!(!text.contains("Testing Slack webhook"));
}

#[test]
fn empty_url_exits_with_usage() {
    let output = probe(Some(""));

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("Testing Slack webhook"));
}

#[test]
fn successful_delivery_exits_zero() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/services/T1/B1/secret"),
            request::body(json_decoded::<WireShape, _>(any())),
        ])
        .times(1)
        .respond_with(status_code(200).body("ok")),
    );

    let output = probe(Some(&server.url("/services/T1/B1/secret").to_string()));

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Response status: 200"));
    assert!(text.contains("✅ SUCCESS!"));
}

#[test]
fn server_error_still_exits_zero() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/hook"))
            .times(1)
            .respond_with(status_code(500)),
    );

    let output = probe(Some(&server.url("/hook").to_string()));

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("❌ FAILED! Status code: 500"));
}

#[test]
fn connection_error_still_exits_zero() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let output = probe(Some(&format!("http://127.0.0.1:{port}/hook")));

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("❌ ERROR:"));
    assert!(text.contains("error sending request"));
    assert!(!text.contains("Caused by:"));
    assert!(stderr(&output).contains("Caused by:"));
}

#[test]
fn whitespace_url_is_attempted_and_exits_zero() {
    let output = probe(Some("   "));

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("Testing Slack webhook:    ..."));
    assert!(!text.contains("Usage:"));
    assert!(text.contains("❌ ERROR:"));
}

#[test]
fn long_url_is_truncated_in_preview() {
    let server = Server::run();
    let path = format!("/services/{}", "X".repeat(80));
    server.expect(
        Expectation::matching(all_of![
            request::method(eq("POST")),
            request::path(eq(path.clone())),
        ])
        .times(1)
        .respond_with(status_code(200)),
    );
    let url = server.url(path.as_str()).to_string();

    let output = probe(Some(&url));

    let first_line = stdout(&output).lines().next().unwrap().to_string();
    assert_eq!(first_line, format!("Testing Slack webhook: {}...", &url[..50]));
}

//! Integration tests for the `amphibia` CLI binary.
//!
//! Argument parsing, help output, config handling, and the `list` command
//! against a local mock server. Never touches the user's real config.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `amphibia` binary with env isolation.
///
/// Clears all `AMPHIBIA_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn amphibia_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("amphibia");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("AMPHIBIA_BASE_URL")
        .env_remove("AMPHIBIA_OUTPUT")
        .env_remove("AMPHIBIA_INSECURE")
        .env_remove("AMPHIBIA_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn mock_amphibians(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/amphibians"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = amphibia_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    amphibia_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("amphibian list")
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    amphibia_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("amphibia"));
}

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    amphibia_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_set_then_show() {
    let home = tempfile::tempdir().unwrap();

    amphibia_cmd(home.path())
        .args(["config", "set", "timeout", "9"])
        .assert()
        .success();

    amphibia_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout = 9"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let home = tempfile::tempdir().unwrap();

    amphibia_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .success();

    let output = amphibia_cmd(home.path())
        .args(["config", "init"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(78));
    assert!(combined_output(&output).contains("already exists"));

    amphibia_cmd(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let output = amphibia_cmd(home.path())
        .args(["config", "set", "colour", "red"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(78));
    assert!(combined_output(&output).contains("unknown key"));
}

#[test]
fn test_config_set_writes_file_values_only() {
    let home = tempfile::tempdir().unwrap();

    amphibia_cmd(home.path())
        .env("AMPHIBIA_TIMEOUT", "42")
        .args(["config", "set", "defaults.output", "table"])
        .assert()
        .success();

    let written =
        std::fs::read_to_string(home.path().join(".config/amphibia/config.toml")).unwrap();
    assert!(written.contains("timeout = 30"), "got:\n{written}");
    assert!(!written.contains("42"), "got:\n{written}");
    assert!(written.contains("output = \"table\""), "got:\n{written}");
}

#[test]
fn test_config_set_keeps_malformed_file() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".config/amphibia");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "timeout = [oops\n").unwrap();

    let output = amphibia_cmd(home.path())
        .args(["config", "set", "timeout", "5"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(78));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "timeout = [oops\n");
}

// ── List ────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json() {
    let server = mock_amphibians(
        200,
        json!([{
            "name": "Frog",
            "type": "Anura",
            "description": "Tailless amphibian.",
            "imgSrc": "http://x/f.png"
        }]),
    )
    .await;
    let home = tempfile::tempdir().unwrap();

    let output = amphibia_cmd(home.path())
        .args(["--base-url", &server.uri(), "-o", "json", "list"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items[0]["name"], "Frog");
    assert_eq!(items[0]["type"], "Anura");
    assert_eq!(items[0]["image_url"], "http://x/f.png");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_cards() {
    let server = mock_amphibians(
        200,
        json!([{
            "name": "Frog",
            "type": "Anura",
            "description": "Tailless amphibian.",
            "imgSrc": "http://x/f.png"
        }]),
    )
    .await;
    let home = tempfile::tempdir().unwrap();

    amphibia_cmd(home.path())
        .args(["--base-url", &server.uri(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frog (Anura)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_failure_without_retry() {
    let server = mock_amphibians(500, json!({ "error": "down" })).await;
    let home = tempfile::tempdir().unwrap();

    let output = amphibia_cmd(home.path())
        .args(["--base-url", &server.uri(), "list", "--no-retry"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(7));
    let text = combined_output(&output);
    assert!(
        text.contains("Failed to load amphibians"),
        "Expected failure notice in output:\n{text}"
    );
}

#[test]
fn test_list_invalid_base_url() {
    let home = tempfile::tempdir().unwrap();
    let output = amphibia_cmd(home.path())
        .args(["--base-url", "::not-a-url::", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(78));
    assert!(combined_output(&output).contains("base-url"));
}

//! Command line tests for the abacus-check binary

use std::fs;
use std::path::Path;
use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY_NAME: &str = "ABACUSAI_API_KEY";

/// Binary with a clean environment: no key, no proxies, env file under `dir`
fn checker_cmd(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("abacus-check");
    cmd.env_remove(KEY_NAME)
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("HTTPS_PROXY")
        .env_remove("https_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .current_dir(dir)
        .arg("--env-file")
        .arg(dir.join(".env.production"));
    cmd
}

async fn server_answering(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v0/listProjects"))
        .and(header("Authorization", "Bearer cli-test-key"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/api/v0/listProjects", server.uri())
}

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("abacus-check")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AbacusAI"));
}

#[test]
fn test_missing_key_fails_without_request() {
    let temp_dir = tempfile::tempdir().unwrap();

    checker_cmd(temp_dir.path())
        .arg("--endpoint")
        .arg("http://127.0.0.1:9/api/v0/listProjects")
        .assert()
        .code(1)
        .stdout("FAIL - Missing AbacusAI API key\n");
}

#[test]
fn test_empty_key_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    checker_cmd(temp_dir.path())
        .env(KEY_NAME, "")
        .assert()
        .code(1)
        .stdout("FAIL - Missing AbacusAI API key\n");
}

#[test]
fn test_invalid_endpoint_is_config_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    checker_cmd(temp_dir.path())
        .env(KEY_NAME, "cli-test-key")
        .arg("--endpoint")
        .arg("not a url")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("FAIL - Invalid endpoint URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_key_from_env_file_succeeds() {
    let server = server_answering(200).await;
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join(".env.production"),
        "ABACUSAI_API_KEY=cli-test-key\n",
    )
    .unwrap();
    let url = endpoint(&server);

    tokio::task::spawn_blocking(move || {
        checker_cmd(temp_dir.path())
            .arg("--endpoint")
            .arg(&url)
            .assert()
            .success()
            .stdout("OK - AbacusAI API connection successful\n");
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_key_exits_one() {
    let server = server_answering(401).await;
    let temp_dir = tempfile::tempdir().unwrap();
    let url = endpoint(&server);

    tokio::task::spawn_blocking(move || {
        checker_cmd(temp_dir.path())
            .env(KEY_NAME, "cli-test-key")
            .arg("--endpoint")
            .arg(&url)
            .assert()
            .code(1)
            .stdout("FAIL - AbacusAI API authentication failed\n");
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_as_json() {
    let server = server_answering(500).await;
    let temp_dir = tempfile::tempdir().unwrap();
    let url = endpoint(&server);

    let output = tokio::task::spawn_blocking(move || {
        checker_cmd(temp_dir.path())
            .env(KEY_NAME, "cli-test-key")
            .args(["--endpoint", url.as_str(), "--format", "json"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(value["status"], "fail");
    assert_eq!(value["outcome"], "http_failure");
    assert_eq!(value["http_status"], 500);
    assert_eq!(value["message"], "FAIL - AbacusAI API returned status code: 500");
}

#[test]
fn test_connection_refused_reports_request_exception() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let temp_dir = tempfile::tempdir().unwrap();

    let output = checker_cmd(temp_dir.path())
        .env(KEY_NAME, "cli-test-key")
        .arg("--endpoint")
        .arg(format!("http://127.0.0.1:{port}/api/v0/listProjects"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("FAIL - AbacusAI API request exception:"), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_env_file_line_is_skipped() {
    let server = server_answering(200).await;
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join(".env.production"),
        "OTHER_SETTING=1\nthis line is not valid\nABACUSAI_API_KEY=cli-test-key\n",
    )
    .unwrap();
    let url = endpoint(&server);

    tokio::task::spawn_blocking(move || {
        checker_cmd(temp_dir.path())
            .arg("--endpoint")
            .arg(&url)
            .assert()
            .success()
            .stdout("OK - AbacusAI API connection successful\n");
    })
    .await
    .unwrap();
}

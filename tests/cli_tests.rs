//! CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use dealfeed::testkit::domain::{charizard, deal, deals_json};
use dealfeed::testkit::http::{CannedResponse, Responder};
use predicates::prelude::*;
use tempfile::TempDir;

fn dealfeed() -> Command {
    let mut cmd = cargo_bin_cmd!("dealfeed");
    cmd.env_remove("DEALFEED_API_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A config path inside `dir` that does not exist, so defaults apply.
fn missing_config(dir: &TempDir) -> PathBuf {
    dir.path().join("absent.toml")
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

/// Run a command on a blocking thread so the in-process responder keeps serving.
async fn run(mut cmd: Command) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .expect("command thread")
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_help_lists_commands() {
    dealfeed()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("audit"));
}

#[test]
fn test_version() {
    dealfeed()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dealfeed"));
}

#[test]
fn test_config_validate_rejects_bad_value() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(&dir, "[audit]\nmin_discount = 1.5\n");

    dealfeed()
        .args(["config", "validate", "--config", &path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_discount"));
}

#[test]
fn test_config_validate_accepts_template() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");

    dealfeed()
        .args(["config", "init", &path_arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(path.exists());

    dealfeed()
        .args(["config", "validate", "-c", &path_arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(&dir, "# mine\n");

    dealfeed()
        .args(["config", "init", &path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn test_config_show_json_applies_env() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = missing_config(&dir);

    let output = dealfeed()
        .env("DEALFEED_API_URL", "http://env.local")
        .args(["--json", "config", "show", "-c", &path_arg(&path)])
        .output()
        .expect("run dealfeed");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["exists"], false);
    assert_eq!(value["config"]["api"]["base_url"], "http://env.local");
    assert_eq!(value["config"]["server"]["bind"], "127.0.0.1:3000");
}

#[test]
fn test_env_url_replaces_invalid_file_url() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(&dir, "[api]\nbase_url = \"not a url\"\n");

    dealfeed()
        .args(["config", "validate", "-c", &path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_url"));

    dealfeed()
        .env("DEALFEED_API_URL", "http://env.local")
        .args(["config", "validate", "-c", &path_arg(&path)])
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_render_writes_page_to_stdout() {
    let api = Responder::start(vec![CannedResponse::json(deals_json(&[
        deal(1),
        charizard(2),
    ]))])
    .await;
    let dir = tempfile::tempdir().expect("temp dir");

    let mut cmd = dealfeed();
    cmd.args(["render", "-c", &path_arg(&missing_config(&dir))])
        .args(["--api-url", &api.base_url]);

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Pikachu (25) – Base"))
        .stdout(predicate::str::contains(">5.00 €<"))
        .stdout(predicate::str::contains(">27%<"))
        .stdout(predicate::str::contains("Errore: ").not());

    let requests = api.requests().await;
    assert_eq!(requests.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_render_to_file_on_failed_load() {
    let api = Responder::start(vec![CannedResponse::status(500, "{}")]).await;
    let dir = tempfile::tempdir().expect("temp dir");
    let page = dir.path().join("out").join("feed.html");

    let mut cmd = dealfeed();
    cmd.args(["render", "-c", &path_arg(&missing_config(&dir))])
        .args(["--api-url", &api.base_url])
        .args(["-o", &path_arg(&page)]);

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Page Rendered"));

    let html = fs::read_to_string(&page).expect("rendered page");
    assert!(html.contains("Errore: feed load failed: HTTP error"));
    assert!(html.contains("Nessun deal ancora disponibile."));
    assert!(!html.contains("data-deal-id"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_table_with_limit() {
    let api = Responder::start(vec![CannedResponse::json(deals_json(&[deal(1)]))]).await;
    let dir = tempfile::tempdir().expect("temp dir");

    let mut cmd = dealfeed();
    cmd.args(["-v", "list", "-c", &path_arg(&missing_config(&dir))])
        .args(["--api-url", &api.base_url, "--limit", "5"]);

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Pikachu (25) – Base"))
        .stdout(predicate::str::contains("50%"))
        .stdout(predicate::str::contains("Fetched"));

    let requests = api.requests().await;
    assert!(requests[0].starts_with("GET /deals?limit=5 "), "{requests:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_fails_when_api_errors() {
    let api = Responder::start(vec![CannedResponse::status(500, "{}")]).await;
    let dir = tempfile::tempdir().expect("temp dir");

    let mut cmd = dealfeed();
    cmd.args(["list", "-c", &path_arg(&missing_config(&dir))])
        .args(["--api-url", &api.base_url]);

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("feed load failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_audit_json_reports_findings() {
    let mut bad = deal(7);
    bad.discount_pct = rust_decimal_macros::dec!(0.4);
    let api = Responder::start(vec![CannedResponse::json(deals_json(&[deal(1), bad]))]).await;
    let dir = tempfile::tempdir().expect("temp dir");

    let mut cmd = dealfeed();
    cmd.args(["--json", "audit", "-c", &path_arg(&missing_config(&dir))])
        .args(["--api-url", &api.base_url]);

    let output = run(cmd).await.success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(value["checked"], 2);
    assert_eq!(value["records"][0]["deal_id"], 7);
    assert_eq!(value["records"][0]["findings"][0]["kind"], "discount_mismatch");
}

#[test]
fn test_check_api_requires_base_url() {
    let dir = tempfile::tempdir().expect("temp dir");

    dealfeed()
        .args(["check", "api", "-c", &path_arg(&missing_config(&dir))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_url"));
}

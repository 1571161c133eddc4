//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stubgen(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stubgen").unwrap();
    cmd.current_dir(temp.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_generate_without_names_is_usage_error() {
    let temp = TempDir::new().unwrap();
    stubgen(&temp)
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NAME"));
}

#[test]
fn test_blank_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    stubgen(&temp)
        .args(["generate", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must not be blank"));

    assert!(!temp.path().join("app").exists());
}

#[test]
fn test_unknown_config_key_suggests_known_keys() {
    let temp = TempDir::new().unwrap();
    stubgen(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("paths.app_root"));
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    stubgen(&temp)
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_malformed_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("stubgen.toml"), "[paths\napp_root = ").unwrap();

    stubgen(&temp).args(["config", "list"]).assert().code(4);
}

#[test]
fn test_missing_provider_suggests_flag() {
    let temp = TempDir::new().unwrap();
    stubgen(&temp)
        .args(["generate", "Invoice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--provider"));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let temp = TempDir::new().unwrap();
    stubgen(&temp)
        .args(["-q", "-v", "config", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_import_rejects_non_xlsx_upload() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("rows.json"), r#"[["Hello", "World"]]"#).unwrap();

    stubgen(&temp)
        .args(["posts", "import", "--file", "posts.csv", "--rows", "rows.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("posts.csv"));

    assert!(!temp.path().join("storage/posts.json").exists());
}

#[test]
fn test_import_without_upload_is_user_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("rows.json"), "[]").unwrap();

    stubgen(&temp)
        .args(["posts", "import", "--rows", "rows.json"])
        .assert()
        .code(2);
}

#[test]
fn test_import_with_malformed_rows_is_user_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("rows.json"), r#"{"title": "Hello"}"#).unwrap();

    stubgen(&temp)
        .args(["posts", "import", "--file", "posts.xlsx", "--rows", "rows.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid rows"));
}

#[test]
fn test_fetch_with_missing_payload_stores_nothing() {
    let temp = TempDir::new().unwrap();

    stubgen(&temp)
        .args(["posts", "fetch", "--payload", "absent.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch data from the API"));

    assert!(!temp.path().join("storage/posts.json").exists());
}

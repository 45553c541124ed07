//! End-to-end tests for `build` and `auth`.
//!
//! `build` talks to the network, so these tests point the API base at an
//! unroutable address via the config file and assert the failure-isolation
//! behavior: every section fails independently and the page still renders
//! with inline errors.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_build_renders_page_with_inline_section_errors() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "api_base = \"http://127.0.0.1:1\"\n");
    let output = dir.path().join("site").join("index.html");

    Command::cargo_bin("sandboxes")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("build")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let html = std::fs::read_to_string(&output).unwrap();
    // All three sections are present despite every fetch failing.
    assert!(html.contains("Create InstantSearch App templates"));
    assert!(html.contains("InstantSearch.js examples"));
    assert!(html.contains("Documentation code samples"));
    assert!(html.contains("class=\"error\""));
}

#[test]
fn test_auth_set_show_clear() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");

    Command::cargo_bin("sandboxes")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["auth", "set", "ghp_0123456789abcdefgh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("token saved"));

    // The file holds the token; `show` only prints a masked form.
    let stored = std::fs::read_to_string(&config).unwrap();
    assert!(stored.contains("ghp_0123456789abcdefgh"));

    Command::cargo_bin("sandboxes")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["auth", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghp_"))
        .stdout(predicate::str::contains("0123456789").not());

    Command::cargo_bin("sandboxes")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["auth", "clear"])
        .assert()
        .success();

    Command::cargo_bin("sandboxes")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["auth", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No token configured"));
}

#[test]
fn test_invalid_config_degrades_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "this is [not valid toml");

    // An unparseable config is treated as absent, not fatal.
    Command::cargo_bin("sandboxes")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["auth", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No token configured"));
}

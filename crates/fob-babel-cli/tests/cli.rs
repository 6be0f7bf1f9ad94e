//! End-to-end tests for the fob-babel binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// Command with a clean, production-like environment rooted at `dir`.
fn fob_babel(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("fob-babel");
    cmd.current_dir(dir.path())
        .env_remove("BABEL_ENV")
        .env_remove("NODE_ENV")
        .env_remove("FOB_BUILD_STAGE")
        .env_remove("FOB_BABEL_STAGE")
        .env_remove("FOB_BABEL_TARGETS")
        .env("NO_COLOR", "1");
    cmd
}

fn write_cache(dir: &TempDir, content: &str) {
    let cache_dir = dir.path().join(".cache");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(cache_dir.join("babelState.json"), content).unwrap();
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn help_flag_works() {
    let dir = TempDir::new().unwrap();
    fob_babel(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn print_in_test_mode_needs_no_cache() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(fob_babel(&dir).env("NODE_ENV", "test").arg("print"));

    assert_eq!(value["presets"][0][1]["targets"], json!({ "node": "current" }));
    assert_eq!(value["presets"][0][1]["modules"], json!("commonjs"));
    let plugins = value["plugins"].as_array().unwrap();
    assert!(plugins.contains(&json!("babel-plugin-dynamic-import-node")));
}

#[test]
fn print_build_javascript_uses_cached_targets() {
    let dir = TempDir::new().unwrap();
    write_cache(&dir, r#"{ "browserslist": ">0.25%" }"#);

    let value = stdout_json(fob_babel(&dir).args(["print", "--stage", "build-javascript"]));

    assert_eq!(value["presets"][0][1]["targets"], json!(">0.25%"));
    let plugins = value["plugins"].as_array().unwrap();
    assert_eq!(plugins.len(), 9);
    assert_eq!(
        plugins[8],
        json!(["babel-plugin-transform-react-remove-prop-types", { "removeImport": true }])
    );
}

#[test]
fn print_stage_from_environment() {
    let dir = TempDir::new().unwrap();
    write_cache(&dir, "{}");

    let value = stdout_json(fob_babel(&dir).env("FOB_BUILD_STAGE", "develop").arg("print"));
    assert_eq!(value["presets"][1][1]["development"], json!(true));
    assert!(value["presets"][0][1].get("targets").is_none());
}

#[test]
fn explicit_targets_override_cache() {
    let dir = TempDir::new().unwrap();
    write_cache(&dir, r#"{ "browserslist": ">0.25%" }"#);

    let value = stdout_json(fob_babel(&dir).args([
        "print",
        "--stage",
        "develop",
        "-t",
        "chrome 100",
        "-t",
        "safari 15",
    ]));
    assert_eq!(
        value["presets"][0][1]["targets"],
        json!(["chrome 100", "safari 15"])
    );
}

#[test]
fn env_targets_shorthand_matches_flag() {
    let dir = TempDir::new().unwrap();
    write_cache(&dir, "{}");

    let value = stdout_json(
        fob_babel(&dir)
            .env("FOB_BABEL_TARGETS", "node:current")
            .args(["print", "--stage", "develop"]),
    );
    assert_eq!(value["presets"][0][1]["targets"], json!({ "node": "current" }));
}

#[test]
fn numeric_cached_targets_pass_through() {
    let dir = TempDir::new().unwrap();
    write_cache(&dir, r#"{ "browserslist": { "chrome": 58, "ie": 11 } }"#);

    let value = stdout_json(fob_babel(&dir).args(["print", "--stage", "develop"]));
    assert_eq!(value["presets"][0][1]["targets"], json!({ "chrome": 58, "ie": 11 }));
}

#[test]
fn print_writes_output_file() {
    let dir = TempDir::new().unwrap();
    fob_babel(&dir)
        .env("NODE_ENV", "test")
        .args(["print", "--out", "out/babel.config.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(dir.path().join("out/babel.config.json")).unwrap();
    let value: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["presets"].as_array().unwrap().len(), 2);
}

#[test]
fn print_without_cache_fails_with_guidance() {
    let dir = TempDir::new().unwrap();
    fob_babel(&dir)
        .args(["print", "--stage", "develop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NODE_ENV=test"));
}

#[test]
fn check_reports_cached_targets() {
    let dir = TempDir::new().unwrap();
    write_cache(&dir, r#"{ "browserslist": ["ie 11", "chrome 90"] }"#);

    fob_babel(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ie 11, chrome 90"));
}

#[test]
fn check_in_test_mode_bypasses_cache() {
    let dir = TempDir::new().unwrap();
    fob_babel(&dir)
        .env("BABEL_ENV", "test")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("bypassed"));
}

#[test]
fn check_without_cache_fails() {
    let dir = TempDir::new().unwrap();
    fob_babel(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fob build"));
}

// The cargo_bin! macro requires build script setup that's overkill for simple tests.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn realmsim() -> Command {
    let mut cmd = Command::cargo_bin("realmsim").expect("binary built");
    cmd.env_remove("REALMSIM_CONFIG");
    cmd
}

fn write_scenario(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("scenario.json");
    fs::write(&path, json).expect("write scenario");
    path
}

#[test]
fn test_help_flag() {
    realmsim()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("tables"));
}

#[test]
fn test_missing_scenario_mentions_path() {
    realmsim()
        .args(["report", "/nonexistent/scenario.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/scenario.json"));
}

#[test]
fn test_default_log_level_is_info() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(&dir, "{}");
    realmsim()
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting realmsim"));
    realmsim()
        .args(["--log-level", "warn", "report"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting realmsim").not());
}

#[test]
fn test_alliance_report() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        r#"{ "alliance": { "relations": 100, "same_religion": true, "bordering_common_enemy": true } }"#,
    );
    realmsim()
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alliance acceptance: 80.0%"))
        .stdout(predicate::str::contains("Common enemy"));
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        r#"{ "peace": { "war_score": { "battles": 20, "occupation": 30 },
                        "demands": [ { "kind": "cede_province", "value": 10 } ] } }"#,
    );
    let output = realmsim()
        .arg("report")
        .arg(&path)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["peace"]["war_score"], 50.0);
    assert_eq!(value["peace"]["total_warscore"], 10.0);
    assert_eq!(value["peace"]["enforceable"], true);
}

#[test]
fn test_config_from_env() {
    let dir = TempDir::new().unwrap();
    let scenario = write_scenario(&dir, r#"{ "alliance": { "relations": 100 } }"#);
    let config = dir.path().join("rules.json");
    fs::write(&config, r#"{ "settings": { "show_tooltips": false } }"#).unwrap();

    realmsim()
        .env("REALMSIM_CONFIG", &config)
        .arg("report")
        .arg(&scenario)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alliance acceptance: 50.0%"))
        .stdout(predicate::str::contains("Relations").not());
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let scenario = write_scenario(&dir, "{}");
    let config = dir.path().join("rules.json");
    fs::write(&config, r#"{ "max_notifications": 0 }"#).unwrap();

    realmsim()
        .arg("report")
        .arg(&scenario)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_notifications"));
}

#[test]
fn test_tables_by_name() {
    let output = realmsim().args(["tables", "--name", "nations"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tags: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|n| n["tag"].as_str())
        .collect();
    assert!(tags.contains(&"FRA"));
}

#[test]
fn test_all_tables() {
    realmsim()
        .arg("tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"subject-types\""))
        .stdout(predicate::str::contains("\"achievements\""));
}

use crate::cli::support::{skyroute, stdout_json, write_network};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_file_limits() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("skyroute.toml"),
        "[search]\nmax_routes = 1\n",
    )
    .unwrap();

    let output = skyroute()
        .current_dir(dir.path())
        .args(["--format", "json", "routes", "New York", "Sydney"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["max_routes"], 1);
    assert_eq!(json["routes"].as_array().unwrap().len(), 1);
}

#[test]
fn test_flag_overrides_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("skyroute.toml"),
        "[search]\nmax_routes = 1\n",
    )
    .unwrap();

    let output = skyroute()
        .current_dir(dir.path())
        .args(["--format", "json", "routes", "New York", "Sydney", "--max-routes", "2"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["routes"].as_array().unwrap().len(), 2);
}

#[test]
fn test_config_network_path() {
    let dir = tempdir().unwrap();
    write_network(dir.path(), "mine.json", &[("P", "Q", 4)]);
    fs::write(dir.path().join("skyroute.toml"), "network = \"mine.json\"\n").unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["cheapest", "P", "Q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: $4"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[search]\nmax_hops = 1\n").unwrap();

    let output = skyroute()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "routes", "New York", "Sydney"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["max_hops"], 1);
    assert_eq!(json["routes"].as_array().unwrap().len(), 0);
}

#[test]
fn test_invalid_config_value() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("skyroute.toml"), "[search]\nmax_hops = 0\n").unwrap();

    skyroute()
        .current_dir(dir.path())
        .arg("cities")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_hops"));
}

#[test]
fn test_malformed_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("skyroute.toml"), "[search\n").unwrap();

    skyroute()
        .current_dir(dir.path())
        .arg("cities")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

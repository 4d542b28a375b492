use crate::cli::support::skyroute;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_blank_city_is_usage_error() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["cheapest", "  ", "Paris"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "please enter both source and destination cities",
        ));
}

#[test]
fn test_blank_city_json_envelope() {
    let dir = tempdir().unwrap();

    let output = skyroute()
        .current_dir(dir.path())
        .args(["--format", "json", "routes", "Paris", ""])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
    assert_eq!(err["error"]["code"], 2);
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["--quiet", "cheapest", "", "Paris"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_format_flag() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["--format", "xml", "cities"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format: xml"));
}

#[test]
fn test_clap_error_as_json() {
    let dir = tempdir().unwrap();

    let output = skyroute()
        .current_dir(dir.path())
        .args(["--format", "json", "cheapest", "Paris"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_version_and_help() {
    skyroute().arg("--version").assert().success();
    skyroute()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cheapest"))
        .stdout(predicate::str::contains("routes"));
}

use crate::cli::support::skyroute;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "cities"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .arg("cities")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_enables_debug() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["--verbose", "cheapest", "Paris", "Rome"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dijkstra_done"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["--log-json", "--log-level", "debug", "cities"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_env_override() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .env("SKYROUTE_LOG", "skyroute=debug")
        .arg("cities")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_logs_do_not_pollute_stdout() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["--log-level", "trace", "--format", "json", "cheapest", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

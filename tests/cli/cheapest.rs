use crate::cli::support::{skyroute, stdout_json, write_triangle};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_cheapest_builtin_network() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["cheapest", "New York", "Sydney"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cheapest route from New York to Sydney",
        ))
        .stdout(predicate::str::contains(
            "New York -> Chicago -> Los Angeles -> Sydney",
        ))
        .stdout(predicate::str::contains("Total cost: $1100 (3 flights, 2 layovers)"));
}

#[test]
fn test_cheapest_normalizes_city_names() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["cheapest", "  new   york ", "SYDNEY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1100"));
}

#[test]
fn test_cheapest_exact_skips_normalization() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["--exact", "cheapest", "new york", "sydney"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No route found from new york to sydney.",
        ));
}

#[test]
fn test_cheapest_triangle_json() {
    let dir = tempdir().unwrap();
    let network = write_triangle(dir.path());

    let output = skyroute()
        .current_dir(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "cheapest", "A", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 20);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["flights"], 2);
}

#[test]
fn test_cheapest_unreachable_json() {
    let dir = tempdir().unwrap();

    let output = skyroute()
        .current_dir(dir.path())
        .args(["--format", "json", "cheapest", "Sydney", "Rome"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["cost"].is_null());
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_cheapest_unknown_city_is_not_an_error() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["cheapest", "Paris", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No route found from Paris to Atlantis.",
        ));
}

#[test]
fn test_cheapest_strict_unknown_city_fails() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["cheapest", "--strict", "Paris", "Atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("city not found: Atlantis"));
}

#[test]
fn test_cheapest_records() {
    let dir = tempdir().unwrap();
    let network = write_triangle(dir.path());

    skyroute()
        .current_dir(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "records", "cheapest", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mode=cheapest from=\"A\" to=\"C\" found=true cost=20",
        ))
        .stdout(predicate::str::contains(
            "R 1 cost=20 layovers=1 flights=2 path=\"A -> B -> C\"",
        ));
}

#[test]
fn test_cheapest_same_city_needs_no_flights() {
    let dir = tempdir().unwrap();

    skyroute()
        .current_dir(dir.path())
        .args(["cheapest", "Paris", "paris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: $0 (no flights needed)"))
        .stdout(predicate::str::contains("direct flight").not());
}

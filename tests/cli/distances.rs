use crate::cli::support::{skyroute, stdout_json, write_network, write_triangle};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_distances_human() {
    let dir = tempdir().unwrap();
    let network = write_network(
        dir.path(),
        "net.json",
        &[("A", "B", 10), ("B", "C", 10), ("A", "C", 25), ("D", "A", 1)],
    );

    skyroute()
        .current_dir(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["distances", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: $0"))
        .stdout(predicate::str::contains("B: $10"))
        .stdout(predicate::str::contains("C: $20"))
        .stdout(predicate::str::contains("D: unreachable"));
}

#[test]
fn test_distances_json() {
    let dir = tempdir().unwrap();
    let network = write_triangle(dir.path());

    let output = skyroute()
        .current_dir(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "distances", "B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(
        json["distances"],
        serde_json::json!([
            { "city": "A", "cost": null },
            { "city": "B", "cost": 0 },
            { "city": "C", "cost": 10 },
        ])
    );
}

#[test]
fn test_distances_unknown_source() {
    let dir = tempdir().unwrap();
    let network = write_triangle(dir.path());

    skyroute()
        .current_dir(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "records", "distances", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("D city=\"A\" cost=unreachable"))
        .stdout(predicate::str::contains("D city=\"C\" cost=unreachable"));
}

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for skyroute with a clean environment
pub fn skyroute() -> Command {
    let mut cmd = cargo_bin_cmd!("skyroute");
    cmd.env_remove("SKYROUTE_NETWORK")
        .env_remove("SKYROUTE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a JSON network file with the given flights
pub fn write_network(dir: &Path, name: &str, flights: &[(&str, &str, i64)]) -> PathBuf {
    let flights: Vec<serde_json::Value> = flights
        .iter()
        .map(|(from, to, cost)| serde_json::json!({ "from": from, "to": to, "cost": cost }))
        .collect();
    let path = dir.join(name);
    fs::write(
        &path,
        serde_json::to_string(&serde_json::json!({ "flights": flights })).unwrap(),
    )
    .unwrap();
    path
}

/// The A -> B -> C / A -> C triangle
pub fn write_triangle(dir: &Path) -> PathBuf {
    write_network(
        dir,
        "triangle.json",
        &[("A", "B", 10), ("B", "C", 10), ("A", "C", 25)],
    )
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

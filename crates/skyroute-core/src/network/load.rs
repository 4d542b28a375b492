//! Flight list loading from JSON, TOML, or YAML files

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::bail_unsupported;
use crate::error::{Result, RouteError};
use crate::graph::{Cost, Flight, MAX_FLIGHT_COST};

const SUPPORTED_EXTENSIONS: &str = "json, toml, yaml, yml";

/// On-disk shape shared by every format: `flights = [{ from, to, cost }]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NetworkFile {
    flights: Vec<RawFlight>,
}

/// Flight as written in a file, before precondition checks.
///
/// `cost` is kept loose so that fractional, negative or oversized values
/// surface as flight errors rather than parser errors.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFlight {
    from: String,
    to: String,
    cost: serde_json::Value,
}

/// Serialization format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFormat {
    Json,
    Toml,
    Yaml,
}

impl NetworkFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(NetworkFormat::Json),
            "toml" => Ok(NetworkFormat::Toml),
            "yaml" | "yml" => Ok(NetworkFormat::Yaml),
            other => bail_unsupported!("network file extension", other, SUPPORTED_EXTENSIONS),
        }
    }
}

/// Parse and validate flight records.
///
/// `origin` is only used to label errors. Flight numbers in errors are
/// 1-based, matching the order in the file.
pub fn parse_flights(content: &str, format: NetworkFormat, origin: &Path) -> Result<Vec<Flight>> {
    let file: NetworkFile = match format {
        NetworkFormat::Json => serde_json::from_str(content)?,
        NetworkFormat::Toml => toml::from_str(content)?,
        NetworkFormat::Yaml => serde_yaml::from_str(content)?,
    };

    file.flights
        .into_iter()
        .enumerate()
        .map(|(i, raw)| validate_flight(raw, i + 1, origin))
        .collect()
}

fn validate_flight(raw: RawFlight, number: usize, origin: &Path) -> Result<Flight> {
    let from = raw.from.trim();
    let to = raw.to.trim();
    if from.is_empty() {
        return Err(RouteError::invalid_flight(origin, number, "blank origin city"));
    }
    if to.is_empty() {
        return Err(RouteError::invalid_flight(origin, number, "blank destination city"));
    }
    let cost = parse_cost(&raw.cost)
        .map_err(|reason| RouteError::invalid_flight(origin, number, reason))?;
    Ok(Flight::new(from, to, cost))
}

/// Accept whole numbers in `0..=MAX_FLIGHT_COST`
fn parse_cost(value: &serde_json::Value) -> std::result::Result<Cost, String> {
    let serde_json::Value::Number(number) = value else {
        return Err(format!("cost must be a number, got {value}"));
    };

    if let Some(cost) = number.as_u64() {
        if cost > MAX_FLIGHT_COST {
            return Err(format!("cost {cost} exceeds the maximum of {MAX_FLIGHT_COST}"));
        }
        return Ok(cost);
    }
    if let Some(cost) = number.as_i64() {
        return Err(format!("negative cost {cost}"));
    }

    match number.as_f64() {
        Some(cost) if cost < 0.0 => Err(format!("negative cost {number}")),
        Some(cost) if cost.fract() != 0.0 => Err(format!("cost {number} is not a whole number")),
        Some(cost) if cost <= MAX_FLIGHT_COST as f64 => Ok(cost as Cost),
        _ => Err(format!("cost {number} exceeds the maximum of {MAX_FLIGHT_COST}")),
    }
}

/// Read a network file, picking the format from its extension
pub fn load_network_file(path: &Path) -> Result<Vec<Flight>> {
    let format = NetworkFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| RouteError::io_operation("read network", path.display(), e))?;
    parse_flights(&content, format, path)
}

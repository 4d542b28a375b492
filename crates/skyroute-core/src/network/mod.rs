//! Flight networks: the built-in sample and user-supplied files
//!
//! Loading is where the engine's preconditions are enforced: city names are
//! trimmed and non-blank, and costs are non-negative integers.

pub mod builtin;
pub mod load;

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::Result;
use crate::graph::{build_graph, Flight, FlightGraph};
use crate::trace_time;

pub use builtin::sample_flights;
pub use load::{load_network_file, parse_flights, NetworkFormat};

/// Where a network came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkSource {
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for NetworkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkSource::Builtin => write!(f, "builtin"),
            NetworkSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated flight list, ready to become a graph
#[derive(Debug, Clone)]
pub struct Network {
    pub source: NetworkSource,
    pub flights: Vec<Flight>,
}

impl Network {
    pub fn builtin() -> Self {
        Network {
            source: NetworkSource::Builtin,
            flights: sample_flights(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let flights = load_network_file(path)?;
        trace_time!(start, "load_network", flights = flights.len());
        Ok(Network {
            source: NetworkSource::File(path.to_path_buf()),
            flights,
        })
    }

    /// Load from `path` when given, otherwise use the built-in sample
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let network = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::builtin(),
        };
        tracing::debug!(source = %network.source, flights = network.flights.len(), "network_resolved");
        Ok(network)
    }

    pub fn to_graph(&self) -> FlightGraph {
        build_graph(self.flights.iter().cloned())
    }
}

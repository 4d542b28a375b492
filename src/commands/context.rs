//! Per-invocation state shared by every command

use skyroute_core::bail_usage;
use skyroute_core::config::Config;
use skyroute_core::error::{Result, RouteError};
use skyroute_core::graph::FlightGraph;
use skyroute_core::network::Network;
use skyroute_core::text::normalize_city_name;

use crate::cli::Cli;

pub struct QueryContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub network: Network,
    pub graph: FlightGraph,
}

impl QueryContext<'_> {
    /// Turn user input into a lookup key; `None` when the input is blank
    pub fn city(&self, raw: &str) -> Option<String> {
        let name = if self.cli.exact {
            raw.trim().to_string()
        } else {
            normalize_city_name(raw)
        };
        (!name.is_empty()).then_some(name)
    }

    /// Resolve a departure/arrival pair, rejecting blank input.
    ///
    /// With `strict`, cities missing from the network are a data error;
    /// otherwise they simply have no flights.
    pub fn city_pair(&self, from: &str, to: &str, strict: bool) -> Result<(String, String)> {
        let (Some(from), Some(to)) = (self.city(from), self.city(to)) else {
            bail_usage!("please enter both source and destination cities");
        };
        if strict {
            self.require_known(&from)?;
            self.require_known(&to)?;
        }
        Ok((from, to))
    }

    /// Resolve a single city argument
    pub fn single_city(&self, raw: &str) -> Result<String> {
        match self.city(raw) {
            Some(city) => Ok(city),
            None => bail_usage!("please enter a city"),
        }
    }

    fn require_known(&self, city: &str) -> Result<()> {
        if self.graph.contains(city) {
            Ok(())
        } else {
            Err(RouteError::not_found("city", city))
        }
    }
}

//! CLI argument parsing for skyroute
//!
//! Global flags: --network, --config, --format, --quiet, --verbose,
//! --log-level, --log-json, --exact

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_output_format;
use skyroute_core::format::OutputFormat;

/// Skyroute - cheapest flights and ranked alternatives between cities
#[derive(Parser, Debug)]
#[command(name = "skyroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Flight network file (.json, .toml, .yaml); defaults to the built-in sample
    #[arg(long, global = true, env = "SKYROUTE_NETWORK")]
    pub network: Option<PathBuf>,

    /// Configuration file (defaults to ./skyroute.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Match city names exactly instead of title-casing them
    #[arg(long, global = true)]
    pub exact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the single cheapest route between two cities
    Cheapest {
        /// Departure city
        from: String,

        /// Arrival city
        to: String,

        /// Fail when a city is not in the network
        #[arg(long)]
        strict: bool,
    },

    /// List ranked alternative routes between two cities
    Routes {
        /// Departure city
        from: String,

        /// Arrival city
        to: String,

        /// Maximum flights per route (overrides config)
        #[arg(long)]
        max_hops: Option<u32>,

        /// Maximum number of routes (overrides config)
        #[arg(long)]
        max_routes: Option<usize>,

        /// Fail when a city is not in the network
        #[arg(long)]
        strict: bool,
    },

    /// List every city in the network
    Cities,

    /// List outgoing flights of a city
    Flights {
        /// Departure city
        city: String,
    },

    /// Show the cheapest cost from one city to every other city
    Distances {
        /// Departure city
        from: String,
    },
}

//! Command dispatch logic for skyroute
use std::env;
use std::time::Instant;

use skyroute_core::config::Config;
use skyroute_core::error::Result;
use skyroute_core::network::Network;
use skyroute_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::context::QueryContext;
use crate::commands::{network, route};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;
    trace_time!(start, "load_config");

    // --network wins over the config file; neither means the built-in sample
    let network_path = cli.network.clone().or_else(|| config.network.clone());
    let network = Network::resolve(network_path.as_deref())?;
    let graph = network.to_graph();
    trace_time!(start, "build_graph", cities = graph.node_count());

    let ctx = QueryContext {
        cli,
        config,
        network,
        graph,
    };

    match &cli.command {
        Commands::Cheapest { from, to, strict } => route::cheapest::execute(&ctx, from, to, *strict),

        Commands::Routes {
            from,
            to,
            max_hops,
            max_routes,
            strict,
        } => route::alternatives::execute(&ctx, from, to, *max_hops, *max_routes, *strict),

        Commands::Cities => network::execute_cities(&ctx),

        Commands::Flights { city } => network::execute_flights(&ctx, city),

        Commands::Distances { from } => route::distances::execute(&ctx, from),
    }
}

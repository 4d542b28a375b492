use skyroute_core::graph::{Cost, Route, ShortestPath};
use skyroute_core::records::join_path;

use super::{flight_label, layover_label};
use crate::cli::Cli;

fn output_no_route(cli: &Cli, from: &str, to: &str) {
    if !cli.quiet {
        println!("No route found from {} to {}.", from, to);
    }
}

/// Output the cheapest route in human-readable format
pub fn output_cheapest(cli: &Cli, from: &str, to: &str, result: &ShortestPath) {
    let Some(cost) = result.cost else {
        output_no_route(cli, from, to);
        return;
    };

    if !cli.quiet {
        println!("Cheapest route from {} to {}", from, to);
    }
    println!("  {}", join_path(&result.path));

    // A one-city path means the traveller is already at the destination
    let summary = match result.hops() {
        0 => "no flights needed".to_string(),
        hops => format!(
            "{}, {}",
            flight_label(hops),
            layover_label(hops - 1).to_lowercase()
        ),
    };
    println!("  Total cost: ${} ({})", cost, summary);
}

/// Output ranked routes in human-readable format
pub fn output_routes(cli: &Cli, from: &str, to: &str, routes: &[Route]) {
    if routes.is_empty() {
        output_no_route(cli, from, to);
        return;
    }

    if !cli.quiet {
        println!("Available routes from {} to {}", from, to);
    }
    for (i, route) in routes.iter().enumerate() {
        let title = if i == 0 {
            "Best option".to_string()
        } else {
            format!("Option {}", i + 1)
        };
        println!();
        println!("{} - {}", title, layover_label(route.layovers));
        println!("  {}", join_path(&route.path));
        println!(
            "  Total cost: ${} ({})",
            route.cost,
            flight_label(route.hops())
        );
    }
}

/// Output a distance table in human-readable format
pub fn output_distances(cli: &Cli, from: &str, table: &[(&str, Option<Cost>)]) {
    if table.iter().all(|(city, _)| *city != from) && !cli.quiet {
        println!("{} is not in the network; every city is unreachable.", from);
    }
    for (city, cost) in table {
        match cost {
            Some(cost) => println!("{}: ${}", city, cost),
            None => println!("{}: unreachable", city),
        }
    }
}

//! Network inspection commands: cities, flights
use skyroute_core::error::Result;
use skyroute_core::format::OutputFormat;
use skyroute_core::records::escape_quotes;

use crate::commands::context::QueryContext;

/// List every city with its number of outgoing flights
pub fn execute_cities(ctx: &QueryContext<'_>) -> Result<()> {
    let graph = &ctx.graph;
    let cities: Vec<(&str, usize)> = graph
        .cities()
        .map(|city| (city, graph.neighbors(city).len()))
        .collect();

    match ctx.cli.format {
        OutputFormat::Human => {
            if cities.is_empty() && !ctx.cli.quiet {
                println!("No cities in network");
            }
            for (city, flights) in &cities {
                println!("{} ({})", city, super::route::flight_label(*flights));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "network": ctx.network.source.to_string(),
                "cities": cities
                    .iter()
                    .map(|(city, flights)| serde_json::json!({ "name": city, "flights": flights }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H skyroute=1 records=1 network=\"{}\" mode=cities count={}",
                escape_quotes(&ctx.network.source.to_string()),
                cities.len()
            );
            for (city, flights) in &cities {
                println!("C name=\"{}\" flights={}", escape_quotes(city), flights);
            }
        }
    }

    Ok(())
}

/// List the outgoing flights of one city in adjacency order
pub fn execute_flights(ctx: &QueryContext<'_>, city: &str) -> Result<()> {
    let city = ctx.single_city(city)?;
    let graph = &ctx.graph;
    let flights: Vec<(&str, u64)> = graph
        .neighbors(&city)
        .iter()
        .map(|edge| (graph.name(edge.to), edge.cost))
        .collect();

    match ctx.cli.format {
        OutputFormat::Human => {
            if flights.is_empty() {
                if !ctx.cli.quiet {
                    println!("No flights from {}", city);
                }
            } else {
                for (to, cost) in &flights {
                    println!("{} -> {} ${}", city, to, cost);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "city": city,
                "known": graph.contains(&city),
                "flights": flights
                    .iter()
                    .map(|(to, cost)| serde_json::json!({ "to": to, "cost": cost }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H skyroute=1 records=1 network=\"{}\" mode=flights city=\"{}\" count={}",
                escape_quotes(&ctx.network.source.to_string()),
                escape_quotes(&city),
                flights.len()
            );
            for (to, cost) in &flights {
                println!(
                    "F from=\"{}\" to=\"{}\" cost={}",
                    escape_quotes(&city),
                    escape_quotes(to),
                    cost
                );
            }
        }
    }

    Ok(())
}

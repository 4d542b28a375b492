use skyroute_core::config::SearchConfig;
use skyroute_core::error::Result;
use skyroute_core::graph::{Cost, Route, ShortestPath};

fn route_json(rank: usize, route: &Route) -> serde_json::Value {
    serde_json::json!({
        "rank": rank,
        "path": route.path,
        "cost": route.cost,
        "layovers": route.layovers,
        "flights": route.hops(),
    })
}

/// Output the cheapest route as JSON (`cost` is null when unreachable)
pub fn output_cheapest(from: &str, to: &str, result: &ShortestPath) -> Result<()> {
    let output = serde_json::json!({
        "from": from,
        "to": to,
        "found": result.found(),
        "path": result.path,
        "cost": result.cost,
        "flights": result.hops(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output ranked routes as JSON
pub fn output_routes(from: &str, to: &str, search: &SearchConfig, routes: &[Route]) -> Result<()> {
    let output = serde_json::json!({
        "from": from,
        "to": to,
        "max_hops": search.max_hops,
        "max_routes": search.max_routes,
        "routes": routes
            .iter()
            .enumerate()
            .map(|(i, route)| route_json(i + 1, route))
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output a distance table as JSON
pub fn output_distances(from: &str, table: &[(&str, Option<Cost>)]) -> Result<()> {
    let output = serde_json::json!({
        "from": from,
        "distances": table
            .iter()
            .map(|(city, cost)| serde_json::json!({ "city": city, "cost": cost }))
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

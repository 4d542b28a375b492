use skyroute_core::config::SearchConfig;
use skyroute_core::graph::{Cost, Route, ShortestPath};
use skyroute_core::records::{escape_quotes, route_record};

use crate::commands::context::QueryContext;

fn header(ctx: &QueryContext<'_>, mode: &str, fields: &str) -> String {
    format!(
        "H skyroute=1 records=1 network=\"{}\" mode={} {}",
        escape_quotes(&ctx.network.source.to_string()),
        mode,
        fields
    )
}

/// Output the cheapest route in records format
pub fn output_cheapest(ctx: &QueryContext<'_>, from: &str, to: &str, result: &ShortestPath) {
    let cost = result
        .cost
        .map_or_else(|| "none".to_string(), |c| c.to_string());
    println!(
        "{}",
        header(
            ctx,
            "cheapest",
            &format!(
                "from=\"{}\" to=\"{}\" found={} cost={}",
                escape_quotes(from),
                escape_quotes(to),
                result.found(),
                cost
            ),
        )
    );

    if let Some(cost) = result.cost {
        println!("{}", route_record(1, &Route::new(result.path.clone(), cost)));
    }
}

/// Output ranked routes in records format
pub fn output_routes(
    ctx: &QueryContext<'_>,
    from: &str,
    to: &str,
    search: &SearchConfig,
    routes: &[Route],
) {
    println!(
        "{}",
        header(
            ctx,
            "routes",
            &format!(
                "from=\"{}\" to=\"{}\" max_hops={} max_routes={} count={}",
                escape_quotes(from),
                escape_quotes(to),
                search.max_hops,
                search.max_routes,
                routes.len()
            ),
        )
    );

    for (i, route) in routes.iter().enumerate() {
        println!("{}", route_record(i + 1, route));
    }
}

/// Output a distance table in records format
pub fn output_distances(ctx: &QueryContext<'_>, from: &str, table: &[(&str, Option<Cost>)]) {
    println!(
        "{}",
        header(
            ctx,
            "distances",
            &format!("from=\"{}\" cities={}", escape_quotes(from), table.len()),
        )
    );

    for (city, cost) in table {
        let cost = cost.map_or_else(|| "unreachable".to_string(), |c| c.to_string());
        println!("D city=\"{}\" cost={}", escape_quotes(city), cost);
    }
}

//! Ranked alternative routes command
use std::time::Instant;

use skyroute_core::error::Result;
use skyroute_core::format::OutputFormat;
use skyroute_core::graph::find_routes;

use super::{human, json, records};
use crate::commands::context::QueryContext;

/// Execute the routes command
pub fn execute(
    ctx: &QueryContext<'_>,
    from: &str,
    to: &str,
    max_hops: Option<u32>,
    max_routes: Option<usize>,
    strict: bool,
) -> Result<()> {
    let start = Instant::now();
    let (from, to) = ctx.city_pair(from, to, strict)?;
    let search = ctx.config.search.with_overrides(max_hops, max_routes)?;

    let routes = find_routes(&ctx.graph, &from, &to, search.max_hops, search.max_routes);

    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), routes = routes.len(), "routes");
    }

    match ctx.cli.format {
        OutputFormat::Human => human::output_routes(ctx.cli, &from, &to, &routes),
        OutputFormat::Json => json::output_routes(&from, &to, &search, &routes)?,
        OutputFormat::Records => records::output_routes(ctx, &from, &to, &search, &routes),
    }

    Ok(())
}

//! Cheapest route command
use std::time::Instant;

use skyroute_core::error::Result;
use skyroute_core::format::OutputFormat;
use skyroute_core::graph::shortest_path;

use super::{human, json, records};
use crate::commands::context::QueryContext;

/// Execute the cheapest command
pub fn execute(ctx: &QueryContext<'_>, from: &str, to: &str, strict: bool) -> Result<()> {
    let start = Instant::now();
    let (from, to) = ctx.city_pair(from, to, strict)?;

    let result = shortest_path(&ctx.graph, &from, &to);

    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), found = result.found(), "cheapest");
    }

    match ctx.cli.format {
        OutputFormat::Human => human::output_cheapest(ctx.cli, &from, &to, &result),
        OutputFormat::Json => json::output_cheapest(&from, &to, &result)?,
        OutputFormat::Records => records::output_cheapest(ctx, &from, &to, &result),
    }

    Ok(())
}

//! Distance table command
use skyroute_core::error::Result;
use skyroute_core::format::OutputFormat;
use skyroute_core::graph::{dijkstra, SearchMode};

use super::{human, json, records};
use crate::commands::context::QueryContext;

/// Execute the distances command (full Dijkstra run, no early exit)
pub fn execute(ctx: &QueryContext<'_>, from: &str) -> Result<()> {
    let from = ctx.single_city(from)?;
    let distances = dijkstra(&ctx.graph, &from, SearchMode::Full);
    let table = distances.table();

    match ctx.cli.format {
        OutputFormat::Human => human::output_distances(ctx.cli, &from, &table),
        OutputFormat::Json => json::output_distances(&from, &table)?,
        OutputFormat::Records => records::output_distances(ctx, &from, &table),
    }

    Ok(())
}

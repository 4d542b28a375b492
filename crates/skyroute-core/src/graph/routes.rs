//! Route queries over a flight graph

use super::algos::{dijkstra, enumerate_routes};
use super::rank::rank_routes;
use super::types::{SearchMode, ShortestPath};
use super::{FlightGraph, Route};

/// Cheapest route from `start` to `end`.
///
/// Unknown cities and unreachable targets give an empty path with no cost.
/// `start == end` is the trivial zero-cost route.
#[tracing::instrument(skip(graph))]
pub fn shortest_path(graph: &FlightGraph, start: &str, end: &str) -> ShortestPath {
    if start == end {
        return ShortestPath {
            path: vec![start.to_string()],
            cost: Some(0),
        };
    }
    let Some(target) = graph.node_id(end) else {
        return ShortestPath::unreachable();
    };

    let result = dijkstra(graph, start, SearchMode::StopAt(target)).path_to(end);
    tracing::debug!(found = result.found(), cost = ?result.cost, "shortest_path");
    result
}

/// Up to `max_routes` cheapest simple routes using at most `max_hops` flights.
///
/// Enumeration is exhaustive within the hop bound before ranking, so the
/// result is the true best `max_routes` and independent of adjacency order
/// except among exact ties.
#[tracing::instrument(skip(graph))]
pub fn find_routes(
    graph: &FlightGraph,
    start: &str,
    end: &str,
    max_hops: u32,
    max_routes: usize,
) -> Vec<Route> {
    if max_routes == 0 {
        return Vec::new();
    }
    let candidates = enumerate_routes(graph, start, end, max_hops);
    let total = candidates.len();
    let ranked = rank_routes(candidates, max_routes);
    tracing::debug!(candidates = total, returned = ranked.len(), "find_routes");
    ranked
}

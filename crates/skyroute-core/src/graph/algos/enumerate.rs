use crate::graph::types::{Cost, NodeId, Route};
use crate::graph::FlightGraph;

/// One city on the current path and the next outgoing flight to try
struct Frame {
    node: NodeId,
    next_edge: usize,
    cost: Cost,
    hops: u32,
}

/// Every simple route from `start` to `end` using at most `max_hops` flights.
///
/// Routes come out in discovery order (adjacency insertion order); ranking
/// is left to [`rank_routes`](crate::graph::rank_routes). Unknown cities,
/// `start == end` and `max_hops == 0` all yield no routes.
#[tracing::instrument(skip(graph), fields(cities = graph.node_count()))]
pub fn enumerate_routes(graph: &FlightGraph, start: &str, end: &str, max_hops: u32) -> Vec<Route> {
    let (Some(start_id), Some(end_id)) = (graph.node_id(start), graph.node_id(end)) else {
        tracing::debug!("endpoint not in graph");
        return Vec::new();
    };
    if start_id == end_id || max_hops == 0 {
        return Vec::new();
    }

    let n = graph.node_count();
    let mut on_path = vec![false; n];
    let mut path = vec![start_id];
    let mut routes = Vec::new();

    // Explicit stack so path length never grows the call stack.
    // `on_path` is set when a frame is pushed and cleared when it is popped,
    // so sibling branches never see each other's cities as visited.
    on_path[start_id.index()] = true;
    let mut stack = vec![Frame {
        node: start_id,
        next_edge: 0,
        cost: 0,
        hops: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let next = if frame.hops < max_hops {
            graph.edges(frame.node).get(frame.next_edge).copied()
        } else {
            None
        };
        let Some(edge) = next else {
            on_path[frame.node.index()] = false;
            stack.pop();
            path.pop();
            continue;
        };
        frame.next_edge += 1;
        let cost = frame.cost.saturating_add(edge.cost);
        let hops = frame.hops + 1;

        if on_path[edge.to.index()] {
            continue;
        }
        if edge.to == end_id {
            let snapshot = path
                .iter()
                .chain(std::iter::once(&end_id))
                .map(|node| graph.name(*node).to_string())
                .collect();
            routes.push(Route::new(snapshot, cost));
            continue;
        }

        on_path[edge.to.index()] = true;
        path.push(edge.to);
        stack.push(Frame {
            node: edge.to,
            next_edge: 0,
            cost,
            hops,
        });
    }

    tracing::debug!(found = routes.len(), "enumerate_done");
    routes
}

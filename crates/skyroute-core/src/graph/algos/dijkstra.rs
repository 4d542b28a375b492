use crate::graph::types::{Cost, NodeId, SearchMode, ShortestPath};
use crate::graph::FlightGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap entry ordered by tentative cost, then by insertion index.
///
/// The index tie-break makes selection deterministic: among cities with
/// equal tentative cost, the one added to the graph first is settled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node: NodeId,
    pub accumulated_cost: Cost,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Per-city distances and predecessor links from one Dijkstra run
#[derive(Debug, Clone)]
pub struct Distances<'g> {
    graph: &'g FlightGraph,
    source: String,
    distance: Vec<Option<Cost>>,
    predecessor: Vec<Option<NodeId>>,
    settled: Vec<bool>,
}

impl<'g> Distances<'g> {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Minimum cost from the source, or `None` when unreachable.
    ///
    /// After a [`SearchMode::StopAt`] run only the target's value is final.
    pub fn distance(&self, id: &str) -> Option<Cost> {
        self.graph
            .node_id(id)
            .and_then(|node| self.distance[node.index()])
    }

    pub fn predecessor(&self, id: &str) -> Option<&'g str> {
        self.graph
            .node_id(id)
            .and_then(|node| self.predecessor[node.index()])
            .map(|pred| self.graph.name(pred))
    }

    pub fn is_settled(&self, id: &str) -> bool {
        self.graph
            .node_id(id)
            .is_some_and(|node| self.settled[node.index()])
    }

    /// Number of cities selected as current before the run ended
    pub fn settled_count(&self) -> usize {
        self.settled.iter().filter(|s| **s).count()
    }

    /// Walk predecessor links back from `target` to the source
    pub fn path_to(&self, target: &str) -> ShortestPath {
        if target == self.source {
            return ShortestPath {
                path: vec![self.source.clone()],
                cost: Some(0),
            };
        }

        let Some(target_id) = self.graph.node_id(target) else {
            return ShortestPath::unreachable();
        };
        let Some(cost) = self.distance[target_id.index()] else {
            return ShortestPath::unreachable();
        };
        if self.predecessor[target_id.index()].is_none() {
            return ShortestPath::unreachable();
        }

        let mut path = vec![self.graph.name(target_id).to_string()];
        let mut current = target_id;
        while let Some(pred) = self.predecessor[current.index()] {
            path.push(self.graph.name(pred).to_string());
            current = pred;
        }
        path.reverse();

        ShortestPath {
            path,
            cost: Some(cost),
        }
    }

    /// Every known city with its distance, in insertion order
    pub fn table(&self) -> Vec<(&'g str, Option<Cost>)> {
        self.graph
            .cities()
            .zip(self.distance.iter().copied())
            .collect()
    }
}

/// Single-source cheapest costs by edge relaxation.
///
/// An unknown source leaves every city unreachable. In
/// [`SearchMode::StopAt`] the run ends as soon as the target is selected,
/// which never changes the target's distance or path.
#[tracing::instrument(skip(graph), fields(cities = graph.node_count()))]
pub fn dijkstra<'g>(graph: &'g FlightGraph, source: &str, mode: SearchMode) -> Distances<'g> {
    let n = graph.node_count();
    let mut distances = Distances {
        graph,
        source: source.to_string(),
        distance: vec![None; n],
        predecessor: vec![None; n],
        settled: vec![false; n],
    };

    let Some(source_id) = graph.node_id(source) else {
        tracing::debug!("source not in graph");
        return distances;
    };

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    distances.distance[source_id.index()] = Some(0);
    heap.push(Reverse(HeapEntry {
        node: source_id,
        accumulated_cost: 0,
    }));

    while let Some(Reverse(HeapEntry {
        node: current,
        accumulated_cost,
    })) = heap.pop()
    {
        // Stale entry superseded by a cheaper relaxation
        if distances.settled[current.index()] {
            continue;
        }
        distances.settled[current.index()] = true;

        if mode == SearchMode::StopAt(current) {
            break;
        }

        for edge in graph.edges(current) {
            let candidate = accumulated_cost.saturating_add(edge.cost);
            let improves = distances.distance[edge.to.index()].is_none_or(|known| candidate < known);
            if improves {
                distances.distance[edge.to.index()] = Some(candidate);
                distances.predecessor[edge.to.index()] = Some(current);
                heap.push(Reverse(HeapEntry {
                    node: edge.to,
                    accumulated_cost: candidate,
                }));
            }
        }
    }

    tracing::debug!(settled = distances.settled_count(), "dijkstra_done");
    distances
}

//! Adjacency storage for the flight network

use std::collections::HashMap;

use super::types::{Cost, Edge, Flight, NodeId};

/// Directed, positively-weighted graph of cities.
///
/// Cities are interned in insertion order; each keeps an ordered list of
/// outgoing flights. Parallel flights between the same pair are kept.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl FlightGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a city if it is not already known. Idempotent.
    pub fn add_node(&mut self, id: &str) -> NodeId {
        if let Some(&node) = self.index.get(id) {
            return node;
        }
        let node = NodeId(self.names.len());
        self.names.push(id.to_string());
        self.index.insert(id.to_string(), node);
        self.adjacency.push(Vec::new());
        node
    }

    /// Append a flight, creating either endpoint on first sight
    pub fn add_edge(&mut self, from: &str, to: &str, cost: Cost) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.adjacency[from.0].push(Edge { to, cost });
        self.edge_count += 1;
    }

    /// Outgoing flights of `id`; unknown cities have none
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        match self.node_id(id) {
            Some(node) => self.edges(node),
            None => &[],
        }
    }

    pub fn node_id(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub(crate) fn edges(&self, node: NodeId) -> &[Edge] {
        &self.adjacency[node.0]
    }

    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node.0]
    }

    /// City names in insertion order
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<F: Into<Flight>> FromIterator<F> for FlightGraph {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut graph = FlightGraph::new();
        for flight in iter {
            let flight = flight.into();
            graph.add_edge(&flight.from, &flight.to, flight.cost);
        }
        graph
    }
}

/// Build a graph from an edge list, preserving flight order
pub fn build_graph<F: Into<Flight>>(flights: impl IntoIterator<Item = F>) -> FlightGraph {
    let graph: FlightGraph = flights.into_iter().collect();
    tracing::debug!(
        cities = graph.node_count(),
        flights = graph.edge_count(),
        "build_graph"
    );
    graph
}

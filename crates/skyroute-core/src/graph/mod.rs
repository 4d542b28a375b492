//! Flight graph and route-finding operations
//!
//! - `store`: adjacency storage (`FlightGraph`)
//! - `algos`: Dijkstra relaxation and bounded route enumeration
//! - `rank`: deterministic ordering of alternative routes
//! - `routes`: the query entry points used by callers

pub mod algos;
pub mod rank;
pub mod routes;
pub mod store;
pub mod types;

pub use algos::{dijkstra, enumerate_routes, Distances};
pub use rank::rank_routes;
pub use routes::{find_routes, shortest_path};
pub use store::{build_graph, FlightGraph};
pub use types::{
    Cost, Edge, Flight, NodeId, Route, SearchMode, ShortestPath, DEFAULT_MAX_HOPS,
    DEFAULT_MAX_ROUTES, MAX_FLIGHT_COST,
};

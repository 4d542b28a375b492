//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: Single-source cheapest costs by edge relaxation
//! - `enumerate`: Bounded depth-first enumeration of simple routes

pub mod dijkstra;
pub mod enumerate;

pub use dijkstra::{dijkstra, Distances, HeapEntry};
pub use enumerate::enumerate_routes;

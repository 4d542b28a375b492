//! Skyroute Core Library
//!
//! Pathfinding engine for the Skyroute flight planner: cheapest route by
//! edge relaxation, and bounded enumeration of ranked alternative routes.
//! The engine is a pure, synchronous function of a graph and a request.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
pub mod records;
pub mod text;

//! CLI commands for skyroute

pub mod context;
pub mod dispatch;
pub mod network;
pub mod route;

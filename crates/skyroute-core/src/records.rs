//! Utilities for records output format

use crate::graph::Route;

/// Separator used between cities when a path is printed on one line
pub const PATH_SEPARATOR: &str = " -> ";

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Join a path into a single quoted-safe line
pub fn join_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|city| city.as_ref())
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Format one route as an `R` record line
pub fn route_record(rank: usize, route: &Route) -> String {
    format!(
        "R {} cost={} layovers={} flights={} path=\"{}\"",
        rank,
        route.cost,
        route.layovers,
        route.hops(),
        escape_quotes(&join_path(&route.path))
    )
}

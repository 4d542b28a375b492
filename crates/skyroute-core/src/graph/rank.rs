use super::types::Route;

/// Order routes by cost, then by layover count, and keep the first `k`.
///
/// The sort is stable, so routes equal on both keys keep discovery order.
pub fn rank_routes(mut routes: Vec<Route>, k: usize) -> Vec<Route> {
    routes.sort_by(|a, b| {
        a.cost
            .cmp(&b.cost)
            .then_with(|| a.layovers.cmp(&b.layovers))
    });
    routes.truncate(k);
    routes
}

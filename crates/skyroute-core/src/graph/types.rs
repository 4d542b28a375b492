/// Price of a flight, or the accumulated price of a route.
///
/// Costs are non-negative by construction; "infinite" is modelled as `None`
/// wherever a distance may be unreachable.
pub type Cost = u64;

/// Largest cost a single flight may carry.
///
/// A simple path visits fewer than `u32::MAX` cities, so any route total
/// stays within `Cost`.
pub const MAX_FLIGHT_COST: Cost = u32::MAX as Cost;

/// Default hop limit for route enumeration
pub const DEFAULT_MAX_HOPS: u32 = 4;

/// Default number of alternative routes returned
pub const DEFAULT_MAX_ROUTES: usize = 3;

/// Dense index of a city inside a [`FlightGraph`](super::FlightGraph).
///
/// Indices follow insertion order, which is what makes traversal order
/// deterministic when costs tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single directed flight as supplied by a network loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub from: String,
    pub to: String,
    pub cost: Cost,
}

impl Flight {
    pub fn new(from: impl Into<String>, to: impl Into<String>, cost: Cost) -> Self {
        Flight {
            from: from.into(),
            to: to.into(),
            cost,
        }
    }
}

impl<F: Into<String>, T: Into<String>> From<(F, T, Cost)> for Flight {
    fn from((from, to, cost): (F, T, Cost)) -> Self {
        Flight::new(from, to, cost)
    }
}

/// Outgoing adjacency record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub cost: Cost,
}

/// Which part of the graph a Dijkstra run must settle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Settle every reachable city
    #[default]
    Full,
    /// Stop as soon as the given city is selected as current
    StopAt(NodeId),
}

/// Cheapest route between two cities.
///
/// An unreachable target has an empty path and no cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub path: Vec<String>,
    pub cost: Option<Cost>,
}

impl ShortestPath {
    pub fn unreachable() -> Self {
        ShortestPath {
            path: Vec::new(),
            cost: None,
        }
    }

    pub fn found(&self) -> bool {
        self.cost.is_some()
    }

    /// Number of flights taken (zero when unreachable or start == end)
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A simple path of at least two cities with its accumulated cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: Vec<String>,
    pub cost: Cost,
    pub layovers: usize,
}

impl Route {
    /// Build a route from a path snapshot; layovers are the intermediate stops.
    pub fn new(path: Vec<String>, cost: Cost) -> Self {
        let layovers = path.len().saturating_sub(2);
        Route {
            path,
            cost,
            layovers,
        }
    }

    /// Number of flights taken
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

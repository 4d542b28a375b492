//! Built-in sample network

use crate::graph::Flight;

/// Sample flights: source, destination, cost
const SAMPLE_FLIGHTS: &[(&str, &str, u64)] = &[
    ("New York", "London", 300),
    ("New York", "Paris", 500),
    ("New York", "Tokyo", 900),
    ("London", "Paris", 150),
    ("London", "Dubai", 400),
    ("Paris", "Dubai", 450),
    ("Paris", "Rome", 100),
    ("Tokyo", "Singapore", 300),
    ("Tokyo", "Sydney", 700),
    ("Dubai", "Singapore", 350),
    ("Singapore", "Sydney", 400),
    ("Rome", "Dubai", 300),
    ("New York", "Chicago", 100),
    ("Chicago", "London", 400),
    ("Chicago", "Los Angeles", 200),
    ("Los Angeles", "Tokyo", 600),
    ("Los Angeles", "Sydney", 800),
    ("Sydney", "Auckland", 150),
    ("Auckland", "Tokyo", 500),
    ("Rome", "London", 120),
    ("Paris", "New York", 480),
];

pub fn sample_flights() -> Vec<Flight> {
    SAMPLE_FLIGHTS
        .iter()
        .map(|(from, to, cost)| Flight::new(*from, *to, *cost))
        .collect()
}

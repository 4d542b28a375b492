//! Route query commands: cheapest, alternatives, distances

pub mod alternatives;
pub mod cheapest;
pub mod distances;
mod human;
mod json;
mod records;

/// Human label for a layover count
pub fn layover_label(layovers: usize) -> String {
    match layovers {
        0 => "Direct flight".to_string(),
        1 => "1 layover".to_string(),
        n => format!("{} layovers", n),
    }
}

/// Human label for a flight count
pub fn flight_label(flights: usize) -> String {
    if flights == 1 {
        "1 flight".to_string()
    } else {
        format!("{} flights", flights)
    }
}

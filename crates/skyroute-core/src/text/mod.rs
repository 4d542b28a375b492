//! Text utilities for user-supplied city names

/// Normalize a city name to title case ("new  york" -> "New York").
///
/// Surrounding whitespace is trimmed and runs of spaces collapse to one.
/// Only the first character of each word is uppercased; the rest is
/// lowercased, matching how the built-in network spells its cities.
pub fn normalize_city_name(name: &str) -> String {
    name.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

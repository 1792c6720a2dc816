// src/services/classifier.rs

/// Which data source answers a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Faculty,
    Rooms,
    Generate,
}

pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub route: Route,
}

fn mentions_faculty(query: &str) -> bool {
    query.contains("faculty")
}

fn mentions_room(query: &str) -> bool {
    query.contains("room")
}

/// Ordered, first-match-wins. A message matching several rules takes the
/// earliest one; anything unmatched goes to the text provider.
pub const RULES: &[Rule] = &[
    Rule {
        name: "faculty",
        matches: mentions_faculty,
        route: Route::Faculty,
    },
    Rule {
        name: "rooms",
        matches: mentions_room,
        route: Route::Rooms,
    },
];

pub fn classify(message: &str) -> Route {
    let query = message.trim().to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&query))
        .map(|rule| rule.route)
        .unwrap_or(Route::Generate)
}

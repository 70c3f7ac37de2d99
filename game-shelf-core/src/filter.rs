//! In-memory search filters for the table views.
//!
//! Each entity type is matched against a fixed set of fields with a
//! case-insensitive substring test. The filters work on the unfiltered
//! in-memory collection; an empty query matches everything, so filtering
//! with `""` is the identity.

use crate::types::{Accessory, Console, Game};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn opt_contains_ci(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| contains_ci(h, needle_lower))
}

/// Does this game match the query? Searches title, console name, genre name.
pub fn game_matches(game: &Game, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    contains_ci(&game.title, &q)
        || opt_contains_ci(game.console_name.as_deref(), &q)
        || opt_contains_ci(game.genre_name.as_deref(), &q)
}

/// Does this console match the query? Searches name, manufacturer name.
pub fn console_matches(console: &Console, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    contains_ci(&console.name, &q) || opt_contains_ci(console.manufacturer_name.as_deref(), &q)
}

/// Does this accessory match the query?
/// Searches name, type name, manufacturer name, color.
pub fn accessory_matches(accessory: &Accessory, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    contains_ci(&accessory.name, &q)
        || opt_contains_ci(accessory.type_name.as_deref(), &q)
        || opt_contains_ci(accessory.manufacturer_name.as_deref(), &q)
        || opt_contains_ci(accessory.color.as_deref(), &q)
}

/// Filter a game list, keeping entries that match the query.
pub fn filter_games(games: &[Game], query: &str) -> Vec<Game> {
    games
        .iter()
        .filter(|g| game_matches(g, query))
        .cloned()
        .collect()
}

/// Filter a console list, keeping entries that match the query.
pub fn filter_consoles(consoles: &[Console], query: &str) -> Vec<Console> {
    consoles
        .iter()
        .filter(|c| console_matches(c, query))
        .cloned()
        .collect()
}

/// Filter an accessory list, keeping entries that match the query.
pub fn filter_accessories(accessories: &[Accessory], query: &str) -> Vec<Accessory> {
    accessories
        .iter()
        .filter(|a| accessory_matches(a, query))
        .cloned()
        .collect()
}

//! Data model for the game-shelf collection.
//!
//! Plain record types for the three collection entities (games, consoles,
//! accessories) and their lookup tables, plus the in-memory search filters
//! and the star rendering used by the table views. Persistence lives in
//! `game-shelf-db`; this crate has no database or UI dependencies.

pub mod condition;
pub mod filter;
pub mod types;

pub use condition::condition_stars;
pub use filter::{
    accessory_matches, console_matches, filter_accessories, filter_consoles, filter_games,
    game_matches,
};
pub use types::{Accessory, Console, Game, LookupEntry, RatingSystem};

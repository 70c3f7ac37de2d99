//! SQLite persistence layer for the game-shelf collection.
//!
//! Provides schema creation, a [`Store`] owning the single connection,
//! CRUD operations, read queries, and database-location configuration
//! backed by SQLite (via rusqlite with bundled feature).

pub mod config;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use config::{ConfigError, config_path, database_path};
pub use queries::CollectionStats;
pub use schema::{SchemaError, open_database, open_memory};
pub use store::{
    ACCESSORY_TYPES, COMPOSERS, CONSOLE_TYPES, DEVELOPERS, GENRES, LookupTable, MANUFACTURERS,
    PRODUCERS, PUBLISHERS, Store, StoreError,
};

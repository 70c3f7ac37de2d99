//! Connection ownership and shared store types.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

use crate::schema::{self, SchemaError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl StoreError {
    /// True if this error is a not-found condition rather than a database failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Owns the database connection for the lifetime of the process.
///
/// The application opens one `Store` at startup and passes it to whatever
/// needs data access; tests use [`Store::open_memory`]. All queries run
/// synchronously on the calling thread.
pub struct Store {
    pub(crate) conn: Connection,
}

impl Store {
    /// Open (or create) the collection database at the given path.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_database(path)?,
        })
    }

    /// Open an in-memory store with the full schema. Useful for testing.
    pub fn open_memory() -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_memory()?,
        })
    }
}

/// Descriptor for one of the name-only lookup tables.
///
/// The nine lookup tables all share the same shape (id + name) and the same
/// two operations (list ordered by name, insert by name), so they are driven
/// by these descriptors instead of per-table query functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTable {
    /// SQL table name.
    pub table: &'static str,
    /// Primary key column name.
    pub id_column: &'static str,
    /// Human-facing singular label ("genre", "developer", ...).
    pub label: &'static str,
}

pub const GENRES: LookupTable = LookupTable {
    table: "genres",
    id_column: "genre_id",
    label: "genre",
};

pub const DEVELOPERS: LookupTable = LookupTable {
    table: "developers",
    id_column: "developer_id",
    label: "developer",
};

pub const COMPOSERS: LookupTable = LookupTable {
    table: "composers",
    id_column: "composer_id",
    label: "composer",
};

pub const PUBLISHERS: LookupTable = LookupTable {
    table: "publishers",
    id_column: "publisher_id",
    label: "publisher",
};

pub const PRODUCERS: LookupTable = LookupTable {
    table: "producers",
    id_column: "producer_id",
    label: "producer",
};

pub const MANUFACTURERS: LookupTable = LookupTable {
    table: "manufacturers",
    id_column: "manufacturer_id",
    label: "manufacturer",
};

pub const CONSOLE_TYPES: LookupTable = LookupTable {
    table: "console_types",
    id_column: "type_id",
    label: "console type",
};

pub const ACCESSORY_TYPES: LookupTable = LookupTable {
    table: "accessory_types",
    id_column: "type_id",
    label: "accessory type",
};

//! SQLite schema creation and migration.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent — safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a collection database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        create_schema(&conn)?;
    } else if version < CURRENT_VERSION {
        migrate(&conn, version)?;
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    // Check if schema_version table exists
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Run migrations from `from_version` up to `CURRENT_VERSION`.
fn migrate(conn: &Connection, from_version: i32) -> Result<(), SchemaError> {
    if from_version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: from_version,
        });
    }

    let mut version = from_version;
    while version < CURRENT_VERSION {
        // No migrations yet; version 1 is the baseline.
        version += 1;
        set_schema_version(conn, version)?;
    }

    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Lookup tables (reference data for dropdowns)
CREATE TABLE IF NOT EXISTS genres (
    genre_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS developers (
    developer_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS composers (
    composer_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS publishers (
    publisher_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS producers (
    producer_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS manufacturers (
    manufacturer_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS console_types (
    type_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS accessory_types (
    type_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- Regional age ratings (CERO, ESRB, PEGI, ...)
CREATE TABLE IF NOT EXISTS rating_systems (
    rating_id INTEGER PRIMARY KEY AUTOINCREMENT,
    region TEXT NOT NULL,
    code TEXT NOT NULL,
    description TEXT
);

-- Consoles
CREATE TABLE IF NOT EXISTS consoles (
    console_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    type_id INTEGER REFERENCES console_types(type_id),
    manufacturer_id INTEGER REFERENCES manufacturers(manufacturer_id),
    generation INTEGER,
    jp_release_date TEXT,
    us_release_date TEXT,
    eu_release_date TEXT,
    discontinued TEXT,
    price_jpy INTEGER,
    price_usd INTEGER,
    controllers INTEGER,
    cpu TEXT,
    gpu TEXT,
    memory TEXT,
    audio TEXT,
    units_sold INTEGER,
    top_game TEXT,
    predecessor TEXT,
    successor TEXT,
    owned BOOLEAN NOT NULL DEFAULT 1,
    condition INTEGER,
    notes TEXT
);
CREATE INDEX IF NOT EXISTS idx_consoles_name ON consoles(name);

-- Games
CREATE TABLE IF NOT EXISTS games (
    game_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    console_id INTEGER REFERENCES consoles(console_id),
    genre_id INTEGER REFERENCES genres(genre_id),
    jp_release_date TEXT,
    us_release_date TEXT,
    eu_release_date TEXT,
    jp_rating_id INTEGER REFERENCES rating_systems(rating_id),
    us_rating_id INTEGER REFERENCES rating_systems(rating_id),
    eu_rating_id INTEGER REFERENCES rating_systems(rating_id),
    units_sold INTEGER,
    owned BOOLEAN NOT NULL DEFAULT 1,
    box_owned BOOLEAN NOT NULL DEFAULT 0,
    collector BOOLEAN NOT NULL DEFAULT 0,
    condition INTEGER,
    purchase_date TEXT,
    purchase_price REAL,
    notes TEXT
);
CREATE INDEX IF NOT EXISTS idx_games_title ON games(title);
CREATE INDEX IF NOT EXISTS idx_games_console ON games(console_id);

-- Accessories
CREATE TABLE IF NOT EXISTS accessories (
    accessory_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    color TEXT,
    type_id INTEGER REFERENCES accessory_types(type_id),
    manufacturer_id INTEGER REFERENCES manufacturers(manufacturer_id),
    quantity INTEGER NOT NULL DEFAULT 1,
    owned BOOLEAN NOT NULL DEFAULT 1,
    condition INTEGER,
    purchase_date TEXT,
    purchase_price REAL,
    notes TEXT
);
CREATE INDEX IF NOT EXISTS idx_accessories_name ON accessories(name);

-- Many-to-many join tables
CREATE TABLE IF NOT EXISTS game_developers (
    game_id INTEGER NOT NULL REFERENCES games(game_id),
    developer_id INTEGER NOT NULL REFERENCES developers(developer_id),
    PRIMARY KEY (game_id, developer_id)
);

CREATE TABLE IF NOT EXISTS game_composers (
    game_id INTEGER NOT NULL REFERENCES games(game_id),
    composer_id INTEGER NOT NULL REFERENCES composers(composer_id),
    PRIMARY KEY (game_id, composer_id)
);

CREATE TABLE IF NOT EXISTS game_publishers (
    game_id INTEGER NOT NULL REFERENCES games(game_id),
    publisher_id INTEGER NOT NULL REFERENCES publishers(publisher_id),
    PRIMARY KEY (game_id, publisher_id)
);

CREATE TABLE IF NOT EXISTS game_producers (
    game_id INTEGER NOT NULL REFERENCES games(game_id),
    producer_id INTEGER NOT NULL REFERENCES producers(producer_id),
    PRIMARY KEY (game_id, producer_id)
);

CREATE TABLE IF NOT EXISTS accessory_consoles (
    accessory_id INTEGER NOT NULL REFERENCES accessories(accessory_id),
    console_id INTEGER NOT NULL REFERENCES consoles(console_id),
    PRIMARY KEY (accessory_id, console_id)
);
"#;

use game_shelf_db::open_memory;
use game_shelf_db::schema::{CURRENT_VERSION, create_schema, open_database};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    let tables = [
        "schema_version",
        "games",
        "consoles",
        "accessories",
        "genres",
        "developers",
        "composers",
        "publishers",
        "producers",
        "manufacturers",
        "console_types",
        "accessory_types",
        "rating_systems",
        "game_developers",
        "game_composers",
        "game_publishers",
        "game_producers",
        "accessory_consoles",
    ];
    for table in tables {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn open_database_creates_and_reopens_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute("INSERT INTO genres (name) VALUES ('RPG')", [])
            .unwrap();
    }

    let conn = open_database(&path).unwrap();
    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM genres", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

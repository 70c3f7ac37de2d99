//! Read queries: ordered entity lists, fully-populated single records,
//! lookup listings, and collection statistics.

use game_shelf_core::types::{Accessory, Console, Game, LookupEntry, RatingSystem};
use rusqlite::params;

use crate::store::{LookupTable, Store, StoreError};

impl Store {
    /// List all games ordered by title, with joined console and genre names.
    ///
    /// Many-to-many lists and rating labels are left empty; use [`Store::game`]
    /// for a fully-populated record.
    pub fn games(&self) -> Result<Vec<Game>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT g.game_id, g.title, g.console_id, g.genre_id,
                    g.jp_release_date, g.us_release_date, g.eu_release_date,
                    g.jp_rating_id, g.us_rating_id, g.eu_rating_id,
                    g.units_sold, g.owned, g.box_owned, g.collector, g.condition,
                    g.purchase_date, g.purchase_price, g.notes,
                    c.name, ge.name
             FROM games g
             LEFT JOIN consoles c ON c.console_id = g.console_id
             LEFT JOIN genres ge ON ge.genre_id = g.genre_id
             ORDER BY g.title",
        )?;
        let rows = stmt.query_map([], row_to_game)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Fetch one game with rating labels and many-to-many name lists.
    pub fn game(&self, id: i64) -> Result<Game, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT g.game_id, g.title, g.console_id, g.genre_id,
                    g.jp_release_date, g.us_release_date, g.eu_release_date,
                    g.jp_rating_id, g.us_rating_id, g.eu_rating_id,
                    g.units_sold, g.owned, g.box_owned, g.collector, g.condition,
                    g.purchase_date, g.purchase_price, g.notes,
                    c.name, ge.name,
                    jr.code, jr.region, ur.code, ur.region, er.code, er.region
             FROM games g
             LEFT JOIN consoles c ON c.console_id = g.console_id
             LEFT JOIN genres ge ON ge.genre_id = g.genre_id
             LEFT JOIN rating_systems jr ON jr.rating_id = g.jp_rating_id
             LEFT JOIN rating_systems ur ON ur.rating_id = g.us_rating_id
             LEFT JOIN rating_systems er ON er.rating_id = g.eu_rating_id
             WHERE g.game_id = ?1",
        )?;
        let result = stmt.query_row(params![id], |row| {
            let mut game = row_to_game(row)?;
            game.jp_rating = rating_label(row.get(20)?, row.get(21)?);
            game.us_rating = rating_label(row.get(22)?, row.get(23)?);
            game.eu_rating = rating_label(row.get(24)?, row.get(25)?);
            Ok(game)
        });
        let mut game = match result {
            Ok(g) => g,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(StoreError::NotFound { entity: "game", id });
            }
            Err(e) => return Err(e.into()),
        };

        game.developers =
            self.linked_entries(id, "game_developers", "game_id", "developers", "developer_id")?;
        game.composers =
            self.linked_entries(id, "game_composers", "game_id", "composers", "composer_id")?;
        game.publishers =
            self.linked_entries(id, "game_publishers", "game_id", "publishers", "publisher_id")?;
        game.producers =
            self.linked_entries(id, "game_producers", "game_id", "producers", "producer_id")?;

        Ok(game)
    }

    /// List all consoles ordered by name, with joined type and manufacturer names.
    pub fn consoles(&self) -> Result<Vec<Console>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT c.console_id, c.name, c.type_id, c.manufacturer_id, c.generation,
                    c.jp_release_date, c.us_release_date, c.eu_release_date, c.discontinued,
                    c.price_jpy, c.price_usd, c.controllers,
                    c.cpu, c.gpu, c.memory, c.audio,
                    c.units_sold, c.top_game, c.predecessor, c.successor,
                    c.owned, c.condition, c.notes,
                    t.name, m.name
             FROM consoles c
             LEFT JOIN console_types t ON t.type_id = c.type_id
             LEFT JOIN manufacturers m ON m.manufacturer_id = c.manufacturer_id
             ORDER BY c.name",
        )?;
        let rows = stmt.query_map([], row_to_console)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Fetch one console.
    pub fn console(&self, id: i64) -> Result<Console, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT c.console_id, c.name, c.type_id, c.manufacturer_id, c.generation,
                    c.jp_release_date, c.us_release_date, c.eu_release_date, c.discontinued,
                    c.price_jpy, c.price_usd, c.controllers,
                    c.cpu, c.gpu, c.memory, c.audio,
                    c.units_sold, c.top_game, c.predecessor, c.successor,
                    c.owned, c.condition, c.notes,
                    t.name, m.name
             FROM consoles c
             LEFT JOIN console_types t ON t.type_id = c.type_id
             LEFT JOIN manufacturers m ON m.manufacturer_id = c.manufacturer_id
             WHERE c.console_id = ?1",
        )?;
        match stmt.query_row(params![id], row_to_console) {
            Ok(c) => Ok(c),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::NotFound {
                entity: "console",
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// List all accessories ordered by name, with joined type and manufacturer names.
    ///
    /// The compatible-console list is left empty; use [`Store::accessory`].
    pub fn accessories(&self) -> Result<Vec<Accessory>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT a.accessory_id, a.name, a.color, a.type_id, a.manufacturer_id,
                    a.quantity, a.owned, a.condition,
                    a.purchase_date, a.purchase_price, a.notes,
                    t.name, m.name
             FROM accessories a
             LEFT JOIN accessory_types t ON t.type_id = a.type_id
             LEFT JOIN manufacturers m ON m.manufacturer_id = a.manufacturer_id
             ORDER BY a.name",
        )?;
        let rows = stmt.query_map([], row_to_accessory)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Fetch one accessory with its compatible-console list.
    pub fn accessory(&self, id: i64) -> Result<Accessory, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT a.accessory_id, a.name, a.color, a.type_id, a.manufacturer_id,
                    a.quantity, a.owned, a.condition,
                    a.purchase_date, a.purchase_price, a.notes,
                    t.name, m.name
             FROM accessories a
             LEFT JOIN accessory_types t ON t.type_id = a.type_id
             LEFT JOIN manufacturers m ON m.manufacturer_id = a.manufacturer_id
             WHERE a.accessory_id = ?1",
        )?;
        let mut accessory = match stmt.query_row(params![id], row_to_accessory) {
            Ok(a) => a,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(StoreError::NotFound {
                    entity: "accessory",
                    id,
                });
            }
            Err(e) => return Err(e.into()),
        };

        accessory.consoles = self.linked_entries(
            id,
            "accessory_consoles",
            "accessory_id",
            "consoles",
            "console_id",
        )?;

        Ok(accessory)
    }

    /// List a name-only lookup table ordered by name.
    pub fn lookup_entries(&self, table: LookupTable) -> Result<Vec<LookupEntry>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {id}, name FROM {table} ORDER BY name",
            id = table.id_column,
            table = table.table,
        ))?;
        let rows = stmt.query_map([], |row| {
            Ok(LookupEntry {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List all rating systems ordered by region then code.
    pub fn rating_systems(&self) -> Result<Vec<RatingSystem>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT rating_id, region, code, description
             FROM rating_systems ORDER BY region, code",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RatingSystem {
                id: row.get(0)?,
                region: row.get(1)?,
                code: row.get(2)?,
                description: row.get(3)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Overall collection statistics for the home view.
    pub fn stats(&self) -> Result<CollectionStats, StoreError> {
        let games: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM games", [], |r| r.get(0))?;
        let games_owned: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM games WHERE owned = 1", [], |r| {
                    r.get(0)
                })?;
        let consoles: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM consoles", [], |r| r.get(0))?;
        let consoles_owned: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM consoles WHERE owned = 1", [], |r| {
                    r.get(0)
                })?;
        let accessories: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM accessories", [], |r| r.get(0))?;
        let accessories_owned: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM accessories WHERE owned = 1",
            [],
            |r| r.get(0),
        )?;

        Ok(CollectionStats {
            games,
            games_owned,
            consoles,
            consoles_owned,
            accessories,
            accessories_owned,
        })
    }

    /// List the lookup entries linked to a parent row via a join table,
    /// ordered by name.
    fn linked_entries(
        &self,
        parent_id: i64,
        join_table: &str,
        parent_column: &str,
        lookup_table: &str,
        id_column: &str,
    ) -> Result<Vec<LookupEntry>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT l.{id_column}, l.name
             FROM {join_table} j
             JOIN {lookup_table} l ON l.{id_column} = j.{id_column}
             WHERE j.{parent_column} = ?1
             ORDER BY l.name"
        ))?;
        let rows = stmt.query_map(params![parent_id], |row| {
            Ok(LookupEntry {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

/// Summary counts for the home view.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionStats {
    pub games: i64,
    pub games_owned: i64,
    pub consoles: i64,
    pub consoles_owned: i64,
    pub accessories: i64,
    pub accessories_owned: i64,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn rating_label(code: Option<String>, region: Option<String>) -> Option<String> {
    match (code, region) {
        (Some(code), Some(region)) => Some(format!("{} - {}", code, region)),
        _ => None,
    }
}

fn row_to_game(row: &rusqlite::Row<'_>) -> rusqlite::Result<Game> {
    Ok(Game {
        id: row.get(0)?,
        title: row.get(1)?,
        console_id: row.get(2)?,
        genre_id: row.get(3)?,
        jp_release_date: row.get(4)?,
        us_release_date: row.get(5)?,
        eu_release_date: row.get(6)?,
        jp_rating_id: row.get(7)?,
        us_rating_id: row.get(8)?,
        eu_rating_id: row.get(9)?,
        units_sold: row.get(10)?,
        owned: row.get(11)?,
        box_owned: row.get(12)?,
        collector: row.get(13)?,
        condition: row.get(14)?,
        purchase_date: row.get(15)?,
        purchase_price: row.get(16)?,
        notes: row.get(17)?,
        console_name: row.get(18)?,
        genre_name: row.get(19)?,
        jp_rating: None,
        us_rating: None,
        eu_rating: None,
        developers: Vec::new(),
        composers: Vec::new(),
        publishers: Vec::new(),
        producers: Vec::new(),
    })
}

fn row_to_console(row: &rusqlite::Row<'_>) -> rusqlite::Result<Console> {
    Ok(Console {
        id: row.get(0)?,
        name: row.get(1)?,
        type_id: row.get(2)?,
        manufacturer_id: row.get(3)?,
        generation: row.get(4)?,
        jp_release_date: row.get(5)?,
        us_release_date: row.get(6)?,
        eu_release_date: row.get(7)?,
        discontinued: row.get(8)?,
        price_jpy: row.get(9)?,
        price_usd: row.get(10)?,
        controllers: row.get(11)?,
        cpu: row.get(12)?,
        gpu: row.get(13)?,
        memory: row.get(14)?,
        audio: row.get(15)?,
        units_sold: row.get(16)?,
        top_game: row.get(17)?,
        predecessor: row.get(18)?,
        successor: row.get(19)?,
        owned: row.get(20)?,
        condition: row.get(21)?,
        notes: row.get(22)?,
        type_name: row.get(23)?,
        manufacturer_name: row.get(24)?,
    })
}

fn row_to_accessory(row: &rusqlite::Row<'_>) -> rusqlite::Result<Accessory> {
    Ok(Accessory {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        type_id: row.get(3)?,
        manufacturer_id: row.get(4)?,
        quantity: row.get(5)?,
        owned: row.get(6)?,
        condition: row.get(7)?,
        purchase_date: row.get(8)?,
        purchase_price: row.get(9)?,
        notes: row.get(10)?,
        type_name: row.get(11)?,
        manufacturer_name: row.get(12)?,
        consoles: Vec::new(),
    })
}

//! Write operations: entity saves, deletes, and lookup inserts.
//!
//! Every multi-statement save (parent row + join-table rewrite) and every
//! delete runs inside an explicit transaction so a failing step rolls the
//! whole operation back.

use game_shelf_core::types::{Accessory, Console, Game, LookupEntry};
use rusqlite::{Transaction, params};

use crate::store::{LookupTable, Store, StoreError};

impl Store {
    /// Insert or update a game, replacing its many-to-many links.
    ///
    /// `game.id == 0` inserts a new row; otherwise the row with that id is
    /// updated in place. Returns the persisted id.
    pub fn save_game(&mut self, game: &Game) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;

        let id = if game.id == 0 {
            tx.execute(
                "INSERT INTO games (title, console_id, genre_id,
                     jp_release_date, us_release_date, eu_release_date,
                     jp_rating_id, us_rating_id, eu_rating_id,
                     units_sold, owned, box_owned, collector, condition,
                     purchase_date, purchase_price, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
                params![
                    game.title,
                    game.console_id,
                    game.genre_id,
                    game.jp_release_date,
                    game.us_release_date,
                    game.eu_release_date,
                    game.jp_rating_id,
                    game.us_rating_id,
                    game.eu_rating_id,
                    game.units_sold,
                    game.owned,
                    game.box_owned,
                    game.collector,
                    game.condition,
                    game.purchase_date,
                    game.purchase_price,
                    game.notes,
                ],
            )?;
            tx.last_insert_rowid()
        } else {
            let changed = tx.execute(
                "UPDATE games SET
                     title = ?1, console_id = ?2, genre_id = ?3,
                     jp_release_date = ?4, us_release_date = ?5, eu_release_date = ?6,
                     jp_rating_id = ?7, us_rating_id = ?8, eu_rating_id = ?9,
                     units_sold = ?10, owned = ?11, box_owned = ?12, collector = ?13,
                     condition = ?14, purchase_date = ?15, purchase_price = ?16, notes = ?17
                 WHERE game_id = ?18",
                params![
                    game.title,
                    game.console_id,
                    game.genre_id,
                    game.jp_release_date,
                    game.us_release_date,
                    game.eu_release_date,
                    game.jp_rating_id,
                    game.us_rating_id,
                    game.eu_rating_id,
                    game.units_sold,
                    game.owned,
                    game.box_owned,
                    game.collector,
                    game.condition,
                    game.purchase_date,
                    game.purchase_price,
                    game.notes,
                    game.id,
                ],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound {
                    entity: "game",
                    id: game.id,
                });
            }
            game.id
        };

        rewrite_links(&tx, "game_developers", "game_id", "developer_id", id, &game.developers)?;
        rewrite_links(&tx, "game_composers", "game_id", "composer_id", id, &game.composers)?;
        rewrite_links(&tx, "game_publishers", "game_id", "publisher_id", id, &game.publishers)?;
        rewrite_links(&tx, "game_producers", "game_id", "producer_id", id, &game.producers)?;

        tx.commit()?;
        Ok(id)
    }

    /// Delete a game and its join-table rows.
    pub fn delete_game(&mut self, id: i64) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM game_developers WHERE game_id = ?1", params![id])?;
        tx.execute("DELETE FROM game_composers WHERE game_id = ?1", params![id])?;
        tx.execute("DELETE FROM game_publishers WHERE game_id = ?1", params![id])?;
        tx.execute("DELETE FROM game_producers WHERE game_id = ?1", params![id])?;

        let changed = tx.execute("DELETE FROM games WHERE game_id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "game", id });
        }

        tx.commit()?;
        Ok(())
    }

    /// Insert or update a console.
    ///
    /// `console.id == 0` inserts a new row; otherwise the row with that id
    /// is updated in place. Returns the persisted id.
    pub fn save_console(&self, console: &Console) -> Result<i64, StoreError> {
        if console.id == 0 {
            self.conn.execute(
                "INSERT INTO consoles (name, type_id, manufacturer_id, generation,
                     jp_release_date, us_release_date, eu_release_date, discontinued,
                     price_jpy, price_usd, controllers, cpu, gpu, memory, audio,
                     units_sold, top_game, predecessor, successor,
                     owned, condition, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                         ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22)",
                params![
                    console.name,
                    console.type_id,
                    console.manufacturer_id,
                    console.generation,
                    console.jp_release_date,
                    console.us_release_date,
                    console.eu_release_date,
                    console.discontinued,
                    console.price_jpy,
                    console.price_usd,
                    console.controllers,
                    console.cpu,
                    console.gpu,
                    console.memory,
                    console.audio,
                    console.units_sold,
                    console.top_game,
                    console.predecessor,
                    console.successor,
                    console.owned,
                    console.condition,
                    console.notes,
                ],
            )?;
            Ok(self.conn.last_insert_rowid())
        } else {
            let changed = self.conn.execute(
                "UPDATE consoles SET
                     name = ?1, type_id = ?2, manufacturer_id = ?3, generation = ?4,
                     jp_release_date = ?5, us_release_date = ?6, eu_release_date = ?7,
                     discontinued = ?8, price_jpy = ?9, price_usd = ?10, controllers = ?11,
                     cpu = ?12, gpu = ?13, memory = ?14, audio = ?15,
                     units_sold = ?16, top_game = ?17, predecessor = ?18, successor = ?19,
                     owned = ?20, condition = ?21, notes = ?22
                 WHERE console_id = ?23",
                params![
                    console.name,
                    console.type_id,
                    console.manufacturer_id,
                    console.generation,
                    console.jp_release_date,
                    console.us_release_date,
                    console.eu_release_date,
                    console.discontinued,
                    console.price_jpy,
                    console.price_usd,
                    console.controllers,
                    console.cpu,
                    console.gpu,
                    console.memory,
                    console.audio,
                    console.units_sold,
                    console.top_game,
                    console.predecessor,
                    console.successor,
                    console.owned,
                    console.condition,
                    console.notes,
                    console.id,
                ],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound {
                    entity: "console",
                    id: console.id,
                });
            }
            Ok(console.id)
        }
    }

    /// Delete a console and its accessory-compatibility join rows.
    ///
    /// Games referencing the console keep their foreign key, so the delete
    /// fails with a constraint error while such games exist.
    pub fn delete_console(&mut self, id: i64) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "DELETE FROM accessory_consoles WHERE console_id = ?1",
            params![id],
        )?;

        let changed = tx.execute("DELETE FROM consoles WHERE console_id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "console",
                id,
            });
        }

        tx.commit()?;
        Ok(())
    }

    /// Insert or update an accessory, replacing its compatible-console links.
    ///
    /// `accessory.id == 0` inserts a new row; otherwise the row with that id
    /// is updated in place. Returns the persisted id.
    pub fn save_accessory(&mut self, accessory: &Accessory) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;

        let id = if accessory.id == 0 {
            tx.execute(
                "INSERT INTO accessories (name, color, type_id, manufacturer_id, quantity,
                     owned, condition, purchase_date, purchase_price, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    accessory.name,
                    accessory.color,
                    accessory.type_id,
                    accessory.manufacturer_id,
                    accessory.quantity,
                    accessory.owned,
                    accessory.condition,
                    accessory.purchase_date,
                    accessory.purchase_price,
                    accessory.notes,
                ],
            )?;
            tx.last_insert_rowid()
        } else {
            let changed = tx.execute(
                "UPDATE accessories SET
                     name = ?1, color = ?2, type_id = ?3, manufacturer_id = ?4,
                     quantity = ?5, owned = ?6, condition = ?7,
                     purchase_date = ?8, purchase_price = ?9, notes = ?10
                 WHERE accessory_id = ?11",
                params![
                    accessory.name,
                    accessory.color,
                    accessory.type_id,
                    accessory.manufacturer_id,
                    accessory.quantity,
                    accessory.owned,
                    accessory.condition,
                    accessory.purchase_date,
                    accessory.purchase_price,
                    accessory.notes,
                    accessory.id,
                ],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound {
                    entity: "accessory",
                    id: accessory.id,
                });
            }
            accessory.id
        };

        rewrite_links(
            &tx,
            "accessory_consoles",
            "accessory_id",
            "console_id",
            id,
            &accessory.consoles,
        )?;

        tx.commit()?;
        Ok(id)
    }

    /// Delete an accessory and its compatible-console join rows.
    pub fn delete_accessory(&mut self, id: i64) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "DELETE FROM accessory_consoles WHERE accessory_id = ?1",
            params![id],
        )?;

        let changed = tx.execute(
            "DELETE FROM accessories WHERE accessory_id = ?1",
            params![id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "accessory",
                id,
            });
        }

        tx.commit()?;
        Ok(())
    }

    /// Insert a new entry into a name-only lookup table. Returns the new id.
    pub fn add_lookup(&self, table: LookupTable, name: &str) -> Result<i64, StoreError> {
        self.conn.execute(
            &format!("INSERT INTO {} (name) VALUES (?1)", table.table),
            params![name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a new rating-system entry. Returns the new id.
    pub fn add_rating_system(
        &self,
        region: &str,
        code: &str,
        description: Option<&str>,
    ) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO rating_systems (region, code, description) VALUES (?1, ?2, ?3)",
            params![region, code, description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }
}

/// Replace all join rows for one parent: delete, then reinsert the staged set.
fn rewrite_links(
    tx: &Transaction<'_>,
    join_table: &str,
    parent_column: &str,
    child_column: &str,
    parent_id: i64,
    entries: &[LookupEntry],
) -> Result<(), StoreError> {
    tx.execute(
        &format!("DELETE FROM {join_table} WHERE {parent_column} = ?1"),
        params![parent_id],
    )?;
    for entry in entries {
        tx.execute(
            &format!(
                "INSERT OR IGNORE INTO {join_table} ({parent_column}, {child_column}) VALUES (?1, ?2)"
            ),
            params![parent_id, entry.id],
        )?;
    }
    Ok(())
}

//! The small "add new lookup entry" sub-form.
//!
//! Opened from a "+ New" button inside an entity form; saving inserts the
//! row and the parent form refreshes its dropdown options.

use game_shelf_db::{LookupTable, Store, StoreError};

use super::require;

/// Which table the sub-form inserts into.
#[derive(Debug, Clone, Copy)]
pub enum LookupTarget {
    /// One of the name-only lookup tables.
    Table(LookupTable),
    /// The rating_systems table (region + code + description).
    Rating,
}

#[derive(Debug, Clone)]
pub struct LookupForm {
    pub target: LookupTarget,
    pub title: String,
    pub name: String,
    // Rating-only fields
    pub region: String,
    pub code: String,
    pub description: String,
}

impl LookupForm {
    /// Form for a name-only lookup table ("Add developer", ...).
    pub fn table(table: LookupTable) -> Self {
        Self {
            target: LookupTarget::Table(table),
            title: format!("Add {}", table.label),
            name: String::new(),
            region: String::new(),
            code: String::new(),
            description: String::new(),
        }
    }

    /// Form for a new rating-system entry.
    pub fn rating() -> Self {
        Self {
            target: LookupTarget::Rating,
            title: "Add rating".to_string(),
            name: String::new(),
            region: String::new(),
            code: String::new(),
            description: String::new(),
        }
    }

    /// Validate and insert. Returns the new row id.
    pub fn save(&self, store: &Store) -> Result<i64, String> {
        match self.target {
            LookupTarget::Table(table) => {
                let name = require("Name", &self.name)?;
                store
                    .add_lookup(table, &name)
                    .map_err(|e| save_error(table.label, e))
            }
            LookupTarget::Rating => {
                let region = require("Region", &self.region)?;
                let code = require("Code", &self.code)?;
                let description = super::optional_text(&self.description);
                store
                    .add_rating_system(&region, &code, description.as_deref())
                    .map_err(|e| save_error("rating", e))
            }
        }
    }
}

fn save_error(label: &str, err: StoreError) -> String {
    format!("failed to add {label}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_shelf_db::{DEVELOPERS, GENRES};

    #[test]
    fn table_form_requires_name() {
        let store = Store::open_memory().unwrap();
        let form = LookupForm::table(GENRES);
        assert!(form.save(&store).is_err());
    }

    #[test]
    fn table_form_inserts_trimmed_name() {
        let store = Store::open_memory().unwrap();
        let mut form = LookupForm::table(DEVELOPERS);
        form.name = "  Intelligent Systems  ".to_string();
        let id = form.save(&store).unwrap();
        assert!(id > 0);

        let entries = store.lookup_entries(DEVELOPERS).unwrap();
        assert_eq!(entries[0].name, "Intelligent Systems");
    }

    #[test]
    fn rating_form_requires_region_and_code() {
        let store = Store::open_memory().unwrap();
        let mut form = LookupForm::rating();
        form.region = "EU".to_string();
        assert!(form.save(&store).is_err());

        form.code = "PEGI 7".to_string();
        let id = form.save(&store).unwrap();
        assert!(id > 0);
        assert_eq!(store.rating_systems().unwrap()[0].label(), "PEGI 7 - EU");
    }
}

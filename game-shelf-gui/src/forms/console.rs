//! Console add/edit form state.

use game_shelf_core::types::Console;
use game_shelf_db::{CONSOLE_TYPES, MANUFACTURERS, Store, StoreError};

use super::{
    LookupForm, LookupSelect, buffer, optional_text, parse_optional_count, parse_optional_date,
    parse_optional_u32, require,
};

#[derive(Debug, Clone)]
pub struct ConsoleForm {
    pub id: i64,
    pub name: String,
    pub console_type: LookupSelect,
    pub manufacturer: LookupSelect,
    pub generation: String,
    pub jp_release_date: String,
    pub us_release_date: String,
    pub eu_release_date: String,
    pub discontinued: String,
    pub price_jpy: String,
    pub price_usd: String,
    pub controllers: String,
    pub cpu: String,
    pub gpu: String,
    pub memory: String,
    pub audio: String,
    pub units_sold: String,
    pub top_game: String,
    pub predecessor: String,
    pub successor: String,
    pub owned: bool,
    /// 0 = ungraded, 1-5 = star grade.
    pub condition: u32,
    pub notes: String,
    /// Open "+ New" sub-dialog, if any.
    pub new_lookup: Option<LookupForm>,
}

impl Default for ConsoleForm {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            console_type: LookupSelect::default(),
            manufacturer: LookupSelect::default(),
            generation: String::new(),
            jp_release_date: String::new(),
            us_release_date: String::new(),
            eu_release_date: String::new(),
            discontinued: String::new(),
            price_jpy: String::new(),
            price_usd: String::new(),
            controllers: String::new(),
            cpu: String::new(),
            gpu: String::new(),
            memory: String::new(),
            audio: String::new(),
            units_sold: String::new(),
            top_game: String::new(),
            predecessor: String::new(),
            successor: String::new(),
            owned: true,
            condition: 0,
            notes: String::new(),
            new_lookup: None,
        }
    }
}

impl ConsoleForm {
    /// Empty form for adding a console, with dropdown options loaded.
    pub fn new(store: &Store) -> Result<Self, StoreError> {
        let mut form = Self::default();
        form.refresh_options(store)?;
        Ok(form)
    }

    /// Form pre-filled from an existing console.
    pub fn edit(store: &Store, console: &Console) -> Result<Self, StoreError> {
        let mut form = Self {
            id: console.id,
            name: console.name.clone(),
            generation: buffer(&console.generation),
            jp_release_date: console.jp_release_date.clone().unwrap_or_default(),
            us_release_date: console.us_release_date.clone().unwrap_or_default(),
            eu_release_date: console.eu_release_date.clone().unwrap_or_default(),
            discontinued: console.discontinued.clone().unwrap_or_default(),
            price_jpy: buffer(&console.price_jpy),
            price_usd: buffer(&console.price_usd),
            controllers: buffer(&console.controllers),
            cpu: console.cpu.clone().unwrap_or_default(),
            gpu: console.gpu.clone().unwrap_or_default(),
            memory: console.memory.clone().unwrap_or_default(),
            audio: console.audio.clone().unwrap_or_default(),
            units_sold: buffer(&console.units_sold),
            top_game: console.top_game.clone().unwrap_or_default(),
            predecessor: console.predecessor.clone().unwrap_or_default(),
            successor: console.successor.clone().unwrap_or_default(),
            owned: console.owned,
            condition: console.condition.unwrap_or(0),
            notes: console.notes.clone().unwrap_or_default(),
            ..Self::default()
        };
        form.console_type.selected = console.type_id;
        form.manufacturer.selected = console.manufacturer_id;
        form.refresh_options(store)?;
        Ok(form)
    }

    /// (Re)load the dropdown options.
    pub fn refresh_options(&mut self, store: &Store) -> Result<(), StoreError> {
        self.console_type
            .refresh(store.lookup_entries(CONSOLE_TYPES)?);
        self.manufacturer
            .refresh(store.lookup_entries(MANUFACTURERS)?);
        Ok(())
    }

    /// Validate and convert to a record ready for `Store::save_console`.
    pub fn to_console(&self) -> Result<Console, String> {
        let name = require("Name", &self.name)?;
        if self.console_type.selected.is_none() {
            return Err("Type is required".to_string());
        }
        if self.manufacturer.selected.is_none() {
            return Err("Manufacturer is required".to_string());
        }

        let generation = parse_optional_u32("Generation", &self.generation)?;
        let jp_release_date = parse_optional_date("JP release date", &self.jp_release_date)?;
        let us_release_date = parse_optional_date("US release date", &self.us_release_date)?;
        let eu_release_date = parse_optional_date("EU release date", &self.eu_release_date)?;
        let discontinued = parse_optional_date("Discontinued date", &self.discontinued)?;
        let price_jpy = parse_optional_count("Launch price (JPY)", &self.price_jpy)?;
        let price_usd = parse_optional_count("Launch price (USD)", &self.price_usd)?;
        let controllers = parse_optional_u32("Controller ports", &self.controllers)?;
        let units_sold = parse_optional_count("Units sold", &self.units_sold)?;

        Ok(Console {
            id: self.id,
            name,
            type_id: self.console_type.selected,
            manufacturer_id: self.manufacturer.selected,
            generation,
            jp_release_date,
            us_release_date,
            eu_release_date,
            discontinued,
            price_jpy,
            price_usd,
            controllers,
            cpu: optional_text(&self.cpu),
            gpu: optional_text(&self.gpu),
            memory: optional_text(&self.memory),
            audio: optional_text(&self.audio),
            units_sold,
            top_game: optional_text(&self.top_game),
            predecessor: optional_text(&self.predecessor),
            successor: optional_text(&self.successor),
            owned: self.owned,
            condition: (self.condition > 0).then(|| self.condition.min(5)),
            notes: optional_text(&self.notes),
            ..Console::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ConsoleForm {
        let mut form = ConsoleForm::default();
        form.name = "GameCube".to_string();
        form.console_type.selected = Some(1);
        form.manufacturer.selected = Some(2);
        form
    }

    #[test]
    fn required_fields_are_enforced_in_order() {
        let mut form = valid_form();
        form.name.clear();
        assert_eq!(form.to_console().unwrap_err(), "Name is required");

        let mut form = valid_form();
        form.console_type.selected = None;
        assert_eq!(form.to_console().unwrap_err(), "Type is required");

        let mut form = valid_form();
        form.manufacturer.selected = None;
        assert_eq!(form.to_console().unwrap_err(), "Manufacturer is required");
    }

    #[test]
    fn garbage_generation_is_rejected() {
        let mut form = valid_form();
        form.generation = "sixth".to_string();
        assert!(form.to_console().is_err());
    }

    #[test]
    fn valid_form_converts() {
        let mut form = valid_form();
        form.generation = "6".to_string();
        form.jp_release_date = "2001-09-14".to_string();
        form.price_usd = "199".to_string();
        form.controllers = "4".to_string();
        form.cpu = "IBM Gekko".to_string();
        form.condition = 5;

        let console = form.to_console().unwrap();
        assert_eq!(console.name, "GameCube");
        assert_eq!(console.generation, Some(6));
        assert_eq!(console.jp_release_date.as_deref(), Some("2001-09-14"));
        assert_eq!(console.price_usd, Some(199));
        assert_eq!(console.controllers, Some(4));
        assert_eq!(console.cpu.as_deref(), Some("IBM Gekko"));
        assert_eq!(console.condition, Some(5));
    }
}

//! Accessory add/edit form state.

use game_shelf_core::types::{Accessory, LookupEntry};
use game_shelf_db::{ACCESSORY_TYPES, MANUFACTURERS, Store, StoreError};

use super::{
    LookupForm, LookupSelect, PickList, buffer, optional_text, parse_optional_date,
    parse_optional_price, require,
};

#[derive(Debug, Clone)]
pub struct AccessoryForm {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub accessory_type: LookupSelect,
    pub manufacturer: LookupSelect,
    pub consoles: PickList,
    pub quantity: String,
    pub owned: bool,
    /// 0 = ungraded, 1-5 = star grade.
    pub condition: u32,
    pub purchase_date: String,
    pub purchase_price: String,
    pub notes: String,
    /// Open "+ New" sub-dialog, if any.
    pub new_lookup: Option<LookupForm>,
}

impl Default for AccessoryForm {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            color: String::new(),
            accessory_type: LookupSelect::default(),
            manufacturer: LookupSelect::default(),
            consoles: PickList::default(),
            quantity: "1".to_string(),
            owned: true,
            condition: 0,
            purchase_date: String::new(),
            purchase_price: String::new(),
            notes: String::new(),
            new_lookup: None,
        }
    }
}

impl AccessoryForm {
    /// Empty form for adding an accessory, with dropdown options loaded.
    pub fn new(store: &Store) -> Result<Self, StoreError> {
        let mut form = Self::default();
        form.refresh_options(store)?;
        Ok(form)
    }

    /// Form pre-filled from an existing accessory.
    pub fn edit(store: &Store, accessory: &Accessory) -> Result<Self, StoreError> {
        let mut form = Self {
            id: accessory.id,
            name: accessory.name.clone(),
            color: accessory.color.clone().unwrap_or_default(),
            quantity: accessory.quantity.to_string(),
            owned: accessory.owned,
            condition: accessory.condition.unwrap_or(0),
            purchase_date: accessory.purchase_date.clone().unwrap_or_default(),
            purchase_price: buffer(&accessory.purchase_price),
            notes: accessory.notes.clone().unwrap_or_default(),
            ..Self::default()
        };
        form.accessory_type.selected = accessory.type_id;
        form.manufacturer.selected = accessory.manufacturer_id;
        form.consoles.staged = accessory.consoles.clone();
        form.refresh_options(store)?;
        Ok(form)
    }

    /// (Re)load the dropdown and pick-list options.
    pub fn refresh_options(&mut self, store: &Store) -> Result<(), StoreError> {
        self.accessory_type
            .refresh(store.lookup_entries(ACCESSORY_TYPES)?);
        self.manufacturer
            .refresh(store.lookup_entries(MANUFACTURERS)?);
        let consoles = store
            .consoles()?
            .into_iter()
            .map(|c| LookupEntry {
                id: c.id,
                name: c.name,
            })
            .collect();
        self.consoles.refresh(consoles);
        Ok(())
    }

    /// Validate and convert to a record ready for `Store::save_accessory`.
    pub fn to_accessory(&self) -> Result<Accessory, String> {
        let name = require("Name", &self.name)?;
        if self.accessory_type.selected.is_none() {
            return Err("Type is required".to_string());
        }

        let quantity = parse_quantity(&self.quantity)?;
        let purchase_date = parse_optional_date("Purchase date", &self.purchase_date)?;
        let purchase_price = parse_optional_price("Purchase price", &self.purchase_price)?;

        Ok(Accessory {
            id: self.id,
            name,
            color: optional_text(&self.color),
            type_id: self.accessory_type.selected,
            manufacturer_id: self.manufacturer.selected,
            quantity,
            owned: self.owned,
            condition: (self.condition > 0).then(|| self.condition.min(5)),
            purchase_date,
            purchase_price,
            notes: optional_text(&self.notes),
            consoles: self.consoles.staged.clone(),
            ..Accessory::default()
        })
    }
}

/// Quantity defaults to 1 when left blank.
fn parse_quantity(value: &str) -> Result<i64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(1);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err("Quantity must be a non-negative whole number".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AccessoryForm {
        let mut form = AccessoryForm::default();
        form.name = "Wavebird".to_string();
        form.accessory_type.selected = Some(1);
        form
    }

    #[test]
    fn name_and_type_are_required() {
        let mut form = valid_form();
        form.name.clear();
        assert_eq!(form.to_accessory().unwrap_err(), "Name is required");

        let mut form = valid_form();
        form.accessory_type.selected = None;
        assert_eq!(form.to_accessory().unwrap_err(), "Type is required");
    }

    #[test]
    fn blank_quantity_defaults_to_one() {
        let mut form = valid_form();
        form.quantity = "  ".to_string();
        assert_eq!(form.to_accessory().unwrap().quantity, 1);
    }

    #[test]
    fn garbage_quantity_is_rejected() {
        let mut form = valid_form();
        form.quantity = "two".to_string();
        assert!(form.to_accessory().is_err());
    }

    #[test]
    fn valid_form_converts() {
        let mut form = valid_form();
        form.color = "Platinum".to_string();
        form.quantity = "2".to_string();
        form.condition = 3;
        form.purchase_date = "2020-01-02".to_string();
        form.purchase_price = "45".to_string();
        form.consoles.staged = vec![LookupEntry {
            id: 7,
            name: "GameCube".to_string(),
        }];

        let accessory = form.to_accessory().unwrap();
        assert_eq!(accessory.name, "Wavebird");
        assert_eq!(accessory.color.as_deref(), Some("Platinum"));
        assert_eq!(accessory.quantity, 2);
        assert_eq!(accessory.condition, Some(3));
        assert_eq!(accessory.purchase_date.as_deref(), Some("2020-01-02"));
        assert_eq!(accessory.purchase_price, Some(45.0));
        assert_eq!(accessory.consoles.len(), 1);
    }
}

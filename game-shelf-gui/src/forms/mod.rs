//! Form state and validation, decoupled from the widget code.
//!
//! Each dialog form is a plain struct of text buffers, selections, and
//! staged lists. Parsing/validation happens in `to_*` methods that run
//! before any database write: required fields must be non-empty, empty
//! optional fields become `None`, and non-empty text that fails to parse
//! is rejected with a user-facing message rather than silently dropped.

pub mod accessory;
pub mod console;
pub mod game;
pub mod lookup;

pub use accessory::AccessoryForm;
pub use console::ConsoleForm;
pub use game::GameForm;
pub use lookup::{LookupForm, LookupTarget};

use chrono::NaiveDate;
use game_shelf_core::types::LookupEntry;

// -- Field parsing --

/// A required text field: trimmed, must be non-empty.
pub fn require(label: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// An optional text field: empty becomes `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// An optional `YYYY-MM-DD` date field.
pub fn parse_optional_date(label: &str, value: &str) -> Result<Option<String>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date.format("%Y-%m-%d").to_string())),
        Err(_) => Err(format!("{label} must be a date in YYYY-MM-DD form")),
    }
}

/// An optional non-negative integer field.
pub fn parse_optional_count(label: &str, value: &str) -> Result<Option<i64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(Some(n)),
        _ => Err(format!("{label} must be a non-negative whole number")),
    }
}

/// An optional small integer field (generation, controller ports).
pub fn parse_optional_u32(label: &str, value: &str) -> Result<Option<u32>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| format!("{label} must be a non-negative whole number"))
}

/// An optional price field.
pub fn parse_optional_price(label: &str, value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(price) if price >= 0.0 => Ok(Some(price)),
        _ => Err(format!("{label} must be a non-negative number")),
    }
}

/// Format an optional value back into a text buffer for editing.
pub fn buffer<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

// -- Dropdown selection state --

/// Selection state for a single-choice lookup dropdown.
#[derive(Debug, Clone, Default)]
pub struct LookupSelect {
    pub options: Vec<LookupEntry>,
    pub selected: Option<i64>,
}

impl LookupSelect {
    pub fn selected_name(&self) -> Option<&str> {
        let id = self.selected?;
        self.options
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.name.as_str())
    }

    /// Swap in a fresh option list, dropping the selection if its entry
    /// disappeared.
    pub fn refresh(&mut self, options: Vec<LookupEntry>) {
        if let Some(id) = self.selected
            && !options.iter().any(|o| o.id == id)
        {
            self.selected = None;
        }
        self.options = options;
    }
}

// -- Many-to-many staging --

/// Staged selections for a many-to-many field.
///
/// Picks accumulate locally (Add), can be wiped (Clear), and are only
/// written to the join table when the parent save succeeds.
#[derive(Debug, Clone, Default)]
pub struct PickList {
    pub options: Vec<LookupEntry>,
    pub staged: Vec<LookupEntry>,
    /// Current dropdown choice, not yet added to the staged list.
    pub pending: Option<i64>,
}

impl PickList {
    /// Move the pending dropdown choice into the staged list (deduplicated).
    pub fn add_pending(&mut self) {
        let Some(id) = self.pending else { return };
        if self.staged.iter().any(|e| e.id == id) {
            self.pending = None;
            return;
        }
        if let Some(option) = self.options.iter().find(|o| o.id == id) {
            self.staged.push(option.clone());
            self.pending = None;
        }
    }

    pub fn clear(&mut self) {
        self.staged.clear();
    }

    pub fn refresh(&mut self, options: Vec<LookupEntry>) {
        if let Some(id) = self.pending
            && !options.iter().any(|o| o.id == id)
        {
            self.pending = None;
        }
        self.options = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str) -> LookupEntry {
        LookupEntry {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn require_rejects_blank() {
        assert!(require("Title", "").is_err());
        assert!(require("Title", "   ").is_err());
        assert_eq!(require("Title", " Zelda "), Ok("Zelda".to_string()));
    }

    #[test]
    fn date_parsing_is_strict() {
        assert_eq!(parse_optional_date("Date", ""), Ok(None));
        assert_eq!(
            parse_optional_date("Date", "1996-06-23"),
            Ok(Some("1996-06-23".to_string()))
        );
        assert!(parse_optional_date("Date", "june 1996").is_err());
        assert!(parse_optional_date("Date", "1996-13-40").is_err());
    }

    #[test]
    fn count_parsing_rejects_garbage_and_negatives() {
        assert_eq!(parse_optional_count("Units", ""), Ok(None));
        assert_eq!(parse_optional_count("Units", "500"), Ok(Some(500)));
        assert!(parse_optional_count("Units", "lots").is_err());
        assert!(parse_optional_count("Units", "-3").is_err());
    }

    #[test]
    fn price_parsing_rejects_garbage_and_negatives() {
        assert_eq!(parse_optional_price("Price", ""), Ok(None));
        assert_eq!(parse_optional_price("Price", "59.99"), Ok(Some(59.99)));
        assert!(parse_optional_price("Price", "cheap").is_err());
        assert!(parse_optional_price("Price", "-1").is_err());
    }

    #[test]
    fn pick_list_add_is_deduplicated() {
        let mut list = PickList {
            options: vec![entry(1, "Rare"), entry(2, "Capcom")],
            ..PickList::default()
        };
        list.pending = Some(1);
        list.add_pending();
        list.pending = Some(1);
        list.add_pending();
        list.pending = Some(2);
        list.add_pending();
        assert_eq!(list.staged.len(), 2);

        list.clear();
        assert!(list.staged.is_empty());
    }

    #[test]
    fn lookup_select_refresh_drops_vanished_selection() {
        let mut select = LookupSelect {
            options: vec![entry(1, "RPG")],
            selected: Some(1),
        };
        select.refresh(vec![entry(2, "Racing")]);
        assert_eq!(select.selected, None);

        let mut select = LookupSelect {
            options: vec![entry(1, "RPG")],
            selected: Some(1),
        };
        select.refresh(vec![entry(1, "RPG"), entry(2, "Racing")]);
        assert_eq!(select.selected, Some(1));
        assert_eq!(select.selected_name(), Some("RPG"));
    }
}

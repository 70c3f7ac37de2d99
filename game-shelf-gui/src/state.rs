//! Navigation and per-tab UI state.

// -- Navigation --

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Games,
    Consoles,
    Accessories,
}

// -- Tab state --

/// State of one entity tab: the cached unfiltered rows, the search text,
/// and the selected row id (gates the Details/Edit/Delete buttons).
pub struct TabState<T> {
    pub rows: Vec<T>,
    pub filter_text: String,
    pub selected: Option<i64>,
}

impl<T> Default for TabState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filter_text: String::new(),
            selected: None,
        }
    }
}

impl<T> TabState<T> {
    /// Replace the cached rows after a reload. Clears the selection, since
    /// the selected row may no longer exist.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.selected = None;
    }

    /// Select the row, or deselect it if it was already selected.
    pub fn toggle_select(&mut self, id: i64) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }
}

// -- Modal message --

/// A modal info/error message with an OK button. Shown on top of whatever
/// dialog is open, so a failed save leaves the form intact for retry.
pub struct Message {
    pub title: String,
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn info(title: &str, text: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(title: &str, text: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            text: text.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_select_flips_and_clears() {
        let mut tab: TabState<i64> = TabState::default();
        tab.toggle_select(3);
        assert_eq!(tab.selected, Some(3));
        tab.toggle_select(5);
        assert_eq!(tab.selected, Some(5));
        tab.toggle_select(5);
        assert_eq!(tab.selected, None);
    }

    #[test]
    fn set_rows_resets_selection() {
        let mut tab: TabState<i64> = TabState::default();
        tab.toggle_select(1);
        tab.set_rows(vec![1, 2, 3]);
        assert_eq!(tab.selected, None);
        assert_eq!(tab.rows.len(), 3);
    }
}

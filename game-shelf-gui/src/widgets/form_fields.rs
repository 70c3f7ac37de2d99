//! Shared form field renderers used by all three entity forms.
//!
//! Scalar fields render as label + widget rows inside an `egui::Grid`;
//! many-to-many pick lists render as their own sections below the grid.

use game_shelf_core::condition_stars;
use game_shelf_core::types::name_list;

use crate::forms::{LookupSelect, PickList};

/// Label + single-line text field.
pub fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(260.0));
    ui.end_row();
}

/// Label + single-line text field with a hint.
pub fn hint_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(260.0),
    );
    ui.end_row();
}

/// Label + date field (`YYYY-MM-DD`).
pub fn date_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    hint_row(ui, label, value, "YYYY-MM-DD");
}

/// Dropdown over a lookup option list, with a "(none)" entry.
pub fn lookup_combo(ui: &mut egui::Ui, id_salt: &str, select: &mut LookupSelect, width: f32) {
    let selected_text = select.selected_name().unwrap_or("").to_string();
    egui::ComboBox::from_id_salt(id_salt)
        .width(width)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut select.selected, None, "(none)");
            for option in &select.options {
                ui.selectable_value(&mut select.selected, Some(option.id), option.name.as_str());
            }
        });
}

/// Label + dropdown row. Returns true when the "+ New" button was clicked;
/// pass `allow_new: false` to omit the button.
pub fn lookup_row(
    ui: &mut egui::Ui,
    id_salt: &str,
    label: &str,
    select: &mut LookupSelect,
    allow_new: bool,
) -> bool {
    ui.label(label);
    let mut new_clicked = false;
    ui.horizontal(|ui| {
        lookup_combo(ui, id_salt, select, 200.0);
        if allow_new && ui.small_button("+ New").clicked() {
            new_clicked = true;
        }
    });
    ui.end_row();
    new_clicked
}

/// Label + condition slider rendering the grade as stars (0 = ungraded).
pub fn condition_row(ui: &mut egui::Ui, label: &str, condition: &mut u32) {
    ui.label(label);
    ui.horizontal(|ui| {
        ui.add(egui::Slider::new(condition, 0..=5).show_value(false));
        if *condition == 0 {
            ui.weak("ungraded");
        } else {
            ui.label(condition_stars(Some(*condition)));
        }
    });
    ui.end_row();
}

/// A many-to-many staging section: dropdown + Add / "+ New" / Clear and the
/// staged list. Returns true when "+ New" was clicked.
pub fn pick_list_section(
    ui: &mut egui::Ui,
    id_salt: &str,
    heading: &str,
    list: &mut PickList,
    allow_new: bool,
) -> bool {
    ui.separator();
    ui.strong(heading);
    let mut new_clicked = false;
    ui.horizontal(|ui| {
        let pending_text = list
            .pending
            .and_then(|id| list.options.iter().find(|o| o.id == id))
            .map(|o| o.name.clone())
            .unwrap_or_default();
        egui::ComboBox::from_id_salt(id_salt)
            .width(200.0)
            .selected_text(pending_text)
            .show_ui(ui, |ui| {
                for option in &list.options {
                    ui.selectable_value(&mut list.pending, Some(option.id), option.name.as_str());
                }
            });
        if ui.button("Add").clicked() {
            list.add_pending();
        }
        if allow_new && ui.button("+ New").clicked() {
            new_clicked = true;
        }
        if ui.button("Clear").clicked() {
            list.clear();
        }
    });
    if list.staged.is_empty() {
        ui.weak("None selected");
    } else {
        ui.label(name_list(&list.staged));
    }
    new_clicked
}

//! Search bar + action button toolbar shared by the entity tabs.

use crate::state::TabState;

/// What the user did in the toolbar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    Add,
    Details(i64),
    Edit(i64),
    Delete(i64),
}

/// Render the Add/Details/Edit/Delete buttons and the search field.
/// Details/Edit/Delete are enabled only while a row is selected.
pub fn collection_toolbar<T>(
    ui: &mut egui::Ui,
    tab: &mut TabState<T>,
    search_hint: &str,
) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        if ui.button("Add").clicked() {
            action = ToolbarAction::Add;
        }

        let selected = tab.selected;
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("Details"))
            .clicked()
            && let Some(id) = selected
        {
            action = ToolbarAction::Details(id);
        }
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("Edit"))
            .clicked()
            && let Some(id) = selected
        {
            action = ToolbarAction::Edit(id);
        }
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("Delete"))
            .clicked()
            && let Some(id) = selected
        {
            action = ToolbarAction::Delete(id);
        }

        ui.separator();

        ui.add(
            egui::TextEdit::singleline(&mut tab.filter_text)
                .hint_text(search_hint)
                .desired_width(240.0),
        );
    });

    action
}

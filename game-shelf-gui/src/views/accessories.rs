//! The Accessories tab.

use game_shelf_core::condition_stars;
use game_shelf_core::filter::accessory_matches;
use game_shelf_core::types::Accessory;

use crate::app::GameShelfApp;
use crate::widgets::{self, RowAction, TableColumn, ToolbarAction};

const COLUMNS: &[TableColumn] = &[
    TableColumn {
        header: "ID",
        width: 50.0,
    },
    TableColumn {
        header: "Name",
        width: 220.0,
    },
    TableColumn {
        header: "Color",
        width: 100.0,
    },
    TableColumn {
        header: "Type",
        width: 120.0,
    },
    TableColumn {
        header: "Manufacturer",
        width: 160.0,
    },
    TableColumn {
        header: "Condition",
        width: 90.0,
    },
];

/// Render the Accessories tab.
pub fn show(ui: &mut egui::Ui, app: &mut GameShelfApp) {
    let toolbar = widgets::collection_toolbar(ui, &mut app.accessories, "Search accessories...");
    ui.separator();

    let total = app.accessories.rows.len();
    let action = {
        let filtered: Vec<&Accessory> = app
            .accessories
            .rows
            .iter()
            .filter(|a| accessory_matches(a, &app.accessories.filter_text))
            .collect();
        ui.label(format!("{} accessories | showing {}", total, filtered.len()));
        ui.add_space(2.0);
        widgets::entity_table(
            ui,
            "accessories_table",
            COLUMNS,
            &filtered,
            app.accessories.selected,
            |a| a.id,
            accessory_cell,
        )
    };

    match toolbar {
        ToolbarAction::Add => app.open_add_accessory(),
        ToolbarAction::Details(id) => app.open_accessory_details(id),
        ToolbarAction::Edit(id) => app.open_edit_accessory(id),
        ToolbarAction::Delete(id) => app.confirm_delete_accessory(id),
        ToolbarAction::None => {}
    }
    match action {
        RowAction::Clicked(id) => app.accessories.toggle_select(id),
        RowAction::Details(id) => app.open_accessory_details(id),
        RowAction::Edit(id) => app.open_edit_accessory(id),
        RowAction::Delete(id) => app.confirm_delete_accessory(id),
        RowAction::None => {}
    }
}

fn accessory_cell(accessory: &Accessory, column: usize) -> String {
    match column {
        0 => accessory.id.to_string(),
        1 => accessory.name.clone(),
        2 => accessory.color.clone().unwrap_or_default(),
        3 => accessory.type_name.clone().unwrap_or_default(),
        4 => accessory.manufacturer_name.clone().unwrap_or_default(),
        5 => condition_stars(accessory.condition),
        _ => String::new(),
    }
}

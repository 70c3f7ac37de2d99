//! The Consoles tab.

use game_shelf_core::condition_stars;
use game_shelf_core::filter::console_matches;
use game_shelf_core::types::Console;

use crate::app::GameShelfApp;
use crate::widgets::{self, RowAction, TableColumn, ToolbarAction};

const COLUMNS: &[TableColumn] = &[
    TableColumn {
        header: "ID",
        width: 50.0,
    },
    TableColumn {
        header: "Name",
        width: 240.0,
    },
    TableColumn {
        header: "Manufacturer",
        width: 200.0,
    },
    TableColumn {
        header: "Gen",
        width: 50.0,
    },
    TableColumn {
        header: "Condition",
        width: 90.0,
    },
];

/// Render the Consoles tab.
pub fn show(ui: &mut egui::Ui, app: &mut GameShelfApp) {
    let toolbar = widgets::collection_toolbar(ui, &mut app.consoles, "Search consoles...");
    ui.separator();

    let total = app.consoles.rows.len();
    let action = {
        let filtered: Vec<&Console> = app
            .consoles
            .rows
            .iter()
            .filter(|c| console_matches(c, &app.consoles.filter_text))
            .collect();
        ui.label(format!("{} consoles | showing {}", total, filtered.len()));
        ui.add_space(2.0);
        widgets::entity_table(
            ui,
            "consoles_table",
            COLUMNS,
            &filtered,
            app.consoles.selected,
            |c| c.id,
            console_cell,
        )
    };

    match toolbar {
        ToolbarAction::Add => app.open_add_console(),
        ToolbarAction::Details(id) => app.open_console_details(id),
        ToolbarAction::Edit(id) => app.open_edit_console(id),
        ToolbarAction::Delete(id) => app.confirm_delete_console(id),
        ToolbarAction::None => {}
    }
    match action {
        RowAction::Clicked(id) => app.consoles.toggle_select(id),
        RowAction::Details(id) => app.open_console_details(id),
        RowAction::Edit(id) => app.open_edit_console(id),
        RowAction::Delete(id) => app.confirm_delete_console(id),
        RowAction::None => {}
    }
}

fn console_cell(console: &Console, column: usize) -> String {
    match column {
        0 => console.id.to_string(),
        1 => console.name.clone(),
        2 => console.manufacturer_name.clone().unwrap_or_default(),
        3 => console
            .generation
            .map(|g| g.to_string())
            .unwrap_or_default(),
        4 => condition_stars(console.condition),
        _ => String::new(),
    }
}

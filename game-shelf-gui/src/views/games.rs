//! The Games tab: search bar, action toolbar, and filtered table.

use game_shelf_core::condition_stars;
use game_shelf_core::filter::game_matches;
use game_shelf_core::types::Game;

use crate::app::GameShelfApp;
use crate::widgets::{self, RowAction, TableColumn, ToolbarAction};

const COLUMNS: &[TableColumn] = &[
    TableColumn {
        header: "ID",
        width: 50.0,
    },
    TableColumn {
        header: "Title",
        width: 280.0,
    },
    TableColumn {
        header: "Console",
        width: 200.0,
    },
    TableColumn {
        header: "Genre",
        width: 140.0,
    },
    TableColumn {
        header: "Condition",
        width: 90.0,
    },
];

/// Render the Games tab.
pub fn show(ui: &mut egui::Ui, app: &mut GameShelfApp) {
    let toolbar = widgets::collection_toolbar(ui, &mut app.games, "Search games...");
    ui.separator();

    let total = app.games.rows.len();
    let action = {
        let filtered: Vec<&Game> = app
            .games
            .rows
            .iter()
            .filter(|g| game_matches(g, &app.games.filter_text))
            .collect();
        ui.label(format!("{} games | showing {}", total, filtered.len()));
        ui.add_space(2.0);
        widgets::entity_table(
            ui,
            "games_table",
            COLUMNS,
            &filtered,
            app.games.selected,
            |g| g.id,
            game_cell,
        )
    };

    match toolbar {
        ToolbarAction::Add => app.open_add_game(),
        ToolbarAction::Details(id) => app.open_game_details(id),
        ToolbarAction::Edit(id) => app.open_edit_game(id),
        ToolbarAction::Delete(id) => app.confirm_delete_game(id),
        ToolbarAction::None => {}
    }
    match action {
        RowAction::Clicked(id) => app.games.toggle_select(id),
        RowAction::Details(id) => app.open_game_details(id),
        RowAction::Edit(id) => app.open_edit_game(id),
        RowAction::Delete(id) => app.confirm_delete_game(id),
        RowAction::None => {}
    }
}

fn game_cell(game: &Game, column: usize) -> String {
    match column {
        0 => game.id.to_string(),
        1 => game.title.clone(),
        2 => game.console_name.clone().unwrap_or_default(),
        3 => game.genre_name.clone().unwrap_or_default(),
        4 => condition_stars(game.condition),
        _ => String::new(),
    }
}

//! game-shelf GUI
//!
//! Desktop application for cataloguing a personal video-game collection:
//! games, consoles, accessories, and their lookup tables, backed by a
//! local SQLite database.

mod app;
mod dialogs;
mod forms;
mod state;
mod views;
mod widgets;

use game_shelf_db::Store;

fn main() -> eframe::Result {
    env_logger::init();

    let db_path = match game_shelf_db::database_path() {
        Ok(path) => path,
        Err(e) => {
            log::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        log::error!("Failed to create {}: {e}", parent.display());
        std::process::exit(1);
    }

    let store = match Store::open(&db_path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to open database {}: {e}", db_path.display());
            std::process::exit(1);
        }
    };
    log::info!("Opened collection database at {}", db_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "game-shelf",
        options,
        Box::new(move |cc| Ok(Box::new(app::GameShelfApp::new(cc, store)))),
    )
}

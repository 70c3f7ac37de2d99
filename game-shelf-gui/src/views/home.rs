//! Collection statistics dashboard.

use crate::app::GameShelfApp;

/// Render the Home view.
pub fn show(ui: &mut egui::Ui, app: &mut GameShelfApp) {
    ui.heading("Collection");
    ui.separator();
    ui.add_space(8.0);

    match app.stats {
        Some(stats) => {
            egui::Grid::new("stats_grid")
                .num_columns(3)
                .spacing([32.0, 8.0])
                .show(ui, |ui| {
                    ui.label("");
                    ui.strong("Total");
                    ui.strong("Owned");
                    ui.end_row();

                    ui.label("Games");
                    ui.label(stats.games.to_string());
                    ui.label(stats.games_owned.to_string());
                    ui.end_row();

                    ui.label("Consoles");
                    ui.label(stats.consoles.to_string());
                    ui.label(stats.consoles_owned.to_string());
                    ui.end_row();

                    ui.label("Accessories");
                    ui.label(stats.accessories.to_string());
                    ui.label(stats.accessories_owned.to_string());
                    ui.end_row();
                });
            ui.add_space(16.0);
            ui.weak("Manage games, consoles, and accessories from the tabs on the left.");
        }
        None => {
            ui.label("Statistics unavailable.");
        }
    }
}

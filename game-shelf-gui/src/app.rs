//! Main application state and the eframe update loop.

use game_shelf_core::types::{Accessory, Console, Game};
use game_shelf_db::{CollectionStats, Store};

use crate::dialogs::{self, Dialog, EntityKind, PendingDelete};
use crate::forms::{AccessoryForm, ConsoleForm, GameForm};
use crate::state::{Message, TabState, View};
use crate::views;

/// Main application state.
pub struct GameShelfApp {
    /// Owns the database connection for the process lifetime.
    pub store: Store,

    /// Current sidebar navigation selection.
    pub view: View,

    pub games: TabState<Game>,
    pub consoles: TabState<Console>,
    pub accessories: TabState<Accessory>,

    /// Counts for the Home view, refreshed on every mutation.
    pub stats: Option<CollectionStats>,

    /// The open modal dialog, if any.
    pub dialog: Option<Dialog>,

    /// Modal info/error message, drawn on top of everything.
    pub message: Option<Message>,
}

impl GameShelfApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, store: Store) -> Self {
        let mut app = Self {
            store,
            view: View::Home,
            games: TabState::default(),
            consoles: TabState::default(),
            accessories: TabState::default(),
            stats: None,
            dialog: None,
            message: None,
        };
        app.reload_all();
        app
    }

    /// Re-query every collection and the statistics. Fetch failures are
    /// logged and the previous rows stay on screen.
    pub fn reload_all(&mut self) {
        self.reload_games();
        self.reload_consoles();
        self.reload_accessories();
        self.reload_stats();
    }

    pub fn reload_games(&mut self) {
        match self.store.games() {
            Ok(rows) => self.games.set_rows(rows),
            Err(e) => log::error!("Failed to load games: {e}"),
        }
    }

    pub fn reload_consoles(&mut self) {
        match self.store.consoles() {
            Ok(rows) => self.consoles.set_rows(rows),
            Err(e) => log::error!("Failed to load consoles: {e}"),
        }
    }

    pub fn reload_accessories(&mut self) {
        match self.store.accessories() {
            Ok(rows) => self.accessories.set_rows(rows),
            Err(e) => log::error!("Failed to load accessories: {e}"),
        }
    }

    pub fn reload_stats(&mut self) {
        match self.store.stats() {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => log::error!("Failed to load statistics: {e}"),
        }
    }

    // -- Dialog openers --

    pub fn open_add_game(&mut self) {
        match GameForm::new(&self.store) {
            Ok(form) => self.dialog = Some(Dialog::GameForm(form)),
            Err(e) => self.form_error(e),
        }
    }

    pub fn open_game_details(&mut self, id: i64) {
        match self.store.game(id) {
            Ok(game) => self.dialog = Some(Dialog::GameDetails(game)),
            Err(e) => self.load_error(e),
        }
    }

    pub fn open_edit_game(&mut self, id: i64) {
        let game = match self.store.game(id) {
            Ok(game) => game,
            Err(e) => return self.load_error(e),
        };
        match GameForm::edit(&self.store, &game) {
            Ok(form) => self.dialog = Some(Dialog::GameForm(form)),
            Err(e) => self.form_error(e),
        }
    }

    pub fn confirm_delete_game(&mut self, id: i64) {
        let name = self
            .games
            .rows
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.title.clone())
            .unwrap_or_else(|| format!("game #{id}"));
        self.dialog = Some(Dialog::ConfirmDelete(PendingDelete {
            kind: EntityKind::Game,
            id,
            name,
        }));
    }

    pub fn open_add_console(&mut self) {
        match ConsoleForm::new(&self.store) {
            Ok(form) => self.dialog = Some(Dialog::ConsoleForm(form)),
            Err(e) => self.form_error(e),
        }
    }

    pub fn open_console_details(&mut self, id: i64) {
        match self.store.console(id) {
            Ok(console) => self.dialog = Some(Dialog::ConsoleDetails(console)),
            Err(e) => self.load_error(e),
        }
    }

    pub fn open_edit_console(&mut self, id: i64) {
        let console = match self.store.console(id) {
            Ok(console) => console,
            Err(e) => return self.load_error(e),
        };
        match ConsoleForm::edit(&self.store, &console) {
            Ok(form) => self.dialog = Some(Dialog::ConsoleForm(form)),
            Err(e) => self.form_error(e),
        }
    }

    pub fn confirm_delete_console(&mut self, id: i64) {
        let name = self
            .consoles
            .rows
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("console #{id}"));
        self.dialog = Some(Dialog::ConfirmDelete(PendingDelete {
            kind: EntityKind::Console,
            id,
            name,
        }));
    }

    pub fn open_add_accessory(&mut self) {
        match AccessoryForm::new(&self.store) {
            Ok(form) => self.dialog = Some(Dialog::AccessoryForm(form)),
            Err(e) => self.form_error(e),
        }
    }

    pub fn open_accessory_details(&mut self, id: i64) {
        match self.store.accessory(id) {
            Ok(accessory) => self.dialog = Some(Dialog::AccessoryDetails(accessory)),
            Err(e) => self.load_error(e),
        }
    }

    pub fn open_edit_accessory(&mut self, id: i64) {
        let accessory = match self.store.accessory(id) {
            Ok(accessory) => accessory,
            Err(e) => return self.load_error(e),
        };
        match AccessoryForm::edit(&self.store, &accessory) {
            Ok(form) => self.dialog = Some(Dialog::AccessoryForm(form)),
            Err(e) => self.form_error(e),
        }
    }

    pub fn confirm_delete_accessory(&mut self, id: i64) {
        let name = self
            .accessories
            .rows
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| format!("accessory #{id}"));
        self.dialog = Some(Dialog::ConfirmDelete(PendingDelete {
            kind: EntityKind::Accessory,
            id,
            name,
        }));
    }

    fn load_error(&mut self, e: game_shelf_db::StoreError) {
        self.message = Some(Message::error("Failed to load record", e.to_string()));
    }

    fn form_error(&mut self, e: game_shelf_db::StoreError) {
        self.message = Some(Message::error("Failed to load form data", e.to_string()));
    }

    /// Render the modal message window, if one is pending.
    fn show_message(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else { return };

        let mut close = false;
        let mut open = true;
        egui::Window::new(message.title.clone())
            .id(egui::Id::new("message"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 60.0])
            .show(ctx, |ui| {
                if message.is_error {
                    ui.colored_label(ui.visuals().error_fg_color, &message.text);
                } else {
                    ui.label(&message.text);
                }
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        if close || !open {
            self.message = None;
        }
    }
}

impl eframe::App for GameShelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sidebar
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(140.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("game-shelf");
                ui.separator();
                ui.add_space(4.0);

                let view = &mut self.view;
                ui.selectable_value(view, View::Home, "Home");
                ui.selectable_value(view, View::Games, "Games");
                ui.selectable_value(view, View::Consoles, "Consoles");
                ui.selectable_value(view, View::Accessories, "Accessories");
            });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Home => views::home::show(ui, self),
            View::Games => views::games::show(ui, self),
            View::Consoles => views::consoles::show(ui, self),
            View::Accessories => views::accessories::show(ui, self),
        });

        // Modal layers
        dialogs::show(self, ctx);
        self.show_message(ctx);
    }
}

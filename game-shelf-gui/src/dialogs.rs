//! Modal dialogs: entity add/edit forms, read-only detail views, the
//! delete confirmation, and the nested "add lookup entry" sub-dialog.
//!
//! At most one dialog is open at a time (`[list] -> [dialog] -> [list]`);
//! the message window and a form's "+ New" sub-dialog stack on top of it.

use game_shelf_core::condition_stars;
use game_shelf_core::types::{Accessory, Console, Game, name_list};
use game_shelf_db::{
    ACCESSORY_TYPES, COMPOSERS, CONSOLE_TYPES, DEVELOPERS, GENRES, MANUFACTURERS, PRODUCERS,
    PUBLISHERS,
};

use crate::app::GameShelfApp;
use crate::forms::{AccessoryForm, ConsoleForm, GameForm, LookupForm, LookupTarget};
use crate::state::Message;
use crate::widgets::form_fields;

pub enum Dialog {
    GameForm(GameForm),
    ConsoleForm(ConsoleForm),
    AccessoryForm(AccessoryForm),
    GameDetails(Game),
    ConsoleDetails(Console),
    AccessoryDetails(Accessory),
    ConfirmDelete(PendingDelete),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Game,
    Console,
    Accessory,
}

pub struct PendingDelete {
    pub kind: EntityKind,
    pub id: i64,
    pub name: String,
}

enum Outcome {
    Keep,
    Close,
    Replace(Dialog),
}

/// Render the open dialog, if any, and apply its outcome.
pub fn show(app: &mut GameShelfApp, ctx: &egui::Context) {
    let Some(mut dialog) = app.dialog.take() else {
        return;
    };

    let outcome = match &mut dialog {
        Dialog::GameForm(form) => game_form_dialog(app, ctx, form),
        Dialog::ConsoleForm(form) => console_form_dialog(app, ctx, form),
        Dialog::AccessoryForm(form) => accessory_form_dialog(app, ctx, form),
        Dialog::GameDetails(game) => game_details_dialog(app, ctx, game),
        Dialog::ConsoleDetails(console) => console_details_dialog(app, ctx, console),
        Dialog::AccessoryDetails(accessory) => accessory_details_dialog(app, ctx, accessory),
        Dialog::ConfirmDelete(pending) => confirm_delete_dialog(app, ctx, pending),
    };

    match outcome {
        Outcome::Keep => app.dialog = Some(dialog),
        Outcome::Close => {}
        Outcome::Replace(next) => app.dialog = Some(next),
    }
}

// ── Entity Forms ────────────────────────────────────────────────────────────

fn game_form_dialog(app: &mut GameShelfApp, ctx: &egui::Context, form: &mut GameForm) -> Outcome {
    let title = if form.id == 0 { "Add game" } else { "Edit game" };
    let mut outcome = Outcome::Keep;
    let mut open = true;

    egui::Window::new(title)
        .id(egui::Id::new("game_form"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(560.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                if let Some(request) = game_form_ui(ui, form)
                    && form.new_lookup.is_none()
                {
                    form.new_lookup = Some(request);
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    match form.to_game() {
                        Ok(game) => match app.store.save_game(&game) {
                            Ok(_) => {
                                app.message =
                                    Some(Message::info("Saved", format!("'{}' saved.", game.title)));
                                app.reload_all();
                                outcome = Outcome::Close;
                            }
                            Err(e) => {
                                app.message = Some(Message::error("Save failed", e.to_string()));
                            }
                        },
                        Err(msg) => app.message = Some(Message::error("Invalid game", msg)),
                    }
                }
                if ui.button("Cancel").clicked() {
                    outcome = Outcome::Close;
                }
            });
        });
    if !open {
        outcome = Outcome::Close;
    }

    if lookup_subdialog(app, ctx, &mut form.new_lookup)
        && let Err(e) = form.refresh_options(&app.store)
    {
        log::error!("Failed to refresh game form options: {e}");
    }
    outcome
}

fn game_form_ui(ui: &mut egui::Ui, form: &mut GameForm) -> Option<LookupForm> {
    let mut request = None;

    egui::Grid::new("game_form_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            form_fields::text_row(ui, "Title *", &mut form.title);

            // Consoles are full entities; add them from their own tab.
            form_fields::lookup_row(ui, "game_console", "Console *", &mut form.console, false);
            if form_fields::lookup_row(ui, "game_genre", "Genre", &mut form.genre, true) {
                request = Some(LookupForm::table(GENRES));
            }

            form_fields::date_row(ui, "JP release", &mut form.jp_release_date);
            form_fields::date_row(ui, "US release", &mut form.us_release_date);
            form_fields::date_row(ui, "EU release", &mut form.eu_release_date);

            if form_fields::lookup_row(ui, "game_jp_rating", "JP rating", &mut form.jp_rating, true)
            {
                request = Some(LookupForm::rating());
            }
            if form_fields::lookup_row(ui, "game_us_rating", "US rating", &mut form.us_rating, true)
            {
                request = Some(LookupForm::rating());
            }
            if form_fields::lookup_row(ui, "game_eu_rating", "EU rating", &mut form.eu_rating, true)
            {
                request = Some(LookupForm::rating());
            }

            form_fields::hint_row(ui, "Units sold", &mut form.units_sold, "worldwide");
            form_fields::condition_row(ui, "Condition", &mut form.condition);
            form_fields::date_row(ui, "Purchase date", &mut form.purchase_date);
            form_fields::hint_row(ui, "Purchase price", &mut form.purchase_price, "0.00");
        });

    ui.add_space(4.0);
    ui.checkbox(&mut form.owned, "Owned");
    ui.checkbox(&mut form.box_owned, "Box owned");
    ui.checkbox(&mut form.collector, "Collector edition");

    if form_fields::pick_list_section(ui, "game_developers", "Developers", &mut form.developers, true)
    {
        request = Some(LookupForm::table(DEVELOPERS));
    }
    if form_fields::pick_list_section(ui, "game_composers", "Composers", &mut form.composers, true) {
        request = Some(LookupForm::table(COMPOSERS));
    }
    if form_fields::pick_list_section(ui, "game_publishers", "Publishers", &mut form.publishers, true)
    {
        request = Some(LookupForm::table(PUBLISHERS));
    }
    if form_fields::pick_list_section(ui, "game_producers", "Producers", &mut form.producers, true) {
        request = Some(LookupForm::table(PRODUCERS));
    }

    ui.separator();
    ui.strong("Notes");
    ui.add(
        egui::TextEdit::multiline(&mut form.notes)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    request
}

fn console_form_dialog(
    app: &mut GameShelfApp,
    ctx: &egui::Context,
    form: &mut ConsoleForm,
) -> Outcome {
    let title = if form.id == 0 {
        "Add console"
    } else {
        "Edit console"
    };
    let mut outcome = Outcome::Keep;
    let mut open = true;

    egui::Window::new(title)
        .id(egui::Id::new("console_form"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(560.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                if let Some(request) = console_form_ui(ui, form)
                    && form.new_lookup.is_none()
                {
                    form.new_lookup = Some(request);
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    match form.to_console() {
                        Ok(console) => match app.store.save_console(&console) {
                            Ok(_) => {
                                app.message = Some(Message::info(
                                    "Saved",
                                    format!("'{}' saved.", console.name),
                                ));
                                app.reload_all();
                                outcome = Outcome::Close;
                            }
                            Err(e) => {
                                app.message = Some(Message::error("Save failed", e.to_string()));
                            }
                        },
                        Err(msg) => app.message = Some(Message::error("Invalid console", msg)),
                    }
                }
                if ui.button("Cancel").clicked() {
                    outcome = Outcome::Close;
                }
            });
        });
    if !open {
        outcome = Outcome::Close;
    }

    if lookup_subdialog(app, ctx, &mut form.new_lookup)
        && let Err(e) = form.refresh_options(&app.store)
    {
        log::error!("Failed to refresh console form options: {e}");
    }
    outcome
}

fn console_form_ui(ui: &mut egui::Ui, form: &mut ConsoleForm) -> Option<LookupForm> {
    let mut request = None;

    egui::Grid::new("console_form_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            form_fields::text_row(ui, "Name *", &mut form.name);
            if form_fields::lookup_row(ui, "console_type", "Type *", &mut form.console_type, true) {
                request = Some(LookupForm::table(CONSOLE_TYPES));
            }
            if form_fields::lookup_row(
                ui,
                "console_manufacturer",
                "Manufacturer *",
                &mut form.manufacturer,
                true,
            ) {
                request = Some(LookupForm::table(MANUFACTURERS));
            }
            form_fields::hint_row(ui, "Generation", &mut form.generation, "1-9");

            form_fields::date_row(ui, "JP release", &mut form.jp_release_date);
            form_fields::date_row(ui, "US release", &mut form.us_release_date);
            form_fields::date_row(ui, "EU release", &mut form.eu_release_date);
            form_fields::date_row(ui, "Discontinued", &mut form.discontinued);

            form_fields::hint_row(ui, "Launch price (JPY)", &mut form.price_jpy, "");
            form_fields::hint_row(ui, "Launch price (USD)", &mut form.price_usd, "");
            form_fields::hint_row(ui, "Controller ports", &mut form.controllers, "");

            form_fields::text_row(ui, "CPU", &mut form.cpu);
            form_fields::text_row(ui, "GPU", &mut form.gpu);
            form_fields::text_row(ui, "Memory", &mut form.memory);
            form_fields::text_row(ui, "Audio", &mut form.audio);

            form_fields::hint_row(ui, "Units sold", &mut form.units_sold, "worldwide");
            form_fields::text_row(ui, "Best-selling game", &mut form.top_game);
            form_fields::text_row(ui, "Predecessor", &mut form.predecessor);
            form_fields::text_row(ui, "Successor", &mut form.successor);

            form_fields::condition_row(ui, "Condition", &mut form.condition);
        });

    ui.add_space(4.0);
    ui.checkbox(&mut form.owned, "Owned");

    ui.separator();
    ui.strong("Notes");
    ui.add(
        egui::TextEdit::multiline(&mut form.notes)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    request
}

fn accessory_form_dialog(
    app: &mut GameShelfApp,
    ctx: &egui::Context,
    form: &mut AccessoryForm,
) -> Outcome {
    let title = if form.id == 0 {
        "Add accessory"
    } else {
        "Edit accessory"
    };
    let mut outcome = Outcome::Keep;
    let mut open = true;

    egui::Window::new(title)
        .id(egui::Id::new("accessory_form"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(560.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                if let Some(request) = accessory_form_ui(ui, form)
                    && form.new_lookup.is_none()
                {
                    form.new_lookup = Some(request);
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    match form.to_accessory() {
                        Ok(accessory) => match app.store.save_accessory(&accessory) {
                            Ok(_) => {
                                app.message = Some(Message::info(
                                    "Saved",
                                    format!("'{}' saved.", accessory.name),
                                ));
                                app.reload_all();
                                outcome = Outcome::Close;
                            }
                            Err(e) => {
                                app.message = Some(Message::error("Save failed", e.to_string()));
                            }
                        },
                        Err(msg) => app.message = Some(Message::error("Invalid accessory", msg)),
                    }
                }
                if ui.button("Cancel").clicked() {
                    outcome = Outcome::Close;
                }
            });
        });
    if !open {
        outcome = Outcome::Close;
    }

    if lookup_subdialog(app, ctx, &mut form.new_lookup)
        && let Err(e) = form.refresh_options(&app.store)
    {
        log::error!("Failed to refresh accessory form options: {e}");
    }
    outcome
}

fn accessory_form_ui(ui: &mut egui::Ui, form: &mut AccessoryForm) -> Option<LookupForm> {
    let mut request = None;

    egui::Grid::new("accessory_form_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            form_fields::text_row(ui, "Name *", &mut form.name);
            form_fields::text_row(ui, "Color", &mut form.color);
            if form_fields::lookup_row(
                ui,
                "accessory_type",
                "Type *",
                &mut form.accessory_type,
                true,
            ) {
                request = Some(LookupForm::table(ACCESSORY_TYPES));
            }
            if form_fields::lookup_row(
                ui,
                "accessory_manufacturer",
                "Manufacturer",
                &mut form.manufacturer,
                true,
            ) {
                request = Some(LookupForm::table(MANUFACTURERS));
            }
            form_fields::hint_row(ui, "Quantity", &mut form.quantity, "1");
            form_fields::condition_row(ui, "Condition", &mut form.condition);
            form_fields::date_row(ui, "Purchase date", &mut form.purchase_date);
            form_fields::hint_row(ui, "Purchase price", &mut form.purchase_price, "0.00");
        });

    ui.add_space(4.0);
    ui.checkbox(&mut form.owned, "Owned");

    form_fields::pick_list_section(
        ui,
        "accessory_consoles",
        "Compatible consoles",
        &mut form.consoles,
        false,
    );

    ui.separator();
    ui.strong("Notes");
    ui.add(
        egui::TextEdit::multiline(&mut form.notes)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    request
}

// ── Lookup Sub-Dialog ───────────────────────────────────────────────────────

/// Render the "+ New" sub-dialog stacked on top of an entity form.
/// Returns true when an entry was inserted (the caller refreshes options).
fn lookup_subdialog(
    app: &mut GameShelfApp,
    ctx: &egui::Context,
    new_lookup: &mut Option<LookupForm>,
) -> bool {
    let Some(form) = new_lookup.as_mut() else {
        return false;
    };

    let mut inserted = false;
    let mut close = false;
    let mut open = true;

    egui::Window::new(form.title.clone())
        .id(egui::Id::new("lookup_form"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("lookup_form_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| match form.target {
                    LookupTarget::Table(_) => {
                        form_fields::text_row(ui, "Name *", &mut form.name);
                    }
                    LookupTarget::Rating => {
                        form_fields::hint_row(ui, "Region *", &mut form.region, "JP, US, EU");
                        form_fields::hint_row(ui, "Code *", &mut form.code, "e.g. CERO A");
                        form_fields::text_row(ui, "Description", &mut form.description);
                    }
                });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    match form.save(&app.store) {
                        Ok(_) => {
                            inserted = true;
                            close = true;
                        }
                        Err(msg) => app.message = Some(Message::error("Add failed", msg)),
                    }
                }
                if ui.button("Cancel").clicked() {
                    close = true;
                }
            });
        });

    if close || !open {
        *new_lookup = None;
    }
    inserted
}

// ── Detail Views ────────────────────────────────────────────────────────────

fn game_details_dialog(app: &mut GameShelfApp, ctx: &egui::Context, game: &Game) -> Outcome {
    let mut outcome = Outcome::Keep;
    let mut open = true;

    egui::Window::new("Game details")
        .id(egui::Id::new("game_details"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.heading(&game.title);
            ui.add_space(4.0);
            egui::ScrollArea::vertical().max_height(460.0).show(ui, |ui| {
                opt_detail_row(ui, "Console", game.console_name.as_deref());
                opt_detail_row(ui, "Genre", game.genre_name.as_deref());
                opt_detail_row(ui, "JP release", game.jp_release_date.as_deref());
                opt_detail_row(ui, "US release", game.us_release_date.as_deref());
                opt_detail_row(ui, "EU release", game.eu_release_date.as_deref());
                opt_detail_row(ui, "JP rating", game.jp_rating.as_deref());
                opt_detail_row(ui, "US rating", game.us_rating.as_deref());
                opt_detail_row(ui, "EU rating", game.eu_rating.as_deref());
                if let Some(units) = game.units_sold {
                    detail_row(ui, "Units sold", &units.to_string());
                }

                ui.add_space(4.0);
                detail_row(ui, "Owned", yes_no(game.owned));
                detail_row(ui, "Box owned", yes_no(game.box_owned));
                detail_row(ui, "Collector edition", yes_no(game.collector));
                if game.condition.is_some() {
                    detail_row(ui, "Condition", &condition_stars(game.condition));
                }
                opt_detail_row(ui, "Purchase date", game.purchase_date.as_deref());
                if let Some(price) = game.purchase_price {
                    detail_row(ui, "Purchase price", &format!("{price:.2}"));
                }

                if !game.developers.is_empty() {
                    detail_row(ui, "Developers", &name_list(&game.developers));
                }
                if !game.composers.is_empty() {
                    detail_row(ui, "Composers", &name_list(&game.composers));
                }
                if !game.publishers.is_empty() {
                    detail_row(ui, "Publishers", &name_list(&game.publishers));
                }
                if !game.producers.is_empty() {
                    detail_row(ui, "Producers", &name_list(&game.producers));
                }

                if let Some(notes) = &game.notes {
                    ui.add_space(4.0);
                    ui.separator();
                    ui.strong("Notes");
                    ui.label(notes);
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Edit").clicked() {
                    match GameForm::edit(&app.store, game) {
                        Ok(form) => outcome = Outcome::Replace(Dialog::GameForm(form)),
                        Err(e) => {
                            app.message = Some(Message::error("Failed to open form", e.to_string()));
                        }
                    }
                }
                if ui.button("Close").clicked() {
                    outcome = Outcome::Close;
                }
            });
        });
    if !open {
        outcome = Outcome::Close;
    }
    outcome
}

fn console_details_dialog(
    app: &mut GameShelfApp,
    ctx: &egui::Context,
    console: &Console,
) -> Outcome {
    let mut outcome = Outcome::Keep;
    let mut open = true;

    egui::Window::new("Console details")
        .id(egui::Id::new("console_details"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.heading(&console.name);
            ui.add_space(4.0);
            egui::ScrollArea::vertical().max_height(460.0).show(ui, |ui| {
                opt_detail_row(ui, "Type", console.type_name.as_deref());
                opt_detail_row(ui, "Manufacturer", console.manufacturer_name.as_deref());
                if let Some(generation) = console.generation {
                    detail_row(ui, "Generation", &generation.to_string());
                }
                opt_detail_row(ui, "JP release", console.jp_release_date.as_deref());
                opt_detail_row(ui, "US release", console.us_release_date.as_deref());
                opt_detail_row(ui, "EU release", console.eu_release_date.as_deref());
                opt_detail_row(ui, "Discontinued", console.discontinued.as_deref());
                if let Some(price) = console.price_jpy {
                    detail_row(ui, "Launch price (JPY)", &price.to_string());
                }
                if let Some(price) = console.price_usd {
                    detail_row(ui, "Launch price (USD)", &price.to_string());
                }
                if let Some(ports) = console.controllers {
                    detail_row(ui, "Controller ports", &ports.to_string());
                }
                opt_detail_row(ui, "CPU", console.cpu.as_deref());
                opt_detail_row(ui, "GPU", console.gpu.as_deref());
                opt_detail_row(ui, "Memory", console.memory.as_deref());
                opt_detail_row(ui, "Audio", console.audio.as_deref());
                if let Some(units) = console.units_sold {
                    detail_row(ui, "Units sold", &units.to_string());
                }
                opt_detail_row(ui, "Best-selling game", console.top_game.as_deref());
                opt_detail_row(ui, "Predecessor", console.predecessor.as_deref());
                opt_detail_row(ui, "Successor", console.successor.as_deref());

                ui.add_space(4.0);
                detail_row(ui, "Owned", yes_no(console.owned));
                if console.condition.is_some() {
                    detail_row(ui, "Condition", &condition_stars(console.condition));
                }

                if let Some(notes) = &console.notes {
                    ui.add_space(4.0);
                    ui.separator();
                    ui.strong("Notes");
                    ui.label(notes);
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Edit").clicked() {
                    match ConsoleForm::edit(&app.store, console) {
                        Ok(form) => outcome = Outcome::Replace(Dialog::ConsoleForm(form)),
                        Err(e) => {
                            app.message = Some(Message::error("Failed to open form", e.to_string()));
                        }
                    }
                }
                if ui.button("Close").clicked() {
                    outcome = Outcome::Close;
                }
            });
        });
    if !open {
        outcome = Outcome::Close;
    }
    outcome
}

fn accessory_details_dialog(
    app: &mut GameShelfApp,
    ctx: &egui::Context,
    accessory: &Accessory,
) -> Outcome {
    let mut outcome = Outcome::Keep;
    let mut open = true;

    egui::Window::new("Accessory details")
        .id(egui::Id::new("accessory_details"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.heading(&accessory.name);
            ui.add_space(4.0);
            egui::ScrollArea::vertical().max_height(460.0).show(ui, |ui| {
                opt_detail_row(ui, "Color", accessory.color.as_deref());
                opt_detail_row(ui, "Type", accessory.type_name.as_deref());
                opt_detail_row(ui, "Manufacturer", accessory.manufacturer_name.as_deref());
                if !accessory.consoles.is_empty() {
                    detail_row(ui, "Compatible with", &name_list(&accessory.consoles));
                }
                detail_row(ui, "Quantity", &accessory.quantity.to_string());

                ui.add_space(4.0);
                detail_row(ui, "Owned", yes_no(accessory.owned));
                if accessory.condition.is_some() {
                    detail_row(ui, "Condition", &condition_stars(accessory.condition));
                }
                opt_detail_row(ui, "Purchase date", accessory.purchase_date.as_deref());
                if let Some(price) = accessory.purchase_price {
                    detail_row(ui, "Purchase price", &format!("{price:.2}"));
                }

                if let Some(notes) = &accessory.notes {
                    ui.add_space(4.0);
                    ui.separator();
                    ui.strong("Notes");
                    ui.label(notes);
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Edit").clicked() {
                    match AccessoryForm::edit(&app.store, accessory) {
                        Ok(form) => outcome = Outcome::Replace(Dialog::AccessoryForm(form)),
                        Err(e) => {
                            app.message = Some(Message::error("Failed to open form", e.to_string()));
                        }
                    }
                }
                if ui.button("Close").clicked() {
                    outcome = Outcome::Close;
                }
            });
        });
    if !open {
        outcome = Outcome::Close;
    }
    outcome
}

// ── Delete Confirmation ─────────────────────────────────────────────────────

fn confirm_delete_dialog(
    app: &mut GameShelfApp,
    ctx: &egui::Context,
    pending: &PendingDelete,
) -> Outcome {
    let title = match pending.kind {
        EntityKind::Game => "Delete game",
        EntityKind::Console => "Delete console",
        EntityKind::Accessory => "Delete accessory",
    };
    let mut outcome = Outcome::Keep;
    let mut open = true;

    egui::Window::new(title)
        .id(egui::Id::new("confirm_delete"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!(
                "Are you sure you want to delete '{}'? This cannot be undone.",
                pending.name
            ));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    let result = match pending.kind {
                        EntityKind::Game => app.store.delete_game(pending.id),
                        EntityKind::Console => app.store.delete_console(pending.id),
                        EntityKind::Accessory => app.store.delete_accessory(pending.id),
                    };
                    match result {
                        Ok(()) => {
                            app.message = Some(Message::info(
                                "Deleted",
                                format!("'{}' deleted.", pending.name),
                            ));
                            app.reload_all();
                        }
                        Err(e) => {
                            app.message = Some(Message::error("Delete failed", e.to_string()));
                        }
                    }
                    outcome = Outcome::Close;
                }
                if ui.button("Cancel").clicked() {
                    outcome = Outcome::Close;
                }
            });
        });
    if !open {
        outcome = Outcome::Close;
    }
    outcome
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}:", label)).weak());
        ui.label(value);
    });
}

fn opt_detail_row(ui: &mut egui::Ui, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        detail_row(ui, label, value);
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

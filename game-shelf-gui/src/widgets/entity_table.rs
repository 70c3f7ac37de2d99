//! Column-descriptor-driven entity table.
//!
//! All three entity tabs render through this one widget: a fixed set of
//! column headers and widths plus a cell-text closure. Clicking a row
//! selects it (clicking again deselects); right-clicking opens the
//! Details/Edit/Delete context menu.

use egui_extras::{Column, TableBuilder};

/// Header label and initial width for one table column.
pub struct TableColumn {
    pub header: &'static str,
    pub width: f32,
}

/// What the user did to a row this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    None,
    Clicked(i64),
    Details(i64),
    Edit(i64),
    Delete(i64),
}

/// Render the table for a filtered row set. `rows` is the filtered view of
/// the tab's cached collection; `cell_text` maps (row, column index) to the
/// displayed string.
pub fn entity_table<T>(
    ui: &mut egui::Ui,
    id_salt: &str,
    columns: &[TableColumn],
    rows: &[&T],
    selected: Option<i64>,
    row_id: impl Fn(&T) -> i64,
    cell_text: impl Fn(&T, usize) -> String,
) -> RowAction {
    let mut action = RowAction::None;

    let available_height = ui.available_height();
    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    ui.push_id(id_salt, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .max_scroll_height(available_height);
        for column in columns {
            table = table.column(Column::initial(column.width).at_least(40.0));
        }

        table
            .header(20.0, |mut header| {
                for column in columns {
                    header.col(|ui| {
                        ui.strong(column.header);
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, rows.len(), |mut row| {
                    let item = rows[row.index()];
                    let id = row_id(item);
                    row.set_selected(selected == Some(id));

                    let mut clicked = false;
                    for column_index in 0..columns.len() {
                        row.col(|ui| {
                            let response = ui.add(
                                egui::Label::new(cell_text(item, column_index))
                                    .sense(egui::Sense::click()),
                            );
                            if response.clicked() {
                                clicked = true;
                            }
                            response.context_menu(|ui| {
                                if ui.button("Details").clicked() {
                                    action = RowAction::Details(id);
                                    ui.close_menu();
                                }
                                if ui.button("Edit").clicked() {
                                    action = RowAction::Edit(id);
                                    ui.close_menu();
                                }
                                if ui.button("Delete").clicked() {
                                    action = RowAction::Delete(id);
                                    ui.close_menu();
                                }
                            });
                        });
                    }
                    if clicked {
                        action = RowAction::Clicked(id);
                    }
                });
            });
    });

    action
}

use super::helpers;
use super::style;
use super::*;
use crate::egui_app::view_model;
use crate::pipeline::{DatasetSummary, PreviewRow};
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 20.0;

impl EguiApp {
    /// Rows/columns tiles, column tags and the preview table.
    pub(super) fn render_dataset_overview(&mut self, ui: &mut Ui, dataset: &DatasetSummary) {
        helpers::card(ui, "Dataset Overview", |ui| {
            ui.horizontal(|ui| {
                helpers::stat_tile(ui, "Rows", &dataset.row_count.to_string());
                helpers::stat_tile(ui, "Columns", &dataset.column_count.to_string());
            });
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for name in &dataset.column_names {
                    let tag = match dataset.dtypes.get(name) {
                        Some(dtype) => RichText::new(format!("{name} · {dtype}")),
                        None => RichText::new(name),
                    };
                    ui.label(
                        tag.background_color(style::palette().bg_tertiary)
                            .color(style::palette().accent_ice),
                    );
                }
            });
            ui.add_space(6.0);
            if dataset.preview_rows.is_empty() {
                helpers::hint(ui, "The service sent no preview rows.");
            } else {
                preview_table(ui, "dataset_preview", &dataset.column_names, &dataset.preview_rows);
            }
        });
    }
}

/// Grid of preview rows with one column per dataset column.
pub(super) fn preview_table(ui: &mut Ui, id: &str, columns: &[String], rows: &[PreviewRow]) {
    let palette = style::palette();
    let table = view_model::preview_table(columns, rows);
    ui.push_id(id, |ui| {
        egui::ScrollArea::horizontal()
            .id_salt(id)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .vscroll(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .columns(Column::auto().at_least(60.0).resizable(true), table.header.len())
                    .header(ROW_HEIGHT + 2.0, |mut header| {
                        for name in &table.header {
                            header.col(|ui| {
                                ui.label(RichText::new(name).strong().color(palette.text_primary));
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(ROW_HEIGHT, table.rows.len(), |mut row| {
                            let cells = &table.rows[row.index()];
                            for cell in cells {
                                row.col(|ui| {
                                    ui.label(cell.as_str());
                                });
                            }
                        });
                    });
            });
    });
}

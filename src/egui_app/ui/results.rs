use super::helpers;
use super::style;
use super::*;
use crate::egui_app::state::StepForm;
use crate::egui_app::view_model;
use crate::pipeline::{ConfusionMatrix, TrainingResult};
use eframe::egui::{Align2, FontId, Sense};
use egui_extras::{Column, TableBuilder};

const BAR_HEIGHT: f32 = 18.0;
const LABEL_WIDTH: f32 = 140.0;

impl EguiApp {
    pub(super) fn render_results(&mut self, ui: &mut Ui, result: &TrainingResult) {
        let palette = style::palette();
        helpers::hint(ui, "Your model has been trained and evaluated successfully!");
        ui.add_space(8.0);

        helpers::card(ui, "Model Performance", |ui| {
            ui.horizontal(|ui| {
                ui.label("Accuracy:");
                ui.label(
                    RichText::new(view_model::format_percent(result.accuracy))
                        .heading()
                        .color(style::accuracy_color(result.accuracy)),
                );
            });
            ui.label(format!("Trained on {}", result.model_name.display_name()));
            ui.add_space(6.0);
            bar_row(
                ui,
                "Accuracy",
                result.accuracy.clamp(0.0, 1.0) as f32,
                &view_model::format_percent(result.accuracy),
                style::accuracy_color(result.accuracy),
            );
        });
        ui.add_space(8.0);

        let bars = view_model::feature_bars(&result.feature_importance);
        if !bars.is_empty() {
            helpers::card(ui, "Feature Importance", |ui| {
                for bar in &bars {
                    bar_row(
                        ui,
                        &bar.name,
                        bar.scale,
                        &format!("{:.3}", bar.importance),
                        palette.accent_ice,
                    );
                }
            });
            ui.add_space(8.0);
        }

        helpers::card(ui, "Classification Report", |ui| {
            let rows = view_model::class_rows(&result.classification_report);
            if rows.is_empty() {
                helpers::hint(ui, "No per-class metrics were reported.");
                return;
            }
            metrics_table(ui, "classification_report", "Class", &rows);
            let averages = view_model::average_rows(&result.classification_report);
            if !averages.is_empty() {
                ui.add_space(6.0);
                metrics_table(ui, "classification_averages", "Average", &averages);
            }
        });
        ui.add_space(8.0);

        if let Some(matrix) = view_model::confusion_matrix(result) {
            helpers::card(ui, "Confusion Matrix", |ui| confusion_grid(ui, matrix));
            ui.add_space(8.0);
        }

        helpers::card(ui, "Sample Predictions", |ui| {
            let lines = view_model::prediction_lines(&result.predictions_sample);
            if lines.is_empty() {
                helpers::hint(ui, "No predictions were returned.");
            }
            ui.horizontal_wrapped(|ui| {
                for line in lines {
                    ui.label(RichText::new(line).monospace());
                    ui.add_space(12.0);
                }
            });
        });
        ui.add_space(8.0);

        helpers::card(ui, "Conclusion", |ui| {
            ui.label(view_model::conclusion(result.accuracy));
            ui.label(
                "Next steps: You can try different preprocessing techniques, adjust the \
                 train-test split ratio, or experiment with different models to improve performance.",
            );
        });
        ui.add_space(8.0);

        if ui.button("Export Results").clicked() {
            self.controller.export_results();
        }
        if let StepForm::Results(form) = &self.controller.ui.form
            && let Some(notice) = &form.notice
        {
            ui.colored_label(palette.accent_ice, notice);
        }
    }
}

/// Precision/recall/F1/support table, one row per entry.
fn metrics_table(ui: &mut Ui, id: &str, first_title: &str, rows: &[view_model::ClassRow]) {
    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .columns(Column::auto().at_least(80.0), 5)
            .header(22.0, |mut header| {
                for title in [first_title, "Precision", "Recall", "F1-Score", "Support"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, rows.len(), |mut row| {
                    let values = &rows[row.index()];
                    for cell in [
                        &values.label,
                        &values.precision,
                        &values.recall,
                        &values.f1_score,
                        &values.support,
                    ] {
                        row.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            });
    });
}

/// Label, proportional bar and value on one line.
fn bar_row(ui: &mut Ui, label: &str, scale: f32, value: &str, color: egui::Color32) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        let (label_rect, _) =
            ui.allocate_exact_size(egui::vec2(LABEL_WIDTH, BAR_HEIGHT), Sense::hover());
        ui.painter().text(
            label_rect.left_center(),
            Align2::LEFT_CENTER,
            label,
            FontId::proportional(12.0),
            palette.text_primary,
        );
        let track_width = (ui.available_width() - 80.0).max(40.0);
        let (track, _) = ui.allocate_exact_size(egui::vec2(track_width, BAR_HEIGHT), Sense::hover());
        let painter = ui.painter_at(track);
        painter.rect_filled(track, 0.0, palette.bg_tertiary);
        let filled = egui::Rect::from_min_size(
            track.min,
            egui::vec2(track.width() * scale.clamp(0.0, 1.0), track.height()),
        );
        painter.rect_filled(filled, 0.0, color);
        ui.label(RichText::new(value).monospace());
    });
}

fn confusion_grid(ui: &mut Ui, matrix: &ConfusionMatrix) {
    let palette = style::palette();
    let max = matrix
        .matrix
        .iter()
        .flatten()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    egui::Grid::new("confusion_matrix")
        .spacing(egui::vec2(4.0, 4.0))
        .show(ui, |ui| {
            ui.label("");
            for label in &matrix.labels {
                ui.label(RichText::new(format!("Predicted {label}")).color(palette.text_muted));
            }
            ui.end_row();
            for (label, counts) in matrix.labels.iter().zip(&matrix.matrix) {
                ui.label(RichText::new(format!("Actual {label}")).color(palette.text_muted));
                for &count in counts {
                    let strength = count as f32 / max as f32;
                    let fill = palette.bg_tertiary.lerp_to_gamma(palette.accent_mint, strength);
                    let text = if strength > 0.5 {
                        palette.bg_primary
                    } else {
                        palette.text_primary
                    };
                    egui::Frame::new()
                        .fill(fill)
                        .inner_margin(egui::Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.label(RichText::new(count.to_string()).strong().color(text));
                        });
                }
                ui.end_row();
            }
        });
}

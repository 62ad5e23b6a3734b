use super::data_preview;
use super::helpers;
use super::style;
use super::*;
use crate::egui_app::state::StepForm;
use crate::egui_app::view_model;
use crate::pipeline::{PreprocessOutcome, TestFraction};
use eframe::egui::Sense;

const SPLIT_BAR_HEIGHT: f32 = 28.0;

impl EguiApp {
    pub(super) fn render_split(&mut self, ui: &mut Ui) {
        let StepForm::Split(form) = self.controller.ui.form.clone() else {
            return;
        };
        let Some(dataset) = self.controller.wizard().dataset().cloned() else {
            return;
        };
        let palette = style::palette();
        let busy = self.controller.is_busy();
        helpers::hint(ui, "Split your data into training and testing sets");
        ui.add_space(8.0);

        let mut percent = form.test_fraction.test_percent();
        let mut target = form.target_column.clone();
        helpers::card(ui, "Split Options", |ui| {
            ui.label(format!("Test Set Size: {percent}%"));
            ui.add_enabled(
                !busy,
                egui::Slider::new(
                    &mut percent,
                    TestFraction::MIN_PERCENT..=TestFraction::MAX_PERCENT,
                )
                .step_by(f64::from(TestFraction::STEP_PERCENT))
                .suffix("%"),
            );
            let labels = view_model::split_labels(form.test_fraction);
            helpers::hint(ui, labels.training);
            ui.add_space(8.0);

            ui.label("Select Target Column:");
            ui.add_enabled_ui(!busy, |ui| {
                egui::ComboBox::from_id_salt("target_column")
                    .selected_text(target.as_deref().unwrap_or("-- Select a column --"))
                    .show_ui(ui, |ui| {
                        for column in &dataset.column_names {
                            ui.selectable_value(&mut target, Some(column.clone()), column.as_str());
                        }
                    });
            });
            helpers::hint(ui, "The target column is what you want to predict");
        });
        if percent != form.test_fraction.test_percent() {
            self.controller
                .set_test_fraction(TestFraction::from_percent(percent));
        }
        if target != form.target_column {
            self.controller.select_target_column(target);
        }
        ui.add_space(8.0);

        let labels = view_model::split_labels(form.test_fraction);
        helpers::card(ui, "Split Visualization", |ui| {
            let (train_color, test_color) = style::split_colors();
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), SPLIT_BAR_HEIGHT),
                Sense::hover(),
            );
            let split_x = rect.left() + rect.width() * form.test_fraction.train_fraction() as f32;
            let train_rect = egui::Rect::from_min_max(rect.min, egui::pos2(split_x, rect.bottom()));
            let test_rect = egui::Rect::from_min_max(egui::pos2(split_x, rect.top()), rect.max);
            let painter = ui.painter_at(rect);
            painter.rect_filled(train_rect, 0.0, train_color);
            painter.rect_filled(test_rect, 0.0, test_color);
            for (area, text) in [(train_rect, &labels.training), (test_rect, &labels.test)] {
                painter.text(
                    area.center(),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(12.0),
                    palette.bg_primary,
                );
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                helpers::stat_tile(
                    ui,
                    "Training Set",
                    &format!("{}%", form.test_fraction.train_percent()),
                );
                helpers::stat_tile(
                    ui,
                    "Test Set",
                    &format!("{}%", form.test_fraction.test_percent()),
                );
            });
        });
        ui.add_space(8.0);

        if let Some(PreprocessOutcome::Applied(result)) = self.controller.wizard().preprocess()
            && !result.preview_rows.is_empty()
        {
            let rows = result.preview_rows.clone();
            egui::CollapsingHeader::new("Processed data preview")
                .id_salt("processed_preview")
                .show(ui, |ui| {
                    data_preview::preview_table(
                        ui,
                        "processed_preview_table",
                        &dataset.column_names,
                        &rows,
                    );
                });
            ui.add_space(8.0);
        }

        let label = if busy { "Splitting..." } else { "Split Data" };
        let ready = !busy && form.target_column.is_some();
        if helpers::action_button(ui, ready, label).clicked() {
            self.controller.split_dataset();
        }
    }
}

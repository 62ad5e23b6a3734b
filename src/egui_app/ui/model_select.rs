use super::helpers;
use super::style;
use super::*;
use crate::egui_app::state::StepForm;
use crate::pipeline::MODEL_CATALOG;

impl EguiApp {
    pub(super) fn render_model_select(&mut self, ui: &mut Ui) {
        let StepForm::ModelSelect(form) = self.controller.ui.form.clone() else {
            return;
        };
        let Some(split) = self.controller.wizard().split().cloned() else {
            return;
        };
        let palette = style::palette();
        let busy = self.controller.is_busy();
        helpers::hint(ui, "Choose a machine learning model to train on your data");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            helpers::stat_tile(ui, "Training Samples", &split.summary.train_size.to_string());
            helpers::stat_tile(ui, "Testing Samples", &split.summary.test_size.to_string());
            helpers::stat_tile(ui, "Target Column", &split.target_column);
        });
        ui.add_space(8.0);

        let mut chosen = None;
        ui.columns(MODEL_CATALOG.len(), |columns| {
            for (ui, info) in columns.iter_mut().zip(MODEL_CATALOG.iter()) {
                let selected = form.model == Some(info.kind);
                helpers::card(ui, info.name, |ui| {
                    let radio = ui.add_enabled(
                        !busy,
                        egui::RadioButton::new(selected, RichText::new(info.family).italics()),
                    );
                    if radio.clicked() {
                        chosen = Some(info.kind);
                    }
                    ui.label(info.description);
                    ui.add_space(4.0);
                    ui.label(RichText::new("Pros").color(palette.success).strong());
                    for pro in info.pros {
                        ui.label(format!("✓ {pro}"));
                    }
                    ui.label(RichText::new("Cons").color(palette.warning).strong());
                    for con in info.cons {
                        ui.label(format!("✗ {con}"));
                    }
                });
            }
        });
        if let Some(kind) = chosen {
            self.controller.select_model(kind);
        }
        ui.add_space(8.0);

        if let Some(kind) = form.model {
            helpers::card(ui, &format!("Selected Model: {}", kind.display_name()), |ui| {
                ui.label(format!(
                    "This model will be trained on {} samples and evaluated on {} samples.",
                    split.summary.train_size, split.summary.test_size
                ));
            });
            ui.add_space(8.0);
        }

        let label = if busy { "Training..." } else { "Train Model" };
        if helpers::action_button(ui, !busy && form.model.is_some(), label).clicked() {
            self.controller.train_model();
        }
    }
}

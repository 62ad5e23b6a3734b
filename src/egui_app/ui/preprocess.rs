use super::helpers;
use super::style;
use super::*;
use crate::egui_app::state::StepForm;
use crate::egui_app::view_model;
use crate::pipeline::PreprocessMethod;

impl EguiApp {
    pub(super) fn render_preprocess(&mut self, ui: &mut Ui) {
        let StepForm::Preprocess(form) = self.controller.ui.form.clone() else {
            return;
        };
        let Some(dataset) = self.controller.wizard().dataset().cloned() else {
            return;
        };
        let palette = style::palette();
        let busy = self.controller.is_busy();
        helpers::hint(ui, "Apply preprocessing techniques to your data (Optional)");
        ui.add_space(8.0);

        self.render_dataset_overview(ui, &dataset);
        ui.add_space(8.0);

        let mut chosen_method = None;
        helpers::card(ui, "Select Preprocessing Method", |ui| {
            for method in PreprocessMethod::ALL {
                let selected = form.method == Some(method);
                let response = ui.add_enabled(
                    !busy,
                    egui::RadioButton::new(selected, RichText::new(method.label()).strong()),
                );
                if response.clicked() {
                    chosen_method = Some(method);
                }
                ui.indent(method.as_str(), |ui| {
                    ui.label(RichText::new(method.description()).color(palette.text_muted));
                });
            }
        });
        if let Some(method) = chosen_method {
            self.controller.select_preprocess_method(method);
        }
        ui.add_space(8.0);

        let mut toggled = None;
        helpers::card(ui, "Select Columns to Process", |ui| {
            ui.horizontal_wrapped(|ui| {
                for column in &dataset.column_names {
                    let mut checked = form.columns.contains(column);
                    let response =
                        ui.add_enabled(!busy, egui::Checkbox::new(&mut checked, column.as_str()));
                    if response.changed() {
                        toggled = Some(column.clone());
                    }
                }
            });
            helpers::hint(
                ui,
                format!(
                    "Only select numerical columns. Selected: {} column(s)",
                    form.columns.len()
                ),
            );
        });
        if let Some(column) = toggled {
            self.controller.toggle_preprocess_column(&column);
        }
        ui.add_space(8.0);

        if let Some(summary) = view_model::preprocess_summary(&form, &dataset.column_names) {
            helpers::card(ui, "Preprocessing Summary", |ui| {
                for line in summary {
                    ui.label(line);
                }
            });
            ui.add_space(8.0);
        }

        ui.horizontal(|ui| {
            if helpers::action_button(ui, !busy, "Skip Preprocessing").clicked() {
                self.controller.skip_preprocessing();
            }
            let label = if busy {
                "Processing..."
            } else {
                "Apply Preprocessing"
            };
            if helpers::action_button(ui, self.controller.can_apply_preprocessing(), label).clicked()
            {
                self.controller.apply_preprocessing();
            }
        });
    }
}

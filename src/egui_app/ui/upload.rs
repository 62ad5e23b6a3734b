use super::helpers;
use super::style;
use super::*;
use crate::pipeline::UploadFormat;
use eframe::egui::{Sense, StrokeKind};

const DROP_ZONE_HEIGHT: f32 = 140.0;

impl EguiApp {
    pub(super) fn render_upload(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let enabled = self.controller.can_upload();
        let hovering = self.controller.ui.drop_hover;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT),
            if enabled { Sense::click() } else { Sense::hover() },
        );
        let (fill, outline) = if hovering {
            (palette.bg_tertiary, palette.accent_mint)
        } else if response.hovered() && enabled {
            (palette.bg_tertiary, palette.accent_ice)
        } else {
            (palette.bg_primary, palette.grid_strong)
        };
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, fill);
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.5, outline), StrokeKind::Inside);
        let headline = if hovering {
            "Drop the file here..."
        } else {
            "Drag & drop a CSV or Excel file here, or click to select"
        };
        painter.text(
            rect.center() - egui::vec2(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            headline,
            egui::FontId::proportional(16.0),
            palette.text_primary,
        );
        let extensions = UploadFormat::dialog_extensions()
            .map(|extension| format!(".{extension}"))
            .join(", ");
        painter.text(
            rect.center() + egui::vec2(0.0, 14.0),
            egui::Align2::CENTER_CENTER,
            format!("Supports {extensions}"),
            egui::FontId::proportional(12.0),
            palette.text_muted,
        );
        if response.clicked() {
            self.controller.upload_via_dialog();
        }

        if let crate::egui_app::state::StepForm::Upload(form) = &self.controller.ui.form
            && let Some(current) = &form.current_file
        {
            ui.add_space(8.0);
            helpers::hint(
                ui,
                format!("Current dataset: {current}. Upload again to replace it."),
            );
        }
        if let Some(dataset) = self.controller.wizard().dataset() {
            ui.add_space(8.0);
            let dataset = dataset.clone();
            self.render_dataset_overview(ui, &dataset);
        }
    }
}

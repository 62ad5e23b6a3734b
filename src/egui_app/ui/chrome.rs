use super::style;
use super::*;
use crate::egui_app::view_model::{self, MarkerState};
use eframe::egui::{Align, Align2, FontId, Layout, Sense, Stroke};

const MARKER_RADIUS: f32 = 13.0;
const MARKER_SPACING: f32 = 120.0;

impl EguiApp {
    pub(super) fn render_stepper(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("pipeline_flow")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.label(RichText::new("ML Pipeline Flow").strong());
                ui.add_space(4.0);
                let markers = view_model::step_markers(self.controller.current_step());
                let width = MARKER_SPACING * markers.len() as f32;
                let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 48.0), Sense::hover());
                let painter = ui.painter_at(rect);
                let center_y = rect.top() + MARKER_RADIUS + 2.0;
                for (index, marker) in markers.iter().enumerate() {
                    let center = egui::pos2(
                        rect.left() + MARKER_SPACING * (index as f32 + 0.5),
                        center_y,
                    );
                    if index + 1 < markers.len() {
                        let next = center.x + MARKER_SPACING;
                        let color = if marker.state == MarkerState::Completed {
                            palette.accent_mint
                        } else {
                            palette.grid_strong
                        };
                        painter.line_segment(
                            [
                                egui::pos2(center.x + MARKER_RADIUS, center_y),
                                egui::pos2(next - MARKER_RADIUS, center_y),
                            ],
                            Stroke::new(2.0, color),
                        );
                    }
                    let (fill, text) = match marker.state {
                        MarkerState::Completed => (palette.accent_mint, palette.bg_primary),
                        MarkerState::Active => (palette.accent_ice, palette.bg_primary),
                        MarkerState::Pending => (palette.bg_tertiary, palette.text_muted),
                    };
                    painter.circle_filled(center, MARKER_RADIUS, fill);
                    painter.text(
                        center,
                        Align2::CENTER_CENTER,
                        marker.number.to_string(),
                        FontId::proportional(13.0),
                        text,
                    );
                    let label_color = if marker.state == MarkerState::Pending {
                        palette.text_muted
                    } else {
                        palette.text_primary
                    };
                    painter.text(
                        egui::pos2(center.x, center_y + MARKER_RADIUS + 10.0),
                        Align2::CENTER_CENTER,
                        marker.label,
                        FontId::proportional(12.0),
                        label_color,
                    );
                }
            });
    }

    pub(super) fn render_navigation(&mut self, ctx: &egui::Context) {
        let step = self.controller.current_step();
        let can_resume = self.controller.can_resume();
        if !step.can_go_back() && step != WizardStep::Results && !can_resume {
            return;
        }
        let palette = style::palette();
        egui::TopBottomPanel::bottom("wizard_navigation")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(16, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if step.can_go_back() {
                        let back = ui.add_enabled(
                            self.controller.can_go_back(),
                            egui::Button::new("← Previous"),
                        );
                        if back.clicked() {
                            self.controller.go_back();
                        }
                    }
                    if can_resume {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui
                                .button("Continue with previous result →")
                                .on_hover_text("Reuse what this step produced last time")
                                .clicked()
                            {
                                self.controller.resume_previous();
                            }
                        });
                    }
                    if step == WizardStep::Results {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let reset = ui.add_enabled(
                                !self.controller.is_busy(),
                                egui::Button::new("Start New Pipeline"),
                            );
                            if reset.clicked() {
                                self.controller.start_new_pipeline();
                            }
                        });
                    }
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                let health = self.controller.ui.health.clone();
                ui.horizontal(|ui| {
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(16.0, 16.0), Sense::hover());
                    ui.painter()
                        .circle_filled(badge_rect.center(), 7.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    let text = ui.label(&status.text);
                    if !status.log.is_empty() {
                        text.on_hover_text(status.log_text());
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Open logs").clicked() {
                            self.controller.open_logs_folder();
                        }
                        ui.separator();
                        let color = match health {
                            ServiceHealthState::Online(_) => palette.success,
                            ServiceHealthState::Unreachable(_) => palette.warning,
                            ServiceHealthState::Unknown | ServiceHealthState::Checking => {
                                palette.text_muted
                            }
                        };
                        let label = ui.add(
                            egui::Label::new(RichText::new(health.label()).color(color))
                                .sense(Sense::click()),
                        );
                        let label = match health.detail() {
                            Some(detail) => label.on_hover_text(detail),
                            None => label,
                        };
                        if label.clicked() {
                            self.controller.check_service_health();
                        }
                    });
                });
            });
    }
}

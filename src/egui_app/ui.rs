//! egui renderer for the wizard.

mod chrome;
mod data_preview;
mod helpers;
mod model_select;
mod preprocess;
mod results;
mod split;
pub mod style;
mod upload;

use std::path::PathBuf;
use std::time::Duration;

use crate::egui_app::controller::EguiController;
use crate::egui_app::state::ServiceHealthState;
use crate::egui_app::ui::style::StatusTone;
use crate::pipeline::{WizardStage, WizardStep};
use crate::settings;
use eframe::egui::{self, Frame, Margin, RichText, Ui};

/// Minimum window size that keeps every step readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(820.0, 560.0);
/// Repaint cadence while a request is in flight so results show up promptly.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading persisted settings.
    ///
    /// Unreadable settings fall back to defaults with a warning in the status bar.
    pub fn new() -> Result<Self, String> {
        if let Err(err) = settings::ensure_config_file() {
            tracing::warn!("Could not write default settings: {err}");
        }
        let (loaded, warning) = match settings::load_or_default() {
            Ok(loaded) => (loaded, None),
            Err(err) => {
                tracing::warn!("Using default settings: {err}");
                (
                    settings::AppSettings::default(),
                    Some(format!("Using default settings: {err}")),
                )
            }
        };
        let mut controller = EguiController::with_http_service(loaded)
            .map_err(|err| format!("Failed to configure service: {err}"))?;
        if let Some(warning) = warning {
            controller.set_status(warning, StatusTone::Warning);
        }
        controller.start();
        Ok(Self::with_controller(controller))
    }

    /// Wrap an already-configured controller.
    pub fn with_controller(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            let dropped: Vec<PathBuf> = i
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect();
            (!i.raw.hovered_files.is_empty(), dropped)
        });
        self.controller.ui.drop_hover = hovering && self.controller.can_upload();
        if !dropped.is_empty() {
            self.controller.upload_dropped_files(dropped);
        }
    }

    fn render_step(&mut self, ui: &mut Ui) {
        let step = self.controller.current_step();
        ui.heading(RichText::new(step.title()).color(style::palette().text_primary));
        ui.add_space(4.0);
        if let Some(busy) = self.controller.ui.busy.clone() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(busy).color(style::palette().accent_ice));
            });
            ui.add_space(4.0);
        }
        if let Some(error) = self.controller.ui.form.error() {
            ui.colored_label(style::palette().warning, error);
            ui.add_space(4.0);
        }
        match step {
            WizardStep::Upload => self.render_upload(ui),
            WizardStep::Preprocess => self.render_preprocess(ui),
            WizardStep::Split => self.render_split(ui),
            WizardStep::ModelSelect => self.render_model_select(ui),
            WizardStep::Results => {
                if let WizardStage::Results { training, .. } = self.controller.wizard().stage() {
                    let training = training.clone();
                    self.render_results(ui, &training);
                }
            }
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick();
        self.handle_file_drops(ctx);
        self.render_stepper(ctx);
        self.render_status(ctx);
        self.render_navigation(ctx);
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("step_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.render_step(ui));
            });
        if self.controller.is_busy() || self.controller.ui.health == ServiceHealthState::Checking {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}

use super::style;
use eframe::egui::{self, Frame, Margin, RichText, Ui};

/// Outlined section with a small heading.
pub(super) fn card<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    Frame::new()
        .fill(style::card_fill())
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().color(style::palette().text_primary));
            ui.add_space(6.0);
            add_contents(ui)
        })
        .inner
}

/// Label/value pair laid out as a compact stat tile.
pub(super) fn stat_tile(ui: &mut Ui, label: &str, value: &str) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_tertiary)
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(label).small().color(palette.text_muted));
                ui.label(RichText::new(value).heading().color(palette.accent_mint));
            });
        });
}

/// Primary action button, disabled when `enabled` is false.
pub(super) fn action_button(ui: &mut Ui, enabled: bool, text: &str) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(text).strong()).min_size(egui::vec2(140.0, 28.0)),
    )
}

/// Muted one-line hint.
pub(super) fn hint(ui: &mut Ui, text: impl Into<String>) {
    ui.label(
        RichText::new(text.into())
            .small()
            .color(style::palette().text_muted),
    );
}

//! egui front end: controller, UI state, view helpers and renderer.

/// Bridges the wizard and the pipeline service to the UI.
pub mod controller;
/// UI-facing state mutated by the controller and read by the renderer.
pub mod state;
/// eframe application and step views.
pub mod ui;
/// Pure formatting helpers turning domain data into display values.
pub mod view_model;

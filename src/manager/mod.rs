//! GUI module - egui-based settings panel

mod app;
pub mod components;
pub mod state;

pub use app::run_gui;

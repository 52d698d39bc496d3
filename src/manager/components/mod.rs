//! One panel section per settings group, plus the toast overlay.
//!
//! Section `ui` functions return `true` when their save button was clicked.

pub mod appearance_settings;
pub mod channel_settings;
pub mod header;
pub mod reaction_settings;
pub mod ticket_settings;
pub mod toast;

use eframe::egui;

use crate::constants::gui::*;
use crate::manager::state::RequestStatus;
use crate::settings::SettingsGroup;

/// Titled group box spanning the available width
pub(crate) fn section(ui: &mut egui::Ui, group: SettingsGroup, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(group.label()).strong());
        ui.add_space(ITEM_SPACING);
        add_contents(ui);
    });
    ui.add_space(SECTION_SPACING);
}

/// Save button with the group's request status next to it
pub(crate) fn save_row(ui: &mut egui::Ui, status: RequestStatus) -> bool {
    let mut clicked = false;

    ui.add_space(ITEM_SPACING);
    ui.horizontal(|ui| {
        // Disabled while this group's request is in flight
        clicked = ui
            .add_enabled(!status.is_pending(), egui::Button::new("💾 Save"))
            .clicked();

        if status.is_pending() {
            ui.spinner();
        }
        if let Some(color) = status.color() {
            ui.colored_label(color, status.label());
        }
    });

    clicked
}

/// Labelled single-line text field
pub(crate) fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str, width: f32) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(width),
            )
            .changed();
    });
    changed
}

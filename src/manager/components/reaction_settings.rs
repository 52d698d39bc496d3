use eframe::egui;

use super::{save_row, section, text_row};
use crate::constants::gui::*;
use crate::manager::state::RequestStatus;
use crate::settings::SettingsGroup;
use crate::settings::forms::{ReactionsForm, parse_emoji_list};

pub fn ui(ui: &mut egui::Ui, form: &mut ReactionsForm, status: RequestStatus) -> bool {
    let mut save = false;

    section(ui, SettingsGroup::Reactions, |ui| {
        ui.checkbox(&mut form.auto_react, "React to new poems automatically");

        ui.add_enabled_ui(form.auto_react, |ui| {
            text_row(
                ui,
                "Emojis:",
                &mut form.emojis,
                "❤️, 🔥",
                WIDE_FIELD_WIDTH,
            );

            let emojis = parse_emoji_list(&form.emojis);
            let preview = if emojis.is_empty() {
                "no reactions".to_string()
            } else {
                emojis.join(" ")
            };
            ui.label(
                egui::RichText::new(format!("Comma-separated. Will react with: {preview}"))
                    .small()
                    .weak(),
            );
        });

        save = save_row(ui, status);
    });

    save
}

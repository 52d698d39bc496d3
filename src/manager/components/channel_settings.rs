use eframe::egui;

use super::{save_row, section, text_row};
use crate::constants::gui::*;
use crate::manager::state::RequestStatus;
use crate::settings::SettingsGroup;
use crate::settings::forms::PoemChannelForm;

pub fn ui(ui: &mut egui::Ui, form: &mut PoemChannelForm, status: RequestStatus) -> bool {
    let mut save = false;

    section(ui, SettingsGroup::PoemChannel, |ui| {
        text_row(
            ui,
            "Channel ID:",
            &mut form.channel_id,
            "e.g. 1460760802138128567",
            ID_FIELD_WIDTH,
        );
        ui.label(
            egui::RichText::new("Channel the bot posts poems to (Developer Mode → Copy Channel ID)")
                .small()
                .weak(),
        );

        save = save_row(ui, status);
    });

    save
}

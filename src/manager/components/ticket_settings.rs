use eframe::egui;

use super::{save_row, section, text_row};
use crate::constants::gui::*;
use crate::manager::state::RequestStatus;
use crate::settings::SettingsGroup;
use crate::settings::forms::TicketForm;

pub fn ui(ui: &mut egui::Ui, form: &mut TicketForm, status: RequestStatus) -> bool {
    let mut save = false;

    section(ui, SettingsGroup::Ticket, |ui| {
        text_row(ui, "Category ID:", &mut form.category_id, "optional", ID_FIELD_WIDTH);
        text_row(ui, "Log channel ID:", &mut form.log_channel_id, "optional", ID_FIELD_WIDTH);
        text_row(ui, "Admin role ID:", &mut form.admin_role_id, "optional", ID_FIELD_WIDTH);
        ui.label(
            egui::RichText::new("Leave a field empty to clear it")
                .small()
                .weak(),
        );

        save = save_row(ui, status);
    });

    save
}

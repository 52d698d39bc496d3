use eframe::egui;

use crate::constants::gui::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    Reload,
}

pub fn render(ui: &mut egui::Ui, base_url: &str, loading: bool) -> HeaderAction {
    let mut action = HeaderAction::None;

    ui.add_space(ITEM_SPACING);
    ui.horizontal(|ui| {
        ui.heading("Bot Settings");
        ui.separator();
        ui.label(egui::RichText::new(format!("Backend: {base_url}")).weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!loading, egui::Button::new("⟳ Reload"))
                .on_hover_text("Fetch the current settings from the backend")
                .clicked()
            {
                action = HeaderAction::Reload;
            }
            if loading {
                ui.spinner();
            }
        });
    });
    ui.add_space(ITEM_SPACING);

    action
}

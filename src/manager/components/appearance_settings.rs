//! Embed color and image sections

use eframe::egui;

use super::{save_row, section, text_row};
use crate::common::color::{CanonicalColor, hex_from_rgb};
use crate::constants::gui::*;
use crate::manager::state::RequestStatus;
use crate::settings::SettingsGroup;
use crate::settings::forms::{ColorForm, ImageForm};

pub fn color_ui(ui: &mut egui::Ui, form: &mut ColorForm, status: RequestStatus) -> bool {
    let mut save = false;

    section(ui, SettingsGroup::Color, |ui| {
        ui.horizontal(|ui| {
            ui.label("Color:");
            let text_edit = egui::TextEdit::singleline(&mut form.text)
                .hint_text("#9B59B6")
                .desired_width(COLOR_FIELD_WIDTH);
            if ui.add(text_edit).changed() {
                form.on_text_input();
            }

            // Picker reflects the normalized text; picking writes back verbatim
            let mut rgb = form.picker().rgb_or_default();
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                form.on_picker_input(hex_from_rgb(rgb));
            }

            swatch(ui, form.picker());
            ui.label(egui::RichText::new(form.picker().as_str()).monospace().weak());
        });
        ui.label(
            egui::RichText::new("Accepts #RRGGBB, 0xRRGGBB or RRGGBB")
                .small()
                .weak(),
        );

        save = save_row(ui, status);
    });

    save
}

pub fn image_ui(ui: &mut egui::Ui, form: &mut ImageForm, status: RequestStatus) -> bool {
    let mut save = false;

    section(ui, SettingsGroup::Image, |ui| {
        ui.checkbox(&mut form.show_image, "Show image in poem embeds");

        ui.add_enabled_ui(form.show_image, |ui| {
            text_row(
                ui,
                "Image URL:",
                &mut form.image_url,
                "https://…",
                WIDE_FIELD_WIDTH,
            );
        });

        save = save_row(ui, status);
    });

    save
}

/// Preview swatch for the canonical color
fn swatch(ui: &mut egui::Ui, color: &CanonicalColor) {
    let [r, g, b] = color.rgb_or_default();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_rgb(r, g, b));
}

use eframe::egui;

use crate::constants::gui::*;
use crate::notify::{NoticeKind, ToastSlot};

/// Draw the visible toast, if any, in the bottom-right corner. Clicking it dismisses it.
pub fn render(ctx: &egui::Context, slot: &mut ToastSlot) {
    let Some(toast) = slot.current() else {
        return;
    };
    let token = toast.token;

    let fill = match toast.notice.kind {
        NoticeKind::Success => TOAST_SUCCESS_FILL,
        NoticeKind::Error => TOAST_ERROR_FILL,
    };

    let response = egui::Area::new(egui::Id::new("toast"))
        .anchor(
            egui::Align2::RIGHT_BOTTOM,
            egui::vec2(-TOAST_MARGIN, -TOAST_MARGIN),
        )
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(toast.notice.kind.icon())
                            .color(egui::Color32::WHITE)
                            .strong(),
                    );
                    ui.label(egui::RichText::new(&toast.notice.message).color(egui::Color32::WHITE));
                });
            })
            .response
        })
        .inner;

    if response.interact(egui::Sense::click()).clicked() {
        slot.dismiss(token);
    }
}

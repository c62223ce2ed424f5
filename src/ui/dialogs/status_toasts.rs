//! Delete/download response toast, bottom center.

use eframe::egui;

use crate::toast::{Toast, ToastKind};
use crate::ui::theme::ChatTheme;

/// Render the current toast, if any.
pub fn render_status_toast(ctx: &egui::Context, toast: Option<&Toast>, theme: &ChatTheme) {
    let Some(toast) = toast else {
        return;
    };

    let (icon, icon_color) = match toast.kind {
        ToastKind::Success => ("✔", theme.success),
        ToastKind::Error => ("✖", theme.error),
    };

    egui::Area::new(egui::Id::new("delete_response_toast"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -16.0])
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.toast_bg)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(16, 8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(icon).color(icon_color).strong());
                        ui.label(egui::RichText::new(&toast.text).color(egui::Color32::WHITE));
                    });
                });
        });
}

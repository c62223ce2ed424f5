//! Delete confirmation dialog.

use eframe::egui;

use super::ChatAction;
use crate::ui::theme::ChatTheme;

pub const DELETE_TITLE: &str = "Delete Message";
pub const DELETE_PROMPT: &str =
    "Are you sure you want to delete this message? This action cannot be undone.";

/// Render the confirmation while a delete is pending.
///
/// Returns `ConfirmDelete` or `CancelDelete` once the user decides. Escape
/// and the window close button both cancel.
pub fn render_delete_confirm(ctx: &egui::Context, theme: &ChatTheme) -> Option<ChatAction> {
    let mut action: Option<ChatAction> = None;
    let mut still_open = true;

    dim_background(ctx, "delete_confirm_backdrop", egui::Color32::from_black_alpha(128));

    egui::Window::new(DELETE_TITLE)
        .open(&mut still_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.label(DELETE_PROMPT);
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let delete = egui::Button::new(
                    egui::RichText::new("Delete").color(egui::Color32::WHITE),
                )
                .fill(theme.danger);
                if ui.add(delete).clicked() {
                    action = Some(ChatAction::ConfirmDelete);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(ChatAction::CancelDelete);
                }
            });

            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                action = Some(ChatAction::CancelDelete);
            }
        });

    if !still_open && action.is_none() {
        action = Some(ChatAction::CancelDelete);
    }

    action
}

/// Paint a full-screen scrim that also swallows clicks to the feed.
pub(crate) fn dim_background(ctx: &egui::Context, id: &str, color: egui::Color32) {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            ui.painter().rect_filled(rect, 0.0, color);
        });
}

//! Fullscreen image overlay.

use eframe::egui;

use super::delete_confirm::dim_background;
use super::ChatAction;
use crate::ui::images::{fit_within, ImageCache, ImagePreview};
use crate::ui::theme::ChatTheme;

/// Render the open image over the whole window.
///
/// Returns `CloseImage` when the close button or Escape is pressed.
pub fn render_image_viewer(
    ctx: &egui::Context,
    url: &str,
    images: &mut ImageCache,
    theme: &ChatTheme,
) -> Option<ChatAction> {
    let mut action = None;
    let screen = ctx.screen_rect();

    dim_background(ctx, "image_viewer_backdrop", theme.overlay);

    egui::Area::new(egui::Id::new("image_viewer"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.set_min_size(screen.size());
            let content = screen.shrink(32.0);

            match images.get(url) {
                ImagePreview::Ready(texture) => {
                    let size = fit_within(texture.size_vec2(), content.size());
                    let rect = egui::Rect::from_center_size(content.center(), size);
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .paint_at(ui, rect);
                }
                ImagePreview::Loading => {
                    let rect = egui::Rect::from_center_size(content.center(), egui::vec2(48.0, 48.0));
                    ui.put(rect, egui::Spinner::new().size(48.0));
                }
                ImagePreview::Failed => {
                    ui.painter().text(
                        content.center(),
                        egui::Align2::CENTER_CENTER,
                        "Image failed to load",
                        egui::FontId::proportional(18.0),
                        egui::Color32::WHITE,
                    );
                }
            }

            let close_rect = egui::Rect::from_min_size(
                egui::pos2(screen.max.x - 56.0, screen.min.y + 16.0),
                egui::vec2(40.0, 40.0),
            );
            let close = ui
                .put(close_rect, egui::Button::new(egui::RichText::new("✖").size(20.0)))
                .on_hover_text("Close fullscreen image");
            if close.clicked() {
                action = Some(ChatAction::CloseImage);
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = Some(ChatAction::CloseImage);
    }

    action
}

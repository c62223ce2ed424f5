//! Per-variant content rendering inside a bubble.

use eframe::egui;

use crate::content::{truncate_display_name, MessageContent};
use crate::model::DELETED_SENTINEL;
use crate::ui::dialogs::ChatAction;
use crate::ui::images::{fit_within, ImageCache, ImagePreview};
use crate::ui::theme::ChatTheme;

const THUMBNAIL_SIZE: f32 = 160.0;

/// Render one message's content and collect any clicks on it.
pub(super) fn render_content(
    ui: &mut egui::Ui,
    content: &MessageContent,
    images: &mut ImageCache,
    theme: &ChatTheme,
) -> Vec<ChatAction> {
    let mut actions = Vec::new();

    match content {
        MessageContent::Image { url } => {
            if render_thumbnail(ui, url, images, theme).clicked() {
                actions.push(ChatAction::OpenImage(url.clone()));
            }
        }
        MessageContent::Pdf { name, url } => {
            if render_pdf_card(ui, name, theme) {
                actions.push(ChatAction::DownloadPdf {
                    url: url.clone(),
                    filename: name.clone(),
                });
            }
        }
        MessageContent::Link { url } => {
            ui.hyperlink_to(egui::RichText::new(url).color(theme.accent), url);
        }
        MessageContent::DeletedPlaceholder => {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🗑").color(theme.text_deleted));
                ui.label(
                    egui::RichText::new(DELETED_SENTINEL)
                        .italics()
                        .color(theme.text_deleted),
                );
            });
        }
        MessageContent::PlainText { text } => {
            ui.add(egui::Label::new(egui::RichText::new(text).color(theme.text_primary)).wrap());
        }
    }

    actions
}

fn render_thumbnail(
    ui: &mut egui::Ui,
    url: &str,
    images: &mut ImageCache,
    theme: &ChatTheme,
) -> egui::Response {
    let size = egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    ui.painter().rect_filled(rect, 6.0, theme.deleted_bubble);

    match images.get(url) {
        ImagePreview::Ready(texture) => {
            let fitted = fit_within(texture.size_vec2(), size);
            let image_rect = egui::Rect::from_center_size(rect.center(), fitted);
            egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                .paint_at(ui, image_rect);
        }
        ImagePreview::Loading => {
            let spinner = egui::Rect::from_center_size(rect.center(), egui::vec2(24.0, 24.0));
            ui.put(spinner, egui::Spinner::new());
        }
        ImagePreview::Failed => {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Image failed to load",
                egui::FontId::proportional(12.0),
                theme.text_muted,
            );
        }
    }

    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text("Click to view fullscreen")
}

/// Returns true when "Download PDF" was clicked.
fn render_pdf_card(ui: &mut egui::Ui, name: &str, theme: &ChatTheme) -> bool {
    let mut clicked = false;
    egui::Frame::new()
        .fill(theme.attachment_bg)
        .stroke(egui::Stroke::new(1.0, theme.text_deleted))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("📄").color(theme.danger));
                ui.label(egui::RichText::new(truncate_display_name(name)).strong())
                    .on_hover_text(name);
            });
            let button = egui::Button::new(
                egui::RichText::new("Download PDF").color(egui::Color32::WHITE),
            )
            .fill(theme.accent)
            .min_size(egui::vec2(ui.available_width(), 0.0));
            clicked = ui.add(button).clicked();
        });
    clicked
}

//! Feed and bubble layout.

use chrono::{DateTime, Utc};
use eframe::egui;

use crate::grouping::MessageLayout;
use crate::model::Message;
use crate::state::ChatViewState;
use crate::timestamp::format_timestamp;
use crate::ui::dialogs::ChatAction;
use crate::ui::images::{ImageCache, ImagePreview};
use crate::ui::theme::{self, ChatTheme};

use super::attachments::render_content;

const AVATAR_SIZE: f32 = 28.0;
const AVATAR_GAP: f32 = 6.0;

/// Render the scrollable, bottom-following message feed.
///
/// Scrolling is disabled while the fullscreen viewer is open.
pub fn render_feed(
    ui: &mut egui::Ui,
    state: &ChatViewState,
    images: &mut ImageCache,
    theme: &ChatTheme,
    now: DateTime<Utc>,
) -> Vec<ChatAction> {
    let mut actions = Vec::new();
    let layouts = state.layouts();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .enable_scrolling(!state.viewer.scroll_locked())
        .show(ui, |ui| {
            ui.add_space(8.0);
            for (msg, layout) in state.messages().iter().zip(&layouts) {
                ui.push_id(&msg.id, |ui| {
                    render_row(ui, msg, layout, images, theme, now, &mut actions);
                });
            }
            ui.add_space(8.0);
        });

    actions
}

fn render_row(
    ui: &mut egui::Ui,
    msg: &Message,
    layout: &MessageLayout,
    images: &mut ImageCache,
    theme: &ChatTheme,
    now: DateTime<Utc>,
    actions: &mut Vec<ChatAction>,
) {
    ui.add_space(if layout.is_consecutive { 2.0 } else { 10.0 });

    let share = if layout.is_special_content() { 0.7 } else { 0.6 };
    let max_width = (ui.available_width() * share).max(160.0);

    if layout.is_mine {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            ui.add_space(12.0);
            render_bubble(ui, msg, layout, max_width, images, theme, now, actions);
        });
    } else {
        ui.horizontal_top(|ui| {
            ui.add_space(12.0);
            render_avatar_slot(ui, msg, layout.show_sender_info, images);
            ui.add_space(AVATAR_GAP);
            render_bubble(ui, msg, layout, max_width, images, theme, now, actions);
        });
    }
}

/// The slot is always allocated so run continuations stay aligned.
fn render_avatar_slot(
    ui: &mut egui::Ui,
    msg: &Message,
    visible: bool,
    images: &mut ImageCache,
) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    if !visible {
        return;
    }

    let texture = match msg.sender.pic.as_deref() {
        Some(pic) => match images.get(pic) {
            ImagePreview::Ready(texture) => Some(texture.clone()),
            _ => None,
        },
        None => None,
    };

    match texture {
        Some(texture) => {
            egui::Image::from_texture(egui::load::SizedTexture::from_handle(&texture))
                .paint_at(ui, rect);
        }
        None => theme::paint_initials_avatar(ui, rect, &msg.sender.id, &msg.sender.name),
    }
    response.on_hover_text(&msg.sender.name);
}

#[allow(clippy::too_many_arguments)]
fn render_bubble(
    ui: &mut egui::Ui,
    msg: &Message,
    layout: &MessageLayout,
    max_width: f32,
    images: &mut ImageCache,
    theme: &ChatTheme,
    now: DateTime<Utc>,
    actions: &mut Vec<ChatAction>,
) {
    let padding = if layout.is_special_content() { 6 } else { 10 };

    egui::Frame::new()
        .fill(theme.bubble_fill(layout.is_mine, layout.is_deleted))
        .corner_radius(theme::bubble_corners(layout.is_mine, layout.show_sender_info))
        .inner_margin(egui::Margin::symmetric(padding, 6))
        .shadow(egui::Shadow {
            offset: [0, 1],
            blur: 3,
            spread: 0,
            color: egui::Color32::from_black_alpha(25),
        })
        .show(ui, |ui| {
            ui.set_max_width(max_width);
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                if layout.show_sender_info {
                    render_sender_header(ui, msg, theme);
                }

                let content_actions = render_content(ui, &layout.content, images, theme);
                actions.extend(content_actions);

                ui.horizontal(|ui| {
                    if layout.can_delete {
                        let menu = ui
                            .add(egui::Button::new("🗑").small().frame(false))
                            .on_hover_text("Delete message");
                        if menu.clicked() {
                            actions.push(ChatAction::RequestDelete(msg.id.clone()));
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format_timestamp(msg.created_at, now))
                                .text_style(egui::TextStyle::Name("timestamp".into()))
                                .color(theme.text_muted),
                        );
                    });
                });
            });
        });
}

fn render_sender_header(ui: &mut egui::Ui, msg: &Message, theme: &ChatTheme) {
    ui.label(
        egui::RichText::new(&msg.sender.name)
            .text_style(egui::TextStyle::Name("sender_name".into()))
            .color(theme.sender_name)
            .strong(),
    );
    if !msg.sender.email.is_empty() {
        ui.label(
            egui::RichText::new(&msg.sender.email)
                .text_style(egui::TextStyle::Name("sender_email".into()))
                .color(theme.text_muted),
        );
    }
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 1.0), egui::Sense::hover());
    ui.painter().hline(
        rect.x_range(),
        rect.center().y,
        egui::Stroke::new(1.0, theme.sender_divider),
    );
}

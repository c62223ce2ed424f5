//! Colors and styling for the chat feed.
//!
//! Bubbles follow a simple scheme: own messages are blue, everyone else's
//! green, and deleted messages of either side fade to gray. Sender names use
//! a fixed accent; avatars without a picture get a deterministic color per
//! sender.

use eframe::egui::{self, Color32, CornerRadius, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

/// Feed color scheme
#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: String,
    pub background: Color32,
    pub mine_bubble: Color32,
    pub other_bubble: Color32,
    pub deleted_bubble: Color32,
    pub attachment_bg: Color32,
    pub sender_name: Color32,
    pub sender_divider: Color32,
    pub accent: Color32,
    pub danger: Color32,
    pub success: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_deleted: Color32,
    pub toast_bg: Color32,
    pub overlay: Color32,
    pub dialog_bg: Color32,
}

impl ChatTheme {
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            background: Color32::from_rgb(255, 255, 255),
            mine_bubble: Color32::from_rgb(219, 234, 254),
            other_bubble: Color32::from_rgb(220, 252, 231),
            deleted_bubble: Color32::from_rgb(243, 244, 246),
            attachment_bg: Color32::from_rgb(249, 250, 251),
            sender_name: Color32::from_rgb(107, 33, 168),
            sender_divider: Color32::from_rgb(187, 247, 208),
            accent: Color32::from_rgb(37, 99, 235),
            danger: Color32::from_rgb(220, 38, 38),
            success: Color32::from_rgb(34, 197, 94),
            error: Color32::from_rgb(239, 68, 68),
            text_primary: Color32::from_rgb(31, 41, 55),
            text_muted: Color32::from_rgb(107, 114, 128),
            text_deleted: Color32::from_rgb(156, 163, 175),
            toast_bg: Color32::from_rgb(55, 65, 81),
            overlay: Color32::from_black_alpha(204),
            dialog_bg: Color32::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            background: Color32::from_rgb(17, 24, 39),
            mine_bubble: Color32::from_rgb(30, 58, 138),
            other_bubble: Color32::from_rgb(20, 83, 45),
            deleted_bubble: Color32::from_rgb(55, 65, 81),
            attachment_bg: Color32::from_rgb(31, 41, 55),
            sender_name: Color32::from_rgb(216, 180, 254),
            sender_divider: Color32::from_rgb(22, 101, 52),
            accent: Color32::from_rgb(96, 165, 250),
            danger: Color32::from_rgb(220, 38, 38),
            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(248, 113, 113),
            text_primary: Color32::from_rgb(243, 244, 246),
            text_muted: Color32::from_rgb(156, 163, 175),
            text_deleted: Color32::from_rgb(107, 114, 128),
            toast_bg: Color32::from_rgb(31, 41, 55),
            overlay: Color32::from_black_alpha(204),
            dialog_bg: Color32::from_rgb(31, 41, 55),
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Bubble fill for a message.
    pub fn bubble_fill(&self, is_mine: bool, is_deleted: bool) -> Color32 {
        match (is_deleted, is_mine) {
            (true, _) => self.deleted_bubble,
            (false, true) => self.mine_bubble,
            (false, false) => self.other_bubble,
        }
    }
}

/// Rounded bubble with the "tail" corner squared off.
///
/// The first bubble of a run also squares the top corner on its side so the
/// run reads as one block.
pub fn bubble_corners(is_mine: bool, show_sender_info: bool) -> CornerRadius {
    const ROUND: u8 = 14;
    const TAIL: u8 = 4;
    if is_mine {
        CornerRadius {
            nw: ROUND,
            ne: if show_sender_info { ROUND } else { TAIL },
            sw: ROUND,
            se: TAIL,
        }
    } else {
        CornerRadius {
            nw: if show_sender_info { ROUND } else { TAIL },
            ne: ROUND,
            sw: TAIL,
            se: ROUND,
        }
    }
}

pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(18.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name("sender_name".into()), FontId::new(13.0, Proportional)),
        (TextStyle::Name("sender_email".into()), FontId::new(10.0, Proportional)),
        (TextStyle::Name("timestamp".into()), FontId::new(10.0, Proportional)),
    ]
    .into()
}

/// Apply global spacing, text styles and visuals.
pub fn apply_app_style(ctx: &egui::Context, theme: &ChatTheme) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.window_margin = egui::Margin::same(16);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    style.visuals = if theme.name == "Dark" {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    style.visuals.panel_fill = theme.background;
    style.visuals.window_fill = theme.dialog_bg;
    style.visuals.widgets.inactive.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = CornerRadius::same(6);

    ctx.set_style(style);
}

const AVATAR_COLORS: [Color32; 8] = [
    Color32::from_rgb(231, 76, 60),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(155, 89, 182),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(26, 188, 156),
    Color32::from_rgb(236, 100, 166),
    Color32::from_rgb(41, 128, 185),
];

/// Deterministic avatar color for a sender id (FNV-1a).
pub fn avatar_color(sender_id: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in sender_id.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    AVATAR_COLORS[(hash as usize) % AVATAR_COLORS.len()]
}

/// Paint a circular initials avatar into `rect`.
pub fn paint_initials_avatar(ui: &egui::Ui, rect: egui::Rect, sender_id: &str, name: &str) {
    let painter = ui.painter();
    let radius = rect.width().min(rect.height()) / 2.0;
    painter.circle_filled(rect.center(), radius, avatar_color(sender_id));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        crate::content::initials(name),
        FontId::new(radius * 0.9, FontFamily::Proportional),
        Color32::WHITE,
    );
}

//! Texture cache for inline image previews and avatars.

use std::collections::HashMap;

use eframe::egui;

use crate::protocol::ImagePixels;

/// Load state of one image URL.
pub enum ImagePreview {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// Caches decoded textures per URL and collects fetches to issue.
///
/// The first lookup of an unknown URL marks it loading and queues a fetch;
/// later lookups never queue it again, even after a failure.
#[derive(Default)]
pub struct ImageCache {
    entries: HashMap<String, ImagePreview>,
    requests: Vec<String>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for `url`, queueing a fetch on first sight.
    pub fn get(&mut self, url: &str) -> &ImagePreview {
        if !self.entries.contains_key(url) {
            self.requests.push(url.to_string());
        }
        self.entries
            .entry(url.to_string())
            .or_insert(ImagePreview::Loading)
    }

    /// URLs that need fetching since the last call.
    pub fn take_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.requests)
    }

    pub fn insert_loaded(&mut self, ctx: &egui::Context, url: &str, pixels: &ImagePixels) {
        let color_image =
            egui::ColorImage::from_rgba_unmultiplied([pixels.width, pixels.height], &pixels.rgba);
        let texture = ctx.load_texture(
            format!("chat-image:{}", url),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.entries
            .insert(url.to_string(), ImagePreview::Ready(texture));
    }

    pub fn mark_failed(&mut self, url: &str) {
        self.entries.insert(url.to_string(), ImagePreview::Failed);
    }

    pub fn is_failed(&self, url: &str) -> bool {
        matches!(self.entries.get(url), Some(ImagePreview::Failed))
    }
}

/// Scale `image` down (never up) to fit inside `bounds`, keeping its aspect.
pub(crate) fn fit_within(image: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (bounds.x / image.x).min(bounds.y / image.y).min(1.0);
    image * scale
}

//! Event processing from backend

use eframe::egui;
use std::time::Instant;
use tracing::info;

use super::ChatApp;
use crate::protocol::GuiEvent;
use crate::state::DOWNLOAD_ERROR_TEXT;
use crate::toast::Toast;

impl ChatApp {
    /// Drain all pending events from the backend.
    pub fn process_events(&mut self, ctx: &egui::Context, now: Instant) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(ctx, event, now);
        }
    }

    pub fn apply_event(&mut self, ctx: &egui::Context, event: GuiEvent, now: Instant) {
        match event {
            GuiEvent::DeleteResolved { message_id, result } => {
                self.state.resolve_delete(&message_id, result, now);
            }

            GuiEvent::PdfDownloaded { path } => {
                info!(path = %path.display(), "PDF saved");
                self.state
                    .notify(Toast::success(format!("Saved to {}", path.display())), now);
            }

            GuiEvent::PdfDownloadFailed { .. } => {
                // Already logged by the backend
                self.state.notify(Toast::error(DOWNLOAD_ERROR_TEXT), now);
            }

            GuiEvent::ImageLoaded { url, pixels } => {
                self.images.insert_loaded(ctx, &url, &pixels);
            }

            GuiEvent::ImageFailed { url, .. } => {
                self.images.mark_failed(&url);
            }
        }
    }
}

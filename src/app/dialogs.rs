//! Applying user actions and dispatching backend work

use super::ChatApp;
use crate::protocol::BackendAction;
use crate::ui::ChatAction;

impl ChatApp {
    /// Apply one action collected during the frame.
    pub fn handle_action(&mut self, action: ChatAction) {
        match action {
            ChatAction::RequestDelete(message_id) => {
                if !self.state.request_delete(&message_id) {
                    tracing::debug!(%message_id, "delete not allowed");
                }
            }
            ChatAction::ConfirmDelete => {
                if let Some(call) = self.state.confirm_delete() {
                    self.send(call);
                }
            }
            ChatAction::CancelDelete => self.state.cancel_delete(),
            ChatAction::OpenImage(url) => self.state.open_image(&url),
            ChatAction::CloseImage => self.state.close_image(),
            ChatAction::DownloadPdf { url, filename } => {
                self.send(BackendAction::DownloadPdf { url, filename });
            }
        }
    }

    /// Ask the backend for every image the last frame needed.
    pub fn dispatch_image_requests(&mut self) {
        for url in self.images.take_requests() {
            self.send(BackendAction::FetchImage { url });
        }
    }
}

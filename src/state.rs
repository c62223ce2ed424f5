//! Core view state, separated from UI logic.
//!
//! `ChatViewState` holds everything the feed renders from: the reconciled
//! message list, the deletion overlay, the delete flow, the toast and the
//! fullscreen viewer. UI components receive it as a parameter and report
//! user intent back as actions, so every transition here is testable
//! without a window.

use std::fmt;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::deletion::{DeleteWorkflow, DeletionOverlay};
use crate::grouping::{self, MessageLayout};
use crate::model::{DeleteResponse, Message, UserProfile, DELETED_SENTINEL};
use crate::protocol::BackendAction;
use crate::toast::{Toast, ToastSlot};
use crate::viewer::FullscreenViewer;

pub const DELETE_SUCCESS_TEXT: &str = "Message deleted successfully";
pub const DELETE_ERROR_TEXT: &str = "Error deleting message. Please try again.";
pub const DOWNLOAD_ERROR_TEXT: &str = "Failed to download PDF. Please try again.";

/// Invoked with the message id after a successful delete.
pub type DeletedCallback = Box<dyn FnMut(&str)>;

/// View state for one chat feed.
#[derive(Default)]
pub struct ChatViewState {
    /// Messages as rendered, with the overlay applied
    messages: Vec<Message>,

    /// Locally deleted message ids
    overlay: DeletionOverlay,

    /// Confirm-then-commit delete flow
    delete: DeleteWorkflow,

    /// Transient response notification
    pub toast: ToastSlot,

    /// Fullscreen image overlay
    pub viewer: FullscreenViewer,

    /// Viewing user; `None` until a profile is loaded
    user: Option<UserProfile>,

    on_message_deleted: Option<DeletedCallback>,
}

impl fmt::Debug for ChatViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatViewState")
            .field("messages", &self.messages.len())
            .field("overlay", &self.overlay)
            .field("delete", &self.delete)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl ChatViewState {
    pub fn new(user: Option<UserProfile>) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }

    /// Register the callback fired after a successful delete.
    pub fn with_on_message_deleted(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_message_deleted = Some(Box::new(callback));
        self
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn overlay(&self) -> &DeletionOverlay {
        &self.overlay
    }

    pub fn delete_flow(&self) -> &DeleteWorkflow {
        &self.delete
    }

    /// Replace the list with a fresh upstream copy, keeping local deletions.
    pub fn replace_messages(&mut self, upstream: Vec<Message>) {
        self.messages = self.overlay.apply(upstream);
        debug!(count = self.messages.len(), "message list replaced");
    }

    pub fn find(&self, message_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    pub fn is_deleted(&self, message: &Message) -> bool {
        self.overlay.is_deleted(message)
    }

    /// Layout flags for every message in order.
    ///
    /// Messages with a delete call in flight lose their delete affordance.
    pub fn layouts(&self) -> Vec<MessageLayout> {
        let mut layouts = grouping::layout_all(&self.messages, self.user.as_ref(), &self.overlay);
        for (message, layout) in self.messages.iter().zip(layouts.iter_mut()) {
            if self.delete.is_in_flight(&message.id) {
                layout.can_delete = false;
            }
        }
        layouts
    }

    /// Open the delete confirmation for one of our own, live messages.
    ///
    /// Returns false (and changes nothing) for anything else, including a
    /// message whose delete call is still running.
    pub fn request_delete(&mut self, message_id: &str) -> bool {
        let Some(message) = self.find(message_id) else {
            return false;
        };
        if !grouping::is_mine(message, self.user.as_ref()) || self.is_deleted(message) {
            return false;
        }
        if self.delete.is_in_flight(message_id) {
            debug!(%message_id, "delete already in flight");
            return false;
        }
        self.delete.select(message_id);
        true
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    /// The message awaiting confirmation, if the dialog is open.
    pub fn pending_delete(&self) -> Option<&Message> {
        self.delete.pending().and_then(|id| self.find(id))
    }

    /// Close the dialog and produce the backend call to make.
    pub fn confirm_delete(&mut self) -> Option<BackendAction> {
        let own_id = self.user.as_ref()?.id.clone();
        let message_id = self.delete.confirm()?;
        info!(%message_id, "deleting message");
        Some(BackendAction::DeleteMessage { message_id, own_id })
    }

    /// Apply the outcome of a delete call.
    pub fn resolve_delete(
        &mut self,
        message_id: &str,
        result: Result<DeleteResponse, String>,
        now: Instant,
    ) {
        if !self.delete.resolve(message_id, result.is_ok()) {
            warn!(%message_id, "ignoring delete result for a message not being deleted");
            return;
        }

        match result {
            Ok(response) => {
                self.overlay.mark(message_id);
                for m in self.messages.iter_mut().filter(|m| m.id == message_id) {
                    m.content = DELETED_SENTINEL.to_string();
                }
                if let Some(callback) = self.on_message_deleted.as_mut() {
                    callback(message_id);
                }
                let text = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DELETE_SUCCESS_TEXT.to_string());
                info!(%message_id, "message deleted");
                self.toast.show(Toast::success(text), now);
            }
            Err(error) => {
                warn!(%message_id, %error, "failed to delete message");
                self.toast.show(Toast::error(DELETE_ERROR_TEXT), now);
            }
        }
    }

    pub fn open_image(&mut self, url: &str) {
        self.viewer.open(url);
    }

    pub fn close_image(&mut self) {
        self.viewer.close();
    }

    pub fn notify(&mut self, toast: Toast, now: Instant) {
        self.toast.show(toast, now);
    }

    /// Expire the toast if due.
    pub fn tick(&mut self, now: Instant) {
        self.toast.tick(now);
    }
}

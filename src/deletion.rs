//! Soft deletion: the local overlay and the confirm-then-commit workflow.

use std::collections::{HashMap, HashSet};

use crate::model::{Message, DELETED_SENTINEL};

/// Message ids deleted during this session.
///
/// The upstream message source does not know about local deletions, so the
/// overlay is reapplied every time a new list arrives. Entries are never
/// removed.
#[derive(Debug, Default, Clone)]
pub struct DeletionOverlay {
    deleted: HashMap<String, bool>,
}

impl DeletionOverlay {
    pub fn mark(&mut self, message_id: &str) {
        self.deleted.insert(message_id.to_string(), true);
    }

    pub fn contains(&self, message_id: &str) -> bool {
        self.deleted.get(message_id).copied().unwrap_or(false)
    }

    /// Deleted either on the server (sentinel content) or locally.
    pub fn is_deleted(&self, message: &Message) -> bool {
        message.content == DELETED_SENTINEL || self.contains(&message.id)
    }

    /// Stamp the sentinel onto every locally deleted message.
    pub fn apply(&self, messages: Vec<Message>) -> Vec<Message> {
        messages
            .into_iter()
            .map(|mut m| {
                if self.contains(&m.id) {
                    m.content = DELETED_SENTINEL.to_string();
                }
                m
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.deleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Success { message_id: String },
    Failure { message_id: String },
}

/// Where the delete flow currently stands.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    /// Confirmation dialog is showing for this message
    PendingConfirm { message_id: String },
    /// Remote call in flight; the dialog is already closed
    Committing { message_id: String },
    Resolved(DeleteOutcome),
}

/// Transitions of the delete flow.
///
/// Deletes for different messages may overlap: confirming one and then
/// selecting another while the first is still committing is allowed. Every
/// in-flight id is tracked so resolutions are matched by message id.
#[derive(Debug, Default)]
pub struct DeleteWorkflow {
    state: DeleteState,
    in_flight: HashSet<String>,
}

impl DeleteWorkflow {
    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    /// Message awaiting confirmation, if the dialog is open.
    pub fn pending(&self) -> Option<&str> {
        match &self.state {
            DeleteState::PendingConfirm { message_id } => Some(message_id),
            _ => None,
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.pending().is_some()
    }

    pub fn is_in_flight(&self, message_id: &str) -> bool {
        self.in_flight.contains(message_id)
    }

    /// Open the confirmation for `message_id`. The caller checks ownership.
    pub fn select(&mut self, message_id: &str) {
        self.state = DeleteState::PendingConfirm {
            message_id: message_id.to_string(),
        };
    }

    /// Dismiss the confirmation without deleting.
    pub fn cancel(&mut self) {
        if self.is_confirming() {
            self.state = DeleteState::Idle;
        }
    }

    /// Close the dialog and start committing. Returns the id to delete.
    pub fn confirm(&mut self) -> Option<String> {
        let message_id = self.pending()?.to_string();
        self.in_flight.insert(message_id.clone());
        self.state = DeleteState::Committing {
            message_id: message_id.clone(),
        };
        Some(message_id)
    }

    /// Record the result of the remote call for `message_id`.
    ///
    /// Returns false for results nobody is waiting on.
    pub fn resolve(&mut self, message_id: &str, success: bool) -> bool {
        if !self.in_flight.remove(message_id) {
            return false;
        }
        let outcome = if success {
            DeleteOutcome::Success {
                message_id: message_id.to_string(),
            }
        } else {
            DeleteOutcome::Failure {
                message_id: message_id.to_string(),
            }
        };
        // A newer selection keeps its dialog open
        if !self.is_confirming() {
            self.state = DeleteState::Resolved(outcome);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::test_support::msg;

    #[test]
    fn test_overlay_apply_is_monotonic() {
        let mut overlay = DeletionOverlay::default();
        overlay.mark("2");

        let upstream = vec![msg("1", "a", "keep"), msg("2", "a", "secret")];
        let first = overlay.apply(upstream.clone());
        assert_eq!(first[0].content, "keep");
        assert_eq!(first[1].content, DELETED_SENTINEL);

        // The upstream source still has the old content; it stays deleted
        let second = overlay.apply(upstream);
        assert_eq!(first, second);
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn test_sentinel_counts_as_deleted_without_overlay() {
        let overlay = DeletionOverlay::default();
        assert!(overlay.is_empty());
        assert!(overlay.is_deleted(&msg("1", "a", DELETED_SENTINEL)));
        assert!(!overlay.is_deleted(&msg("1", "a", "hello")));
    }

    #[test]
    fn test_confirm_then_success() {
        let mut flow = DeleteWorkflow::default();
        flow.select("m1");
        assert_eq!(flow.pending(), Some("m1"));

        assert_eq!(flow.confirm(), Some("m1".to_string()));
        assert!(!flow.is_confirming());
        assert!(flow.is_in_flight("m1"));
        assert_eq!(
            flow.state(),
            &DeleteState::Committing {
                message_id: "m1".into()
            }
        );

        assert!(flow.resolve("m1", true));
        assert_eq!(
            flow.state(),
            &DeleteState::Resolved(DeleteOutcome::Success {
                message_id: "m1".into()
            })
        );
        assert!(!flow.is_in_flight("m1"));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut flow = DeleteWorkflow::default();
        flow.select("m1");
        flow.cancel();
        assert_eq!(flow.state(), &DeleteState::Idle);
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn test_unknown_resolution_ignored() {
        let mut flow = DeleteWorkflow::default();
        assert!(!flow.resolve("ghost", true));
        assert_eq!(flow.state(), &DeleteState::Idle);
    }

    #[test]
    fn test_overlapping_deletes_keep_new_dialog() {
        let mut flow = DeleteWorkflow::default();
        flow.select("m1");
        flow.confirm();
        flow.select("m2");

        assert!(flow.resolve("m1", false));
        assert_eq!(flow.pending(), Some("m2"));

        flow.confirm();
        assert!(flow.resolve("m2", true));
        assert_eq!(
            flow.state(),
            &DeleteState::Resolved(DeleteOutcome::Success {
                message_id: "m2".into()
            })
        );
    }
}

//! Actions returned by the feed and its dialogs.
//!
//! Widgets never mutate view state directly; they return these and the app
//! applies them after rendering, which keeps the borrow of the state short.

/// User intent captured during a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Delete affordance clicked on a message
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    OpenImage(String),
    CloseImage,
    DownloadPdf { url: String, filename: String },
}

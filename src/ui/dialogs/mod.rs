//! Modal surfaces layered over the feed.
//!
//! Each returns an optional `ChatAction` instead of mutating state; the app
//! applies the action after the frame is laid out.

mod actions;
mod delete_confirm;
mod image_viewer;
mod status_toasts;

pub use actions::ChatAction;
pub use delete_confirm::{render_delete_confirm, DELETE_PROMPT, DELETE_TITLE};
pub use image_viewer::render_image_viewer;
pub use status_toasts::render_status_toast;

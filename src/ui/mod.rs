//! egui rendering for the chat feed.
//!
//! - `messages`: the scrollable feed and message bubbles
//! - `dialogs`: delete confirmation, response toast, fullscreen viewer
//! - `images`: texture cache for previews and avatars
//! - `theme`: color scheme and styling utilities

mod dialogs;
pub mod images;
mod messages;
pub mod theme;

pub use dialogs::*;
pub use messages::*;

//! Chat feed rendering: bubbles, sender runs, inline attachments.

mod attachments;
mod render;

// Re-export public API
pub use render::render_feed;

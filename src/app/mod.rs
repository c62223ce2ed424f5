//! Application module structure for ChatApp
//!
//! - `core`: ChatApp struct and initialization
//! - `events`: applying backend events to view state
//! - `dialogs`: applying user actions and dispatching backend work
//! - `update`: the per-frame eframe loop

pub mod core;
pub mod dialogs;
pub mod events;
pub mod update;

// Re-export ChatApp for public API
pub use core::ChatApp;

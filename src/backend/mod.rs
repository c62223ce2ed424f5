/// Backend submodules for network work off the UI thread
///
/// - `connection`: the `ChatApi` seam and its reqwest implementation
/// - `handlers`: one handler per `BackendAction`
/// - `main_loop`: tokio runtime and action dispatch
mod connection;
mod handlers;
mod main_loop;

use std::path::PathBuf;

use crate::config::Settings;

pub use connection::{ChatApi, HttpApi};
pub use main_loop::run_backend;

/// Settings the backend needs for attachment handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Overrides the platform download directory
    pub download_dir: Option<PathBuf>,
    /// Longest edge of decoded image previews
    pub preview_max_px: u32,
}

impl From<&Settings> for BackendConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            download_dir: settings.download_dir.clone(),
            preview_max_px: settings.preview_max_px,
        }
    }
}

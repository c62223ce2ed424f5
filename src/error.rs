//! Error types shared by the backend and the configuration layer.

use thiserror::Error;

/// Failures surfaced by network calls, attachment handling and file loading.
///
/// None of these are fatal: the UI turns them into an error toast or a log
/// line and keeps running.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("server returned an empty response")]
    EmptyResponse,

    #[error("PDF attachment has no URL")]
    EmptyPdfUrl,

    #[error("no download directory available")]
    NoDownloadDir,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ChatError>;

use std::path::PathBuf;

use crate::model::DeleteResponse;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone, PartialEq)]
pub enum BackendAction {
    /// Soft-delete one of our own messages
    DeleteMessage { message_id: String, own_id: String },
    /// Save a PDF attachment to the download directory
    DownloadPdf { url: String, filename: String },
    /// Fetch and decode an image for inline preview
    FetchImage { url: String },
}

/// Decoded RGBA pixels ready to upload as a texture
#[derive(Clone, PartialEq)]
pub struct ImagePixels {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for ImagePixels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePixels")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum GuiEvent {
    /// The delete call for a message finished
    DeleteResolved {
        message_id: String,
        result: Result<DeleteResponse, String>,
    },
    /// A PDF was written to disk
    PdfDownloaded { path: PathBuf },
    /// A PDF download failed
    PdfDownloadFailed { url: String, error: String },
    /// An image preview is ready
    ImageLoaded { url: String, pixels: ImagePixels },
    /// An image could not be fetched or decoded
    ImageFailed { url: String, error: String },
}

//! Per-action work: delete calls, PDF downloads, image previews.
//!
//! Each handler turns one `BackendAction` into exactly one `GuiEvent`.

use std::path::{Path, PathBuf};

use image::GenericImageView;
use tracing::{debug, warn};

use super::connection::ChatApi;
use super::BackendConfig;
use crate::error::{ChatError, Result};
use crate::protocol::{BackendAction, GuiEvent, ImagePixels};

/// Run one action to completion and report the outcome.
pub async fn handle_backend_action<A: ChatApi>(
    api: &A,
    config: &BackendConfig,
    action: BackendAction,
) -> GuiEvent {
    match action {
        BackendAction::DeleteMessage { message_id, own_id } => {
            let result = match api.delete_message(&message_id, &own_id).await {
                Ok(Some(response)) => Ok(response),
                Ok(None) => Err(ChatError::EmptyResponse.to_string()),
                Err(e) => Err(e.to_string()),
            };
            GuiEvent::DeleteResolved { message_id, result }
        }

        BackendAction::DownloadPdf { url, filename } => {
            match download_pdf(api, config, &url, &filename).await {
                Ok(path) => GuiEvent::PdfDownloaded { path },
                Err(e) => {
                    warn!(%url, error = %e, "PDF download failed");
                    GuiEvent::PdfDownloadFailed {
                        url,
                        error: e.to_string(),
                    }
                }
            }
        }

        BackendAction::FetchImage { url } => match fetch_preview(api, config, &url).await {
            Ok(pixels) => GuiEvent::ImageLoaded { url, pixels },
            Err(e) => {
                debug!(%url, error = %e, "image preview failed");
                GuiEvent::ImageFailed {
                    url,
                    error: e.to_string(),
                }
            }
        },
    }
}

async fn download_pdf<A: ChatApi>(
    api: &A,
    config: &BackendConfig,
    url: &str,
    filename: &str,
) -> Result<PathBuf> {
    // "PDF <name>" without a colon carries no URL
    if url.trim().is_empty() {
        return Err(ChatError::EmptyPdfUrl);
    }

    let dir = download_directory(config)?;
    let bytes = api.fetch_bytes(url).await?;

    tokio::fs::create_dir_all(&dir).await?;
    let path = unique_path(&dir, &sanitize_filename(filename)).await?;
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

async fn fetch_preview<A: ChatApi>(
    api: &A,
    config: &BackendConfig,
    url: &str,
) -> Result<ImagePixels> {
    let bytes = api.fetch_bytes(url).await?;
    let max_px = config.preview_max_px;
    tokio::task::spawn_blocking(move || decode_preview(&bytes, max_px))
        .await
        .map_err(|e| ChatError::Io(std::io::Error::other(e)))?
}

fn download_directory(config: &BackendConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.download_dir {
        return Ok(dir.clone());
    }
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .ok_or(ChatError::NoDownloadDir)
}

/// Decode an image and shrink it so its longest edge fits `max_px`.
pub(crate) fn decode_preview(bytes: &[u8], max_px: u32) -> Result<ImagePixels> {
    let decoded = image::load_from_memory(bytes)?;
    let (w, h) = decoded.dimensions();
    let longest = w.max(h).max(1);

    let resized = if longest > max_px {
        let scale = max_px as f32 / longest as f32;
        decoded.resize(
            (w as f32 * scale).max(1.0) as u32,
            (h as f32 * scale).max(1.0) as u32,
            image::imageops::FilterType::Triangle,
        )
    } else {
        decoded
    };

    let rgba = resized.to_rgba8();
    Ok(ImagePixels {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}

/// Sanitize a filename to be filesystem-safe
pub(crate) fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            _ => c,
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        crate::content::DEFAULT_PDF_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// `dir/name`, or `dir/stem (n).ext` when that is taken.
async fn unique_path(dir: &Path, name: &str) -> Result<PathBuf> {
    let candidate = dir.join(name);
    if !tokio::fs::try_exists(&candidate).await? {
        return Ok(candidate);
    }

    let as_path = Path::new(name);
    let stem = as_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    let ext = as_path.extension().and_then(|e| e.to_str());

    let mut n: u32 = 1;
    loop {
        let next = match ext {
            Some(ext) => dir.join(format!("{} ({}).{}", stem, n, ext)),
            None => dir.join(format!("{} ({})", stem, n)),
        };
        if !tokio::fs::try_exists(&next).await? {
            return Ok(next);
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Syllabus.pdf"), "Syllabus.pdf");
        assert_eq!(sanitize_filename("a/b:c.pdf"), "a_b_c.pdf");
        assert_eq!(sanitize_filename("../../etc"), "_.._etc");
        assert_eq!(sanitize_filename("   "), "document.pdf");
    }

    #[tokio::test]
    async fn test_unique_path_appends_counter() {
        let dir = tempfile::tempdir().unwrap();
        let first = unique_path(dir.path(), "notes.pdf").await.unwrap();
        assert_eq!(first, dir.path().join("notes.pdf"));

        std::fs::write(&first, b"x").unwrap();
        let second = unique_path(dir.path(), "notes.pdf").await.unwrap();
        assert_eq!(second, dir.path().join("notes (1).pdf"));

        std::fs::write(&second, b"x").unwrap();
        assert_eq!(
            unique_path(dir.path(), "notes.pdf").await.unwrap(),
            dir.path().join("notes (2).pdf")
        );
    }

    #[tokio::test]
    async fn test_unique_path_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes"), b"x").unwrap();
        assert_eq!(
            unique_path(dir.path(), "notes").await.unwrap(),
            dir.path().join("notes (1)")
        );
    }

    #[test]
    fn test_decode_preview_downscales() {
        let pixels = decode_preview(&png_bytes(400, 100), 200).unwrap();
        assert_eq!((pixels.width, pixels.height), (200, 50));
        assert_eq!(pixels.rgba.len(), 200 * 50 * 4);
    }

    #[test]
    fn test_decode_preview_keeps_small_images() {
        let pixels = decode_preview(&png_bytes(10, 20), 200).unwrap();
        assert_eq!((pixels.width, pixels.height), (10, 20));
    }

    #[test]
    fn test_decode_preview_rejects_garbage() {
        assert!(matches!(
            decode_preview(b"definitely not an image", 200),
            Err(ChatError::Decode(_))
        ));
    }
}

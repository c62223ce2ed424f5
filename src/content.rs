//! Message content classification.
//!
//! Attachments travel inside the plain `content` string using a small
//! prefix grammar:
//!
//! - `Image:<url>` is an image attachment
//! - `PDF <name>:<url>` or `PDF:<url>` is a PDF attachment
//! - a bare absolute http(s) URL is a link
//! - [`DELETED_SENTINEL`] marks a deleted message
//!
//! Anything else is plain text. [`classify`] turns a content string into a
//! [`MessageContent`] so the UI never has to re-parse it.

use url::Url;

use crate::model::DELETED_SENTINEL;

/// Display name used when a PDF attachment carries none.
pub const DEFAULT_PDF_NAME: &str = "document.pdf";

/// PDF names longer than this are shortened for display.
const MAX_PDF_NAME_CHARS: usize = 20;
/// Number of characters kept when shortening a PDF name.
const TRUNCATED_PDF_NAME_CHARS: usize = 18;

const IMAGE_PREFIX: &str = "Image:";

/// What a message's content string represents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageContent {
    Image { url: String },
    Pdf { name: String, url: String },
    Link { url: String },
    DeletedPlaceholder,
    PlainText { text: String },
}

impl MessageContent {
    /// Images and PDFs get a wider bubble with tighter padding.
    pub fn is_special(&self) -> bool {
        matches!(self, MessageContent::Image { .. } | MessageContent::Pdf { .. })
    }
}

/// Classify a content string.
///
/// Total: every string maps to exactly one variant. Precedence is
/// Image, PDF, Link, DeletedPlaceholder, PlainText.
pub fn classify(content: &str) -> MessageContent {
    if let Some(url) = image_url(content) {
        return MessageContent::Image { url };
    }
    if is_pdf(content) {
        let (name, url) = extract_pdf_info(content);
        return MessageContent::Pdf { name, url };
    }
    if is_valid_url(content) {
        return MessageContent::Link {
            url: content.to_string(),
        };
    }
    if content == DELETED_SENTINEL {
        return MessageContent::DeletedPlaceholder;
    }
    MessageContent::PlainText {
        text: content.to_string(),
    }
}

/// Absolute URL with an `http` or `https` scheme.
pub fn is_valid_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// URL of an `Image:` attachment, if the remainder is a valid URL.
fn image_url(content: &str) -> Option<String> {
    let rest = content.strip_prefix(IMAGE_PREFIX)?.trim();
    is_valid_url(rest).then(|| rest.to_string())
}

fn is_pdf(content: &str) -> bool {
    content.starts_with("PDF ") || content.starts_with("PDF:")
}

/// Split a PDF attachment into `(name, url)`.
///
/// For `PDF <name>:<url>` the first colon must sit past the prefix; when it
/// does not, the default name is returned together with an empty URL. The
/// URL is never validated.
pub fn extract_pdf_info(content: &str) -> (String, String) {
    let mut name = DEFAULT_PDF_NAME.to_string();
    let mut url = String::new();

    if content.starts_with("PDF ") {
        if let Some(colon) = content.find(':') {
            if colon > 4 {
                name = content[4..colon].trim().to_string();
                url = content[colon + 1..].trim().to_string();
            }
        }
    } else if let Some(rest) = content.strip_prefix("PDF:") {
        url = rest.trim().to_string();
    }

    (name, url)
}

/// Shorten long PDF names to 18 characters plus an ellipsis.
pub fn truncate_display_name(name: &str) -> String {
    if name.chars().count() > MAX_PDF_NAME_CHARS {
        let head: String = name.chars().take(TRUNCATED_PDF_NAME_CHARS).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

/// Up to two initials for an avatar placeholder.
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

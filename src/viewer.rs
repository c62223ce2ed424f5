//! Fullscreen image viewer state.

/// One image at a time; opening another replaces it.
///
/// While an image is open the feed behind it must not scroll.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FullscreenViewer {
    image_url: Option<String>,
}

impl FullscreenViewer {
    pub fn open(&mut self, url: impl Into<String>) {
        self.image_url = Some(url.into());
    }

    pub fn close(&mut self) {
        self.image_url = None;
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.image_url.is_some()
    }

    /// Ambient scrolling is suppressed while the viewer is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut viewer = FullscreenViewer::default();
        assert!(!viewer.scroll_locked());

        viewer.open("https://x/a.png");
        assert_eq!(viewer.image_url(), Some("https://x/a.png"));
        assert!(viewer.scroll_locked());

        viewer.close();
        assert!(viewer.image_url().is_none());
        assert!(!viewer.scroll_locked());
    }

    #[test]
    fn test_second_open_replaces() {
        let mut viewer = FullscreenViewer::default();
        viewer.open("https://x/a.png");
        viewer.open("https://x/b.png");
        assert_eq!(viewer.image_url(), Some("https://x/b.png"));
        viewer.close();
        assert!(!viewer.is_open());
    }
}

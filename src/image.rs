/// Local image served when a remote thumbnail can't be loaded.
pub const FALLBACK_IMAGE: &str = "/images/placeholder.svg";

/// Image source that swaps to [`FALLBACK_IMAGE`] on the first load error only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
    src: String,
    failed: bool,
}

impl FallbackImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            failed: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Record a load error. Returns true if the source was replaced.
    pub fn on_error(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        self.src = FALLBACK_IMAGE.to_string();
        true
    }

    /// Check an `<img>` that may have finished loading before any error
    /// listener was attached. A complete image with no natural width is
    /// treated as a load error. Returns true if the source was replaced.
    pub fn on_mount(&mut self, complete: bool, natural_width: u32) -> bool {
        if complete && natural_width == 0 {
            self.on_error()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaced_once() {
        let mut img = FallbackImage::new("https://example.com/broken.png");
        assert_eq!(img.src(), "https://example.com/broken.png");
        assert!(!img.failed());

        assert!(img.on_error());
        assert_eq!(img.src(), FALLBACK_IMAGE);

        // the fallback failing too must not loop
        assert!(!img.on_error());
        assert!(!img.on_error());
        assert_eq!(img.src(), FALLBACK_IMAGE);
        assert!(img.failed());
    }

    #[test]
    fn test_mount_detects_earlier_failure() {
        let mut img = FallbackImage::new("https://example.com/broken.png");
        assert!(img.on_mount(true, 0));
        assert_eq!(img.src(), FALLBACK_IMAGE);

        // the error event may still arrive after hydration
        assert!(!img.on_error());
        assert!(!img.on_mount(true, 0));
        assert_eq!(img.src(), FALLBACK_IMAGE);
    }

    #[test]
    fn test_mount_keeps_loaded_or_pending_image() {
        let mut img = FallbackImage::new("https://example.com/photo.png");
        assert!(!img.on_mount(true, 640));
        assert!(!img.on_mount(false, 0));
        assert_eq!(img.src(), "https://example.com/photo.png");
        assert!(!img.failed());

        // a later real error still swaps once
        assert!(img.on_error());
        assert!(!img.on_mount(true, 0));
        assert_eq!(img.src(), FALLBACK_IMAGE);
    }
}

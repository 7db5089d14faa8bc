pub const LAZY_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyStrategy {
    /// The browser defers loading itself; assign sources right away.
    Native,
    /// Assign each source when its image first scrolls into view.
    Observer,
}

impl LazyStrategy {
    pub fn detect(native_supported: bool) -> Self {
        if native_supported {
            LazyStrategy::Native
        } else {
            LazyStrategy::Observer
        }
    }
}

pub trait LazyImage {
    fn data_src(&self) -> Option<String>;
    fn set_src(&self, src: &str);
}

/// Copy `data-src` into `src`. Returns false for images without a usable
/// deferred source.
pub fn load_image(image: &impl LazyImage) -> bool {
    match image.data_src().filter(|src| !src.trim().is_empty()) {
        Some(src) => {
            image.set_src(&src);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeImage {
        data_src: Option<String>,
        src: RefCell<Option<String>>,
    }

    impl FakeImage {
        fn new(data_src: Option<&str>) -> Self {
            Self {
                data_src: data_src.map(str::to_string),
                src: RefCell::new(None),
            }
        }
    }

    impl LazyImage for FakeImage {
        fn data_src(&self) -> Option<String> {
            self.data_src.clone()
        }

        fn set_src(&self, src: &str) {
            *self.src.borrow_mut() = Some(src.to_string());
        }
    }

    #[test]
    fn test_detect_strategy() {
        assert_eq!(LazyStrategy::detect(true), LazyStrategy::Native);
        assert_eq!(LazyStrategy::detect(false), LazyStrategy::Observer);
    }

    #[test]
    fn test_load_copies_data_src() {
        let image = FakeImage::new(Some("/img/dna.webp"));
        assert!(load_image(&image));
        assert_eq!(image.src.borrow().as_deref(), Some("/img/dna.webp"));
    }

    #[test]
    fn test_missing_or_blank_data_src_is_skipped() {
        for data_src in [None, Some(""), Some("   ")] {
            let image = FakeImage::new(data_src);
            assert!(!load_image(&image));
            assert!(image.src.borrow().is_none());
        }
    }
}

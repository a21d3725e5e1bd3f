//! Rotating header background.

/// CSS `background-image` values cycled through by the header.
pub const BACKGROUND_IMAGES: [&str; 3] = [
    "url('/img1.jpg')",
    "url('/img2.jpg')",
    "url('/img3.jpg')",
];

/// Delay between two background changes.
pub const ROTATION_INTERVAL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slideshow {
    index: usize,
}

impl Slideshow {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves to the next image, wrapping after the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % BACKGROUND_IMAGES.len();
    }

    pub fn current_image(&self) -> &'static str {
        BACKGROUND_IMAGES[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_all_images() {
        let mut slideshow = Slideshow::default();
        let mut seen = vec![slideshow.index()];
        for _ in 0..4 {
            slideshow.advance();
            seen.push(slideshow.index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn current_image_follows_index() {
        let mut slideshow = Slideshow::default();
        assert_eq!(slideshow.current_image(), "url('/img1.jpg')");
        slideshow.advance();
        slideshow.advance();
        assert_eq!(slideshow.current_image(), "url('/img3.jpg')");
    }
}

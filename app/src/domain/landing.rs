//! Landing page content: testimonials and their rotating carousel.

use seed_data::TestimonialSeed;
use serde::{Deserialize, Serialize};

/// How long each testimonial stays on screen.
pub const TESTIMONIAL_ROTATION: std::time::Duration = std::time::Duration::from_secs(5);

/// A quote from a happy learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Author name.
    pub name: String,
    /// Author role.
    pub role: String,
    /// Quote body.
    pub content: String,
    /// Avatar URL.
    pub avatar: String,
    /// Star rating out of five.
    pub rating: u8,
}

impl From<&TestimonialSeed> for Testimonial {
    fn from(seed: &TestimonialSeed) -> Self {
        Self {
            name: seed.name.clone(),
            role: seed.role.clone(),
            content: seed.content.clone(),
            avatar: seed.avatar.clone(),
            rating: seed.rating,
        }
    }
}

/// Cursor over testimonials that wraps at the end.
///
/// # Examples
///
/// ```
/// use beam::domain::TestimonialCarousel;
///
/// let mut carousel = TestimonialCarousel::new(3);
/// assert_eq!(carousel.advance(), Some(1));
/// assert_eq!(carousel.advance(), Some(2));
/// assert_eq!(carousel.advance(), Some(0));
/// assert_eq!(TestimonialCarousel::new(0).advance(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialCarousel {
    len: usize,
    current: usize,
}

impl TestimonialCarousel {
    /// Carousel over `len` testimonials, starting at the first.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Index on screen, or `None` when there is nothing to show.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        if self.len == 0 { None } else { Some(self.current) }
    }

    /// Move to the next testimonial, wrapping around.
    pub fn advance(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.current = (self.current + 1).rem_euclid(self.len);
        Some(self.current)
    }

    /// Jump to `index` when it is in range. Returns whether it moved.
    pub const fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_ignores_out_of_range_indices() {
        let mut carousel = TestimonialCarousel::new(2);
        assert!(carousel.select(1));
        assert!(!carousel.select(2));
        assert_eq!(carousel.current(), Some(1));
    }
}

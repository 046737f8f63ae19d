/// Fraction of the container width taken by one card.
pub const CARD_WIDTH_RATIO: f64 = 0.7;
/// Horizontal gap between cards.
pub const CARD_GAP: f64 = 16.0;

/// Layout of a horizontally scrolling row of equally sized cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub container_width: f64,
    pub card_count: usize,
}

impl CarouselLayout {
    pub fn new(container_width: f64, card_count: usize) -> Self {
        Self {
            container_width,
            card_count,
        }
    }

    pub fn card_width(&self) -> f64 {
        self.container_width * CARD_WIDTH_RATIO
    }

    /// Distance between the left edges of two neighbouring cards.
    pub fn stride(&self) -> f64 {
        self.card_width() + CARD_GAP
    }

    /// Index of the card nearest to `scroll_left`, clamped to the last card.
    /// `None` when there are no cards.
    pub fn active_index(&self, scroll_left: f64) -> Option<usize> {
        if self.card_count == 0 {
            return None;
        }
        let stride = self.stride();
        if !scroll_left.is_finite() || scroll_left <= 0.0 || stride <= 0.0 {
            return Some(0);
        }

        let index = (scroll_left / stride).round();
        let last = self.card_count - 1;
        if index >= last as f64 {
            Some(last)
        } else {
            Some(index as usize)
        }
    }

    /// Scroll position that brings card `index` to the start of the container.
    pub fn scroll_offset(&self, index: usize) -> f64 {
        index as f64 * self.stride()
    }
}

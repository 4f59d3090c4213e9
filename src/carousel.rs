//! Carousel State
//!
//! Slide cursor for the home page image slider.

use leptos_dragdrop::Swipe;

/// Autoplay period in milliseconds
pub const AUTOPLAY_MS: u64 = 5000;

/// `|offset| * velocity` beyond which a drag counts as a swipe
pub const SWIPE_CONFIDENCE: f64 = 10_000.0;

/// Wrap `value` into `min..max`
pub fn wrap(min: i64, max: i64, value: i64) -> i64 {
    let range = max - min;
    if range <= 0 {
        return min;
    }
    (value - min).rem_euclid(range) + min
}

/// Unbounded page counter plus the direction of the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideDeck {
    pub page: i64,
    /// +1 forwards, -1 backwards, 0 before any move
    pub direction: i64,
}

impl SlideDeck {
    pub fn paginate(&mut self, direction: i64) {
        self.page += direction;
        self.direction = direction;
    }

    /// Jump to a dot; direction follows the target's side of the current slide
    pub fn jump_to(&mut self, index: usize, len: usize) {
        let current = self.index(len);
        self.direction = if index > current { 1 } else { -1 };
        self.page = index as i64;
    }

    /// Visible slide for a deck of `len` slides
    pub fn index(&self, len: usize) -> usize {
        wrap(0, len as i64, self.page) as usize
    }
}

/// Which way a finished drag moves the deck, if at all
pub fn swipe_direction(swipe: Swipe) -> Option<i64> {
    let power = swipe.offset.abs() * swipe.velocity;
    if power < -SWIPE_CONFIDENCE {
        Some(1)
    } else if power > SWIPE_CONFIDENCE {
        Some(-1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, 5, 0), 0);
        assert_eq!(wrap(0, 5, 5), 0);
        assert_eq!(wrap(0, 5, 7), 2);
        assert_eq!(wrap(0, 5, -1), 4);
        assert_eq!(wrap(0, 5, -11), 4);
        assert_eq!(wrap(0, 0, 3), 0);
    }

    #[test]
    fn test_paginate_wraps_both_ways() {
        let mut deck = SlideDeck::default();
        deck.paginate(-1);
        assert_eq!(deck.index(5), 4);
        assert_eq!(deck.direction, -1);
        for _ in 0..6 {
            deck.paginate(1);
        }
        assert_eq!(deck.index(5), 0);
        assert_eq!(deck.direction, 1);
    }

    #[test]
    fn test_jump_to() {
        let mut deck = SlideDeck::default();
        deck.jump_to(3, 5);
        assert_eq!((deck.index(5), deck.direction), (3, 1));
        deck.jump_to(1, 5);
        assert_eq!((deck.index(5), deck.direction), (1, -1));
    }

    #[test]
    fn test_swipe_direction() {
        // fast leftward flick: next
        assert_eq!(swipe_direction(Swipe { offset: -200.0, velocity: -800.0 }), Some(1));
        // rightward: previous
        assert_eq!(swipe_direction(Swipe { offset: 150.0, velocity: 400.0 }), Some(-1));
        // slow drag stays
        assert_eq!(swipe_direction(Swipe { offset: 40.0, velocity: 100.0 }), None);
        assert_eq!(swipe_direction(Swipe { offset: -100.0, velocity: -100.0 }), None);
    }
}

//! Carousel position over a fixed list of items

use crate::error::CarouselError;
use std::{sync::Arc, time::Duration};

/// Time between automatic advances unless configured otherwise
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(5000);

/// Tracks the current slide in a non-empty, immutable list of items
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Arc<[T]>,
    cur_idx: usize,
    tick_interval: Duration,
}

impl<T> Carousel<T> {
    /// Mount a carousel on the first item
    pub fn new(items: impl Into<Arc<[T]>>) -> Result<Self, CarouselError> {
        let items = items.into();
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }

        Ok(Self {
            items,
            cur_idx: 0,
            tick_interval: DEFAULT_TICK_INTERVAL,
        })
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Result<Self, CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }

        self.tick_interval = interval;
        Ok(self)
    }

    /// Get the item on screen
    pub fn current_item(&self) -> &T {
        &self.items[self.cur_idx]
    }

    pub fn current_index(&self) -> usize {
        self.cur_idx
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false, construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Move to the next item, wrapping around
    pub fn advance(&mut self) -> &T {
        self.cur_idx = (self.cur_idx + 1) % self.items.len();
        self.current_item()
    }

    /// Move to the previous item, wrapping around
    pub fn retreat(&mut self) -> &T {
        let total = self.items.len();
        self.cur_idx = (self.cur_idx + total - 1) % total;
        self.current_item()
    }

    /// Jump to `idx`. Out of range indices are ignored.
    pub fn select_index(&mut self, idx: usize) -> bool {
        if idx < self.items.len() {
            self.cur_idx = idx;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eight() -> Carousel<u32> {
        Carousel::new((1..=8).collect::<Vec<u32>>()).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        let err = Carousel::<u32>::new(Vec::new()).unwrap_err();
        assert_eq!(err, CarouselError::Empty);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = eight().with_tick_interval(Duration::ZERO).unwrap_err();
        assert_eq!(err, CarouselError::ZeroInterval);
    }

    #[test]
    fn test_defaults() {
        let carousel = eight();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(*carousel.current_item(), 1);
        assert_eq!(carousel.len(), 8);
        assert!(!carousel.is_empty());
        assert_eq!(carousel.tick_interval(), Duration::from_millis(5000));
    }

    #[test]
    fn test_advance_wraps() {
        let mut carousel = eight();
        assert_eq!(*carousel.advance(), 2);
        assert_eq!(carousel.current_index(), 1);

        for _ in 0..7 {
            carousel.advance();
        }
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut carousel = eight();
        assert_eq!(*carousel.retreat(), 8);
        assert_eq!(carousel.current_index(), 7);
    }

    #[test]
    fn test_advance_then_retreat_restores() {
        let mut carousel = eight();
        carousel.select_index(5);

        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.current_index(), 5);

        carousel.retreat();
        carousel.advance();
        assert_eq!(carousel.current_index(), 5);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for total in 1..=12usize {
            let mut carousel = Carousel::new((0..total).collect::<Vec<_>>()).unwrap();
            carousel.select_index(total / 2);
            let start = carousel.current_index();

            for _ in 0..total {
                carousel.advance();
            }
            assert_eq!(carousel.current_index(), start, "cycle of {total}");
        }
    }

    #[test]
    fn test_index_stays_in_bounds() {
        for total in 1..=9usize {
            let mut carousel = Carousel::new((0..total).collect::<Vec<_>>()).unwrap();
            // Deterministic mix of moves
            for step in 0..200usize {
                if step % 3 == 0 || step % 7 == 0 {
                    carousel.retreat();
                } else {
                    carousel.advance();
                }
                assert!(carousel.current_index() < total);
                assert_eq!(*carousel.current_item(), carousel.current_index());
            }
        }
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut carousel = eight();
        carousel.select_index(3);

        assert!(!carousel.select_index(8));
        assert!(!carousel.select_index(usize::MAX));
        assert_eq!(carousel.current_index(), 3);

        assert!(carousel.select_index(7));
        assert_eq!(carousel.current_index(), 7);
    }

    #[test]
    fn test_single_item() {
        let mut carousel = Carousel::new(vec!["only"]).unwrap();
        assert_eq!(*carousel.advance(), "only");
        assert_eq!(*carousel.retreat(), "only");
        assert_eq!(carousel.current_index(), 0);
    }
}

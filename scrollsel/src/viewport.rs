use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// The contiguous window of option indices currently rendered.
///
/// `distance` is the number of rows shown beyond the first, so the window is
/// `start..=start + distance`. For a non-empty list the window always fits:
/// `start + distance <= total - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    start: usize,
    distance: usize,
    total: usize,
}

impl Viewport {
    pub fn new(total: usize, distance: usize) -> Self {
        let mut viewport = Self {
            start: 0,
            distance: 0,
            total,
        };
        viewport.set_render_distance(distance);
        viewport
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn total(&self) -> usize {
        self.total
    }

    fn last(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// Largest legal `start` for the current distance.
    pub fn max_start(&self) -> usize {
        self.last() - self.distance
    }

    pub fn visible_count(&self) -> usize {
        self.distance + 1
    }

    pub fn visible_range(&self) -> RangeInclusive<usize> {
        self.start..=self.start + self.distance
    }

    /// True when every option fits in the window at once.
    pub fn spans_all(&self) -> bool {
        self.distance == self.last()
    }

    /// Resize the window. This is the one clamp every resize goes through.
    pub fn set_render_distance(&mut self, distance: usize) {
        if distance >= self.last() {
            self.distance = self.last();
            self.start = 0;
        } else {
            self.distance = distance;
            if self.start > self.max_start() {
                log::trace!(
                    "[viewport] pulling start back from {} to {}",
                    self.start,
                    self.max_start()
                );
                self.start = self.max_start();
            }
        }
    }

    /// Move the window so `selected` is the first visible row, or as close to
    /// it as the tail of the list allows.
    ///
    /// Returns the signed number of rows every option moved by (positive is
    /// downward), i.e. `old_start - new_start`.
    pub fn reset_to_selection(&mut self, selected: usize) -> isize {
        let selected = selected.min(self.last());
        let threshold = self.max_start();

        let mut factor = self.start as isize - selected as isize;
        self.start = selected;

        if self.start > threshold {
            let diff = threshold as isize - self.start as isize;
            self.start = threshold;
            factor -= diff;
        }

        log::trace!(
            "[viewport] reset to selection {} -> start={} factor={}",
            selected,
            self.start,
            factor
        );
        factor
    }

    /// Shift the window by one row. Returns false when already at that end.
    pub fn scroll_by(&mut self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Up if self.start > 0 => {
                self.start -= 1;
                true
            }
            ScrollDirection::Down if self.start + self.distance < self.last() => {
                self.start += 1;
                true
            }
            _ => false,
        }
    }

    /// Rows between option `index` and the top of the window; negative above it.
    pub fn row_offset(&self, index: usize) -> isize {
        index as isize - self.start as isize
    }
}

//! Proportional scrollbar derived from the viewport.

use crate::color::Color;
use crate::draw::DrawTarget;
use crate::geometry::Rect;
use crate::viewport::Viewport;

/// Track and thumb rectangles for the open list.
///
/// There are no setters: a scrollbar is always recomputed from the frame and
/// the viewport, so it cannot drift out of sync with the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scrollbar {
    track: Rect,
    thumb: Rect,
    scrollable: bool,
}

impl Scrollbar {
    /// Compute geometry for a frame whose right edge hosts a track `width` wide.
    ///
    /// Thumb height is `frame.height * (distance + 1) / (total - 1)`, capped at
    /// the frame height. Its offset is the free track length scaled by
    /// `start / (total - 1 - distance)`. Both divisions collapse to a full,
    /// unmoving thumb when the window already shows every option.
    pub fn compute(frame: Rect, width: f32, viewport: &Viewport) -> Self {
        let track = Rect::new(frame.right() - width, frame.top(), width, frame.height);

        let total = viewport.total();
        let rows_beyond_first = total.saturating_sub(1);

        let thumb_height = if rows_beyond_first == 0 {
            frame.height
        } else {
            let ratio = (viewport.distance() + 1) as f32 / rows_beyond_first as f32;
            (frame.height * ratio).min(frame.height)
        };

        let scrollable = !viewport.spans_all();
        let offset = if scrollable {
            let free = frame.height - thumb_height;
            free * (viewport.start() as f32 / viewport.max_start() as f32)
        } else {
            0.0
        };

        Self {
            track,
            thumb: Rect::new(track.x, frame.top() + offset, width, thumb_height),
            scrollable,
        }
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    pub fn thumb(&self) -> Rect {
        self.thumb
    }

    /// False when the whole list fits in the window.
    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    /// Thumb position along the free track, 0.0 at the top and 1.0 at the bottom.
    pub fn ratio(&self) -> f32 {
        let free = self.track.height - self.thumb.height;
        if free <= 0.0 {
            0.0
        } else {
            ((self.thumb.y - self.track.y) / free).clamp(0.0, 1.0)
        }
    }

    pub fn draw(&self, target: &mut impl DrawTarget, color: &Color) {
        target.fill_rect(self.thumb, color);
    }
}

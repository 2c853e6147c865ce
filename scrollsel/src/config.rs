//! Selector configuration.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::Size;
use crate::theme::Palette;

/// Base row width added to the font-derived width when resizing dynamically.
pub const DYNAMIC_BASE_WIDTH: f32 = 64.0;
/// Row width gained per font size unit.
pub const DYNAMIC_WIDTH_FACTOR: f32 = 3.0;
/// Row height per font size unit.
pub const DYNAMIC_HEIGHT_FACTOR: f32 = 1.5;

/// Row size derived from a font size: `64 + size * 3` wide, `size * 1.5` tall.
pub fn dynamic_option_size(font_size: u32) -> Size {
    let size = font_size as f32;
    Size::new(
        DYNAMIC_BASE_WIDTH + size * DYNAMIC_WIDTH_FACTOR,
        size * DYNAMIC_HEIGHT_FACTOR,
    )
}

/// Construction-time knobs for a selector.
///
/// Every field can also be changed later through the matching `Selector`
/// method; this struct only fixes the starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Visible rows minus one. Clamped to the option count.
    pub render_distance: usize,

    /// Width and height of one row.
    pub option_size: Size,

    /// Character size handed to the backend with every label.
    pub font_size: u32,

    /// Derive `option_size` from `font_size` instead of using it verbatim.
    pub dynamic_resize: bool,

    /// Horizontal width of the scrollbar track.
    pub scrollbar_width: f32,

    /// Background of the open list.
    pub frame_color: Color,

    /// Scrollbar thumb color.
    pub scrollbar_color: Color,

    pub palette: Palette,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            render_distance: 4,
            option_size: dynamic_option_size(16),
            font_size: 16,
            dynamic_resize: false,
            scrollbar_width: 8.0,
            frame_color: Color::rgb(69, 69, 69),
            scrollbar_color: Color::rgb(169, 169, 169),
            palette: Palette::default(),
        }
    }
}

impl SelectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_distance(mut self, distance: usize) -> Self {
        self.render_distance = distance;
        self
    }

    pub fn option_size(mut self, size: Size) -> Self {
        self.option_size = size;
        self
    }

    /// Set the font size; with `dynamic_resize` the row size follows it.
    pub fn font_size(mut self, size: u32, dynamic_resize: bool) -> Self {
        self.font_size = size;
        self.dynamic_resize = dynamic_resize;
        self
    }

    pub fn scrollbar_width(mut self, width: f32) -> Self {
        self.scrollbar_width = width;
        self
    }

    pub fn frame_color(mut self, color: Color) -> Self {
        self.frame_color = color;
        self
    }

    pub fn scrollbar_color(mut self, color: Color) -> Self {
        self.scrollbar_color = color;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The row size actually used once `dynamic_resize` is applied.
    pub fn effective_option_size(&self) -> Size {
        if self.dynamic_resize {
            dynamic_option_size(self.font_size)
        } else {
            self.option_size
        }
    }
}

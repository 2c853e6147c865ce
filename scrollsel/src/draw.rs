//! The boundary between the selector and whatever actually puts pixels (or
//! terminal cells) on screen.
//!
//! The engine issues an ordered stream of two primitives: filled rectangles
//! and text runs. Backends implement [`DrawTarget`]; `Vec<DrawCommand>` is a
//! recording target that keeps the stream for inspection or batching.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Opaque font handle supplied by the host at construction.
///
/// The selector never loads or inspects fonts; it attaches this handle to
/// every text primitive so the backend can look the font up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font: FontHandle,
    pub char_size: u32,
}

pub trait DrawTarget {
    fn fill_rect(&mut self, rect: Rect, color: &Color);

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color },
    Text { text: String, origin: Point, style: TextStyle },
}

impl DrawTarget for Vec<DrawCommand> {
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.push(DrawCommand::Rect {
            rect,
            color: *color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style: *style,
        });
    }
}

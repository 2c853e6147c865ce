//! Cell grid that selectors paint into, one frame at a time.

use scrollsel::{Color, DrawTarget, Point, Rect, Rgb, TextStyle};

use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Cells of `self` that differ from `other`, with their coordinates.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| self.position(i, cell))
    }

    /// Every cell with its coordinates, for full repaints.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| self.position(i, cell))
    }

    fn position<'a>(&self, i: usize, cell: &'a Cell) -> (u16, u16, &'a Cell) {
        let x = (i % self.width as usize) as u16;
        let y = (i / self.width as usize) as u16;
        (x, y, cell)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Cell indices along one axis whose centers fall inside `[start, end)`.
    fn covered(start: f32, end: f32, limit: u16) -> std::ops::Range<u16> {
        let first = (start - 0.5).ceil().max(0.0);
        let last = (end - 0.5).ceil().clamp(0.0, limit as f32);
        if first >= last {
            0..0
        } else {
            first as u16..last as u16
        }
    }
}

impl DrawTarget for Buffer {
    /// Paints every cell whose center lies inside `rect`.
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        if rect.is_empty() || color.alpha() <= 0.0 {
            return;
        }

        let bg = color.to_rgb();
        for y in Self::covered(rect.top(), rect.bottom(), self.height) {
            for x in Self::covered(rect.left(), rect.right(), self.width) {
                self.set(x, y, Cell::new(' ').with_bg(bg));
            }
        }
    }

    /// Writes a single line starting at the rounded origin.
    ///
    /// Glyphs take their foreground from the style and keep whatever
    /// background the cell already has. Anything past the buffer edge is cut.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let y = origin.y.round();
        if !y.is_finite() || y < 0.0 || y >= self.height as f32 {
            return;
        }
        if !origin.x.is_finite() || origin.x >= self.width as f32 {
            return;
        }
        let y = y as u16;
        let fg = style.color.to_rgb();

        let mut x = origin.x.round() as i32;
        for ch in text.chars() {
            let width = char_width(ch) as i32;
            if width == 0 {
                continue;
            }
            if x + width > self.width as i32 {
                break;
            }
            if x >= 0 {
                let col = x as u16;
                if let Some(cell) = self.get_mut(col, y) {
                    cell.char = ch;
                    cell.fg = fg;
                    cell.wide_continuation = false;
                }
                for extra in 1..width {
                    if let Some(cell) = self.get_mut(col + extra as u16, y) {
                        cell.char = ' ';
                        cell.fg = fg;
                        cell.wide_continuation = true;
                    }
                }
            }
            x += width;
        }
    }
}

use std::fmt;

use crate::color::Color;
use crate::config::{dynamic_option_size, SelectorConfig};
use crate::draw::{DrawTarget, FontHandle};
use crate::error::SelectorError;
use crate::geometry::{Point, Rect, Size};
use crate::option::OptionItem;
use crate::scrollbar::Scrollbar;
use crate::theme::Palette;
use crate::viewport::{ScrollDirection, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Only the preview row is shown.
    #[default]
    Closed,
    /// The frame, the visible window of options and the scrollbar are shown.
    Open,
}

/// What a left click did, so the host can react without diffing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Closed and the pointer was elsewhere.
    Ignored,
    /// The list opened.
    Opened,
    /// A new option was chosen and the list closed.
    Committed(usize),
    /// The list closed without changing the selection.
    Dismissed,
}

/// A combo-box style selector over a list of displayable values.
///
/// Closed, it shows a single preview row mirroring the current selection.
/// Open, it shows a frame holding a window of `render_distance + 1` rows plus
/// a proportional scrollbar. Exactly one option is selected at any time and
/// the preview label always matches it.
#[derive(Debug, Clone)]
pub struct Selector<T> {
    values: Vec<T>,
    options: Vec<OptionItem>,
    selected_index: usize,
    preview: OptionItem,
    mode: Mode,
    moused: bool,
    viewport: Viewport,
    scrollbar: Scrollbar,
    palette: Palette,
    option_size: Size,
    font_size: u32,
    font: FontHandle,
    frame: Rect,
    frame_color: Color,
    scrollbar_color: Color,
    scrollbar_width: f32,
    pointer: Option<Point>,
}

impl<T: fmt::Display> Selector<T> {
    pub fn new(font: FontHandle, values: Vec<T>, position: Point) -> Result<Self, SelectorError> {
        Self::with_config(font, values, position, SelectorConfig::default())
    }

    pub fn with_config(
        font: FontHandle,
        values: Vec<T>,
        position: Point,
        config: SelectorConfig,
    ) -> Result<Self, SelectorError> {
        if values.is_empty() {
            return Err(SelectorError::NoOptions);
        }

        let option_size = config.effective_option_size();
        let row = Rect::from_origin_size(position, option_size);

        let mut options: Vec<OptionItem> = values
            .iter()
            .map(|value| OptionItem::new(value.to_string(), row))
            .collect();
        options[0].select();
        let preview = options[0].clone();

        let viewport = Viewport::new(options.len(), config.render_distance);

        let mut selector = Self {
            values,
            options,
            selected_index: 0,
            preview,
            mode: Mode::Closed,
            moused: false,
            viewport,
            scrollbar: Scrollbar::default(),
            palette: config.palette,
            option_size,
            font_size: config.font_size,
            font,
            frame: Rect::default(),
            frame_color: config.frame_color,
            scrollbar_color: config.scrollbar_color,
            scrollbar_width: config.scrollbar_width,
            pointer: None,
        };
        selector.relayout();

        log::debug!(
            "[selector] created with {} options, distance={}, option_size={:?}",
            selector.options.len(),
            selector.viewport.distance(),
            selector.option_size
        );
        Ok(selector)
    }
}

impl<T> Selector<T> {
    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The currently selected value.
    pub fn selection(&self) -> &T {
        &self.values[self.selected_index]
    }

    pub fn selection_label(&self) -> &str {
        self.preview.label()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn preview(&self) -> &OptionItem {
        &self.preview
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode == Mode::Open
    }

    pub fn is_moused(&self) -> bool {
        self.moused
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scrollbar(&self) -> &Scrollbar {
        &self.scrollbar
    }

    /// Bounds of the open list, scrollbar included.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn option_size(&self) -> Size {
        self.option_size
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font(&self) -> FontHandle {
        self.font
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Feed a pointer position.
    ///
    /// Closed, only the preview is hit-tested. Open, the frame decides
    /// `moused` and every option (visible or not) updates its hover flag.
    /// Hidden rows can be flagged but are never committed or drawn.
    pub fn check_mouse(&mut self, point: Point) {
        self.pointer = Some(point);
        match self.mode {
            Mode::Closed => {
                self.moused = self.preview.bounds().contains(point);
                self.preview.check_mouse(point);
            }
            Mode::Open => {
                self.moused = self.frame.contains(point);
                for option in &mut self.options {
                    option.check_mouse(point);
                }
            }
        }
    }

    pub fn click_left(&mut self) -> ClickOutcome {
        match self.mode {
            Mode::Closed => {
                if !self.moused {
                    return ClickOutcome::Ignored;
                }
                self.open();
                ClickOutcome::Opened
            }
            Mode::Open => {
                let chosen = if self.moused {
                    self.viewport.visible_range().find(|&i| {
                        let option = &self.options[i];
                        option.is_highlighted() && !option.is_selected()
                    })
                } else {
                    None
                };

                if let Some(index) = chosen {
                    self.commit(index);
                }
                self.close();

                match chosen {
                    Some(index) => ClickOutcome::Committed(index),
                    None => ClickOutcome::Dismissed,
                }
            }
        }
    }

    /// Scroll the open list by one row.
    ///
    /// Positive deltas scroll up, negative deltas down. Ignored unless the
    /// list is open and the pointer is over the frame. Returns whether the
    /// window moved.
    pub fn scroll(&mut self, delta: f32) -> bool {
        if self.mode != Mode::Open || !self.moused {
            return false;
        }

        let direction = if delta > 0.0 {
            ScrollDirection::Up
        } else if delta < 0.0 {
            ScrollDirection::Down
        } else {
            return false;
        };

        if !self.viewport.scroll_by(direction) {
            log::trace!(
                "[selector] scroll {:?} ignored at start={}",
                direction,
                self.viewport.start()
            );
            return false;
        }

        self.place_options();
        self.place_scrollbar();
        self.rehover();
        log::trace!(
            "[selector] scrolled {:?} to start={} (thumb at {:.2})",
            direction,
            self.viewport.start(),
            self.scrollbar.ratio()
        );
        true
    }

    // -------------------------------------------------------------------------
    // Reconfiguration
    // -------------------------------------------------------------------------

    pub fn set_option_size(&mut self, size: Size) {
        self.option_size = size;
        self.preview.set_size(size);
        for option in &mut self.options {
            option.set_size(size);
        }
        self.relayout();
    }

    /// Change the character size; with `dynamic_resize` the rows follow it.
    pub fn set_font_size(&mut self, size: u32, dynamic_resize: bool) {
        self.font_size = size;
        if dynamic_resize {
            self.set_option_size(dynamic_option_size(size));
        }
    }

    pub fn set_render_distance(&mut self, distance: usize) {
        self.viewport.set_render_distance(distance);
        self.relayout();
    }

    pub fn set_colors(&mut self, light: Color, dark: Color, selected: Color, selected_text: Color) {
        self.set_palette(Palette::new(light, dark, selected, selected_text));
    }

    /// Replace the palette and repaint every row from its flags.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.preview.refresh();
        for option in &mut self.options {
            option.refresh();
        }
    }

    /// Move the whole widget so the preview's top-left corner sits at `position`.
    pub fn set_position(&mut self, position: Point) {
        self.preview.set_position(position);
        self.relayout();
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    pub fn draw(&self, target: &mut impl DrawTarget) {
        match self.mode {
            Mode::Closed => {
                self.preview
                    .draw(target, &self.palette, self.font, self.font_size);
            }
            Mode::Open => {
                target.fill_rect(self.frame, &self.frame_color);
                for index in self.viewport.visible_range() {
                    self.options[index].draw(target, &self.palette, self.font, self.font_size);
                }
                self.scrollbar.draw(target, &self.scrollbar_color);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn open(&mut self) {
        self.mode = Mode::Open;
        let moved = self.viewport.reset_to_selection(self.selected_index);
        self.place_options();
        self.place_scrollbar();
        log::debug!(
            "[selector] opened at start={} (rows moved by {})",
            self.viewport.start(),
            moved
        );
        self.rehover();
    }

    fn close(&mut self) {
        self.mode = Mode::Closed;
        log::debug!("[selector] closed with selection {}", self.selected_index);
        self.rehover();
    }

    fn commit(&mut self, index: usize) {
        let previous = self.selected_index;
        self.options[previous].unselect();
        self.options[index].select();
        self.selected_index = index;
        let label = self.options[index].label().to_string();
        self.preview.set_label(label);
        log::debug!("[selector] committed {} -> {}", previous, index);
    }

    fn rehover(&mut self) {
        if let Some(point) = self.pointer {
            self.check_mouse(point);
        }
    }

    fn relayout(&mut self) {
        let origin = self.preview.bounds().origin();
        let size = Size::new(
            self.option_size.width + self.scrollbar_width,
            self.option_size.height * self.viewport.visible_count() as f32,
        );
        self.frame = Rect::from_origin_size(origin, size);
        self.place_options();
        self.place_scrollbar();
        // Rows moved under a still pointer
        self.rehover();
    }

    /// Row `i` sits `i - start` rows below the top of the frame.
    fn place_options(&mut self) {
        let origin = self.frame.origin();
        let row_height = self.option_size.height;
        for (index, option) in self.options.iter_mut().enumerate() {
            let offset = self.viewport.row_offset(index) as f32 * row_height;
            option.set_position(Point::new(origin.x, origin.y + offset));
        }
    }

    fn place_scrollbar(&mut self) {
        self.scrollbar = Scrollbar::compute(self.frame, self.scrollbar_width, &self.viewport);
    }
}

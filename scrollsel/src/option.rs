use crate::color::Color;
use crate::draw::{DrawTarget, FontHandle, TextStyle};
use crate::geometry::{Point, Rect, Size};
use crate::theme::{Palette, Role};

/// One selectable row: a label, its bounds, and the hover/selection flags.
///
/// The painted [`Role`] is tracked separately from the flags because the
/// transitions have history: `select()` paints the selected colors even while
/// the pointer is over the row, and only `unhighlight()` or `refresh()` will
/// re-derive the role from the flags afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionItem {
    label: String,
    bounds: Rect,
    highlighted: bool,
    selected: bool,
    role: Role,
}

impl OptionItem {
    pub fn new(label: impl Into<String>, bounds: Rect) -> Self {
        let mut item = Self {
            label: label.into(),
            bounds,
            highlighted: false,
            selected: false,
            role: Role::Default,
        };
        item.unhighlight();
        item
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_position(&mut self, origin: Point) {
        self.bounds = self.bounds.with_origin(origin);
    }

    pub fn set_size(&mut self, size: Size) {
        self.bounds = self.bounds.with_size(size);
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Hover colors win unconditionally, including over a selected row.
    pub fn highlight(&mut self) {
        self.highlighted = true;
        self.role = Role::Highlighted;
    }

    pub fn unhighlight(&mut self) {
        self.highlighted = false;
        self.role = if self.selected {
            Role::Selected
        } else {
            Role::Default
        };
    }

    pub fn select(&mut self) {
        self.selected = true;
        self.role = Role::Selected;
    }

    pub fn unselect(&mut self) {
        self.selected = false;
        if self.highlighted {
            self.highlight();
        } else {
            self.unhighlight();
        }
    }

    /// Re-derive the painted role from the flags without touching them.
    pub fn refresh(&mut self) {
        if self.highlighted {
            self.highlight();
        } else if self.selected {
            self.select();
        } else {
            self.unhighlight();
        }
    }

    /// Update hover state for a pointer position.
    ///
    /// Only an edge (outside → inside or inside → outside) runs a transition.
    /// Returns whether the highlight flag changed.
    pub fn check_mouse(&mut self, point: Point) -> bool {
        let contains = self.bounds.contains(point);
        if self.highlighted && !contains {
            self.unhighlight();
            true
        } else if !self.highlighted && contains {
            self.highlight();
            true
        } else {
            false
        }
    }

    /// `(fill, text)` colors under the given palette.
    pub fn colors(&self, palette: &Palette) -> (Color, Color) {
        palette.resolve(self.role)
    }

    pub fn draw(
        &self,
        target: &mut impl DrawTarget,
        palette: &Palette,
        font: FontHandle,
        char_size: u32,
    ) {
        let (fill, text) = self.colors(palette);
        target.fill_rect(self.bounds, &fill);
        target.draw_text(
            &self.label,
            self.bounds.origin(),
            &TextStyle {
                color: text,
                font,
                char_size,
            },
        );
    }
}

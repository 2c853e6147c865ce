use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Which palette pair an option is currently painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Default,
    Highlighted,
    Selected,
}

/// The four colors shared by every option of one selector.
///
/// A palette is replaced as a whole, never edited in place: there are no
/// setters, only [`Palette::new`] and the constructors below. Options keep a
/// [`Role`] and are resolved against the selector's current palette when
/// drawn, so swapping palettes cannot leave a row half-updated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    light: Color,
    dark: Color,
    selected: Color,
    selected_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            Color::rgb(210, 190, 185),
            Color::rgb(40, 70, 60),
            Color::rgb(120, 160, 140),
            Color::rgb(20, 30, 25),
        )
    }
}

impl Palette {
    pub const fn new(light: Color, dark: Color, selected: Color, selected_text: Color) -> Self {
        Self {
            light,
            dark,
            selected,
            selected_text,
        }
    }

    /// Derive all four roles from a single Oklch hue (degrees).
    pub fn from_hue(hue: f32) -> Self {
        let base = Color::oklch(0.55, 0.09, hue);
        Self::new(
            base.lighten(0.33),
            base.darken(0.25),
            base.lighten(0.1),
            base.darken(0.42),
        )
    }

    pub fn light(&self) -> Color {
        self.light
    }

    pub fn dark(&self) -> Color {
        self.dark
    }

    pub fn selected(&self) -> Color {
        self.selected
    }

    pub fn selected_text(&self) -> Color {
        self.selected_text
    }

    /// Resolve a role into its `(fill, text)` pair.
    pub fn resolve(&self, role: Role) -> (Color, Color) {
        match role {
            Role::Default => (self.dark, self.light),
            Role::Highlighted => (self.light, self.dark),
            Role::Selected => (self.selected, self.selected_text),
        }
    }
}

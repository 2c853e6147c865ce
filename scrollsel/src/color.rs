use serde::{Deserialize, Serialize};

/// A color as stored in palettes and configuration.
///
/// Backends only ever see [`Rgb`]; `Oklch` values are converted on demand so
/// palettes can be authored perceptually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8, a: u8 },
    Oklch { l: f32, c: f32, h: f32, a: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgb { r, g, b, a }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    /// Alpha in the 0.0–1.0 range regardless of representation.
    pub fn alpha(&self) -> f32 {
        match self {
            Self::Rgb { a, .. } => *a as f32 / 255.0,
            Self::Oklch { a, .. } => *a,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b, .. } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
        }
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.adjust_lightness(amount)
    }

    pub fn darken(self, amount: f32) -> Self {
        self.adjust_lightness(-amount)
    }

    fn adjust_lightness(self, delta: f32) -> Self {
        let (l, c, h) = self.to_oklch();
        Self::Oklch {
            l: (l + delta).clamp(0.0, 1.0),
            c,
            h,
            a: self.alpha(),
        }
    }

    fn to_oklch(self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h, .. } => (l, c, h),
            Self::Rgb { r, g, b, .. } => rgb_to_oklch(r, g, b),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::rgb(rgb.r, rgb.g, rgb.b)
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{Clamp, IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.clamp().into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

fn rgb_to_oklch(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    use palette::{IntoColor, Oklch, Srgb};

    let srgb = Srgb::new(r, g, b).into_format::<f32>();
    let oklch: Oklch = srgb.into_color();

    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}

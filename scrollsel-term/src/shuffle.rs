//! Random colors for the demo's repaint keys.

use rand::Rng;
use scrollsel::{Color, Palette};

/// Any opaque sRGB color, each channel uniform over 0..=255.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(rng.random(), rng.random(), rng.random())
}

/// A readable palette built around a random hue.
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    Palette::from_hue(rng.random_range(0.0..360.0))
}

/// Four independent random colors. Contrast is not guaranteed.
pub fn random_colors<R: Rng + ?Sized>(rng: &mut R) -> [Color; 4] {
    [
        random_color(rng),
        random_color(rng),
        random_color(rng),
        random_color(rng),
    ]
}

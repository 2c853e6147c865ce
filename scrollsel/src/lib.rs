//! State and geometry engine for a scrollable combo-box selector.
//!
//! The crate owns no window, font or renderer. Hosts feed pointer positions,
//! left clicks and scroll ticks into a [`Selector`] and hand it a
//! [`DrawTarget`] to paint into.

pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod option;
pub mod scrollbar;
pub mod selector;
pub mod theme;
pub mod viewport;

pub use color::{Color, Rgb};
pub use config::{dynamic_option_size, SelectorConfig};
pub use draw::{DrawCommand, DrawTarget, FontHandle, TextStyle};
pub use error::SelectorError;
pub use geometry::{Point, Rect, Size};
pub use option::OptionItem;
pub use scrollbar::Scrollbar;
pub use selector::{ClickOutcome, Mode, Selector};
pub use theme::{Palette, Role};
pub use viewport::{ScrollDirection, Viewport};

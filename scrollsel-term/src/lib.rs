//! Terminal host for [`scrollsel`] selectors.
//!
//! Selectors paint into a [`Buffer`] of cells; [`Terminal`] diffs successive
//! buffers onto the screen and [`input`] turns crossterm events into calls on
//! the selector. One selector unit is one terminal cell.

pub mod buffer;
pub mod error;
pub mod input;
pub mod logging;
pub mod paths;
pub mod settings;
pub mod shuffle;
pub mod terminal;
pub mod text;

pub use buffer::{Buffer, Cell};
pub use error::TermError;
pub use input::{cell_center, dispatch, translate, HostEvent};
pub use settings::DemoSettings;
pub use terminal::Terminal;

//! Maps terminal input onto the selector's three entry points.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use scrollsel::{ClickOutcome, Point, Selector};

/// Input after translation from crossterm, in selector coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The pointer moved (or dragged) to a new cell.
    Pointer(Point),
    /// Left button pressed.
    Click(Point),
    /// Wheel tick; positive scrolls toward the top of the list.
    Scroll { at: Point, delta: f32 },
    /// Repaint with a fresh hue-derived palette.
    ShufflePalette,
    /// Repaint with four unrelated random colors.
    ShuffleColors,
    Resize { width: u16, height: u16 },
    Quit,
    Ignored,
}

/// Center of a terminal cell, so half-open row bounds never tie.
pub fn cell_center(column: u16, row: u16) -> Point {
    Point::new(column as f32 + 0.5, row as f32 + 0.5)
}

pub fn translate(event: &CrosstermEvent) -> HostEvent {
    match event {
        CrosstermEvent::Key(key) => translate_key(key),
        CrosstermEvent::Mouse(mouse) => translate_mouse(mouse),
        CrosstermEvent::Resize(width, height) => HostEvent::Resize {
            width: *width,
            height: *height,
        },
        _ => HostEvent::Ignored,
    }
}

fn translate_key(key: &KeyEvent) -> HostEvent {
    if key.kind != KeyEventKind::Press {
        return HostEvent::Ignored;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => HostEvent::Quit,
        KeyCode::Char('q') | KeyCode::Esc => HostEvent::Quit,
        KeyCode::Char('r') => HostEvent::ShufflePalette,
        KeyCode::Char('c') => HostEvent::ShuffleColors,
        _ => HostEvent::Ignored,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> HostEvent {
    let at = cell_center(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => HostEvent::Pointer(at),
        MouseEventKind::Down(MouseButton::Left) => HostEvent::Click(at),
        MouseEventKind::ScrollUp => HostEvent::Scroll { at, delta: 1.0 },
        MouseEventKind::ScrollDown => HostEvent::Scroll { at, delta: -1.0 },
        _ => HostEvent::Ignored,
    }
}

/// Feed one event to a selector.
///
/// Every pointer-bearing event updates hover first, so a click or wheel tick
/// acts on the row actually under the pointer. Returns the click outcome for
/// clicks and `None` otherwise.
pub fn dispatch<T>(selector: &mut Selector<T>, event: &HostEvent) -> Option<ClickOutcome> {
    match *event {
        HostEvent::Pointer(at) => {
            selector.check_mouse(at);
            None
        }
        HostEvent::Click(at) => {
            selector.check_mouse(at);
            Some(selector.click_left())
        }
        HostEvent::Scroll { at, delta } => {
            selector.check_mouse(at);
            selector.scroll(delta);
            None
        }
        _ => None,
    }
}

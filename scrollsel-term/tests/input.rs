use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use scrollsel::{ClickOutcome, FontHandle, Point, Selector};
use scrollsel_term::{cell_center, dispatch, translate, DemoSettings, HostEvent};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn numbers() -> Selector<i32> {
    // 14x1 rows at (2, 2), four visible rows
    Selector::with_config(
        FontHandle(0),
        (0..8).collect(),
        Point::new(2.0, 2.0),
        DemoSettings::default().selector,
    )
    .unwrap()
}

fn feed(selector: &mut Selector<i32>, event: Event) -> Option<ClickOutcome> {
    dispatch(selector, &translate(&event))
}

// ============================================================================
// Translation
// ============================================================================

#[test]
fn test_cells_map_to_centers() {
    assert_eq!(cell_center(0, 0), Point::new(0.5, 0.5));
    assert_eq!(cell_center(3, 7), Point::new(3.5, 7.5));
}

#[test]
fn test_mouse_translation() {
    assert_eq!(
        translate(&mouse(MouseEventKind::Moved, 4, 1)),
        HostEvent::Pointer(Point::new(4.5, 1.5))
    );
    assert_eq!(
        translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 4, 1)),
        HostEvent::Pointer(Point::new(4.5, 1.5))
    );
    assert_eq!(
        translate(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0)),
        HostEvent::Click(Point::new(0.5, 0.5))
    );
    assert_eq!(
        translate(&mouse(MouseEventKind::ScrollUp, 0, 0)),
        HostEvent::Scroll {
            at: Point::new(0.5, 0.5),
            delta: 1.0
        }
    );
    assert_eq!(
        translate(&mouse(MouseEventKind::ScrollDown, 0, 0)),
        HostEvent::Scroll {
            at: Point::new(0.5, 0.5),
            delta: -1.0
        }
    );
}

#[test]
fn test_other_buttons_are_ignored() {
    assert_eq!(
        translate(&mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
        HostEvent::Ignored
    );
    assert_eq!(
        translate(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)),
        HostEvent::Ignored
    );
}

#[test]
fn test_key_translation() {
    assert_eq!(translate(&key(KeyCode::Char('q'))), HostEvent::Quit);
    assert_eq!(translate(&key(KeyCode::Esc)), HostEvent::Quit);
    assert_eq!(translate(&key(KeyCode::Char('r'))), HostEvent::ShufflePalette);
    assert_eq!(translate(&key(KeyCode::Char('c'))), HostEvent::ShuffleColors);
    assert_eq!(translate(&key(KeyCode::Char('x'))), HostEvent::Ignored);

    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(translate(&ctrl_c), HostEvent::Quit);
}

#[test]
fn test_key_release_is_ignored() {
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('q'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert_eq!(translate(&release), HostEvent::Ignored);
}

#[test]
fn test_resize_translation() {
    assert_eq!(
        translate(&Event::Resize(80, 24)),
        HostEvent::Resize {
            width: 80,
            height: 24
        }
    );
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_click_on_preview_opens() {
    let mut selector = numbers();
    let outcome = feed(&mut selector, mouse(MouseEventKind::Down(MouseButton::Left), 3, 2));
    assert_eq!(outcome, Some(ClickOutcome::Opened));
    assert!(selector.is_open());
}

#[test]
fn test_click_elsewhere_is_ignored() {
    let mut selector = numbers();
    let outcome = feed(&mut selector, mouse(MouseEventKind::Down(MouseButton::Left), 30, 2));
    assert_eq!(outcome, Some(ClickOutcome::Ignored));
    assert!(!selector.is_open());
}

#[test]
fn test_pointer_and_scroll_return_none() {
    let mut selector = numbers();
    assert_eq!(feed(&mut selector, mouse(MouseEventKind::Moved, 3, 2)), None);
    assert_eq!(feed(&mut selector, mouse(MouseEventKind::ScrollDown, 3, 2)), None);
    assert_eq!(feed(&mut selector, key(KeyCode::Char('r'))), None);
}

#[test]
fn test_wheel_then_click_commits_row_under_pointer() {
    let mut selector = numbers();
    feed(&mut selector, mouse(MouseEventKind::Down(MouseButton::Left), 3, 2));

    feed(&mut selector, mouse(MouseEventKind::ScrollDown, 3, 3));
    assert_eq!(selector.viewport().start(), 1);

    // Third visible row is option 3 after one tick
    let outcome = feed(&mut selector, mouse(MouseEventKind::Down(MouseButton::Left), 3, 4));
    assert_eq!(outcome, Some(ClickOutcome::Committed(3)));
    assert_eq!(*selector.selection(), 3);
    assert!(!selector.is_open());
}

#[test]
fn test_wheel_up_at_top_does_nothing() {
    let mut selector = numbers();
    feed(&mut selector, mouse(MouseEventKind::Down(MouseButton::Left), 3, 2));
    feed(&mut selector, mouse(MouseEventKind::ScrollUp, 3, 3));
    assert_eq!(selector.viewport().start(), 0);
}

//! Mapping from terminal events to game input events.

use crate::types::{Direction, InputEvent, KeyInput};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map any terminal event to an input event.
///
/// Key repeats and releases map to [`InputEvent::Other`] so one physical
/// press is exactly one event on every terminal.
pub fn map_event(event: &Event) -> InputEvent {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => InputEvent::Other,
    }
}

/// Map keyboard input to game input.
pub fn handle_key_event(key: KeyEvent) -> InputEvent {
    if is_force_exit(key) {
        return InputEvent::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,

        KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Key(KeyInput::Restart),

        // Cursor
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => InputEvent::CursorMove(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            InputEvent::CursorMove(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            InputEvent::CursorMove(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            InputEvent::CursorMove(Direction::Right)
        }

        KeyCode::Char(' ') | KeyCode::Enter => InputEvent::Activate,

        _ => InputEvent::Key(KeyInput::Other),
    }
}

/// Left button presses become pointer presses; drags, releases, scrolls and
/// other buttons are ignored.
pub fn handle_mouse_event(mouse: MouseEvent) -> InputEvent {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => InputEvent::PointerPress {
            x: mouse.column,
            y: mouse.row,
        },
        _ => InputEvent::Other,
    }
}

/// Ctrl-C leaves the program immediately, whatever the game state.
pub fn is_force_exit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))), InputEvent::Quit);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('Q'))), InputEvent::Quit);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), InputEvent::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputEvent::Quit
        );
    }

    #[test]
    fn test_force_exit_needs_control() {
        assert!(is_force_exit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_force_exit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!is_force_exit(KeyEvent::from(KeyCode::Char('q'))));
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            InputEvent::Key(KeyInput::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            InputEvent::Key(KeyInput::Restart)
        );
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            InputEvent::CursorMove(Direction::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            InputEvent::CursorMove(Direction::Down)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            InputEvent::CursorMove(Direction::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            InputEvent::CursorMove(Direction::Right)
        );
    }

    #[test]
    fn test_activate_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), InputEvent::Activate);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), InputEvent::Activate);
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            InputEvent::Key(KeyInput::Other)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::F(5))),
            InputEvent::Key(KeyInput::Other)
        );
    }

    #[test]
    fn test_left_press_is_pointer_press() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 31, 7)),
            InputEvent::PointerPress { x: 31, y: 7 }
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(handle_mouse_event(mouse(kind, 1, 1)), InputEvent::Other);
        }
    }

    #[test]
    fn test_only_key_presses_count() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(&Event::Key(release)), InputEvent::Other);

        let press = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(map_event(&Event::Key(press)), InputEvent::Quit);
    }

    #[test]
    fn test_resize_and_focus_ignored() {
        assert_eq!(map_event(&Event::Resize(80, 24)), InputEvent::Other);
        assert_eq!(map_event(&Event::FocusGained), InputEvent::Other);
    }
}

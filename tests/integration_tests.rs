//! Integration tests for the game loop: input in, state out.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use quantum_flux::core::GameState;
use quantum_flux::input::map_event;
use quantum_flux::types::{InputEvent, KeyInput, Position, ScreenLayout, GRID_SIZE, SWAP_SCORE};

fn pos(x: u8, y: u8) -> Position {
    Position::new(x, y).unwrap()
}

/// Screen point in the middle of a cell.
fn point(layout: ScreenLayout, p: Position) -> (u16, u16) {
    let (x, y) = layout.cell_origin(p);
    (x + layout.cell_w / 2, y + layout.cell_h / 2)
}

fn click(state: &mut GameState, p: Position) -> bool {
    let (x, y) = point(state.layout(), p);
    state.handle_input(InputEvent::PointerPress { x, y })
}

/// An occupied cell together with an orthogonal neighbour.
fn occupied_with_neighbour(state: &GameState) -> (Position, Position) {
    let from = state.grid().occupied_positions()[0];
    let to = if from.x() + 1 < GRID_SIZE {
        pos(from.x() + 1, from.y())
    } else {
        pos(from.x() - 1, from.y())
    };
    (from, to)
}

#[test]
fn test_game_lifecycle() {
    let state = GameState::new(12345);
    assert_eq!(state.level(), 1);
    assert_eq!(state.score(), 0);
    assert!(!state.game_over());
    assert!(state.selection().is_none());
    assert_eq!(state.grid().occupied_count(), 3);
}

#[test]
fn test_every_seed_deals_level_plus_two() {
    for seed in 0..200 {
        let state = GameState::new(seed);
        assert_eq!(state.grid().occupied_count(), 3, "seed {}", seed);
        assert_eq!(state.grid().empty_count(), 22, "seed {}", seed);
    }
}

#[test]
fn test_click_empty_cell_changes_nothing() {
    let mut state = GameState::new(12345);
    let empty = (0..25)
        .filter_map(Position::from_index)
        .find(|p| !state.grid().is_occupied(*p))
        .unwrap();
    let before = state.grid().clone();

    click(&mut state, empty);

    assert!(state.selection().is_none());
    assert_eq!(state.grid(), &before);
}

#[test]
fn test_adjacent_swap_scores_ten() {
    let mut state = GameState::new(12345);
    let (from, to) = occupied_with_neighbour(&state);
    let moved = state.grid().get(from);
    let displaced = state.grid().get(to);

    assert!(click(&mut state, from));
    assert_eq!(state.selection(), Some(from));
    click(&mut state, to);

    // Level 1 deals an odd number of particles, so a swap can never clear it.
    assert_eq!(state.level(), 1);
    assert_eq!(state.score(), SWAP_SCORE);
    assert_eq!(state.grid().get(to), moved);
    assert_eq!(state.grid().get(from), displaced);
    assert!(state.selection().is_none());
}

#[test]
fn test_far_second_click_only_deselects() {
    let mut state = GameState::new(12345);
    let from = state.grid().occupied_positions()[0];
    let far = pos((from.x() + 2) % GRID_SIZE, (from.y() + 2) % GRID_SIZE);
    let before = state.grid().clone();

    click(&mut state, from);
    click(&mut state, far);

    assert!(state.selection().is_none());
    assert_eq!(state.grid(), &before);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_click_outside_grid_is_ignored() {
    let mut state = GameState::new(12345);
    let from = state.grid().occupied_positions()[0];
    click(&mut state, from);

    let layout = state.layout();
    assert!(!state.handle_input(InputEvent::PointerPress {
        x: layout.origin_x.saturating_sub(1),
        y: layout.origin_y,
    }));
    assert!(!state.handle_input(InputEvent::PointerPress {
        x: layout.origin_x + layout.cell_w * GRID_SIZE as u16,
        y: layout.origin_y,
    }));
    assert_eq!(state.selection(), Some(from));
}

#[test]
fn test_quit_then_restart() {
    let mut state = GameState::new(12345);
    let (from, to) = occupied_with_neighbour(&state);
    click(&mut state, from);
    click(&mut state, to);
    assert_eq!(state.score(), SWAP_SCORE);

    state.handle_input(InputEvent::Quit);
    assert!(state.game_over());

    // Clicks are dead while the game is over.
    assert!(!click(&mut state, to));

    state.handle_input(InputEvent::Key(KeyInput::Restart));
    assert!(!state.game_over());
    assert_eq!(state.level(), 1);
    assert_eq!(state.score(), 0);
    assert!(state.selection().is_none());
    assert_eq!(state.grid().occupied_count(), 3);
}

#[test]
fn test_restart_key_ignored_while_playing() {
    let mut state = GameState::new(12345);
    let before = state.snapshot();
    assert!(!state.handle_input(InputEvent::Key(KeyInput::Restart)));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_terminal_events_drive_the_game() {
    let mut state = GameState::new(12345);
    let (from, to) = occupied_with_neighbour(&state);

    for target in [from, to] {
        let (column, row) = point(state.layout(), target);
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        state.handle_input(map_event(&ev));
    }
    assert_eq!(state.score(), SWAP_SCORE);

    let quit = Event::Key(KeyEvent::from(KeyCode::Char('q')));
    state.handle_input(map_event(&quit));
    assert!(state.game_over());

    let restart = Event::Key(KeyEvent::from(KeyCode::Char('r')));
    state.handle_input(map_event(&restart));
    assert!(!state.game_over());
    assert_eq!(state.score(), 0);
}

/// Walk the cursor to `target` with arrow keys.
fn steer(state: &mut GameState, target: Position) {
    while state.cursor() != target {
        let c = state.cursor();
        let code = if c.x() < target.x() {
            KeyCode::Right
        } else if c.x() > target.x() {
            KeyCode::Left
        } else if c.y() < target.y() {
            KeyCode::Down
        } else {
            KeyCode::Up
        };
        state.handle_input(map_event(&Event::Key(KeyEvent::from(code))));
    }
}

#[test]
fn test_keyboard_cursor_flow() {
    let mut state = GameState::new(12345);
    let (from, to) = occupied_with_neighbour(&state);

    steer(&mut state, from);
    state.handle_input(map_event(&Event::Key(KeyEvent::from(KeyCode::Char(' ')))));
    assert_eq!(state.selection(), Some(from));

    steer(&mut state, to);
    state.handle_input(map_event(&Event::Key(KeyEvent::from(KeyCode::Enter))));
    assert_eq!(state.score(), SWAP_SCORE);
    assert!(state.selection().is_none());
}

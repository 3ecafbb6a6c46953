//! Game state module - manages the complete game state
//!
//! Ties together the grid, the random source and the interaction state
//! (selection, keyboard cursor), and runs the click/swap/win state machine.

use tracing::{debug, info, warn};

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    /// Cell awaiting a second click. Always occupied when set.
    selection: Option<Position>,
    /// Keyboard cursor; `Activate` clicks here.
    cursor: Position,
    level: u32,
    score: u32,
    game_over: bool,
    /// Number of completed restarts.
    restarts: u32,
    /// Screen mapping for pointer input, owned by the frontend.
    layout: ScreenLayout,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed and set up level 1
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            selection: None,
            cursor: Position::centre(),
            level: STARTING_LEVEL,
            score: 0,
            game_over: false,
            restarts: 0,
            layout: ScreenLayout::default(),
            rng: SimpleRng::new(seed),
        };
        state.setup_level();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn layout(&self) -> ScreenLayout {
        self.layout
    }

    /// Update the screen mapping used to resolve pointer presses.
    ///
    /// The frontend calls this whenever the viewport changes.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = layout;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid.to_rows();
        out.selection = self.selection;
        out.cursor = self.cursor;
        out.level = self.level;
        out.score = self.score;
        out.game_over = self.game_over;
        out.restarts = self.restarts;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Clear the grid and place `level + 2` particles at distinct random cells.
    pub fn setup_level(&mut self) {
        self.grid.clear();

        let count = particles_for_level(self.level);
        let wanted = u64::from(self.level) + u64::from(EXTRA_PARTICLES);
        if (count as u64) < wanted {
            warn!(
                level = self.level,
                wanted,
                placed = count,
                "level asks for more particles than cells"
            );
        }

        for _ in 0..count {
            let Some(pos) = self.random_free_cell() else {
                break;
            };
            let Some(kind) = self.rng.choose(&ParticleKind::ALL) else {
                break;
            };
            self.grid.set(pos, Some(kind));
        }

        debug!(
            level = self.level,
            particles = self.grid.occupied_count(),
            counts = ?self.grid.counts(),
            "level set up"
        );
    }

    /// Rejection-sample an empty cell, falling back to a wrapping scan from a
    /// random start once the attempt budget runs out.
    fn random_free_cell(&mut self) -> Option<Position> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let x = self.rng.next_range(GRID_SIZE as u32) as u8;
            let y = self.rng.next_range(GRID_SIZE as u32) as u8;
            if let Some(pos) = Position::new(x, y) {
                if !self.grid.is_occupied(pos) {
                    return Some(pos);
                }
            }
        }

        let start = self.rng.next_range(CELL_COUNT as u32) as usize;
        self.grid.first_free_from(start)
    }

    /// True iff every particle kind occurs an even number of times.
    ///
    /// Kinds that do not occur at all count as even.
    pub fn check_win_condition(&self) -> bool {
        self.grid.counts().iter().all(|count| count % 2 == 0)
    }

    /// Exchange two cells. No adjacency check; callers enforce that.
    pub fn swap_particles(&mut self, a: Position, b: Position) {
        self.grid.swap(a, b);
    }

    /// Reinitialise every gameplay field and set up a fresh level 1.
    ///
    /// The random source and screen layout carry over.
    pub fn reset(&mut self) {
        self.level = STARTING_LEVEL;
        self.score = 0;
        self.game_over = false;
        self.selection = None;
        self.cursor = Position::centre();
        self.restarts = self.restarts.wrapping_add(1);
        self.setup_level();
        info!(restarts = self.restarts, "game restarted");
    }

    /// Apply an input event.
    ///
    /// Returns true if the event changed the state.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit => {
                if !self.game_over {
                    info!(score = self.score, level = self.level, "game over");
                }
                self.game_over = true;
                true
            }
            InputEvent::PointerPress { x, y } if !self.game_over => {
                match self.layout.cell_at(x, y) {
                    Some(pos) => {
                        self.cursor = pos;
                        self.click_cell(pos);
                        true
                    }
                    None => false,
                }
            }
            InputEvent::CursorMove(dir) if !self.game_over => {
                let next = self.cursor.step(dir);
                let moved = next != self.cursor;
                self.cursor = next;
                moved
            }
            InputEvent::Activate if !self.game_over => self.click_cell(self.cursor),
            InputEvent::Key(KeyInput::Restart) if self.game_over => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// One click on a grid cell: select, or complete/cancel a swap.
    fn click_cell(&mut self, pos: Position) -> bool {
        let Some(selected) = self.selection.take() else {
            if self.grid.is_occupied(pos) {
                self.selection = Some(pos);
                return true;
            }
            return false;
        };

        if selected.is_adjacent(pos) {
            self.swap_particles(selected, pos);
            self.score += SWAP_SCORE;

            if self.check_win_condition() {
                self.level += 1;
                self.score += LEVEL_CLEAR_BONUS;
                info!(level = self.level, score = self.score, "level cleared");
                self.setup_level();
            }
        }

        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

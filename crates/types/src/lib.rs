//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 5 columns x 5 rows (indexed 0-4 on both axes)
//! - **Cells**: 25 in total
//! - **Cursor start**: (2, 2), the centre cell
//!
//! # Scoring and Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SWAP_SCORE` | 10 | Awarded for every adjacent swap |
//! | `LEVEL_CLEAR_BONUS` | 100 | Awarded when a swap satisfies the win condition |
//! | `STARTING_LEVEL` | 1 | Level after construction or restart |
//! | `EXTRA_PARTICLES` | 2 | A level places `level + 2` particles |
//!
//! # Frame Timing
//!
//! - `TARGET_FPS`: 60 frames per second (the binary's `--fps` default)
//!
//! # Examples
//!
//! ```
//! use quantum_flux_types::{ParticleKind, Position, GRID_SIZE};
//!
//! // Each kind is labelled by its initial
//! assert_eq!(ParticleKind::Electron.letter(), 'E');
//! assert_eq!(ParticleKind::ALL.len(), 3);
//!
//! // Positions are always inside the grid
//! let a = Position::new(2, 2).unwrap();
//! let b = Position::new(2, 3).unwrap();
//! assert!(a.is_adjacent(b));
//! assert!(Position::new(GRID_SIZE, 0).is_none());
//! ```

/// Grid side length in cells (5 columns, 5 rows)
pub const GRID_SIZE: u8 = 5;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Points for every adjacent swap
pub const SWAP_SCORE: u32 = 10;

/// Bonus points when a swap clears the level
pub const LEVEL_CLEAR_BONUS: u32 = 100;

/// Level a fresh game starts on
pub const STARTING_LEVEL: u32 = 1;

/// Particles placed per level on top of the level number
pub const EXTRA_PARTICLES: u32 = 2;

/// Rejection-sampling attempts per particle before falling back to a scan
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Target frame rate of the presentation loop
pub const TARGET_FPS: u32 = 60;

/// Number of particles a level places.
///
/// Clamped to the cell count so placement always terminates, even though
/// levels that large are never reached in play.
pub fn particles_for_level(level: u32) -> usize {
    let wanted = level.saturating_add(EXTRA_PARTICLES) as usize;
    wanted.min(CELL_COUNT)
}


/// The three particle kinds a grid cell can hold
///
/// Each kind has a distinct colour and initial letter when drawn:
/// - **Electron**: blue, `E`
/// - **Proton**: red, `P`
/// - **Neutron**: green, `N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Electron,
    Proton,
    Neutron,
}

impl ParticleKind {
    /// All kinds, in a fixed order (used for uniform random choice and counting)
    pub const ALL: [ParticleKind; 3] = [
        ParticleKind::Electron,
        ParticleKind::Proton,
        ParticleKind::Neutron,
    ];

    /// Initial letter used as the on-grid label
    ///
    /// # Examples
    ///
    /// ```
    /// use quantum_flux_types::ParticleKind;
    ///
    /// assert_eq!(ParticleKind::Proton.letter(), 'P');
    /// ```
    pub fn letter(&self) -> char {
        match self {
            ParticleKind::Electron => 'E',
            ParticleKind::Proton => 'P',
            ParticleKind::Neutron => 'N',
        }
    }

    /// Stable index into [`ParticleKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ParticleKind::Electron => 0,
            ParticleKind::Proton => 1,
            ParticleKind::Neutron => 2,
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(ParticleKind)`: Cell holding the specified particle
pub type Cell = Option<ParticleKind>;

/// A grid coordinate, always inside `[0, GRID_SIZE)` on both axes
///
/// `x` is the column (left to right), `y` the row (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Create a position, or `None` if either axis is outside the grid
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Position from a row-major flat index
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let side = GRID_SIZE as usize;
        Some(Self {
            x: (index % side) as u8,
            y: (index / side) as u8,
        })
    }

    /// The grid centre, where the keyboard cursor starts
    pub fn centre() -> Self {
        Self {
            x: GRID_SIZE / 2,
            y: GRID_SIZE / 2,
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Row-major flat index (y * GRID_SIZE + x)
    #[inline(always)]
    pub fn index(&self) -> usize {
        (self.y as usize) * (GRID_SIZE as usize) + (self.x as usize)
    }

    /// Manhattan (taxicab) distance between two positions
    pub fn manhattan_distance(&self, other: Position) -> u8 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Orthogonal neighbours only; diagonals are never adjacent
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Move one cell in `dir`, staying put at the grid edge
    pub fn step(&self, dir: Direction) -> Self {
        let last = GRID_SIZE - 1;
        match dir {
            Direction::Up => Self {
                y: self.y.saturating_sub(1),
                ..*self
            },
            Direction::Down => Self {
                y: (self.y + 1).min(last),
                ..*self
            },
            Direction::Left => Self {
                x: self.x.saturating_sub(1),
                ..*self
            },
            Direction::Right => Self {
                x: (self.x + 1).min(last),
                ..*self
            },
        }
    }
}

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// 24-bit RGB color.
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

/// Where the grid sits on screen, in screen units (terminal columns/rows)
///
/// This is the `gridOffset` / `cellSize` pair used both for drawing and for
/// mapping pointer coordinates back to grid positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: u16,
    pub height: u16,
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl ScreenLayout {
    /// Centre a `GRID_SIZE` x `GRID_SIZE` grid of `cell_w` x `cell_h` cells
    pub fn centered(width: u16, height: u16, cell_w: u16, cell_h: u16) -> Self {
        let grid_w = (GRID_SIZE as u16).saturating_mul(cell_w);
        let grid_h = (GRID_SIZE as u16).saturating_mul(cell_h);
        Self {
            width,
            height,
            origin_x: width.saturating_sub(grid_w) / 2,
            origin_y: height.saturating_sub(grid_h) / 2,
            cell_w,
            cell_h,
        }
    }

    /// Map a screen coordinate to a grid position.
    ///
    /// Uses floor division, so points left of or above the origin land on
    /// negative cells and are rejected.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        let cw = self.cell_w.max(1) as i32;
        let ch = self.cell_h.max(1) as i32;
        let gx = (x as i32 - self.origin_x as i32).div_euclid(cw);
        let gy = (y as i32 - self.origin_y as i32).div_euclid(ch);
        let side = GRID_SIZE as i32;
        if !(0..side).contains(&gx) || !(0..side).contains(&gy) {
            return None;
        }
        Position::new(gx as u8, gy as u8)
    }

    /// Top-left screen coordinate of a cell
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.origin_x
                .saturating_add((pos.x() as u16).saturating_mul(self.cell_w)),
            self.origin_y
                .saturating_add((pos.y() as u16).saturating_mul(self.cell_h)),
        )
    }
}

impl Default for ScreenLayout {
    /// An 80x24 screen with 8x4 cells, the terminal frontend's default
    fn default() -> Self {
        Self::centered(80, 24, 8, 4)
    }
}

/// Key presses the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Restart after game over
    Restart,
    /// Any other key
    Other,
}

/// Input events consumed by the game state machine
///
/// These are produced by the terminal input mapper, but tests and other
/// frontends can construct them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / quit request
    Quit,
    /// Primary pointer button pressed at absolute screen coordinates
    PointerPress { x: u16, y: u16 },
    /// A key press
    Key(KeyInput),
    /// Move the keyboard cursor one cell
    CursorMove(Direction),
    /// Click the cell under the keyboard cursor
    Activate,
    /// Anything else (resize, focus, mouse motion, ...)
    Other,
}

use crate::types::{Cell, Position, GRID_SIZE, STARTING_LEVEL};

const SIDE: usize = GRID_SIZE as usize;

/// Plain copy of everything a frontend or test can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// `grid[y][x]`
    pub grid: [[Cell; SIDE]; SIDE],
    pub selection: Option<Position>,
    pub cursor: Position,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub restarts: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; SIDE]; SIDE],
            selection: None,
            cursor: Position::centre(),
            score: 0,
            level: STARTING_LEVEL,
            game_over: false,
            restarts: 0,
        }
    }
}

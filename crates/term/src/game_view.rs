//! GameView: terminal geometry for the particle grid.
//!
//! Decides how big a grid cell is in terminal columns/rows and where the grid
//! sits in the viewport. The resulting [`ScreenLayout`] drives both drawing
//! and mouse hit-testing in the core. This module is pure (no I/O).

use crate::core::GameState;
use crate::types::{ScreenLayout, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows reserved above the grid for the score and level lines.
const HUD_ROWS: u16 = 2;

/// Layout policy for the terminal frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 8,
            cell_h: 4,
        }
    }
}

impl GameView {
    /// Screen layout for a viewport.
    ///
    /// The grid is centred on both axes, but never overlaps the HUD rows
    /// while there is room below them.
    pub fn layout(&self, viewport: Viewport) -> ScreenLayout {
        let mut layout =
            ScreenLayout::centered(viewport.width, viewport.height, self.cell_w, self.cell_h);

        let grid_h = (GRID_SIZE as u16).saturating_mul(self.cell_h);
        let free_below_hud = viewport.height.saturating_sub(HUD_ROWS);
        if layout.origin_y < HUD_ROWS {
            layout.origin_y = if free_below_hud >= grid_h { HUD_ROWS } else { 0 };
        }
        layout
    }

    /// Push the layout for `viewport` into the game so pointer presses are
    /// resolved against what is on screen.
    pub fn apply(&self, game: &mut GameState, viewport: Viewport) -> ScreenLayout {
        let layout = self.layout(viewport);
        if game.layout() != layout {
            game.set_layout(layout);
        }
        layout
    }
}

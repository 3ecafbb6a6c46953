//! Rendering seam: the drawing primitives the game needs, and the fixed
//! per-frame sequence that projects a [`GameState`] onto them.
//!
//! The core never touches pixels or terminal cells directly. Frontends
//! implement [`Surface`]; `quantum-flux-term` does so for a character
//! framebuffer.

use crate::game_state::GameState;
use crate::types::{ParticleKind, Position, Rgb, GRID_SIZE};

/// Columns left blank between neighbouring cell borders.
pub const CELL_GAP: u16 = 1;

pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
pub const BORDER: Rgb = Rgb::new(255, 255, 255);
pub const SELECTED_BORDER: Rgb = Rgb::new(255, 220, 64);
pub const CURSOR_BORDER: Rgb = Rgb::new(64, 220, 255);
pub const TEXT: Rgb = Rgb::new(255, 255, 255);
pub const HELP_TEXT: Rgb = Rgb::new(140, 140, 150);

pub const GAME_OVER_PROMPT: &str = "Game Over! Press R to Restart";

const HELP_PLAYING: &str = "click or arrows+space: swap neighbours | q: quit";
const HELP_GAME_OVER: &str = "r: restart | q: exit";

/// Marker colour per particle kind.
pub fn particle_color(kind: ParticleKind) -> Rgb {
    match kind {
        ParticleKind::Electron => Rgb::new(0, 128, 255),
        ParticleKind::Proton => Rgb::new(255, 64, 64),
        ParticleKind::Neutron => Rgb::new(64, 255, 64),
    }
}

/// Axis-aligned rectangle in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: u16, dy: u16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            w: self.w.saturating_sub(dx.saturating_mul(2)),
            h: self.h.saturating_sub(dy.saturating_mul(2)),
        }
    }

    /// Centre point, rounded towards the top-left.
    pub fn centre(&self) -> (u16, u16) {
        (
            self.x.saturating_add(self.w.saturating_sub(1) / 2),
            self.y.saturating_add(self.h.saturating_sub(1) / 2),
        )
    }
}

/// Drawing collaborator.
///
/// Coordinates are in the same units as [`crate::types::ScreenLayout`].
/// Anything drawn outside the surface is clipped by the implementation.
pub trait Surface {
    type Error;

    /// Wipe the whole surface to `color`.
    fn clear(&mut self, color: Rgb);

    /// One-unit outline of `rect`.
    fn draw_rect(&mut self, rect: Rect, color: Rgb);

    /// Filled particle marker inside `bounds`.
    fn fill_marker(&mut self, bounds: Rect, color: Rgb);

    /// Left-aligned single-line text starting at (x, y).
    fn draw_text(&mut self, x: u16, y: u16, text: &str, color: Rgb);

    /// Width `text` occupies when drawn.
    fn text_width(&self, text: &str) -> u16 {
        text.chars().count() as u16
    }

    /// Show the finished frame.
    fn present(&mut self) -> Result<(), Self::Error>;
}

impl GameState {
    /// Screen rectangle of a cell's border.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        let layout = self.layout();
        let (x, y) = layout.cell_origin(pos);
        Rect::new(x, y, layout.cell_w.saturating_sub(CELL_GAP), layout.cell_h)
    }

    /// Draw the whole frame and present it. Reads state only.
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let layout = self.layout();
        surface.clear(BACKGROUND);

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let Some(pos) = Position::new(x, y) else {
                    continue;
                };
                // Highlights only while playing.
                let playing = !self.game_over();
                let border = if playing && self.selection() == Some(pos) {
                    SELECTED_BORDER
                } else if playing && self.cursor() == pos {
                    CURSOR_BORDER
                } else {
                    BORDER
                };
                surface.draw_rect(self.cell_rect(pos), border);
            }
        }

        for pos in self.grid().occupied_positions() {
            let Some(kind) = self.grid().get(pos) else {
                continue;
            };
            let marker = self.cell_rect(pos).inset(2, 1);
            surface.fill_marker(marker, particle_color(kind));
            let (cx, cy) = marker.centre();
            let mut label = [0u8; 4];
            surface.draw_text(cx, cy, kind.letter().encode_utf8(&mut label), TEXT);
        }

        surface.draw_text(1, 0, &format!("Score: {}", self.score()), TEXT);
        surface.draw_text(1, 1, &format!("Level: {}", self.level()), TEXT);

        let help = if self.game_over() {
            HELP_GAME_OVER
        } else {
            HELP_PLAYING
        };
        surface.draw_text(1, layout.height.saturating_sub(1), help, HELP_TEXT);

        if self.game_over() {
            let w = surface.text_width(GAME_OVER_PROMPT);
            let x = layout.width.saturating_sub(w) / 2;
            surface.draw_text(x, layout.height / 2, GAME_OVER_PROMPT, TEXT);
        }

        surface.present()
    }
}

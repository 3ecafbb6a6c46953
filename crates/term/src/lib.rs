//! Terminal frontend for the particle grid.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout frameworks and instead renders into a simple
//! framebuffer that is flushed to the terminal as a diff.
//!
//! Pieces:
//! - [`fb`]: styled character framebuffer, usable off-screen as a core `Surface`
//! - [`game_view`]: viewport → grid layout (cell size, origin)
//! - [`renderer`]: terminal mode switching and diff encoding
//! - [`surface`]: framebuffer + renderer as the live `Surface`

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use quantum_flux_core as core;
pub use quantum_flux_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::TerminalSurface;

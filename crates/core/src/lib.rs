//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and the rendering
//! seam. It has **no dependencies** on terminals, windows, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical layouts
//! - **Testable**: Unit tests for every rule and transition
//! - **Portable**: Any frontend that implements [`Surface`] can draw it
//!
//! # Module Structure
//!
//! - [`grid`]: 5x5 particle field with swap and per-kind counting
//! - [`game_state`]: selection/swap/win state machine, levels and scoring
//! - [`render`]: the [`Surface`] drawing trait and the per-frame draw sequence
//! - [`rng`]: small seeded LCG used for particle placement
//! - [`snapshot`]: copyable view of observable state
//!
//! # Game Rules
//!
//! - **Setup**: level `L` places `L + 2` particles on distinct random cells,
//!   each a random Electron, Proton or Neutron
//! - **Select**: click an occupied cell
//! - **Swap**: click an orthogonal neighbour of the selection (+10 points);
//!   any other second click just cancels the selection
//! - **Win**: after a swap, if every kind occurs an even number of times the
//!   level advances (+100 points) and a fresh grid is dealt
//! - **Game over**: a quit request; `R` restarts from level 1
//!
//! # Example
//!
//! ```
//! use quantum_flux_core::GameState;
//! use quantum_flux_types::{InputEvent, KeyInput};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.level(), 1);
//! assert_eq!(game.grid().occupied_count(), 3);
//!
//! game.handle_input(InputEvent::Quit);
//! assert!(game.game_over());
//!
//! game.handle_input(InputEvent::Key(KeyInput::Restart));
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod game_state;
pub mod grid;
pub mod render;
pub mod rng;
pub mod snapshot;

pub use quantum_flux_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use render::{particle_color, Rect, Surface};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;

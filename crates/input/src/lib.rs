//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm`'s event types. It maps key and mouse events into
//! [`crate::types::InputEvent`], the only input vocabulary the game core knows.

pub mod map;

pub use quantum_flux_types as types;

pub use map::{handle_key_event, handle_mouse_event, is_force_exit, map_event};

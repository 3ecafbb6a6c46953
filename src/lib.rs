//! Quantum Flux (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, integration
//! tests and benches can use `quantum_flux::{core, input, term, types}`.

pub use quantum_flux_core as core;
pub use quantum_flux_input as input;
pub use quantum_flux_term as term;
pub use quantum_flux_types as types;

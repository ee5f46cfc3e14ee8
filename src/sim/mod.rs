//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed particle speed
//! - Stable iteration order (particles by creation id, cells row-major)
//! - No rendering or platform dependencies

pub mod board;
pub mod explosion;
pub mod layout;
pub mod particle;
pub mod rules;
pub mod state;
pub mod tick;

pub use board::{Board, Cell};
pub use explosion::explode;
pub use layout::Layout;
pub use particle::{Particle, ParticleSystem, ParticleUpdate};
pub use rules::{Evaluation, decided_winner, evaluate};
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, resolve_turn, submit_move, tick};

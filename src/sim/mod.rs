//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, timestamps supplied by the caller
//! - No randomness
//! - Stable obstacle order (oldest first)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, count_overlaps};
pub use state::{Backdrop, GameEvent, GamePhase, GameState, JumpState, Obstacle, Player};
pub use tick::{LoopControl, TickInput, tick};

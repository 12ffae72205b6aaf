//! Jump Runner - An endless side-scrolling jump arcade game
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (physics, obstacles, scoring)
//! - `renderer`: Drawing-surface abstraction and scene painter
//! - `platform`: Key mapping and the headless frame driver
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical drawing surface size
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    /// Player box; x never changes
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;

    /// Top edge of the player when standing on the ground
    pub const GROUND_Y: f32 = SURFACE_HEIGHT - PLAYER_HEIGHT;

    /// Obstacle box
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HEIGHT: f32 = 30.0;
    /// Top edge of every obstacle (they all sit on the ground)
    pub const OBSTACLE_Y: f32 = SURFACE_HEIGHT - OBSTACLE_HEIGHT;

    /// Distance past the right edge where new obstacles appear
    pub const SPAWN_LEAD_IN: f32 = 200.0;

    /// Cloud cluster extent used for wrapping (three puffs, 80px apart)
    pub const CLOUD_SPAN: f32 = 200.0;
    pub const CLOUD_Y: f32 = 50.0;
    pub const CLOUD_PUFF_RADIUS: f32 = 50.0;
    pub const CLOUD_PUFF_SPACING: f32 = 80.0;

    /// Sun position and size
    pub const SUN_X: f32 = SURFACE_WIDTH - 100.0;
    pub const SUN_Y: f32 = 100.0;
    pub const SUN_RADIUS: f32 = 40.0;
}

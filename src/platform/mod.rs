//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (DOM key identifiers)
//! - Frame scheduling (headless clock natively)
//! - Event logging shared by both drivers

pub mod headless;
pub mod input;

pub use headless::{FrameClock, HeadlessRunner, RunSummary};
pub use input::{Key, queue_key};

use crate::sim::{GameEvent, GameState};

/// Drain and log the events the last tick produced. A game over also dumps
/// the session snapshot at `debug`.
pub fn log_events(state: &mut GameState) {
    let events = state.drain_events();
    for event in &events {
        match event {
            GameEvent::Jumped | GameEvent::DoubleJumped | GameEvent::Landed => {
                log::trace!("{:?}", event)
            }
            GameEvent::ObstacleSpawned { interval_ms } => {
                log::debug!("Obstacle spawned (next interval {} ms)", interval_ms)
            }
            GameEvent::SpeedIncreased { speed } => log::info!("Speed up: {:.1}", speed),
            GameEvent::GameOver { score, hits } => {
                log::info!("Game over with score {} ({} obstacle(s) hit)", score, hits)
            }
            GameEvent::Restarted => log::info!("Game restarted"),
        }
    }

    let ended = events
        .iter()
        .any(|e| matches!(e, GameEvent::GameOver { .. }));
    if ended && log::log_enabled!(log::Level::Debug) {
        match state.snapshot_json() {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Could not encode state snapshot: {}", e),
        }
    }
}

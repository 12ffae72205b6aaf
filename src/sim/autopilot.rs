//! Idle/demo mode: jump automatically when an obstacle gets close

use super::state::{GameState, JumpState};

/// Frames of warning the autopilot wants before an obstacle reaches the player
const REACTION_FRAMES: f32 = 14.0;
/// Extra slack so slow runs still jump early enough
const REACTION_MARGIN: f32 = 12.0;

/// Decide whether the autopilot should press Jump this frame
pub fn wants_jump(state: &GameState) -> bool {
    if state.player.jump != JumpState::Grounded {
        return false;
    }

    let player_right = state.player.pos.x + state.player.size.x;
    let reach = state.speed * REACTION_FRAMES + REACTION_MARGIN;

    // Nearest obstacle that hasn't passed the player's front edge yet
    state
        .obstacles
        .iter()
        .map(|o| o.pos.x - player_right)
        .filter(|gap| *gap >= 0.0)
        .fold(None, |nearest: Option<f32>, gap| {
            Some(nearest.map_or(gap, |n| n.min(gap)))
        })
        .is_some_and(|gap| gap <= reach)
}

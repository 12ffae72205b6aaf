//! Per-frame simulation tick
//!
//! Core game loop that advances the run one display frame at a time.

use super::autopilot;
use super::collision::count_overlaps;
use super::state::{GameEvent, GamePhase, GameState, Obstacle};

/// Input gathered between two frames, applied at the start of the next one
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump presses received since the last frame, in order
    pub jumps: u32,
    /// Restart pressed (ignored unless the run is over)
    pub restart: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    /// Clear one-shot inputs after a frame consumed them
    pub fn clear_presses(&mut self) {
        self.jumps = 0;
        self.restart = false;
    }
}

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Request another animation frame
    Continue,
    /// Stop scheduling; the run is over
    Stop,
}

/// Advance the game state by one frame. `now_ms` is the scheduler timestamp.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> LoopControl {
    if input.restart && state.phase == GamePhase::GameOver {
        state.restart();
    }

    if state.phase == GamePhase::GameOver {
        return LoopControl::Stop;
    }

    // First frame of a run anchors both timers
    state.last_spawn_ms.get_or_insert(now_ms);
    state.last_score_ms.get_or_insert(now_ms);

    state.frame += 1;

    apply_jumps(state, input);

    let tuning = &state.tuning;
    state.backdrop.scroll(tuning);

    if state.player.integrate(tuning.gravity) {
        state.events.push(GameEvent::Landed);
    }

    advance_obstacles(state);
    spawn_obstacles(state, now_ms);

    let hits = check_collisions(state);
    if hits > 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            score: state.score,
            hits,
        });
        return LoopControl::Stop;
    }

    update_score(state, now_ms);
    apply_difficulty(state);

    LoopControl::Continue
}

/// Apply queued Jump presses (and the autopilot's, in idle mode)
fn apply_jumps(state: &mut GameState, input: &TickInput) {
    let mut presses = input.jumps;
    if input.idle_mode && autopilot::wants_jump(state) {
        presses += 1;
    }

    for _ in 0..presses {
        if let Some(event) = state.player.try_jump(&state.tuning) {
            state.events.push(event);
        }
    }
}

/// Scroll obstacles left and drop the ones that have fully left the surface
pub fn advance_obstacles(state: &mut GameState) {
    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }
    state.obstacles.retain(|o| !o.is_off_screen());
}

/// Spawn an obstacle once the current interval has elapsed, then tighten the
/// interval toward its floor
pub fn spawn_obstacles(state: &mut GameState, now_ms: f64) {
    let last = state.last_spawn_ms.unwrap_or(now_ms);
    if now_ms - last <= state.spawn_interval_ms {
        return;
    }

    state.obstacles.push(Obstacle::spawn());
    state.last_spawn_ms = Some(now_ms);

    let tuning = &state.tuning;
    state.spawn_interval_ms = (state.spawn_interval_ms - tuning.spawn_interval_step_ms)
        .max(tuning.min_spawn_interval_ms);

    state.events.push(GameEvent::ObstacleSpawned {
        interval_ms: state.spawn_interval_ms,
    });
}

/// Number of obstacles the player overlaps this frame
pub fn check_collisions(state: &GameState) -> usize {
    count_overlaps(&state.player.rect(), state.obstacles.iter().map(Obstacle::rect))
}

/// Add a point once the score interval has elapsed
pub fn update_score(state: &mut GameState, now_ms: f64) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let last = state.last_score_ms.unwrap_or(now_ms);
    if now_ms - last > state.tuning.score_interval_ms {
        state.score += 1;
        state.last_score_ms = Some(now_ms);
    }
}

/// Step the scroll speed up once each time the score crosses a multiple of
/// `speed_step_score`
pub fn apply_difficulty(state: &mut GameState) {
    let step_score = state.tuning.speed_step_score;
    if state.score > 0
        && state.score.is_multiple_of(step_score)
        && state.score != state.last_speedup_score
    {
        state.speed += state.tuning.speed_step;
        state.last_speedup_score = state.score;
        state.events.push(GameEvent::SpeedIncreased { speed: state.speed });
    }
}

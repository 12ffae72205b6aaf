//! Game state and core simulation types
//!
//! Everything a run mutates lives in `GameState`; a restart rebuilds it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, the driver keeps requesting frames
    Running,
    /// Run ended, waiting for Restart
    GameOver,
}

/// Player jump state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpState {
    #[default]
    Grounded,
    Jumping,
    /// Second jump used; no more jumps until landing
    DoubleJumping,
}

/// Things that happened during a tick, drained by the driver for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Jumped,
    DoubleJumped,
    Landed,
    ObstacleSpawned { interval_ms: f64 },
    SpeedIncreased { speed: f32 },
    GameOver { score: u64, hits: usize },
    Restarted,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x is fixed for the whole run
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity, positive is upward
    pub velocity: f32,
    pub jump: JumpState,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity: 0.0,
            jump: JumpState::Grounded,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_airborne(&self) -> bool {
        self.jump != JumpState::Grounded
    }

    /// Handle a Jump press. Returns the event if the press did anything.
    pub fn try_jump(&mut self, tuning: &Tuning) -> Option<GameEvent> {
        match self.jump {
            JumpState::Grounded => {
                self.jump = JumpState::Jumping;
                self.velocity = tuning.jump_strength;
                Some(GameEvent::Jumped)
            }
            JumpState::Jumping => {
                self.jump = JumpState::DoubleJumping;
                self.velocity = tuning.double_jump_strength;
                Some(GameEvent::DoubleJumped)
            }
            JumpState::DoubleJumping => None,
        }
    }

    /// Integrate one frame of gravity. Returns true on the landing frame.
    pub fn integrate(&mut self, gravity: f32) -> bool {
        if !self.is_airborne() {
            return false;
        }

        self.velocity -= gravity;
        self.pos.y -= self.velocity;

        if self.pos.y >= GROUND_Y {
            self.pos.y = GROUND_Y;
            self.velocity = 0.0;
            self.jump = JumpState::Grounded;
            return true;
        }
        false
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// New obstacle at the spawn point past the right edge
    pub fn spawn() -> Self {
        Self::at(SURFACE_WIDTH + SPAWN_LEAD_IN)
    }

    pub fn at(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, OBSTACLE_Y),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Right edge has passed the left edge of the surface
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Decorative scroll offsets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backdrop {
    /// Sky band offset, wraps to 0
    pub band_x: f32,
    /// Left puff of the cloud cluster, wraps to the surface width
    pub cloud_x: f32,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            band_x: 0.0,
            cloud_x: SURFACE_WIDTH,
        }
    }
}

impl Backdrop {
    pub fn scroll(&mut self, tuning: &Tuning) {
        self.band_x -= tuning.band_scroll_speed;
        if self.band_x + SURFACE_WIDTH <= 0.0 {
            self.band_x = 0.0;
        }

        self.cloud_x -= tuning.cloud_scroll_speed;
        if self.cloud_x + CLOUD_SPAN <= 0.0 {
            self.cloud_x = SURFACE_WIDTH;
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values this run was built with (kept across restarts)
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles, oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
    pub backdrop: Backdrop,
    pub score: u64,
    /// Obstacle scroll speed (px/frame)
    pub speed: f32,
    /// Current spawn interval (ms)
    pub spawn_interval_ms: f64,
    /// Timestamp of the last spawn; `None` until the first tick anchors it
    pub last_spawn_ms: Option<f64>,
    /// Timestamp of the last score increment; `None` until the first tick
    pub last_score_ms: Option<f64>,
    /// Score at which the last speed step fired
    pub last_speedup_score: u64,
    /// Frames simulated this run
    pub frame: u64,
    /// Events produced since the driver last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Running,
            player: Player::default(),
            obstacles: Vec::new(),
            backdrop: Backdrop::default(),
            score: 0,
            speed: tuning.start_speed,
            spawn_interval_ms: tuning.spawn_interval_ms,
            last_spawn_ms: None,
            last_score_ms: None,
            last_speedup_score: 0,
            frame: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Reset everything except tuning and start a fresh run
    pub fn restart(&mut self) {
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::new(tuning);
        self.events.push(GameEvent::Restarted);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// JSON dump of the session for debugging (pending events are not included)
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Rebuild a session from `snapshot_json` output
    pub fn from_snapshot_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_grounded_and_running() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.jump, JumpState::Grounded);
        assert_eq!(state.player.pos.y, GROUND_Y);
        assert_eq!(state.speed, 2.0);
        assert_eq!(state.spawn_interval_ms, 2000.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_restart_keeps_tuning() {
        let tuning = Tuning {
            start_speed: 4.0,
            ..Default::default()
        };
        let mut state = GameState::new(tuning.clone());
        state.speed = 9.0;
        state.score = 321;
        state.phase = GamePhase::GameOver;

        state.restart();

        assert_eq!(state.tuning, tuning);
        assert_eq!(state.speed, 4.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = GameState::default();
        state.score = 137;
        state.speed = 2.2;
        state.spawn_interval_ms = 1850.0;
        state.last_spawn_ms = Some(4200.0);
        state.last_score_ms = Some(4250.5);
        state.last_speedup_score = 100;
        state.frame = 300;
        state.phase = GamePhase::GameOver;
        state.player.pos.y = 310.0;
        state.player.velocity = -3.5;
        state.player.jump = JumpState::DoubleJumping;
        state.obstacles.push(Obstacle::at(64.0));
        state.obstacles.push(Obstacle::spawn());
        state.backdrop.band_x = -42.0;
        state.events.push(GameEvent::Landed);

        let json = state.snapshot_json().unwrap();
        let restored = GameState::from_snapshot_json(&json).unwrap();

        assert_eq!(restored.tuning, state.tuning);
        assert_eq!(restored.phase, GamePhase::GameOver);
        assert_eq!(restored.score, 137);
        assert_eq!(restored.speed, 2.2);
        assert_eq!(restored.spawn_interval_ms, 1850.0);
        assert_eq!(restored.last_spawn_ms, Some(4200.0));
        assert_eq!(restored.last_score_ms, Some(4250.5));
        assert_eq!(restored.last_speedup_score, 100);
        assert_eq!(restored.frame, 300);
        assert_eq!(restored.player.pos, state.player.pos);
        assert_eq!(restored.player.velocity, -3.5);
        assert_eq!(restored.player.jump, JumpState::DoubleJumping);
        assert_eq!(restored.player.rect(), state.player.rect());
        let xs: Vec<f32> = restored.obstacles.iter().map(|o| o.pos.x).collect();
        assert_eq!(xs, vec![64.0, SURFACE_WIDTH + SPAWN_LEAD_IN]);
        assert_eq!(restored.backdrop.band_x, -42.0);
        assert_eq!(restored.backdrop.cloud_x, SURFACE_WIDTH);
        assert!(restored.events.is_empty());
    }

    #[test]
    fn test_backdrop_advances_each_frame() {
        let tuning = Tuning::default();
        let mut backdrop = Backdrop::default();
        backdrop.scroll(&tuning);
        assert_eq!(backdrop.band_x, -2.0);
        assert_eq!(backdrop.cloud_x, SURFACE_WIDTH - 0.3);
        backdrop.scroll(&tuning);
        assert_eq!(backdrop.band_x, -4.0);
        assert!((backdrop.cloud_x - (SURFACE_WIDTH - 0.6)).abs() < 1e-4);
    }

    #[test]
    fn test_backdrop_wraps_on_exact_boundary() {
        let tuning = Tuning::default();
        // One step lands the band exactly on -SURFACE_WIDTH
        let mut backdrop = Backdrop {
            band_x: -SURFACE_WIDTH + 2.0,
            cloud_x: SURFACE_WIDTH,
        };
        backdrop.scroll(&tuning);
        assert_eq!(backdrop.band_x, 0.0);

        // Cloud cluster exactly at -CLOUD_SPAN after one step
        let slow = Tuning {
            cloud_scroll_speed: 0.5,
            ..Default::default()
        };
        let mut backdrop = Backdrop {
            band_x: 0.0,
            cloud_x: -CLOUD_SPAN + 0.5,
        };
        backdrop.scroll(&slow);
        assert_eq!(backdrop.cloud_x, SURFACE_WIDTH);
        assert_eq!(backdrop.band_x, -2.0);
    }

    #[test]
    fn test_backdrop_wraps() {
        let tuning = Tuning::default();
        let mut backdrop = Backdrop {
            band_x: -SURFACE_WIDTH + 1.0,
            cloud_x: -CLOUD_SPAN + 0.2,
        };
        backdrop.scroll(&tuning);
        assert_eq!(backdrop.band_x, 0.0);
        assert_eq!(backdrop.cloud_x, SURFACE_WIDTH);
    }

    #[test]
    fn test_obstacle_off_screen_only_past_left_edge() {
        assert!(!Obstacle::at(0.0).is_off_screen());
        assert!(!Obstacle::at(-OBSTACLE_WIDTH).is_off_screen());
        assert!(Obstacle::at(-OBSTACLE_WIDTH - 0.1).is_off_screen());
    }
}

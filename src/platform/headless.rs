//! Headless frame driver
//!
//! Runs the same tick/draw cycle as the browser loop against a recording
//! surface and a synthetic clock. Used by the native binary and tests.

use serde::Serialize;

use super::log_events;
use crate::renderer::{CommandBuffer, draw_frame};
use crate::sim::{GamePhase, GameState, LoopControl, TickInput, tick};
use crate::tuning::Tuning;

/// Fixed-rate stand-in for `requestAnimationFrame` timestamps
#[derive(Debug, Clone)]
pub struct FrameClock {
    now_ms: f64,
    frame_ms: f64,
}

impl FrameClock {
    pub fn new(hz: f64) -> Self {
        Self {
            now_ms: 0.0,
            frame_ms: 1000.0 / hz,
        }
    }

    /// Timestamp of the next frame (monotonically increasing)
    pub fn next(&mut self) -> f64 {
        self.now_ms += self.frame_ms;
        self.now_ms
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60.0)
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub score: u64,
    pub speed: f32,
    pub spawn_interval_ms: f64,
    pub phase: GamePhase,
}

/// Drives the game loop without a browser
pub struct HeadlessRunner {
    pub state: GameState,
    pub input: TickInput,
    pub surface: CommandBuffer,
    clock: FrameClock,
}

impl HeadlessRunner {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: GameState::new(tuning),
            input: TickInput::default(),
            surface: CommandBuffer::new(),
            clock: FrameClock::default(),
        }
    }

    /// Let the autopilot play
    pub fn with_idle_mode(mut self) -> Self {
        self.input.idle_mode = true;
        self
    }

    /// One animation frame: tick, repaint, drain events
    pub fn step(&mut self) -> LoopControl {
        let now = self.clock.next();
        let control = tick(&mut self.state, &self.input, now);
        self.input.clear_presses();

        self.surface.reset();
        draw_frame(&mut self.surface, &self.state);

        log_events(&mut self.state);
        control
    }

    /// Step until the loop stops or `max_frames` have run
    pub fn run(&mut self, max_frames: u64) -> RunSummary {
        for _ in 0..max_frames {
            if self.step() == LoopControl::Stop {
                break;
            }
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.state.frame,
            score: self.state.score,
            speed: self.state.speed,
            spawn_interval_ms: self.state.spawn_interval_ms,
            phase: self.state.phase,
        }
    }
}

//! Data-driven game balance
//!
//! Every gameplay constant that shapes the feel of a run lives here so it can
//! be overridden from JSON without a rebuild.

use serde::{Deserialize, Serialize};

/// Errors raised while loading a tuning override
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// JSON could not be parsed into a `Tuning`
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed fine but a value is out of range
    #[error("Invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration applied to the player each airborne frame
    pub gravity: f32,
    /// Upward velocity set by the first jump
    pub jump_strength: f32,
    /// Upward velocity set by the double jump (weaker)
    pub double_jump_strength: f32,

    // === Scrolling ===
    /// Obstacle scroll speed at the start of a run (px/frame)
    pub start_speed: f32,
    /// Speed added at each difficulty step
    pub speed_step: f32,
    /// A difficulty step fires every time the score crosses a multiple of this
    pub speed_step_score: u64,

    // === Scoring ===
    /// Minimum time between score increments (ms)
    pub score_interval_ms: f64,

    // === Obstacles ===
    /// Spawn interval at the start of a run (ms)
    pub spawn_interval_ms: f64,
    /// Interval reduction after every spawn (ms)
    pub spawn_interval_step_ms: f64,
    /// Interval never drops below this (ms)
    pub min_spawn_interval_ms: f64,

    // === Backdrop ===
    pub band_scroll_speed: f32,
    pub cloud_scroll_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_strength: 15.0,
            double_jump_strength: 12.0,

            start_speed: 2.0,
            speed_step: 0.2,
            speed_step_score: 100,

            score_interval_ms: 100.0,

            spawn_interval_ms: 2000.0,
            spawn_interval_step_ms: 50.0,
            min_spawn_interval_ms: 1500.0,

            band_scroll_speed: 2.0,
            cloud_scroll_speed: 0.3,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the values produce a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f64) -> Result<(), TuningError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("gravity", self.gravity as f64)?;
        positive("jump_strength", self.jump_strength as f64)?;
        positive("double_jump_strength", self.double_jump_strength as f64)?;
        positive("start_speed", self.start_speed as f64)?;
        positive("score_interval_ms", self.score_interval_ms)?;
        positive("min_spawn_interval_ms", self.min_spawn_interval_ms)?;

        if self.speed_step < 0.0 {
            return Err(TuningError::Invalid {
                field: "speed_step",
                reason: "must not be negative",
            });
        }
        if self.spawn_interval_step_ms < 0.0 {
            return Err(TuningError::Invalid {
                field: "spawn_interval_step_ms",
                reason: "must not be negative",
            });
        }
        if self.speed_step_score == 0 {
            return Err(TuningError::Invalid {
                field: "speed_step_score",
                reason: "must be at least 1",
            });
        }
        if self.min_spawn_interval_ms > self.spawn_interval_ms {
            return Err(TuningError::Invalid {
                field: "min_spawn_interval_ms",
                reason: "must not exceed spawn_interval_ms",
            });
        }
        Ok(())
    }

    /// Load the optional override named by `JUMP_RUNNER_TUNING` (native only).
    /// Falls back to defaults when unset or unusable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        const ENV_VAR: &str = "JUMP_RUNNER_TUNING";

        let Ok(path) = std::env::var(ENV_VAR) else {
            log::info!("Using default tuning");
            return Self::default();
        };

        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load the optional override embedded in the page as
    /// `<script id="tuning" type="application/json">` (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("tuning"))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from page");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring page tuning: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.8, "start_speed": 3.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.start_speed, 3.0);
        assert_eq!(tuning.jump_strength, 15.0);
        assert_eq!(tuning.min_spawn_interval_ms, 1500.0);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        let err = Tuning::from_json(r#"{ "gravity": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "gravity", .. }));
    }

    #[test]
    fn test_rejects_floor_above_start_interval() {
        let err = Tuning::from_json(r#"{ "min_spawn_interval_ms": 2500.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "min_spawn_interval_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_speed_step_score() {
        let err = Tuning::from_json(r#"{ "speed_step_score": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "speed_step_score", .. }));
    }
}

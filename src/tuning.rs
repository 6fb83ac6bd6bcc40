//! Physics tuning
//!
//! Data-driven constants for the simulation. Every field has a default so a
//! tuning file only needs to list the values it changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Physics and animation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Motion ===
    /// Vertical acceleration (negative = down)
    pub gravity: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Vertical velocity set on jump
    pub jump_strength: f32,

    // === Body ===
    /// Full extents of the body (levels may override)
    pub body_size: Vec2,

    // === Ground probe ===
    /// Probe offset below the body's bottom edge, as a fraction of body height
    pub probe_gap: f32,
    /// Probe width as a fraction of body width
    pub probe_width: f32,
    /// Probe half-height in world units
    pub probe_half_height: f32,

    // === Animation ===
    /// Seconds per animation frame
    pub frame_duration: f32,
    /// Horizontal speed above which a grounded body is running
    pub run_threshold: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_strength: JUMP_STRENGTH,

            body_size: Vec2::new(BODY_WIDTH, BODY_HEIGHT),

            probe_gap: PROBE_GAP,
            probe_width: PROBE_WIDTH,
            probe_half_height: PROBE_HALF_HEIGHT,

            frame_duration: FRAME_DURATION,
            run_threshold: RUN_THRESHOLD,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning: gravity={} move_speed={} jump_strength={}",
            tuning.gravity,
            tuning.move_speed,
            tuning.jump_strength
        );
        Ok(tuning)
    }

    /// Reject values that would make the simulation ill-defined
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("move_speed", self.move_speed),
            ("jump_strength", self.jump_strength),
            ("run_threshold", self.run_threshold),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let positive = [
            ("body_size.x", self.body_size.x),
            ("body_size.y", self.body_size.y),
            ("probe_gap", self.probe_gap),
            ("probe_width", self.probe_width),
            ("probe_half_height", self.probe_half_height),
            ("frame_duration", self.frame_duration),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        Ok(())
    }

    /// Half-extents of the configured body
    pub fn body_half_extents(&self) -> Vec2 {
        self.body_size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.gravity, -24.5);
        assert_eq!(tuning.body_half_extents(), Vec2::new(0.1, 0.1));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "move_speed": 3.5 }"#).unwrap();
        assert_eq!(tuning.move_speed, 3.5);
        assert_eq!(tuning.jump_strength, JUMP_STRENGTH);
        assert_eq!(tuning.frame_duration, FRAME_DURATION);
    }

    #[test]
    fn test_rejects_zero_frame_duration() {
        let err = Tuning::from_json(r#"{ "frame_duration": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "frame_duration",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_degenerate_body() {
        let tuning = Tuning {
            body_size: Vec2::new(0.2, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NonPositive {
                field: "body_size.y",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}

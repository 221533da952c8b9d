//! Data-driven game balance
//!
//! Balance values default to the constants in [`crate::consts`] and can be
//! overridden from a JSON file for playtesting without recompiling. A
//! missing or malformed file falls back to the defaults with a logged
//! warning; tuning never fails the game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SpawnPolicy;

/// Tunable balance values for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    /// Velocity added per fast-fall press
    pub fast_fall_boost: f32,
    /// World scroll speed at run start
    pub initial_velocity: f32,
    /// Scroll speed gained per Playing tick
    pub velocity_ramp: f32,
    /// Score gained per tick per unit of world velocity
    pub score_increment: f32,
    /// Obstacle spacing and batch policy
    pub spawn: SpawnPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            fast_fall_boost: FAST_FALL_BOOST,
            initial_velocity: INITIAL_VELOCITY,
            velocity_ramp: VELOCITY_RAMP,
            score_increment: SCORE_INCREMENT,
            spawn: SpawnPolicy::default(),
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("invalid tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("could not read tuning file {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.jump_impulse, JUMP_IMPULSE);
        assert_eq!(tuning.initial_velocity, INITIAL_VELOCITY);
        assert_eq!(tuning.spawn.min_spacing, 300);
        assert_eq!(tuning.spawn.max_spacing, 600);
    }

    #[test]
    fn test_partial_file_overrides_one_field() {
        let tuning: Tuning = serde_json::from_str(r#"{"gravity": 1.2}"#).unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.jump_impulse, JUMP_IMPULSE);
        assert_eq!(tuning.spawn.batch_choices, vec![1, 2, 3]);
    }

    #[test]
    fn test_roundtrip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gravity, tuning.gravity);
        assert_eq!(back.spawn.max_spacing, tuning.spawn.max_spacing);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tuning = Tuning::load(Path::new("/nonexistent/sidehill-tuning.json"));
        assert_eq!(tuning.gravity, GRAVITY);
    }
}

//! Data-driven game balance
//!
//! Every gameplay number lives here so a run can be re-balanced from JSON
//! without a rebuild. Speeds are per frame, sizes are arena pixels.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Shark ===
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal pixels per frame while a direction key is held
    pub player_speed: f32,
    /// Gap between the shark's bottom edge and the arena floor
    pub player_bottom_margin: f32,

    // === Falling objects ===
    /// Objects are square
    pub object_size: f32,
    pub fall_speed_min: f32,
    pub fall_speed_max: f32,
    /// Rotation speed is drawn from [-max, max) radians per frame
    pub max_rotation_speed: f32,

    // === Spawning ===
    /// Chance per frame that a new object appears
    pub spawn_chance: f64,
    /// Chance that a spawn is good once onboarding is over
    pub good_ratio: f64,
    /// Number of guaranteed-good objects at the start of a run
    pub initial_good_objects: u32,

    // === Scoring ===
    pub points_good: i64,
    pub points_bad: i64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: 600.0,
            arena_height: 700.0,

            player_width: 80.0,
            player_height: 60.0,
            player_speed: 5.0,
            player_bottom_margin: 20.0,

            object_size: 50.0,
            fall_speed_min: 2.0,
            fall_speed_max: 4.0,
            max_rotation_speed: 0.05,

            spawn_chance: 0.02,
            good_ratio: 0.6,
            initial_good_objects: 3,

            points_good: 5,
            points_bad: -15,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "shark_catch_tuning";

    /// Parse and validate tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |reason: &str| -> Result<(), GameError> {
            Err(GameError::InvalidTuning(reason.to_string()))
        };

        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return invalid("spawn_chance must be within [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.good_ratio) {
            return invalid("good_ratio must be within [0, 1]");
        }
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return invalid("arena dimensions must be positive");
        }
        if self.player_width <= 0.0 || self.player_height <= 0.0 || self.object_size <= 0.0 {
            return invalid("entity sizes must be positive");
        }
        if self.player_width > self.arena_width {
            return invalid("player_width must fit inside the arena");
        }
        if self.object_size >= self.arena_width {
            return invalid("object_size must be narrower than the arena");
        }
        if self.player_speed < 0.0 || self.max_rotation_speed < 0.0 {
            return invalid("speeds must not be negative");
        }
        if self.fall_speed_min <= 0.0 || self.fall_speed_min >= self.fall_speed_max {
            return invalid("fall speed range must be positive and non-empty");
        }
        Ok(())
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Load tuning from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &str) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "spawn_chance": 0.5, "points_bad": -20 }"#).unwrap();
        assert_eq!(tuning.spawn_chance, 0.5);
        assert_eq!(tuning.points_bad, -20);
        assert_eq!(tuning.arena_width, 600.0);
        assert_eq!(tuning.initial_good_objects, 3);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "good_ratio": 1.5 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidTuning(_)));

        let err = Tuning::from_json(r#"{ "spawn_chance": -0.1 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_empty_fall_range() {
        let err = Tuning::from_json(r#"{ "fall_speed_min": 4.0, "fall_speed_max": 4.0 }"#)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::TuningParse(_)));
    }
}

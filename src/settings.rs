//! Motion and walking parameters
//!
//! Loaded from a JSON file; any missing field keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Parameters of a single collision-resolving move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Fraction of the body height, measured up from its lowest point, in
    /// which a contact counts as ground. Larger values make steeper slopes
    /// walkable.
    pub bottom_factor: f64,
    /// Resolver iterations allowed per move before giving up
    pub max_iterations: u32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            bottom_factor: 0.05,
            max_iterations: 4096,
        }
    }
}

/// Full configuration: motion plus the walking body tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub motion: MotionSettings,

    // === Walking ===
    /// Horizontal displacement per tick while walking
    pub walk_speed: f64,
    /// Added to the fall velocity each airborne tick (negative is down)
    pub gravity: f64,
    /// Fall velocity never goes below this
    pub terminal_velocity: f64,
    /// A body with no input that moved less than this times its fall speed
    /// has stopped
    pub stop_factor: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            motion: MotionSettings::default(),

            walk_speed: 5.0,
            gravity: -1.0,
            terminal_velocity: -20.0,
            stop_factor: 0.25,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Bad settings file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Cannot read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }
}

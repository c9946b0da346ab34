//! Tuning settings loaded from an external RON file.
//!
//! Allows tweaking movement and camera parameters without recompilation.
//! A missing or malformed file falls back to the compiled-in defaults.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use thiserror::Error;

use crate::camera::CameraSettings;
use crate::player::MotionSettings;

/// Where the settings file lives relative to the working directory.
pub const SETTINGS_PATH: &str = "assets/data/settings.ron";

/// Errors that can occur when loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// On-disk settings file structure.
///
/// Both sections are optional; omitted fields take their defaults, so a
/// settings file only needs to name the values it overrides.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub motion: MotionSettings,
    pub camera: CameraSettings,
}

impl SettingsFile {
    /// Load and parse a settings file.
    pub fn load_from(path: &str) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_string(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

/// System to load settings at startup and insert them as resources.
pub fn load_settings(mut commands: Commands) {
    let settings = match SettingsFile::load_from(SETTINGS_PATH) {
        Ok(settings) => {
            info!("Loaded settings from {}", SETTINGS_PATH);
            settings
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            SettingsFile::default()
        }
    };
    commands.insert_resource(settings.motion);
    commands.insert_resource(settings.camera);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_omitted_fields() {
        let parsed: SettingsFile = ron::from_str("(motion: (move_speed: 20.0))").unwrap();
        assert_eq!(parsed.motion.move_speed, 20.0);
        // Untouched fields match the compiled-in defaults
        let defaults = SettingsFile::default();
        assert_eq!(parsed.motion.jump_impulse, defaults.motion.jump_impulse);
        assert_eq!(parsed.camera.offset, defaults.camera.offset);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SettingsFile::load_from("assets/data/no_such_settings.ron").unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}

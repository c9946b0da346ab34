//! Core module - states, settings, and fundamental systems.
//!
//! This module provides the foundation that the other plugins build upon.

mod plugin;
mod settings;
mod states;

pub use plugin::CorePlugin;
pub use settings::{SettingsError, SettingsFile, SETTINGS_PATH};
pub use states::GameState;

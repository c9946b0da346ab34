//! Core plugin that sets up game states and fundamental systems.

use bevy::prelude::*;

use super::settings::load_settings;
use super::states::GameState;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame)
/// - Settings loading from RON
/// - Escape-to-quit
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Load settings before anything reads them
            .add_systems(Startup, load_settings)

            // Quit cleanly on Escape
            .add_systems(Update, exit_on_escape);
    }
}

/// Handle Escape key to exit the demo with a clean status.
fn exit_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

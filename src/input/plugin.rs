//! Input plugin - wires the engine input adapter into the schedule.

use bevy::prelude::*;

use crate::core::GameState;

use super::adapter;
use super::state::InputState;

/// System set for the adapter so downstream systems can order after it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputAdapterSet;

/// Input plugin - translates engine events into [`InputState`].
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .add_systems(OnEnter(GameState::InGame), adapter::grab_cursor)
            .add_systems(OnExit(GameState::InGame), adapter::release_cursor)
            .add_systems(
                Update,
                (
                    adapter::keyboard_input,
                    adapter::mouse_button_input,
                    adapter::mouse_motion_input,
                )
                    .in_set(InputAdapterSet)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

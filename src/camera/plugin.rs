//! Camera plugin - spawns the chase camera and schedules its systems.

use bevy::prelude::*;
use bevy::transform::TransformSystem;

use crate::core::GameState;
use crate::input::InputAdapterSet;
use crate::player;

use super::follow;
use super::rig::CameraSettings;

/// Camera plugin - third-person chase camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(OnEnter(GameState::InGame), follow::spawn_camera)
            .add_systems(
                Update,
                follow::mouse_turn
                    .after(InputAdapterSet)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                PostUpdate,
                follow::follow_camera
                    .after(player::sync_pose_from_physics)
                    .before(TransformSystem::TransformPropagate)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

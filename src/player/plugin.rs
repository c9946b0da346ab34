//! Player plugin - movement systems and physics sync.

use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy_rapier3d::prelude::*;

use crate::camera;
use crate::core::GameState;
use crate::input::InputAdapterSet;

use super::components::MotionSettings;
use super::movement;

/// Player plugin - handles the per-frame movement tick.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionSettings>()
            .add_systems(
                Update,
                movement::player_motion
                    .after(InputAdapterSet)
                    // Mouse turning updates the heading the tick rotates by
                    .after(camera::mouse_turn)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                PostUpdate,
                movement::sync_pose_from_physics
                    .after(PhysicsSet::Writeback)
                    .before(TransformSystem::TransformPropagate)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

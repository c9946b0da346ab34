//! ECS systems for mouse turning and the camera follow.

use bevy::prelude::*;

use crate::input::InputState;
use crate::player::{sim_to_render, Player, PlayerPose};

use super::rig;
use super::rig::CameraSettings;

/// Marker component for the chase camera.
#[derive(Component)]
pub struct ChaseCamera;

/// Spawn the chase camera. The follow system places it on the first frame.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        ChaseCamera,
        Camera3d::default(),
        Transform::default(),
    ));
}

/// Consume the tick's mouse delta and turn the player heading.
///
/// The delta is consumed exactly once per tick even when there is no
/// player to turn, so stale motion never carries over.
pub fn mouse_turn(
    mut input: ResMut<InputState>,
    settings: Res<CameraSettings>,
    time: Res<Time>,
    mut player_query: Query<&mut PlayerPose, With<Player>>,
) {
    let delta = input.consume_mouse_delta();
    if delta.x == 0.0 {
        return;
    }
    let Ok(mut pose) = player_query.get_single_mut() else {
        return;
    };
    pose.heading = rig::turn_heading(pose.heading, delta.x, &settings, time.delta_secs());
}

/// Re-derive the camera transform from the player pose.
///
/// Runs after the pose has been synced from physics so the camera tracks
/// the corrected position.
pub fn follow_camera(
    settings: Res<CameraSettings>,
    player_query: Query<&PlayerPose, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<ChaseCamera>, Without<Player>)>,
) {
    let Ok(pose) = player_query.get_single() else {
        return;
    };
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };

    let chase = rig::chase_pose(pose.position, pose.heading, &settings);
    transform.translation = sim_to_render(chase.position);
    transform.look_at(sim_to_render(chase.target), Vec3::Y);
}

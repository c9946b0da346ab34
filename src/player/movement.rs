//! ECS systems driving the movement tick and the physics wiring.
//!
//! Uses Rapier's KinematicCharacterController as the push-out resolver:
//! the tick proposes a translation delta, Rapier applies the corrected
//! one, and the pose is synced back from the corrected transform.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::input::InputState;

use super::components::{render_to_sim, sim_to_render, MotionSettings, Player, PlayerPose};
use super::motion;

/// Gap the character controller keeps between the collider and other
/// shapes. The ground collider is sunk by the same amount so a resting
/// cube settles at the ground threshold instead of hovering above it.
pub const CONTROLLER_OFFSET: f32 = 0.01;

/// Run the movement tick and hand the resulting translation to the
/// character controller.
pub fn player_motion(
    mut input: ResMut<InputState>,
    settings: Res<MotionSettings>,
    time: Res<Time>,
    mut player_query: Query<
        (&mut PlayerPose, &mut Transform, &mut KinematicCharacterController),
        With<Player>,
    >,
) {
    let Ok((mut pose, mut transform, mut controller)) = player_query.get_single_mut() else {
        return;
    };

    let before = pose.position;
    motion::tick_motion(&mut pose, &mut input, &settings, time.delta_secs());

    // The controller moves the transform; the pose position is the
    // proposal until sync_pose_from_physics reads the corrected result.
    let delta = pose.position - before;
    controller.translation = Some(sim_to_render(delta));
    transform.rotation = Quat::from_rotation_y(pose.heading);
}

/// Read the collision-corrected transform back into the pose.
///
/// Runs after Rapier's writeback so penetration push-out (ground, props)
/// is reflected in the next tick's pose.
pub fn sync_pose_from_physics(
    mut player_query: Query<(&mut PlayerPose, &Transform), With<Player>>,
) {
    for (mut pose, transform) in &mut player_query {
        pose.position = render_to_sim(transform.translation);
    }
}

/// Spawn the player cube at a sim-space position.
pub fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
    position: Vec3,
) -> Entity {
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        perceptual_roughness: 0.8,
        ..default()
    });

    commands
        .spawn((
            Player,
            PlayerPose::at(position),
            Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
            MeshMaterial3d(material),
            Transform::from_translation(sim_to_render(position)),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            Collider::cuboid(0.5, 0.5, 0.5),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(CONTROLLER_OFFSET),
                ..default()
            },
        ))
        .id()
}

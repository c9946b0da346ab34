//! World plugin - ground plane, lighting, and world setup.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::GameState;
use crate::player::{sim_to_render, spawn_player, CONTROLLER_OFFSET};

use super::textures::{begin_texture_load, resolve_texture, CubeTexture};

/// Half-extent of the square ground plane.
const GROUND_HALF_EXTENT: f32 = 100.0;

/// Thickness of the ground slab.
const GROUND_THICKNESS: f32 = 0.1;

/// Where the cube spawns, in sim space. High up so it falls in under
/// gravity on the first seconds of play.
const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 0.0, 15.0);

/// World plugin - handles texture resolution and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, begin_texture_load)
            .add_systems(
                Update,
                resolve_texture.run_if(in_state(GameState::Loading)),
            )
            .add_systems(OnEnter(GameState::InGame), setup_world);
    }
}

/// Spawn the ground, lights, and the player cube.
fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    texture: Res<CubeTexture>,
) {
    // Ground slab with its surface at y=0. The collider top is sunk by
    // the character-controller offset so a resting cube settles exactly
    // at the ground threshold.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(
            GROUND_HALF_EXTENT * 2.0,
            GROUND_THICKNESS,
            GROUND_HALF_EXTENT * 2.0,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.36, 0.38),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, -GROUND_THICKNESS / 2.0 - CONTROLLER_OFFSET, 0.0),
        Collider::cuboid(GROUND_HALF_EXTENT, GROUND_THICKNESS / 2.0, GROUND_HALF_EXTENT),
        RigidBody::Fixed,
    ));

    // Soft ambient fill
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
    });

    // Key light shining down at an angle (sim direction (1, 1, -1))
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::IDENTITY.looking_to(sim_to_render(Vec3::new(1.0, 1.0, -1.0)), Vec3::Y),
    ));

    let player = spawn_player(
        &mut commands,
        &mut meshes,
        &mut materials,
        texture.handle.clone(),
        PLAYER_SPAWN,
    );
    info!("World ready; player {:?} spawned at {}", player, PLAYER_SPAWN);
}

//! Cubedash - a third-person cube movement demo in Bevy.
//!
//! A player-controlled cube moves over a flat ground plane, subject to
//! gravity, jumping, dashing, and mouse-look camera control. Collision
//! response is delegated to Rapier's kinematic character controller.
//!
//! # Architecture
//!
//! The demo is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, settings loading, escape-to-exit
//! - **Input**: Action mapping from keyboard/mouse into an [`input::InputState`]
//!   snapshot that the simulation reads
//! - **Player**: Pose, movement tick, and physics wiring
//! - **Camera**: Third-person chase camera derived from the player pose
//! - **World**: Ground plane, player cube, lighting, texture fallback
//!
//! The movement and camera math lives in pure functions over plain data
//! ([`player::motion`], [`camera::rig`]) so it can be tested without a
//! running engine. The simulation uses a Z-up coordinate frame with
//! player-local forward along +Y, matching the conventions the demo was
//! designed around; the ECS glue converts to Bevy's Y-up render frame
//! when writing transforms.

pub mod camera;
pub mod core;
pub mod input;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main demo plugin that adds all sub-plugins.
pub struct CubedashPlugin;

impl Plugin for CubedashPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input adapter
            .add_plugins(input::InputPlugin)

            // Player movement
            .add_plugins(player::PlayerPlugin)

            // Chase camera
            .add_plugins(camera::CameraPlugin)

            // World setup
            .add_plugins(world::WorldPlugin);
    }
}

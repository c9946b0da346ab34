//! Cubedash - Entry Point
//!
//! A third-person cube movement demo.
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around (yaws the cube)
//! - Space: Jump
//! - Left click: Dash
//! - Escape: Quit

use bevy::prelude::*;
use bevy::window::{MonitorSelection, WindowMode};
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cubedash".to_string(),
                mode: WindowMode::BorderlessFullscreen(MonitorSelection::Primary),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our demo plugin
        .add_plugins(cubedash::CubedashPlugin)

        .run();
}

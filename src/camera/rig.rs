//! The chase-camera rig: pure pose derivation and mouse turning.
//!
//! The camera carries no state of its own. Each tick its pose is derived
//! fresh from the player's position and heading; mouse input turns the
//! player's heading, never the camera directly.

use bevy::prelude::*;
use serde::Deserialize;

/// A derived camera pose: where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in sim space
    pub position: Vec3,
    /// Look-at target in sim space
    pub target: Vec3,
}

/// Tuning values for the chase camera.
///
/// Loaded from `assets/data/settings.ron` alongside the motion settings.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Player-local camera offset (x, y, z) in sim space, before the lift
    pub offset: (f32, f32, f32),
    /// Vertical lift applied to both camera and target
    pub lift: f32,
    /// Mouse look sensitivity
    pub mouse_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            offset: (0.0, -10.0, 2.0),
            lift: 1.0,
            mouse_sensitivity: 500.0,
        }
    }
}

/// Derive the chase-camera pose from the player's position and heading.
///
/// The fixed local offset is rotated about the vertical axis by the
/// heading (yaw only, never pitch), then added to the player position
/// plus the vertical lift. The target is the lifted player position, so
/// the camera yaws with the player but never tilts.
pub fn chase_pose(player_position: Vec3, heading: f32, settings: &CameraSettings) -> CameraPose {
    let (ox, oy, oz) = settings.offset;
    let (sin, cos) = heading.sin_cos();
    let rotated = Vec3::new(ox * cos - oy * sin, ox * sin + oy * cos, oz);
    let lift = Vec3::new(0.0, 0.0, settings.lift);

    CameraPose {
        position: player_position + rotated + lift,
        target: player_position + lift,
    }
}

/// Turn the player heading by a mouse delta.
///
/// Positive dx (mouse right) turns clockwise, hence the subtraction.
pub fn turn_heading(heading: f32, dx: f32, settings: &CameraSettings, dt: f32) -> f32 {
    heading - dx * settings.mouse_sensitivity * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn camera_sits_behind_player_at_heading_zero() {
        let settings = CameraSettings::default();
        let player = Vec3::new(3.0, 4.0, 0.5);
        let pose = chase_pose(player, 0.0, &settings);
        assert!((pose.position - (player + Vec3::new(0.0, -10.0, 3.0))).length() < EPS);
        assert!((pose.target - (player + Vec3::new(0.0, 0.0, 1.0))).length() < EPS);
    }

    #[test]
    fn offset_rotates_counter_clockwise_with_heading() {
        // Pins the rotation sign: at +90 degrees the offset swings to +X.
        let settings = CameraSettings::default();
        let pose = chase_pose(Vec3::ZERO, FRAC_PI_2, &settings);
        assert!((pose.position - Vec3::new(10.0, 0.0, 3.0)).length() < EPS);
    }

    #[test]
    fn target_never_tilts() {
        let settings = CameraSettings::default();
        let player = Vec3::new(0.0, 0.0, 7.0);
        for heading in [0.0, 1.0, 2.5, -1.2] {
            let pose = chase_pose(player, heading, &settings);
            assert!((pose.target - Vec3::new(0.0, 0.0, 8.0)).length() < EPS);
        }
    }

    #[test]
    fn mouse_right_turns_clockwise() {
        let settings = CameraSettings::default();
        let heading = turn_heading(1.0, 0.02, &settings, 0.1);
        assert!((heading - (1.0 - 0.02 * 500.0 * 0.1)).abs() < EPS);
        assert!(heading < 1.0);
    }
}

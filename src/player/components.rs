//! Player-related components and motion settings.

use bevy::prelude::*;
use serde::Deserialize;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// The player's simulation-space pose.
///
/// Positions are in the sim frame: Z up, player-local forward along +Y.
/// The movement systems convert to the render frame with
/// [`sim_to_render`] when writing transforms.
#[derive(Component, Debug, Clone)]
pub struct PlayerPose {
    /// Position in sim space
    pub position: Vec3,
    /// Yaw about the vertical axis, radians, counter-clockwise
    pub heading: f32,
    /// Vertical velocity in units per second
    pub vertical_velocity: f32,
    /// True from jump-press until the next ground contact
    pub jumping: bool,
}

impl PlayerPose {
    /// Pose at a given sim-space position, at rest, facing heading zero.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            heading: 0.0,
            vertical_velocity: 0.0,
            jumping: false,
        }
    }
}

impl Default for PlayerPose {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// Tuning values for the movement tick.
///
/// Loaded from `assets/data/settings.ron`; the defaults below are the
/// values the demo was tuned with.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Vertical acceleration in units/s^2, negative is down
    pub gravity: f32,
    /// Ground movement speed in units per second
    pub move_speed: f32,
    /// Movement speed while airborne
    pub airborne_speed: f32,
    /// Instant vertical velocity added on jump
    pub jump_impulse: f32,
    /// Dash distance as a multiple of `move_speed * dt`
    pub dash_multiplier: f32,
    /// Height at or below which the player counts as grounded.
    /// Flat-ground heuristic: ground at z=0, cube half-height 0.5.
    pub ground_threshold: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            move_speed: 15.0,
            airborne_speed: 7.0,
            jump_impulse: 10.0,
            dash_multiplier: 50.0,
            ground_threshold: 0.5,
        }
    }
}

/// Convert a sim-space point or delta (Z up, forward +Y) to the render
/// frame (Y up, forward -Z).
pub fn sim_to_render(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}

/// Inverse of [`sim_to_render`].
pub fn render_to_sim(v: Vec3) -> Vec3 {
    Vec3::new(v.x, -v.z, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_conversion_inverts() {
        let sim = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(sim_to_render(sim), Vec3::new(1.0, 3.0, -2.0));
        assert_eq!(render_to_sim(sim_to_render(sim)), sim);
    }
}

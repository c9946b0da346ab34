//! The movement tick: gravity, walking, jumping, and dashing.
//!
//! Pure functions over plain data; the elapsed time is always an
//! explicit parameter, never read from an ambient clock. The ECS systems
//! in [`super::movement`] call into here once per frame.

use bevy::prelude::*;

use crate::input::InputState;

use super::components::{MotionSettings, PlayerPose};

/// Advance the player pose by one tick.
///
/// Steps run in a fixed order: gravity, horizontal movement, jump, dash,
/// vertical integration. The dash latch and nothing else is consumed
/// from `input`.
pub fn tick_motion(
    pose: &mut PlayerPose,
    input: &mut InputState,
    settings: &MotionSettings,
    dt: f32,
) {
    // 1. Gravity with the flat-ground threshold heuristic. This is not
    // contact detection: it assumes flat ground at z=0 and a cube
    // half-height equal to the threshold.
    if pose.position.z > settings.ground_threshold {
        pose.vertical_velocity += settings.gravity * dt;
    } else {
        pose.vertical_velocity = 0.0;
        pose.jumping = false;
    }

    // 2. Horizontal movement along heading-rotated local axes. Held
    // directions add, so diagonals are faster than a single axis.
    let speed = if pose.jumping {
        settings.airborne_speed
    } else {
        settings.move_speed
    };
    let mut local = Vec2::ZERO;
    if input.move_forward {
        local.y += 1.0;
    }
    if input.move_backward {
        local.y -= 1.0;
    }
    if input.move_left {
        local.x -= 1.0;
    }
    if input.move_right {
        local.x += 1.0;
    }
    if local != Vec2::ZERO {
        translate_local(pose, local * speed * dt);
    }

    // 3. Jump, gated by the jumping flag until the next ground contact.
    if input.jump && !pose.jumping {
        pose.vertical_velocity += settings.jump_impulse;
        pose.jumping = true;
    }

    // 4. Dash: an instantaneous offset along local forward that bypasses
    // the velocity model. Backward alone does not dash. The latch is
    // consumed whether or not a direction is held.
    let dash = input.take_dash();
    if dash && (input.move_forward || input.move_left || input.move_right) {
        let distance = settings.dash_multiplier * settings.move_speed * dt;
        translate_local(pose, Vec2::new(0.0, distance));
    }

    // 5. Integrate vertical velocity.
    pose.position.z += pose.vertical_velocity * dt;
}

/// Apply a player-local (x right, y forward) offset to the pose,
/// rotated into world space by the heading.
fn translate_local(pose: &mut PlayerPose, local: Vec2) {
    let (sin, cos) = pose.heading.sin_cos();
    pose.position.x += local.x * cos - local.y * sin;
    pose.position.y += local.x * sin + local.y * cos;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn settings() -> MotionSettings {
        MotionSettings::default()
    }

    fn airborne_pose() -> PlayerPose {
        PlayerPose::at(Vec3::new(0.0, 0.0, 5.0))
    }

    #[test]
    fn gravity_integrates_while_above_threshold() {
        let mut pose = airborne_pose();
        let mut input = InputState::default();
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        assert!((pose.vertical_velocity - (-0.98)).abs() < EPS);
    }

    #[test]
    fn at_or_below_threshold_clamps_velocity_and_clears_jumping() {
        let mut pose = PlayerPose::at(Vec3::new(0.0, 0.0, 0.5));
        pose.vertical_velocity = -3.0;
        pose.jumping = true;
        let mut input = InputState::default();
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        assert_eq!(pose.vertical_velocity, 0.0);
        assert!(!pose.jumping);
    }

    #[test]
    fn jump_fires_once_until_grounded_again() {
        let mut pose = PlayerPose::at(Vec3::new(0.0, 0.0, 0.5));
        let mut input = InputState::default();
        input.jump = true;

        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        assert!((pose.vertical_velocity - 10.0).abs() < EPS);
        assert!(pose.jumping);
        assert!((pose.position.z - 1.5).abs() < EPS);

        // Still holding jump while airborne: only gravity applies.
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        assert!((pose.vertical_velocity - (10.0 - 0.98)).abs() < EPS);
    }

    #[test]
    fn diagonal_movement_compounds_additively() {
        let mut pose = PlayerPose::at(Vec3::new(0.0, 0.0, 0.5));
        let mut input = InputState::default();
        input.move_forward = true;
        input.move_left = true;
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        // Each held axis contributes its full speed * dt.
        assert!((pose.position.x - (-1.5)).abs() < EPS);
        assert!((pose.position.y - 1.5).abs() < EPS);
        assert!(pose.position.truncate().length() > 1.5);
    }

    #[test]
    fn airborne_movement_is_slower() {
        let mut pose = airborne_pose();
        pose.jumping = true;
        let mut input = InputState::default();
        input.move_forward = true;
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        assert!((pose.position.y - 0.7).abs() < EPS);
    }

    #[test]
    fn heading_rotates_movement_into_world_space() {
        let mut pose = PlayerPose::at(Vec3::new(0.0, 0.0, 0.5));
        pose.heading = FRAC_PI_2;
        let mut input = InputState::default();
        input.move_forward = true;
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        // Facing 90 degrees counter-clockwise, forward is world -X.
        assert!((pose.position.x - (-1.5)).abs() < EPS);
        assert!(pose.position.y.abs() < EPS);
    }

    #[test]
    fn dash_forward_covers_seventy_five_units() {
        let mut pose = PlayerPose::at(Vec3::new(0.0, 0.0, 0.5));
        let mut input = InputState::default();
        input.move_forward = true;
        input.set_action(crate::input::Action::DashTrigger, true);
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        // 50 * 15 * 0.1 = 75 from the dash, plus the 1.5 walking step.
        assert!((pose.position.y - 76.5).abs() < 1e-3);
    }

    #[test]
    fn dash_with_only_backward_does_nothing() {
        let mut pose = PlayerPose::at(Vec3::new(0.0, 0.0, 0.5));
        let mut input = InputState::default();
        input.move_backward = true;
        input.set_action(crate::input::Action::DashTrigger, true);
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        // Walking backward still happens; the dash is excluded.
        assert!((pose.position.y - (-1.5)).abs() < EPS);
    }

    #[test]
    fn dash_latch_is_consumed_even_without_a_direction() {
        let mut pose = PlayerPose::at(Vec3::new(0.0, 0.0, 0.5));
        let mut input = InputState::default();
        input.set_action(crate::input::Action::DashTrigger, true);
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        assert_eq!(pose.position.truncate(), Vec2::ZERO);

        // Holding forward on the next tick must not fire a stale dash.
        input.move_forward = true;
        tick_motion(&mut pose, &mut input, &settings(), 0.1);
        assert!((pose.position.y - 1.5).abs() < EPS);
    }
}

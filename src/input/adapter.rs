//! Adapter systems translating engine input events into [`InputState`].

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use super::state::{Action, InputState};

/// Key bindings: physical key to logical action.
const KEY_BINDINGS: [(KeyCode, Action); 5] = [
    (KeyCode::KeyA, Action::MoveLeft),
    (KeyCode::KeyD, Action::MoveRight),
    (KeyCode::KeyW, Action::MoveForward),
    (KeyCode::KeyS, Action::MoveBackward),
    (KeyCode::Space, Action::Jump),
];

/// Forward keyboard press/release transitions to the input state.
///
/// `just_pressed`/`just_released` give one event per transition, so
/// auto-repeat never reaches the simulation.
pub fn keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<InputState>,
) {
    for (key, action) in KEY_BINDINGS {
        if keyboard.just_pressed(key) {
            input.set_action(action, true);
        }
        if keyboard.just_released(key) {
            input.set_action(action, false);
        }
    }
}

/// Latch a dash on left click.
pub fn mouse_button_input(
    buttons: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<InputState>,
) {
    if buttons.just_pressed(MouseButton::Left) {
        input.set_action(Action::DashTrigger, true);
    }
    if buttons.just_released(MouseButton::Left) {
        input.set_action(Action::DashTrigger, false);
    }
}

/// Accumulate relative mouse motion into the input state.
///
/// Deltas are normalized by window width so look sensitivity is
/// resolution-independent, matching the feel of a pointer that is
/// re-centered every frame.
pub fn mouse_motion_input(
    mut mouse_motion: EventReader<MouseMotion>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<InputState>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let width = window.width().max(1.0);

    for event in mouse_motion.read() {
        input.accumulate_mouse_delta(event.delta.x / width, event.delta.y / width);
    }
}

/// Grab and hide cursor when entering gameplay.
pub fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when leaving gameplay.
pub fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

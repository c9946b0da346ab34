//! Logical input state decoupled from the engine's event system.

use bevy::prelude::*;

/// Logical actions the player can perform.
///
/// The adapter maps physical keys and buttons onto these; the simulation
/// only ever sees actions, so key bindings can change without touching
/// the movement code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBackward,
    Jump,
    /// Discrete dash trigger. A press latches the dash until the
    /// simulation consumes it with [`InputState::take_dash`].
    DashTrigger,
}

/// Snapshot of player input, mutated by the adapter systems and read by
/// the simulation each tick.
///
/// Held actions are plain booleans tracking key-down/key-up transitions.
/// The mouse delta accumulates between ticks and is consumed (read and
/// reset) at most once per tick, as is the dash latch.
#[derive(Resource, Debug, Default, Clone)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub move_forward: bool,
    pub move_backward: bool,
    pub jump: bool,
    dash_queued: bool,
    mouse_delta: Vec2,
}

impl InputState {
    /// Record a press/release transition for a logical action.
    ///
    /// Idempotent: repeating the same transition is harmless. A
    /// false→true transition on [`Action::DashTrigger`] latches the dash;
    /// releasing the trigger does not clear the latch.
    pub fn set_action(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveLeft => self.move_left = pressed,
            Action::MoveRight => self.move_right = pressed,
            Action::MoveForward => self.move_forward = pressed,
            Action::MoveBackward => self.move_backward = pressed,
            Action::Jump => self.jump = pressed,
            Action::DashTrigger => {
                if pressed {
                    self.dash_queued = true;
                }
            }
        }
    }

    /// Add a mouse movement delta to the pending accumulator.
    pub fn accumulate_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.x += dx;
        self.mouse_delta.y += dy;
    }

    /// Return the accumulated mouse delta and reset it to zero.
    ///
    /// Exactly-once delivery: a second call without an intervening
    /// [`accumulate_mouse_delta`](Self::accumulate_mouse_delta) yields
    /// `Vec2::ZERO`.
    pub fn consume_mouse_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Return and clear the dash latch.
    pub fn take_dash(&mut self) -> bool {
        std::mem::take(&mut self.dash_queued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_actions_track_transitions() {
        let mut input = InputState::default();
        input.set_action(Action::MoveForward, true);
        assert!(input.move_forward);
        // Idempotent repeat
        input.set_action(Action::MoveForward, true);
        assert!(input.move_forward);
        input.set_action(Action::MoveForward, false);
        assert!(!input.move_forward);
    }

    #[test]
    fn mouse_delta_is_consumed_exactly_once() {
        let mut input = InputState::default();
        input.accumulate_mouse_delta(0.25, -0.5);
        input.accumulate_mouse_delta(0.25, 0.0);
        assert_eq!(input.consume_mouse_delta(), Vec2::new(0.5, -0.5));
        // No intervening event: second read is zero
        assert_eq!(input.consume_mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn dash_latches_until_taken() {
        let mut input = InputState::default();
        input.set_action(Action::DashTrigger, true);
        // Release before the tick reads it: the latch survives
        input.set_action(Action::DashTrigger, false);
        assert!(input.take_dash());
        assert!(!input.take_dash());
    }
}

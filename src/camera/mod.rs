//! Camera module - third-person chase camera derived from the player pose.

mod follow;
mod plugin;
pub mod rig;

pub use follow::{follow_camera, mouse_turn, ChaseCamera};
pub use plugin::CameraPlugin;
pub use rig::{CameraPose, CameraSettings};

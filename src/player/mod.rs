//! Player module - pose, movement tick, and physics wiring.

mod components;
pub mod motion;
mod movement;
mod plugin;

pub use components::{render_to_sim, sim_to_render, MotionSettings, Player, PlayerPose};
pub use movement::{spawn_player, sync_pose_from_physics, CONTROLLER_OFFSET};
pub use plugin::PlayerPlugin;

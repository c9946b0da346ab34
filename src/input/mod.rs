//! Input module - logical action state and the engine input adapter.
//!
//! The simulation never subscribes to engine events directly. Adapter
//! systems translate keyboard and mouse events into an [`InputState`]
//! snapshot, which the movement and camera systems read each tick.

mod adapter;
mod plugin;
mod state;

pub use plugin::{InputAdapterSet, InputPlugin};
pub use state::{Action, InputState};

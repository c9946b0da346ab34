//! World module - ground plane, lighting, and the player cube.

mod plugin;
mod textures;

pub use plugin::WorldPlugin;
pub use textures::{solid_color_image, CubeTexture, CUBE_TEXTURE_PATH};

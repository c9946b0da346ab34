//! Cube texture loading with a solid-color fallback.
//!
//! The demo tries to load its one texture through the asset server.
//! Failure is non-fatal: a 1x1 solid red image is synthesized instead
//! and the demo degrades gracefully.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::core::GameState;

/// Asset path of the cube's texture.
pub const CUBE_TEXTURE_PATH: &str = "textures/red.png";

/// Handle to the cube texture while it resolves.
#[derive(Resource)]
pub struct CubeTexture {
    pub handle: Handle<Image>,
}

/// Kick off the texture load at startup.
pub fn begin_texture_load(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(CubeTexture {
        handle: asset_server.load(CUBE_TEXTURE_PATH),
    });
}

/// Poll the texture each frame during loading.
///
/// On success, start gameplay with the loaded texture; on failure, swap
/// in the fallback image and start anyway.
pub fn resolve_texture(
    asset_server: Res<AssetServer>,
    mut texture: ResMut<CubeTexture>,
    mut images: ResMut<Assets<Image>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match asset_server.load_state(&texture.handle) {
        LoadState::Loaded => {
            info!("Loaded cube texture from {}", CUBE_TEXTURE_PATH);
            next_state.set(GameState::InGame);
        }
        LoadState::Failed(e) => {
            warn!(
                "Could not load {}: {}. Using solid-color fallback.",
                CUBE_TEXTURE_PATH, e
            );
            texture.handle = images.add(solid_color_image(Color::srgb(1.0, 0.0, 0.0)));
            next_state.set(GameState::InGame);
        }
        _ => {}
    }
}

/// Build a 1x1 image of a single solid color.
pub fn solid_color_image(color: Color) -> Image {
    let srgba = color.to_srgba();
    let pixel = [
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        (srgba.alpha * 255.0) as u8,
    ];
    Image::new_fill(
        Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &pixel,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_image_is_one_solid_red_pixel() {
        let image = solid_color_image(Color::srgb(1.0, 0.0, 0.0));
        assert_eq!(image.texture_descriptor.size.width, 1);
        assert_eq!(image.texture_descriptor.size.height, 1);
        assert_eq!(image.data, vec![255, 0, 0, 255]);
    }
}

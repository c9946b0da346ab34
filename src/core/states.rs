//! Game state definitions that control the overall flow of the demo.
//!
//! States determine which systems run at any given time. Gameplay
//! systems only run in the InGame state; the Loading state waits for the
//! cube texture to resolve (or fall back) before play begins.

use bevy::prelude::*;

/// Main game states.
///
/// The demo starts in `Loading` while the cube texture is fetched, then
/// moves to `InGame` once it has either loaded or been replaced by the
/// solid-color fallback.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - resolving the cube texture
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

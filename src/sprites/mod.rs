//! Sprites module for character sprite-sheet playback.
//!
//! This module handles:
//! - Loading the sprite sheet manifest from JSON
//! - Mapping controller behavior to animation clips
//! - Frame playback and the "finished" signal for one-shot clips

pub mod animation;
pub mod manifest;


use bevy::prelude::*;

pub use animation::*;
pub use animation::AnimationClip;
pub use manifest::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteSheetManifest>()
            .add_systems(Startup, load_sprite_manifest)
            .add_systems(Update, advance_sprite_animations);
    }
}

/// System to load the sprite manifest at startup.
fn load_sprite_manifest(mut manifest: ResMut<SpriteSheetManifest>) {
    manifest.load_from_file("assets/sprites/character.json");
}

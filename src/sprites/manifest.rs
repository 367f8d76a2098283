//! Sprite sheet manifest loading.
//!
//! The manifest describes the character sheet layout: how many columns a
//! row has and how many frames each clip row uses.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::AnimationClip;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpriteSheetManifest {
    /// Frames per sheet row.
    pub columns: u32,
    /// Frame count per clip, indexed by [`AnimationClip::index`].
    pub frames: Vec<u32>,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl Default for SpriteSheetManifest {
    fn default() -> Self {
        Self {
            columns: 9,
            frames: vec![9, 9, 0, 4, 5],
            frame_duration: 0.07,
        }
    }
}

impl SpriteSheetManifest {
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Load the manifest from a JSON file, keeping the current values if the
    /// file is missing or malformed.
    pub fn load_from_file(&mut self, path: &str) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Sprite manifest not found at {:?}, using built-in layout",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return;
            }
        };

        match Self::from_json(&contents) {
            Ok(manifest) => {
                *self = manifest;
                info!(
                    "Loaded sprite manifest with {} clips, {} columns",
                    self.frames.len(),
                    self.columns
                );
            }
            Err(e) => error!("Failed to parse sprite manifest: {}", e),
        }
    }

    pub fn frame_count(&self, clip: AnimationClip) -> u32 {
        self.frames.get(clip.index()).copied().unwrap_or(0)
    }

    /// Texture atlas index of `frame` within `clip`'s row.
    pub fn atlas_index(&self, clip: AnimationClip, frame: u32) -> usize {
        clip.index() * self.columns as usize + frame as usize
    }
}

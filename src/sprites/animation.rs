//! Animation clips and playback.
//!
//! Clips are rows of the character sprite sheet. Looping clips cycle
//! forever; one-shot clips stop on their last frame and raise `finished`,
//! which the controller reads to end a punch.

use bevy::prelude::*;

use super::SpriteSheetManifest;
use crate::movement::CharacterController;

/// Rows of the character sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationClip {
    WalkRight,
    WalkLeft,
    /// Single static frame.
    #[default]
    Idle,
    EnterDoor,
    Punch,
}

impl AnimationClip {
    /// Row index in the sprite sheet.
    pub fn index(self) -> usize {
        match self {
            AnimationClip::WalkRight => 0,
            AnimationClip::WalkLeft => 1,
            AnimationClip::Idle => 2,
            AnimationClip::EnterDoor => 3,
            AnimationClip::Punch => 4,
        }
    }
}

/// Component for sprite-sheet playback on a character.
#[derive(Component, Debug, Clone, Default)]
pub struct SpriteAnimation {
    pub clip: AnimationClip,
    /// Current frame within the clip (0-based).
    pub frame: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    pub looping: bool,
    /// A one-shot clip reached its last frame.
    pub finished: bool,
}

impl SpriteAnimation {
    /// Switch clips, restarting playback only when the clip changes.
    pub fn set_clip(&mut self, clip: AnimationClip, looping: bool) {
        if self.clip != clip {
            self.clip = clip;
            self.frame = 0;
            self.frame_timer = 0.0;
            self.finished = false;
        }
        self.looping = looping;
    }

    pub fn is_playing(&self) -> bool {
        !self.finished
    }

    /// Advance playback by `dt` seconds. Returns true on the update a
    /// one-shot clip finishes. A one-shot clip with no frames finishes on
    /// its first update; a looping one just holds.
    pub fn advance(&mut self, dt: f32, frame_count: u32, frame_duration: f32) -> bool {
        if self.finished {
            return false;
        }
        if frame_count == 0 {
            self.finished = !self.looping;
            return self.finished;
        }

        self.frame_timer += dt;

        if self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            self.frame += 1;

            if self.frame >= frame_count {
                if self.looping {
                    self.frame = 0;
                } else {
                    self.frame = frame_count - 1;
                    self.finished = true;
                    return true;
                }
            }
        }

        false
    }
}

/// Picks the clip for each character from its behavior. Runs right after
/// the controller tick so a fresh clip never carries a stale `finished`.
pub fn sync_animation_to_behavior(
    mut query: Query<(&CharacterController, &mut SpriteAnimation)>,
) {
    for (controller, mut animation) in &mut query {
        let hints = controller.animation_hints();
        if animation.clip != hints.clip || animation.looping != hints.looping {
            animation.set_clip(hints.clip, hints.looping);
        }
    }
}

/// System that advances frames and points the texture atlas at them.
pub fn advance_sprite_animations(
    time: Res<Time>,
    manifest: Res<SpriteSheetManifest>,
    mut query: Query<(Entity, &mut SpriteAnimation, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut animation, mut sprite) in &mut query {
        let clip = animation.clip;
        let frame_count = manifest.frame_count(clip);

        if animation.advance(dt, frame_count, manifest.frame_duration) {
            debug!("{:?} finished clip {:?}", entity, clip);
        }

        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = manifest.atlas_index(clip, animation.frame);
        }
    }
}

//! Viewport domain: scroll state and follow math.
//!
//! The street is scrolled horizontally. `scroll_offset_x` is how far the
//! world has been shifted left, so it is always zero or negative, and a
//! character's screen x is `world_x + scroll_offset_x`.

use bevy::prelude::*;
use serde::Deserialize;

/// Fixed window size in logical pixels. The camera never zooms, so this is
/// also the visible world area.
pub const STAGE_SIZE: UVec2 = UVec2::new(1024, 576);

use crate::movement::Facing;

/// Limits for the horizontal scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for ScrollBounds {
    fn default() -> Self {
        Self {
            min: -2048.0,
            max: 0.0,
        }
    }
}

impl ScrollBounds {
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(self.min, self.max)
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportTuning {
    /// Distance from the left edge of the view to the follow midpoint.
    pub half_width: f32,
    /// Scroll change per tick while the character is walking.
    pub scroll_step: f32,
    pub bounds: ScrollBounds,
}

impl Default for ViewportTuning {
    fn default() -> Self {
        Self {
            half_width: 448.0,
            scroll_step: 5.0,
            bounds: ScrollBounds::default(),
        }
    }
}

/// Which way the view wants to follow the character this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FollowDirection {
    /// Character is left of the midpoint and the view can still scroll back.
    pub left: bool,
    /// Character is right of the midpoint and the view can still scroll on.
    pub right: bool,
}

impl FollowDirection {
    pub fn any(&self) -> bool {
        self.left || self.right
    }
}

/// Shared viewport state. Owned by the session and outlives characters.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    pub scroll_offset_x: f32,
    /// Last position published by a controller, for renderers and HUDs.
    pub character_world_position: Vec2,
}

impl ViewportState {
    /// World x of the follow midpoint for the current scroll.
    pub fn midpoint(&self, tuning: &ViewportTuning) -> f32 {
        self.scroll_offset_x.abs() + tuning.half_width
    }

    pub fn follow_direction(&self, character_x: f32, tuning: &ViewportTuning) -> FollowDirection {
        let midpoint = self.midpoint(tuning);
        FollowDirection {
            left: character_x < midpoint && self.scroll_offset_x < tuning.bounds.max,
            right: character_x > midpoint && self.scroll_offset_x > tuning.bounds.min,
        }
    }

    /// Set the offset, clamped to the configured bounds.
    pub fn set_scroll(&mut self, offset: f32, tuning: &ViewportTuning) {
        self.scroll_offset_x = tuning.bounds.clamp(offset);
    }

    /// Controlled-mode step: scroll back (`+step`) when walking left, on
    /// (`-step`) when walking right. No-op when the matching follow flag is off.
    pub fn step_toward(&mut self, facing: Facing, follow: FollowDirection, tuning: &ViewportTuning) {
        match facing {
            Facing::Left if follow.left => {
                self.set_scroll(self.scroll_offset_x + tuning.scroll_step, tuning);
            }
            Facing::Right if follow.right => {
                self.set_scroll(self.scroll_offset_x - tuning.scroll_step, tuning);
            }
            _ => {}
        }
    }

    /// Rubber-band mode: absorb the displacement physics produced since the
    /// last tick so the character stays anchored on screen.
    pub fn absorb_drift(
        &mut self,
        last_frame_x: f32,
        current_x: f32,
        follow: FollowDirection,
        tuning: &ViewportTuning,
    ) {
        if follow.any() {
            self.set_scroll(self.scroll_offset_x + (last_frame_x - current_x), tuning);
        }
    }

    /// Screen-space x for a world x under the current scroll.
    pub fn to_screen_x(&self, world_x: f32) -> f32 {
        world_x + self.scroll_offset_x
    }
}

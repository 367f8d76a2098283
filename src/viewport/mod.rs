//! Viewport domain: shared scroll offset and camera follow.

mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{FollowDirection, STAGE_SIZE, ScrollBounds, ViewportState, ViewportTuning};

use bevy::prelude::*;

use crate::viewport::systems::{setup_camera, sync_camera_to_viewport};

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportState>()
            .init_resource::<ViewportTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(PostUpdate, sync_camera_to_viewport);
    }
}

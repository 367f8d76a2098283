//! Viewport domain: camera setup and follow.

use bevy::prelude::*;

use crate::viewport::{STAGE_SIZE, ViewportState};

/// Ground top sits this far above the bottom edge of the view.
const GROUND_MARGIN: f32 = 40.0;

pub(crate) fn setup_camera(mut commands: Commands, viewport: Res<ViewportState>) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(camera_x(&viewport), camera_y(), 0.0),
    ));
}

/// Keeps the left edge of the view at world x `-scroll_offset_x`.
pub(crate) fn sync_camera_to_viewport(
    viewport: Res<ViewportState>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    if !viewport.is_changed() {
        return;
    }

    let x = camera_x(&viewport);
    for mut transform in &mut cameras {
        transform.translation.x = x;
    }
}

pub(crate) fn camera_x(viewport: &ViewportState) -> f32 {
    -viewport.scroll_offset_x + STAGE_SIZE.x as f32 * 0.5
}

fn camera_y() -> f32 {
    STAGE_SIZE.y as f32 * 0.5 - GROUND_MARGIN
}

//! Zones domain: door markers drawn at each zone interval.

use bevy::prelude::*;

use crate::zones::ZoneTable;

/// Marker for a door sprite, tagged with its zone index.
#[derive(Component, Debug)]
pub struct DoorMarker(pub usize);

pub(crate) fn spawn_zone_markers(mut commands: Commands, zones: Res<ZoneTable>) {
    let door_color = Color::srgb(0.45, 0.3, 0.2);

    for (index, &(start, end)) in zones.intervals().iter().enumerate() {
        let width = end - start;
        commands.spawn((
            DoorMarker(index),
            Sprite {
                color: door_color,
                custom_size: Some(Vec2::new(width, 96.0)),
                ..default()
            },
            // Behind the character, standing on the street surface
            Transform::from_xyz(start + width * 0.5, 48.0, -1.0),
        ));
    }

    debug!("Spawned {} door markers", zones.intervals().len());
}

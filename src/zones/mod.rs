//! Zones domain: door intervals along the street and zone-entry messages.

mod events;
mod spawn;
mod table;


pub use events::ZoneEntered;
pub use table::{ZoneLayout, ZoneTable};

use bevy::prelude::*;

use crate::zones::spawn::spawn_zone_markers;

pub struct ZonesPlugin;

impl Plugin for ZonesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ZoneTable>()
            .add_message::<ZoneEntered>()
            .add_systems(Startup, spawn_zone_markers);
    }
}

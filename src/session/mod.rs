//! Session domain: hosts the zone-entered callback and finishes zone
//! transitions by handing control back to the character.

mod resources;
mod systems;


pub use resources::{SessionTuning, ZoneTransition};

use bevy::prelude::*;

use crate::session::systems::{begin_zone_transitions, finish_zone_transitions};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionTuning>()
            .init_resource::<ZoneTransition>()
            .add_systems(
                Update,
                (begin_zone_transitions, finish_zone_transitions).chain(),
            );
    }
}

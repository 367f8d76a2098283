//! Session domain: systems reacting to zone entries.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::CharacterController;
use crate::session::{SessionTuning, ZoneTransition};
use crate::zones::ZoneEntered;

pub(crate) fn begin_zone_transitions(
    mut entries: MessageReader<ZoneEntered>,
    tuning: Res<SessionTuning>,
    mut transition: ResMut<ZoneTransition>,
) {
    for entry in entries.read() {
        if transition.is_pending(entry.entity) {
            warn!("[ZONE] {:?} re-entered a zone mid-transition", entry.entity);
        }
        info!("[ZONE] {:?} entering building {}", entry.entity, entry.zone);
        transition.begin(entry.entity, entry.zone, tuning.zone_transition_secs);
    }
}

pub(crate) fn finish_zone_transitions(
    time: Res<Time>,
    mut transition: ResMut<ZoneTransition>,
    mut controllers: Query<&mut CharacterController>,
) {
    if transition.pending.is_empty() {
        return;
    }

    for entry in transition.tick(time.delta()) {
        // The character may have been detached while the door was playing
        let Ok(mut controller) = controllers.get_mut(entry.entity) else {
            continue;
        };
        controller.reset_to_idle();
        info!(
            "[ZONE] {:?} finished building {}, control restored",
            entry.entity, entry.zone
        );
    }
}

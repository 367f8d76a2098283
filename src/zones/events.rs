//! Zones domain: messages emitted when a character walks through a door.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

/// Fired when a controlled character successfully enters a zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneEntered {
    pub entity: Entity,
    pub zone: usize,
}

impl Message for ZoneEntered {}

//! Session domain: transition timing and bookkeeping.

use bevy::prelude::*;
use serde::Deserialize;
use std::time::Duration;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionTuning {
    /// How long the enter-door animation owns the character.
    pub zone_transition_secs: f32,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            zone_transition_secs: 1.0,
        }
    }
}

#[derive(Debug)]
pub struct PendingEntry {
    pub entity: Entity,
    pub zone: usize,
    timer: Timer,
}

/// Zone entries in progress, plus the zones visited this session.
#[derive(Resource, Debug, Default)]
pub struct ZoneTransition {
    pub pending: Vec<PendingEntry>,
    pub visited: Vec<usize>,
}

impl ZoneTransition {
    pub fn begin(&mut self, entity: Entity, zone: usize, duration_secs: f32) {
        // A character can only be walking through one door at a time
        self.pending.retain(|entry| entry.entity != entity);
        self.pending.push(PendingEntry {
            entity,
            zone,
            timer: Timer::from_seconds(duration_secs, TimerMode::Once),
        });
    }

    /// Advance all timers and return the entries that completed.
    pub fn tick(&mut self, delta: Duration) -> Vec<PendingEntry> {
        for entry in &mut self.pending {
            entry.timer.tick(delta);
        }

        let (done, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|entry| entry.timer.elapsed() >= entry.timer.duration());
        self.pending = waiting;

        for entry in &done {
            if !self.visited.contains(&entry.zone) {
                self.visited.push(entry.zone);
            }
        }

        done
    }

    pub fn is_pending(&self, entity: Entity) -> bool {
        self.pending.iter().any(|entry| entry.entity == entity)
    }
}

//! Zones domain: static zone layout and lookup.

use bevy::prelude::*;
use serde::Deserialize;

/// Parameters the zone table is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoneLayout {
    /// Number of doors along the street.
    pub count: usize,
    /// Distance between the starts of two neighbouring doors.
    pub spacing: f32,
    /// Start of the first door interval.
    pub first_start: f32,
    /// Width of each door interval.
    pub width: f32,
    /// Offset added to the character x before testing (its right edge).
    pub edge_offset: f32,
}

impl Default for ZoneLayout {
    fn default() -> Self {
        Self {
            count: 6,
            spacing: 512.0,
            first_start: 224.0,
            width: 64.0,
            edge_offset: 64.0,
        }
    }
}

/// Ordered half-open intervals `[start, end)`, one per zone index.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ZoneTable {
    intervals: Vec<(f32, f32)>,
    edge_offset: f32,
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::from_layout(&ZoneLayout::default())
    }
}

impl ZoneTable {
    pub fn from_layout(layout: &ZoneLayout) -> Self {
        let intervals = (0..layout.count)
            .map(|i| {
                let start = layout.spacing * i as f32 + layout.first_start;
                (start, start + layout.width)
            })
            .collect();

        Self {
            intervals,
            edge_offset: layout.edge_offset,
        }
    }

    pub fn intervals(&self) -> &[(f32, f32)] {
        &self.intervals
    }

    /// Returns the index of the first zone containing `world_x + edge_offset`.
    pub fn lookup(&self, world_x: f32) -> Option<usize> {
        let edge = world_x + self.edge_offset;
        self.intervals
            .iter()
            .position(|&(start, end)| edge >= start && edge < end)
    }
}

//! Movement domain: coupling between the controller and the rigid body.
//!
//! Controllers talk to bodies through [`PhysicsBody`] in per-tick units:
//! a horizontal velocity of 5 moves the body 5 world units per physics step.
//! The avian adapter converts to and from the engine's per-second values.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Narrow view of a simulated rigid body.
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Instantaneous velocity change on a unit-mass body.
    fn apply_impulse(&mut self, impulse: Vec2);
    fn friction(&self) -> f32;
    fn set_friction(&mut self, friction: f32);
}

/// Sets velocity.x, leaving velocity.y untouched.
pub fn set_horizontal_velocity(body: &mut impl PhysicsBody, vx: f32) {
    let velocity = body.velocity();
    body.set_velocity(Vec2::new(vx, velocity.y));
}

/// Kicks the body upward and drops friction so it keeps its horizontal speed
/// while airborne.
pub fn apply_jump_impulse(body: &mut impl PhysicsBody, tuning: &MovementTuning) {
    body.apply_impulse(Vec2::Y * tuning.jump_impulse);
    body.set_friction(tuning.airborne_friction);
}

pub fn restore_ground_friction(body: &mut impl PhysicsBody, tuning: &MovementTuning) {
    body.set_friction(tuning.ground_friction);
}

/// Calibrated landing heuristic: vertical velocity exactly zero, or already
/// falling faster than the threshold.
pub fn is_landed(body: &impl PhysicsBody, tuning: &MovementTuning) -> bool {
    let vy = body.velocity().y;
    vy == 0.0 || vy < tuning.landing_velocity_threshold
}

/// [`PhysicsBody`] over an avian2d dynamic body.
pub struct AvianBody<'a> {
    pub transform: &'a Transform,
    pub velocity: &'a mut LinearVelocity,
    pub friction: &'a mut Friction,
    pub ticks_per_second: f32,
    /// The body touches a ground collider this step.
    pub grounded: bool,
    /// Per-tick vertical speeds below this are reported as resting while
    /// grounded.
    pub rest_epsilon: f32,
}

impl PhysicsBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn velocity(&self) -> Vec2 {
        let per_tick = self.velocity.0 / self.ticks_per_second;
        // The solver leaves a small residual on resting contacts. Airborne
        // bodies pass near zero at the apex and must not read as resting.
        if self.grounded && per_tick.y.abs() < self.rest_epsilon {
            Vec2::new(per_tick.x, 0.0)
        } else {
            per_tick
        }
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity * self.ticks_per_second;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.ticks_per_second;
    }

    fn friction(&self) -> f32 {
        self.friction.dynamic_coefficient
    }

    fn set_friction(&mut self, friction: f32) {
        self.friction.dynamic_coefficient = friction;
    }
}

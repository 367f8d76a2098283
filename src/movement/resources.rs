//! Movement domain: tuning and input binding resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Physics tuning for the character, in per-tick units unless noted.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    /// Upward velocity change applied by a jump.
    pub jump_impulse: f32,
    /// Falling faster than this counts as landed.
    pub landing_velocity_threshold: f32,
    pub ground_friction: f32,
    pub airborne_friction: f32,
    /// World gravity in units per second squared.
    pub gravity: f32,
    pub rest_epsilon: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            jump_impulse: 10.0,
            landing_velocity_threshold: -100.0,
            ground_friction: 1.0,
            airborne_friction: 0.0,
            gravity: 1800.0,
            rest_epsilon: 0.01,
        }
    }
}

/// One keyboard key and one gamepad button that both trigger an intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding {
    pub key: KeyCode,
    pub button: GamepadButton,
}

impl Binding {
    pub const fn new(key: KeyCode, button: GamepadButton) -> Self {
        Self { key, button }
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputBindings {
    pub punch: Binding,
    pub jump: Binding,
    pub enter_zone: Binding,
    pub move_left: Binding,
    pub move_right: Binding,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            punch: Binding::new(KeyCode::KeyA, GamepadButton::East),
            jump: Binding::new(KeyCode::Space, GamepadButton::South),
            enter_zone: Binding::new(KeyCode::ArrowUp, GamepadButton::DPadUp),
            move_left: Binding::new(KeyCode::ArrowLeft, GamepadButton::DPadLeft),
            move_right: Binding::new(KeyCode::ArrowRight, GamepadButton::DPadRight),
        }
    }
}

//! Movement domain: character controller, physics coupling and plugin wiring.

mod behavior;
mod bootstrap;
mod components;
mod controller;
mod intent;
mod physics;
mod resources;
mod systems;


pub use behavior::{AnimationHints, BehaviorState};
pub use bootstrap::ControllerCommandsExt;
pub use components::{Facing, GameLayer, Ground, Player};
pub use controller::{CharacterController, ControllerEffect, TickEnv, TickSignals};
pub use intent::{InputSource, Intent, RawInput, resolve_intent};
pub use physics::{
    AvianBody, PhysicsBody, apply_jump_impulse, is_landed, restore_ground_friction,
    set_horizontal_velocity,
};
pub use resources::{Binding, InputBindings, MovementTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::{apply_gravity_tuning, spawn_character, spawn_street};
use crate::movement::systems::run_controller_tick;
use crate::sprites::sync_animation_to_behavior;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<InputBindings>()
            .add_systems(
                Startup,
                (apply_gravity_tuning, spawn_street, spawn_character),
            )
            .add_systems(
                FixedUpdate,
                (run_controller_tick, sync_animation_to_behavior).chain(),
            );
    }
}

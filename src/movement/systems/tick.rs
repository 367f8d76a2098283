//! Movement domain: the fixed-step orchestrator driving every controller.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::audio::{PlaySound, SoundCue};
use crate::movement::systems::input::DeviceInput;
use crate::movement::{
    AvianBody, CharacterController, ControllerEffect, Ground, InputBindings, MovementTuning,
    TickEnv, TickSignals,
};
use crate::sprites::{AnimationClip, SpriteAnimation};
use crate::viewport::{ViewportState, ViewportTuning};
use crate::zones::{ZoneEntered, ZoneTable};

type ControlledBody = (
    &'static Transform,
    &'static mut LinearVelocity,
    &'static mut Friction,
);

/// Input devices and their bindings.
#[derive(SystemParam)]
pub(crate) struct Devices<'w, 's> {
    keyboard: Res<'w, ButtonInput<KeyCode>>,
    gamepads: Query<'w, 's, &'static Gamepad>,
    bindings: Res<'w, InputBindings>,
}

/// Read-only tuning and world lookups shared by every controller.
#[derive(SystemParam)]
pub(crate) struct TickWorld<'w, 's> {
    fixed_time: Res<'w, Time<Fixed>>,
    movement: Res<'w, MovementTuning>,
    viewport: Res<'w, ViewportTuning>,
    zones: Res<'w, ZoneTable>,
    grounds: Query<'w, 's, (), With<Ground>>,
}

impl TickWorld<'_, '_> {
    fn touches_ground(&self, contacts: Option<&CollidingEntities>) -> bool {
        contacts.is_some_and(|contacts| contacts.iter().any(|e| self.grounds.contains(*e)))
    }
}

/// Runs once per physics step, ahead of the avian step in `FixedPostUpdate`.
///
/// Characters are ticked one after another against the exclusively
/// borrowed [`ViewportState`].
pub(crate) fn run_controller_tick(
    devices: Devices,
    world: TickWorld,
    mut viewport: ResMut<ViewportState>,
    mut controllers: Query<(
        Entity,
        &mut CharacterController,
        Option<&SpriteAnimation>,
        Option<&CollidingEntities>,
        Option<ControlledBody>,
    )>,
    mut sounds: MessageWriter<PlaySound>,
    mut zone_entries: MessageWriter<ZoneEntered>,
) {
    let ticks_per_second = 1.0 / world.fixed_time.timestep().as_secs_f32();
    let gamepad = devices.gamepads.iter().next();
    let env = TickEnv {
        movement: &world.movement,
        viewport: &world.viewport,
        zones: &world.zones,
    };

    for (entity, mut controller, animation, contacts, body) in &mut controllers {
        let mut input = DeviceInput {
            keyboard: &devices.keyboard,
            gamepad,
            bindings: &devices.bindings,
        };

        let signals = TickSignals {
            punch_animation_finished: animation
                .is_some_and(|a| a.clip == AnimationClip::Punch && a.finished),
        };

        let grounded = world.touches_ground(contacts);
        let mut body = body.map(|(transform, velocity, friction)| AvianBody {
            transform,
            velocity: velocity.into_inner(),
            friction: friction.into_inner(),
            ticks_per_second,
            grounded,
            rest_epsilon: world.movement.rest_epsilon,
        });

        let effects = controller.tick(body.as_mut(), &mut input, signals, &mut viewport, &env);

        for effect in effects {
            match effect {
                ControllerEffect::PlayJumpSound => {
                    sounds.write(PlaySound {
                        cue: SoundCue::Jump,
                    });
                }
                ControllerEffect::ZoneEntered(zone) => {
                    zone_entries.write(ZoneEntered { entity, zone });
                }
            }
        }
    }
}

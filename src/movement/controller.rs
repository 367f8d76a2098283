//! Movement domain: the per-tick character controller.
//!
//! One call to [`CharacterController::tick`] runs, in order: landing
//! feedback, input resolution and the resulting physics commands (or scroll
//! rubber-banding while an action is in flight), then records this tick's x
//! and publishes the character position to the viewport.

use bevy::prelude::*;

use crate::movement::physics::{
    PhysicsBody, apply_jump_impulse, is_landed, restore_ground_friction, set_horizontal_velocity,
};
use crate::movement::{
    AnimationHints, BehaviorState, Facing, InputSource, Intent, MovementTuning, resolve_intent,
};
use crate::viewport::{FollowDirection, ViewportState, ViewportTuning};
use crate::zones::ZoneTable;

/// Side effects a tick asks its host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEffect {
    PlayJumpSound,
    ZoneEntered(usize),
}

/// Signals reported back by the presentation layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickSignals {
    /// The punch animation has played to its last frame.
    pub punch_animation_finished: bool,
}

/// Read-only configuration a tick runs against.
#[derive(Debug, Clone, Copy)]
pub struct TickEnv<'a> {
    pub movement: &'a MovementTuning,
    pub viewport: &'a ViewportTuning,
    pub zones: &'a ZoneTable,
}

/// Controller state for one playable character, stored on its body entity.
#[derive(Component, Debug, Clone, Default)]
pub struct CharacterController {
    behavior: BehaviorState,
    last_frame_x: f32,
}

impl CharacterController {
    pub fn new(spawn_x: f32) -> Self {
        Self {
            behavior: BehaviorState::Idle,
            last_frame_x: spawn_x,
        }
    }

    pub fn behavior(&self) -> BehaviorState {
        self.behavior
    }

    pub fn last_frame_x(&self) -> f32 {
        self.last_frame_x
    }

    pub fn animation_hints(&self) -> AnimationHints {
        self.behavior.animation_hints()
    }

    /// External reset, used once a zone transition completes.
    pub fn reset_to_idle(&mut self) {
        self.set_behavior(BehaviorState::Idle);
    }

    /// Runs one simulation tick.
    ///
    /// `body` is `None` when the controller is attached to an entity whose
    /// physics components are missing. That is a mounting bug: it asserts
    /// in debug builds and is a no-op tick otherwise.
    pub fn tick<B: PhysicsBody>(
        &mut self,
        body: Option<&mut B>,
        input: &mut impl InputSource,
        signals: TickSignals,
        viewport: &mut ViewportState,
        env: &TickEnv<'_>,
    ) -> Vec<ControllerEffect> {
        let mut effects = Vec::new();

        let Some(body) = body else {
            if cfg!(debug_assertions) {
                panic!("character controller ticked before its body was attached");
            }
            return effects;
        };

        let x = body.position().x;
        let follow = viewport.follow_direction(x, env.viewport);

        if self.behavior.is_jumping() && is_landed(&*body, env.movement) {
            restore_ground_friction(body, env.movement);
            self.set_behavior(BehaviorState::Idle);
        }

        if self.behavior.accepts_input() {
            let intent = resolve_intent(&input.poll());
            effects.extend(self.apply_intent(intent, body, follow, viewport, env));
        } else {
            if self.behavior.is_punching() && signals.punch_animation_finished {
                self.set_behavior(BehaviorState::Idle);
            }
            viewport.absorb_drift(self.last_frame_x, x, follow, env.viewport);
        }

        self.last_frame_x = x;
        viewport.character_world_position = body.position();

        effects
    }

    fn apply_intent<B: PhysicsBody>(
        &mut self,
        intent: Intent,
        body: &mut B,
        follow: FollowDirection,
        viewport: &mut ViewportState,
        env: &TickEnv<'_>,
    ) -> Option<ControllerEffect> {
        match intent {
            Intent::Punch => self.set_behavior(BehaviorState::Punching),
            Intent::Jump => {
                apply_jump_impulse(body, env.movement);
                self.set_behavior(BehaviorState::Jumping);
                return Some(ControllerEffect::PlayJumpSound);
            }
            Intent::EnterZone => {
                let x = body.position().x;
                // No door here: the intent is dropped and nothing changes
                let zone = env.zones.lookup(x)?;
                info!("Entering zone {} at x={:.0}", zone, x);
                self.set_behavior(BehaviorState::Leaving { zone });
                return Some(ControllerEffect::ZoneEntered(zone));
            }
            Intent::MoveLeft => self.walk(Facing::Left, body, follow, viewport, env),
            Intent::MoveRight => self.walk(Facing::Right, body, follow, viewport, env),
            Intent::None => {
                set_horizontal_velocity(body, 0.0);
                self.set_behavior(BehaviorState::Idle);
            }
        }
        None
    }

    fn walk<B: PhysicsBody>(
        &mut self,
        facing: Facing,
        body: &mut B,
        follow: FollowDirection,
        viewport: &mut ViewportState,
        env: &TickEnv<'_>,
    ) {
        viewport.step_toward(facing, follow, env.viewport);
        set_horizontal_velocity(body, facing.sign() * env.movement.walk_speed);
        self.set_behavior(BehaviorState::Walking(facing));
    }

    fn set_behavior(&mut self, next: BehaviorState) {
        if self.behavior != next {
            debug!("Behavior {:?} -> {:?}", self.behavior, next);
            self.behavior = next;
        }
    }
}

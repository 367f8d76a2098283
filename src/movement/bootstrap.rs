//! Movement domain: street scene and character bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterController, GameLayer, Ground, MovementTuning, Player};
use crate::sprites::SpriteAnimation;
use crate::viewport::{STAGE_SIZE, ViewportTuning};

const CHARACTER_SIZE: f32 = 64.0;
const SPAWN_POSITION: Vec2 = Vec2::new(96.0, 40.0);

/// Attach and detach a controller on a body entity.
///
/// The controller lives exactly as long as its component: detaching or
/// despawning the body ends its participation in the fixed-step tick.
pub trait ControllerCommandsExt {
    fn attach_controller(&mut self, spawn_x: f32) -> &mut Self;
    fn detach_controller(&mut self) -> &mut Self;
}

impl ControllerCommandsExt for EntityCommands<'_> {
    fn attach_controller(&mut self, spawn_x: f32) -> &mut Self {
        debug!("Attaching character controller to {:?}", self.id());
        self.insert(CharacterController::new(spawn_x))
    }

    fn detach_controller(&mut self) -> &mut Self {
        debug!("Detaching character controller from {:?}", self.id());
        self.remove::<CharacterController>()
    }
}

pub(crate) fn apply_gravity_tuning(mut commands: Commands, tuning: Res<MovementTuning>) {
    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));
}

/// Street surface plus invisible walls at both ends of the scrollable world.
/// Only the street carries [`Ground`], so touching a wall never reads as
/// standing.
pub(crate) fn spawn_street(mut commands: Commands, viewport: Res<ViewportTuning>) {
    let world_width = STAGE_SIZE.x as f32 - viewport.bounds.min;
    let street_color = Color::srgb(0.35, 0.35, 0.4);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    commands.spawn((
        Ground,
        Sprite {
            color: street_color,
            custom_size: Some(Vec2::new(world_width, 40.0)),
            ..default()
        },
        Transform::from_xyz(world_width * 0.5, -20.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(world_width, 40.0),
        ground_layers,
    ));

    for wall_x in [-20.0, world_width + 20.0] {
        commands.spawn((
            Transform::from_xyz(wall_x, 250.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 500.0),
            ground_layers,
        ));
    }

    info!("Spawned street, {:.0} units wide", world_width);
}

pub(crate) fn spawn_character(mut commands: Commands) {
    commands
        .spawn((
            Player,
            SpriteAnimation::default(),
            Sprite {
                color: Color::srgb(0.9, 0.85, 0.75),
                custom_size: Some(Vec2::splat(CHARACTER_SIZE)),
                ..default()
            },
            Transform::from_translation(SPAWN_POSITION.extend(1.0)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(CHARACTER_SIZE, CHARACTER_SIZE),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction {
                    dynamic_coefficient: 1.0,
                    static_coefficient: 0.0,
                    ..Friction::new(1.0)
                },
                Restitution::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
                CollidingEntities::default(),
            ),
        ))
        .attach_controller(SPAWN_POSITION.x);

    info!("Spawned character at {:?}", SPAWN_POSITION);
}

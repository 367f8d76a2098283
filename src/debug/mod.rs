//! Debug overlay for inspecting the controller while playing.
//!
//! Hotkeys:
//! - F1 toggles the info overlay (behavior, position, velocity, scroll)
//! - F2 detaches or re-attaches the player's controller

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::movement::{CharacterController, ControllerCommandsExt, Player};
use crate::sprites::SpriteAnimation;
use crate::viewport::ViewportState;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show debug info overlay
    pub show_info: bool,
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
                cleanup_debug_info_overlay.run_if(|state: Res<DebugState>| !state.show_info),
            )
                .chain(),
        );
    }
}

fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    players: Query<(Entity, &Transform, Has<CharacterController>), With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
    }

    if keyboard.just_pressed(KeyCode::F2) {
        for (entity, transform, attached) in &players {
            if attached {
                commands.entity(entity).detach_controller();
            } else {
                commands
                    .entity(entity)
                    .attach_controller(transform.translation.x);
            }
            info!(
                "[DEBUG] Controller {} for {:?}",
                if attached { "detached" } else { "attached" },
                entity
            );
        }
    }
}

/// Update the debug info overlay with current player state
fn update_debug_info_overlay(
    mut commands: Commands,
    viewport: Res<ViewportState>,
    player_query: Query<
        (
            &Transform,
            &LinearVelocity,
            Option<&CharacterController>,
            Option<&SpriteAnimation>,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    // Ensure overlay exists
    if overlay_query.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let (Some((transform, velocity, controller, animation)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    else {
        return;
    };

    let behavior = controller.map_or_else(
        || "detached".to_string(),
        |c| format!("{:?}", c.behavior()),
    );
    let clip = animation.map_or_else(
        || "none".to_string(),
        |a| format!("{:?} frame {} playing={}", a.clip, a.frame, a.is_playing()),
    );
    let pos = transform.translation;
    **text = format!(
        "State: {}\nClip: {}\nPos: ({:.0}, {:.0}) screen x {:.0}\nVel: ({:.0}, {:.0})\nScroll: {:.0}",
        behavior,
        clip,
        pos.x,
        pos.y,
        viewport.to_screen_x(pos.x),
        velocity.x,
        velocity.y,
        viewport.scroll_offset_x
    );
}

fn cleanup_debug_info_overlay(
    mut commands: Commands,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    for entity in &existing_overlay {
        commands.entity(entity).despawn();
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

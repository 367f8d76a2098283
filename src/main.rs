mod audio;
mod content;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod session;
mod sprites;
mod viewport;
mod zones;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics steps per second; the controller ticks once per step.
const SIMULATION_HZ: f64 = 60.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Boardwalk".to_string(),
            resolution: (viewport::STAGE_SIZE.x, viewport::STAGE_SIZE.y).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
    .insert_resource(ClearColor(Color::srgb(0.55, 0.7, 0.85)))
    .add_plugins((
        content::ContentPlugin,
        viewport::ViewportPlugin,
        zones::ZonesPlugin,
        sprites::SpritesPlugin,
        audio::AudioCuePlugin,
        movement::MovementPlugin,
        session::SessionPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}

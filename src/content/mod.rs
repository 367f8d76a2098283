//! Content domain: controller configuration loaded from RON at startup.

mod loader;


pub use loader::{ConfigLoadError, ControllerConfig, load_controller_config};

use bevy::prelude::*;
use std::path::Path;

use crate::zones::ZoneTable;

const CONFIG_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Loaded during build so every later plugin sees the tuned resources
        let config = match load_controller_config(Path::new(CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded controller config from {}", CONFIG_PATH);
                config
            }
            Err(e) => {
                warn!("{}; using default controller config", e);
                ControllerConfig::default()
            }
        };

        app.insert_resource(config.movement)
            .insert_resource(config.viewport)
            .insert_resource(ZoneTable::from_layout(&config.zones))
            .insert_resource(config.session);
    }
}

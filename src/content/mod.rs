//! Content domain: loads the controller configuration and publishes the
//! tuning resources.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{CONTROLLER_SCHEMA_VERSION, ControllerConfigDef};
pub use loader::{ContentLoadError, load_controller_config, parse_single};
pub use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

/// Directory holding the RON data files.
pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Boot), load_content);
    }
}

/// Load and validate the config, falling back to defaults on any problem.
pub fn resolve_config(base_path: &Path) -> ControllerConfigDef {
    let config = match load_controller_config(base_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return ControllerConfigDef::default();
        }
    };

    let errors = validate_config(&config);
    if errors.is_empty() {
        return config;
    }

    for error in &errors {
        warn!("Invalid tuning: {}", error);
    }
    warn!(
        "Controller config has {} invalid value(s); using default tuning",
        errors.len()
    );
    ControllerConfigDef::default()
}

fn load_content(mut commands: Commands, mut fixed_time: ResMut<Time<Fixed>>) {
    let config = resolve_config(Path::new(CONTENT_DIR));

    info!(
        "Controller tuning loaded: move_speed={}, jump_height={:.0}, fixed_hz={}",
        config.movement.move_speed,
        config.movement.single_jump_height(),
        config.movement.fixed_hz
    );

    fixed_time.set_timestep_hz(config.movement.fixed_hz);
    commands.insert_resource(config.movement);
    commands.insert_resource(config.abilities);
    commands.insert_resource(config.respawn);
}

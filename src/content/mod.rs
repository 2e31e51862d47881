//! Content domain: movement tuning file loading and validation.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    HazardDef, HazardSpawn, MOVEMENT_SCHEMA_VERSION, MovementConfig, MovementContent, PickupDef,
    PickupSpawn,
};
pub use loader::{ContentLoadError, load_movement_config, parse_movement_config};
pub use validation::{
    ConfigError, resolve_movement_config, validate_health, validate_tuning, validate_weapon,
};

use bevy::prelude::*;
use std::path::Path;

use crate::progression::AbilityFlags;

pub const MOVEMENT_CONFIG_PATH: &str = "assets/data/movement.ron";

/// System set for content loading, so spawners can order after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentLoaded;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_movement_content.in_set(ContentLoaded));
    }
}

/// Load and validate movement content. Invalid content leaves
/// [`MovementContent`] absent, which keeps the controller from spawning.
fn load_movement_content(mut commands: Commands, mut abilities: ResMut<AbilityFlags>) {
    let path = Path::new(MOVEMENT_CONFIG_PATH);

    let config = match load_movement_config(path) {
        Ok(config) => config,
        Err(e) if e.is_missing_file() => {
            warn!("{}; using default movement tuning", e);
            MovementConfig::default()
        }
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    match resolve_movement_config(config) {
        Ok(content) => {
            for ability in &content.starting_abilities {
                abilities.unlock(*ability);
            }
            info!(
                "Movement content loaded: starting_abilities={:?}, pickups={}, hazards={}",
                content.starting_abilities,
                content.pickups.len(),
                content.hazards.len()
            );
            commands.insert_resource(content);
        }
        Err(errors) => {
            for e in &errors {
                error!("Movement content invalid: {}", e);
            }
            error!(
                "Refusing to start the movement controller ({} errors)",
                errors.len()
            );
        }
    }
}

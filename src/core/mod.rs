//! Core domain: camera and gameplay pause switch.

mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{GameplayPaused, MENU_PAUSE_SOURCE, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, sync_virtual_time, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (toggle_pause, sync_virtual_time).chain());
    }
}

//! Core domain: camera setup and pause handling.

use bevy::prelude::*;

use crate::core::resources::{GameplayPaused, MENU_PAUSE_SOURCE};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let now_paused = paused.toggle(MENU_PAUSE_SOURCE);
        info!("Gameplay {}", if now_paused { "paused" } else { "resumed" });
    }
}

/// Stop virtual time while any pause source is active. Fixed ticks stop with
/// it, so motion timers freeze in place.
pub(crate) fn sync_virtual_time(paused: Res<GameplayPaused>, mut time: ResMut<Time<Virtual>>) {
    if !paused.is_changed() {
        return;
    }
    if paused.is_paused() && !time.is_paused() {
        time.pause();
    } else if !paused.is_paused() && time.is_paused() {
        time.unpause();
    }
}

//! Core domain: tests for pause bookkeeping.

use bevy::prelude::*;

use super::{GameplayPaused, MENU_PAUSE_SOURCE};
use crate::core::systems::sync_virtual_time;

#[test]
fn test_gameplay_paused_by_any_source() {
    let mut paused = GameplayPaused::default();
    assert!(!paused.is_paused());

    paused.pause("menu");
    paused.pause("dialogue");
    assert!(paused.is_paused());

    paused.unpause("menu");
    assert!(paused.is_paused());

    paused.unpause("dialogue");
    assert!(!paused.is_paused());
}

#[test]
fn test_toggle_flips_one_source() {
    let mut paused = GameplayPaused::default();

    assert!(paused.toggle(MENU_PAUSE_SOURCE));
    assert!(paused.is_paused());

    assert!(!paused.toggle(MENU_PAUSE_SOURCE));
    assert!(!paused.is_paused());
}

#[test]
fn test_pause_stops_virtual_time() {
    let mut app = App::new();
    app.init_resource::<GameplayPaused>()
        .init_resource::<Time<Virtual>>()
        .add_systems(Update, sync_virtual_time);

    app.world_mut()
        .resource_mut::<GameplayPaused>()
        .pause(MENU_PAUSE_SOURCE);
    app.update();
    assert!(app.world().resource::<Time<Virtual>>().is_paused());

    app.world_mut()
        .resource_mut::<GameplayPaused>()
        .unpause(MENU_PAUSE_SOURCE);
    app.update();
    assert!(!app.world().resource::<Time<Virtual>>().is_paused());
}

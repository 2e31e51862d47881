mod combat;
mod content;
mod core;
mod health;
mod movement;
mod progression;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Vania Motion".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            progression::ProgressionPlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            health::HealthPlugin,
            combat::CombatPlugin,
        ))
        .run();
}

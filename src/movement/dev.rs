//! Movement domain: debug-only test room for trying the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::MovementContent;
use crate::health::{Hazard, spawn_hazard};
use crate::movement::GameLayer;
use crate::progression::spawn_ability_pickup;

fn spawn_block(commands: &mut Commands, name: &'static str, color: Color, size: Vec2, at: Vec2) {
    commands.spawn((
        Name::new(name),
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(at.x, at.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Projectile]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands, content: Option<Res<MovementContent>>) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // (name, color, size, center)
    let blocks = [
        ("Ground", ground_color, (800.0, 40.0), (0.0, -200.0)),
        ("LeftWall", wall_color, (40.0, 500.0), (-420.0, 50.0)),
        ("RightWall", wall_color, (40.0, 500.0), (420.0, 50.0)),
        ("PlatformLeft", platform_color, (150.0, 20.0), (-250.0, -50.0)),
        ("PlatformRight", platform_color, (150.0, 20.0), (250.0, 50.0)),
        ("PlatformTop", platform_color, (120.0, 20.0), (0.0, 150.0)),
        // Small pillar for wall jumping practice
        ("Pillar", wall_color, (30.0, 200.0), (-100.0, -80.0)),
    ];
    for (name, color, (w, h), (x, y)) in blocks {
        spawn_block(&mut commands, name, color, Vec2::new(w, h), Vec2::new(x, y));
    }

    let Some(content) = content else {
        return;
    };
    for pickup in &content.pickups {
        spawn_ability_pickup(&mut commands, pickup.ability, pickup.position);
    }
    for spawn in &content.hazards {
        let mut hazard = Hazard::new(spawn.damage, spawn.knockback);
        if let Some(interval) = spawn.repeat_interval {
            hazard = hazard.continuous(interval);
        }
        spawn_hazard(&mut commands, hazard, spawn.size, spawn.position);
    }
}

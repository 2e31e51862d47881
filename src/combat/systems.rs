//! Combat domain: firing, moving and removing shots.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{
    Projectile, ShotFiredEvent, WeaponTuning, muzzle_position, projectile_velocity,
};
use crate::content::MovementContent;
use crate::health::Defeated;
use crate::movement::{GameLayer, MotionState, Player};

const PROJECTILE_COLOR: Color = Color::srgb(1.0, 0.9, 0.3);

fn spawn_projectile(
    commands: &mut Commands,
    tuning: &WeaponTuning,
    position: Vec2,
    velocity: Vec2,
) -> Entity {
    commands
        .spawn((
            Name::new("Projectile"),
            Projectile {
                lifetime: tuning.projectile_lifetime,
            },
            Sprite {
                color: PROJECTILE_COLOR,
                custom_size: Some(Vec2::splat(tuning.projectile_radius * 2.0)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            RigidBody::Dynamic,
            Collider::circle(tuning.projectile_radius),
            GravityScale(0.0),
            LinearVelocity(velocity),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Projectile, [GameLayer::Ground, GameLayer::Hazard]),
        ))
        .id()
}

pub(crate) fn fire_projectiles(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    content: Option<Res<MovementContent>>,
    mut shot_events: MessageWriter<ShotFiredEvent>,
    players: Query<(Entity, &Transform, &MotionState), (With<Player>, Without<Defeated>)>,
) {
    let fire = keyboard.just_pressed(KeyCode::KeyF)
        || keyboard.just_pressed(KeyCode::KeyL)
        || keyboard.just_pressed(KeyCode::ControlLeft);
    if !fire {
        return;
    }

    let tuning = content.map(|c| c.weapon.clone()).unwrap_or_default();
    for (shooter, transform, state) in &players {
        let origin = transform.translation.truncate();
        let projectile = spawn_projectile(
            &mut commands,
            &tuning,
            muzzle_position(origin, state.facing, &tuning),
            projectile_velocity(state.facing, &tuning),
        );
        shot_events.write(ShotFiredEvent {
            shooter,
            projectile,
        });
    }
}

pub(crate) fn expire_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Projectile)>,
) {
    let dt = time.delta_secs();
    for (entity, mut projectile) in &mut query {
        if projectile.tick(dt) {
            commands.entity(entity).try_despawn();
        }
    }
}

/// Shots are removed by the first terrain or hazard they touch.
pub(crate) fn despawn_projectiles_on_impact(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    projectiles: Query<(), With<Projectile>>,
) {
    for event in collision_events.read() {
        for entity in [event.collider1, event.collider2] {
            if projectiles.contains(entity) {
                commands.entity(entity).try_despawn();
            }
        }
    }
}

pub(crate) fn log_shots(mut shot_events: MessageReader<ShotFiredEvent>) {
    for event in shot_events.read() {
        debug!("{:?} fired {:?}", event.shooter, event.projectile);
    }
}

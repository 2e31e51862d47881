//! Progression domain: collectible ability unlocks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Player};
use crate::progression::{Ability, AbilityFlags, AbilityUnlockedEvent};

const PICKUP_RADIUS: f32 = 10.0;

/// Sensor collectible that unlocks an ability when the player touches it.
#[derive(Component, Debug, Clone, Copy)]
pub struct AbilityPickup {
    pub ability: Ability,
}

fn pickup_color(ability: Ability) -> Color {
    match ability {
        Ability::DoubleJump => Color::srgb(0.4, 0.8, 1.0),
        Ability::Dash => Color::srgb(1.0, 0.6, 0.2),
        Ability::WallJump => Color::srgb(0.6, 1.0, 0.4),
    }
}

pub fn spawn_ability_pickup(commands: &mut Commands, ability: Ability, position: Vec2) -> Entity {
    commands
        .spawn((
            AbilityPickup { ability },
            Name::new(format!("AbilityPickup({ability})")),
            Sprite {
                color: pickup_color(ability),
                custom_size: Some(Vec2::splat(PICKUP_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::circle(PICKUP_RADIUS),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Pickup, [GameLayer::Player]),
        ))
        .id()
}

/// Unlock and despawn pickups the player started touching this frame.
pub(crate) fn collect_ability_pickups(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut abilities: ResMut<AbilityFlags>,
    mut unlocked_events: MessageWriter<AbilityUnlockedEvent>,
    players: Query<(), With<Player>>,
    pickups: Query<&AbilityPickup>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, pickup_entity) in pairs {
            if !players.contains(player) {
                continue;
            }
            let Ok(pickup) = pickups.get(pickup_entity) else {
                continue;
            };

            if abilities.unlock(pickup.ability) {
                info!("Ability unlocked: {}", pickup.ability);
                unlocked_events.write(AbilityUnlockedEvent {
                    ability: pickup.ability,
                    collector: Some(player),
                });
            } else {
                debug!("Ability {} already unlocked", pickup.ability);
            }

            commands.entity(pickup_entity).try_despawn();
        }
    }
}

/// Report every fresh unlock together with the full unlocked set.
pub(crate) fn announce_unlocks(
    mut unlocked_events: MessageReader<AbilityUnlockedEvent>,
    abilities: Res<AbilityFlags>,
) {
    for event in unlocked_events.read() {
        let unlocked: Vec<&str> = abilities.unlocked().map(Ability::name).collect();
        info!(
            "{} unlocked by {:?}; abilities now: {}",
            event.ability,
            event.collector,
            unlocked.join(", ")
        );
    }
}

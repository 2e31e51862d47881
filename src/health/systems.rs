//! Health domain: hazard contact, damage application and feedback.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::MovementContent;
use crate::health::{
    DamageEvent, Defeated, Hazard, Health, HealthTuning, HitOutcome, PlayerDefeatedEvent,
    PlayerHurtEvent, blink_phase, knockback_direction, knockback_velocity, resolve_hit,
};
use crate::movement::{GameLayer, MotionState, MotionTimer, PLAYER_COLOR, Player};

const HAZARD_COLOR: Color = Color::srgb(0.8, 0.2, 0.2);
const DAMAGE_COLOR: Color = Color::srgb(1.0, 0.3, 0.3);
const DEFEATED_COLOR: Color = Color::srgb(0.35, 0.35, 0.35);

fn health_tuning(content: Option<Res<MovementContent>>) -> HealthTuning {
    content.map(|c| c.health.clone()).unwrap_or_default()
}

fn hazard_hit(
    source: Entity,
    hazard: &Hazard,
    from: Vec2,
    target: Entity,
    at: Vec2,
) -> DamageEvent {
    DamageEvent {
        source,
        target,
        amount: hazard.damage,
        knockback: knockback_direction(from, at) * hazard.knockback,
    }
}

pub fn spawn_hazard(
    commands: &mut Commands,
    hazard: Hazard,
    size: Vec2,
    position: Vec2,
) -> Entity {
    commands
        .spawn((
            Name::new("Hazard"),
            hazard,
            Sprite {
                color: HAZARD_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player, GameLayer::Projectile]),
        ))
        .id()
}

/// Track which players are inside which hazards and hit on first contact.
pub(crate) fn track_hazard_contacts(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut hazards: Query<(&mut Hazard, &Transform)>,
    players: Query<&Transform, With<Player>>,
) {
    for event in started.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hazard_entity, player) in pairs {
            let Ok(player_transform) = players.get(player) else {
                continue;
            };
            let Ok((mut hazard, hazard_transform)) = hazards.get_mut(hazard_entity) else {
                continue;
            };

            hazard.begin_contact(player);
            damage_events.write(hazard_hit(
                hazard_entity,
                &hazard,
                hazard_transform.translation.truncate(),
                player,
                player_transform.translation.truncate(),
            ));
        }
    }

    for event in ended.read() {
        for (hazard_entity, player) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            if let Ok((mut hazard, _)) = hazards.get_mut(hazard_entity) {
                hazard.end_contact(player);
            }
        }
    }
}

/// Re-hit players that stay inside continuous hazards.
pub(crate) fn repeat_hazard_damage(
    time: Res<Time>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut hazards: Query<(Entity, &mut Hazard, &Transform)>,
    players: Query<&Transform, With<Player>>,
) {
    let dt = time.delta_secs();

    for (hazard_entity, mut hazard, hazard_transform) in &mut hazards {
        for player in hazard.tick(dt) {
            let Ok(player_transform) = players.get(player) else {
                continue;
            };
            damage_events.write(hazard_hit(
                hazard_entity,
                &hazard,
                hazard_transform.translation.truncate(),
                player,
                player_transform.translation.truncate(),
            ));
        }
    }
}

pub(crate) fn apply_damage(
    mut commands: Commands,
    content: Option<Res<MovementContent>>,
    mut damage_events: MessageReader<DamageEvent>,
    mut hurt_events: MessageWriter<PlayerHurtEvent>,
    mut defeated_events: MessageWriter<PlayerDefeatedEvent>,
    mut players: Query<
        (&mut Health, &mut MotionState, &mut LinearVelocity),
        (With<Player>, Without<Defeated>),
    >,
) {
    let tuning = health_tuning(content);

    for event in damage_events.read() {
        let Ok((mut health, mut state, mut velocity)) = players.get_mut(event.target) else {
            continue;
        };

        let outcome = resolve_hit(
            &mut health,
            &mut state.timers,
            event.amount,
            tuning.invulnerability_time,
        );
        match outcome {
            HitOutcome::Blocked => {
                debug!("Hit from {:?} blocked", event.source);
            }
            HitOutcome::Hurt { dealt } => {
                velocity.0 = knockback_velocity(velocity.0, event.knockback, &tuning);
                info!(
                    "Player hurt: dealt={}, health={}/{}",
                    dealt, health.current, health.max
                );
                hurt_events.write(PlayerHurtEvent {
                    entity: event.target,
                    dealt,
                    remaining: health.current,
                });
            }
            HitOutcome::Killed { dealt } => {
                velocity.x = 0.0;
                commands.entity(event.target).insert(Defeated);
                info!("Player defeated: final hit dealt={}", dealt);
                defeated_events.write(PlayerDefeatedEvent {
                    entity: event.target,
                });
            }
        }
    }
}

pub(crate) fn mark_defeated(
    mut defeated_events: MessageReader<PlayerDefeatedEvent>,
    mut sprites: Query<&mut Sprite>,
) {
    for event in defeated_events.read() {
        if let Ok(mut sprite) = sprites.get_mut(event.entity) {
            sprite.color = DEFEATED_COLOR;
        }
    }
}

pub(crate) fn blink_while_invulnerable(
    time: Res<Time>,
    content: Option<Res<MovementContent>>,
    mut players: Query<(&MotionState, &mut Sprite), (With<Player>, Without<Defeated>)>,
) {
    let interval = health_tuning(content).blink_interval;

    for (state, mut sprite) in &mut players {
        let tinted = state.timers.is_running(MotionTimer::Invulnerability)
            && blink_phase(time.elapsed_secs(), interval);
        let color = if tinted { DAMAGE_COLOR } else { PLAYER_COLOR };
        if sprite.color != color {
            sprite.color = color;
        }
    }
}

pub(crate) fn log_hurt_events(mut hurt_events: MessageReader<PlayerHurtEvent>) {
    for event in hurt_events.read() {
        debug!(
            "{:?} hurt: dealt={}, remaining={}",
            event.entity, event.dealt, event.remaining
        );
    }
}

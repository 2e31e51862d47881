//! Movement domain: player bootstrap from validated movement content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::MovementContent;
use crate::health::Health;
use crate::movement::{GameLayer, MotionState, MotionStateMachine, Player, ProbeAnchors};

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
pub const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);

/// Spawn the player controller. Without validated content the controller is
/// not started at all.
pub(crate) fn spawn_player(
    mut commands: Commands,
    content: Option<Res<MovementContent>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let Some(content) = content else {
        error!("No valid movement content; player controller not started");
        return;
    };

    let machine = match MotionStateMachine::new(content.tuning.clone()) {
        Ok(machine) => machine,
        Err(e) => {
            error!("Player controller rejected its tuning: {}", e);
            return;
        }
    };

    info!(
        "Spawning player: move_speed={}, jump_force={}, jump_height={:.1}, dash_distance={:.1}",
        machine.tuning().move_speed,
        machine.tuning().jump_force,
        machine.tuning().single_jump_height(),
        machine.tuning().dash_distance()
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            Name::new("Player"),
            machine,
            MotionState::new(ProbeAnchors::for_body(PLAYER_SIZE)),
            Health::new(content.health.max_health),
        ),
        // Rendering
        Sprite {
            color: PLAYER_COLOR,
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, -100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Pickup, GameLayer::Hazard],
            ),
        ),
    ));
}

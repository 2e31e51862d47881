//! Combat domain: shot notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted when the player fires, for animation and audio sinks
#[derive(Debug)]
pub struct ShotFiredEvent {
    pub shooter: Entity,
    pub projectile: Entity,
}

impl Message for ShotFiredEvent {}

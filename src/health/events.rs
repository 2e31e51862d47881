//! Health domain: damage requests and their results.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    pub knockback: Vec2,
}

impl Message for DamageEvent {}

/// A hit landed and the player survived it
#[derive(Debug)]
pub struct PlayerHurtEvent {
    pub entity: Entity,
    pub dealt: f32,
    pub remaining: f32,
}

impl Message for PlayerHurtEvent {}

#[derive(Debug)]
pub struct PlayerDefeatedEvent {
    pub entity: Entity,
}

impl Message for PlayerDefeatedEvent {}

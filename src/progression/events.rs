//! Progression domain: unlock notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::progression::Ability;

/// Emitted the first time an ability is unlocked in a session
#[derive(Debug)]
pub struct AbilityUnlockedEvent {
    pub ability: Ability,
    /// Entity that picked up the unlock, if any
    pub collector: Option<Entity>,
}

impl Message for AbilityUnlockedEvent {}

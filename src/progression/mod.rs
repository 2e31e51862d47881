//! Progression domain: ability unlock state and the pickups that grant it.

mod abilities;
mod events;
mod pickups;

#[cfg(test)]
mod tests;

pub use abilities::{Ability, AbilityFlags, UnknownAbility};
pub use events::AbilityUnlockedEvent;
pub use pickups::{AbilityPickup, spawn_ability_pickup};

use bevy::prelude::*;

use crate::progression::pickups::{announce_unlocks, collect_ability_pickups};

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AbilityFlags>()
            .add_message::<AbilityUnlockedEvent>()
            .add_systems(Update, (collect_ability_pickups, announce_unlocks).chain());
    }
}

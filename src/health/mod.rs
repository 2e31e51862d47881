//! Health domain: hazards, damage, invulnerability and defeat.

mod components;
mod damage;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Defeated, Hazard, Health};
pub use damage::{HitOutcome, blink_phase, knockback_direction, knockback_velocity, resolve_hit};
pub use events::{DamageEvent, PlayerDefeatedEvent, PlayerHurtEvent};
pub use resources::HealthTuning;
pub use systems::spawn_hazard;

use bevy::prelude::*;

use crate::health::systems::{
    apply_damage, blink_while_invulnerable, log_hurt_events, mark_defeated,
    repeat_hazard_damage, track_hazard_contacts,
};

pub struct HealthPlugin;

impl Plugin for HealthPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<PlayerHurtEvent>()
            .add_message::<PlayerDefeatedEvent>()
            .add_systems(
                Update,
                (
                    track_hazard_contacts,
                    repeat_hazard_damage,
                    apply_damage,
                    (mark_defeated, log_hurt_events),
                )
                    .chain(),
            )
            .add_systems(Update, blink_while_invulnerable.after(apply_damage));
    }
}

//! Combat domain: the player's ranged shot.

mod components;
mod events;
mod resources;
mod systems;


pub use components::{Projectile, muzzle_position, projectile_velocity};
pub use events::ShotFiredEvent;
pub use resources::WeaponTuning;

use bevy::prelude::*;

use crate::combat::systems::{
    despawn_projectiles_on_impact, expire_projectiles, fire_projectiles, log_shots,
};
use crate::core::gameplay_active;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ShotFiredEvent>()
            .add_systems(
                Update,
                (fire_projectiles, log_shots)
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(Update, (expire_projectiles, despawn_projectiles_on_impact));
    }
}

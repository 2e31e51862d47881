//! Data definitions for the movement content file.
//!
//! These structs mirror assets/data/movement.ron and are used for
//! deserialization. Ability names stay strings here; validation resolves them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::WeaponTuning;
use crate::health::HealthTuning;
use crate::movement::MovementTuning;
use crate::progression::Ability;

pub const MOVEMENT_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Raw file layout (movement.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementConfig {
    pub schema_version: u32,
    #[serde(default)]
    pub tuning: MovementTuning,
    #[serde(default)]
    pub health: HealthTuning,
    #[serde(default)]
    pub weapon: WeaponTuning,
    /// Abilities unlocked when the session starts
    #[serde(default)]
    pub starting_abilities: Vec<String>,
    /// Ability pickups placed in the test room
    #[serde(default)]
    pub pickups: Vec<PickupDef>,
    /// Damaging areas placed in the test room
    #[serde(default)]
    pub hazards: Vec<HazardDef>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            schema_version: MOVEMENT_SCHEMA_VERSION,
            tuning: MovementTuning::default(),
            health: HealthTuning::default(),
            weapon: WeaponTuning::default(),
            starting_abilities: Vec::new(),
            pickups: Vec::new(),
            hazards: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PickupDef {
    pub ability: String,
    pub position: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HazardDef {
    pub position: (f32, f32),
    pub size: (f32, f32),
    pub damage: f32,
    #[serde(default)]
    pub knockback: f32,
    /// Seconds between repeated hits while the player stays inside
    #[serde(default)]
    pub repeat_interval: Option<f32>,
}

// ============================================================================
// Validated content
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupSpawn {
    pub ability: Ability,
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardSpawn {
    pub position: Vec2,
    pub size: Vec2,
    pub damage: f32,
    pub knockback: f32,
    pub repeat_interval: Option<f32>,
}

/// Movement content that passed validation. Only present as a resource when
/// the controller is allowed to start.
#[derive(Resource, Debug, Clone)]
pub struct MovementContent {
    pub tuning: MovementTuning,
    pub health: HealthTuning,
    pub weapon: WeaponTuning,
    pub starting_abilities: Vec<Ability>,
    pub pickups: Vec<PickupSpawn>,
    pub hazards: Vec<HazardSpawn>,
}

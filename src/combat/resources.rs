//! Combat domain: weapon tuning.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeaponTuning {
    pub projectile_speed: f32,
    /// Seconds before an unobstructed shot is removed
    pub projectile_lifetime: f32,
    pub projectile_radius: f32,
    /// Spawn offset from the body center for a body facing right
    pub muzzle_offset: (f32, f32),
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            projectile_speed: 900.0,
            projectile_lifetime: 1.2,
            projectile_radius: 4.0,
            muzzle_offset: (16.0, 6.0),
        }
    }
}

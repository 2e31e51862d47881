//! Health domain: damage tuning.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthTuning {
    pub max_health: f32,
    /// Seconds of damage immunity after a non-lethal hit
    pub invulnerability_time: f32,
    /// Sprite blink half-period while invulnerable
    pub blink_interval: f32,
    /// Knockback always lifts the body at least this much
    pub min_vertical_knockback: f32,
    pub max_knockback_speed: f32,
}

impl Default for HealthTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            invulnerability_time: 1.5,
            blink_interval: 0.1,
            min_vertical_knockback: 200.0,
            max_knockback_speed: 800.0,
        }
    }
}

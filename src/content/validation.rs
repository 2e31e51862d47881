//! Validation for movement tuning and ability references.

use bevy::prelude::*;
use thiserror::Error;

use super::data::{
    HazardDef, HazardSpawn, MOVEMENT_SCHEMA_VERSION, MovementConfig, MovementContent, PickupSpawn,
};
use crate::combat::WeaponTuning;
use crate::health::HealthTuning;
use crate::movement::MovementTuning;
use crate::progression::{Ability, UnknownAbility};

/// A configuration problem that prevents a controller from starting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tuning field '{field}' must be {requirement}, got {value}")]
    InvalidTuning {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },
    #[error("{context}: {source}")]
    UnknownAbility {
        context: String,
        #[source]
        source: UnknownAbility,
    },
    #[error("unsupported movement schema version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },
}

/// Helper macro for checking one finite tuning value against a predicate
macro_rules! check_tuning {
    ($errors:expr, $tuning:expr, $field:ident, $requirement:expr, |$v:ident| $ok:expr) => {
        let $v = $tuning.$field;
        if !($v.is_finite() && $ok) {
            $errors.push(ConfigError::InvalidTuning {
                field: stringify!($field),
                requirement: $requirement,
                value: $v,
            });
        }
    };
}

/// Validate every tunable. Returns a list of errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    // Speeds and rates
    check_tuning!(errors, tuning, move_speed, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, acceleration, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, deceleration, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, air_acceleration, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, jump_force, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, dash_force, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, wall_slide_speed, ">= 0", |v| v >= 0.0);
    check_tuning!(errors, tuning, wall_jump_force, ">= 0", |v| v >= 0.0);
    check_tuning!(errors, tuning, gravity, ">= 0", |v| v >= 0.0);

    // Multipliers
    check_tuning!(errors, tuning, jump_cut_multiplier, "in (0, 1]", |v| v > 0.0
        && v <= 1.0);
    check_tuning!(errors, tuning, fall_multiplier, ">= 1", |v| v >= 1.0);
    check_tuning!(errors, tuning, low_jump_multiplier, ">= 1", |v| v >= 1.0);

    // Time windows
    check_tuning!(errors, tuning, coyote_time, ">= 0", |v| v >= 0.0);
    check_tuning!(errors, tuning, jump_buffer_time, ">= 0", |v| v >= 0.0);
    check_tuning!(errors, tuning, wall_jump_time, ">= 0", |v| v >= 0.0);
    check_tuning!(errors, tuning, dash_cooldown, ">= 0", |v| v >= 0.0);
    check_tuning!(errors, tuning, dash_time, "> 0", |v| v > 0.0);

    // Probe geometry
    check_tuning!(errors, tuning, ground_check_radius, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, wall_check_distance, "> 0", |v| v > 0.0);

    let (x, y) = tuning.wall_jump_direction;
    for (field, value) in [("wall_jump_direction.0", x), ("wall_jump_direction.1", y)] {
        if !value.is_finite() {
            errors.push(ConfigError::InvalidTuning {
                field,
                requirement: "finite",
                value,
            });
        }
    }

    errors
}

pub fn validate_health(tuning: &HealthTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    check_tuning!(errors, tuning, max_health, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, invulnerability_time, ">= 0", |v| v >= 0.0);
    check_tuning!(errors, tuning, blink_interval, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, min_vertical_knockback, ">= 0", |v| v >= 0.0);
    check_tuning!(errors, tuning, max_knockback_speed, "> 0", |v| v > 0.0);
    errors
}

pub fn validate_weapon(tuning: &WeaponTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    check_tuning!(errors, tuning, projectile_speed, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, projectile_lifetime, "> 0", |v| v > 0.0);
    check_tuning!(errors, tuning, projectile_radius, "> 0", |v| v > 0.0);

    let (x, y) = tuning.muzzle_offset;
    for (field, value) in [("muzzle_offset.0", x), ("muzzle_offset.1", y)] {
        if !value.is_finite() {
            errors.push(ConfigError::InvalidTuning {
                field,
                requirement: "finite",
                value,
            });
        }
    }
    errors
}

fn resolve_hazard(def: &HazardDef, errors: &mut Vec<ConfigError>) -> Option<HazardSpawn> {
    let before = errors.len();
    check_tuning!(errors, def, damage, "> 0", |v| v > 0.0);
    check_tuning!(errors, def, knockback, ">= 0", |v| v >= 0.0);
    for (field, value) in [("hazard size.0", def.size.0), ("hazard size.1", def.size.1)] {
        if !(value.is_finite() && value > 0.0) {
            errors.push(ConfigError::InvalidTuning {
                field,
                requirement: "> 0",
                value,
            });
        }
    }
    if let Some(interval) = def.repeat_interval
        && !(interval.is_finite() && interval > 0.0)
    {
        errors.push(ConfigError::InvalidTuning {
            field: "repeat_interval",
            requirement: "> 0",
            value: interval,
        });
    }

    (errors.len() == before).then(|| HazardSpawn {
        position: Vec2::new(def.position.0, def.position.1),
        size: Vec2::new(def.size.0, def.size.1),
        damage: def.damage,
        knockback: def.knockback,
        repeat_interval: def.repeat_interval,
    })
}

fn resolve_ability(name: &str, context: String, errors: &mut Vec<ConfigError>) -> Option<Ability> {
    match name.parse::<Ability>() {
        Ok(ability) => Some(ability),
        Err(source) => {
            errors.push(ConfigError::UnknownAbility { context, source });
            None
        }
    }
}

/// Validate a loaded movement file and resolve its ability names.
/// Returns every problem found, not just the first.
pub fn resolve_movement_config(
    config: MovementConfig,
) -> Result<MovementContent, Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.schema_version != MOVEMENT_SCHEMA_VERSION {
        errors.push(ConfigError::SchemaVersion {
            found: config.schema_version,
            expected: MOVEMENT_SCHEMA_VERSION,
        });
    }

    errors.extend(validate_tuning(&config.tuning));
    errors.extend(validate_health(&config.health));
    errors.extend(validate_weapon(&config.weapon));

    let starting_abilities: Vec<Ability> = config
        .starting_abilities
        .iter()
        .enumerate()
        .filter_map(|(i, name)| {
            resolve_ability(name, format!("starting_abilities[{i}]"), &mut errors)
        })
        .collect();

    let pickups: Vec<PickupSpawn> = config
        .pickups
        .iter()
        .enumerate()
        .filter_map(|(i, def)| {
            let context = format!("pickups[{i}].ability");
            let ability = resolve_ability(&def.ability, context, &mut errors)?;
            Some(PickupSpawn {
                ability,
                position: Vec2::new(def.position.0, def.position.1),
            })
        })
        .collect();

    let hazards: Vec<HazardSpawn> = config
        .hazards
        .iter()
        .filter_map(|def| resolve_hazard(def, &mut errors))
        .collect();

    if errors.is_empty() {
        Ok(MovementContent {
            tuning: config.tuning,
            health: config.health,
            weapon: config.weapon,
            starting_abilities,
            pickups,
            hazards,
        })
    } else {
        Err(errors)
    }
}

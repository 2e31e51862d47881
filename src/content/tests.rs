//! Content domain: tests for movement file parsing and validation.

use super::{
    ConfigError, HazardDef, MOVEMENT_SCHEMA_VERSION, MovementConfig, parse_movement_config,
    resolve_movement_config, validate_health, validate_tuning, validate_weapon,
};
use crate::combat::WeaponTuning;
use crate::health::HealthTuning;
use crate::movement::MovementTuning;
use crate::progression::Ability;

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_minimal_file_uses_default_tuning() {
    let config = parse_movement_config("(schema_version: 1)", "inline").unwrap();

    assert_eq!(config.schema_version, 1);
    assert_eq!(config.tuning, MovementTuning::default());
    assert!(config.starting_abilities.is_empty());
    assert!(config.pickups.is_empty());
    assert_eq!(config.health, HealthTuning::default());
    assert_eq!(config.weapon, WeaponTuning::default());
    assert!(config.hazards.is_empty());
}

#[test]
fn test_parse_partial_tuning_overrides_only_named_fields() {
    let source = r#"(
        schema_version: 1,
        tuning: (
            move_speed: 8.0,
            coyote_time: 0.15,
            wall_jump_direction: (1.0, 2.0),
        ),
        starting_abilities: ["dash"],
        pickups: [(ability: "walljump", position: (10.0, -4.0))],
    )"#;

    let config = parse_movement_config(source, "inline").unwrap();
    let defaults = MovementTuning::default();

    assert_eq!(config.tuning.move_speed, 8.0);
    assert_eq!(config.tuning.coyote_time, 0.15);
    assert_eq!(config.tuning.wall_jump_direction, (1.0, 2.0));
    assert_eq!(config.tuning.jump_force, defaults.jump_force);
    assert_eq!(config.starting_abilities, vec!["dash".to_string()]);
    assert_eq!(config.pickups.len(), 1);
    assert_eq!(config.pickups[0].position, (10.0, -4.0));
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_movement_config("(schema_version: ", "movement.ron").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("movement.ron"));
    assert!(message.contains("Parse error"));
    assert!(!err.is_missing_file());
}

#[test]
fn test_missing_file_is_reported_as_missing() {
    let err =
        super::load_movement_config(std::path::Path::new("does/not/exist/movement.ron"))
            .unwrap_err();
    assert!(err.is_missing_file());
}

#[test]
fn test_shipped_movement_file_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(super::MOVEMENT_CONFIG_PATH);
    let config = super::load_movement_config(&path).unwrap();
    let content = resolve_movement_config(config).unwrap();

    assert!(!content.pickups.is_empty());
    assert!(!content.hazards.is_empty());
}

// -----------------------------------------------------------------------------
// Tuning validation
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&MovementTuning::default()).is_empty());
}

#[test]
fn test_negative_time_window_is_rejected() {
    let tuning = MovementTuning {
        coyote_time: -0.1,
        ..MovementTuning::default()
    };

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        ConfigError::InvalidTuning {
            field: "coyote_time",
            ..
        }
    ));
}

#[test]
fn test_zero_move_speed_and_dash_time_are_rejected() {
    let tuning = MovementTuning {
        move_speed: 0.0,
        dash_time: 0.0,
        ..MovementTuning::default()
    };

    let fields: Vec<&str> = validate_tuning(&tuning)
        .iter()
        .filter_map(|e| match e {
            ConfigError::InvalidTuning { field, .. } => Some(*field),
            _ => None,
        })
        .collect();

    assert_eq!(fields, vec!["move_speed", "dash_time"]);
}

#[test]
fn test_non_finite_values_are_rejected() {
    let tuning = MovementTuning {
        gravity: f32::NAN,
        wall_jump_direction: (f32::INFINITY, 1.5),
        ..MovementTuning::default()
    };

    assert_eq!(validate_tuning(&tuning).len(), 2);
}

#[test]
fn test_multiplier_ranges() {
    let tuning = MovementTuning {
        fall_multiplier: 0.5,
        jump_cut_multiplier: 1.5,
        ..MovementTuning::default()
    };
    assert_eq!(validate_tuning(&tuning).len(), 2);

    let tuning = MovementTuning {
        low_jump_multiplier: 1.0,
        jump_cut_multiplier: 1.0,
        ..MovementTuning::default()
    };
    assert!(validate_tuning(&tuning).is_empty());
}

// -----------------------------------------------------------------------------
// Ability references
// -----------------------------------------------------------------------------

#[test]
fn test_resolve_config_parses_ability_names() {
    let config = MovementConfig {
        starting_abilities: vec!["DoubleJump".to_string(), "dash".to_string()],
        ..MovementConfig::default()
    };

    let content = resolve_movement_config(config).unwrap();
    assert_eq!(
        content.starting_abilities,
        vec![Ability::DoubleJump, Ability::Dash]
    );
}

#[test]
fn test_resolve_config_collects_every_error() {
    let source = r#"(
        schema_version: 7,
        tuning: (jump_force: -1.0),
        starting_abilities: ["glide"],
        pickups: [(ability: "blink", position: (0.0, 0.0))],
    )"#;
    let config = parse_movement_config(source, "inline").unwrap();

    let errors = resolve_movement_config(config).unwrap_err();

    assert_eq!(errors.len(), 4);
    assert!(errors.contains(&ConfigError::SchemaVersion {
        found: 7,
        expected: MOVEMENT_SCHEMA_VERSION,
    }));
    let unknown: Vec<String> = errors
        .iter()
        .filter_map(|e| match e {
            ConfigError::UnknownAbility { context, .. } => Some(context.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        unknown,
        vec![
            "starting_abilities[0]".to_string(),
            "pickups[0].ability".to_string()
        ]
    );
}

// -----------------------------------------------------------------------------
// Health, weapon and hazards
// -----------------------------------------------------------------------------

fn hazard(damage: f32) -> HazardDef {
    HazardDef {
        position: (0.0, 0.0),
        size: (10.0, 2.0),
        damage,
        knockback: 100.0,
        repeat_interval: None,
    }
}

#[test]
fn test_parse_health_weapon_and_hazards() {
    let source = r#"(
        schema_version: 1,
        health: (max_health: 3.0, invulnerability_time: 2.0),
        weapon: (projectile_speed: 12.0),
        hazards: [
            (position: (1.0, 2.0), size: (4.0, 1.0), damage: 1.0),
            (position: (5.0, 2.0), size: (4.0, 1.0), damage: 2.0, repeat_interval: 0.5),
        ],
    )"#;

    let config = parse_movement_config(source, "inline").unwrap();

    assert_eq!(config.health.max_health, 3.0);
    assert_eq!(config.health.invulnerability_time, 2.0);
    assert_eq!(
        config.health.blink_interval,
        HealthTuning::default().blink_interval
    );
    assert_eq!(config.weapon.projectile_speed, 12.0);
    assert_eq!(config.hazards[0].knockback, 0.0);
    assert_eq!(config.hazards[0].repeat_interval, None);
    assert_eq!(config.hazards[1].repeat_interval, Some(0.5));

    let content = resolve_movement_config(config).unwrap();
    assert_eq!(content.hazards.len(), 2);
    assert_eq!(content.hazards[1].size.x, 4.0);
    assert_eq!(content.hazards[1].repeat_interval, Some(0.5));
}

#[test]
fn test_default_health_and_weapon_are_valid() {
    assert!(validate_health(&HealthTuning::default()).is_empty());
    assert!(validate_weapon(&WeaponTuning::default()).is_empty());
}

#[test]
fn test_invalid_health_and_weapon_are_rejected() {
    let health = HealthTuning {
        max_health: 0.0,
        invulnerability_time: -1.0,
        ..HealthTuning::default()
    };
    let weapon = WeaponTuning {
        projectile_lifetime: f32::NAN,
        muzzle_offset: (f32::INFINITY, 0.0),
        ..WeaponTuning::default()
    };

    let health_fields: Vec<&str> = validate_health(&health)
        .iter()
        .filter_map(|e| match e {
            ConfigError::InvalidTuning { field, .. } => Some(*field),
            _ => None,
        })
        .collect();
    let weapon_fields: Vec<&str> = validate_weapon(&weapon)
        .iter()
        .filter_map(|e| match e {
            ConfigError::InvalidTuning { field, .. } => Some(*field),
            _ => None,
        })
        .collect();

    assert_eq!(health_fields, vec!["max_health", "invulnerability_time"]);
    assert_eq!(weapon_fields, vec!["projectile_lifetime", "muzzle_offset.0"]);
}

#[test]
fn test_invalid_hazards_are_rejected() {
    let config = MovementConfig {
        hazards: vec![
            hazard(0.0),
            HazardDef {
                size: (0.0, 2.0),
                repeat_interval: Some(-1.0),
                ..hazard(5.0)
            },
            hazard(5.0),
        ],
        ..MovementConfig::default()
    };

    let errors = resolve_movement_config(config).unwrap_err();
    let fields: Vec<&str> = errors
        .iter()
        .filter_map(|e| match e {
            ConfigError::InvalidTuning { field, .. } => Some(*field),
            _ => None,
        })
        .collect();

    assert_eq!(fields, vec!["damage", "hazard size.0", "repeat_interval"]);
}

//! Health domain: tests for hit resolution, hazards and knockback.

use bevy::prelude::*;

use super::{
    Hazard, Health, HealthTuning, HitOutcome, blink_phase, knockback_direction,
    knockback_velocity, resolve_hit,
};
use crate::movement::{MotionTimer, TimerBank};

fn two_entities() -> (Entity, Entity) {
    let mut world = World::new();
    (world.spawn_empty().id(), world.spawn_empty().id())
}

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[test]
fn test_take_damage_never_goes_below_zero() {
    let mut health = Health::new(10.0);

    assert_eq!(health.take_damage(4.0), 4.0);
    assert_eq!(health.current, 6.0);
    assert!(!health.is_dead());

    assert_eq!(health.take_damage(50.0), 6.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

// -----------------------------------------------------------------------------
// Hit resolution
// -----------------------------------------------------------------------------

#[test]
fn test_hit_arms_invulnerability() {
    let mut health = Health::new(10.0);
    let mut timers = TimerBank::default();

    let outcome = resolve_hit(&mut health, &mut timers, 3.0, 1.5);

    assert_eq!(outcome, HitOutcome::Hurt { dealt: 3.0 });
    assert_eq!(health.current, 7.0);
    assert_eq!(timers.remaining(MotionTimer::Invulnerability), 1.5);
}

#[test]
fn test_hits_are_blocked_while_invulnerable() {
    let mut health = Health::new(10.0);
    let mut timers = TimerBank::default();
    resolve_hit(&mut health, &mut timers, 3.0, 1.0);

    assert_eq!(
        resolve_hit(&mut health, &mut timers, 3.0, 1.0),
        HitOutcome::Blocked
    );
    assert_eq!(health.current, 7.0);

    // Window runs out, next hit lands
    timers.tick(1.0);
    assert_eq!(
        resolve_hit(&mut health, &mut timers, 3.0, 1.0),
        HitOutcome::Hurt { dealt: 3.0 }
    );
    assert_eq!(health.current, 4.0);
}

#[test]
fn test_lethal_hit_kills_without_invulnerability() {
    let mut health = Health::new(5.0);
    let mut timers = TimerBank::default();

    let outcome = resolve_hit(&mut health, &mut timers, 8.0, 1.5);

    assert_eq!(outcome, HitOutcome::Killed { dealt: 5.0 });
    assert!(health.is_dead());
    assert!(!timers.is_running(MotionTimer::Invulnerability));

    // Dead bodies take no further hits
    assert_eq!(
        resolve_hit(&mut health, &mut timers, 1.0, 1.5),
        HitOutcome::Blocked
    );
}

#[test]
fn test_empty_hits_are_blocked() {
    let mut health = Health::new(5.0);
    let mut timers = TimerBank::default();

    for amount in [0.0, -2.0, f32::NAN] {
        assert_eq!(
            resolve_hit(&mut health, &mut timers, amount, 1.5),
            HitOutcome::Blocked
        );
    }
    assert_eq!(health.current, 5.0);
    assert!(!timers.is_running(MotionTimer::Invulnerability));
}

// -----------------------------------------------------------------------------
// Hazards
// -----------------------------------------------------------------------------

#[test]
fn test_single_hit_hazard_never_repeats() {
    let (player, _) = two_entities();
    let mut hazard = Hazard::new(10.0, 300.0);

    hazard.begin_contact(player);

    assert!(hazard.tick(5.0).is_empty());
}

#[test]
fn test_continuous_hazard_repeats_while_touching() {
    let (player, _) = two_entities();
    let mut hazard = Hazard::new(5.0, 0.0).continuous(1.0);

    hazard.begin_contact(player);
    // Contact hit is dealt by the caller, so the next one waits a full interval
    assert!(hazard.tick(0.6).is_empty());
    assert_eq!(hazard.tick(0.6), vec![player]);
    assert!(hazard.tick(0.5).is_empty());
    assert_eq!(hazard.tick(0.5), vec![player]);

    hazard.end_contact(player);
    assert!(hazard.tick(2.0).is_empty());
}

#[test]
fn test_repeated_contact_is_tracked_once() {
    let (player, other) = two_entities();
    let mut hazard = Hazard::new(5.0, 0.0).continuous(0.5);

    hazard.begin_contact(player);
    hazard.begin_contact(player);
    hazard.begin_contact(other);

    assert_eq!(hazard.tick(0.5), vec![player, other]);

    hazard.end_contact(player);
    assert_eq!(hazard.tick(0.5), vec![other]);
}

// -----------------------------------------------------------------------------
// Knockback and feedback
// -----------------------------------------------------------------------------

#[test]
fn test_knockback_direction_points_away_from_source() {
    assert_eq!(
        knockback_direction(Vec2::ZERO, Vec2::new(3.0, 0.0)),
        Vec2::X
    );
    assert_eq!(
        knockback_direction(Vec2::new(2.0, 0.0), Vec2::ZERO),
        Vec2::NEG_X
    );
    // Same spot pushes straight up
    assert_eq!(knockback_direction(Vec2::ONE, Vec2::ONE), Vec2::Y);
}

#[test]
fn test_knockback_always_lifts_the_body() {
    let tuning = HealthTuning::default();

    let velocity = knockback_velocity(Vec2::new(10.0, -50.0), Vec2::new(150.0, 0.0), &tuning);

    assert_eq!(velocity.x, 160.0);
    assert_eq!(velocity.y, -50.0 + tuning.min_vertical_knockback);
}

#[test]
fn test_knockback_speed_is_clamped() {
    let tuning = HealthTuning::default();

    let velocity = knockback_velocity(Vec2::ZERO, Vec2::new(5000.0, 5000.0), &tuning);

    assert!((velocity.length() - tuning.max_knockback_speed).abs() < 1e-3);
    assert!(velocity.x > 0.0 && velocity.y > 0.0);
}

#[test]
fn test_blink_phase_alternates() {
    assert!(blink_phase(0.05, 0.1));
    assert!(!blink_phase(0.15, 0.1));
    assert!(blink_phase(0.25, 0.1));
    // Degenerate interval keeps the tint on
    assert!(blink_phase(0.15, 0.0));
}

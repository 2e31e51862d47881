//! Health domain: hit resolution against the invulnerability window.

use bevy::prelude::*;

use crate::health::{Health, HealthTuning};
use crate::movement::{MotionTimer, TimerBank};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    /// Invulnerable, already dead, or nothing to deal
    Blocked,
    Hurt { dealt: f32 },
    Killed { dealt: f32 },
}

/// Apply one hit. A surviving target becomes invulnerable for
/// `invulnerability_time`; a lethal hit arms nothing.
pub fn resolve_hit(
    health: &mut Health,
    timers: &mut TimerBank,
    amount: f32,
    invulnerability_time: f32,
) -> HitOutcome {
    if amount.is_nan() || amount <= 0.0 {
        return HitOutcome::Blocked;
    }
    if health.is_dead() || timers.is_running(MotionTimer::Invulnerability) {
        return HitOutcome::Blocked;
    }

    let dealt = health.take_damage(amount);
    if health.is_dead() {
        HitOutcome::Killed { dealt }
    } else {
        timers.set(MotionTimer::Invulnerability, invulnerability_time);
        HitOutcome::Hurt { dealt }
    }
}

/// Knockback direction from a hazard to the body it hit. Bodies at the same
/// spot get pushed straight up.
pub fn knockback_direction(source: Vec2, target: Vec2) -> Vec2 {
    let direction = (target - source).normalize_or_zero();
    if direction == Vec2::ZERO {
        Vec2::Y
    } else {
        direction
    }
}

/// Body velocity after knockback is added on top of it.
pub fn knockback_velocity(current: Vec2, knockback: Vec2, tuning: &HealthTuning) -> Vec2 {
    let velocity = Vec2::new(
        current.x + knockback.x,
        current.y + knockback.y.max(tuning.min_vertical_knockback),
    );
    velocity.clamp_length_max(tuning.max_knockback_speed)
}

/// Whether the blinking sprite shows the damage tint at `elapsed` seconds.
pub fn blink_phase(elapsed: f32, interval: f32) -> bool {
    if interval <= 0.0 {
        return true;
    }
    (elapsed / interval) as u32 % 2 == 0
}

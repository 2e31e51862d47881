//! Combat domain: player shots.

use bevy::prelude::*;

use crate::combat::WeaponTuning;
use crate::movement::Facing;

/// A shot travelling in a straight line until it hits something or expires
#[derive(Component, Debug)]
pub struct Projectile {
    pub lifetime: f32,
}

impl Projectile {
    /// Returns true once the lifetime has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.lifetime -= dt;
        self.lifetime <= 0.0
    }
}

/// Where a shot leaves the body, mirrored with facing.
pub fn muzzle_position(origin: Vec2, facing: Facing, tuning: &WeaponTuning) -> Vec2 {
    let (x, y) = tuning.muzzle_offset;
    origin + Vec2::new(x * facing.sign(), y)
}

/// Shots fly horizontally in the facing direction.
pub fn projectile_velocity(facing: Facing, tuning: &WeaponTuning) -> Vec2 {
    Vec2::new(facing.sign() * tuning.projectile_speed, 0.0)
}

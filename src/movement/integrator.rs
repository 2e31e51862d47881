//! Movement domain: handing a tick's decision to the physics engine.

use avian2d::prelude::*;

use crate::movement::TickOutcome;

/// Applies a decided tick to a rigid body. Collision resolution and position
/// updates stay with the physics engine.
pub trait PhysicsIntegrator {
    fn integrate(&mut self, outcome: &TickOutcome);
}

/// Avian rigid body view: the velocity change is added as an impulse so
/// knockback and other forces written this tick are kept.
pub struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub gravity_scale: &'a mut GravityScale,
}

impl PhysicsIntegrator for AvianBody<'_> {
    fn integrate(&mut self, outcome: &TickOutcome) {
        self.velocity.0 += outcome.impulse;
        if self.gravity_scale.0 != outcome.gravity_scale {
            self.gravity_scale.0 = outcome.gravity_scale;
        }
    }
}

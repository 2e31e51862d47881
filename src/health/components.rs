//! Health domain: hit points, hazards and the defeated marker.

use bevy::prelude::*;

/// Hit points for the player
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Remove up to `amount` hit points. Returns what was actually removed.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Player is out of hit points; the controller no longer steps.
#[derive(Component, Debug)]
pub struct Defeated;

/// Damaging sensor. Hits on first contact, and again every `repeat_interval`
/// seconds while a body stays inside when the interval is set.
#[derive(Component, Debug, Clone)]
pub struct Hazard {
    pub damage: f32,
    pub knockback: f32,
    pub repeat_interval: Option<f32>,
    cooldown: f32,
    touching: Vec<Entity>,
}

impl Hazard {
    pub fn new(damage: f32, knockback: f32) -> Self {
        Self {
            damage,
            knockback,
            repeat_interval: None,
            cooldown: 0.0,
            touching: Vec::new(),
        }
    }

    pub fn continuous(mut self, interval: f32) -> Self {
        self.repeat_interval = Some(interval);
        self
    }

    /// Start tracking a body. The caller deals the contact hit itself.
    pub fn begin_contact(&mut self, entity: Entity) {
        if !self.touching.contains(&entity) {
            self.touching.push(entity);
        }
        if let Some(interval) = self.repeat_interval {
            self.cooldown = interval;
        }
    }

    pub fn end_contact(&mut self, entity: Entity) {
        self.touching.retain(|touching| *touching != entity);
    }

    /// Advance the repeat cooldown. Returns the bodies due another hit.
    pub fn tick(&mut self, dt: f32) -> Vec<Entity> {
        let Some(interval) = self.repeat_interval else {
            return Vec::new();
        };
        if self.touching.is_empty() {
            return Vec::new();
        }

        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return Vec::new();
        }
        self.cooldown = interval;
        self.touching.clone()
    }
}

//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunable constants for one controller. Loaded once and never changed for
/// the lifetime of the entity that owns them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    /// Horizontal approach rate (per second) while grounded
    pub acceleration: f32,
    /// Approach rate toward zero when there is no horizontal input
    pub deceleration: f32,
    pub air_acceleration: f32,
    pub jump_force: f32,
    /// Vertical velocity multiplier applied once when jump is released while rising
    pub jump_cut_multiplier: f32,
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub wall_slide_speed: f32,
    pub wall_jump_force: f32,
    /// Wall jump direction for a body facing left (pushing off a wall on its left)
    pub wall_jump_direction: (f32, f32),
    pub wall_jump_time: f32,
    pub dash_force: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
    pub dash_zeroes_vertical: bool,
    /// Magnitude of world gravity; also drives the fall tuning
    pub gravity: f32,
    pub ground_check_radius: f32,
    pub wall_check_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            acceleration: 30.0,
            deceleration: 50.0,
            air_acceleration: 15.0,
            jump_force: 680.0,
            jump_cut_multiplier: 0.5,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            coyote_time: 0.1,
            jump_buffer_time: 0.1,
            wall_slide_speed: 120.0,
            wall_jump_force: 400.0,
            wall_jump_direction: (1.0, 1.5),
            wall_jump_time: 0.2,
            dash_force: 800.0,
            dash_time: 0.2,
            dash_cooldown: 1.0,
            dash_zeroes_vertical: true,
            gravity: 1800.0,
            ground_check_radius: 6.0,
            wall_check_distance: 6.0,
        }
    }
}

impl MovementTuning {
    pub fn wall_jump_direction(&self) -> Vec2 {
        Vec2::new(self.wall_jump_direction.0, self.wall_jump_direction.1)
    }

    /// Apex height of a held ground jump under base gravity: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }

    /// Horizontal distance covered by one dash, ignoring collisions.
    pub fn dash_distance(&self) -> f32 {
        self.dash_force * self.dash_time
    }
}

/// One tick's worth of raw input. Produced fresh every fixed tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
}

impl InputSample {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(horizontal: f32) -> Self {
        Self {
            horizontal: horizontal.clamp(-1.0, 1.0),
            ..default()
        }
    }

    pub fn with_jump_pressed(mut self) -> Self {
        self.jump_pressed = true;
        self.jump_held = true;
        self
    }

    pub fn with_jump_held(mut self) -> Self {
        self.jump_held = true;
        self
    }

    pub fn with_dash_pressed(mut self) -> Self {
        self.dash_pressed = true;
        self
    }
}

/// Host-side input latch. Presses seen in `Update` stay set until the next
/// fixed tick takes a sample, so a press is seen by exactly one tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub horizontal: f32,
    pub jump_held: bool,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
}

impl MovementInput {
    pub fn take_sample(&mut self) -> InputSample {
        let sample = InputSample {
            horizontal: self.horizontal.clamp(-1.0, 1.0),
            jump_pressed: self.jump_just_pressed,
            jump_held: self.jump_held || self.jump_just_pressed,
            dash_pressed: self.dash_just_pressed,
        };
        self.jump_just_pressed = false;
        self.dash_just_pressed = false;
        sample
    }
}

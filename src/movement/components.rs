//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::TimerBank;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid terrain (floors, walls, platforms); target of the ground and wall probes
    Ground,
    /// Player character
    Player,
    /// Collectibles - should not block movement
    Pickup,
    /// Damaging sensors such as spikes
    Hazard,
    /// Player shots
    Projectile,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }

    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// The single mode that decides horizontal-acceleration policy for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gait {
    Grounded,
    WallSliding,
    Dashing,
    Airborne,
}

/// Probe origins relative to the body center. `None` means the anchor was never
/// configured and the matching probe always reports no contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeAnchors {
    pub ground: Option<Vec2>,
    /// Offset for the current facing; mirrored on every flip.
    pub wall: Option<Vec2>,
}

impl ProbeAnchors {
    /// Anchors at the feet and the leading edge of a box of the given size,
    /// laid out for a body facing right.
    pub fn for_body(size: Vec2) -> Self {
        Self {
            ground: Some(Vec2::new(0.0, -size.y * 0.5)),
            wall: Some(Vec2::new(size.x * 0.5, 0.0)),
        }
    }

    pub fn none() -> Self {
        Self {
            ground: None,
            wall: None,
        }
    }

    pub(crate) fn mirror_facing_offsets(&mut self) {
        if let Some(wall) = self.wall.as_mut() {
            wall.x = -wall.x;
        }
    }
}

/// Per-entity locomotion state, mutated only by the motion state machine.
#[derive(Component, Debug, Clone)]
pub struct MotionState {
    /// Body position sampled at the start of the tick
    pub position: Vec2,
    /// Working velocity; holds the decided velocity once the tick is stepped
    pub velocity: Vec2,
    pub facing: Facing,
    pub is_grounded: bool,
    pub was_grounded_last_tick: bool,
    pub is_on_wall: bool,
    pub is_wall_sliding: bool,
    pub is_dashing: bool,
    pub can_dash: bool,
    pub dash_velocity: Vec2,
    pub has_double_jumped: bool,
    pub jump_held_last_tick: bool,
    pub timers: TimerBank,
    pub anchors: ProbeAnchors,
}

impl MotionState {
    pub fn new(anchors: ProbeAnchors) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            is_grounded: false,
            was_grounded_last_tick: false,
            is_on_wall: false,
            is_wall_sliding: false,
            is_dashing: false,
            can_dash: true,
            dash_velocity: Vec2::ZERO,
            has_double_jumped: false,
            jump_held_last_tick: false,
            timers: TimerBank::default(),
            anchors,
        }
    }

    /// Copy the physics body's resolved position and velocity in before stepping.
    pub fn sync_body(&mut self, position: Vec2, velocity: Vec2) {
        self.position = position;
        self.velocity = velocity;
    }

    pub fn gait(&self) -> Gait {
        if self.is_dashing {
            Gait::Dashing
        } else if self.is_wall_sliding {
            Gait::WallSliding
        } else if self.is_grounded {
            Gait::Grounded
        } else {
            Gait::Airborne
        }
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new(ProbeAnchors::none())
    }
}

//! Movement domain: the per-tick locomotion decision.
//!
//! Each fixed tick runs the same ordered pipeline. Later steps read state the
//! earlier ones wrote in the same tick, so the order below is part of the
//! contract:
//!
//! 1. landing edge
//! 2. coyote refresh
//! 3. jump buffering
//! 4. wall contact and wall slide
//! 5. dash trigger
//! 6. dash end and recharge
//! 7. jump resolution (buffered, then double, then wall)
//! 8. horizontal acceleration
//! 9. wall slide clamp
//! 10. jump cut and fall tuning
//! 11. facing flip
//! 12. remember ground contact for the next landing edge

use bevy::prelude::*;

use crate::content::{ConfigError, validate_tuning};
use crate::movement::{
    EnvironmentProbe, Gait, InputSample, MotionState, MotionTimer, MovementEventKind,
    MovementTuning,
};
use crate::progression::{Ability, AbilityFlags};

/// Below this magnitude the horizontal axis counts as released.
const AXIS_DEADZONE: f32 = 0.01;

/// Everything a tick decided, ready for the integrator and event sinks.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Velocity the body should leave this tick with
    pub velocity: Vec2,
    /// `velocity` minus the sampled body velocity
    pub impulse: Vec2,
    /// Scale for engine gravity this tick (zero while dashing)
    pub gravity_scale: f32,
    pub events: Vec<MovementEventKind>,
}

impl TickOutcome {
    pub fn fired(&self, kind: MovementEventKind) -> bool {
        self.events.contains(&kind)
    }

    pub fn jump_count(&self) -> usize {
        self.events.iter().filter(|kind| kind.is_jump()).count()
    }
}

/// Validated, immutable tuning plus the decision pipeline that uses it.
#[derive(Component, Debug, Clone)]
pub struct MotionStateMachine {
    tuning: MovementTuning,
}

impl MotionStateMachine {
    /// Refuses to build a controller from tuning that fails validation.
    pub fn new(tuning: MovementTuning) -> Result<Self, ConfigError> {
        if let Some(error) = validate_tuning(&tuning).into_iter().next() {
            return Err(error);
        }
        Ok(Self { tuning })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// Run one tick. `state.position` and `state.velocity` must hold the
    /// physics body's resolved values (see [`MotionState::sync_body`]).
    pub fn step<P: EnvironmentProbe>(
        &self,
        state: &mut MotionState,
        input: &InputSample,
        abilities: &AbilityFlags,
        probe: &mut P,
        dt: f32,
    ) -> TickOutcome {
        // Paused tick: nothing moves, nothing is latched
        if dt.is_nan() || dt <= 0.0 {
            return TickOutcome {
                velocity: state.velocity,
                impulse: Vec2::ZERO,
                gravity_scale: Self::gravity_scale(state),
                events: Vec::new(),
            };
        }

        let sampled_velocity = state.velocity;
        let mut events = Vec::new();

        let expired = state.timers.tick(dt);
        state.is_grounded = match state.anchors.ground {
            Some(offset) => probe.probe_ground(state.position + offset),
            None => false,
        };

        // 1. Landing edge
        if state.is_grounded && !state.was_grounded_last_tick {
            state.timers.set(MotionTimer::Coyote, self.tuning.coyote_time);
            state.has_double_jumped = false;
            events.push(MovementEventKind::Landed);
        }

        // 2. Grounded bodies always hold a full coyote window
        if state.is_grounded {
            state.timers.set(MotionTimer::Coyote, self.tuning.coyote_time);
        }

        // 3. Buffer the press whether or not we can jump yet
        if input.jump_pressed {
            state
                .timers
                .set(MotionTimer::JumpBuffer, self.tuning.jump_buffer_time);
        }

        // 4. Wall contact on the facing side
        state.is_on_wall = match state.anchors.wall {
            Some(offset) => probe.probe_wall(state.position + offset, state.facing),
            None => false,
        };
        state.is_wall_sliding = state.is_on_wall
            && !state.is_grounded
            && state.velocity.y < 0.0
            && abilities.has(Ability::WallJump);

        // 5. Dash trigger
        if input.dash_pressed
            && state.can_dash
            && !state.is_dashing
            && abilities.has(Ability::Dash)
        {
            self.begin_dash(state, input);
            events.push(MovementEventKind::DashStarted);
        }

        // 6. Dash end and recharge
        if state.is_dashing && expired.contains(MotionTimer::DashDuration) {
            state.is_dashing = false;
            events.push(MovementEventKind::DashEnded);
            debug!("Dash ended: velocity={:?}", state.velocity);
        }
        if !state.can_dash
            && !state.is_dashing
            && state.is_grounded
            && !state.timers.is_running(MotionTimer::DashCooldown)
        {
            state.can_dash = true;
            debug!("Dash recharged");
        }

        if state.is_dashing {
            // Dash velocity is authoritative for the whole dash
            state.is_wall_sliding = false;
            state.velocity = state.dash_velocity;
        } else {
            // 7. Jump resolution
            if let Some(jump) = self.resolve_jump(state, input, abilities) {
                events.push(jump);
            }

            // 8. Horizontal acceleration
            if !state.timers.is_running(MotionTimer::WallJumpLock) {
                self.accelerate_horizontal(state, input, dt);
            }

            // 9. Wall slide clamp
            if state.is_wall_sliding {
                state.velocity.y = state.velocity.y.max(-self.tuning.wall_slide_speed);
            }

            // 10. Jump cut and fall tuning
            self.tune_vertical(state, input, dt);
        }

        // 11. Facing flip
        if !state.is_dashing
            && !state.timers.is_running(MotionTimer::WallJumpLock)
            && self.flip_facing(state, input)
        {
            events.push(MovementEventKind::FacingFlipped);
        }

        // 12.
        state.was_grounded_last_tick = state.is_grounded;
        state.jump_held_last_tick = input.jump_held;

        TickOutcome {
            velocity: state.velocity,
            impulse: state.velocity - sampled_velocity,
            gravity_scale: Self::gravity_scale(state),
            events,
        }
    }

    fn gravity_scale(state: &MotionState) -> f32 {
        if state.is_dashing { 0.0 } else { 1.0 }
    }

    fn begin_dash(&self, state: &mut MotionState, input: &InputSample) {
        let direction = if input.horizontal.abs() > AXIS_DEADZONE {
            input.horizontal.signum()
        } else {
            state.facing.sign()
        };
        let vertical = if self.tuning.dash_zeroes_vertical {
            0.0
        } else {
            state.velocity.y
        };

        state.is_dashing = true;
        state.can_dash = false;
        state.is_wall_sliding = false;
        state.dash_velocity = Vec2::new(direction * self.tuning.dash_force, vertical);
        state.velocity = state.dash_velocity;
        state
            .timers
            .set(MotionTimer::DashCooldown, self.tuning.dash_cooldown);
        state.timers.set(MotionTimer::DashDuration, self.tuning.dash_time);

        debug!(
            "Dash started: direction={}, velocity={:?}",
            direction, state.dash_velocity
        );
    }

    /// At most one jump source fires; the first whose precondition holds wins.
    fn resolve_jump(
        &self,
        state: &mut MotionState,
        input: &InputSample,
        abilities: &AbilityFlags,
    ) -> Option<MovementEventKind> {
        let buffered = state.timers.is_running(MotionTimer::JumpBuffer);
        let coyote = state.timers.is_running(MotionTimer::Coyote);

        if buffered && (coyote || state.is_wall_sliding) {
            state.velocity.y = self.tuning.jump_force;
            state.timers.reset(MotionTimer::JumpBuffer);
            state.timers.reset(MotionTimer::Coyote);
            debug!(
                "Jump: grounded={}, wall_sliding={}",
                state.is_grounded, state.is_wall_sliding
            );
            return Some(MovementEventKind::Jumped);
        }

        if input.jump_pressed
            && !state.is_grounded
            && !state.has_double_jumped
            && abilities.has(Ability::DoubleJump)
        {
            state.velocity.y = self.tuning.jump_force;
            state.has_double_jumped = true;
            state.timers.reset(MotionTimer::JumpBuffer);
            debug!("Double jump");
            return Some(MovementEventKind::DoubleJumped);
        }

        if input.jump_pressed && state.is_on_wall && abilities.has(Ability::WallJump) {
            // Configured direction pushes right; mirror it when the wall is on the right
            let mut direction = self.tuning.wall_jump_direction();
            if state.facing.is_right() {
                direction.x = -direction.x;
            }
            state.velocity = direction * self.tuning.wall_jump_force;
            state
                .timers
                .set(MotionTimer::WallJumpLock, self.tuning.wall_jump_time);
            state.timers.reset(MotionTimer::JumpBuffer);
            debug!("Wall jump: velocity={:?}", state.velocity);
            return Some(MovementEventKind::WallJumped);
        }

        None
    }

    fn accelerate_horizontal(&self, state: &mut MotionState, input: &InputSample, dt: f32) {
        let target = input.horizontal * self.tuning.move_speed;
        let rate = match state.gait() {
            // Dash velocity is fixed for its whole duration
            Gait::Dashing => return,
            _ if input.horizontal.abs() <= AXIS_DEADZONE => self.tuning.deceleration,
            Gait::Grounded => self.tuning.acceleration,
            Gait::Airborne | Gait::WallSliding => self.tuning.air_acceleration,
        };

        // Capped so a long tick lands on the target instead of overshooting it
        let factor = (rate * dt).min(1.0);
        state.velocity.x += (target - state.velocity.x) * factor;
    }

    fn tune_vertical(&self, state: &mut MotionState, input: &InputSample, dt: f32) {
        let released = state.jump_held_last_tick && !input.jump_held;
        if released && state.velocity.y > 0.0 {
            state.velocity.y *= self.tuning.jump_cut_multiplier;
        }

        if state.velocity.y < 0.0 {
            // Wall slide governs descent while it lasts
            if !state.is_wall_sliding {
                state.velocity.y -= self.tuning.gravity * (self.tuning.fall_multiplier - 1.0) * dt;
            }
        } else if state.velocity.y > 0.0 && !input.jump_held {
            state.velocity.y -= self.tuning.gravity * (self.tuning.low_jump_multiplier - 1.0) * dt;
        }
    }

    fn flip_facing(&self, state: &mut MotionState, input: &InputSample) -> bool {
        let wants_right = input.horizontal > AXIS_DEADZONE;
        let wants_left = input.horizontal < -AXIS_DEADZONE;

        if (wants_right && !state.facing.is_right()) || (wants_left && state.facing.is_right()) {
            state.facing = state.facing.flipped();
            state.anchors.mirror_facing_offsets();
            debug!("Facing flipped: {:?}", state.facing);
            return true;
        }
        false
    }
}

//! Movement domain: fixed-tick controller driver and event sinks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AvianBody, CachedProbe, Facing, MotionState, MotionStateMachine, MovementEvent,
    MovementEventKind, MovementInput, PhysicsIntegrator, Player, SpatialProbe,
};
use crate::health::Defeated;
use crate::progression::AbilityFlags;

/// Step every player controller once per fixed tick and hand the result to
/// the physics body.
pub(crate) fn drive_motion(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    abilities: Res<AbilityFlags>,
    mut input: ResMut<MovementInput>,
    mut movement_events: MessageWriter<MovementEvent>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &MotionStateMachine,
            &mut MotionState,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        (With<Player>, Without<Defeated>),
    >,
) {
    let dt = time.delta_secs();
    let sample = input.take_sample();

    for (entity, transform, machine, mut state, mut velocity, mut gravity_scale) in &mut query {
        state.sync_body(transform.translation.truncate(), velocity.0);

        let mut probe = CachedProbe::new(SpatialProbe::new(&spatial_query, machine.tuning()));
        let outcome = machine.step(&mut *state, &sample, &*abilities, &mut probe, dt);

        AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
        }
        .integrate(&outcome);

        for kind in &outcome.events {
            movement_events.write(MovementEvent {
                entity,
                kind: *kind,
            });
        }
    }
}

/// Mirror the sprite whenever a controller turns around.
pub(crate) fn flip_sprites(
    mut movement_events: MessageReader<MovementEvent>,
    mut query: Query<(&MotionState, &mut Sprite)>,
) {
    for event in movement_events.read() {
        if event.kind != MovementEventKind::FacingFlipped {
            continue;
        }
        if let Ok((state, mut sprite)) = query.get_mut(event.entity) {
            sprite.flip_x = state.facing == Facing::Left;
        }
    }
}

pub(crate) fn log_movement_events(mut movement_events: MessageReader<MovementEvent>) {
    for event in movement_events.read() {
        debug!("{:?}: {:?}", event.entity, event.kind);
    }
}

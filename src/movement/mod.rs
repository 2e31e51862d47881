//! Movement domain: the player locomotion controller and its Bevy wiring.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod integrator;
mod machine;
mod probe;
mod resources;
mod systems;
mod timers;

pub use bootstrap::PLAYER_COLOR;
pub use components::{Facing, GameLayer, Gait, MotionState, Player, ProbeAnchors};
pub use events::{MovementEvent, MovementEventKind};
pub use integrator::{AvianBody, PhysicsIntegrator};
pub use machine::{MotionStateMachine, TickOutcome};
pub use probe::{CachedProbe, EnvironmentProbe, SpatialProbe};
pub use resources::{InputSample, MovementInput, MovementTuning};
pub use timers::{ExpiredTimers, MotionTimer, TimerBank};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{ContentLoaded, MovementContent};
use crate::core::gameplay_active;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{drive_motion, flip_sprites, log_movement_events, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<MovementEvent>()
            .add_systems(
                Startup,
                (sync_world_gravity, spawn_player).after(ContentLoaded),
            )
            .add_systems(Update, read_input.run_if(gameplay_active))
            .add_systems(FixedUpdate, drive_motion)
            .add_systems(Update, (flip_sprites, log_movement_events));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room.after(ContentLoaded));
    }
}

/// Engine gravity must match the magnitude the fall tuning assumes.
fn sync_world_gravity(mut commands: Commands, content: Option<Res<MovementContent>>) {
    let gravity = content
        .map(|c| c.tuning.gravity)
        .unwrap_or(MovementTuning::default().gravity);
    commands.insert_resource(Gravity(Vec2::NEG_Y * gravity));
}

//! Movement domain: locomotion notifications for animation, audio and VFX sinks.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementEventKind {
    Landed,
    DashStarted,
    DashEnded,
    Jumped,
    DoubleJumped,
    WallJumped,
    FacingFlipped,
}

impl MovementEventKind {
    pub fn is_jump(self) -> bool {
        matches!(
            self,
            MovementEventKind::Jumped
                | MovementEventKind::DoubleJumped
                | MovementEventKind::WallJumped
        )
    }
}

/// Fire-and-forget notification written after a controller commits its tick.
/// Within one tick, events arrive in decision order.
#[derive(Debug, Clone, Copy)]
pub struct MovementEvent {
    pub entity: Entity,
    pub kind: MovementEventKind,
}

impl Message for MovementEvent {}

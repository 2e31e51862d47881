//! Movement domain: ground and wall queries against the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Facing, GameLayer, MovementTuning};

/// Geometric contact queries used by the motion state machine.
///
/// A miss is a normal answer (`false`), never an error. Within one tick the
/// world does not change, so asking the same question twice must give the
/// same answer.
pub trait EnvironmentProbe {
    fn probe_ground(&mut self, position: Vec2) -> bool;
    fn probe_wall(&mut self, position: Vec2, facing: Facing) -> bool;
}

/// Memoizes one tick of probe answers so the world is queried at most once
/// per query kind for the same arguments. Build a fresh one every tick.
#[derive(Debug)]
pub struct CachedProbe<P> {
    inner: P,
    ground: Option<(Vec2, bool)>,
    wall: Option<(Vec2, Facing, bool)>,
}

impl<P: EnvironmentProbe> CachedProbe<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            ground: None,
            wall: None,
        }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: EnvironmentProbe> EnvironmentProbe for CachedProbe<P> {
    fn probe_ground(&mut self, position: Vec2) -> bool {
        if let Some((cached_at, hit)) = self.ground
            && cached_at == position
        {
            return hit;
        }
        let hit = self.inner.probe_ground(position);
        self.ground = Some((position, hit));
        hit
    }

    fn probe_wall(&mut self, position: Vec2, facing: Facing) -> bool {
        if let Some((cached_at, cached_facing, hit)) = self.wall
            && cached_at == position
            && cached_facing == facing
        {
            return hit;
        }
        let hit = self.inner.probe_wall(position, facing);
        self.wall = Some((position, facing, hit));
        hit
    }
}

/// Probe backed by avian's spatial query pipeline, filtered to terrain.
pub struct SpatialProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
    ground_shape: Collider,
    wall_check_distance: f32,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, tuning: &MovementTuning) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Ground),
            ground_shape: Collider::circle(tuning.ground_check_radius),
            wall_check_distance: tuning.wall_check_distance,
        }
    }
}

impl EnvironmentProbe for SpatialProbe<'_, '_, '_> {
    fn probe_ground(&mut self, position: Vec2) -> bool {
        // Overlap circle at the feet
        !self
            .spatial_query
            .shape_intersections(&self.ground_shape, position, 0.0, &self.filter)
            .is_empty()
    }

    fn probe_wall(&mut self, position: Vec2, facing: Facing) -> bool {
        let direction = match facing {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        };

        self.spatial_query
            .cast_ray(
                position,
                direction,
                self.wall_check_distance,
                true,
                &self.filter,
            )
            .is_some()
    }
}

//! Movement domain: the physics-backed world query used by the decision pass.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::ai::{ActorSnapshot, ActorView, TargetHandle, WorldQuery, probe_is_valid};
use crate::movement::GameLayer;

/// `WorldQuery` over avian's spatial query plus the pass's actor snapshot
pub struct PhysicsWorld<'a, 'w, 's> {
    pub spatial: &'a SpatialQuery<'w, 's>,
    pub snapshot: &'a ActorSnapshot,
}

impl WorldQuery for PhysicsWorld<'_, '_, '_> {
    fn ground_ahead(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool {
        if !probe_is_valid(origin, max_distance) {
            return false;
        }
        // Filter to only hit Ground layer entities (not actors, sensors, etc.)
        let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
        self.spatial
            .cast_ray(origin, direction, max_distance, true, &ground_filter)
            .is_some()
    }

    fn overlap_circle(&self, center: Vec2, radius: f32) -> Vec<ActorView> {
        self.snapshot.overlap(center, radius)
    }

    fn resolve(&self, handle: TargetHandle) -> Option<ActorView> {
        self.snapshot.resolve(handle)
    }

    fn viewpoint(&self) -> Option<Vec2> {
        self.snapshot.viewpoint()
    }

    fn escorts_alive(&self, leader: Entity) -> usize {
        self.snapshot.escorts_alive(leader)
    }
}

/// First terrain hit along a segment, used to break projectiles
pub fn terrain_between(spatial: &SpatialQuery, from: Vec2, to: Vec2) -> Option<Entity> {
    let delta = to - from;
    let Ok(direction) = Dir2::new(delta) else {
        return None;
    };
    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);
    spatial
        .cast_ray(from, direction, delta.length(), true, &filter)
        .map(|hit| hit.entity)
}

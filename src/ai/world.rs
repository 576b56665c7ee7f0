//! AI domain: read-only view of the world the decision loop runs against.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::ai::agent::TargetHandle;
use crate::combat::Team;

/// Snapshot of one live actor taken at the start of the decision pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorView {
    pub entity: Entity,
    pub position: Vec2,
    pub team: Team,
    pub alive: bool,
}

/// Geometry and overlap queries. Every method is a pure read against the
/// current tick's snapshot.
pub trait WorldQuery {
    /// True if a ray from `origin` along `direction` hits ground within
    /// `max_distance`. Degenerate input reports no ground.
    fn ground_ahead(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool;

    /// Live actors whose position lies within `radius` of `center`, in a
    /// stable order (ascending entity order).
    fn overlap_circle(&self, center: Vec2, radius: f32) -> Vec<ActorView>;

    /// The actor behind a handle, if it is still alive
    fn resolve(&self, handle: TargetHandle) -> Option<ActorView>;

    /// Reference viewpoint (the camera) for scripted archetypes
    fn viewpoint(&self) -> Option<Vec2> {
        None
    }

    /// Number of live escorts spawned by `leader`
    fn escorts_alive(&self, _leader: Entity) -> usize {
        0
    }
}

/// Shared overlap implementation over an already-sorted actor list
pub fn overlap_in(actors: &[ActorView], center: Vec2, radius: f32) -> Vec<ActorView> {
    if !radius.is_finite() || radius < 0.0 {
        return Vec::new();
    }
    let radius_sq = radius * radius;
    actors
        .iter()
        .filter(|actor| actor.alive && actor.position.distance_squared(center) <= radius_sq)
        .copied()
        .collect()
}

/// True when a probe request is usable at all
pub fn probe_is_valid(origin: Vec2, max_distance: f32) -> bool {
    origin.is_finite() && max_distance.is_finite() && max_distance > 0.0
}

/// Every live actor at the start of a pass, sorted by entity, plus the
/// viewpoint and escort counts the decision loop reads.
#[derive(Debug, Clone, Default)]
pub struct ActorSnapshot {
    actors: Vec<ActorView>,
    viewpoint: Option<Vec2>,
    escorts: HashMap<Entity, usize>,
}

impl ActorSnapshot {
    pub fn new(mut actors: Vec<ActorView>) -> Self {
        actors.sort_by_key(|actor| actor.entity);
        Self {
            actors,
            ..default()
        }
    }

    pub fn with_viewpoint(mut self, viewpoint: Option<Vec2>) -> Self {
        self.viewpoint = viewpoint;
        self
    }

    /// Count one live escort per leader entry
    pub fn with_escorts(mut self, leaders: impl IntoIterator<Item = Entity>) -> Self {
        for leader in leaders {
            *self.escorts.entry(leader).or_default() += 1;
        }
        self
    }

    pub fn actors(&self) -> &[ActorView] {
        &self.actors
    }

    pub fn get(&self, entity: Entity) -> Option<ActorView> {
        self.actors
            .binary_search_by_key(&entity, |actor| actor.entity)
            .ok()
            .map(|index| self.actors[index])
    }

    pub fn overlap(&self, center: Vec2, radius: f32) -> Vec<ActorView> {
        overlap_in(&self.actors, center, radius)
    }

    /// The live actor behind a handle
    pub fn resolve(&self, handle: TargetHandle) -> Option<ActorView> {
        self.get(handle.entity()).filter(|actor| actor.alive)
    }

    pub fn viewpoint(&self) -> Option<Vec2> {
        self.viewpoint
    }

    pub fn escorts_alive(&self, leader: Entity) -> usize {
        self.escorts.get(&leader).copied().unwrap_or(0)
    }
}

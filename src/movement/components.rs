//! Movement domain: physics layers and terrain markers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms). The only layer ground probes hit.
    Ground,
    /// Wall surfaces
    Wall,
    /// The actor agents hunt
    Player,
    /// Agents
    Enemy,
    /// Traps and triggers, never blocking
    Sensor,
    /// Player-owned hitboxes (damage agents)
    PlayerHitbox,
    /// Agent-owned hitboxes and projectiles (damage the player)
    EnemyHitbox,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Marker for the actor agents are pointed at when spawned
#[derive(Component, Debug)]
pub struct Target;

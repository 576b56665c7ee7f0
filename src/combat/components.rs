//! Combat domain: health ledger, teams, and the damaging artifacts agents create.

use bevy::prelude::*;

/// Marks an entity as a combat participant
#[derive(Component, Debug)]
pub struct Combatant;

/// Entity cannot take damage while this is present
#[derive(Component, Debug, Default)]
pub struct Invulnerable;

/// Result of one `ActorHealth::apply_damage` call
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DamageOutcome {
    /// Health actually removed
    pub dealt: f32,
    /// True only on the call that took health from above zero to zero
    pub died: bool,
}

/// Health ledger for damageable actors. `0 <= current <= max` always holds.
#[derive(Component, Debug, Clone)]
pub struct ActorHealth {
    current: f32,
    max: f32,
}

impl ActorHealth {
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Remove `amount` health, clamping at zero. Death is reported exactly once,
    /// on the crossing call; damage to a dead actor is a no-op.
    pub fn apply_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.is_dead() || !amount.is_finite() || amount <= 0.0 {
            return DamageOutcome::default();
        }
        let dealt = amount.min(self.current);
        self.current = (self.current - dealt).max(0.0);
        DamageOutcome {
            dealt,
            died: self.current <= 0.0,
        }
    }

    /// Restore health up to `max`. Returns the amount actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.is_dead() || !amount.is_finite() || amount <= 0.0 {
            return 0.0;
        }
        let restored = amount.min(self.max - self.current);
        self.current += restored;
        restored
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }
}

/// Team affiliation to prevent friendly fire
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Melee slash hitbox. Deals its damage to the first opposing actor it touches,
/// then stays disabled until its lifetime runs out.
#[derive(Component, Debug)]
pub struct Hitbox {
    pub damage: f32,
    pub knockback: f32,
    pub owner: Entity,
    pub enabled: bool,
    pub hit_entities: Vec<Entity>,
}

impl Hitbox {
    pub fn new(damage: f32, knockback: f32, owner: Entity) -> Self {
        Self {
            damage,
            knockback,
            owner,
            enabled: true,
            hit_entities: Vec::new(),
        }
    }

    /// Try to land the hit on `target`. Returns true when damage should be dealt.
    pub fn register_hit(&mut self, target: Entity) -> bool {
        if !self.enabled || target == self.owner || self.hit_entities.contains(&target) {
            return false;
        }
        self.hit_entities.push(target);
        self.enabled = false;
        true
    }
}

/// Entity lifetime for temporary hitboxes and projectiles
#[derive(Component, Debug)]
pub struct HitboxLifetime(pub f32);

impl HitboxLifetime {
    /// Count down. Returns true once the lifetime has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.0 -= dt;
        self.0 <= 0.0
    }
}

/// Straight-line projectile. Flies at a constant velocity, hurts the first
/// opposing actor it touches, and breaks on ground or walls.
#[derive(Component, Debug)]
pub struct Projectile {
    pub damage: f32,
    pub velocity: Vec2,
    pub owner: Entity,
}

/// Explosive that travels to a point frozen at launch and detonates there,
/// damaging the first valid actor inside its blast radius.
#[derive(Component, Debug)]
pub struct Explosive {
    pub destination: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub damage: f32,
    pub owner: Entity,
}

/// Distance under which an explosive counts as arrived
pub const DETONATION_TOLERANCE: f32 = 0.1;

impl Explosive {
    /// Move `position` toward the destination. Returns the new position and
    /// whether the explosive should detonate this tick.
    pub fn advance(&self, position: Vec2, dt: f32) -> (Vec2, bool) {
        let to_destination = self.destination - position;
        let distance = to_destination.length();
        if distance <= DETONATION_TOLERANCE {
            return (position, true);
        }
        let step = self.speed * dt;
        if step >= distance {
            return (self.destination, true);
        }
        let next = position + to_destination / distance * step;
        let arrived = self.destination.distance(next) <= DETONATION_TOLERANCE;
        (next, arrived)
    }
}

/// Trap sensor that pins whoever walks into it
#[derive(Component, Debug)]
pub struct SnareTrap {
    pub duration: f32,
    pub one_time_use: bool,
    pub spent: bool,
}

impl SnareTrap {
    pub fn new(duration: f32, one_time_use: bool) -> Self {
        Self {
            duration,
            one_time_use,
            spent: false,
        }
    }

    /// Spring the trap. Returns the immobilize duration, or None if spent.
    pub fn trigger(&mut self) -> Option<f32> {
        if self.spent {
            return None;
        }
        if self.one_time_use {
            self.spent = true;
        }
        Some(self.duration)
    }
}

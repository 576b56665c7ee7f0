//! Combat domain: turning physical overlap into damage and knockback.

use bevy::prelude::*;

use crate::ai::ActorView;
use crate::combat::components::Team;
use crate::combat::events::{DamageEvent, DamageSink};

/// One overlap between a damaging source and a candidate target
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub source: Entity,
    pub source_position: Vec2,
    pub target: Entity,
    pub target_position: Vec2,
    pub amount: f32,
}

/// Resolves contacts into damage messages. Knockback always points from the
/// source to the target.
#[derive(Debug, Clone, Copy)]
pub struct ContactResolver {
    pub knockback: f32,
}

impl ContactResolver {
    pub fn new(knockback: f32) -> Self {
        Self { knockback }
    }

    /// Knockback vector from `from` toward `to`. Coincident points push right.
    pub fn knockback_between(from: Vec2, to: Vec2, strength: f32) -> Vec2 {
        let dir = (to - from).normalize_or_zero();
        let dir = if dir == Vec2::ZERO { Vec2::X } else { dir };
        dir * strength
    }

    /// Emit the damage for one contact. Self-contact and non-positive amounts
    /// are ignored. Returns true when a damage message was produced.
    pub fn resolve(&self, contact: &Contact, sink: &mut dyn DamageSink) -> bool {
        if contact.source == contact.target || contact.amount <= 0.0 {
            return false;
        }
        sink.deal(DamageEvent {
            source: contact.source,
            target: contact.target,
            amount: contact.amount,
            knockback: Self::knockback_between(
                contact.source_position,
                contact.target_position,
                self.knockback,
            ),
        });
        true
    }

    /// Single-target policy: damage the first live opposing actor in
    /// `candidates`, which must already be in a stable order.
    pub fn resolve_first(
        &self,
        source: Entity,
        source_position: Vec2,
        source_team: Team,
        amount: f32,
        candidates: &[ActorView],
        sink: &mut dyn DamageSink,
    ) -> Option<Entity> {
        let target = first_valid(candidates, source, source_team)?;
        self.resolve(
            &Contact {
                source,
                source_position,
                target: target.entity,
                target_position: target.position,
                amount,
            },
            sink,
        )
        .then_some(target.entity)
    }

    /// Area policy: damage every live opposing actor in `candidates`, in order.
    pub fn resolve_all(
        &self,
        source: Entity,
        source_position: Vec2,
        source_team: Team,
        amount: f32,
        candidates: &[ActorView],
        sink: &mut dyn DamageSink,
    ) -> Vec<Entity> {
        let mut hit = Vec::new();
        for actor in candidates {
            if !is_valid_target(actor, source, source_team) {
                continue;
            }
            let contact = Contact {
                source,
                source_position,
                target: actor.entity,
                target_position: actor.position,
                amount,
            };
            if self.resolve(&contact, sink) {
                hit.push(actor.entity);
            }
        }
        hit
    }
}

fn is_valid_target(actor: &ActorView, source: Entity, source_team: Team) -> bool {
    actor.alive && actor.entity != source && actor.team != source_team
}

/// First live actor not owned by `source` and not on `source_team`
pub fn first_valid(candidates: &[ActorView], source: Entity, source_team: Team) -> Option<&ActorView> {
    candidates
        .iter()
        .find(|actor| is_valid_target(actor, source, source_team))
}

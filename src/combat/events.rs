//! Combat domain: combat-related messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    pub knockback: Vec2,
}

impl Message for DamageEvent {}

/// Emitted once, on the tick an actor's health reaches zero
#[derive(Debug, Clone, PartialEq)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

#[derive(Debug, Clone, PartialEq)]
pub struct HealEvent {
    pub target: Entity,
    pub amount: f32,
}

impl Message for HealEvent {}

/// Pins an agent in place for `duration` seconds
#[derive(Debug, Clone, PartialEq)]
pub struct ImmobilizeEvent {
    pub target: Entity,
    pub duration: f32,
}

impl Message for ImmobilizeEvent {}

/// Sink for damage produced by decision logic. The ECS writes these as
/// `DamageEvent` messages; tests collect them in a `Vec`.
pub trait DamageSink {
    fn deal(&mut self, event: DamageEvent);
}

impl DamageSink for Vec<DamageEvent> {
    fn deal(&mut self, event: DamageEvent) {
        self.push(event);
    }
}

impl DamageSink for bevy::ecs::message::MessageWriter<'_, DamageEvent> {
    fn deal(&mut self, event: DamageEvent) {
        self.write(event);
    }
}

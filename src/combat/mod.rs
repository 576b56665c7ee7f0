//! Combat domain: health, damage messages, contact resolution, and attack artifacts.

use bevy::prelude::*;

mod components;
mod contact;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    ActorHealth, Combatant, DETONATION_TOLERANCE, DamageOutcome, Explosive, Hitbox,
    HitboxLifetime, Invulnerable, Projectile, SnareTrap, Team,
};
pub use contact::{Contact, ContactResolver, first_valid};
pub use events::{DamageEvent, DamageSink, DeathEvent, HealEvent, ImmobilizeEvent};
pub use resources::CombatTuning;

use crate::core::SimSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_message::<HealEvent>()
            .add_message::<ImmobilizeEvent>()
            .add_systems(
                FixedUpdate,
                systems::detect_hitbox_collisions.in_set(SimSet::Contacts),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::cleanup_expired_hitboxes,
                    systems::break_projectiles_on_terrain,
                    systems::advance_explosives,
                )
                    .in_set(SimSet::Effects),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::apply_immobilize,
                    systems::apply_heals,
                    systems::apply_knockback,
                    systems::apply_damage,
                    systems::process_deaths,
                )
                    .chain()
                    .in_set(SimSet::Resolve),
            );
    }
}

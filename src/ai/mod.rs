//! AI domain: per-agent decision loop, attack scheduling, and archetype strategies.

use bevy::prelude::*;

mod agent;
pub mod archetypes;
pub mod ballistics;
mod behavior;
mod controller;
mod scheduler;
mod spawn;
mod spawner;
mod systems;
mod world;


pub use agent::{AgentState, Facing, Heading, Intent, Motion, TargetHandle};
pub use behavior::{AgentContext, Behavior, TickContext, default_band};
pub use controller::{AgentController, AgentStats, Body};
pub use scheduler::{ActionScheduler, AttackPlan, AttackSequence, Payload, Phase, SchedulerStep};
pub use spawn::{AgentSpawn, Escort, SpawnKind, SpawnRequest, SpawnService, spawn_agent};
pub use spawner::{EncounterSpawner, SpawnerTick};
pub use world::{ActorSnapshot, ActorView, WorldQuery, overlap_in, probe_is_valid};

use crate::core::SimSet;

pub struct AiPlugin;

impl Plugin for AiPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SpawnRequest>()
            .add_systems(
                FixedUpdate,
                systems::detect_agent_contacts.in_set(SimSet::Contacts),
            )
            .add_systems(
                FixedUpdate,
                (systems::tick_agents, spawner::run_encounter_spawners).in_set(SimSet::Decide),
            )
            .add_systems(
                FixedUpdate,
                spawn::execute_spawn_requests.in_set(SimSet::Effects),
            );
    }
}

//! Core domain: run configuration, deterministic RNG, and the simulation tick order.

use bevy::prelude::*;

mod resources;
mod systems;


pub use resources::{RunConfig, SimRng, SimulationPaused, simulation_active};

/// Ordered phases of one simulation tick. All of them run in `FixedUpdate`,
/// ahead of the physics step in `FixedPostUpdate`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum SimSet {
    /// Collision messages from the previous physics step become contact hooks
    Contacts,
    /// One decision pass per agent
    Decide,
    /// Spawns, artifact updates, and motion writes
    Effects,
    /// Damage, healing, immobilization, and death
    Resolve,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .init_resource::<SimRng>()
            .init_resource::<SimulationPaused>()
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Contacts,
                    SimSet::Decide,
                    SimSet::Effects,
                    SimSet::Resolve,
                )
                    .chain()
                    .run_if(simulation_active),
            )
            .add_systems(Startup, systems::seed_simulation_rng)
            .add_systems(
                Update,
                systems::toggle_pause.run_if(resource_exists::<ButtonInput<KeyCode>>),
            );
    }
}

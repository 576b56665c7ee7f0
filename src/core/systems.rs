//! Core domain: run setup and simulation control systems.

use bevy::prelude::*;

use crate::core::resources::{RunConfig, SimRng, SimulationPaused};

/// Seed the simulation RNG from the run configuration
pub(crate) fn seed_simulation_rng(run_config: Res<RunConfig>, mut rng: ResMut<SimRng>) {
    rng.reseed(run_config.seed);
    info!("Simulation seeded with {}", run_config.seed);
}

/// P pauses and resumes the simulation
pub(crate) fn toggle_pause(keyboard: Res<ButtonInput<KeyCode>>, mut paused: ResMut<SimulationPaused>) {
    if keyboard.just_pressed(KeyCode::KeyP) {
        paused.toggle();
        info!("Simulation paused: {}", paused.is_paused());
    }
}

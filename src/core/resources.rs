//! Core domain: shared resources for run configuration and simulation control.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Resource tracking if the simulation should be paused
#[derive(Resource, Debug, Default)]
pub struct SimulationPaused(pub bool);

impl SimulationPaused {
    pub fn is_paused(&self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}

/// Run condition: returns true only when the simulation is not paused
pub fn simulation_active(paused: Res<SimulationPaused>) -> bool {
    !paused.is_paused()
}

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

impl RunConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

/// Seeded RNG shared by every simulation system that rolls dice.
/// Clone offsets, escort picks and lobbed minion picks all draw from here,
/// so a run replays exactly from `RunConfig::seed`.
#[derive(Resource, Debug)]
pub struct SimRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::new(0)
    }
}

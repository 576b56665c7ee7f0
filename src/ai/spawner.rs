//! AI domain: proximity-activated encounter spawners.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::ai::agent::TargetHandle;
use crate::ai::spawn::{Escort, SpawnKind, SpawnRequest};
use crate::combat::Team;
use crate::content::ArchetypeKind;
use crate::core::SimRng;

/// Spawns agents near itself while the target is close. Spawned agents carry
/// `Escort { leader: spawner }` so they count against `max_alive`.
#[derive(Component, Debug, Clone)]
pub struct EncounterSpawner {
    pub kinds: Vec<ArchetypeKind>,
    pub interval: f32,
    pub max_alive: usize,
    pub activation_distance: f32,
    pub target: Option<Entity>,
    active: bool,
    timer: f32,
}

impl Default for EncounterSpawner {
    fn default() -> Self {
        Self {
            kinds: Vec::new(),
            interval: 10.0,
            max_alive: 5,
            activation_distance: 20.0,
            target: None,
            active: false,
            timer: 0.0,
        }
    }
}

/// Outcome of one spawner update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnerTick {
    /// Out of range, or waiting for the interval
    Waiting,
    /// Interval elapsed but `max_alive` spawns are still alive
    Full,
    /// Interval elapsed with no kinds configured
    Unconfigured,
    Spawn(ArchetypeKind),
}

impl EncounterSpawner {
    pub fn new(kinds: Vec<ArchetypeKind>, target: Entity) -> Self {
        Self {
            kinds,
            target: Some(target),
            ..default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by `dt`. The interval restarts whenever the target comes into
    /// range, and every elapsed interval is spent whether or not it spawns.
    pub fn update(
        &mut self,
        dt: f32,
        target_distance: Option<f32>,
        alive: usize,
        rng: &mut ChaCha8Rng,
    ) -> SpawnerTick {
        let in_range = target_distance.is_some_and(|d| d <= self.activation_distance);
        if !in_range {
            self.active = false;
            return SpawnerTick::Waiting;
        }
        if !self.active {
            self.active = true;
            self.timer = 0.0;
        }

        self.timer += dt;
        if self.timer < self.interval {
            return SpawnerTick::Waiting;
        }
        self.timer = 0.0;

        if alive >= self.max_alive {
            return SpawnerTick::Full;
        }
        if self.kinds.is_empty() {
            return SpawnerTick::Unconfigured;
        }
        SpawnerTick::Spawn(self.kinds[rng.random_range(0..self.kinds.len())])
    }
}

pub(crate) fn run_encounter_spawners(
    time: Res<Time>,
    mut rng: ResMut<SimRng>,
    mut spawns: MessageWriter<SpawnRequest>,
    mut spawners: Query<(Entity, &Transform, &mut EncounterSpawner)>,
    targets: Query<&Transform>,
    escorts: Query<&Escort>,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut spawner) in &mut spawners {
        let position = transform.translation.truncate();
        let target_distance = spawner
            .target
            .and_then(|target| targets.get(target).ok())
            .map(|target| target.translation.truncate().distance(position));
        let alive = escorts.iter().filter(|e| e.leader == entity).count();

        match spawner.update(dt, target_distance, alive, &mut rng.rng) {
            SpawnerTick::Spawn(kind) => {
                spawns.write(
                    SpawnRequest::new(
                        SpawnKind::Agent {
                            archetype: kind,
                            move_speed: None,
                            replicates: true,
                        },
                        position,
                        entity,
                        Team::Enemy,
                    )
                    .with_target(spawner.target.map(TargetHandle))
                    .escorting(entity),
                );
                debug!("Spawner {:?} spawned a {:?} ({} alive)", entity, kind, alive + 1);
            }
            SpawnerTick::Unconfigured => {
                error!("Spawner {:?} has no archetype kinds configured", entity);
            }
            SpawnerTick::Waiting | SpawnerTick::Full => {}
        }
    }
}

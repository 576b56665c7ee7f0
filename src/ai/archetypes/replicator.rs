//! Self-replicating brawler: always closes in and splits on contact.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::agent::Intent;
use crate::ai::behavior::{AgentContext, Behavior};
use crate::ai::spawn::{SpawnKind, SpawnRequest};
use crate::ai::world::ActorView;
use crate::content::{ArchetypeKind, ReplicatorTuning};

#[derive(Debug)]
pub struct ReplicatorBehavior {
    tuning: ReplicatorTuning,
    replicates: bool,
}

impl ReplicatorBehavior {
    pub fn new(tuning: ReplicatorTuning, replicates: bool) -> Self {
        Self { tuning, replicates }
    }

    pub fn replicates(&self) -> bool {
        self.replicates
    }
}

impl Behavior for ReplicatorBehavior {
    fn kind(&self) -> ArchetypeKind {
        ArchetypeKind::Replicator
    }

    fn pursue(&mut self, _ctx: &mut AgentContext) -> Intent {
        Intent::advance(1.0)
    }

    fn engage(&mut self, _ctx: &mut AgentContext) -> Intent {
        Intent::advance(1.0)
    }

    fn on_contact(&mut self, ctx: &mut AgentContext, _other: &ActorView) {
        if !self.replicates {
            return;
        }
        let spread = self.tuning.clone_spread;
        let offset_x = if spread > 0.0 {
            ctx.rng.random_range(-spread..spread)
        } else {
            0.0
        };
        ctx.spawner.request(
            SpawnRequest::new(
                SpawnKind::Agent {
                    archetype: ArchetypeKind::Replicator,
                    move_speed: Some(ctx.move_speed * self.tuning.clone_speed_factor),
                    replicates: false,
                },
                ctx.position + Vec2::new(offset_x, 0.0),
                ctx.entity,
                ctx.team,
            )
            .with_target(ctx.handle),
        );
    }
}

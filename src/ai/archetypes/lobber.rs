//! Scripted lobber: pinned beside the viewpoint, throwing minions on a timer.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::agent::Intent;
use crate::ai::ballistics;
use crate::ai::behavior::{AgentContext, Behavior};
use crate::ai::spawn::{SpawnKind, SpawnRequest};
use crate::content::{ArchetypeKind, LobberTuning};

#[derive(Debug)]
pub struct LobberBehavior {
    tuning: LobberTuning,
    launch_timer: f32,
}

impl LobberBehavior {
    pub fn new(tuning: LobberTuning) -> Self {
        Self {
            tuning,
            launch_timer: 0.0,
        }
    }

    /// Velocity a thrown minion leaves with
    pub fn launch_velocity(&self) -> Vec2 {
        let (x, y) = self.tuning.throw_force;
        ballistics::impulse_velocity(Vec2::new(x, y), self.tuning.minion_mass)
    }

    /// Predicted path of a minion thrown from `from`
    pub fn preview(&self, from: Vec2) -> Vec<Vec2> {
        let (gx, gy) = self.tuning.gravity;
        ballistics::trajectory(
            from,
            self.launch_velocity(),
            Vec2::new(gx, gy),
            self.tuning.preview_dt,
            self.tuning.preview_steps,
        )
    }

    /// Where the lobber stands for a given viewpoint
    pub fn anchor(&self, viewpoint: Vec2) -> Vec2 {
        Vec2::new(viewpoint.x + self.tuning.viewpoint_offset, self.tuning.height)
    }

    fn launch(&self, ctx: &mut AgentContext) {
        let minions = &self.tuning.minions;
        if minions.is_empty() {
            return;
        }
        let kind = minions[ctx.rng.random_range(0..minions.len())];
        ctx.spawner.request(
            SpawnRequest::new(
                SpawnKind::Agent {
                    archetype: kind,
                    move_speed: None,
                    replicates: true,
                },
                ctx.position,
                ctx.entity,
                ctx.team,
            )
            .with_velocity(self.launch_velocity())
            .with_target(ctx.handle),
        );
        debug!("Lobber {:?} launched a {:?}", ctx.entity, kind);
    }
}

impl Behavior for LobberBehavior {
    fn kind(&self) -> ArchetypeKind {
        ArchetypeKind::Lobber
    }

    fn ledge_gated(&self) -> bool {
        false
    }

    fn scripted(&mut self, ctx: &mut AgentContext) -> Option<Intent> {
        let place_at = ctx.world.viewpoint().map(|viewpoint| self.anchor(viewpoint));
        if let Some(position) = place_at {
            ctx.position = position;
        }

        // Nothing to throw at without a target
        if ctx.handle.is_some() {
            self.launch_timer += ctx.dt;
            if self.launch_timer >= self.tuning.launch_interval {
                self.launch_timer = 0.0;
                self.launch(ctx);
            }
        }

        Some(Intent {
            place_at,
            ..Intent::hold()
        })
    }

    fn pursue(&mut self, _ctx: &mut AgentContext) -> Intent {
        Intent::hold()
    }

    fn engage(&mut self, _ctx: &mut AgentContext) -> Intent {
        Intent::hold()
    }
}

//! Melee rusher: close in, wind up, and swing a single-hit slash.

use bevy::prelude::*;

use crate::ai::agent::Intent;
use crate::ai::behavior::{AgentContext, Behavior};
use crate::ai::scheduler::AttackPlan;
use crate::ai::spawn::{SpawnKind, SpawnRequest};
use crate::content::{ArchetypeKind, RusherTuning};

#[derive(Debug)]
pub struct RusherBehavior {
    tuning: RusherTuning,
}

impl RusherBehavior {
    pub fn new(tuning: RusherTuning) -> Self {
        Self { tuning }
    }
}

impl Behavior for RusherBehavior {
    fn kind(&self) -> ArchetypeKind {
        ArchetypeKind::Rusher
    }

    fn pursue(&mut self, _ctx: &mut AgentContext) -> Intent {
        Intent::advance(1.0)
    }

    fn engage(&mut self, _ctx: &mut AgentContext) -> Intent {
        Intent::hold().with_attack(AttackPlan::strike(self.tuning.windup, self.tuning.recovery))
    }

    fn strike(&mut self, ctx: &mut AgentContext) -> Option<Vec2> {
        let position = ctx.position + Vec2::X * ctx.facing.sign() * self.tuning.reach;
        ctx.spawner.request(SpawnRequest::new(
            SpawnKind::Slash {
                damage: self.tuning.damage,
                knockback: self.tuning.knockback,
                lifetime: self.tuning.lifetime,
                size: Vec2::new(self.tuning.size.0, self.tuning.size.1),
            },
            position,
            ctx.entity,
            ctx.team,
        ));
        None
    }
}

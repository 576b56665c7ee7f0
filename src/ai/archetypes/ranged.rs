//! Ranged standoff: close in, then hold position and fire on a fixed rate.

use bevy::prelude::*;

use crate::ai::agent::Intent;
use crate::ai::behavior::{AgentContext, Behavior};
use crate::ai::scheduler::AttackPlan;
use crate::ai::spawn::{SpawnKind, SpawnRequest};
use crate::content::{ArchetypeKind, RangedPayload, RangedTuning};

#[derive(Debug)]
pub struct RangedBehavior {
    kind: ArchetypeKind,
    tuning: RangedTuning,
}

impl RangedBehavior {
    pub fn new(kind: ArchetypeKind, tuning: RangedTuning) -> Self {
        Self { kind, tuning }
    }

    /// One shot per `fire_rate` seconds: the windup is carved out of the rate
    pub fn plan(&self) -> AttackPlan {
        let windup = self.tuning.windup.max(0.0);
        AttackPlan::strike(windup, (self.tuning.fire_rate - windup).max(0.0))
    }
}

impl Behavior for RangedBehavior {
    fn kind(&self) -> ArchetypeKind {
        self.kind
    }

    fn pursue(&mut self, _ctx: &mut AgentContext) -> Intent {
        Intent::advance(1.0)
    }

    fn engage(&mut self, _ctx: &mut AgentContext) -> Intent {
        Intent::hold().with_attack(self.plan())
    }

    fn strike(&mut self, ctx: &mut AgentContext) -> Option<Vec2> {
        // Shots leave level along the facing direction
        let direction = Vec2::X * ctx.facing.sign();
        let muzzle = ctx.position + direction * self.tuning.muzzle_offset;

        match self.tuning.payload {
            RangedPayload::Bullet { damage, speed } => {
                ctx.spawner.request(
                    SpawnRequest::new(SpawnKind::Projectile { damage }, muzzle, ctx.entity, ctx.team)
                        .with_velocity(direction * speed),
                );
            }
            RangedPayload::Explosive {
                damage,
                radius,
                speed,
            } => {
                // The destination is frozen at launch
                let Some(target) = ctx.target else {
                    return None;
                };
                ctx.spawner.request(SpawnRequest::new(
                    SpawnKind::Explosive {
                        destination: target.position,
                        speed,
                        radius,
                        damage,
                    },
                    muzzle,
                    ctx.entity,
                    ctx.team,
                ));
            }
        }

        (self.tuning.recoil > 0.0).then(|| -direction * self.tuning.recoil)
    }
}

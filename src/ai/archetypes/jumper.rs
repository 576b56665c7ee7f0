//! Pack jumper: always closes in, hopping toward the target on a timer.

use bevy::prelude::*;

use crate::ai::agent::{Facing, Intent};
use crate::ai::behavior::{AgentContext, Behavior};
use crate::content::{ArchetypeKind, JumperTuning};

#[derive(Debug)]
pub struct JumperBehavior {
    tuning: JumperTuning,
    /// Seconds until the next jump is allowed
    jump_timer: f32,
    half_height: f32,
}

impl JumperBehavior {
    pub fn new(tuning: JumperTuning, half_height: f32) -> Self {
        Self {
            jump_timer: tuning.jump_interval,
            tuning,
            half_height,
        }
    }

    pub fn jump_timer(&self) -> f32 {
        self.jump_timer
    }

    /// Jump impulse for a horizontal direction sign
    pub fn jump_vector(&self, sign: f32) -> Vec2 {
        Vec2::new(sign, self.tuning.lift).normalize_or_zero() * self.tuning.jump_force
    }

    fn grounded(&self, ctx: &AgentContext) -> bool {
        let feet = ctx.position - Vec2::new(0.0, self.half_height);
        ctx.world
            .ground_ahead(feet, Dir2::NEG_Y, self.tuning.ground_check)
    }

    /// The jump timer only runs while the jumper is free to move
    fn chase(&mut self, ctx: &mut AgentContext) -> Intent {
        self.jump_timer = (self.jump_timer - ctx.dt).max(0.0);
        let intent = Intent::advance(1.0);
        if self.jump_timer > 0.0 || !self.grounded(ctx) {
            return intent;
        }
        self.jump_timer = self.tuning.jump_interval;
        let sign = Facing::toward(ctx.dx()).unwrap_or(ctx.facing).sign();
        intent.with_impulse(self.jump_vector(sign))
    }
}

impl Behavior for JumperBehavior {
    fn kind(&self) -> ArchetypeKind {
        ArchetypeKind::Jumper
    }

    fn pursue(&mut self, ctx: &mut AgentContext) -> Intent {
        self.chase(ctx)
    }

    fn engage(&mut self, ctx: &mut AgentContext) -> Intent {
        self.chase(ctx)
    }
}

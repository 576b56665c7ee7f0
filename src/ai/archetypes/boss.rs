//! Multi-band boss: keeps a distance band around the target and calls in escorts.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::agent::{AgentState, Heading, Intent};
use crate::ai::behavior::{AgentContext, Behavior};
use crate::ai::spawn::{SpawnKind, SpawnRequest};
use crate::content::{ArchetypeKind, BossTuning};

/// Concentric bands around the target, innermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BossBand {
    /// Inside `flee_distance`: back off at full speed
    Retreat,
    /// Between flee and stop: hold position
    Hold,
    /// Between stop and chase: approach at full speed
    ApproachFast,
    /// Beyond chase: approach at the reduced far speed
    ApproachSlow,
}

impl BossBand {
    /// Pure, monotonic band selection over `[0, inf)`. Anything that is not
    /// inside a nearer band, NaN included, falls in the outermost band.
    pub fn select(distance: f32, tuning: &BossTuning) -> Self {
        if distance < tuning.flee_distance {
            BossBand::Retreat
        } else if distance < tuning.stop_distance {
            BossBand::Hold
        } else if distance < tuning.chase_distance {
            BossBand::ApproachFast
        } else {
            BossBand::ApproachSlow
        }
    }

    pub fn intent(self, tuning: &BossTuning) -> Intent {
        match self {
            BossBand::Retreat => Intent::retreat(1.0),
            BossBand::Hold => Intent::hold(),
            BossBand::ApproachFast => Intent::advance(1.0),
            BossBand::ApproachSlow => Intent::advance(tuning.far_speed_scale),
        }
    }
}

#[derive(Debug)]
pub struct BossBehavior {
    tuning: BossTuning,
    escort_timer: f32,
    bounce_timer: f32,
}

impl BossBehavior {
    pub fn new(tuning: BossTuning) -> Self {
        Self {
            tuning,
            escort_timer: 0.0,
            bounce_timer: 0.0,
        }
    }

    pub fn is_bouncing(&self) -> bool {
        self.bounce_timer > 0.0
    }

    fn spawn_escort(&mut self, ctx: &mut AgentContext) {
        let kinds = &self.tuning.escort_kinds;
        if kinds.is_empty() {
            warn!("Boss {:?} has no escort kinds configured", ctx.entity);
            return;
        }
        let kind = kinds[ctx.rng.random_range(0..kinds.len())];
        let offsets = &self.tuning.escort_offsets;
        let offset = if offsets.is_empty() {
            Vec2::ZERO
        } else {
            let (x, y) = offsets[ctx.rng.random_range(0..offsets.len())];
            Vec2::new(x, y)
        };

        ctx.spawner.request(
            SpawnRequest::new(
                SpawnKind::Agent {
                    archetype: kind,
                    move_speed: None,
                    replicates: true,
                },
                ctx.position + offset,
                ctx.entity,
                ctx.team,
            )
            .with_target(ctx.handle)
            .escorting(ctx.entity),
        );
        info!("Boss {:?} called in a {:?} escort", ctx.entity, kind);
    }
}

impl Behavior for BossBehavior {
    fn kind(&self) -> ArchetypeKind {
        ArchetypeKind::Boss
    }

    fn ledge_gated(&self) -> bool {
        self.tuning.ledge_gated
    }

    fn classify(&self, distance: f32, _engage_distance: f32) -> AgentState {
        match BossBand::select(distance, &self.tuning) {
            BossBand::Hold => AgentState::Engaging,
            _ => AgentState::Pursuing,
        }
    }

    fn tick_timers(&mut self, ctx: &mut AgentContext) {
        self.bounce_timer = (self.bounce_timer - ctx.dt).max(0.0);

        self.escort_timer += ctx.dt;
        if self.escort_timer < self.tuning.escort_interval {
            return;
        }
        // At the cap the timer stays ready until an escort dies
        if ctx.world.escorts_alive(ctx.entity) >= self.tuning.max_escorts {
            return;
        }
        self.escort_timer = 0.0;
        self.spawn_escort(ctx);
    }

    fn pursue(&mut self, ctx: &mut AgentContext) -> Intent {
        let mut intent = BossBand::select(ctx.dx().abs(), &self.tuning).intent(&self.tuning);
        if self.is_bouncing() {
            intent.heading = match intent.heading {
                Heading::Toward => Heading::Away,
                Heading::Away => Heading::Toward,
                Heading::Stop => Heading::Stop,
            };
        }
        intent
    }

    fn engage(&mut self, _ctx: &mut AgentContext) -> Intent {
        Intent::hold()
    }

    fn on_wall_contact(&mut self) {
        self.bounce_timer = self.tuning.wall_bounce_time;
    }
}

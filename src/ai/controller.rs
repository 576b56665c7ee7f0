//! AI domain: the per-tick decision loop shared by every archetype.

use bevy::prelude::*;

use crate::ai::agent::{AgentState, Facing, Heading, Motion, TargetHandle};
use crate::ai::behavior::{AgentContext, Behavior, TickContext};
use crate::ai::scheduler::{ActionScheduler, AttackPlan, Payload, SchedulerStep};
use crate::ai::world::ActorView;
use crate::combat::{Contact, Team};
use crate::content::{ArchetypeKind, LedgeProbe};

/// Base stats every agent carries, whatever its archetype
#[derive(Debug, Clone, PartialEq)]
pub struct AgentStats {
    pub move_speed: f32,
    pub engage_distance: f32,
    pub contact_damage: f32,
    pub contact_cooldown: f32,
    pub probe: LedgeProbe,
    pub team: Team,
}

/// Position and liveness of the controlled actor this tick
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub entity: Entity,
    pub position: Vec2,
    pub alive: bool,
}

#[derive(Component, Debug)]
pub struct AgentController {
    pub stats: AgentStats,
    state: AgentState,
    facing: Facing,
    target: Option<TargetHandle>,
    scheduler: ActionScheduler,
    immobilized_for: f32,
    behavior: Box<dyn Behavior>,
}

impl AgentController {
    pub fn new(stats: AgentStats, behavior: Box<dyn Behavior>) -> Self {
        Self {
            stats,
            state: AgentState::Idle,
            facing: Facing::default(),
            target: None,
            scheduler: ActionScheduler::default(),
            immobilized_for: 0.0,
            behavior,
        }
    }

    pub fn with_target(mut self, target: Option<TargetHandle>) -> Self {
        self.target = target;
        self
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn target(&self) -> Option<TargetHandle> {
        self.target
    }

    pub fn scheduler(&self) -> &ActionScheduler {
        &self.scheduler
    }

    pub fn kind(&self) -> ArchetypeKind {
        self.behavior.kind()
    }

    pub fn behavior(&self) -> &dyn Behavior {
        self.behavior.as_ref()
    }

    /// Assign or replace the target. The only way an idled agent re-arms.
    pub fn assign_target(&mut self, target: TargetHandle) {
        self.target = Some(target);
    }

    /// Pin the agent for `duration` seconds. The longest pending request wins.
    pub fn immobilize(&mut self, duration: f32) {
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        self.immobilized_for = self.immobilized_for.max(duration);
        self.state = AgentState::Immobilized;
    }

    /// The owning actor died: drop any pending sequence without firing it
    pub fn on_death(&mut self) {
        self.scheduler.abandon();
        self.state = AgentState::Idle;
    }

    pub fn on_wall_contact(&mut self) {
        self.behavior.on_wall_contact();
    }

    /// Run one decision pass and return the motion to hand to physics
    pub fn tick(&mut self, body: Body, tick: &mut TickContext) -> Motion {
        if !body.alive {
            self.on_death();
            return Motion::default();
        }

        let target = self.target.and_then(|handle| tick.world.resolve(handle));
        let mut ctx = self.context(body, target, tick);
        self.behavior.tick_timers(&mut ctx);

        // Attack sequences and immobilization own the agent until they end
        if self.state == AgentState::Immobilized {
            self.immobilized_for -= ctx.dt;
            let step = self.scheduler.advance(ctx.dt);
            let impulse = self.apply_step(step, &mut ctx);
            if self.immobilized_for <= 0.0 {
                self.immobilized_for = 0.0;
                self.state = if self.scheduler.is_active() {
                    AgentState::Attacking
                } else {
                    AgentState::Idle
                };
            }
            return Motion::halt().with_impulse(impulse);
        }

        let mut impulse = None;
        if self.state == AgentState::Attacking {
            let step = self.scheduler.advance(ctx.dt);
            impulse = self.apply_step(step, &mut ctx);
            if self.scheduler.is_active() {
                return Motion::halt().with_impulse(impulse);
            }
            self.state = AgentState::Idle;
        }

        if let Some(handle) = self.target
            && target.is_none()
        {
            warn!(
                "Agent {:?} lost target {:?}; idling until a new target is assigned",
                body.entity,
                handle.entity()
            );
            self.target = None;
            self.state = AgentState::Idle;
            return Motion::halt().with_impulse(impulse);
        }

        if let Some(intent) = self.behavior.scripted(&mut ctx) {
            self.state = if target.is_some() {
                AgentState::Engaging
            } else {
                AgentState::Idle
            };
            return Motion {
                velocity_x: None,
                impulse: intent.impulse,
                place_at: intent.place_at,
            }
            .with_impulse(impulse);
        }

        let Some(target) = target else {
            self.state = AgentState::Idle;
            return Motion::halt().with_impulse(impulse);
        };

        let dx = target.position.x - body.position.x;
        let distance = dx.abs();
        self.state = self
            .behavior
            .classify(distance, self.stats.engage_distance);
        if let Some(facing) = Facing::toward(dx) {
            self.facing = facing;
            ctx.facing = facing;
        }

        let intent = match self.state {
            AgentState::Pursuing => self.behavior.pursue(&mut ctx),
            AgentState::Engaging => self.behavior.engage(&mut ctx),
            _ => return Motion::halt().with_impulse(impulse),
        };
        let impulse = match (impulse, intent.impulse) {
            (Some(a), Some(b)) => Some(a + b),
            (a, b) => a.or(b),
        };

        if let Some(plan) = intent.attack
            && self.scheduler.try_start(plan)
        {
            self.state = AgentState::Attacking;
            let step = self.scheduler.advance(0.0);
            let strike_impulse = self.apply_step(step, &mut ctx);
            if !self.scheduler.is_active() {
                self.state = AgentState::Engaging;
            }
            return Motion::halt()
                .with_impulse(impulse)
                .with_impulse(strike_impulse);
        }

        let toward = Facing::toward(dx).map(Facing::sign).unwrap_or(0.0);
        let direction = match intent.heading {
            Heading::Stop => 0.0,
            Heading::Toward => toward,
            Heading::Away => -toward,
        };
        let mut velocity_x = direction * self.stats.move_speed * intent.speed_scale;
        let mut impulse = impulse;
        if direction != 0.0
            && self.behavior.ledge_gated()
            && !self.ground_ahead(body, direction, &ctx)
        {
            // No horizontal travel past a ledge, whether walked or jumped
            velocity_x = 0.0;
            impulse = impulse.map(|i| Vec2::new(0.0, i.y));
        }

        Motion {
            velocity_x: Some(velocity_x),
            impulse,
            place_at: intent.place_at,
        }
    }

    /// Physical overlap with another actor. Deals contact damage once when the
    /// other actor is the target and no sequence is running, then locks the
    /// agent in a cooldown sequence. Returns true if damage was dealt.
    pub fn on_contact(&mut self, body: Body, other: &ActorView, tick: &mut TickContext) -> bool {
        if !body.alive || !other.alive {
            return false;
        }
        let Some(handle) = self.target else {
            return false;
        };
        if other.entity != handle.entity() || self.scheduler.is_active() {
            return false;
        }

        let contact = Contact {
            source: body.entity,
            source_position: body.position,
            target: other.entity,
            target_position: other.position,
            amount: self.stats.contact_damage,
        };
        let resolver = tick.contact;
        let dealt = resolver.resolve(&contact, &mut *tick.damage);

        let mut ctx = self.context(body, Some(*other), tick);
        self.behavior.on_contact(&mut ctx, other);

        if self
            .scheduler
            .try_start(AttackPlan::cooldown(self.stats.contact_cooldown))
        {
            self.scheduler.advance(0.0);
            if self.scheduler.is_active() && self.state != AgentState::Immobilized {
                self.state = AgentState::Attacking;
            }
        }
        dealt
    }

    fn context<'a>(
        &self,
        body: Body,
        target: Option<ActorView>,
        tick: &'a mut TickContext,
    ) -> AgentContext<'a> {
        AgentContext {
            dt: tick.dt,
            entity: body.entity,
            position: body.position,
            facing: self.facing,
            move_speed: self.stats.move_speed,
            team: self.stats.team,
            handle: self.target,
            target,
            world: tick.world,
            spawner: &mut *tick.spawner,
            damage: &mut *tick.damage,
            rng: &mut *tick.rng,
        }
    }

    fn apply_step(&mut self, step: SchedulerStep, ctx: &mut AgentContext) -> Option<Vec2> {
        match step {
            SchedulerStep::Effect(Payload::Strike) => self.behavior.strike(ctx),
            _ => None,
        }
    }

    fn ground_ahead(&self, body: Body, direction: f32, ctx: &AgentContext) -> bool {
        let probe = &self.stats.probe;
        let origin = body.position + Vec2::new(direction * probe.forward, probe.drop);
        ctx.world.ground_ahead(origin, Dir2::NEG_Y, probe.depth)
    }
}

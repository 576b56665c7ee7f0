//! AI domain: the strategy seam each archetype implements.

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::ai::agent::{AgentState, Facing, Intent, TargetHandle};
use crate::ai::spawn::SpawnService;
use crate::ai::world::{ActorView, WorldQuery};
use crate::combat::{ContactResolver, DamageSink, Team};
use crate::content::ArchetypeKind;

/// Services shared by every agent during one decision pass
pub struct TickContext<'a> {
    pub dt: f32,
    pub world: &'a dyn WorldQuery,
    pub spawner: &'a mut dyn SpawnService,
    pub damage: &'a mut dyn DamageSink,
    pub rng: &'a mut ChaCha8Rng,
    pub contact: ContactResolver,
}

/// What an archetype hook sees of its own agent and the world
pub struct AgentContext<'a> {
    pub dt: f32,
    pub entity: Entity,
    pub position: Vec2,
    pub facing: Facing,
    pub move_speed: f32,
    pub team: Team,
    pub handle: Option<TargetHandle>,
    /// The target as resolved this tick, if it is still alive
    pub target: Option<ActorView>,
    pub world: &'a dyn WorldQuery,
    pub spawner: &'a mut dyn SpawnService,
    pub damage: &'a mut dyn DamageSink,
    pub rng: &'a mut ChaCha8Rng,
}

impl AgentContext<'_> {
    /// Horizontal offset to the target, zero without one
    pub fn dx(&self) -> f32 {
        self.target
            .map(|target| target.position.x - self.position.x)
            .unwrap_or(0.0)
    }
}

/// Default distance policy: beyond the engage distance pursue, inside engage
pub fn default_band(distance: f32, engage_distance: f32) -> AgentState {
    if distance > engage_distance {
        AgentState::Pursuing
    } else {
        AgentState::Engaging
    }
}

/// Per-archetype strategy plugged into `AgentController`
pub trait Behavior: std::fmt::Debug + Send + Sync + 'static {
    fn kind(&self) -> ArchetypeKind;

    /// Whether movement is suppressed when no ground is detected ahead
    fn ledge_gated(&self) -> bool {
        true
    }

    /// Map the distance to the target onto Pursuing or Engaging
    fn classify(&self, distance: f32, engage_distance: f32) -> AgentState {
        default_band(distance, engage_distance)
    }

    /// Independent timers (jumps, escort spawns). Runs every tick, whatever the state.
    fn tick_timers(&mut self, _ctx: &mut AgentContext) {}

    /// Scripted archetypes drive themselves and skip target-relative decisions
    fn scripted(&mut self, _ctx: &mut AgentContext) -> Option<Intent> {
        None
    }

    fn pursue(&mut self, ctx: &mut AgentContext) -> Intent;

    fn engage(&mut self, ctx: &mut AgentContext) -> Intent;

    /// Create the attack artifact. May return a self impulse such as recoil.
    fn strike(&mut self, _ctx: &mut AgentContext) -> Option<Vec2> {
        None
    }

    /// Side effect after contact damage has been dealt to the target
    fn on_contact(&mut self, _ctx: &mut AgentContext, _other: &ActorView) {}

    fn on_wall_contact(&mut self) {}
}

//! AI domain: agent state, facing, target handles, and per-tick output.

use bevy::prelude::*;

use crate::ai::scheduler::AttackPlan;

/// Decision-loop state. Exactly one is active per agent per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentState {
    #[default]
    Idle,
    Pursuing,
    Engaging,
    Attacking,
    Immobilized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing toward a horizontal offset; None when the offset is zero.
    pub fn toward(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Facing::Right)
        } else if dx < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Non-owning reference to the actor an agent hunts. Assigned at spawn and
/// only replaced from outside the decision loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetHandle(pub Entity);

impl TargetHandle {
    pub fn entity(self) -> Entity {
        self.0
    }
}

/// Horizontal travel relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    Stop,
    Toward,
    Away,
}

/// What an archetype hook wants to do this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    pub heading: Heading,
    /// Multiplier on the agent's move speed
    pub speed_scale: f32,
    /// Attack to start; rejected if a sequence is already running
    pub attack: Option<AttackPlan>,
    /// Velocity change added on top of the movement velocity
    pub impulse: Option<Vec2>,
    /// Kinematic placement, used by scripted archetypes
    pub place_at: Option<Vec2>,
}

impl Intent {
    pub fn hold() -> Self {
        Self::default()
    }

    pub fn advance(speed_scale: f32) -> Self {
        Self {
            heading: Heading::Toward,
            speed_scale,
            ..default()
        }
    }

    pub fn retreat(speed_scale: f32) -> Self {
        Self {
            heading: Heading::Away,
            speed_scale,
            ..default()
        }
    }

    pub fn with_attack(mut self, plan: AttackPlan) -> Self {
        self.attack = Some(plan);
        self
    }

    pub fn with_impulse(mut self, impulse: Vec2) -> Self {
        self.impulse = Some(impulse);
        self
    }
}

/// Per-tick controller output, applied to the physics body by the ECS layer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    /// Overwrites the horizontal velocity when set
    pub velocity_x: Option<f32>,
    /// Added to the velocity after `velocity_x` is written
    pub impulse: Option<Vec2>,
    /// Target position for kinematic bodies
    pub place_at: Option<Vec2>,
}

impl Motion {
    pub fn halt() -> Self {
        Self {
            velocity_x: Some(0.0),
            ..default()
        }
    }

    pub fn with_impulse(mut self, impulse: Option<Vec2>) -> Self {
        self.impulse = match (self.impulse, impulse) {
            (Some(a), Some(b)) => Some(a + b),
            (a, b) => a.or(b),
        };
        self
    }
}

//! AI domain: windup/effect/recovery timers, one sequence per agent.

/// What the Effect phase of a sequence produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// The archetype's attack artifact (projectile, slash, explosive)
    Strike,
    /// Nothing; the sequence only blocks the agent for its duration
    Cooldown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackPlan {
    pub windup: f32,
    pub recovery: f32,
    pub payload: Payload,
}

impl AttackPlan {
    pub fn strike(windup: f32, recovery: f32) -> Self {
        Self {
            windup,
            recovery,
            payload: Payload::Strike,
        }
    }

    /// Attack-style lockout used after contact damage
    pub fn cooldown(duration: f32) -> Self {
        Self {
            windup: 0.0,
            recovery: duration,
            payload: Payload::Cooldown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Windup,
    Effect,
    Recovery,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackSequence {
    pub phase: Phase,
    pub elapsed: f32,
    pub plan: AttackPlan,
}

/// Result of advancing the scheduler by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerStep {
    /// No sequence in flight
    Idle,
    /// Still in windup or recovery
    Running,
    /// The effect fired this tick
    Effect(Payload),
    /// Recovery ended this tick; the scheduler is free again
    Finished,
}

#[derive(Debug, Clone, Default)]
pub struct ActionScheduler {
    active: Option<AttackSequence>,
}

impl ActionScheduler {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn sequence(&self) -> Option<&AttackSequence> {
        self.active.as_ref()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.active.map(|seq| seq.phase)
    }

    /// Start a sequence. Returns false, changing nothing, if one is already running.
    pub fn try_start(&mut self, plan: AttackPlan) -> bool {
        if self.active.is_some() {
            return false;
        }
        let phase = if plan.windup <= 0.0 {
            Phase::Effect
        } else {
            Phase::Windup
        };
        self.active = Some(AttackSequence {
            phase,
            elapsed: 0.0,
            plan,
        });
        true
    }

    /// Advance timers by `dt`. A sequence sitting in Effect fires without
    /// consuming time, so a zero windup fires on the tick it starts.
    pub fn advance(&mut self, dt: f32) -> SchedulerStep {
        let Some(seq) = self.active.as_mut() else {
            return SchedulerStep::Idle;
        };
        match seq.phase {
            Phase::Windup => {
                seq.elapsed += dt;
                if seq.elapsed < seq.plan.windup {
                    return SchedulerStep::Running;
                }
                self.fire()
            }
            Phase::Effect => self.fire(),
            Phase::Recovery => {
                seq.elapsed += dt;
                if seq.elapsed < seq.plan.recovery {
                    return SchedulerStep::Running;
                }
                self.active = None;
                SchedulerStep::Finished
            }
        }
    }

    /// Drop the running sequence without firing anything further
    pub fn abandon(&mut self) {
        self.active = None;
    }

    fn fire(&mut self) -> SchedulerStep {
        let Some(seq) = self.active.as_mut() else {
            return SchedulerStep::Idle;
        };
        let payload = seq.plan.payload;
        if seq.plan.recovery <= 0.0 {
            self.active = None;
        } else {
            seq.phase = Phase::Recovery;
            seq.elapsed = 0.0;
        }
        SchedulerStep::Effect(payload)
    }
}

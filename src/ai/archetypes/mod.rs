//! AI domain: the concrete strategies behind each archetype kind.

mod boss;
mod jumper;
mod lobber;
mod ranged;
mod replicator;
mod rusher;

pub use boss::{BossBand, BossBehavior};
pub use jumper::JumperBehavior;
pub use lobber::LobberBehavior;
pub use ranged::RangedBehavior;
pub use replicator::ReplicatorBehavior;
pub use rusher::RusherBehavior;

use crate::ai::behavior::Behavior;
use crate::content::{ArchetypeDef, ArchetypeTuning};

/// Build the strategy for a definition. `replicates` is only read by the
/// replicator; clones are built with it off.
pub fn build_behavior(def: &ArchetypeDef, replicates: bool) -> Box<dyn Behavior> {
    match &def.tuning {
        ArchetypeTuning::Ranged(tuning) => Box::new(RangedBehavior::new(def.kind, tuning.clone())),
        ArchetypeTuning::Rusher(tuning) => Box::new(RusherBehavior::new(tuning.clone())),
        ArchetypeTuning::Jumper(tuning) => {
            Box::new(JumperBehavior::new(tuning.clone(), def.body_size.1 * 0.5))
        }
        ArchetypeTuning::Replicator(tuning) => {
            Box::new(ReplicatorBehavior::new(tuning.clone(), replicates))
        }
        ArchetypeTuning::Boss(tuning) => Box::new(BossBehavior::new(tuning.clone())),
        ArchetypeTuning::Lobber(tuning) => Box::new(LobberBehavior::new(tuning.clone())),
    }
}

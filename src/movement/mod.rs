//! Movement domain: physics layers, ground probes, and motion writes.

mod components;
mod motion;
mod probe;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Ground, Target, Wall};
pub use motion::apply_motion;
pub use probe::{PhysicsWorld, terrain_between};

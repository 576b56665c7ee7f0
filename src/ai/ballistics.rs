//! AI domain: analytic projectile motion under constant gravity.

use bevy::prelude::*;

/// Position at time `t` of a body launched from `p0` with velocity `v`
pub fn position_at(p0: Vec2, v: Vec2, gravity: Vec2, t: f32) -> Vec2 {
    p0 + v * t + 0.5 * gravity * t * t
}

/// Sample the trajectory at `t = i * dt` for `i in 0..steps`
pub fn trajectory(p0: Vec2, v: Vec2, gravity: Vec2, dt: f32, steps: usize) -> Vec<Vec2> {
    (0..steps)
        .map(|i| position_at(p0, v, gravity, i as f32 * dt))
        .collect()
}

/// Velocity change from an instantaneous impulse on a body of `mass`.
/// Non-positive masses count as unit mass.
pub fn impulse_velocity(impulse: Vec2, mass: f32) -> Vec2 {
    if mass.is_finite() && mass > 0.0 {
        impulse / mass
    } else {
        impulse
    }
}

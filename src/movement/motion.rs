//! Movement domain: writing controller output onto a body's velocity.

use bevy::prelude::*;

use crate::ai::Motion;

/// Apply one tick of controller output to `velocity`.
///
/// `place_at` becomes the velocity that reaches the point in one step,
/// `velocity_x` then overwrites the horizontal part, and the impulse is added last.
pub fn apply_motion(motion: &Motion, position: Vec2, dt: f32, velocity: &mut Vec2) {
    if let Some(place) = motion.place_at
        && dt > 0.0
    {
        *velocity = (place - position) / dt;
    }
    if let Some(vx) = motion.velocity_x {
        velocity.x = vx;
    }
    if let Some(impulse) = motion.impulse {
        *velocity += impulse;
    }
}

//! Combat domain: tuning resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    /// Maximum speed an actor can have right after knockback
    pub max_knockback_velocity: f32,
    /// Minimum upward push applied with any non-zero knockback
    pub min_vertical_knockback: f32,
    /// Knockback strength for contact damage
    pub contact_knockback: f32,
    /// Knockback strength for projectile hits
    pub projectile_knockback: f32,
    /// Projectiles older than this are removed even if they hit nothing
    pub projectile_lifetime: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            max_knockback_velocity: 12.0,
            min_vertical_knockback: 1.5,
            contact_knockback: 3.0,
            projectile_knockback: 1.0,
            projectile_lifetime: 5.0,
        }
    }
}

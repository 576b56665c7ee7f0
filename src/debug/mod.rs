//! Debug tooling for the sandbox (feature `dev-tools`).
//!
//! Features:
//! - Gizmo overlay of agent states, ledge probes, boss bands, and lobber arcs
//! - Spawn any archetype beside the target
//! - Target invulnerability and full heal
//! - Reseed the simulation rng

use bevy::prelude::*;

mod state;
mod systems;

pub use state::DebugState;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (systems::handle_debug_hotkeys, systems::apply_invincibility)
                    .chain()
                    .run_if(resource_exists::<ButtonInput<KeyCode>>),
            )
            .add_systems(
                Update,
                systems::draw_agent_gizmos.run_if(|state: Res<DebugState>| state.gizmos_visible),
            );
    }
}

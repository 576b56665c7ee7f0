//! Debug domain: state for the sandbox's debug tooling.

use bevy::prelude::*;

use crate::content::ArchetypeKind;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether agent states, probes, and bands are drawn
    pub gizmos_visible: bool,
    /// Whether the target takes damage
    pub invincible: bool,
    /// Kind spawned by Ctrl+E
    pub selected_kind: ArchetypeKind,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            gizmos_visible: true,
            invincible: false,
            selected_kind: ArchetypeKind::Gunner,
        }
    }
}

impl DebugState {
    /// Step the spawn selection through every kind in order
    pub fn cycle_kind(&mut self) {
        let index = ArchetypeKind::ALL
            .iter()
            .position(|kind| *kind == self.selected_kind)
            .unwrap_or(0);
        self.selected_kind = ArchetypeKind::ALL[(index + 1) % ArchetypeKind::ALL.len()];
    }
}

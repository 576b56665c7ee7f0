//! ArchetypeRegistry resource providing lookups for loaded archetype definitions.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Registry of configured archetypes. A kind missing from the map is
/// unconfigured; spawn requests for it are skipped.
#[derive(Resource, Debug, Default, Clone)]
pub struct ArchetypeRegistry {
    pub archetypes: HashMap<ArchetypeKind, ArchetypeDef>,
}

impl ArchetypeRegistry {
    /// Registry holding the stock definition of every kind
    pub fn with_stock() -> Self {
        Self::from_defs(ArchetypeKind::ALL.into_iter().map(ArchetypeDef::stock))
    }

    pub fn from_defs(defs: impl IntoIterator<Item = ArchetypeDef>) -> Self {
        Self {
            archetypes: defs.into_iter().map(|def| (def.kind, def)).collect(),
        }
    }

    pub fn get(&self, kind: ArchetypeKind) -> Option<&ArchetypeDef> {
        self.archetypes.get(&kind)
    }

    pub fn insert(&mut self, def: ArchetypeDef) {
        self.archetypes.insert(def.kind, def);
    }

    pub fn remove(&mut self, kind: ArchetypeKind) -> Option<ArchetypeDef> {
        self.archetypes.remove(&kind)
    }

    /// Returns a summary of loaded content for logging.
    pub fn summary(&self) -> String {
        let mut kinds: Vec<_> = self.archetypes.keys().copied().collect();
        kinds.sort();
        let names: Vec<String> = kinds.iter().map(|kind| format!("{:?}", kind)).collect();
        format!(
            "ArchetypeRegistry loaded {} archetypes: {}",
            kinds.len(),
            names.join(", ")
        )
    }
}

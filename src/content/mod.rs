//! Content domain: archetype definitions loaded from RON at startup.

use bevy::prelude::*;
use std::path::PathBuf;

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    ArchetypeDef, ArchetypeKind, ArchetypeTuning, BossTuning, DataFile, JumperTuning, LedgeProbe,
    LobberTuning, RangedPayload, RangedTuning, ReplicatorTuning, RusherTuning,
};
pub use loader::{ContentLoadError, load_archetypes, parse_data_file};
pub use registry::ArchetypeRegistry;
pub use validation::{ValidationError, validate_archetype, validate_archetypes};

/// Where content files are read from
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPath>()
            .init_resource::<ArchetypeRegistry>()
            .add_systems(PreStartup, load_content);
    }
}

/// Build the registry from a load result. A file that loads is authoritative;
/// a failed load falls back to the stock definitions.
pub fn registry_from_load(
    result: Result<Vec<ArchetypeDef>, ContentLoadError>,
) -> (ArchetypeRegistry, Vec<ValidationError>) {
    match result {
        Ok(defs) => {
            let (valid, errors) = validate_archetypes(defs);
            (ArchetypeRegistry::from_defs(valid), errors)
        }
        Err(e) => {
            error!("{}; using stock archetypes", e);
            (ArchetypeRegistry::with_stock(), Vec::new())
        }
    }
}

fn load_content(path: Res<ContentPath>, mut registry: ResMut<ArchetypeRegistry>) {
    let (loaded, errors) = registry_from_load(load_archetypes(&path.0));
    for e in &errors {
        warn!("{}", e);
    }
    *registry = loaded;
    info!("{}", registry.summary());
}

//! Brawl AI - enemy decision-and-action engine for a 2D side-scrolling brawler.
//!
//! # Architecture
//!
//! The engine is organized into plugins, each handling one domain:
//!
//! - **Core**: Run seed, deterministic rng, pause control, tick ordering
//! - **Content**: Archetype definitions loaded from RON
//! - **Ai**: Per-agent decision loop, attack scheduling, archetype strategies
//! - **Combat**: Health, damage messages, contact resolution, attack artifacts
//! - **Movement**: Physics layers, ground probes, motion writes
//! - **Debug**: Gizmo overlays and hotkeys (feature `dev-tools`)

pub mod ai;
pub mod combat;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;

use bevy::prelude::*;

/// Every simulation plugin. Physics (`avian2d::PhysicsPlugins`) and the
/// windowing/render stack are added by the host app.
pub struct BrawlAiPlugin;

impl Plugin for BrawlAiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            combat::CombatPlugin,
            ai::AiPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}

//! Debug domain: hotkeys and gizmo overlays.

use bevy::prelude::*;

use crate::ai::{AgentController, AgentSpawn, AgentState, archetypes::LobberBehavior, spawn_agent};
use crate::combat::{ActorHealth, Invulnerable};
use crate::content::{ArchetypeKind, ArchetypeRegistry, ArchetypeTuning};
use crate::core::{RunConfig, SimRng};
use crate::debug::state::DebugState;
use crate::movement::Target;

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut run_config: ResMut<RunConfig>,
    mut rng: ResMut<SimRng>,
    registry: Res<ArchetypeRegistry>,
    mut target_query: Query<(Entity, &Transform, &mut ActorHealth), With<Target>>,
) {
    // F1 or backtick toggles the overlay
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.gizmos_visible = !debug_state.gizmos_visible;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+I: Toggle invincibility
    if keyboard.just_pressed(KeyCode::KeyI) {
        debug_state.invincible = !debug_state.invincible;
        info!(
            "[DEBUG] Invincibility {}",
            if debug_state.invincible { "ON" } else { "OFF" }
        );
    }

    // Ctrl+K: Cycle the spawn kind
    if keyboard.just_pressed(KeyCode::KeyK) {
        debug_state.cycle_kind();
        info!("[DEBUG] Spawn kind: {:?}", debug_state.selected_kind);
    }

    // Ctrl+E: Spawn the selected kind beside the target
    if keyboard.just_pressed(KeyCode::KeyE) {
        let Some((target, transform, _)) = target_query.iter().next() else {
            warn!("[DEBUG] No target to spawn next to");
            return;
        };
        let kind = debug_state.selected_kind;
        let Some(def) = registry.get(kind) else {
            warn!("[DEBUG] {:?} is not configured", kind);
            return;
        };
        let position = transform.translation.truncate() + Vec2::new(6.0, 1.0);
        let entity = spawn_agent(
            &mut commands,
            def,
            AgentSpawn::at(position).with_target(target),
        );
        info!("[DEBUG] Spawned {:?} {:?}", kind, entity);
    }

    // Ctrl+H: Full heal the target
    if keyboard.just_pressed(KeyCode::KeyH) {
        for (_, _, mut health) in &mut target_query {
            let max = health.max();
            health.heal(max);
        }
        info!("[DEBUG] Target healed");
    }

    // Ctrl+S: Reseed the simulation rng with a fresh seed
    if keyboard.just_pressed(KeyCode::KeyS) {
        *run_config = RunConfig::default();
        rng.reseed(run_config.seed);
        info!("[DEBUG] Reseeded with {}", run_config.seed);
    }
}

/// Mirror the invincibility toggle onto the target as an `Invulnerable` marker
pub(crate) fn apply_invincibility(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    query: Query<(Entity, Has<Invulnerable>), With<Target>>,
) {
    for (entity, invulnerable) in &query {
        match (debug_state.invincible, invulnerable) {
            (true, false) => {
                commands.entity(entity).insert(Invulnerable);
            }
            (false, true) => {
                commands.entity(entity).remove::<Invulnerable>();
            }
            _ => {}
        }
    }
}

fn state_color(state: AgentState) -> Color {
    match state {
        AgentState::Idle => Color::srgb(0.6, 0.6, 0.6),
        AgentState::Pursuing => Color::srgb(0.2, 0.8, 0.2),
        AgentState::Engaging => Color::srgb(0.9, 0.8, 0.1),
        AgentState::Attacking => Color::srgb(1.0, 0.2, 0.2),
        AgentState::Immobilized => Color::srgb(0.3, 0.5, 1.0),
    }
}

/// Draw agent states, ledge probes, boss bands, and the lobber's throw preview
pub(crate) fn draw_agent_gizmos(
    mut gizmos: Gizmos,
    registry: Res<ArchetypeRegistry>,
    agents: Query<(&Transform, &AgentController)>,
) {
    for (transform, controller) in &agents {
        let position = transform.translation.truncate();
        gizmos.circle_2d(position, 0.2, state_color(controller.state()));

        // Ledge probe ahead of the facing direction
        if controller.behavior().ledge_gated() {
            let probe = &controller.stats.probe;
            let origin =
                position + Vec2::new(controller.facing().sign() * probe.forward, probe.drop);
            gizmos.line_2d(
                origin,
                origin - Vec2::new(0.0, probe.depth),
                Color::srgb(0.0, 1.0, 1.0),
            );
        }

        let Some(def) = registry.get(controller.kind()) else {
            continue;
        };
        match (&def.tuning, controller.kind()) {
            (ArchetypeTuning::Boss(boss), ArchetypeKind::Boss) => {
                for (radius, color) in [
                    (boss.flee_distance, Color::srgb(1.0, 0.3, 0.3)),
                    (boss.stop_distance, Color::srgb(1.0, 1.0, 0.3)),
                    (boss.chase_distance, Color::srgb(0.3, 1.0, 0.3)),
                ] {
                    gizmos.circle_2d(position, radius, color);
                }
            }
            (ArchetypeTuning::Lobber(lobber), ArchetypeKind::Lobber) => {
                let preview = LobberBehavior::new(lobber.clone()).preview(position);
                gizmos.linestrip_2d(preview, Color::srgb(1.0, 0.6, 0.0));
            }
            _ => {}
        }
    }
}

//! AI domain: ECS systems driving the decision loop.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::ai::behavior::TickContext;
use crate::ai::controller::{AgentController, Body};
use crate::ai::spawn::{Escort, SpawnRequest};
use crate::ai::world::{ActorSnapshot, ActorView};
use crate::combat::{ActorHealth, Combatant, CombatTuning, ContactResolver, DamageEvent, Team};
use crate::core::SimRng;
use crate::movement::{PhysicsWorld, Wall, apply_motion};

type ActorQuery<'w, 's> =
    Query<'w, 's, (Entity, &'static Transform, &'static Team, &'static ActorHealth), With<Combatant>>;

/// Snapshot every combatant once per pass, in entity order
fn take_snapshot(
    actors: &ActorQuery,
    escorts: &Query<&Escort>,
    cameras: &Query<&Transform, With<Camera2d>>,
) -> ActorSnapshot {
    let views = actors
        .iter()
        .map(|(entity, transform, team, health)| ActorView {
            entity,
            position: transform.translation.truncate(),
            team: *team,
            alive: !health.is_dead(),
        })
        .collect();
    ActorSnapshot::new(views)
        .with_viewpoint(
            cameras
                .iter()
                .next()
                .map(|camera| camera.translation.truncate()),
        )
        .with_escorts(escorts.iter().map(|escort| escort.leader))
}

/// Turn collision starts from the last physics step into contact hooks
#[allow(clippy::too_many_arguments)]
pub(crate) fn detect_agent_contacts(
    time: Res<Time>,
    spatial: SpatialQuery,
    tuning: Res<CombatTuning>,
    mut rng: ResMut<SimRng>,
    mut collision_events: MessageReader<CollisionStart>,
    mut spawns: MessageWriter<SpawnRequest>,
    mut damage: MessageWriter<DamageEvent>,
    actors: ActorQuery,
    escorts: Query<&Escort>,
    cameras: Query<&Transform, With<Camera2d>>,
    walls: Query<(), With<Wall>>,
    mut agents: Query<(&Transform, &ActorHealth, &mut AgentController)>,
) {
    let snapshot = take_snapshot(&actors, &escorts, &cameras);
    let world = PhysicsWorld {
        spatial: &spatial,
        snapshot: &snapshot,
    };
    let mut tick = TickContext {
        dt: time.delta_secs(),
        world: &world,
        spawner: &mut spawns,
        damage: &mut damage,
        rng: &mut rng.rng,
        contact: ContactResolver::new(tuning.contact_knockback),
    };

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (agent_entity, other_entity) in pairs {
            let Ok((transform, health, mut controller)) = agents.get_mut(agent_entity) else {
                continue;
            };
            if walls.contains(other_entity) {
                controller.on_wall_contact();
                continue;
            }
            let Some(other) = snapshot.get(other_entity) else {
                continue;
            };
            let body = Body {
                entity: agent_entity,
                position: transform.translation.truncate(),
                alive: !health.is_dead(),
            };
            if controller.on_contact(body, &other, &mut tick) {
                debug!(
                    "Agent {:?} dealt contact damage to {:?}",
                    agent_entity, other_entity
                );
            }
        }
    }
}

/// One decision pass per agent, in entity order, then write the motion
#[allow(clippy::too_many_arguments)]
pub(crate) fn tick_agents(
    time: Res<Time>,
    spatial: SpatialQuery,
    tuning: Res<CombatTuning>,
    mut rng: ResMut<SimRng>,
    mut spawns: MessageWriter<SpawnRequest>,
    mut damage: MessageWriter<DamageEvent>,
    actors: ActorQuery,
    escorts: Query<&Escort>,
    cameras: Query<&Transform, With<Camera2d>>,
    mut agents: Query<(
        Entity,
        &Transform,
        &ActorHealth,
        &mut AgentController,
        &mut LinearVelocity,
    )>,
) {
    let dt = time.delta_secs();
    let snapshot = take_snapshot(&actors, &escorts, &cameras);
    let world = PhysicsWorld {
        spatial: &spatial,
        snapshot: &snapshot,
    };
    let mut tick = TickContext {
        dt,
        world: &world,
        spawner: &mut spawns,
        damage: &mut damage,
        rng: &mut rng.rng,
        contact: ContactResolver::new(tuning.contact_knockback),
    };

    let mut order: Vec<Entity> = agents.iter().map(|(entity, ..)| entity).collect();
    order.sort();

    for entity in order {
        let Ok((entity, transform, health, mut controller, mut velocity)) = agents.get_mut(entity)
        else {
            continue;
        };
        let position = transform.translation.truncate();
        let body = Body {
            entity,
            position,
            alive: !health.is_dead(),
        };
        let motion = controller.tick(body, &mut tick);
        apply_motion(&motion, position, dt, &mut velocity.0);
    }
}

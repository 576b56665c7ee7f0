//! Combat domain: artifact collisions, damage application, and cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashSet;

use crate::ai::{ActorView, AgentController, Escort};
use crate::combat::components::{
    ActorHealth, Combatant, Explosive, Hitbox, HitboxLifetime, Invulnerable, Projectile, SnareTrap,
    Team,
};
use crate::combat::contact::{Contact, ContactResolver};
use crate::combat::events::{DamageEvent, DeathEvent, HealEvent, ImmobilizeEvent};
use crate::combat::resources::CombatTuning;
use crate::content::ArchetypeKind;
use crate::movement::terrain_between;

/// Counts down slash and projectile lifetimes, despawning expired ones
pub(crate) fn cleanup_expired_hitboxes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitboxLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        if lifetime.tick(dt) {
            commands.entity(entity).despawn();
        }
    }
}

/// Slash hitboxes, projectiles, and snares touching actors
pub(crate) fn detect_hitbox_collisions(
    mut commands: Commands,
    tuning: Res<CombatTuning>,
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut immobilize_events: MessageWriter<ImmobilizeEvent>,
    mut hitbox_query: Query<(&mut Hitbox, &Team, &Transform)>,
    projectile_query: Query<(&Projectile, &Team, &Transform)>,
    mut snare_query: Query<&mut SnareTrap>,
    target_query: Query<(Entity, &Team, &Transform, &ActorHealth), With<Combatant>>,
) {
    // A projectile breaks on its first hit even if it overlaps two actors this step
    let mut spent_projectiles = HashSet::new();

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (artifact, target_entity) in pairs {
            let Ok((target, target_team, target_transform, health)) =
                target_query.get(target_entity)
            else {
                continue;
            };
            if health.is_dead() {
                continue;
            }
            let target_pos = target_transform.translation.truncate();

            if let Ok((mut hitbox, hitbox_team, hitbox_transform)) = hitbox_query.get_mut(artifact)
            {
                if hitbox_team == target_team || !hitbox.register_hit(target) {
                    continue;
                }
                damage_events.write(DamageEvent {
                    source: hitbox.owner,
                    target,
                    amount: hitbox.damage,
                    knockback: ContactResolver::knockback_between(
                        hitbox_transform.translation.truncate(),
                        target_pos,
                        hitbox.knockback,
                    ),
                });
                debug!("Slash from {:?} hit {:?}", hitbox.owner, target);
                continue;
            }

            if let Ok((projectile, projectile_team, projectile_transform)) =
                projectile_query.get(artifact)
            {
                if projectile_team == target_team
                    || projectile.owner == target
                    || spent_projectiles.contains(&artifact)
                {
                    continue;
                }
                spent_projectiles.insert(artifact);
                let resolver = ContactResolver::new(tuning.projectile_knockback);
                resolver.resolve(
                    &Contact {
                        source: projectile.owner,
                        source_position: projectile_transform.translation.truncate(),
                        target,
                        target_position: target_pos,
                        amount: projectile.damage,
                    },
                    &mut damage_events,
                );
                commands.entity(artifact).despawn();
                continue;
            }

            if let Ok(mut snare) = snare_query.get_mut(artifact)
                && let Some(duration) = snare.trigger()
            {
                immobilize_events.write(ImmobilizeEvent {
                    target,
                    duration,
                });
                info!("Snare {:?} caught {:?} for {}s", artifact, target, duration);
            }
        }
    }
}

/// Projectiles are destroyed on touching ground or walls
pub(crate) fn break_projectiles_on_terrain(
    mut commands: Commands,
    time: Res<Time>,
    spatial: SpatialQuery,
    query: Query<(Entity, &Transform, &Projectile)>,
) {
    let dt = time.delta_secs();
    for (entity, transform, projectile) in &query {
        let position = transform.translation.truncate();
        let next = position + projectile.velocity * dt;
        if let Some(terrain) = terrain_between(&spatial, position, next) {
            debug!("Projectile {:?} broke on {:?}", entity, terrain);
            commands.entity(entity).despawn();
        }
    }
}

/// Fly explosives to their frozen point and detonate them there
pub(crate) fn advance_explosives(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut explosives: Query<(Entity, &mut Transform, &Explosive, &Team)>,
    actors: Query<(Entity, &Transform, &Team, &ActorHealth), (With<Combatant>, Without<Explosive>)>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, explosive, team) in &mut explosives {
        let (next, detonate) = explosive.advance(transform.translation.truncate(), dt);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
        if !detonate {
            continue;
        }

        let mut candidates: Vec<ActorView> = actors
            .iter()
            .map(|(actor, actor_transform, actor_team, health)| ActorView {
                entity: actor,
                position: actor_transform.translation.truncate(),
                team: *actor_team,
                alive: !health.is_dead(),
            })
            .collect();
        candidates.sort_by_key(|actor| actor.entity);
        let in_blast = crate::ai::overlap_in(&candidates, next, explosive.radius);

        let resolver = ContactResolver::new(tuning.contact_knockback);
        match resolver.resolve_first(
            explosive.owner,
            next,
            *team,
            explosive.damage,
            &in_blast,
            &mut damage_events,
        ) {
            Some(hit) => info!("Explosive from {:?} hit {:?}", explosive.owner, hit),
            None => debug!("Explosive from {:?} hit nothing", explosive.owner),
        }
        commands.entity(entity).despawn();
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<(&mut ActorHealth, Has<Invulnerable>)>,
) {
    for event in damage_events.read() {
        let Ok((mut health, invulnerable)) = query.get_mut(event.target) else {
            continue;
        };
        if invulnerable {
            continue;
        }
        let outcome = health.apply_damage(event.amount);
        if outcome.dealt > 0.0 {
            debug!(
                "{:?} took {} from {:?} ({}/{})",
                event.target,
                outcome.dealt,
                event.source,
                health.current(),
                health.max()
            );
        }
        if outcome.died {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn apply_knockback(
    tuning: Res<CombatTuning>,
    mut damage_events: MessageReader<DamageEvent>,
    mut query: Query<&mut LinearVelocity>,
) {
    for event in damage_events.read() {
        if event.knockback == Vec2::ZERO {
            continue;
        }
        if let Ok(mut velocity) = query.get_mut(event.target) {
            velocity.x += event.knockback.x;
            velocity.y += event.knockback.y.max(tuning.min_vertical_knockback);
            velocity.0 = velocity.0.clamp_length_max(tuning.max_knockback_velocity);

            debug!(
                "Knockback applied: knockback={:?}, final_velocity=({:.1}, {:.1})",
                event.knockback, velocity.x, velocity.y
            );
        }
    }
}

pub(crate) fn apply_heals(
    mut heal_events: MessageReader<HealEvent>,
    mut query: Query<&mut ActorHealth>,
) {
    for event in heal_events.read() {
        if let Ok(mut health) = query.get_mut(event.target) {
            let restored = health.heal(event.amount);
            debug!("{:?} healed for {}", event.target, restored);
        }
    }
}

pub(crate) fn apply_immobilize(
    mut immobilize_events: MessageReader<ImmobilizeEvent>,
    mut query: Query<&mut AgentController>,
) {
    for event in immobilize_events.read() {
        if let Ok(mut controller) = query.get_mut(event.target) {
            controller.immobilize(event.duration);
        }
    }
}

/// Death is terminal: abandon pending sequences and despawn on the same tick.
/// A dead boss takes its escorts with it.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut agents: Query<&mut AgentController>,
    escorts: Query<(Entity, &Escort)>,
) {
    let mut despawned = HashSet::new();

    for event in death_events.read() {
        if !despawned.insert(event.entity) {
            continue;
        }
        let mut is_boss = false;
        if let Ok(mut controller) = agents.get_mut(event.entity) {
            controller.on_death();
            is_boss = controller.kind() == ArchetypeKind::Boss;
        }
        if let Ok(mut entity) = commands.get_entity(event.entity) {
            entity.despawn();
        }
        info!("{:?} died", event.entity);

        if is_boss {
            for (escort, _) in escorts.iter().filter(|(_, e)| e.leader == event.entity) {
                if despawned.insert(escort) {
                    commands.entity(escort).despawn();
                }
            }
        }
    }
}

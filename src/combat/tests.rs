//! Combat domain: tests for the health ledger, contact resolution, and death handling.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use super::systems::{apply_damage, cleanup_expired_hitboxes, process_deaths};
use super::*;
use crate::ai::{ActorView, AgentController, AgentStats, Escort, archetypes::build_behavior};
use crate::content::{ArchetypeDef, ArchetypeKind};

fn actor(n: u64, x: f32, team: Team) -> ActorView {
    ActorView {
        entity: Entity::from_bits(n),
        position: Vec2::new(x, 0.0),
        team,
        alive: true,
    }
}

// -----------------------------------------------------------------------------
// ActorHealth tests
// -----------------------------------------------------------------------------

#[test]
fn test_damage_clamps_at_zero_and_dies_once() {
    let mut health = ActorHealth::new(3.0);

    let outcome = health.apply_damage(2.0);
    assert_eq!(outcome.dealt, 2.0);
    assert!(!outcome.died);

    let outcome = health.apply_damage(5.0);
    assert_eq!(outcome.dealt, 1.0);
    assert!(outcome.died);
    assert_eq!(health.current(), 0.0);

    let outcome = health.apply_damage(5.0);
    assert_eq!(outcome, DamageOutcome::default());
}

#[test]
fn test_damage_ignores_bad_amounts() {
    let mut health = ActorHealth::new(3.0);
    assert_eq!(health.apply_damage(0.0).dealt, 0.0);
    assert_eq!(health.apply_damage(-1.0).dealt, 0.0);
    assert_eq!(health.apply_damage(f32::NAN).dealt, 0.0);
    assert_eq!(health.current(), 3.0);
}

#[test]
fn test_heal_caps_at_max_and_not_when_dead() {
    let mut health = ActorHealth::new(10.0);
    health.apply_damage(4.0);
    assert_eq!(health.heal(10.0), 4.0);
    assert_eq!(health.percent(), 1.0);

    health.apply_damage(10.0);
    assert_eq!(health.heal(5.0), 0.0);
    assert!(health.is_dead());
}

// -----------------------------------------------------------------------------
// Artifact tests
// -----------------------------------------------------------------------------

#[test]
fn test_slash_hits_once() {
    let owner = Entity::from_bits(1);
    let mut hitbox = Hitbox::new(2.0, 4.0, owner);

    assert!(!hitbox.register_hit(owner));
    assert!(hitbox.register_hit(Entity::from_bits(2)));
    assert!(!hitbox.register_hit(Entity::from_bits(2)));
    assert!(!hitbox.register_hit(Entity::from_bits(3)));
}

#[test]
fn test_hitbox_lifetime_expires() {
    let mut lifetime = HitboxLifetime(0.3);
    assert!(!lifetime.tick(0.2));
    assert!(lifetime.tick(0.2));
}

#[test]
fn test_explosive_travels_then_detonates() {
    let explosive = Explosive {
        destination: Vec2::new(4.0, 0.0),
        speed: 2.0,
        radius: 2.5,
        damage: 15.0,
        owner: Entity::from_bits(1),
    };

    let (next, detonate) = explosive.advance(Vec2::ZERO, 1.0);
    assert_eq!(next, Vec2::new(2.0, 0.0));
    assert!(!detonate);

    let (next, detonate) = explosive.advance(next, 5.0);
    assert_eq!(next, Vec2::new(4.0, 0.0));
    assert!(detonate);
}

#[test]
fn test_explosive_at_destination_detonates_in_place() {
    let explosive = Explosive {
        destination: Vec2::ZERO,
        speed: 2.0,
        radius: 1.0,
        damage: 1.0,
        owner: Entity::from_bits(1),
    };
    assert_eq!(explosive.advance(Vec2::new(0.05, 0.0), 0.0), (Vec2::new(0.05, 0.0), true));
}

#[test]
fn test_one_time_snare_springs_once() {
    let mut snare = SnareTrap::new(2.0, true);
    assert_eq!(snare.trigger(), Some(2.0));
    assert_eq!(snare.trigger(), None);

    let mut reusable = SnareTrap::new(1.0, false);
    assert_eq!(reusable.trigger(), Some(1.0));
    assert_eq!(reusable.trigger(), Some(1.0));
}

// -----------------------------------------------------------------------------
// ContactResolver tests
// -----------------------------------------------------------------------------

#[test]
fn test_knockback_points_from_source_to_target() {
    let push = ContactResolver::knockback_between(Vec2::ZERO, Vec2::new(-3.0, 0.0), 2.0);
    assert_eq!(push, Vec2::new(-2.0, 0.0));

    let coincident = ContactResolver::knockback_between(Vec2::ONE, Vec2::ONE, 2.0);
    assert_eq!(coincident, Vec2::new(2.0, 0.0));
}

#[test]
fn test_resolve_ignores_self_and_zero_damage() {
    let resolver = ContactResolver::new(3.0);
    let mut sink: Vec<DamageEvent> = Vec::new();
    let a = Entity::from_bits(1);
    let b = Entity::from_bits(2);

    let self_contact = Contact {
        source: a,
        source_position: Vec2::ZERO,
        target: a,
        target_position: Vec2::ZERO,
        amount: 1.0,
    };
    assert!(!resolver.resolve(&self_contact, &mut sink));

    let zero = Contact {
        target: b,
        amount: 0.0,
        ..self_contact
    };
    assert!(!resolver.resolve(&zero, &mut sink));
    assert!(sink.is_empty());

    let hit = Contact {
        target: b,
        target_position: Vec2::new(1.0, 0.0),
        ..self_contact
    };
    assert!(resolver.resolve(&hit, &mut sink));
    assert_eq!(sink[0].knockback, Vec2::new(3.0, 0.0));
}

#[test]
fn test_first_valid_skips_allies_and_dead() {
    let source = Entity::from_bits(1);
    let mut dead = actor(2, 0.5, Team::Player);
    dead.alive = false;
    let candidates = [
        actor(1, 0.0, Team::Player),
        dead,
        actor(3, 0.5, Team::Enemy),
        actor(4, 1.0, Team::Player),
        actor(5, 1.5, Team::Player),
    ];

    let first = first_valid(&candidates, source, Team::Enemy).unwrap();
    assert_eq!(first.entity, Entity::from_bits(4));

    let resolver = ContactResolver::new(1.0);
    let mut sink: Vec<DamageEvent> = Vec::new();
    let hit = resolver.resolve_first(source, Vec2::ZERO, Team::Enemy, 15.0, &candidates, &mut sink);
    assert_eq!(hit, Some(Entity::from_bits(4)));
    assert_eq!(sink.len(), 1);

    let all = resolver.resolve_all(source, Vec2::ZERO, Team::Enemy, 1.0, &candidates, &mut sink);
    assert_eq!(all, vec![Entity::from_bits(4), Entity::from_bits(5)]);
}

#[test]
fn test_no_candidates_means_no_damage() {
    let resolver = ContactResolver::new(1.0);
    let mut sink: Vec<DamageEvent> = Vec::new();
    let hit = resolver.resolve_first(Entity::from_bits(1), Vec2::ZERO, Team::Enemy, 5.0, &[], &mut sink);
    assert_eq!(hit, None);
    assert!(sink.is_empty());
}

// -----------------------------------------------------------------------------
// Headless app tests
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct DeathLog(Vec<Entity>);

fn record_deaths(mut deaths: MessageReader<DeathEvent>, mut log: ResMut<DeathLog>) {
    log.0.extend(deaths.read().map(|death| death.entity));
}

fn death_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<DeathLog>()
        .add_message::<DamageEvent>()
        .add_message::<DeathEvent>()
        .add_systems(Update, (apply_damage, process_deaths, record_deaths).chain());
    app
}

fn hit(target: Entity, amount: f32) -> DamageEvent {
    DamageEvent {
        source: Entity::from_bits(1),
        target,
        amount,
        knockback: Vec2::ZERO,
    }
}

#[test]
fn test_lethal_damage_despawns_with_one_death() {
    let mut app = death_app();
    let victim = app
        .world_mut()
        .spawn((Combatant, Team::Enemy, ActorHealth::new(3.0)))
        .id();

    app.world_mut().write_message(hit(victim, 5.0));
    app.world_mut().write_message(hit(victim, 5.0));
    app.update();

    assert!(app.world().get_entity(victim).is_err());
    assert_eq!(app.world().resource::<DeathLog>().0, vec![victim]);
}

#[test]
fn test_non_lethal_damage_keeps_actor() {
    let mut app = death_app();
    let victim = app.world_mut().spawn(ActorHealth::new(3.0)).id();

    app.world_mut().write_message(hit(victim, 1.0));
    app.update();

    let health = app.world().get::<ActorHealth>(victim).unwrap();
    assert_eq!(health.current(), 2.0);
    assert!(app.world().resource::<DeathLog>().0.is_empty());
}

#[test]
fn test_invulnerable_actor_takes_no_damage() {
    let mut app = death_app();
    let victim = app
        .world_mut()
        .spawn((Combatant, Team::Player, ActorHealth::new(3.0), Invulnerable))
        .id();

    app.world_mut().write_message(hit(victim, 5.0));
    app.update();

    assert_eq!(app.world().get::<ActorHealth>(victim).unwrap().current(), 3.0);
    assert!(app.world().resource::<DeathLog>().0.is_empty());

    // Damage lands again once the marker is gone
    app.world_mut().entity_mut(victim).remove::<Invulnerable>();
    app.world_mut().write_message(hit(victim, 1.0));
    app.update();
    assert_eq!(app.world().get::<ActorHealth>(victim).unwrap().current(), 2.0);
}

#[test]
fn test_boss_death_takes_escorts() {
    let mut app = death_app();
    let def = ArchetypeDef::stock(ArchetypeKind::Boss);
    let stats = AgentStats {
        move_speed: def.move_speed,
        engage_distance: def.engage_distance,
        contact_damage: def.contact_damage,
        contact_cooldown: def.contact_cooldown,
        probe: def.probe.clone(),
        team: Team::Enemy,
    };
    let boss = app
        .world_mut()
        .spawn((
            ActorHealth::new(def.max_health),
            AgentController::new(stats, build_behavior(&def, true)),
        ))
        .id();
    let escort = app
        .world_mut()
        .spawn((ActorHealth::new(1.0), Escort { leader: boss }))
        .id();
    let bystander = app.world_mut().spawn(ActorHealth::new(1.0)).id();

    app.world_mut().write_message(hit(boss, 100.0));
    app.update();

    assert!(app.world().get_entity(boss).is_err());
    assert!(app.world().get_entity(escort).is_err());
    assert!(app.world().get_entity(bystander).is_ok());
}

#[test]
fn test_expired_hitboxes_are_removed() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .add_systems(Update, cleanup_expired_hitboxes);

    let slash = app.world_mut().spawn(HitboxLifetime(0.25)).id();

    app.update();
    assert!(app.world().get_entity(slash).is_ok());

    for _ in 0..4 {
        app.update();
    }
    assert!(app.world().get_entity(slash).is_err());
}

use avian2d::prelude::*;
use bevy::prelude::*;

use brawl_ai::BrawlAiPlugin;
use brawl_ai::ai::{AgentSpawn, EncounterSpawner, spawn_agent};
use brawl_ai::combat::{ActorHealth, Combatant, SnareTrap, Team};
use brawl_ai::content::{ArchetypeKind, ArchetypeRegistry};
use brawl_ai::movement::{GameLayer, Ground, Target, Wall};

/// World units are meters; the camera shows roughly 32 x 18 of them
const PIXELS_PER_UNIT: f32 = 40.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Brawl AI Sandbox".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
        .add_plugins(BrawlAiPlugin)
        .add_systems(Startup, (spawn_arena, spawn_agents).chain())
        .run();
}

fn spawn_arena(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 2.0, 0.0),
    ));

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: Color::srgb(0.3, 0.3, 0.35),
            custom_size: Some(Vec2::new(40.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -4.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 1.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]),
    ));

    // Walls
    for x in [-15.0, 15.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: Color::srgb(0.25, 0.25, 0.3),
                custom_size: Some(Vec2::new(1.0, 14.0)),
                ..default()
            },
            Transform::from_xyz(x, 3.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(1.0, 14.0),
            CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]),
        ));
    }

    // Stationary target the agents hunt
    commands.spawn((
        Target,
        Combatant,
        Team::Player,
        ActorHealth::new(100.0),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(0.6, 1.2)),
            ..default()
        },
        Transform::from_xyz(0.0, -2.9, 0.0),
        RigidBody::Dynamic,
        Collider::rectangle(0.6, 1.2),
        CollisionLayers::new(
            GameLayer::Player,
            [
                GameLayer::Ground,
                GameLayer::Wall,
                GameLayer::Enemy,
                GameLayer::EnemyHitbox,
            ],
        ),
        LinearVelocity::default(),
        LinearDamping(5.0),
        LockedAxes::ROTATION_LOCKED,
    ));

    // Snare between the target and the right-hand agents
    commands.spawn((
        SnareTrap::new(2.0, false),
        Sprite {
            color: Color::srgba(0.3, 0.5, 1.0, 0.4),
            custom_size: Some(Vec2::new(1.0, 0.3)),
            ..default()
        },
        Transform::from_xyz(4.0, -3.35, 0.0),
        Collider::rectangle(1.0, 0.3),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Enemy]),
    ));
}

fn spawn_agents(
    mut commands: Commands,
    registry: Res<ArchetypeRegistry>,
    targets: Query<Entity, With<Target>>,
) {
    let Some(target) = targets.iter().next() else {
        warn!("No target in the arena; agents not spawned");
        return;
    };

    let placements = [
        (ArchetypeKind::Gunner, Vec2::new(-10.0, -2.5)),
        (ArchetypeKind::Thrower, Vec2::new(-7.0, -2.5)),
        (ArchetypeKind::Bomber, Vec2::new(-12.0, -2.5)),
        (ArchetypeKind::Rusher, Vec2::new(8.0, -2.5)),
        (ArchetypeKind::Jumper, Vec2::new(10.0, -2.5)),
        (ArchetypeKind::Replicator, Vec2::new(12.0, -2.5)),
        (ArchetypeKind::Boss, Vec2::new(6.0, -2.0)),
        (ArchetypeKind::Lobber, Vec2::new(-8.0, 0.0)),
    ];
    for (kind, position) in placements {
        let Some(def) = registry.get(kind) else {
            warn!("{:?} is not configured; skipped", kind);
            continue;
        };
        spawn_agent(
            &mut commands,
            def,
            AgentSpawn::at(position).with_target(target),
        );
    }

    commands.spawn((
        EncounterSpawner::new(vec![ArchetypeKind::Jumper, ArchetypeKind::Rusher], target),
        Transform::from_xyz(-13.0, -2.5, 0.0),
    ));

    info!("Sandbox ready: {} archetypes placed", placements.len());
}

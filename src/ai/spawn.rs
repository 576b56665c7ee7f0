//! AI domain: spawn requests and the helpers that turn them into entities.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::ai::agent::TargetHandle;
use crate::ai::archetypes::build_behavior;
use crate::ai::controller::{AgentController, AgentStats};
use crate::combat::{
    ActorHealth, Combatant, CombatTuning, Explosive, Hitbox, HitboxLifetime, Projectile, Team,
};
use crate::content::{ArchetypeDef, ArchetypeKind, ArchetypeRegistry};
use crate::movement::GameLayer;

/// What a spawn request creates
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnKind {
    Agent {
        archetype: ArchetypeKind,
        /// Overrides the archetype's move speed (clones run slower)
        move_speed: Option<f32>,
        /// Whether a replicator may clone itself
        replicates: bool,
    },
    Projectile {
        damage: f32,
    },
    Slash {
        damage: f32,
        knockback: f32,
        lifetime: f32,
        size: Vec2,
    },
    Explosive {
        destination: Vec2,
        speed: f32,
        radius: f32,
        damage: f32,
    },
}

/// Request to create an agent or an attack artifact. Decision logic never
/// spawns directly; requests are executed after the decision pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRequest {
    pub kind: SpawnKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub owner: Entity,
    pub team: Team,
    pub target: Option<TargetHandle>,
    /// Leader this spawn escorts, if any
    pub escort_of: Option<Entity>,
}

impl Message for SpawnRequest {}

impl SpawnRequest {
    pub fn new(kind: SpawnKind, position: Vec2, owner: Entity, team: Team) -> Self {
        Self {
            kind,
            position,
            velocity: Vec2::ZERO,
            owner,
            team,
            target: None,
            escort_of: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_target(mut self, target: Option<TargetHandle>) -> Self {
        self.target = target;
        self
    }

    pub fn escorting(mut self, leader: Entity) -> Self {
        self.escort_of = Some(leader);
        self
    }
}

/// Sink for spawn requests produced by decision logic
pub trait SpawnService {
    fn request(&mut self, request: SpawnRequest);
}

impl SpawnService for Vec<SpawnRequest> {
    fn request(&mut self, request: SpawnRequest) {
        self.push(request);
    }
}

impl SpawnService for MessageWriter<'_, SpawnRequest> {
    fn request(&mut self, request: SpawnRequest) {
        self.write(request);
    }
}

/// Marks an agent spawned as an escort of `leader`
#[derive(Component, Debug, Clone, Copy)]
pub struct Escort {
    pub leader: Entity,
}

/// Per-spawn parameters for `spawn_agent`
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Option<TargetHandle>,
    pub move_speed: Option<f32>,
    pub replicates: bool,
    pub escort_of: Option<Entity>,
}

impl AgentSpawn {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            replicates: true,
            ..default()
        }
    }

    pub fn with_target(mut self, target: Entity) -> Self {
        self.target = Some(TargetHandle(target));
        self
    }
}

fn kind_color(kind: ArchetypeKind) -> Color {
    match kind {
        ArchetypeKind::Gunner => Color::srgb(0.9, 0.8, 0.2),
        ArchetypeKind::Thrower => Color::srgb(0.8, 0.5, 0.2),
        ArchetypeKind::Bomber => Color::srgb(0.9, 0.3, 0.1),
        ArchetypeKind::Rusher => Color::srgb(0.8, 0.2, 0.2),
        ArchetypeKind::Jumper => Color::srgb(0.3, 0.8, 0.3),
        ArchetypeKind::Replicator => Color::srgb(0.5, 0.3, 0.8),
        ArchetypeKind::Boss => Color::srgb(0.6, 0.1, 0.4),
        ArchetypeKind::Lobber => Color::srgb(0.3, 0.5, 0.9),
    }
}

/// Spawn an agent with full physics and controller components
pub fn spawn_agent(commands: &mut Commands, def: &ArchetypeDef, spawn: AgentSpawn) -> Entity {
    let size = Vec2::new(def.body_size.0, def.body_size.1);
    let stats = AgentStats {
        move_speed: spawn.move_speed.unwrap_or(def.move_speed),
        engage_distance: def.engage_distance,
        contact_damage: def.contact_damage,
        contact_cooldown: def.contact_cooldown,
        probe: def.probe.clone(),
        team: Team::Enemy,
    };
    let controller =
        AgentController::new(stats, build_behavior(def, spawn.replicates)).with_target(spawn.target);

    // The lobber is placed by script every tick and ignores gravity
    let (rigid_body, gravity) = match def.kind {
        ArchetypeKind::Lobber => (RigidBody::Kinematic, GravityScale(0.0)),
        _ => (RigidBody::Dynamic, GravityScale(1.0)),
    };

    let mut entity = commands.spawn((
        // Identity & Combat
        (
            Combatant,
            Team::Enemy,
            ActorHealth::new(def.max_health),
            controller,
        ),
        // Rendering
        (
            Sprite {
                color: kind_color(def.kind),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(spawn.position.x, spawn.position.y, 0.0),
        ),
        // Physics
        (
            rigid_body,
            Collider::rectangle(size.x, size.y),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Enemy,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Player,
                    GameLayer::PlayerHitbox,
                ],
            ),
            LinearVelocity(spawn.velocity),
            LinearDamping(0.5),
            LockedAxes::ROTATION_LOCKED,
            gravity,
        ),
    ));
    if let Some(leader) = spawn.escort_of {
        entity.insert(Escort { leader });
    }
    entity.id()
}

/// Execute the spawn requests written during the decision pass
pub(crate) fn execute_spawn_requests(
    mut commands: Commands,
    mut requests: MessageReader<SpawnRequest>,
    registry: Res<ArchetypeRegistry>,
    tuning: Res<CombatTuning>,
) {
    for request in requests.read() {
        match request.kind {
            SpawnKind::Agent {
                archetype,
                move_speed,
                replicates,
            } => {
                let Some(def) = registry.get(archetype) else {
                    warn!(
                        "Spawn request for unconfigured archetype {:?} skipped",
                        archetype
                    );
                    continue;
                };
                let entity = spawn_agent(
                    &mut commands,
                    def,
                    AgentSpawn {
                        position: request.position,
                        velocity: request.velocity,
                        target: request.target,
                        move_speed,
                        replicates,
                        escort_of: request.escort_of,
                    },
                );
                debug!(
                    "Spawned {:?} {:?} for {:?} at {:?}",
                    archetype, entity, request.owner, request.position
                );
            }
            SpawnKind::Projectile { damage } => {
                commands.spawn((
                    Projectile {
                        damage,
                        velocity: request.velocity,
                        owner: request.owner,
                    },
                    request.team,
                    HitboxLifetime(tuning.projectile_lifetime),
                    Sprite {
                        color: Color::srgb(1.0, 0.9, 0.4),
                        custom_size: Some(Vec2::splat(0.2)),
                        ..default()
                    },
                    Transform::from_xyz(request.position.x, request.position.y, 1.0),
                    RigidBody::Kinematic,
                    LinearVelocity(request.velocity),
                    Collider::circle(0.1),
                    Sensor,
                    CollisionEventsEnabled,
                    CollisionLayers::new(hitbox_layer(request.team), [target_layer(request.team)]),
                ));
            }
            SpawnKind::Slash {
                damage,
                knockback,
                lifetime,
                size,
            } => {
                commands.spawn((
                    Hitbox::new(damage, knockback, request.owner),
                    request.team,
                    HitboxLifetime(lifetime),
                    Sprite {
                        color: Color::srgba(1.0, 0.3, 0.3, 0.5),
                        custom_size: Some(size),
                        ..default()
                    },
                    Transform::from_xyz(request.position.x, request.position.y, 1.0),
                    Collider::rectangle(size.x, size.y),
                    Sensor,
                    CollisionEventsEnabled,
                    CollisionLayers::new(hitbox_layer(request.team), [target_layer(request.team)]),
                ));
            }
            SpawnKind::Explosive {
                destination,
                speed,
                radius,
                damage,
            } => {
                commands.spawn((
                    Explosive {
                        destination,
                        speed,
                        radius,
                        damage,
                        owner: request.owner,
                    },
                    request.team,
                    Sprite {
                        color: Color::srgb(0.2, 0.2, 0.2),
                        custom_size: Some(Vec2::splat(0.3)),
                        ..default()
                    },
                    Transform::from_xyz(request.position.x, request.position.y, 1.0),
                ));
            }
        }
    }
}

fn hitbox_layer(team: Team) -> GameLayer {
    match team {
        Team::Enemy => GameLayer::EnemyHitbox,
        Team::Player => GameLayer::PlayerHitbox,
    }
}

fn target_layer(team: Team) -> GameLayer {
    match team {
        Team::Enemy => GameLayer::Player,
        Team::Player => GameLayer::Enemy,
    }
}

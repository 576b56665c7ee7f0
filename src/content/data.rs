//! Data definitions for the archetype RON content file.
//!
//! These structs mirror the structure in assets/data/archetypes.ron and are
//! used for deserialization. The ArchetypeRegistry provides lookup by kind.
//! `Default` impls carry the stock tuning used when no file is available.

use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Archetype kinds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum ArchetypeKind {
    /// Ranged standoff, rapid bullets with recoil
    Gunner,
    /// Ranged standoff, slow thrown projectile
    Thrower,
    /// Ranged standoff, explosive lobbed at a frozen point
    Bomber,
    /// Melee rusher with a single-hit slash
    Rusher,
    /// Pack jumper, contact damage only
    Jumper,
    /// Self-replicating brawler
    Replicator,
    /// Multi-band boss with escorts
    Boss,
    /// Scripted lobber pinned to the viewpoint
    Lobber,
}

impl ArchetypeKind {
    pub const ALL: [ArchetypeKind; 8] = [
        ArchetypeKind::Gunner,
        ArchetypeKind::Thrower,
        ArchetypeKind::Bomber,
        ArchetypeKind::Rusher,
        ArchetypeKind::Jumper,
        ArchetypeKind::Replicator,
        ArchetypeKind::Boss,
        ArchetypeKind::Lobber,
    ];
}

// ============================================================================
// Archetype definitions (archetypes.ron)
// ============================================================================

/// Ground probe geometry, relative to the actor's position and travel direction
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LedgeProbe {
    /// Horizontal distance ahead of the body the ray starts at
    pub forward: f32,
    /// Vertical offset of the ray start (negative is below the center)
    pub drop: f32,
    /// Ray length
    pub depth: f32,
}

impl Default for LedgeProbe {
    fn default() -> Self {
        Self {
            forward: 0.6,
            drop: -0.5,
            depth: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArchetypeDef {
    pub kind: ArchetypeKind,
    pub max_health: f32,
    pub move_speed: f32,
    pub engage_distance: f32,
    pub contact_damage: f32,
    /// Lockout after contact damage
    pub contact_cooldown: f32,
    #[serde(default)]
    pub probe: LedgeProbe,
    #[serde(default = "default_body_size")]
    pub body_size: (f32, f32),
    pub tuning: ArchetypeTuning,
}

fn default_body_size() -> (f32, f32) {
    (1.0, 1.0)
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum ArchetypeTuning {
    Ranged(RangedTuning),
    Rusher(RusherTuning),
    Jumper(JumperTuning),
    Replicator(ReplicatorTuning),
    Boss(BossTuning),
    Lobber(LobberTuning),
}

impl ArchetypeTuning {
    /// Whether this tuning block belongs on a definition of `kind`
    pub fn matches(&self, kind: ArchetypeKind) -> bool {
        matches!(
            (self, kind),
            (
                ArchetypeTuning::Ranged(_),
                ArchetypeKind::Gunner | ArchetypeKind::Thrower | ArchetypeKind::Bomber
            ) | (ArchetypeTuning::Rusher(_), ArchetypeKind::Rusher)
                | (ArchetypeTuning::Jumper(_), ArchetypeKind::Jumper)
                | (ArchetypeTuning::Replicator(_), ArchetypeKind::Replicator)
                | (ArchetypeTuning::Boss(_), ArchetypeKind::Boss)
                | (ArchetypeTuning::Lobber(_), ArchetypeKind::Lobber)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum RangedPayload {
    Bullet { damage: f32, speed: f32 },
    Explosive { damage: f32, radius: f32, speed: f32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RangedTuning {
    /// Seconds between shots
    pub fire_rate: f32,
    #[serde(default)]
    pub windup: f32,
    pub payload: RangedPayload,
    /// Impulse pushing the shooter back on each shot
    #[serde(default)]
    pub recoil: f32,
    /// Distance from the body center where shots appear
    #[serde(default)]
    pub muzzle_offset: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RusherTuning {
    pub windup: f32,
    pub recovery: f32,
    pub damage: f32,
    pub knockback: f32,
    /// Seconds the slash hitbox exists
    pub lifetime: f32,
    /// Distance ahead of the body where the slash appears
    pub reach: f32,
    pub size: (f32, f32),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JumperTuning {
    pub jump_force: f32,
    pub jump_interval: f32,
    /// Vertical component of the jump direction before normalizing
    pub lift: f32,
    /// Ray length below the feet that counts as grounded
    pub ground_check: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReplicatorTuning {
    /// Clone move speed as a fraction of the parent's
    pub clone_speed_factor: f32,
    /// Clones appear within this horizontal distance of the parent
    pub clone_spread: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BossTuning {
    pub flee_distance: f32,
    pub stop_distance: f32,
    pub chase_distance: f32,
    /// Speed scale in the outermost band
    pub far_speed_scale: f32,
    #[serde(default = "default_true")]
    pub ledge_gated: bool,
    pub escort_interval: f32,
    pub max_escorts: usize,
    pub escort_kinds: Vec<ArchetypeKind>,
    pub escort_offsets: Vec<(f32, f32)>,
    /// Seconds the travel heading stays reversed after hitting a wall
    pub wall_bounce_time: f32,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LobberTuning {
    /// Horizontal offset from the viewpoint
    pub viewpoint_offset: f32,
    /// Fixed height of the lobber
    pub height: f32,
    pub launch_interval: f32,
    pub throw_force: (f32, f32),
    pub minion_mass: f32,
    pub minions: Vec<ArchetypeKind>,
    /// Gravity used for the trajectory preview
    pub gravity: (f32, f32),
    pub preview_steps: usize,
    pub preview_dt: f32,
}

// ============================================================================
// Stock definitions
// ============================================================================

impl ArchetypeDef {
    /// Stock tuning for `kind`
    pub fn stock(kind: ArchetypeKind) -> Self {
        let base = |tuning| ArchetypeDef {
            kind,
            max_health: 10.0,
            move_speed: 1.0,
            engage_distance: 3.0,
            contact_damage: 1.0,
            contact_cooldown: 1.0,
            probe: LedgeProbe::default(),
            body_size: default_body_size(),
            tuning,
        };
        match kind {
            ArchetypeKind::Gunner => ArchetypeDef {
                max_health: 3.0,
                move_speed: 2.0,
                engage_distance: 1.5,
                ..base(ArchetypeTuning::Ranged(RangedTuning {
                    fire_rate: 0.25,
                    windup: 0.0,
                    payload: RangedPayload::Bullet {
                        damage: 1.0,
                        speed: 0.6,
                    },
                    recoil: 2.0,
                    muzzle_offset: 0.1,
                }))
            },
            ArchetypeKind::Thrower => base(ArchetypeTuning::Ranged(RangedTuning {
                fire_rate: 2.0,
                windup: 0.0,
                payload: RangedPayload::Bullet {
                    damage: 1.0,
                    speed: 3.0,
                },
                recoil: 0.0,
                muzzle_offset: 0.5,
            })),
            ArchetypeKind::Bomber => base(ArchetypeTuning::Ranged(RangedTuning {
                fire_rate: 3.0,
                windup: 0.0,
                payload: RangedPayload::Explosive {
                    damage: 15.0,
                    radius: 2.5,
                    speed: 8.0,
                },
                recoil: 0.0,
                muzzle_offset: 0.5,
            })),
            ArchetypeKind::Rusher => base(ArchetypeTuning::Rusher(RusherTuning {
                windup: 0.2,
                recovery: 1.8,
                damage: 2.0,
                knockback: 4.0,
                lifetime: 0.3,
                reach: 0.8,
                size: (1.0, 0.8),
            })),
            ArchetypeKind::Jumper => ArchetypeDef {
                contact_cooldown: 3.0,
                ..base(ArchetypeTuning::Jumper(JumperTuning {
                    jump_force: 2.0,
                    jump_interval: 1.5,
                    lift: 1.5,
                    ground_check: 0.2,
                }))
            },
            ArchetypeKind::Replicator => ArchetypeDef {
                contact_cooldown: 1.5,
                ..base(ArchetypeTuning::Replicator(ReplicatorTuning {
                    clone_speed_factor: 0.8,
                    clone_spread: 0.5,
                }))
            },
            ArchetypeKind::Boss => ArchetypeDef {
                move_speed: 0.5,
                body_size: (2.0, 2.0),
                probe: LedgeProbe {
                    forward: 1.1,
                    drop: -1.0,
                    depth: 1.0,
                },
                ..base(ArchetypeTuning::Boss(BossTuning {
                    flee_distance: 1.0,
                    stop_distance: 3.0,
                    chase_distance: 6.0,
                    far_speed_scale: 0.5,
                    ledge_gated: true,
                    escort_interval: 15.0,
                    max_escorts: 5,
                    escort_kinds: vec![
                        ArchetypeKind::Jumper,
                        ArchetypeKind::Gunner,
                        ArchetypeKind::Replicator,
                    ],
                    escort_offsets: vec![(-0.5, -0.5), (0.5, -0.5)],
                    wall_bounce_time: 0.5,
                }))
            },
            ArchetypeKind::Lobber => ArchetypeDef {
                move_speed: 0.0,
                ..base(ArchetypeTuning::Lobber(LobberTuning {
                    viewpoint_offset: -8.0,
                    height: 0.0,
                    launch_interval: 3.0,
                    throw_force: (10.0, 5.0),
                    minion_mass: 1.0,
                    minions: vec![ArchetypeKind::Jumper, ArchetypeKind::Replicator],
                    gravity: (0.0, -9.81),
                    preview_steps: 30,
                    preview_dt: 0.1,
                }))
            },
        }
    }
}

//! Validation for archetype definitions.

use std::collections::HashSet;

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub archetype: ArchetypeKind,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Archetype {:?} field '{}': {}",
            self.archetype, self.field, self.message
        )
    }
}

/// Helper macro for checking a value is finite and strictly positive
macro_rules! check_positive {
    ($errors:expr, $kind:expr, $field:expr, $value:expr) => {
        if !($value.is_finite() && $value > 0.0) {
            $errors.push(ValidationError {
                archetype: $kind,
                field: $field,
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking a value is finite and not negative
macro_rules! check_non_negative {
    ($errors:expr, $kind:expr, $field:expr, $value:expr) => {
        if !($value.is_finite() && $value >= 0.0) {
            $errors.push(ValidationError {
                archetype: $kind,
                field: $field,
                message: format!("must not be negative, got {}", $value),
            });
        }
    };
}

/// Validate one definition in isolation.
/// Returns a list of validation errors, empty if the definition is usable.
pub fn validate_archetype(def: &ArchetypeDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let kind = def.kind;

    check_positive!(errors, kind, "max_health", def.max_health);
    check_non_negative!(errors, kind, "move_speed", def.move_speed);
    check_non_negative!(errors, kind, "engage_distance", def.engage_distance);
    check_non_negative!(errors, kind, "contact_damage", def.contact_damage);
    check_positive!(errors, kind, "contact_cooldown", def.contact_cooldown);
    check_positive!(errors, kind, "probe.depth", def.probe.depth);
    check_positive!(errors, kind, "body_size.0", def.body_size.0);
    check_positive!(errors, kind, "body_size.1", def.body_size.1);

    if !def.tuning.matches(kind) {
        errors.push(ValidationError {
            archetype: kind,
            field: "tuning",
            message: "tuning block does not belong to this kind".to_string(),
        });
        return errors;
    }

    match &def.tuning {
        ArchetypeTuning::Ranged(ranged) => {
            check_positive!(errors, kind, "fire_rate", ranged.fire_rate);
            check_non_negative!(errors, kind, "windup", ranged.windup);
            check_non_negative!(errors, kind, "recoil", ranged.recoil);
            if ranged.windup > ranged.fire_rate {
                errors.push(ValidationError {
                    archetype: kind,
                    field: "windup",
                    message: format!(
                        "windup {} is longer than fire_rate {}",
                        ranged.windup, ranged.fire_rate
                    ),
                });
            }
            match ranged.payload {
                RangedPayload::Bullet { damage, speed } => {
                    check_positive!(errors, kind, "payload.damage", damage);
                    check_positive!(errors, kind, "payload.speed", speed);
                }
                RangedPayload::Explosive {
                    damage,
                    radius,
                    speed,
                } => {
                    check_positive!(errors, kind, "payload.damage", damage);
                    check_positive!(errors, kind, "payload.radius", radius);
                    check_positive!(errors, kind, "payload.speed", speed);
                }
            }
        }
        ArchetypeTuning::Rusher(rusher) => {
            check_non_negative!(errors, kind, "windup", rusher.windup);
            check_non_negative!(errors, kind, "recovery", rusher.recovery);
            check_positive!(errors, kind, "damage", rusher.damage);
            check_positive!(errors, kind, "lifetime", rusher.lifetime);
        }
        ArchetypeTuning::Jumper(jumper) => {
            check_non_negative!(errors, kind, "jump_force", jumper.jump_force);
            check_positive!(errors, kind, "jump_interval", jumper.jump_interval);
            check_positive!(errors, kind, "ground_check", jumper.ground_check);
        }
        ArchetypeTuning::Replicator(replicator) => {
            check_positive!(
                errors,
                kind,
                "clone_speed_factor",
                replicator.clone_speed_factor
            );
            check_non_negative!(errors, kind, "clone_spread", replicator.clone_spread);
        }
        ArchetypeTuning::Boss(boss) => {
            check_non_negative!(errors, kind, "flee_distance", boss.flee_distance);
            if !(boss.flee_distance < boss.stop_distance && boss.stop_distance < boss.chase_distance)
            {
                errors.push(ValidationError {
                    archetype: kind,
                    field: "bands",
                    message: format!(
                        "bands must satisfy flee < stop < chase, got {} / {} / {}",
                        boss.flee_distance, boss.stop_distance, boss.chase_distance
                    ),
                });
            }
            check_positive!(errors, kind, "far_speed_scale", boss.far_speed_scale);
            check_positive!(errors, kind, "escort_interval", boss.escort_interval);
            check_non_negative!(errors, kind, "wall_bounce_time", boss.wall_bounce_time);
            if boss.max_escorts > 0 && boss.escort_offsets.is_empty() {
                errors.push(ValidationError {
                    archetype: kind,
                    field: "escort_offsets",
                    message: "escorts are enabled but no spawn offsets are set".to_string(),
                });
            }
        }
        ArchetypeTuning::Lobber(lobber) => {
            check_positive!(errors, kind, "launch_interval", lobber.launch_interval);
            check_positive!(errors, kind, "minion_mass", lobber.minion_mass);
            check_positive!(errors, kind, "preview_dt", lobber.preview_dt);
        }
    }

    errors
}

/// Validate a whole file: every definition plus duplicate kinds.
/// Returns the usable definitions and the errors for the rejected ones.
/// The first definition of a duplicated kind wins.
pub fn validate_archetypes(defs: Vec<ArchetypeDef>) -> (Vec<ArchetypeDef>, Vec<ValidationError>) {
    let mut seen = HashSet::new();
    let mut valid = Vec::new();
    let mut errors = Vec::new();

    for def in defs {
        if !seen.insert(def.kind) {
            errors.push(ValidationError {
                archetype: def.kind,
                field: "kind",
                message: "duplicate definition ignored".to_string(),
            });
            continue;
        }
        let def_errors = validate_archetype(&def);
        if def_errors.is_empty() {
            valid.push(def);
        } else {
            errors.extend(def_errors);
        }
    }

    (valid, errors)
}

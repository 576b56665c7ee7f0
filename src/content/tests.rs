//! Content domain: tests for RON parsing, validation, and registry fallback.

use super::*;

const MINIMAL_FILE: &str = r#"
(
    schema_version: 1,
    items: [
        (
            kind: Rusher,
            max_health: 12.0,
            move_speed: 1.5,
            engage_distance: 2.0,
            contact_damage: 1.0,
            contact_cooldown: 1.0,
            tuning: Rusher((
                windup: 0.2,
                recovery: 1.8,
                damage: 2.0,
                knockback: 4.0,
                lifetime: 0.3,
                reach: 0.8,
                size: (1.0, 0.8),
            )),
        ),
        (
            kind: Gunner,
            max_health: 3.0,
            move_speed: 2.0,
            engage_distance: 1.5,
            contact_damage: 1.0,
            contact_cooldown: 1.0,
            body_size: (0.8, 1.2),
            tuning: Ranged((
                fire_rate: 0.25,
                payload: Bullet(damage: 1.0, speed: 0.6),
                recoil: 2.0,
            )),
        ),
    ],
)
"#;

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_fills_defaults() {
    let defs: Vec<ArchetypeDef> = parse_data_file("archetypes.ron", MINIMAL_FILE).unwrap();
    assert_eq!(defs.len(), 2);

    let rusher = &defs[0];
    assert_eq!(rusher.kind, ArchetypeKind::Rusher);
    assert_eq!(rusher.max_health, 12.0);
    assert_eq!(rusher.probe, LedgeProbe::default());
    assert_eq!(rusher.body_size, (1.0, 1.0));

    let gunner = &defs[1];
    assert_eq!(gunner.body_size, (0.8, 1.2));
    match &gunner.tuning {
        ArchetypeTuning::Ranged(ranged) => {
            assert_eq!(ranged.windup, 0.0);
            assert_eq!(ranged.muzzle_offset, 0.0);
            assert_eq!(ranged.recoil, 2.0);
        }
        other => panic!("expected ranged tuning, got {:?}", other),
    }
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_data_file::<ArchetypeDef>("broken.ron", "(schema_version: 1, items: [").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_archetypes(std::path::Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_file_matches_stock() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let defs = load_archetypes(&path).unwrap();
    let (valid, errors) = validate_archetypes(defs);
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(valid.len(), ArchetypeKind::ALL.len());
    for def in valid {
        assert_eq!(def, ArchetypeDef::stock(def.kind));
    }
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_stock_definitions_are_valid() {
    for kind in ArchetypeKind::ALL {
        let errors = validate_archetype(&ArchetypeDef::stock(kind));
        assert!(errors.is_empty(), "{:?}: {:?}", kind, errors);
    }
}

#[test]
fn test_boss_bands_must_be_ordered() {
    let mut def = ArchetypeDef::stock(ArchetypeKind::Boss);
    if let ArchetypeTuning::Boss(boss) = &mut def.tuning {
        boss.stop_distance = 7.0;
    }
    let errors = validate_archetype(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "bands");
}

#[test]
fn test_boss_escorts_need_offsets() {
    let mut def = ArchetypeDef::stock(ArchetypeKind::Boss);
    if let ArchetypeTuning::Boss(boss) = &mut def.tuning {
        boss.escort_offsets.clear();
    }
    let errors = validate_archetype(&def);
    assert!(errors.iter().any(|e| e.field == "escort_offsets"));
}

#[test]
fn test_mismatched_tuning_is_rejected() {
    let mut def = ArchetypeDef::stock(ArchetypeKind::Rusher);
    def.tuning = ArchetypeDef::stock(ArchetypeKind::Jumper).tuning;
    let errors = validate_archetype(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "tuning");
}

#[test]
fn test_non_positive_rates_are_rejected() {
    let mut def = ArchetypeDef::stock(ArchetypeKind::Gunner);
    if let ArchetypeTuning::Ranged(ranged) = &mut def.tuning {
        ranged.fire_rate = 0.0;
    }
    def.max_health = f32::NAN;
    let fields: Vec<_> = validate_archetype(&def).into_iter().map(|e| e.field).collect();
    assert!(fields.contains(&"fire_rate"));
    assert!(fields.contains(&"max_health"));
}

#[test]
fn test_windup_longer_than_rate_is_rejected() {
    let mut def = ArchetypeDef::stock(ArchetypeKind::Thrower);
    if let ArchetypeTuning::Ranged(ranged) = &mut def.tuning {
        ranged.windup = 3.0;
    }
    let errors = validate_archetype(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "windup");
}

#[test]
fn test_duplicates_keep_first() {
    let mut second = ArchetypeDef::stock(ArchetypeKind::Jumper);
    second.max_health = 99.0;
    let (valid, errors) = validate_archetypes(vec![ArchetypeDef::stock(ArchetypeKind::Jumper), second]);

    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].max_health, 10.0);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "kind");
}

// -----------------------------------------------------------------------------
// Registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_failed_load_falls_back_to_stock() {
    let (registry, errors) = registry_from_load(Err(ContentLoadError {
        file: "archetypes.ron".to_string(),
        message: "IO error: missing".to_string(),
    }));
    assert!(errors.is_empty());
    for kind in ArchetypeKind::ALL {
        assert_eq!(registry.get(kind), Some(&ArchetypeDef::stock(kind)));
    }
}

#[test]
fn test_loaded_file_is_authoritative() {
    let mut bad = ArchetypeDef::stock(ArchetypeKind::Boss);
    bad.max_health = 0.0;
    let (registry, errors) = registry_from_load(Ok(vec![
        ArchetypeDef::stock(ArchetypeKind::Rusher),
        bad,
    ]));

    assert_eq!(errors.len(), 1);
    assert!(registry.get(ArchetypeKind::Rusher).is_some());
    assert!(registry.get(ArchetypeKind::Boss).is_none());
    assert!(registry.get(ArchetypeKind::Gunner).is_none());
}

#[test]
fn test_registry_summary_is_sorted() {
    let mut registry = ArchetypeRegistry::from_defs([
        ArchetypeDef::stock(ArchetypeKind::Lobber),
        ArchetypeDef::stock(ArchetypeKind::Gunner),
    ]);
    assert_eq!(
        registry.summary(),
        "ArchetypeRegistry loaded 2 archetypes: Gunner, Lobber"
    );

    registry.remove(ArchetypeKind::Lobber);
    registry.insert(ArchetypeDef::stock(ArchetypeKind::Boss));
    assert_eq!(
        registry.summary(),
        "ArchetypeRegistry loaded 2 archetypes: Gunner, Boss"
    );
}

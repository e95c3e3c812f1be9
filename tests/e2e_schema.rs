//! End-to-end tests sweeping the built-in schema, re-validating
//! deserialized snapshots, and loading custom schemas from JSON.

use hqdm_rs::{
    Cardinality, Entity, EntityBuilder, EntityType, Error, Iri, RelationshipKey, Rule, Schema,
};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

// ============================================================================
// Helper: a builder with every mandatory key of `ty` set, except `skip`.
// ============================================================================

fn populated(ty: EntityType, skip: &[RelationshipKey]) -> EntityBuilder {
    Schema::hqdm()
        .mandatory_keys(ty)
        .filter(|key| !skip.contains(key))
        .fold(EntityBuilder::new(format!("urn:{ty}"), ty), |builder, key| {
            builder.reference(key, &Iri::from(format!("urn:{key}-target")))
        })
}

// ============================================================================
// 1. Every type builds once its mandatory keys are set
// ============================================================================

#[test]
fn test_every_type_builds_with_mandatory_keys() {
    for ty in EntityType::iter() {
        let entity = populated(ty, &[]).build().unwrap_or_else(|e| panic!("{ty}: {e}"));

        let mut present: Vec<_> = entity.predicates().collect();
        present.sort();
        let mut expected: Vec<_> = Schema::hqdm().mandatory_keys(ty).collect();
        expected.sort();
        assert_eq!(present, expected, "{ty}");
    }
}

// ============================================================================
// 2. Omitting any single mandatory key fails naming exactly that key
// ============================================================================

#[test]
fn test_every_single_omission_is_reported() {
    for ty in EntityType::iter() {
        for missing in Schema::hqdm().mandatory_keys(ty) {
            let err = populated(ty, &[missing]).build().unwrap_err();
            assert_eq!(err.key, missing, "{ty}");
            assert_eq!(err.entity_type, ty);
            assert_eq!(err.to_string(), format!("Property Not Set: {missing}"));
        }
    }
}

#[test]
fn test_optional_keys_do_not_mask_omission() {
    let ty = EntityType::Activity;
    let optional: Vec<_> = Schema::hqdm()
        .rules(ty)
        .unwrap()
        .iter()
        .filter(|rule| rule.cardinality == Cardinality::OptionalNonEmpty)
        .map(|rule| rule.key)
        .collect();

    let builder = optional.iter().fold(populated(ty, &[RelationshipKey::PartOfPossibleWorld]), |b, key| {
        b.reference(*key, &Iri::from("urn:extra"))
    });
    let err = builder.build().unwrap_err();
    assert_eq!(err.key, RelationshipKey::PartOfPossibleWorld);
}

// ============================================================================
// 3. Two missing mandatory keys: the earlier in the table is reported
// ============================================================================

#[test]
fn test_two_missing_reports_earlier() {
    for ty in EntityType::iter() {
        let mandatory: Vec<_> = Schema::hqdm().mandatory_keys(ty).collect();
        for (i, first) in mandatory.iter().enumerate() {
            for second in &mandatory[i + 1..] {
                let err = populated(ty, &[*second, *first]).build().unwrap_err();
                assert_eq!(err.key, *first, "{ty}: {first} vs {second}");
            }
        }
    }
}

// ============================================================================
// 4. Deserialized snapshots are re-validated, including empty entries
// ============================================================================

#[test]
fn test_snapshot_with_empty_optional_entry_is_rejected() {
    let json = r#"{
        "id": "urn:a1",
        "entity_type": "activity",
        "properties": {
            "causes": [{"type": "Iri", "value": "urn:e1"}],
            "member_of_kind": [{"type": "Iri", "value": "urn:k1"}],
            "part_of_possible_world": [{"type": "Iri", "value": "urn:w1"}],
            "ending": []
        }
    }"#;
    let entity: Entity = serde_json::from_str(json).unwrap();
    assert!(entity.has_value(RelationshipKey::Ending));
    assert!(entity.value(RelationshipKey::Ending).is_empty());

    match Schema::hqdm().validate(&entity) {
        Err(Error::Validation(e)) => assert_eq!(e.to_string(), "Property Not Set: ending"),
        other => panic!("expected validation failure, got {other:?}"),
    }

    let typed: Result<hqdm_rs::Activity, _> = serde_json::from_str(json);
    assert!(typed.is_err());
}

#[test]
fn test_snapshot_with_empty_mandatory_entry_is_rejected() {
    let json = r#"{
        "id": "urn:a1",
        "entity_type": "activity",
        "properties": {
            "causes": [],
            "member_of_kind": [{"type": "Iri", "value": "urn:k1"}],
            "part_of_possible_world": [{"type": "Iri", "value": "urn:w1"}]
        }
    }"#;
    let entity: Entity = serde_json::from_str(json).unwrap();
    assert!(entity.has_value(RelationshipKey::Causes));

    match Schema::hqdm().validate(&entity) {
        Err(Error::Validation(e)) => assert_eq!(e.to_string(), "Property Not Set: causes"),
        other => panic!("expected validation failure, got {other:?}"),
    }

    let typed: Result<hqdm_rs::Activity, _> = serde_json::from_str(json);
    assert!(typed.is_err());
    assert!(hqdm_rs::Activity::try_from(entity).is_err());
}

#[test]
fn test_snapshot_of_built_entity_validates() {
    let built = populated(EntityType::Ownership, &[]).build().unwrap();
    let json = serde_json::to_string(&built).unwrap();

    let back: Entity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, built);
    assert!(Schema::hqdm().validate(&back).is_ok());

    let typed: hqdm_rs::Ownership = serde_json::from_str(&json).unwrap();
    assert_eq!(typed.id(), built.id());
}

#[test]
fn test_snapshot_duplicates_collapse() {
    let json = r#"{
        "id": "urn:e1",
        "entity_type": "event",
        "properties": {
            "part_of_possible_world": [
                {"type": "Iri", "value": "urn:w1"},
                {"type": "Iri", "value": "urn:w1"}
            ]
        }
    }"#;
    let entity: Entity = serde_json::from_str(json).unwrap();
    assert_eq!(entity.value(RelationshipKey::PartOfPossibleWorld).len(), 1);
}

// ============================================================================
// 5. Custom schemas from JSON
// ============================================================================

#[test]
fn test_custom_schema_from_json() {
    let schema = Schema::from_json(
        r#"{
            "types": {
                "person": [
                    {"key": "data_EntityName", "cardinality": "mandatory"},
                    {"key": "member_of_kind", "cardinality": "unconstrained"},
                    {"key": "part_of_possible_world", "cardinality": "mandatory"}
                ]
            }
        }"#,
    )
    .unwrap();

    assert_eq!(schema.len(), 1);
    assert_eq!(
        schema.rules(EntityType::Person).unwrap(),
        &[
            Rule::mandatory(RelationshipKey::DataEntityName),
            Rule::unconstrained(RelationshipKey::MemberOfKind),
            Rule::mandatory(RelationshipKey::PartOfPossibleWorld),
        ]
    );

    let err = EntityBuilder::new("urn:alice", EntityType::Person)
        .reference(RelationshipKey::PartOfPossibleWorld, &Iri::from("urn:w1"))
        .build_with(&schema)
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ref e) if e.key == RelationshipKey::DataEntityName));

    let alice = EntityBuilder::new("urn:alice", EntityType::Person)
        .literal(RelationshipKey::DataEntityName, "Alice")
        .reference(RelationshipKey::PartOfPossibleWorld, &Iri::from("urn:w1"))
        .build_with(&schema)
        .unwrap();
    assert!(!alice.has_value(RelationshipKey::MemberOfKind));

    let activity = EntityBuilder::new("urn:a1", EntityType::Activity).build_with(&schema);
    assert!(matches!(activity, Err(Error::UnknownEntityType(EntityType::Activity))));
}

#[test]
fn test_custom_schema_rejects_duplicate_keys() {
    let err = Schema::from_json(
        r#"{"types": {"event": [
            {"key": "part_of_possible_world", "cardinality": "mandatory"},
            {"key": "part_of_possible_world", "cardinality": "unconstrained"}
        ]}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().contains("duplicate rule for part_of_possible_world on event"));
}

#[test]
fn test_custom_schema_rejects_unknown_names() {
    assert!(Schema::from_json(r#"{"types": {"spaceship": []}}"#).is_err());
    assert!(Schema::from_json(
        r#"{"types": {"event": [{"key": "warp_drive", "cardinality": "mandatory"}]}}"#
    )
    .is_err());
}

#[test]
fn test_schema_from_reader() {
    let json = Schema::hqdm().to_json().unwrap();
    let schema = Schema::from_reader(json.as_bytes()).unwrap();
    assert_eq!(&schema, Schema::hqdm());
}

//! Property-based tests for the property store and validation order.
//!
//! Uses proptest over arbitrary relationship keys, values and entity types.

use hqdm_rs::{Entity, EntityBuilder, EntityType, Iri, RelationshipKey, Schema, Value};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn any_key() -> impl Strategy<Value = RelationshipKey> {
    prop::sample::select(RelationshipKey::iter().collect::<Vec<_>>())
}

fn any_type() -> impl Strategy<Value = EntityType> {
    prop::sample::select(EntityType::iter().collect::<Vec<_>>())
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "urn:[a-z0-9]{1,8}".prop_map(|s| Value::Iri(Iri::from(s))),
        "[A-Za-z ]{0,12}".prop_map(Value::Literal),
    ]
}

// =============================================================================
// Store Properties
// =============================================================================

proptest! {
    /// add_value(k, v) then has_value(k) and v ∈ value(k)
    #[test]
    fn prop_add_then_has(ty in any_type(), key in any_key(), value in any_value()) {
        let mut entity = Entity::new("urn:x", ty);
        entity.add_value(key, value.clone());
        prop_assert!(entity.has_value(key));
        prop_assert!(entity.value(key).contains(&value));
    }

    /// adding the same value twice equals adding it once
    #[test]
    fn prop_add_is_idempotent(key in any_key(), value in any_value()) {
        let once = Entity::new("urn:x", EntityType::Activity).with_value(key, value.clone());
        let twice = once.clone().with_value(key, value);
        prop_assert_eq!(once, twice);
    }

    /// untouched keys are absent and empty
    #[test]
    fn prop_untouched_keys_absent(
        touched in any_key(),
        other in any_key(),
        value in any_value(),
    ) {
        prop_assume!(touched != other);
        let entity = Entity::new("urn:x", EntityType::Event).with_value(touched, value);
        prop_assert!(!entity.has_value(other));
        prop_assert!(entity.value(other).is_empty());
    }

    /// insertion order does not matter
    #[test]
    fn prop_insertion_order_irrelevant(
        key in any_key(),
        values in prop::collection::vec(any_value(), 0..6),
    ) {
        let forward = values.iter().cloned().fold(Entity::new("urn:x", EntityType::Class), |e, v| e.with_value(key, v));
        let backward = values.iter().rev().cloned().fold(Entity::new("urn:x", EntityType::Class), |e, v| e.with_value(key, v));
        prop_assert_eq!(forward, backward);
    }
}

// =============================================================================
// Validation Properties
// =============================================================================

proptest! {
    /// any subset of missing mandatory keys reports the earliest one
    #[test]
    fn prop_first_missing_mandatory_reported(
        ty in any_type(),
        mask in prop::collection::vec(any::<bool>(), 8),
    ) {
        let mandatory: Vec<_> = Schema::hqdm().mandatory_keys(ty).collect();
        let mut builder = EntityBuilder::new("urn:x", ty);
        let mut first_missing = None;
        for (i, key) in mandatory.iter().enumerate() {
            if mask[i % mask.len()] {
                builder = builder.reference(*key, &Iri::from("urn:target"));
            } else if first_missing.is_none() {
                first_missing = Some(*key);
            }
        }

        match (builder.build(), first_missing) {
            (Ok(_), None) => {}
            (Err(e), Some(key)) => prop_assert_eq!(e.key, key),
            (result, expected) => prop_assert!(false, "got {:?}, expected missing {:?}", result, expected),
        }
    }

    /// relationships outside the type's mandatory set never change the outcome
    #[test]
    fn prop_extra_keys_do_not_affect_outcome(
        ty in any_type(),
        extras in prop::collection::vec((any_key(), any_value()), 0..6),
    ) {
        let mandatory: Vec<_> = Schema::hqdm().mandatory_keys(ty).collect();
        let builder = mandatory.iter().fold(EntityBuilder::new("urn:x", ty), |b, key| {
            b.reference(*key, &Iri::from("urn:target"))
        });
        let builder = extras.into_iter().fold(builder, |b, (key, value)| b.with_value(key, value));
        prop_assert!(builder.build().is_ok());
    }
}

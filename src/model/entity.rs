//! Entity — an identified node in the HQDM object graph.

use serde::{Deserialize, Serialize};

use super::{Identified, Iri, PropertyMap, Value};
use crate::vocab::{EntityType, RelationshipKey};

/// A node: identity, ontology type tag, and its relationship values.
///
/// `id` and `entity_type` are fixed at construction; there are no setters.
/// Relationship values only ever grow through [`Entity::add_value`].
/// Concurrent mutation of one entity needs external synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    id: Iri,
    entity_type: EntityType,
    #[serde(default)]
    properties: PropertyMap,
}

impl Entity {
    /// A bare node: identifier and type tag, no relationships.
    pub fn new(id: impl Into<Iri>, entity_type: EntityType) -> Self {
        Self {
            id: id.into(),
            entity_type,
            properties: PropertyMap::new(),
        }
    }

    pub fn id(&self) -> &Iri {
        &self.id
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn add_value(&mut self, key: RelationshipKey, value: impl Into<Value>) {
        self.properties.add_value(key, value.into());
    }

    pub fn with_value(mut self, key: RelationshipKey, value: impl Into<Value>) -> Self {
        self.add_value(key, value);
        self
    }

    pub fn has_value(&self, key: RelationshipKey) -> bool {
        self.properties.has_value(key)
    }

    pub fn value(&self, key: RelationshipKey) -> &[Value] {
        self.properties.value(key)
    }

    pub fn has_this_value(&self, key: RelationshipKey, value: &Value) -> bool {
        self.properties.has_this_value(key, value)
    }

    /// The IRI-typed values under `key`, skipping literals.
    pub fn iri_values(&self, key: RelationshipKey) -> impl Iterator<Item = &Iri> + '_ {
        self.value(key).iter().filter_map(Value::as_iri)
    }

    pub fn predicates(&self) -> impl Iterator<Item = RelationshipKey> + '_ {
        self.properties.predicates()
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

impl Identified for Entity {
    fn iri(&self) -> &Iri {
        &self.id
    }
}

impl From<&Entity> for Value {
    fn from(entity: &Entity) -> Self {
        Value::Iri(entity.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_entity() {
        let e = Entity::new("urn:a1", EntityType::Activity);
        assert_eq!(e.id(), &Iri::from("urn:a1"));
        assert_eq!(e.entity_type(), EntityType::Activity);
        assert_eq!(e.predicates().count(), 0);
    }

    #[test]
    fn test_add_then_read_back() {
        let world = Entity::new("urn:w1", EntityType::PossibleWorld);
        let e = Entity::new("urn:a1", EntityType::Activity)
            .with_value(RelationshipKey::PartOfPossibleWorld, &world)
            .with_value(RelationshipKey::DataEntityName, Value::Literal("Dig".into()));

        assert!(e.has_value(RelationshipKey::PartOfPossibleWorld));
        assert_eq!(
            e.iri_values(RelationshipKey::PartOfPossibleWorld).collect::<Vec<_>>(),
            vec![world.id()]
        );
        assert_eq!(e.iri_values(RelationshipKey::DataEntityName).count(), 0);
        assert!(e.has_this_value(RelationshipKey::DataEntityName, &Value::Literal("Dig".into())));
    }

    #[test]
    fn test_json_roundtrip_preserves_identity() {
        let e = Entity::new("urn:a1", EntityType::Activity)
            .with_value(RelationshipKey::Causes, Iri::from("urn:e1"));
        let json = serde_json::to_string(&e).unwrap();
        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
        assert!(json.contains("\"entity_type\":\"activity\""));
    }
}

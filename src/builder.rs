//! Generic entity builder.
//!
//! The typed builders in [`crate::entities`] are fixed-setter sugar over the
//! same mechanism: accumulate values on a bare [`Entity`], then run the
//! type's rule table once. `EntityBuilder` takes the type tag and keys as
//! data instead, which is what loaders and tests that sweep every type use.

use crate::model::{Entity, Identified, Iri, Value};
use crate::schema::{validate, Schema, ValidationError};
use crate::vocab::{EntityType, RelationshipKey};
use crate::Result;

#[derive(Debug, Clone)]
#[must_use]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    pub fn new(iri: impl Into<Iri>, entity_type: EntityType) -> Self {
        Self { entity: Entity::new(iri, entity_type) }
    }

    pub fn with_value(mut self, key: RelationshipKey, value: impl Into<Value>) -> Self {
        self.entity.add_value(key, value);
        self
    }

    pub fn reference(self, key: RelationshipKey, target: &impl Identified) -> Self {
        self.with_value(key, Value::reference(target))
    }

    pub fn literal(self, key: RelationshipKey, literal: impl Into<String>) -> Self {
        self.with_value(key, Value::Literal(literal.into()))
    }

    /// The entity as accumulated so far.
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Validate against the built-in HQDM tables.
    ///
    /// Every `EntityType` has a table in [`Schema::hqdm`], so the empty-table
    /// fallback is never taken for the built-in dataset. Use
    /// [`EntityBuilder::build_with`] to get `Error::UnknownEntityType` for
    /// schemas that may lack a type.
    pub fn build(self) -> std::result::Result<Entity, ValidationError> {
        let rules = Schema::hqdm().rules(self.entity.entity_type()).unwrap_or(&[]);
        validate(&self.entity, rules)?;
        Ok(self.entity)
    }

    /// Validate against a caller-supplied schema.
    pub fn build_with(self, schema: &Schema) -> Result<Entity> {
        schema.validate(&self.entity)?;
        Ok(self.entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Rule;
    use crate::Error;

    #[test]
    fn test_generic_activity_matches_typed_rules() {
        let err = EntityBuilder::new("urn:a1", EntityType::Activity)
            .reference(RelationshipKey::MemberOfKind, &Iri::from("urn:k1"))
            .reference(RelationshipKey::PartOfPossibleWorld, &Iri::from("urn:w1"))
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Property Not Set: causes");
    }

    #[test]
    fn test_build_with_custom_schema() {
        let schema = Schema::new()
            .with_table(EntityType::Class, vec![Rule::mandatory(RelationshipKey::DataEntityName)])
            .unwrap();

        let unnamed = EntityBuilder::new("urn:c1", EntityType::Class).build_with(&schema);
        assert!(matches!(unnamed, Err(Error::Validation(ref e)) if e.key == RelationshipKey::DataEntityName));

        let named = EntityBuilder::new("urn:c1", EntityType::Class)
            .literal(RelationshipKey::DataEntityName, "vehicle")
            .build_with(&schema)
            .unwrap();
        assert_eq!(named.value(RelationshipKey::DataEntityName).len(), 1);
    }

    #[test]
    fn test_peek_before_build() {
        let builder = EntityBuilder::new("urn:e1", EntityType::Event)
            .reference(RelationshipKey::PartOfPossibleWorld, &Iri::from("urn:w1"));
        assert!(builder.entity().has_value(RelationshipKey::PartOfPossibleWorld));
        assert!(builder.build().is_ok());
    }
}

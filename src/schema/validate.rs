//! The one validation routine every builder runs.

use crate::model::{Entity, Iri};
use crate::vocab::{EntityType, RelationshipKey};
use super::Rule;

/// The first rule an entity broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Property Not Set: {key}")]
pub struct ValidationError {
    pub entity: Iri,
    pub entity_type: EntityType,
    pub key: RelationshipKey,
}

/// Check `entity` against `rules` in declared order.
///
/// Stops at the first violated rule and reports only that one.
pub fn validate(entity: &Entity, rules: &[Rule]) -> Result<(), ValidationError> {
    match rules.iter().find(|rule| !rule.is_satisfied_by(entity)) {
        Some(rule) => {
            tracing::debug!(
                entity = %entity.id(),
                entity_type = %entity.entity_type(),
                key = %rule.key,
                cardinality = %rule.cardinality,
                "entity failed validation"
            );
            Err(ValidationError {
                entity: entity.id().clone(),
                entity_type: entity.entity_type(),
                key: rule.key,
            })
        }
        None => {
            tracing::trace!(entity = %entity.id(), entity_type = %entity.entity_type(), "entity validated");
            Ok(())
        }
    }
}

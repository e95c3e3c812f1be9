//! Cardinality rules: one per relationship key in a type's table.

use serde::{Deserialize, Serialize};

use crate::model::Entity;
use crate::vocab::RelationshipKey;

/// How many values a relationship must carry for an entity to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// The key must be present and hold at least one value.
    Mandatory,
    /// The key may be absent; if present it must hold at least one value.
    ///
    /// `add_value` never leaves an empty entry behind, so this only fails for
    /// entities that arrived some other way, e.g. deserialized snapshots.
    OptionalNonEmpty,
    /// Applicable to the type, never checked.
    Unconstrained,
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cardinality::Mandatory => write!(f, "mandatory"),
            Cardinality::OptionalNonEmpty => write!(f, "optional_non_empty"),
            Cardinality::Unconstrained => write!(f, "unconstrained"),
        }
    }
}

/// A single `(relationship key, cardinality)` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub key: RelationshipKey,
    pub cardinality: Cardinality,
}

impl Rule {
    pub const fn new(key: RelationshipKey, cardinality: Cardinality) -> Self {
        Self { key, cardinality }
    }

    pub const fn mandatory(key: RelationshipKey) -> Self {
        Self::new(key, Cardinality::Mandatory)
    }

    pub const fn optional(key: RelationshipKey) -> Self {
        Self::new(key, Cardinality::OptionalNonEmpty)
    }

    pub const fn unconstrained(key: RelationshipKey) -> Self {
        Self::new(key, Cardinality::Unconstrained)
    }

    pub fn is_mandatory(&self) -> bool {
        self.cardinality == Cardinality::Mandatory
    }

    pub fn is_satisfied_by(&self, entity: &Entity) -> bool {
        match self.cardinality {
            Cardinality::Mandatory => {
                entity.has_value(self.key) && !entity.value(self.key).is_empty()
            }
            Cardinality::OptionalNonEmpty => {
                !entity.has_value(self.key) || !entity.value(self.key).is_empty()
            }
            Cardinality::Unconstrained => true,
        }
    }
}

//! # Entity Schema
//!
//! The data-driven table `entity type -> ordered rules` and the validation
//! routine that runs it. Every builder, typed or generic, goes through
//! [`validate`]; only the table differs per type.
//!
//! ## Sources
//!
//! | Constructor | Description |
//! |-------------|-------------|
//! | [`Schema::hqdm`] | Built-in HQDM dataset, initialised once per process |
//! | [`Schema::from_json`] | Caller-supplied tables, e.g. a trimmed or extended dataset |
//!
//! JSON layout:
//!
//! ```text
//! { "types": { "activity": [ {"key": "causes", "cardinality": "mandatory"}, ... ] } }
//! ```

pub mod rule;
pub mod validate;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::model::Entity;
use crate::vocab::{EntityType, RelationshipKey};
use crate::{Error, Result};

pub use rule::{Cardinality, Rule};
pub use validate::{validate, ValidationError};

// ============================================================================
// Schema
// ============================================================================

/// Rule tables keyed by entity type. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SchemaDef", into = "SchemaDef")]
pub struct Schema {
    tables: HashMap<EntityType, Vec<Rule>>,
}

/// Serialized form: ordered by `EntityType` declaration order so exports are stable.
#[derive(Serialize, Deserialize)]
struct SchemaDef {
    types: BTreeMap<EntityType, Vec<Rule>>,
}

impl Schema {
    /// An empty schema: no type has a table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in HQDM dataset.
    pub fn hqdm() -> &'static Schema {
        static HQDM: OnceLock<Schema> = OnceLock::new();
        HQDM.get_or_init(|| {
            let tables = crate::entities::HQDM_TABLES
                .iter()
                .map(|(ty, rules)| (*ty, rules.to_vec()))
                .collect::<HashMap<_, _>>();
            tracing::debug!(types = tables.len(), "initialised built-in HQDM schema");
            Schema { tables }
        })
    }

    /// Add or replace the table for `entity_type`.
    ///
    /// Fails if the table lists a relationship key more than once.
    pub fn with_table(mut self, entity_type: EntityType, rules: Vec<Rule>) -> Result<Self> {
        check_table(entity_type, &rules)?;
        self.tables.insert(entity_type, rules);
        Ok(self)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let schema: Schema = serde_json::from_str(json)?;
        tracing::info!(types = schema.len(), "loaded entity schema");
        Ok(schema)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        let schema: Schema = serde_json::from_reader(reader)?;
        tracing::info!(types = schema.len(), "loaded entity schema");
        Ok(schema)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The rule table for `entity_type`, in declared order.
    pub fn rules(&self, entity_type: EntityType) -> Option<&[Rule]> {
        self.tables.get(&entity_type).map(Vec::as_slice)
    }

    /// Cardinality of `key` for `entity_type`, or `None` if the type's table
    /// does not mention it.
    pub fn cardinality(&self, entity_type: EntityType, key: RelationshipKey) -> Option<Cardinality> {
        self.rules(entity_type)?
            .iter()
            .find(|rule| rule.key == key)
            .map(|rule| rule.cardinality)
    }

    pub fn mandatory_keys(&self, entity_type: EntityType) -> impl Iterator<Item = RelationshipKey> + '_ {
        self.rules(entity_type)
            .unwrap_or(&[])
            .iter()
            .filter(|rule| rule.is_mandatory())
            .map(|rule| rule.key)
    }

    pub fn entity_types(&self) -> impl Iterator<Item = EntityType> + '_ {
        self.tables.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Validate `entity` against the table for its own type tag.
    pub fn validate(&self, entity: &Entity) -> Result<()> {
        let rules = self
            .rules(entity.entity_type())
            .ok_or(Error::UnknownEntityType(entity.entity_type()))?;
        validate(entity, rules)?;
        Ok(())
    }
}

fn check_table(entity_type: EntityType, rules: &[Rule]) -> Result<()> {
    let mut seen = HashSet::with_capacity(rules.len());
    for rule in rules {
        if !seen.insert(rule.key) {
            return Err(Error::Schema(format!(
                "duplicate rule for {} on {}",
                rule.key, entity_type
            )));
        }
    }
    Ok(())
}

impl TryFrom<SchemaDef> for Schema {
    type Error = Error;

    fn try_from(def: SchemaDef) -> Result<Self> {
        def.types
            .into_iter()
            .try_fold(Schema::new(), |schema, (ty, rules)| schema.with_table(ty, rules))
    }
}

impl From<Schema> for SchemaDef {
    fn from(schema: Schema) -> Self {
        SchemaDef { types: schema.tables.into_iter().collect() }
    }
}

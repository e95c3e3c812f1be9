//! PropertyMap — the relationship store on entity nodes.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Value;
use crate::vocab::RelationshipKey;

/// The set of values held under one relationship key.
///
/// Set semantics: inserting a value that is already present is a no-op and
/// equality ignores insertion order. Almost every HQDM relationship carries
/// one or two values, so the set is a small inline vector scanned linearly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Value>")]
pub struct ValueSet(SmallVec<[Value; 2]>);

impl ValueSet {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Insert `value`. Returns false if it was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.0.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl PartialEq for ValueSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl Eq for ValueSet {}

impl FromIterator<Value> for ValueSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = ValueSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl From<Vec<Value>> for ValueSet {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Relationship key → set of related values.
///
/// Type-erased: it knows nothing of cardinality or which keys make sense for
/// which entity type. That lives in [`crate::schema`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    inner: HashMap<RelationshipKey, ValueSet>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` under `key`. Never fails; idempotent per value.
    pub fn add_value(&mut self, key: RelationshipKey, value: Value) {
        self.inner.entry(key).or_default().insert(value);
    }

    /// True iff `key` has an entry, whether or not that entry holds values.
    pub fn has_value(&self, key: RelationshipKey) -> bool {
        self.inner.contains_key(&key)
    }

    /// Values under `key`; empty if `key` was never touched.
    pub fn value(&self, key: RelationshipKey) -> &[Value] {
        self.inner.get(&key).map(ValueSet::as_slice).unwrap_or(&[])
    }

    pub fn has_this_value(&self, key: RelationshipKey, value: &Value) -> bool {
        self.inner.get(&key).is_some_and(|set| set.contains(value))
    }

    /// Keys with an entry, in no particular order.
    pub fn predicates(&self) -> impl Iterator<Item = RelationshipKey> + '_ {
        self.inner.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RelationshipKey, &ValueSet)> + '_ {
        self.inner.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

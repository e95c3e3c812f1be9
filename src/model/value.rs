//! Relationship values: IRI references or literals.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Identified, Iri};

/// A single value stored under a relationship key.
///
/// Most HQDM relationships point at another node. A few (`data_EntityName`,
/// `value_`) carry a literal instead.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Iri(Iri),
    Literal(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Iri(_) => "IRI",
            Value::Literal(_) => "LITERAL",
        }
    }

    /// Attempt to extract as an IRI reference
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Value::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Attempt to extract as a literal
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// Reference to whatever `target` identifies.
    pub fn reference(target: &impl Identified) -> Self {
        Value::Iri(target.iri().clone())
    }
}

impl From<Iri> for Value { fn from(v: Iri) -> Self { Value::Iri(v) } }
impl From<&Iri> for Value { fn from(v: &Iri) -> Self { Value::Iri(v.clone()) } }

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Iri(iri) => write!(f, "<{iri}>"),
            Value::Literal(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
        }
    }
}

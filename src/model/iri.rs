//! IRI — the opaque node identifier.

use serde::{Deserialize, Serialize};

/// Opaque node identifier.
///
/// This layer never parses, mints or resolves IRIs; it only compares and
/// hashes them. Whatever string the identifier-management collaborator hands
/// over is taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for Iri {
    fn from(s: String) -> Self { Self(s) }
}

impl From<&Iri> for Iri {
    fn from(iri: &Iri) -> Self { iri.clone() }
}

/// Anything that can be the target of a relationship.
///
/// Builders resolve every related object to its IRI through this trait and
/// store nothing else; the related object's own properties are never read.
pub trait Identified {
    fn iri(&self) -> &Iri;
}

impl Identified for Iri {
    fn iri(&self) -> &Iri { self }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn iri(&self) -> &Iri { (**self).iri() }
}

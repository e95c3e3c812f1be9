//! # hqdm-rs — Typed HQDM Object Model
//!
//! Rust bindings for the HQDM (High Quality Data Models) ontology: every
//! entity type is a typed wrapper over one generic property node, built
//! through a fluent builder that checks the type's cardinality rules.
//!
//! ## Design Principles
//!
//! 1. **One node type**: `Entity` is an IRI, a type tag, and a map from
//!    relationship key to a set of values. It knows no ontology rules.
//! 2. **Rules are data**: each type's `(relationship, cardinality)` table
//!    lives in `Schema`; one `validate` routine runs every table.
//! 3. **Typed sugar on top**: `ActivityBuilder`, `OwnershipBuilder`, ... are
//!    generated from the same tables by `hqdm_entity!`.
//! 4. **Explicit errors**: `build()` returns `Result<T, ValidationError>`
//!    naming the first broken rule.
//!
//! ## Quick Start
//!
//! ```rust
//! use hqdm_rs::{Activity, Iri, RelationshipKey};
//!
//! # fn main() -> Result<(), hqdm_rs::ValidationError> {
//! let event = Iri::from("urn:event1");
//! let kind = Iri::from("urn:kind1");
//! let world = Iri::from("urn:world1");
//!
//! let activity = Activity::builder("urn:A1")
//!     .causes_m(&event)
//!     .member_of_kind_m(&kind)
//!     .part_of_possible_world_m(&world)
//!     .build()?;
//!
//! assert!(activity.has_value(RelationshipKey::Causes));
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! | Module | Description |
//! |--------|-------------|
//! | `vocab` | Closed enumerations of relationship keys and entity types |
//! | `model` | `Entity` node and its `PropertyMap` store |
//! | `schema` | Rule tables, `validate`, JSON-loadable `Schema` |
//! | `builder` | Generic `EntityBuilder` |
//! | `entities` | Typed wrappers and builders per HQDM type |

// ============================================================================
// Modules
// ============================================================================

pub mod vocab;
pub mod model;
pub mod schema;
pub mod builder;
pub mod entities;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Entity, Identified, Iri, PropertyMap, Value, ValueSet};

// ============================================================================
// Re-exports: Vocabulary
// ============================================================================

pub use vocab::{EntityType, RelationshipKey};

// ============================================================================
// Re-exports: Schema
// ============================================================================

pub use schema::{validate, Cardinality, Rule, Schema, ValidationError};

// ============================================================================
// Re-exports: Builders and typed entities
// ============================================================================

pub use builder::EntityBuilder;
pub use entities::*;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown entity type: no rule table for {0}")]
    UnknownEntityType(EntityType),

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: EntityType, got: EntityType },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

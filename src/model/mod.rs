//! # Entity Model
//!
//! The generic node every HQDM entity wraps, and the property store it owns.
//!
//! Design rule: NO ontology rules here. Which keys a type needs, and how
//! many values each must carry, is the business of [`crate::schema`].
//! This module is pure data — no I/O, no global state.

pub mod iri;
pub mod value;
pub mod property_map;
pub mod entity;

pub use iri::{Iri, Identified};
pub use value::Value;
pub use property_map::{PropertyMap, ValueSet};
pub use entity::Entity;

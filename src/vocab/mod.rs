//! # HQDM Vocabulary
//!
//! Process-wide, immutable enumerations of the relationship keys and entity
//! types. Nothing here is mutable at runtime; names round-trip through
//! `Display`/`FromStr` and serde using their HQDM spelling.

pub mod relationship;
pub mod entity_type;

pub use relationship::RelationshipKey;
pub use entity_type::EntityType;

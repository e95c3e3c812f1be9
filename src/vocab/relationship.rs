//! The closed set of HQDM relationship keys.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// One HQDM relationship type.
///
/// The string form is the HQDM relationship name, which is also what
/// validation failures report. HQDM pairs several relationships with a
/// double-underscore supertype form; those map to Rust names as follows:
///
/// | HQDM name | Variant |
/// |-----------|---------|
/// | `member__of` | `MemberOfClass` |
/// | `part__of` | `PartOfExtent` |
/// | `temporal__part_of` | `TemporalPartOfExtent` |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Display, EnumString, IntoStaticStr, EnumIter, EnumCount,
    SerializeDisplay, DeserializeFromStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum RelationshipKey {
    AggregatedInto,
    Beginning,
    Causes,
    CausesByClass,
    ConsistsOf,
    ConsistsOfByClass,
    ConsistsOfParticipant,
    #[strum(to_string = "data_EntityName")]
    DataEntityName,
    Determines,
    Ending,
    HasSuperclass,
    #[strum(to_string = "member__of")]
    MemberOfClass,
    MemberOf,
    MemberOfKind,
    #[strum(to_string = "part__of")]
    PartOfExtent,
    PartOf,
    PartOfByClass,
    PartOfPossibleWorld,
    ParticipantIn,
    References,
    Represents,
    #[strum(to_string = "temporal__part_of")]
    TemporalPartOfExtent,
    TemporalPartOf,
    #[strum(to_string = "value_")]
    Value,
}

impl RelationshipKey {
    /// The HQDM relationship name.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Whether the relationship carries literals rather than IRI references.
    pub fn is_literal(self) -> bool {
        matches!(self, RelationshipKey::DataEntityName | RelationshipKey::Value)
    }
}

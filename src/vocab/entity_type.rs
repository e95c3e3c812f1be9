//! The closed set of HQDM entity types this crate models.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Ontology type tag, fixed on a node at construction.
///
/// The string form is the HQDM entity name (`activity`,
/// `kind_of_activity`, `beginning_of_ownership`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Display, EnumString, IntoStaticStr, EnumIter, EnumCount,
    SerializeDisplay, DeserializeFromStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum EntityType {
    // Activities
    Activity,
    SociallyConstructedActivity,
    ReachingAgreement,
    AgreementProcess,
    AgreementExecution,
    ContractProcess,
    ContractExecution,
    ExchangeOfGoodsAndMoney,
    SaleOfGoods,
    Offer,
    AcceptanceOfOffer,
    TransferOfOwnership,
    TransferOfOwnershipOfMoney,

    // Associations
    Association,
    Ownership,
    Employment,

    // Participants
    Participant,
    Owner,
    Asset,
    Transferor,
    Transferee,
    Employee,
    Employer,

    // Events
    Event,
    PointInTime,
    BeginningOfOwnership,
    EndingOfOwnership,

    // Extents and individuals
    PossibleWorld,
    PeriodOfTime,
    PhysicalObject,
    Person,
    Organization,
    StateOfPerson,

    // Classes
    Class,
    ClassOfEvent,
    KindOfActivity,
    KindOfAssociation,
    KindOfPerson,
    KindOfOrganization,
    Role,
    Pattern,

    // Representation
    Sign,
    RepresentationBySign,
}

impl EntityType {
    /// The HQDM entity name.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

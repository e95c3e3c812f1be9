//! # Typed HQDM Entities
//!
//! One wrapper and one builder per HQDM entity type, declared with
//! `hqdm_entity!`. Every builder restates its type's full rule table; there
//! is no inheritance between tables. The same tables back
//! [`Schema::hqdm`](crate::schema::Schema::hqdm).
//!
//! Setter naming: one method per relationship, named after it, with an `_m`
//! suffix when the relationship is mandatory (`causes_m`,
//! `member_of_kind_m`). The HQDM double-underscore relationships read
//! `member_of_class`, `part_of_extent` and `temporal_part_of_extent`.

#[macro_use]
mod macros;

pub mod activity;
pub mod association;
pub mod participant;
pub mod event;
pub mod individual;
pub mod class;
pub mod sign;

use crate::model::{Entity, Identified, Iri, Value};
use crate::schema::{validate, Rule, ValidationError};
use crate::vocab::{EntityType, RelationshipKey};
use crate::{Error, Result};

pub use activity::*;
pub use association::*;
pub use participant::*;
pub use event::*;
pub use individual::*;
pub use class::*;
pub use sign::*;

/// Every declared type with its rule table.
pub(crate) const HQDM_TABLES: &[(EntityType, &[Rule])] = &[
    (Activity::ENTITY_TYPE, Activity::RULES),
    (SociallyConstructedActivity::ENTITY_TYPE, SociallyConstructedActivity::RULES),
    (ReachingAgreement::ENTITY_TYPE, ReachingAgreement::RULES),
    (AgreementProcess::ENTITY_TYPE, AgreementProcess::RULES),
    (AgreementExecution::ENTITY_TYPE, AgreementExecution::RULES),
    (ContractProcess::ENTITY_TYPE, ContractProcess::RULES),
    (ContractExecution::ENTITY_TYPE, ContractExecution::RULES),
    (ExchangeOfGoodsAndMoney::ENTITY_TYPE, ExchangeOfGoodsAndMoney::RULES),
    (SaleOfGoods::ENTITY_TYPE, SaleOfGoods::RULES),
    (Offer::ENTITY_TYPE, Offer::RULES),
    (AcceptanceOfOffer::ENTITY_TYPE, AcceptanceOfOffer::RULES),
    (TransferOfOwnership::ENTITY_TYPE, TransferOfOwnership::RULES),
    (TransferOfOwnershipOfMoney::ENTITY_TYPE, TransferOfOwnershipOfMoney::RULES),
    (Association::ENTITY_TYPE, Association::RULES),
    (Ownership::ENTITY_TYPE, Ownership::RULES),
    (Employment::ENTITY_TYPE, Employment::RULES),
    (Participant::ENTITY_TYPE, Participant::RULES),
    (Owner::ENTITY_TYPE, Owner::RULES),
    (Asset::ENTITY_TYPE, Asset::RULES),
    (Transferor::ENTITY_TYPE, Transferor::RULES),
    (Transferee::ENTITY_TYPE, Transferee::RULES),
    (Employee::ENTITY_TYPE, Employee::RULES),
    (Employer::ENTITY_TYPE, Employer::RULES),
    (Event::ENTITY_TYPE, Event::RULES),
    (PointInTime::ENTITY_TYPE, PointInTime::RULES),
    (BeginningOfOwnership::ENTITY_TYPE, BeginningOfOwnership::RULES),
    (EndingOfOwnership::ENTITY_TYPE, EndingOfOwnership::RULES),
    (PossibleWorld::ENTITY_TYPE, PossibleWorld::RULES),
    (PeriodOfTime::ENTITY_TYPE, PeriodOfTime::RULES),
    (PhysicalObject::ENTITY_TYPE, PhysicalObject::RULES),
    (Person::ENTITY_TYPE, Person::RULES),
    (Organization::ENTITY_TYPE, Organization::RULES),
    (StateOfPerson::ENTITY_TYPE, StateOfPerson::RULES),
    (Class::ENTITY_TYPE, Class::RULES),
    (ClassOfEvent::ENTITY_TYPE, ClassOfEvent::RULES),
    (KindOfActivity::ENTITY_TYPE, KindOfActivity::RULES),
    (KindOfAssociation::ENTITY_TYPE, KindOfAssociation::RULES),
    (KindOfPerson::ENTITY_TYPE, KindOfPerson::RULES),
    (KindOfOrganization::ENTITY_TYPE, KindOfOrganization::RULES),
    (Role::ENTITY_TYPE, Role::RULES),
    (Pattern::ENTITY_TYPE, Pattern::RULES),
    (Sign::ENTITY_TYPE, Sign::RULES),
    (RepresentationBySign::ENTITY_TYPE, RepresentationBySign::RULES),
];

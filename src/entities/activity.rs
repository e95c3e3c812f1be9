//! Activities: things that happen, and the agreement and ownership-transfer
//! activities built on them.

use super::*;

hqdm_entity! {
    /// Something that causes one or more events. Kind, world and at least one
    /// caused event are required.
    Activity, ActivityBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of => ConsistsOf: optional,
        consists_of_participant => ConsistsOfParticipant: optional,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// An activity that only exists because of social convention.
    SociallyConstructedActivity, SociallyConstructedActivityBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of => ConsistsOf: optional,
        consists_of_participant => ConsistsOfParticipant: optional,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    ReachingAgreement, ReachingAgreementBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of => ConsistsOf: optional,
        consists_of_participant => ConsistsOfParticipant: optional,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// Reaching an agreement followed by executing it.
    AgreementProcess, AgreementProcessBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of_m => ConsistsOf: mandatory,
        consists_of_participant => ConsistsOfParticipant: optional,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    AgreementExecution, AgreementExecutionBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of => ConsistsOf: optional,
        consists_of_participant => ConsistsOfParticipant: optional,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// An agreement process whose agreement is a contract.
    ContractProcess, ContractProcessBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of_m => ConsistsOf: mandatory,
        consists_of_participant => ConsistsOfParticipant: optional,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    ContractExecution, ContractExecutionBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of => ConsistsOf: optional,
        consists_of_participant => ConsistsOfParticipant: optional,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_m => PartOf: mandatory,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// Goods for money: two transfers of ownership executed together.
    ExchangeOfGoodsAndMoney, ExchangeOfGoodsAndMoneyBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of_m => ConsistsOf: mandatory,
        consists_of_participant => ConsistsOfParticipant: optional,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    SaleOfGoods, SaleOfGoodsBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of_m => ConsistsOf: mandatory,
        consists_of_participant => ConsistsOfParticipant: optional,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// Proposing an agreement. The offeror takes part through
    /// `consists_of_participant`, which is therefore required.
    Offer, OfferBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of => ConsistsOf: optional,
        consists_of_participant_m => ConsistsOfParticipant: mandatory,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references => References: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// Accepting an offer, which it must reference.
    AcceptanceOfOffer, AcceptanceOfOfferBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of => ConsistsOf: optional,
        consists_of_participant_m => ConsistsOfParticipant: mandatory,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references_m => References: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// Ends one ownership and begins another: causes the ending and the
    /// beginning, with a transferor and a transferee taking part.
    TransferOfOwnership, TransferOfOwnershipBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of => ConsistsOf: optional,
        consists_of_participant_m => ConsistsOfParticipant: mandatory,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references_m => References: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    TransferOfOwnershipOfMoney, TransferOfOwnershipOfMoneyBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        causes_m => Causes: mandatory,
        consists_of => ConsistsOf: optional,
        consists_of_participant_m => ConsistsOfParticipant: mandatory,
        determines => Determines: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of => PartOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        references_m => References: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

//! Associations: participants bound together for a period, e.g. ownership.

use super::*;

hqdm_entity! {
    Association, AssociationBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        consists_of_participant => ConsistsOfParticipant: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// An owner holding an asset. Must have begun; may not have ended yet.
    Ownership, OwnershipBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning_m => Beginning: mandatory,
        consists_of_participant => ConsistsOfParticipant: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// Employer and employee bound by an employment contract.
    Employment, EmploymentBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        consists_of_participant => ConsistsOfParticipant: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

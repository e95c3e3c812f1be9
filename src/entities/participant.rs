//! Participants and the roles they play in associations and activities.
//!
//! A generic [`Participant`] need not say what it takes part in; the
//! specific roles (owner, asset, transferor, ...) must.

use super::*;

hqdm_entity! {
    Participant, ParticipantBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        participant_in => ParticipantIn: optional,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    Owner, OwnerBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        participant_in_m => ParticipantIn: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    /// The thing owned in an ownership.
    Asset, AssetBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        participant_in_m => ParticipantIn: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    Transferor, TransferorBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        participant_in_m => ParticipantIn: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    Transferee, TransfereeBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        participant_in_m => ParticipantIn: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    Employee, EmployeeBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        participant_in_m => ParticipantIn: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of_m => TemporalPartOf: mandatory,
    }
}

hqdm_entity! {
    Employer, EmployerBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind_m => MemberOfKind: mandatory,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        participant_in_m => ParticipantIn: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of_m => TemporalPartOf: mandatory,
    }
}

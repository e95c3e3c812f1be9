//! Possible worlds and the spatio-temporal individuals that live in them.

use super::*;

hqdm_entity! {
    /// A complete spatio-temporal history. A possible world is part of
    /// itself, so `part_of_possible_world_m` usually points back at its own
    /// IRI.
    PossibleWorld, PossibleWorldBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        consists_of => ConsistsOf: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    PeriodOfTime, PeriodOfTimeBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    PhysicalObject, PhysicalObjectBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        member_of_kind => MemberOfKind: optional,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

hqdm_entity! {
    Person, PersonBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
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
    Organization, OrganizationBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
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
    /// A person over some period, e.g. while employed.
    StateOfPerson, StateOfPersonBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

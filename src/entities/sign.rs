//! Signs and what they represent.

use super::*;

hqdm_entity! {
    /// A mark following a pattern, with a literal value, used in a
    /// representation by sign.
    Sign, SignBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        ending => Ending: optional,
        member_of_class_m => MemberOfClass: mandatory,
        member_of => MemberOf: optional,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        participant_in_m => ParticipantIn: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
        value_m => Value: mandatory [literal],
    }
}

hqdm_entity! {
    RepresentationBySign, RepresentationBySignBuilder {
        aggregated_into => AggregatedInto: optional,
        beginning => Beginning: optional,
        consists_of_participant => ConsistsOfParticipant: optional,
        ending => Ending: optional,
        member_of_class_m => MemberOfClass: mandatory,
        member_of => MemberOf: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        represents_m => Represents: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
        temporal_part_of => TemporalPartOf: optional,
    }
}

//! Events: instants that begin or end things.

use super::*;

hqdm_entity! {
    Event, EventBuilder {
        aggregated_into => AggregatedInto: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
    }
}

hqdm_entity! {
    /// An event with a name, e.g. a calendar instant.
    PointInTime, PointInTimeBuilder {
        aggregated_into => AggregatedInto: optional,
        entity_name => DataEntityName: optional [literal],
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
    }
}

hqdm_entity! {
    BeginningOfOwnership, BeginningOfOwnershipBuilder {
        aggregated_into => AggregatedInto: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
    }
}

hqdm_entity! {
    EndingOfOwnership, EndingOfOwnershipBuilder {
        aggregated_into => AggregatedInto: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_extent => PartOfExtent: optional,
        part_of_possible_world_m => PartOfPossibleWorld: mandatory,
        temporal_part_of_extent => TemporalPartOfExtent: optional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_in_time_carries_literal_name() {
        let t = PointInTime::builder("urn:t0")
            .entity_name("2020-01-01T00:00:00Z")
            .part_of_possible_world_m(&Iri::from("urn:w1"))
            .build()
            .unwrap();
        assert_eq!(
            t.value(RelationshipKey::DataEntityName),
            &[Value::Literal("2020-01-01T00:00:00Z".into())]
        );
    }
}

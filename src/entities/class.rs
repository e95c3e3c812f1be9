//! Classes and kinds. None of them has a mandatory relationship: a class
//! may stand alone, unnamed and without superclass.

use super::*;

hqdm_entity! {
    Class, ClassBuilder {
        entity_name => DataEntityName: optional [literal],
        has_superclass => HasSuperclass: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_by_class => PartOfByClass: optional,
    }
}

hqdm_entity! {
    ClassOfEvent, ClassOfEventBuilder {
        entity_name => DataEntityName: optional [literal],
        has_superclass => HasSuperclass: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_by_class => PartOfByClass: optional,
    }
}

hqdm_entity! {
    /// A kind of activity, optionally saying what its members cause and
    /// consist of.
    KindOfActivity, KindOfActivityBuilder {
        causes_by_class => CausesByClass: optional,
        consists_of_by_class => ConsistsOfByClass: optional,
        entity_name => DataEntityName: optional [literal],
        has_superclass => HasSuperclass: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_by_class => PartOfByClass: optional,
    }
}

hqdm_entity! {
    KindOfAssociation, KindOfAssociationBuilder {
        consists_of_by_class => ConsistsOfByClass: optional,
        entity_name => DataEntityName: optional [literal],
        has_superclass => HasSuperclass: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_by_class => PartOfByClass: optional,
    }
}

hqdm_entity! {
    KindOfPerson, KindOfPersonBuilder {
        entity_name => DataEntityName: optional [literal],
        has_superclass => HasSuperclass: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_by_class => PartOfByClass: optional,
    }
}

hqdm_entity! {
    KindOfOrganization, KindOfOrganizationBuilder {
        entity_name => DataEntityName: optional [literal],
        has_superclass => HasSuperclass: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_by_class => PartOfByClass: optional,
    }
}

hqdm_entity! {
    /// The part a participant plays. `part_of_by_class` names the kinds of
    /// activity or association the role belongs to.
    Role, RoleBuilder {
        entity_name => DataEntityName: optional [literal],
        has_superclass => HasSuperclass: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
        part_of_by_class => PartOfByClass: optional,
    }
}

hqdm_entity! {
    Pattern, PatternBuilder {
        entity_name => DataEntityName: optional [literal],
        has_superclass => HasSuperclass: optional,
        member_of_class => MemberOfClass: optional,
        member_of => MemberOf: optional,
    }
}

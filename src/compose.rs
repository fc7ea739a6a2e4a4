//! Grouped presentation of parsed attribute records.
//!
//! Each entity kind declares a fixed group display order; composing folds a
//! flat record list into that order, sorts each section's records by name,
//! and omits empty groups. Composition is deterministic: the same input
//! always yields the same sections.

use serde::{Deserialize, Serialize};

use crate::properties::{AttrGroup, AttributeRecord, EntityKind};

const OBJECT_GROUP_ORDER: &[AttrGroup] = &[
    AttrGroup::Standard,
    AttrGroup::Application,
    AttrGroup::System,
    AttrGroup::Internal,
];

const USER_GROUP_ORDER: &[AttrGroup] = &[
    AttrGroup::Identity,
    AttrGroup::Access,
    AttrGroup::Preferences,
    AttrGroup::Other,
    AttrGroup::System,
];

const GROUP_GROUP_ORDER: &[AttrGroup] = &[
    AttrGroup::Members,
    AttrGroup::Identity,
    AttrGroup::Access,
    AttrGroup::Other,
    AttrGroup::System,
];

impl EntityKind {
    /// Declared group display order for this entity kind. Membership
    /// surfaces ahead of the attribute buckets for groups; system buckets
    /// sort last for every kind.
    pub fn group_order(&self) -> &'static [AttrGroup] {
        match self {
            EntityKind::Object => OBJECT_GROUP_ORDER,
            EntityKind::User => USER_GROUP_ORDER,
            EntityKind::Group => GROUP_GROUP_ORDER,
        }
    }
}

/// One section of a grouped attribute view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrSection {
    pub group: AttrGroup,
    pub records: Vec<AttributeRecord>,
}

/// Fold categorized records into display-ordered sections.
///
/// Within a section records are sorted by name, ascending and
/// case-sensitive. Groups with no records produce no section.
pub fn compose(kind: EntityKind, records: &[AttributeRecord]) -> Vec<AttrSection> {
    let order = kind.group_order();
    let mut sections = Vec::with_capacity(order.len());
    for group in order {
        if let Some(section) = section_for(*group, records) {
            sections.push(section);
        }
    }
    // Records carrying a group outside the declared order (possible only for
    // hand-built input) surface as trailing sections rather than vanishing.
    for record in records {
        if !order.contains(&record.group) && !sections.iter().any(|s| s.group == record.group) {
            if let Some(section) = section_for(record.group, records) {
                sections.push(section);
            }
        }
    }
    sections
}

fn section_for(group: AttrGroup, records: &[AttributeRecord]) -> Option<AttrSection> {
    let mut members: Vec<AttributeRecord> = records
        .iter()
        .filter(|record| record.group == group)
        .cloned()
        .collect();
    if members.is_empty() {
        return None;
    }
    members.sort_by(|a, b| a.name.cmp(&b.name));
    Some(AttrSection {
        group,
        records: members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::AttrValue;

    fn record(name: &str, group: AttrGroup) -> AttributeRecord {
        AttributeRecord {
            name: name.to_string(),
            declared_type: "string".to_string(),
            value: AttrValue::scalar("v"),
            group,
        }
    }

    #[test]
    fn test_sections_follow_declared_order_and_sort_by_name() {
        let records = vec![
            record("i_vstamp", AttrGroup::Internal),
            record("object_name", AttrGroup::Standard),
            record("r_object_id", AttrGroup::System),
            record("a_content_type", AttrGroup::Application),
            record("keywords", AttrGroup::Standard),
        ];
        let sections = compose(EntityKind::Object, &records);
        let groups: Vec<AttrGroup> = sections.iter().map(|s| s.group).collect();
        assert_eq!(
            groups,
            vec![
                AttrGroup::Standard,
                AttrGroup::Application,
                AttrGroup::System,
                AttrGroup::Internal,
            ]
        );
        let standard: Vec<&str> = sections[0].records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(standard, vec!["keywords", "object_name"]);
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let records = vec![record("object_name", AttrGroup::Standard)];
        let sections = compose(EntityKind::Object, &records);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].group, AttrGroup::Standard);
    }

    #[test]
    fn test_name_sort_is_case_sensitive_ordinal() {
        let records = vec![
            record("alpha", AttrGroup::Standard),
            record("Beta", AttrGroup::Standard),
        ];
        let sections = compose(EntityKind::Object, &records);
        let names: Vec<&str> = sections[0].records.iter().map(|r| r.name.as_str()).collect();
        // Uppercase sorts before lowercase in ordinal order.
        assert_eq!(names, vec!["Beta", "alpha"]);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let records = vec![
            record("users_names", AttrGroup::Members),
            record("group_name", AttrGroup::Identity),
            record("r_modify_date", AttrGroup::System),
        ];
        let first = compose(EntityKind::Group, &records);
        let second = compose(EntityKind::Group, &records);
        assert_eq!(first, second);
        assert_eq!(first[0].group, AttrGroup::Members);
    }

    #[test]
    fn test_undeclared_group_surfaces_as_trailing_section() {
        // A members record under the object kind has no declared slot.
        let records = vec![
            record("object_name", AttrGroup::Standard),
            record("users_names", AttrGroup::Members),
        ];
        let sections = compose(EntityKind::Object, &records);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].group, AttrGroup::Members);
    }
}

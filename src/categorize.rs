//! Attribute categorization.
//!
//! Maps an attribute name to its semantic display group using an
//! entity-kind-specific rule table, evaluated top to bottom with first match
//! wins and a table-level fallback. The tables are data, not control flow:
//! supporting a new entity kind or a renamed attribute is a table edit.

use crate::properties::{AttrGroup, EntityKind};

/// A single categorization predicate.
#[derive(Debug, Clone, Copy)]
pub enum NamePredicate {
    /// The attribute name starts with this prefix.
    Prefix(&'static str),
    /// The attribute name is one of an explicit set.
    OneOf(&'static [&'static str]),
}

impl NamePredicate {
    fn matches(&self, name: &str) -> bool {
        match self {
            NamePredicate::Prefix(prefix) => name.starts_with(prefix),
            NamePredicate::OneOf(names) => names.contains(&name),
        }
    }
}

/// Attributes that identify a user entry to the outside world.
const USER_IDENTITY_ATTRS: &[&str] = &[
    "user_name",
    "user_login_name",
    "user_login_domain",
    "user_os_name",
    "user_os_domain",
    "user_address",
    "user_db_name",
    "user_source",
    "user_ldap_dn",
    "user_global_unique_id",
];

/// Privilege and capability attributes of a user entry.
const USER_ACCESS_ATTRS: &[&str] = &[
    "user_privileges",
    "user_xprivileges",
    "user_state",
    "client_capability",
    "acl_domain",
    "acl_name",
];

const USER_PREFERENCE_ATTRS: &[&str] = &[
    "default_folder",
    "home_docbase",
    "user_initials",
    "user_delegation",
    "workflow_disabled",
];

const GROUP_IDENTITY_ATTRS: &[&str] = &[
    "group_name",
    "group_address",
    "group_class",
    "group_global_unique_id",
    "group_source",
    "description",
    "owner_name",
];

const GROUP_ACCESS_ATTRS: &[&str] = &[
    "group_admin",
    "alias_set_id",
    "is_private",
    "is_protected",
    "is_dynamic",
];

/// Membership attributes surface as their own top-level section rather than
/// folding into a generic bucket.
const GROUP_MEMBER_ATTRS: &[&str] = &["users_names", "groups_names"];

struct RuleTable {
    rules: &'static [(NamePredicate, AttrGroup)],
    fallback: AttrGroup,
}

const OBJECT_TABLE: RuleTable = RuleTable {
    rules: &[
        (NamePredicate::Prefix("r_"), AttrGroup::System),
        (NamePredicate::Prefix("i_"), AttrGroup::Internal),
        (NamePredicate::Prefix("a_"), AttrGroup::Application),
    ],
    fallback: AttrGroup::Standard,
};

const USER_TABLE: RuleTable = RuleTable {
    rules: &[
        (NamePredicate::OneOf(USER_IDENTITY_ATTRS), AttrGroup::Identity),
        (NamePredicate::OneOf(USER_ACCESS_ATTRS), AttrGroup::Access),
        (
            NamePredicate::OneOf(USER_PREFERENCE_ATTRS),
            AttrGroup::Preferences,
        ),
        (NamePredicate::Prefix("r_"), AttrGroup::System),
        (NamePredicate::Prefix("i_"), AttrGroup::System),
    ],
    fallback: AttrGroup::Other,
};

const GROUP_TABLE: RuleTable = RuleTable {
    rules: &[
        (
            NamePredicate::OneOf(GROUP_IDENTITY_ATTRS),
            AttrGroup::Identity,
        ),
        (NamePredicate::OneOf(GROUP_ACCESS_ATTRS), AttrGroup::Access),
        (NamePredicate::OneOf(GROUP_MEMBER_ATTRS), AttrGroup::Members),
        (NamePredicate::Prefix("r_"), AttrGroup::System),
        (NamePredicate::Prefix("i_"), AttrGroup::System),
    ],
    fallback: AttrGroup::Other,
};

/// Assign the semantic display group for `name` under the rule table of
/// `kind`. Pure and stateless.
pub fn categorize(kind: EntityKind, name: &str) -> AttrGroup {
    let table = match kind {
        EntityKind::Object => &OBJECT_TABLE,
        EntityKind::User => &USER_TABLE,
        EntityKind::Group => &GROUP_TABLE,
    };
    table
        .rules
        .iter()
        .find(|(predicate, _)| predicate.matches(name))
        .map(|(_, group)| *group)
        .unwrap_or(table.fallback)
}

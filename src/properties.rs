/// [crate::properties] contains the basic building blocks of the attribute
/// model: entity kinds, semantic display groups, attribute values, and the
/// [AttributeRecord]s assembled by the dump parser in [crate::codec].
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Type label recorded when a dump line carries no explicit type token.
pub const DEFAULT_DECLARED_TYPE: &str = "string";

/// The category of thing a dump describes. Selects the categorization rule
/// table ([crate::categorize]) and the group display order
/// ([crate::compose]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A generic repository object (documents, folders, types, ...).
    Object,
    /// A repository user entry.
    User,
    /// A repository group entry.
    Group,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Object => "object",
            EntityKind::User => "user",
            EntityKind::Group => "group",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Semantic display bucket assigned to each attribute at record creation.
///
/// Which buckets are reachable depends on the [EntityKind]: generic objects
/// use the prefix buckets (`Standard`/`Application`/`System`/`Internal`),
/// users and groups use the named buckets plus `System` and `Other`, and
/// `Members` only occurs for group membership attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrGroup {
    Standard,
    Application,
    System,
    Internal,
    Identity,
    Access,
    Preferences,
    Members,
    Other,
}

impl AttrGroup {
    /// Human display label, as used for section headings in grouped views.
    pub fn label(&self) -> &'static str {
        match self {
            AttrGroup::Standard => "standard",
            AttrGroup::Application => "application",
            AttrGroup::System => "system",
            AttrGroup::Internal => "internal",
            AttrGroup::Identity => "identity",
            AttrGroup::Access => "access",
            AttrGroup::Preferences => "preferences",
            AttrGroup::Members => "members",
            AttrGroup::Other => "other",
        }
    }
}

impl Display for AttrGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A scalar or repeating attribute value.
///
/// The parser only ever produces present entries (index gaps are filled with
/// empty strings, never holes), but collaborators that construct or
/// post-process records may hold absent values; [crate::format::format_value]
/// renders those as `NULL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Scalar(Option<String>),
    Repeating(Vec<Option<String>>),
}

impl AttrValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        AttrValue::Scalar(Some(value.into()))
    }

    /// Build a repeating value holding `value` at `index`, with every lower
    /// position filled with the empty string.
    pub(crate) fn repeating_at(index: usize, value: String) -> Self {
        let mut repeating = AttrValue::Repeating(Vec::with_capacity(index + 1));
        repeating.set_index(index, value);
        repeating
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, AttrValue::Repeating(_))
    }

    /// Number of value positions: 1 for a scalar, the sequence length for a
    /// repeating value.
    pub fn len(&self) -> usize {
        match self {
            AttrValue::Scalar(_) => 1,
            AttrValue::Repeating(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value at `index`, if present. A scalar answers only index 0.
    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            AttrValue::Scalar(value) if index == 0 => value.as_deref(),
            AttrValue::Scalar(_) => None,
            AttrValue::Repeating(values) => values.get(index).and_then(|v| v.as_deref()),
        }
    }

    /// Assign `value` at `index`, promoting a scalar in place to a
    /// one-element sequence first and gap-filling any newly introduced lower
    /// positions with the empty string. The result is never sparse, whatever
    /// order indices arrive in.
    pub(crate) fn set_index(&mut self, index: usize, value: String) {
        if let AttrValue::Scalar(current) = self {
            *self = AttrValue::Repeating(vec![current.take()]);
        }
        if let AttrValue::Repeating(values) = self {
            if values.len() <= index {
                values.resize(index + 1, Some(String::new()));
            }
            values[index] = Some(value);
        }
    }

    /// Overwrite with a non-indexed occurrence: last value wins for scalars.
    /// An already-promoted value merges the occurrence into position 0.
    pub(crate) fn set_scalar(&mut self, value: String) {
        match self {
            AttrValue::Scalar(current) => *current = Some(value),
            AttrValue::Repeating(values) => {
                if values.is_empty() {
                    values.push(Some(value));
                } else {
                    values[0] = Some(value);
                }
            }
        }
    }
}

impl Display for AttrValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::format_value(self))
    }
}

/// One parsed attribute: the unit of the flat result list.
///
/// Each attribute name produces at most one record per dump; repeated
/// occurrences merge into the same record. Promotion from scalar to
/// repeating is one-way for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Attribute identifier, case-sensitive, unique within a dump.
    pub name: String,
    /// Type label from the dump (`ID`, `string`, `time`, ...);
    /// [DEFAULT_DECLARED_TYPE] when the dump never supplied one.
    pub declared_type: String,
    pub value: AttrValue,
    /// Semantic category assigned via [crate::categorize::categorize].
    pub group: AttrGroup,
}

impl AttributeRecord {
    pub(crate) fn new(
        name: String,
        declared_type: Option<&str>,
        value: AttrValue,
        group: AttrGroup,
    ) -> Self {
        AttributeRecord {
            name,
            declared_type: declared_type.unwrap_or(DEFAULT_DECLARED_TYPE).to_string(),
            value,
            group,
        }
    }

    pub fn is_repeating(&self) -> bool {
        self.value.is_repeating()
    }

    /// Render the value as display text. See [crate::format::format_value].
    pub fn display_value(&self) -> String {
        crate::format::format_value(&self.value)
    }

    /// Apply the declared-type rule for a later occurrence of this name: an
    /// explicit label only lands while the current label is still the
    /// default, and an absent label never clears an explicit one.
    pub(crate) fn update_declared_type(&mut self, label: Option<&str>) {
        if let Some(label) = label {
            if self.declared_type == DEFAULT_DECLARED_TYPE {
                self.declared_type = label.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_index_gap_fills_lower_positions() {
        let mut value = AttrValue::repeating_at(2, "c".to_string());
        assert_eq!(
            value,
            AttrValue::Repeating(vec![
                Some(String::new()),
                Some(String::new()),
                Some("c".to_string()),
            ])
        );
        value.set_index(0, "a".to_string());
        assert_eq!(value.get(0), Some("a"));
        assert_eq!(value.get(1), Some(""));
        assert_eq!(value.len(), 3);
    }

    #[test]
    fn test_set_index_promotes_scalar_in_place() {
        let mut value = AttrValue::scalar("first");
        assert!(!value.is_repeating());
        value.set_index(1, "second".to_string());
        assert!(value.is_repeating());
        assert_eq!(
            value,
            AttrValue::Repeating(vec![Some("first".to_string()), Some("second".to_string())])
        );
    }

    #[test]
    fn test_set_scalar_last_occurrence_wins() {
        let mut value = AttrValue::scalar("old");
        value.set_scalar("new".to_string());
        assert_eq!(value, AttrValue::scalar("new"));
    }

    #[test]
    fn test_declared_type_explicit_label_is_kept() {
        let mut record = AttributeRecord::new(
            "r_object_id".to_string(),
            Some("ID"),
            AttrValue::scalar("0900000180000100"),
            AttrGroup::System,
        );
        // Later unlabelled occurrences never clear an explicit label.
        record.update_declared_type(None);
        assert_eq!(record.declared_type, "ID");
        // Nor does a later conflicting label replace a non-default one.
        record.update_declared_type(Some("string"));
        assert_eq!(record.declared_type, "ID");
    }

    #[test]
    fn test_declared_type_fills_in_over_default() {
        let mut record = AttributeRecord::new(
            "r_object_id".to_string(),
            None,
            AttrValue::scalar("0900000180000100"),
            AttrGroup::System,
        );
        assert_eq!(record.declared_type, DEFAULT_DECLARED_TYPE);
        record.update_declared_type(Some("ID"));
        assert_eq!(record.declared_type, "ID");
    }

    #[test]
    fn test_attr_value_serializes_untagged() {
        let scalar = AttrValue::scalar("x");
        assert_eq!(
            serde_json::to_value(&scalar).unwrap(),
            serde_json::json!("x")
        );
        let repeating = AttrValue::Repeating(vec![Some("a".to_string()), None]);
        assert_eq!(
            serde_json::to_value(&repeating).unwrap(),
            serde_json::json!(["a", null])
        );
    }
}

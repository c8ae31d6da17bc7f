use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Extended-property key for the field separator on a CSV asset.
pub const DELIMITER_PROPERTY: &str = "delimiterCharacter";
/// Extended-property key for the quote character on a CSV asset.
pub const QUOTE_PROPERTY: &str = "quoteCharacter";

/// Configuration-property key for the field separator handed to the connector.
pub const DELIMITER_CONFIG_PROPERTY: &str = "delimiterCharacter";
/// Configuration-property key for the quote character handed to the connector.
pub const QUOTE_CONFIG_PROPERTY: &str = "quoteCharacter";
/// Configuration-property key for the ordered column names handed to the connector.
pub const COLUMN_NAMES_CONFIG_PROPERTY: &str = "columnNames";

/// Field separator used when the caller does not supply one.
pub const DEFAULT_DELIMITER: char = ',';
/// Quote character used when the caller does not supply one.
pub const DEFAULT_QUOTE: char = '"';

/// Value stored in a descriptor's property map.
///
/// Serialized untagged so property maps read as plain JSON objects.
/// There is deliberately no null variant: absent values are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A single character (delimiter, quote).
    Char(char),
    /// Ordered list of strings (column names).
    StringList(Vec<String>),
}

impl PropertyValue {
    /// Returns the character if this is a `Char` value.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::StringList(_) => None,
        }
    }

    /// Returns the list if this is a `StringList` value.
    #[must_use]
    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(items) => Some(items),
            Self::Char(_) => None,
        }
    }
}

impl From<char> for PropertyValue {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(items: Vec<String>) -> Self {
        Self::StringList(items)
    }
}

/// Property map attached to descriptors. `BTreeMap` keeps serialization order stable.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// Collects only the present entries into a map; `None` values are skipped.
pub(crate) fn collect_present<I>(entries: I) -> PropertyMap
where
    I: IntoIterator<Item = (&'static str, Option<PropertyValue>)>,
{
    entries
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_present_skips_absent_entries() {
        let map = collect_present([
            ("a", Some(PropertyValue::Char(','))),
            ("b", None),
            ("c", Some(PropertyValue::from(vec!["x".to_string()]))),
        ]);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("a"));
        assert!(!map.contains_key("b"));
        assert_eq!(map["c"].as_string_list(), Some(&["x".to_string()][..]));
    }

    #[test]
    fn untagged_serialization_is_plain_json() {
        let mut map = PropertyMap::new();
        map.insert("d".to_string(), PropertyValue::Char(';'));
        map.insert("n".to_string(), vec!["a".to_string(), "b".to_string()].into());
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "d": ";", "n": ["a", "b"] }));
    }

    #[test]
    fn accessors_return_none_for_other_variants() {
        let c = PropertyValue::Char(';');
        assert!(c.as_string_list().is_none());
        let list = PropertyValue::StringList(vec!["a".to_string()]);
        assert!(list.as_char().is_none());
    }

    #[test]
    fn values_survive_json_round_trip() {
        let values = [
            PropertyValue::Char('a'),
            PropertyValue::Char('"'),
            PropertyValue::StringList(vec!["a".to_string()]),
            PropertyValue::StringList(Vec::new()),
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: PropertyValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value, "round trip through {json}");
        }
    }
}

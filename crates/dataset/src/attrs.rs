//! JSON-valued attribute maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute map attached to datasets and trees.
///
/// Attributes are informational provenance only; they are stored as JSON so
/// they round-trip through Zarr metadata unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attrs(BTreeMap<String, Value>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Fetch a string attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Convert to a JSON object map (for Zarr array attributes).
    pub fn to_json_map(&self) -> serde_json::Map<String, Value> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Build from a JSON object map.
    pub fn from_json_map(map: &serde_json::Map<String, Value>) -> Self {
        Self(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    /// Combine attribute maps, silently dropping conflicting keys.
    ///
    /// The union of all keys is kept, except keys that appear in more than
    /// one input with differing values. Conflicts never raise: attributes
    /// are provenance, not data.
    pub fn drop_conflicts<'a>(inputs: impl IntoIterator<Item = &'a Attrs>) -> Attrs {
        let mut combined: BTreeMap<String, Value> = BTreeMap::new();
        let mut dropped: Vec<String> = Vec::new();

        for attrs in inputs {
            for (key, value) in attrs.iter() {
                if dropped.iter().any(|d| d == key) {
                    continue;
                }
                match combined.get(key) {
                    None => {
                        combined.insert(key.clone(), value.clone());
                    }
                    Some(existing) if existing == value => {}
                    Some(_) => {
                        combined.remove(key);
                        dropped.push(key.clone());
                    }
                }
            }
        }

        Attrs(combined)
    }
}

impl FromIterator<(String, Value)> for Attrs {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drop_conflicts_keeps_agreeing_keys() {
        let mut a = Attrs::new();
        a.insert("source_id", "CCSM4");
        a.insert("scenario_id", "historical");

        let mut b = Attrs::new();
        b.insert("source_id", "CCSM4");
        b.insert("scenario_id", "rcp45");

        let combined = Attrs::drop_conflicts([&a, &b]);
        assert_eq!(combined.get_str("source_id"), Some("CCSM4"));
        assert!(combined.get("scenario_id").is_none());
    }

    #[test]
    fn test_drop_conflicts_keeps_one_sided_keys() {
        let mut a = Attrs::new();
        a.insert("name", "pattern1");
        let b = Attrs::new();

        let combined = Attrs::drop_conflicts([&a, &b]);
        assert_eq!(combined.get_str("name"), Some("pattern1"));
    }

    #[test]
    fn test_drop_conflicts_non_string_values() {
        let mut a = Attrs::new();
        a.insert("uris", json!(["u1", "u2"]));
        let mut b = Attrs::new();
        b.insert("uris", json!(["u3"]));

        let combined = Attrs::drop_conflicts([&a, &b]);
        assert!(combined.get("uris").is_none());
    }
}

//! # Plugin descriptor records.
//!
//! A [`PluginDescriptor`] is one entry of the broker's tooling list. The relay does
//! not interpret descriptor fields; it keeps the JSON object as received (key order
//! included) and hands it to consumers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque plugin/tooling record decoded from the broker's tooling payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginDescriptor(Map<String, Value>);

impl PluginDescriptor {
    /// Wraps an already-parsed JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// `id` field, if present and a string.
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// `name` field, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// `version` field, if present and a string.
    pub fn version(&self) -> Option<&str> {
        self.str_field("version")
    }

    /// Raw access to any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All fields in received order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwraps into the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let d: PluginDescriptor = serde_json::from_str(
            r#"{"id":"redhat/java/1.0","name":"java","version":"1.0","endpoints":[]}"#,
        )
        .unwrap();
        assert_eq!(d.id(), Some("redhat/java/1.0"));
        assert_eq!(d.name(), Some("java"));
        assert_eq!(d.version(), Some("1.0"));
        assert_eq!(d.get("endpoints"), Some(&Value::Array(vec![])));
    }

    #[test]
    fn test_non_string_id_is_none() {
        let d: PluginDescriptor = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(d.id(), None);
        assert_eq!(d.get("id"), Some(&Value::from(7)));
    }

    #[test]
    fn test_field_order_is_preserved() {
        let d: PluginDescriptor = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let keys: Vec<&str> = d.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<PluginDescriptor>("\"p1\"").is_err());
        assert!(serde_json::from_str::<PluginDescriptor>("[]").is_err());
    }
}

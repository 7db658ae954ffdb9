use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// Declarative record handed over by the host for a single resource
/// instance: the attribute values plus the identifier slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    id: Option<String>,
    #[serde(default)]
    attributes: HashMap<String, serde_json::Value>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(attributes: HashMap<String, serde_json::Value>) -> Self {
        Self {
            id: None,
            attributes,
        }
    }

    /// Current identifier; an empty string counts as unset.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.id = if id.is_empty() { None } else { Some(id) };
    }

    /// Drops the identifier, telling the host the record no longer exists.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    pub fn is_new(&self) -> bool {
        self.id().is_none()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    /// String attribute, or `""` when absent or not a string.
    pub fn get_str(&self, key: &str) -> &str {
        self.attributes
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    pub fn get_map(&self, key: &str) -> HashMap<String, String> {
        self.attributes
            .get(key)
            .and_then(|v| v.as_object())
            .map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: serde_json::Value) {
        self.attributes.insert(key.to_string(), value);
    }

    pub fn attributes(&self) -> &HashMap<String, serde_json::Value> {
        &self.attributes
    }
}

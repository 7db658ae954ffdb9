use serde::{
    Deserialize,
    Serialize,
};

use crate::data::ResourceData;
use crate::error::{
    ProviderError,
    ProviderResult,
};

/// Value type of a resource attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Single string value
    String,
    /// String-to-string mapping
    Map,
}

impl FieldType {
    fn accepts(&self, value: &serde_json::Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Map => value
                .as_object()
                .map(|obj| obj.values().all(|v| v.is_string()))
                .unwrap_or(false),
        }
    }
}

/// A single attribute definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaField {
    /// Attribute key (used in the resource record)
    pub key: String,
    /// Attribute description/help text
    pub description: Option<String>,
    /// Attribute type
    pub field_type: FieldType,
    /// Must be supplied by the user
    pub required: bool,
    /// May be supplied by the user
    pub optional: bool,
    /// May be filled in by the provider
    pub computed: bool,
    /// Value must never be displayed or logged
    pub sensitive: bool,
}

impl SchemaField {
    pub fn required(key: &str, field_type: FieldType) -> Self {
        Self {
            key: key.to_string(),
            description: None,
            field_type,
            required: true,
            optional: false,
            computed: false,
            sensitive: false,
        }
    }

    pub fn optional(key: &str, field_type: FieldType) -> Self {
        Self {
            required: false,
            optional: true,
            ..Self::required(key, field_type)
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Complete attribute schema for a resource type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSchema {
    /// Schema fields
    pub fields: Vec<SchemaField>,
}

impl ResourceSchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn add_field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn get_field(&self, key: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Checks that every required attribute is present and that every
    /// present attribute has the declared type.
    pub fn validate(&self, data: &ResourceData) -> ProviderResult<()> {
        for field in &self.fields {
            match data.get(&field.key) {
                None | Some(serde_json::Value::Null) => {
                    if field.required {
                        return Err(ProviderError::InvalidConfig(format!(
                            "Missing required attribute: {}",
                            field.key
                        )));
                    }
                }
                Some(value) => {
                    if !field.field_type.accepts(value) {
                        return Err(ProviderError::InvalidConfig(format!(
                            "Attribute {} must be of type {:?}",
                            field.key, field.field_type
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for ResourceSchema {
    fn default() -> Self {
        Self::new()
    }
}

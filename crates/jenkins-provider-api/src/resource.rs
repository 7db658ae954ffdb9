use async_trait::async_trait;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data::ResourceData;
use crate::error::ProviderResult;
use crate::schema::ResourceSchema;

/// Resource metadata - describes a resource type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMetadata {
    /// Resource type name (e.g., "jenkins_credential")
    pub type_name: String,
    /// Resource description
    pub description: String,
    /// Attribute schema
    pub schema: ResourceSchema,
}

/// Lifecycle contract every resource implements. The host calls these
/// to converge remote state on the declared record; each call mutates
/// the identifier slot and/or returns an error.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Get resource metadata
    fn metadata(&self) -> &ResourceMetadata;

    /// Check whether the remote object behind the record still exists.
    /// Clears the identifier when it does not.
    async fn exists(&self, data: &mut ResourceData) -> ProviderResult<bool>;

    /// Create the remote object and assign the identifier
    async fn create(&self, data: &mut ResourceData) -> ProviderResult<()>;

    /// Refresh the record from the remote object
    async fn read(&self, data: &mut ResourceData) -> ProviderResult<()>;

    /// Overwrite the remote object with the declared attributes
    async fn update(&self, data: &mut ResourceData) -> ProviderResult<()>;

    /// Remove the remote object and clear the identifier
    async fn delete(&self, data: &mut ResourceData) -> ProviderResult<()>;

    /// Get the resource type string
    fn type_name(&self) -> &str {
        &self.metadata().type_name
    }

    fn schema(&self) -> &ResourceSchema {
        &self.metadata().schema
    }
}

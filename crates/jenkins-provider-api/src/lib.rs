pub mod data;
pub mod error;
pub mod registry;
pub mod resource;
pub mod schema;

pub use data::ResourceData;
pub use error::{
    ProviderError,
    ProviderResult,
};
pub use registry::ResourceRegistry;
pub use resource::{
    Resource,
    ResourceMetadata,
};
pub use schema::{
    FieldType,
    ResourceSchema,
    SchemaField,
};

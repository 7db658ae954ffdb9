//! Jenkins credential resources
//!
//! This crate manages Jenkins credentials declaratively, as two resource
//! types:
//! - `jenkins_credential` - username with password
//! - `jenkins_credential_secret` - secret text
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - `provider` - Provider bootstrap and resource registration
//! - `resource` - Credential lifecycle (exists/create/read/update/delete)
//! - `client` - Jenkins credentials API client
//! - `store` - Credential store trait and in-memory store
//! - `types` - Credential payloads and API response types
//! - `mapper` - Resource record to payload mapping
//! - `metadata` - Resource type names and schemas
//! - `id` - Credential identifier generation
//! - `config` - Configuration parsing
//! - `logging` - tracing subscriber setup for hosts
//!
//! # Example Usage
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use jenkins_provider_api::ResourceRegistry;
//! use jenkins_provider_credentials::{
//!     logging,
//!     JenkinsProvider,
//! };
//!
//! logging::init();
//!
//! let config = HashMap::from([
//!     ("server_url".to_string(), "https://jenkins.example.com".to_string()),
//!     ("username".to_string(), "admin".to_string()),
//!     ("token".to_string(), "api-token".to_string()),
//! ]);
//!
//! let provider = JenkinsProvider::configure(config).unwrap();
//! let mut registry = ResourceRegistry::new();
//! provider.register(&mut registry);
//! ```

mod client;
mod config;
mod id;
pub mod logging;
mod mapper;
mod metadata;
mod provider;
mod resource;
mod store;
mod types;

pub use client::JenkinsClient;
pub use config::{
    CredentialSettings,
    ExistsPolicy,
    ProviderConfig,
    DEFAULT_DOMAIN,
    DEFAULT_SCOPE,
};
pub use id::{
    IdGenerator,
    UuidGenerator,
};
pub use metadata::{
    CREDENTIAL_RESOURCE,
    SECRET_RESOURCE,
};
pub use provider::JenkinsProvider;
pub use resource::{
    CredentialKind,
    CredentialResource,
    Secret,
    SecretResource,
    UsernamePassword,
    UsernamePasswordResource,
};
pub use store::{
    CredentialStore,
    MemoryCredentialStore,
};
pub use types::{
    Credential,
    CredentialInfo,
    StringCredentials,
    UsernameCredentials,
};

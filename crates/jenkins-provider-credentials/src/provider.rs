//! Jenkins provider bootstrap

use std::collections::HashMap;
use std::sync::Arc;

use jenkins_provider_api::*;
use tracing::info;

use crate::client::JenkinsClient;
use crate::config::{
    CredentialSettings,
    ProviderConfig,
};
use crate::id::{
    IdGenerator,
    UuidGenerator,
};
use crate::resource::{
    CredentialResource,
    SecretResource,
    UsernamePasswordResource,
};
use crate::store::CredentialStore;

/// Jenkins provider for managing credentials
pub struct JenkinsProvider {
    store: Arc<dyn CredentialStore>,
    client: Option<Arc<JenkinsClient>>,
    ids: Arc<dyn IdGenerator>,
    settings: CredentialSettings,
}

impl JenkinsProvider {
    /// Builds a provider talking to the Jenkins server named in `config`
    pub fn configure(config: HashMap<String, String>) -> ProviderResult<Self> {
        Self::from_config(ProviderConfig::from_map(&config)?)
    }

    pub fn from_config(config: ProviderConfig) -> ProviderResult<Self> {
        let client = Arc::new(JenkinsClient::from_config(&config)?);

        info!(
            "Configured Jenkins provider for {} (domain {:?}, scope {:?})",
            config.server_url, config.settings.domain, config.settings.scope
        );

        Ok(Self {
            store: client.clone(),
            client: Some(client),
            ids: Arc::new(UuidGenerator),
            settings: config.settings,
        })
    }

    /// Builds a provider on top of an arbitrary credential store
    pub fn with_store(store: Arc<dyn CredentialStore>, settings: CredentialSettings) -> Self {
        Self {
            store,
            client: None,
            ids: Arc::new(UuidGenerator),
            settings,
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn settings(&self) -> &CredentialSettings {
        &self.settings
    }

    pub async fn validate_credentials(&self) -> ProviderResult<bool> {
        match &self.client {
            Some(client) => client.validate_credentials().await,
            None => Err(ProviderError::NotSupported(
                "Credential validation requires a Jenkins server".to_string(),
            )),
        }
    }

    pub fn credential_resource(&self) -> UsernamePasswordResource {
        CredentialResource::new(self.store.clone(), self.ids.clone(), self.settings.clone())
    }

    pub fn secret_resource(&self) -> SecretResource {
        CredentialResource::new(self.store.clone(), self.ids.clone(), self.settings.clone())
    }

    /// Registers `jenkins_credential` and `jenkins_credential_secret`
    pub fn register(&self, registry: &mut ResourceRegistry) {
        registry.register(Box::new(self.credential_resource()));
        registry.register(Box::new(self.secret_resource()));
    }
}

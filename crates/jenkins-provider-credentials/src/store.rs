use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use jenkins_provider_api::{
    ProviderError,
    ProviderResult,
};

use crate::types::{
    Credential,
    CredentialInfo,
};

/// Remote credential store, addressed by (domain, id)
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn add(&self, domain: &str, credential: &Credential) -> ProviderResult<()>;

    async fn get_single(&self, domain: &str, id: &str) -> ProviderResult<CredentialInfo>;

    async fn update(&self, domain: &str, id: &str, credential: &Credential) -> ProviderResult<()>;

    async fn delete(&self, domain: &str, id: &str) -> ProviderResult<()>;
}

type StoreKey = (String, String);

/// In-process store holding full payloads
pub struct MemoryCredentialStore {
    credentials: RwLock<HashMap<StoreKey, Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            credentials: RwLock::new(HashMap::new()),
        }
    }

    /// Stored payload, secrets included
    pub fn get_credential(&self, domain: &str, id: &str) -> Option<Credential> {
        self.credentials
            .read()
            .ok()
            .and_then(|credentials| credentials.get(&key(domain, id)).cloned())
    }

    pub fn len(&self) -> usize {
        self.credentials.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

fn key(domain: &str, id: &str) -> StoreKey {
    (domain.to_string(), id.to_string())
}

fn poisoned<E: std::fmt::Display>(e: E) -> ProviderError {
    ProviderError::Internal(format!("Lock poisoned: {}", e))
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn add(&self, domain: &str, credential: &Credential) -> ProviderResult<()> {
        let mut credentials = self.credentials.write().map_err(poisoned)?;
        let key = key(domain, credential.id());
        if credentials.contains_key(&key) {
            return Err(ProviderError::ApiError(format!(
                "Credential {} already exists in domain {}",
                credential.id(),
                domain
            )));
        }
        credentials.insert(key, credential.clone());
        Ok(())
    }

    async fn get_single(&self, domain: &str, id: &str) -> ProviderResult<CredentialInfo> {
        let credentials = self.credentials.read().map_err(poisoned)?;
        credentials
            .get(&key(domain, id))
            .map(Credential::info)
            .ok_or_else(|| ProviderError::CredentialNotFound(id.to_string()))
    }

    async fn update(&self, domain: &str, id: &str, credential: &Credential) -> ProviderResult<()> {
        let mut credentials = self.credentials.write().map_err(poisoned)?;
        match credentials.get_mut(&key(domain, id)) {
            Some(existing) => {
                *existing = credential.clone();
                Ok(())
            }
            None => Err(ProviderError::CredentialNotFound(id.to_string())),
        }
    }

    async fn delete(&self, domain: &str, id: &str) -> ProviderResult<()> {
        let mut credentials = self.credentials.write().map_err(poisoned)?;
        credentials
            .remove(&key(domain, id))
            .map(|_| ())
            .ok_or_else(|| ProviderError::CredentialNotFound(id.to_string()))
    }
}

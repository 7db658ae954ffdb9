//! Credential resource lifecycle

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use jenkins_provider_api::*;
use serde_json::json;
use tracing::{
    debug,
    error,
    warn,
};

use crate::config::{
    CredentialSettings,
    ExistsPolicy,
};
use crate::id::IdGenerator;
use crate::store::CredentialStore;
use crate::types::{
    Credential,
    CredentialInfo,
    STRING_TYPE,
    USERNAME_PASSWORD_TYPE,
};
use crate::{
    mapper,
    metadata,
};

/// Per-kind behaviour of a credential resource
pub trait CredentialKind: Send + Sync + 'static {
    /// `typeName` of the remote record this kind manages
    const TYPE_NAME: &'static str;

    fn metadata() -> ResourceMetadata;

    /// Full payload for `id` built from the declared attributes
    fn build(id: &str, scope: &str, data: &ResourceData) -> Credential;

    /// Name used in log lines; never a secret
    fn label<'a>(id: &'a str, data: &'a ResourceData) -> &'a str;

    fn after_create(_data: &mut ResourceData) {}
}

pub struct UsernamePassword;

impl CredentialKind for UsernamePassword {
    const TYPE_NAME: &'static str = USERNAME_PASSWORD_TYPE;

    fn metadata() -> ResourceMetadata {
        metadata::username_password_metadata()
    }

    fn build(id: &str, scope: &str, data: &ResourceData) -> Credential {
        mapper::username_credentials(id, scope, data)
    }

    fn label<'a>(_id: &'a str, data: &'a ResourceData) -> &'a str {
        data.get_str("username")
    }

    fn after_create(data: &mut ResourceData) {
        let username = data.get_str("username").to_string();
        data.set("username", json!(username));
    }
}

pub struct Secret;

impl CredentialKind for Secret {
    const TYPE_NAME: &'static str = STRING_TYPE;

    fn metadata() -> ResourceMetadata {
        metadata::secret_metadata()
    }

    fn build(id: &str, scope: &str, data: &ResourceData) -> Credential {
        mapper::string_credentials(id, scope, data)
    }

    fn label<'a>(id: &'a str, _data: &'a ResourceData) -> &'a str {
        id
    }
}

pub type UsernamePasswordResource = CredentialResource<UsernamePassword>;
pub type SecretResource = CredentialResource<Secret>;

/// Converges one Jenkins credential on its declared record
pub struct CredentialResource<K> {
    metadata: ResourceMetadata,
    store: Arc<dyn CredentialStore>,
    ids: Arc<dyn IdGenerator>,
    settings: CredentialSettings,
    _kind: PhantomData<fn() -> K>,
}

impl<K: CredentialKind> CredentialResource<K> {
    pub fn new(
        store: Arc<dyn CredentialStore>, ids: Arc<dyn IdGenerator>, settings: CredentialSettings,
    ) -> Self {
        Self {
            metadata: K::metadata(),
            store,
            ids,
            settings,
            _kind: PhantomData,
        }
    }

    pub fn settings(&self) -> &CredentialSettings {
        &self.settings
    }

    /// Rejects a remote record of another credential kind
    fn check_kind(info: &CredentialInfo) -> ProviderResult<()> {
        if info.type_name == K::TYPE_NAME {
            Ok(())
        } else {
            Err(ProviderError::ApiError(format!(
                "Credential {} is a {:?} credential, expected {:?}",
                info.id, info.type_name, K::TYPE_NAME
            )))
        }
    }

    fn require_id(data: &ResourceData) -> ProviderResult<String> {
        data.id()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::InvalidConfig("resource has no id".to_string()))
    }
}

#[async_trait]
impl<K: CredentialKind> Resource for CredentialResource<K> {
    fn metadata(&self) -> &ResourceMetadata {
        &self.metadata
    }

    async fn exists(&self, data: &mut ResourceData) -> ProviderResult<bool> {
        let Some(id) = data.id().map(str::to_string) else {
            return Ok(false);
        };
        let label = K::label(&id, data).to_string();

        let lookup = self
            .store
            .get_single(&self.settings.domain, &id)
            .await
            .and_then(|info| {
                // A record of the other kind is not the credential this
                // resource manages.
                Self::check_kind(&info).map_err(|_| ProviderError::CredentialNotFound(id.clone()))
            });

        match lookup {
            Ok(()) => {
                debug!("jenkins::exists - credential {label:?} exists");
                Ok(true)
            }
            Err(e) if self.settings.exists_policy == ExistsPolicy::Strict && !e.is_not_found() => {
                warn!("jenkins::exists - lookup of credential {label:?} failed: {e}");
                Err(e)
            }
            Err(e) => {
                debug!("jenkins::exists - credential {label:?} does not exist: {e}");
                data.clear_id();
                Ok(false)
            }
        }
    }

    async fn create(&self, data: &mut ResourceData) -> ProviderResult<()> {
        self.metadata.schema.validate(data)?;

        let id = self.ids.generate();
        let credential = K::build(&id, &self.settings.scope, data);
        let label = K::label(&id, data).to_string();

        if let Err(e) = self.store.add(&self.settings.domain, &credential).await {
            error!("jenkins::create - error creating credential for {label:?}: {e}");
            return Err(e);
        }

        debug!("jenkins::create - credential {label:?} created");

        data.set_id(id);
        K::after_create(data);
        Ok(())
    }

    async fn read(&self, data: &mut ResourceData) -> ProviderResult<()> {
        let id = Self::require_id(data)?;
        let label = K::label(&id, data).to_string();

        debug!("jenkins::read - looking for credential {label:?}");

        let info = match self.store.get_single(&self.settings.domain, &id).await {
            Ok(info) => info,
            Err(e) => {
                debug!("jenkins::read - credential {label:?} does not exist: {e}");
                return Err(e);
            }
        };

        if let Err(e) = Self::check_kind(&info) {
            warn!("jenkins::read - credential {label:?} has the wrong kind: {e}");
            return Err(e);
        }

        debug!("jenkins::read - credential {label:?} exists");

        data.set_id(id);
        Ok(())
    }

    async fn update(&self, data: &mut ResourceData) -> ProviderResult<()> {
        self.metadata.schema.validate(data)?;

        let id = Self::require_id(data)?;
        let credential = K::build(&id, &self.settings.scope, data);
        let label = K::label(&id, data).to_string();

        if let Err(e) = self.store.update(&self.settings.domain, &id, &credential).await {
            debug!("jenkins::update - credential {label:?} could not be updated: {e}");
            return Err(e);
        }

        data.set_id(id);
        Ok(())
    }

    async fn delete(&self, data: &mut ResourceData) -> ProviderResult<()> {
        let Some(id) = data.id().map(str::to_string) else {
            return Ok(());
        };

        debug!("jenkins::delete - deleting credential {id:?}");

        let result = self.store.delete(&self.settings.domain, &id).await;

        // The local record is dropped even when the remote call failed.
        data.clear_id();

        if let Err(ref e) = result {
            warn!("jenkins::delete - credential {id:?} may still exist remotely: {e}");
        }

        result
    }
}

//! Jenkins credentials API client

use async_trait::async_trait;
use jenkins_provider_api::{
    ProviderError,
    ProviderResult,
};
use reqwest::header::{
    HeaderMap,
    HeaderValue,
    AUTHORIZATION,
};
use reqwest::{
    Client,
    Response,
    StatusCode,
};
use secrecy::ExposeSecret;
use serde_json::json;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::store::CredentialStore;
use crate::types::{
    Credential,
    CredentialInfo,
};

const ERROR_PREVIEW_LEN: usize = 300;

/// Jenkins credentials API client bound to the system credential store
pub struct JenkinsClient {
    pub(crate) client: Client,
    server_url: String,
}

impl JenkinsClient {
    pub fn new(client: Client, server_url: String) -> Self {
        Self { client, server_url }
    }

    /// Builds an HTTP client with basic auth derived from the provider
    /// configuration.
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        install_crypto_provider();

        let auth_value = format!("{}:{}", config.username, config.token.expose_secret());
        let auth_header = format!(
            "Basic {}",
            base64::Engine::encode(
                &base64::engine::general_purpose::STANDARD,
                auth_value.as_bytes()
            )
        );

        let mut auth = HeaderValue::from_str(&auth_header)
            .map_err(|e| ProviderError::InvalidConfig(format!("Invalid auth format: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent(concat!("jenkins-provider/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::new(http_client, config.server_url.clone()))
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn domain_url(&self, domain: &str) -> String {
        format!(
            "{}/credentials/store/system/domain/{}",
            self.server_url,
            urlencoding::encode(domain)
        )
    }

    fn credential_url(&self, domain: &str, id: &str, action: &str) -> String {
        format!(
            "{}/credential/{}/{}",
            self.domain_url(domain),
            urlencoding::encode(id),
            action
        )
    }

    /// Checks that the server is reachable and accepts the configured
    /// credentials
    pub async fn validate_credentials(&self) -> ProviderResult<bool> {
        let url = format!("{}/api/json", self.server_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(format!("Failed to connect: {e}")))?;

        if response.status().is_success() {
            Ok(true)
        } else if response.status() == 401 || response.status() == 403 {
            Err(ProviderError::AuthenticationFailed(
                "Invalid Jenkins credentials".to_string(),
            ))
        } else {
            Err(ProviderError::ApiError(format!(
                "API error: {}",
                response.status()
            )))
        }
    }

    async fn post_form(&self, url: &str, form: &[(&str, String)]) -> ProviderResult<Response> {
        debug!("[JENKINS] POST {url}");

        self.client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(format!("Request to {url} failed: {e}")))
    }

    /// A 404 under a credential URL means a missing credential only when
    /// the domain itself still answers.
    async fn classify_not_found(&self, domain: &str, id: &str) -> ProviderError {
        let url = format!("{}/api/json", self.domain_url(domain));

        match self.client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::NOT_FOUND => {
                ProviderError::ApiError(format!(
                    "Credential domain {domain:?} not found on {}",
                    self.server_url
                ))
            }
            _ => ProviderError::CredentialNotFound(id.to_string()),
        }
    }

    async fn checked(
        &self, response: Response, domain: &str, id: &str, action: &str,
    ) -> ProviderResult<Response> {
        match check_response(response, id, action).await {
            Err(e) if e.is_not_found() => Err(self.classify_not_found(domain, id).await),
            other => other,
        }
    }
}

/// Installs the ring crypto provider for rustls unless one is already set
fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Maps a non-success response to the provider error taxonomy
async fn check_response(response: Response, id: &str, action: &str) -> ProviderResult<Response> {
    let status = response.status();

    if status.is_success() || status == StatusCode::FOUND {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(ProviderError::CredentialNotFound(id.to_string()));
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ProviderError::AuthenticationFailed(format!(
            "Jenkins rejected {action} for credential {id}: HTTP {status}"
        )));
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    let detail = if error_text.contains("<!DOCTYPE html>") || error_text.contains("<html") {
        "Check the Jenkins log for details".to_string()
    } else if error_text.len() > ERROR_PREVIEW_LEN {
        let cut = (0..=ERROR_PREVIEW_LEN)
            .rev()
            .find(|i| error_text.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}...", &error_text[..cut])
    } else {
        error_text
    };

    Err(ProviderError::ApiError(format!(
        "Failed to {action} credential {id}: HTTP {status}: {detail}"
    )))
}

#[async_trait]
impl CredentialStore for JenkinsClient {
    async fn add(&self, domain: &str, credential: &Credential) -> ProviderResult<()> {
        let url = format!("{}/createCredentials", self.domain_url(domain));
        let body = json!({
            "": "0",
            "credentials": credential.to_payload(),
        });

        let response = self.post_form(&url, &[("json", body.to_string())]).await?;
        self.checked(response, domain, credential.id(), "create")
            .await?;
        Ok(())
    }

    async fn get_single(&self, domain: &str, id: &str) -> ProviderResult<CredentialInfo> {
        let url = self.credential_url(domain, id, "api/json");
        debug!("[JENKINS] GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(format!("Request to {url} failed: {e}")))?;

        let info: CredentialInfo = self
            .checked(response, domain, id, "read")
            .await?
            .json()
            .await
            .map_err(|e| {
                ProviderError::SerializationError(format!("Failed to parse credential {id}: {e}"))
            })?;

        Ok(info)
    }

    async fn update(&self, domain: &str, id: &str, credential: &Credential) -> ProviderResult<()> {
        let url = self.credential_url(domain, id, "updateSubmit");
        let body = credential.to_payload();

        let response = self.post_form(&url, &[("json", body.to_string())]).await?;
        self.checked(response, domain, id, "update").await?;
        Ok(())
    }

    async fn delete(&self, domain: &str, id: &str) -> ProviderResult<()> {
        let url = self.credential_url(domain, id, "doDelete");

        let response = self.post_form(&url, &[]).await?;
        self.checked(response, domain, id, "delete").await?;
        Ok(())
    }
}

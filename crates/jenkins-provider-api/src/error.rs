use thiserror::Error;

/// Provider error types
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Credential not found: {0}")]
    CredentialNotFound(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Operation not supported: {0}")]
    NotSupported(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProviderError {
    /// True when the store answered definitively that the record is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::CredentialNotFound(_))
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

// Conversion from serde_json errors
impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::SerializationError(err.to_string())
    }
}

use std::collections::HashMap;
use std::time::Duration;

use jenkins_provider_api::{
    ProviderError,
    ProviderResult,
};
use secrecy::SecretString;

/// Global, unscoped credential domain
pub const DEFAULT_DOMAIN: &str = "_";
pub const DEFAULT_SCOPE: &str = "GLOBAL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How `exists` treats a failed lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistsPolicy {
    /// Any lookup failure means the credential is gone
    #[default]
    Lenient,
    /// Only a not-found answer means the credential is gone; other
    /// failures are returned to the host
    Strict,
}

impl ExistsPolicy {
    fn parse(value: &str) -> ProviderResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ExistsPolicy::Lenient),
            "strict" => Ok(ExistsPolicy::Strict),
            other => Err(ProviderError::InvalidConfig(format!(
                "Unknown exists_policy {other:?}, expected \"lenient\" or \"strict\""
            ))),
        }
    }
}

/// Where credentials live and how lookups are judged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSettings {
    pub domain: String,
    pub scope: String,
    pub exists_policy: ExistsPolicy,
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            exists_policy: ExistsPolicy::default(),
        }
    }
}

/// Provider-level configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub server_url: String,
    pub username: String,
    pub token: SecretString,
    pub timeout: Duration,
    pub settings: CredentialSettings,
}

impl ProviderConfig {
    /// Parses the provider block, falling back to `JENKINS_URL`,
    /// `JENKINS_USERNAME` and `JENKINS_TOKEN` for missing connection keys.
    pub fn from_map(config: &HashMap<String, String>) -> ProviderResult<Self> {
        Self::from_map_with_env(config, |name| std::env::var(name).ok())
    }

    pub(crate) fn from_map_with_env<F>(config: &HashMap<String, String>, env: F) -> ProviderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str, env_name: &str| {
            config
                .get(key)
                .cloned()
                .filter(|v| !v.trim().is_empty())
                .or_else(|| env(env_name).filter(|v| !v.trim().is_empty()))
        };

        let server_url = lookup("server_url", "JENKINS_URL")
            .ok_or_else(|| ProviderError::InvalidConfig("Missing server_url".to_string()))?
            .trim_end_matches('/')
            .to_string();

        let username = lookup("username", "JENKINS_USERNAME")
            .ok_or_else(|| ProviderError::InvalidConfig("Missing Jenkins username".to_string()))?;

        let token = lookup("token", "JENKINS_TOKEN")
            .ok_or_else(|| ProviderError::InvalidConfig("Missing Jenkins API token".to_string()))?;

        let timeout_secs = match config.get("timeout_secs") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ProviderError::InvalidConfig(format!("Invalid timeout_secs {raw:?}: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let exists_policy = match config.get("exists_policy") {
            Some(raw) => ExistsPolicy::parse(raw)?,
            None => ExistsPolicy::default(),
        };

        let settings = CredentialSettings {
            domain: non_empty_or(config.get("domain"), DEFAULT_DOMAIN),
            scope: non_empty_or(config.get("scope"), DEFAULT_SCOPE),
            exists_policy,
        };

        Ok(Self {
            server_url,
            username,
            token: SecretString::from(token),
            timeout: Duration::from_secs(timeout_secs),
            settings,
        })
    }
}

fn non_empty_or(value: Option<&String>, default: &str) -> String {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn base_config() -> HashMap<String, String> {
        HashMap::from([
            ("server_url".to_string(), "https://jenkins.example.com/".to_string()),
            ("username".to_string(), "admin".to_string()),
            ("token".to_string(), "api-token".to_string()),
        ])
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::from_map_with_env(&base_config(), no_env).unwrap();

        assert_eq!(config.server_url, "https://jenkins.example.com");
        assert_eq!(config.username, "admin");
        assert_eq!(config.token.expose_secret(), "api-token");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.settings, CredentialSettings::default());
        assert_eq!(config.settings.domain, "_");
        assert_eq!(config.settings.scope, "GLOBAL");
    }

    #[test]
    fn test_overrides() {
        let mut raw = base_config();
        raw.insert("domain".to_string(), "deploy".to_string());
        raw.insert("scope".to_string(), "SYSTEM".to_string());
        raw.insert("exists_policy".to_string(), "Strict".to_string());
        raw.insert("timeout_secs".to_string(), "5".to_string());

        let config = ProviderConfig::from_map_with_env(&raw, no_env).unwrap();

        assert_eq!(config.settings.domain, "deploy");
        assert_eq!(config.settings.scope, "SYSTEM");
        assert_eq!(config.settings.exists_policy, ExistsPolicy::Strict);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_env_fallback() {
        let raw = HashMap::from([("username".to_string(), "admin".to_string())]);
        let env = |name: &str| match name {
            "JENKINS_URL" => Some("http://ci.local:8080".to_string()),
            "JENKINS_TOKEN" => Some("from-env".to_string()),
            _ => None,
        };

        let config = ProviderConfig::from_map_with_env(&raw, env).unwrap();
        assert_eq!(config.server_url, "http://ci.local:8080");
        assert_eq!(config.token.expose_secret(), "from-env");
    }

    #[test]
    fn test_missing_token() {
        let mut raw = base_config();
        raw.remove("token");

        let err = ProviderConfig::from_map_with_env(&raw, no_env).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfig(msg) if msg.contains("token")));
    }

    #[test]
    fn test_invalid_options() {
        let mut raw = base_config();
        raw.insert("exists_policy".to_string(), "sometimes".to_string());
        assert!(ProviderConfig::from_map_with_env(&raw, no_env).is_err());

        let mut raw = base_config();
        raw.insert("timeout_secs".to_string(), "soon".to_string());
        assert!(ProviderConfig::from_map_with_env(&raw, no_env).is_err());
    }
}

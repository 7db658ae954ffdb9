//! Credential payloads and API response types for the Jenkins credentials API

use secrecy::{
    ExposeSecret,
    SecretString,
};
use serde::Deserialize;
use serde_json::json;

pub const USERNAME_PASSWORD_CLASS: &str =
    "com.cloudbees.plugins.credentials.impl.UsernamePasswordCredentialsImpl";
pub const STRING_CLASS: &str = "org.jenkinsci.plugins.plaincredentials.impl.StringCredentialsImpl";

/// `typeName` Jenkins reports for each credential class
pub const USERNAME_PASSWORD_TYPE: &str = "Username with password";
pub const STRING_TYPE: &str = "Secret text";

#[derive(Debug, Clone)]
pub struct UsernameCredentials {
    pub id: String,
    pub scope: String,
    pub description: String,
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug, Clone)]
pub struct StringCredentials {
    pub id: String,
    pub scope: String,
    pub description: String,
    pub secret: SecretString,
}

/// A credential as sent to the store
#[derive(Debug, Clone)]
pub enum Credential {
    UsernamePassword(UsernameCredentials),
    Secret(StringCredentials),
}

impl Credential {
    pub fn id(&self) -> &str {
        match self {
            Credential::UsernamePassword(c) => &c.id,
            Credential::Secret(c) => &c.id,
        }
    }

    pub fn scope(&self) -> &str {
        match self {
            Credential::UsernamePassword(c) => &c.scope,
            Credential::Secret(c) => &c.scope,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Credential::UsernamePassword(c) => &c.description,
            Credential::Secret(c) => &c.description,
        }
    }

    /// Jenkins implementation class (`$class`) of the credential
    pub fn class_name(&self) -> &'static str {
        match self {
            Credential::UsernamePassword(_) => USERNAME_PASSWORD_CLASS,
            Credential::Secret(_) => STRING_CLASS,
        }
    }

    /// Human-readable type, matching what Jenkins reports as `typeName`
    pub fn type_name(&self) -> &'static str {
        match self {
            Credential::UsernamePassword(_) => USERNAME_PASSWORD_TYPE,
            Credential::Secret(_) => STRING_TYPE,
        }
    }

    /// Structured-form payload accepted by `createCredentials` and
    /// `updateSubmit`. This is the only place secrets are exposed.
    pub fn to_payload(&self) -> serde_json::Value {
        let mut payload = json!({
            "scope": self.scope(),
            "id": self.id(),
            "description": self.description(),
            "$class": self.class_name(),
        });

        if let Some(obj) = payload.as_object_mut() {
            match self {
                Credential::UsernamePassword(c) => {
                    obj.insert("username".to_string(), json!(c.username));
                    obj.insert("password".to_string(), json!(c.password.expose_secret()));
                }
                Credential::Secret(c) => {
                    obj.insert("secret".to_string(), json!(c.secret.expose_secret()));
                }
            }
        }

        payload
    }

    /// Metadata Jenkins would report back for this credential
    pub fn info(&self) -> CredentialInfo {
        let display_name = match self {
            Credential::UsernamePassword(c) if c.description.is_empty() => {
                format!("{}/******", c.username)
            }
            Credential::UsernamePassword(c) => format!("{}/****** ({})", c.username, c.description),
            Credential::Secret(c) if c.description.is_empty() => c.id.clone(),
            Credential::Secret(c) => c.description.clone(),
        };

        CredentialInfo {
            id: self.id().to_string(),
            display_name,
            description: Some(self.description().to_string()).filter(|d| !d.is_empty()),
            type_name: self.type_name().to_string(),
            full_name: String::new(),
        }
    }
}

/// `credential/{id}/api/json` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialInfo {
    pub id: String,
    #[serde(rename = "displayName")]
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "typeName")]
    #[serde(default)]
    pub type_name: String,
    #[serde(rename = "fullName")]
    #[serde(default)]
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username_credential() -> Credential {
        Credential::UsernamePassword(UsernameCredentials {
            id: "u1".to_string(),
            scope: "GLOBAL".to_string(),
            description: "deploy user".to_string(),
            username: "alice".to_string(),
            password: SecretString::from("p1"),
        })
    }

    #[test]
    fn test_username_payload() {
        let payload = username_credential().to_payload();

        assert_eq!(payload["$class"], USERNAME_PASSWORD_CLASS);
        assert_eq!(payload["id"], "u1");
        assert_eq!(payload["scope"], "GLOBAL");
        assert_eq!(payload["username"], "alice");
        assert_eq!(payload["password"], "p1");
        assert_eq!(payload["description"], "deploy user");
        assert!(payload.get("secret").is_none());
    }

    #[test]
    fn test_secret_payload() {
        let credential = Credential::Secret(StringCredentials {
            id: "s1".to_string(),
            scope: "GLOBAL".to_string(),
            description: String::new(),
            secret: SecretString::from("hunter2"),
        });
        let payload = credential.to_payload();

        assert_eq!(payload["$class"], STRING_CLASS);
        assert_eq!(payload["secret"], "hunter2");
        assert_eq!(payload["description"], "");
        assert!(payload.get("password").is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", username_credential());
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("\"p1\""));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn test_info_from_credential() {
        let info = username_credential().info();
        assert_eq!(info.id, "u1");
        assert_eq!(info.type_name, "Username with password");
        assert_eq!(info.description.as_deref(), Some("deploy user"));
    }

    #[test]
    fn test_parse_credential_info() {
        let body = r#"{
            "_class": "com.cloudbees.plugins.credentials.CredentialsStoreAction$CredentialsWrapper",
            "description": null,
            "displayName": "alice/******",
            "fullName": "system/_/u1",
            "id": "u1",
            "typeName": "Username with password"
        }"#;

        let info: CredentialInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.id, "u1");
        assert_eq!(info.display_name, "alice/******");
        assert_eq!(info.full_name, "system/_/u1");
        assert_eq!(info.description, None);
    }
}

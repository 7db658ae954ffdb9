//! Mapping from resource records to credential payloads

use jenkins_provider_api::ResourceData;
use secrecy::SecretString;

use crate::types::{
    Credential,
    StringCredentials,
    UsernameCredentials,
};

pub(crate) fn username_credentials(id: &str, scope: &str, data: &ResourceData) -> Credential {
    Credential::UsernamePassword(UsernameCredentials {
        id: id.to_string(),
        scope: scope.to_string(),
        description: data.get_str("description").to_string(),
        username: data.get_str("username").to_string(),
        password: SecretString::from(data.get_str("password")),
    })
}

pub(crate) fn string_credentials(id: &str, scope: &str, data: &ResourceData) -> Credential {
    Credential::Secret(StringCredentials {
        id: id.to_string(),
        scope: scope.to_string(),
        description: data.get_str("description").to_string(),
        secret: SecretString::from(data.get_str("secret")),
    })
}

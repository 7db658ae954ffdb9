use jenkins_provider_api::*;

pub const CREDENTIAL_RESOURCE: &str = "jenkins_credential";
pub const SECRET_RESOURCE: &str = "jenkins_credential_secret";

pub fn username_password_metadata() -> ResourceMetadata {
    ResourceMetadata {
        type_name: CREDENTIAL_RESOURCE.to_string(),
        description: "Username with password credential in the Jenkins credential store"
            .to_string(),
        schema: username_password_schema(),
    }
}

pub fn secret_metadata() -> ResourceMetadata {
    ResourceMetadata {
        type_name: SECRET_RESOURCE.to_string(),
        description: "Secret text credential in the Jenkins credential store".to_string(),
        schema: secret_schema(),
    }
}

fn username_password_schema() -> ResourceSchema {
    ResourceSchema::new()
        .add_field(
            SchemaField::required("username", FieldType::String)
                .with_description("User name stored in the credential."),
        )
        .add_field(
            SchemaField::required("password", FieldType::String)
                .with_description("Password stored in the credential.")
                .sensitive(),
        )
        .add_field(description_field())
        // template, parameters and hash are accepted for compatibility with
        // existing configurations; no lifecycle operation reads them.
        .add_field(
            SchemaField::optional("template", FieldType::String).with_description(
                "Configuration template, inline or as an http(s):// or file:// URL.",
            ),
        )
        .add_field(
            SchemaField::optional("parameters", FieldType::Map)
                .with_description("Values substituted into the template."),
        )
        .add_field(
            SchemaField::optional("hash", FieldType::String)
                .with_description("Digest of the rendered template.")
                .computed(),
        )
}

fn secret_schema() -> ResourceSchema {
    ResourceSchema::new()
        .add_field(
            SchemaField::required("secret", FieldType::String)
                .with_description("Secret text stored in the credential.")
                .sensitive(),
        )
        .add_field(description_field())
}

fn description_field() -> SchemaField {
    SchemaField::optional("description", FieldType::String)
        .with_description("Optional description shown in the Jenkins credentials page.")
}

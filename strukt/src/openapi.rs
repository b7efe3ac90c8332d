//! OpenAPI security description records.
//!
//! Plain serializable data with optional-field semantics and no behavior;
//! the schema builder fills them in and serializes them alongside the
//! endpoint descriptions it derives from [`crate::walker`]. The `strukt`
//! tags mirror the wire names so the same records can be fed back through
//! the name resolver.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Strukt;

/// An OpenAPI `securitySchemes` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Strukt)]
pub struct SecurityScheme {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"type" yaml:"type""#)]
    pub scheme_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"description" yaml:"description""#)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"name" yaml:"name""#)]
    pub name: Option<String>,

    /// Where the key is carried: `query`, `header`, or `cookie`.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"in" yaml:"in""#)]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"scheme" yaml:"scheme""#)]
    pub scheme: Option<String>,

    #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"bearerFormat" yaml:"bearerFormat""#)]
    pub bearer_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"flows" yaml:"flows""#)]
    pub flows: Option<OAuthFlows>,

    #[serde(rename = "openIdConnectUrl", skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"openIdConnectUrl" yaml:"openIdConnectUrl""#)]
    pub open_id_connect_url: Option<String>,
}

/// Named security schemes of a document.
pub type SecuritySchemes = BTreeMap<String, SecuritySchemeRef>;

/// Either a `$ref` to a scheme defined elsewhere or an inline scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecuritySchemeRef {
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Value(SecurityScheme),
}

/// Scheme name to required scopes.
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

pub type SecurityRequirements = Vec<SecurityRequirement>;

/// Flow configurations for the four OAuth grant types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Strukt)]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"implicit" yaml:"implicit""#)]
    pub implicit: Option<OAuthFlow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"password" yaml:"password""#)]
    pub password: Option<OAuthFlow>,

    #[serde(rename = "clientCredentials", skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"clientCredentials" yaml:"clientCredentials""#)]
    pub client_credentials: Option<OAuthFlow>,

    #[serde(rename = "authorizationCode", skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"authorizationCode" yaml:"authorizationCode""#)]
    pub authorization_code: Option<OAuthFlow>,
}

/// One OAuth flow configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Strukt)]
pub struct OAuthFlow {
    #[serde(rename = "authorizationUrl", skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"authorizationUrl" yaml:"authorizationUrl""#)]
    pub authorization_url: Option<String>,

    #[serde(rename = "tokenUrl", skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"tokenUrl" yaml:"tokenUrl""#)]
    pub token_url: Option<String>,

    #[serde(rename = "refreshUrl", skip_serializing_if = "Option::is_none")]
    #[strukt(tag = r#"json:"refreshUrl" yaml:"refreshUrl""#)]
    pub refresh_url: Option<String>,

    /// Scope name to description. Always serialized, even when empty.
    #[strukt(tag = r#"json:"scopes" yaml:"scopes""#)]
    pub scopes: BTreeMap<String, String>,
}

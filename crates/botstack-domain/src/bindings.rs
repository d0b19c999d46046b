//! Computed bindings
//!
//! A computed binding carries a value only obtainable after its source
//! resource is provisioned (a generated key, a connection string, an
//! identity principal id) into a property of a dependent resource.
//! Resolution always goes through the one uniform engine operation
//! `resolve(handle, op)`; the two historical resolution styles (lookup
//! function on an identifier vs. member call on a handle) collapse here.

use crate::resources::ResourceKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-side resolution operation evaluated once during apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveOp {
    /// Public service endpoint URL
    Endpoint,
    /// Primary access key
    PrimaryKey,
    /// Full connection string
    ConnectionString,
    /// Principal id of the system-assigned identity
    PrincipalId,
    /// Default public hostname of a web application
    DefaultHostname,
}

impl ResolveOp {
    /// Whether a source resource kind can ever produce this value
    ///
    /// Used by graph validation: a binding whose op the source kind
    /// cannot satisfy is rejected before apply.
    pub const fn supported_by(self, kind: ResourceKind) -> bool {
        match self {
            Self::Endpoint => matches!(
                kind,
                ResourceKind::Vault
                    | ResourceKind::DatabaseAccount
                    | ResourceKind::SearchService
                    | ResourceKind::SpeechAccount
                    | ResourceKind::AiAccount
            ),
            Self::PrimaryKey => matches!(
                kind,
                ResourceKind::StorageAccount
                    | ResourceKind::DatabaseAccount
                    | ResourceKind::SearchService
                    | ResourceKind::SpeechAccount
                    | ResourceKind::AiAccount
            ),
            Self::ConnectionString => matches!(
                kind,
                ResourceKind::StorageAccount | ResourceKind::DatabaseAccount
            ),
            Self::PrincipalId | Self::DefaultHostname => matches!(kind, ResourceKind::WebSite),
        }
    }
}

impl fmt::Display for ResolveOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Endpoint => "endpoint",
            Self::PrimaryKey => "primary_key",
            Self::ConnectionString => "connection_string",
            Self::PrincipalId => "principal_id",
            Self::DefaultHostname => "default_hostname",
        };
        f.write_str(s)
    }
}

/// Declared intent to inject a resolved value into a target resource
///
/// For the web application the `setting` is an app-setting name; for the
/// bot registration it is the property receiving the identity principal.
/// Secret-valued bindings are routed through the vault: the resolved
/// value is written as a vault secret and the setting carries the
/// reference, never the cleartext value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedBinding {
    /// Logical name of the resource receiving the value
    pub target: String,

    /// Setting or property name on the target
    pub setting: String,

    /// Logical name of the source resource
    pub source: String,

    /// Resolution operation evaluated against the source
    pub op: ResolveOp,

    /// Route the resolved value through the vault
    pub secret: bool,
}

impl ComputedBinding {
    /// Binding injected as a plain value
    pub fn plain(
        target: impl Into<String>,
        setting: impl Into<String>,
        source: impl Into<String>,
        op: ResolveOp,
    ) -> Self {
        Self {
            target: target.into(),
            setting: setting.into(),
            source: source.into(),
            op,
            secret: false,
        }
    }

    /// Binding routed through the vault
    pub fn secret(
        target: impl Into<String>,
        setting: impl Into<String>,
        source: impl Into<String>,
        op: ResolveOp,
    ) -> Self {
        Self {
            target: target.into(),
            setting: setting.into(),
            source: source.into(),
            op,
            secret: true,
        }
    }
}

/// Materialized name/value pair in the web application's environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSetting {
    /// Environment variable name
    pub name: String,
    /// Literal value or vault reference
    pub value: String,
}

impl AppSetting {
    /// Plain setting
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Vault reference understood by the web application host
///
/// The reference is static: it only needs the vault URI and secret name,
/// both derivable from declared names, never a post-creation value.
pub fn vault_secret_reference(vault_uri: &str, secret_name: &str) -> String {
    format!(
        "@Microsoft.KeyVault(SecretUri={}secrets/{}/)",
        vault_uri, secret_name
    )
}

/// Vault secret name for a secret-routed setting
///
/// Derived, not configured, so every secret follows the same convention:
/// `AZURE_SEARCH_KEY` becomes `azure-search-key`.
pub fn vault_secret_name(setting: &str) -> String {
    setting.to_ascii_lowercase().replace('_', "-")
}

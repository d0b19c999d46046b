//! In-memory provisioning engine
//!
//! Simulates the provider control plane for planning, dry runs and
//! tests: idempotent desired-state apply over an in-process state map,
//! deterministic resolution of computed values, vault secrets stored
//! in-process. Keys and principal ids are derived from the resource
//! handle, so resolving the same value twice always agrees - which is
//! what lets re-apply report `Unchanged` across whole runs.
//!
//! Injected failures let tests exercise the partial-success contract:
//! a failing resource takes its dependents down as "skipped" while
//! independent branches complete.

use async_trait::async_trait;
use botstack_application::ports::{AppliedResource, ApplyOutcome, ProvisioningEngine};
use botstack_domain::constants::STORAGE_ENDPOINT_SUFFIX;
use botstack_domain::naming::{
    ai_endpoint_for, cognitive_endpoint_for, database_endpoint_for, search_endpoint_for,
    vault_uri_for, web_app_hostname_for,
};
use botstack_domain::{
    Error, ResolveOp, ResourceDeclaration, ResourceKind, Result, vault_secret_reference,
};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process stand-in for the provider control plane
#[derive(Debug, Default)]
pub struct InMemoryEngine {
    state: RwLock<BTreeMap<String, ResourceDeclaration>>,
    secrets: RwLock<BTreeMap<String, String>>,
    failures: BTreeSet<String>,
}

impl InMemoryEngine {
    /// Engine with empty state and no injected failures
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that rejects the named resources at apply time
    pub fn with_failures<I, S>(failures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failures: failures.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Number of resources currently provisioned
    pub async fn provisioned_count(&self) -> usize {
        self.state.read().await.len()
    }

    /// Stored value of a vault secret, if present
    pub async fn secret_value(&self, vault: &str, secret_name: &str) -> Option<String> {
        self.secrets
            .read()
            .await
            .get(&secret_key(vault, secret_name))
            .cloned()
    }
}

#[async_trait]
impl ProvisioningEngine for InMemoryEngine {
    async fn apply(&self, declaration: &ResourceDeclaration) -> Result<AppliedResource> {
        if self.failures.contains(&declaration.name) {
            return Err(Error::engine(
                &declaration.name,
                "simulated provider rejection",
            ));
        }

        let mut state = self.state.write().await;
        let outcome = match state.get(&declaration.name) {
            Some(existing) if existing == declaration => ApplyOutcome::Unchanged,
            Some(_) => ApplyOutcome::Updated,
            None => ApplyOutcome::Created,
        };
        if outcome != ApplyOutcome::Unchanged {
            state.insert(declaration.name.clone(), declaration.clone());
        }
        Ok(AppliedResource {
            name: declaration.name.clone(),
            outcome,
        })
    }

    async fn resolve(&self, handle: &str, op: ResolveOp) -> Result<String> {
        let state = self.state.read().await;
        let declaration = state
            .get(handle)
            .ok_or_else(|| Error::dependency(handle, "resource is not provisioned"))?;
        if !op.supported_by(declaration.kind) {
            return Err(Error::validation(format!(
                "operation '{}' is not resolvable on '{}'",
                op, handle
            )));
        }

        let value = match op {
            ResolveOp::Endpoint => endpoint_of(declaration),
            ResolveOp::PrimaryKey => derived_token(handle, op),
            ResolveOp::ConnectionString => connection_string_of(declaration),
            ResolveOp::PrincipalId => derived_principal_id(handle),
            ResolveOp::DefaultHostname => web_app_hostname_for(handle),
        };
        Ok(value)
    }

    async fn put_secret(&self, vault: &str, secret_name: &str, value: &str) -> Result<String> {
        if !self.state.read().await.contains_key(vault) {
            return Err(Error::dependency(vault, "vault is not provisioned"));
        }
        self.secrets
            .write()
            .await
            .insert(secret_key(vault, secret_name), value.to_string());
        Ok(vault_secret_reference(&vault_uri_for(vault), secret_name))
    }

    fn engine_name(&self) -> &str {
        "in_memory"
    }
}

fn secret_key(vault: &str, secret_name: &str) -> String {
    format!("{}/{}", vault, secret_name)
}

/// Endpoint of a provisioned resource, derived from its declared name
fn endpoint_of(declaration: &ResourceDeclaration) -> String {
    let name = declaration.name.as_str();
    match declaration.kind {
        ResourceKind::Vault => vault_uri_for(name),
        ResourceKind::DatabaseAccount => database_endpoint_for(name),
        ResourceKind::SearchService => search_endpoint_for(name),
        ResourceKind::AiAccount => ai_endpoint_for(name),
        // Validation restricts Endpoint to the kinds above plus speech
        _ => cognitive_endpoint_for(name),
    }
}

fn connection_string_of(declaration: &ResourceDeclaration) -> String {
    let name = declaration.name.as_str();
    let key = derived_token(name, ResolveOp::PrimaryKey);
    match declaration.kind {
        ResourceKind::DatabaseAccount => {
            format!(
                "AccountEndpoint={};AccountKey={};",
                database_endpoint_for(name),
                key
            )
        }
        _ => format!(
            "DefaultEndpointsProtocol=https;AccountName={};AccountKey={};EndpointSuffix={}",
            name, key, STORAGE_ENDPOINT_SUFFIX
        ),
    }
}

/// Deterministic pseudo-key: the same handle and operation always
/// resolve to the same token
fn derived_token(handle: &str, op: ResolveOp) -> String {
    let digest = Sha256::digest(format!("{}:{}", handle, op).as_bytes());
    hex::encode(digest)
}

/// Deterministic principal id in UUID form
fn derived_principal_id(handle: &str) -> String {
    let digest = Sha256::digest(format!("{}:principal", handle).as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::from_bytes(bytes).to_string()
}

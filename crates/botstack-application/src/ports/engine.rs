//! Provisioning engine port
//!
//! The engine - the cloud-provider control plane, or a simulation of it -
//! is an external collaborator. This crate owes it exactly two things:
//! accurate dependency edges, and no reference to a computed value before
//! its source resource guarantees that value exists post-creation. In
//! return the engine owes idempotent desired-state apply semantics and
//! verbatim error reporting. Retries, parallelism policy and rollback are
//! the engine's business, never authored here.

use async_trait::async_trait;
use botstack_domain::{ResolveOp, ResourceDeclaration, Result};
use serde::{Deserialize, Serialize};

/// What the engine did with one declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyOutcome {
    /// The resource did not exist and was created
    Created,
    /// The resource existed with different desired state and was replaced
    Updated,
    /// The resource already matched; applying was a no-op
    Unchanged,
}

impl std::fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        };
        f.write_str(s)
    }
}

/// Engine acknowledgement for one applied declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedResource {
    /// Logical name of the resource
    pub name: String,
    /// What the apply call did
    pub outcome: ApplyOutcome,
}

/// Contract with the external provisioning engine
///
/// # Example
///
/// ```ignore
/// use botstack_application::ports::ProvisioningEngine;
/// use botstack_domain::ResolveOp;
///
/// let applied = engine.apply(&declaration).await?;
/// let key = engine.resolve(&applied.name, ResolveOp::PrimaryKey).await?;
/// let reference = engine.put_secret("botstack-vault", "azure-search-key", &key).await?;
/// ```
#[async_trait]
pub trait ProvisioningEngine: Send + Sync {
    /// Create or update one resource to its declared desired state
    ///
    /// Must be idempotent: re-applying a matching declaration reports
    /// [`ApplyOutcome::Unchanged`] and changes nothing. Failures carry
    /// the provider error verbatim.
    async fn apply(&self, declaration: &ResourceDeclaration) -> Result<AppliedResource>;

    /// Resolve a post-creation value from a provisioned resource
    ///
    /// The single uniform resolution interface: every computed binding
    /// goes through here, whatever the underlying provider call is.
    async fn resolve(&self, handle: &str, op: ResolveOp) -> Result<String>;

    /// Write a secret into a provisioned vault
    ///
    /// Returns the reference string dependent configuration should
    /// carry instead of the cleartext value.
    async fn put_secret(&self, vault: &str, secret_name: &str, value: &str) -> Result<String>;

    /// Identifier of this engine implementation (e.g. "in_memory")
    fn engine_name(&self) -> &str;
}

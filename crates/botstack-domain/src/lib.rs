//! Domain Layer - Botstack
//!
//! Core types for the declarative provisioning model: resource
//! declarations, deployment parameters, model-deployment entries,
//! computed bindings and the fixed naming configuration.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Describes desired state, never applies it
//! - Has no dependency on configuration loading or engine adapters
//! - Owns the error taxonomy shared by every other crate
//!
//! Everything here is deterministic: the same inputs always produce the
//! same values. Values only a provisioning engine can produce (generated
//! keys, identity principal ids) are represented as [`bindings::ComputedBinding`]s
//! and resolved elsewhere.

pub mod bindings;
pub mod constants;
pub mod error;
pub mod models;
pub mod naming;
pub mod params;
pub mod resources;

pub use bindings::{
    AppSetting, ComputedBinding, ResolveOp, vault_secret_name, vault_secret_reference,
};
pub use error::{Error, Result};
pub use models::ModelDeployment;
pub use naming::ResourceNames;
pub use params::{Parameters, PlanTier};
pub use resources::{Identity, ResourceDeclaration, ResourceKind, SkuSpec};

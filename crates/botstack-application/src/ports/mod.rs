//! Ports (interfaces) for external collaborators

pub mod engine;

pub use engine::{AppliedResource, ApplyOutcome, ProvisioningEngine};

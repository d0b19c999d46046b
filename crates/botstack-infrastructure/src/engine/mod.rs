//! Provisioning engine adapters
//!
//! Real creation and update of cloud resources belongs to the provider
//! control plane; this module holds the adapters that stand in for it.

pub mod in_memory;

pub use in_memory::InMemoryEngine;

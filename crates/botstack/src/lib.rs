//! Botstack - declarative provisioner for an AI chat-bot stack
//!
//! Facade crate: re-exports the layered crates and hosts the command
//! implementations the CLI binary dispatches to.
//!
//! ## Layers
//!
//! - [`botstack_domain`]: resource declarations, parameters, bindings
//! - [`botstack_application`]: graph builder, validation, plan/apply
//! - [`botstack_infrastructure`]: configuration, logging, engine adapters

pub use botstack_application as application;
pub use botstack_domain as domain;
pub use botstack_infrastructure as infrastructure;

pub mod commands;

pub use commands::{ValidationReport, apply, load_config, plan, validate};

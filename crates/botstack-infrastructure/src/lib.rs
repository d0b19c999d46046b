//! Infrastructure Layer - Botstack
//!
//! Cross-cutting technical concerns:
//! - `config`: figment-based configuration loading and validation
//! - `logging`: tracing bootstrap (env filter, JSON output, file output)
//! - `error_ext`: context extension methods over the domain errors
//! - `engine`: provisioning-engine adapters (the in-memory simulator)
//!
//! Nothing here owns business rules; everything delegates to the domain
//! and application layers.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
pub use engine::InMemoryEngine;
pub use error_ext::ErrorContext;

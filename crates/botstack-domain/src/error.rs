//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Botstack
///
/// Mirrors the failure classes of a provisioning run: validation before
/// apply, naming conflicts, provider quota rejections, unresolved
/// computed bindings and verbatim engine failures. No variant is ever
/// retried or suppressed locally - every failure is fatal for the
/// affected resource.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter or graph validation failed before any resource was touched
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// A logical name is already in use by an incompatible declaration
    #[error("Naming conflict: {name}")]
    NamingConflict {
        /// The conflicting logical name
        name: String,
    },

    /// The provider rejected a resource for quota or capacity reasons
    #[error("Quota error: {message}")]
    Quota {
        /// Description of the quota failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A computed binding could not be resolved
    #[error("Dependency resolution error for '{resource}': {message}")]
    DependencyResolution {
        /// The resource whose binding failed
        resource: String,
        /// Description of the resolution failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Verbatim failure reported by the provisioning engine
    #[error("Engine error for '{resource}': {message}")]
    Engine {
        /// The resource the engine rejected
        resource: String,
        /// The underlying provider error, verbatim
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Build a validation error from any displayable message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Build a dependency-resolution error for a named resource
    pub fn dependency(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DependencyResolution {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Build an engine error carrying the provider message verbatim
    pub fn engine(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Engine {
            resource: resource.into(),
            message: message.into(),
            source: None,
        }
    }
}

//! Model-deployment entries
//!
//! One entry per AI model exposed by the generative-AI account. Entries
//! are iterated by the graph builder to produce one child resource each.

use crate::constants::{DEFAULT_MODEL_CAPACITY, MODEL_VERSION_LATEST};
use serde::{Deserialize, Serialize};

/// Desired model deployment on the generative-AI account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDeployment {
    /// Deployment name, unique per account
    pub name: String,

    /// Model identifier (e.g. `gpt-4o`)
    pub model: String,

    /// Model version; `"latest"` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Scale capacity in provider units
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

const fn default_capacity() -> u32 {
    DEFAULT_MODEL_CAPACITY
}

impl ModelDeployment {
    /// Entry with an explicit version
    pub fn versioned(
        name: impl Into<String>,
        model: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            version: Some(version.into()),
            capacity: DEFAULT_MODEL_CAPACITY,
        }
    }

    /// Entry without a version, resolving to `"latest"`
    pub fn latest(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            version: None,
            capacity: DEFAULT_MODEL_CAPACITY,
        }
    }

    /// Version the deployment resolves to
    pub fn resolved_version(&self) -> &str {
        self.version.as_deref().unwrap_or(MODEL_VERSION_LATEST)
    }
}

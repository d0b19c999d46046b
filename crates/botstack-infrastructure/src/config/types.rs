//! Configuration types
//!
//! One struct per concern, merged into [`AppConfig`]. Defaults describe
//! a complete, deployable stack; a config file or environment variables
//! override individual fields.

use botstack_domain::{ModelDeployment, Parameters, ResourceNames};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provisioning parameters (region, plan SKU)
    #[serde(default)]
    pub parameters: Parameters,

    /// Fixed logical names; do not change after the first deploy
    #[serde(default)]
    pub names: ResourceNames,

    /// Model deployments exposed by the generative-AI account
    #[serde(default = "default_deployments")]
    pub deployments: Vec<ModelDeployment>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            parameters: Parameters::default(),
            names: ResourceNames::default(),
            deployments: default_deployments(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Default model list: one chat model pinned to a version, one
/// embedding model floating on `"latest"`
fn default_deployments() -> Vec<ModelDeployment> {
    vec![
        ModelDeployment::versioned("gpt4o", "gpt-4o", "2024-11-20"),
        ModelDeployment::latest("embeddings", "text-embedding-3-large"),
    ]
}

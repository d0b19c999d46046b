//! Configuration loader
//!
//! Handles loading configuration from defaults, a TOML file and
//! environment variables, in that override order, using Figment.
//! Validation runs immediately after extraction so a bad parameter
//! set fails before any graph is built.

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use botstack_domain::{Error, ModelDeployment, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `BOTSTACK_PARAMETERS_LOCATION`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Nested keys use underscore separation, e.g. BOTSTACK_LOGGING_LEVEL
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate application configuration
///
/// Fail-fast: everything a provisioning run would reject is rejected
/// here, before any resource graph exists.
fn validate_app_config(config: &AppConfig) -> Result<()> {
    config.parameters.validate()?;
    config.names.validate()?;
    validate_deployments(&config.deployments)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_deployments(deployments: &[ModelDeployment]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in deployments {
        if entry.name.trim().is_empty() {
            return Err(Error::validation("model deployment name must not be empty"));
        }
        if entry.model.trim().is_empty() {
            return Err(Error::validation(format!(
                "model deployment '{}' has an empty model identifier",
                entry.name
            )));
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(Error::NamingConflict {
                name: entry.name.clone(),
            });
        }
    }
    Ok(())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set the provisioning parameters
    pub fn with_parameters(mut self, parameters: botstack_domain::Parameters) -> Self {
        self.config.parameters = parameters;
        self
    }

    /// Set the naming configuration
    pub fn with_names(mut self, names: botstack_domain::ResourceNames) -> Self {
        self.config.names = names;
        self
    }

    /// Replace the model-deployment list
    pub fn with_deployments(mut self, deployments: Vec<ModelDeployment>) -> Self {
        self.config.deployments = deployments;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

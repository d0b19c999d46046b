//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "BOTSTACK";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "botstack.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "botstack";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for a log filter override
pub const LOG_ENV_VAR: &str = "BOTSTACK_LOG";

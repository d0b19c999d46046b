//! Domain layer constants
//!
//! Fixed values of the provisioning model: the app-setting names injected
//! into the web application, vault secret names, hosting domains and
//! parameter defaults. Infrastructure-specific constants (config file
//! names, env prefixes) live in `botstack-infrastructure`.

// ============================================================================
// PARAMETER DEFAULTS
// ============================================================================

/// Default deployment region
pub const DEFAULT_LOCATION: &str = "swedencentral";

/// Default app service plan SKU token
pub const DEFAULT_APP_SERVICE_SKU: &str = "P0v3";

/// Allowed app service plan SKU tokens
pub const ALLOWED_APP_SERVICE_SKUS: [&str; 3] = ["B3", "P0v3", "P1v3"];

/// Instance count for the app service plan
pub const PLAN_CAPACITY: u32 = 1;

/// Default scale capacity for a model deployment
pub const DEFAULT_MODEL_CAPACITY: u32 = 10;

/// Version token used when a model deployment omits an explicit version
pub const MODEL_VERSION_LATEST: &str = "latest";

/// Name of the secondary deployment slot of the web application
pub const STAGING_SLOT_NAME: &str = "staging";

// ============================================================================
// HOSTING DOMAINS
// ============================================================================

/// Public hostname suffix of the web application
pub const WEB_HOSTING_DOMAIN: &str = "azurewebsites.net";

/// Hostname suffix of the search service endpoint
pub const SEARCH_DOMAIN: &str = "search.windows.net";

/// Hostname suffix of the document database endpoint
pub const DATABASE_DOMAIN: &str = "documents.azure.com";

/// Hostname suffix of the secret vault endpoint
pub const VAULT_DOMAIN: &str = "vault.azure.net";

/// Hostname suffix of the generative-AI account endpoint
pub const AI_DOMAIN: &str = "openai.azure.com";

/// Hostname suffix of cognitive-service endpoints (speech)
pub const COGNITIVE_DOMAIN: &str = "cognitiveservices.azure.com";

/// Endpoint suffix used in storage connection strings
pub const STORAGE_ENDPOINT_SUFFIX: &str = "core.windows.net";

/// Path registered as the bot channel message callback
pub const BOT_MESSAGING_PATH: &str = "/api/messages";

// ============================================================================
// APP SETTING NAMES
// ============================================================================

/// Generative-AI account endpoint setting
pub const SETTING_AI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";

/// Prefix for the per-model deployment-name settings
pub const SETTING_AI_DEPLOYMENT_PREFIX: &str = "AZURE_OPENAI_DEPLOYMENT_";

/// Search service endpoint setting
pub const SETTING_SEARCH_ENDPOINT: &str = "AZURE_SEARCH_ENDPOINT";

/// Search service admin key setting
pub const SETTING_SEARCH_KEY: &str = "AZURE_SEARCH_KEY";

/// Document database connection string setting
pub const SETTING_DATABASE_CONNECTION: &str = "COSMOS_CONNECTION_STRING";

/// Storage account connection string setting
pub const SETTING_STORAGE_CONNECTION: &str = "STORAGE_CONNECTION_STRING";

/// Speech service key setting
pub const SETTING_SPEECH_KEY: &str = "SPEECH_KEY";

/// Speech service region setting
pub const SETTING_SPEECH_REGION: &str = "SPEECH_REGION";

/// Grounding endpoint setting (vault-backed)
pub const SETTING_GROUNDING_ENDPOINT: &str = "GROUNDING_ENDPOINT";

/// Grounding key setting (vault-backed)
pub const SETTING_GROUNDING_KEY: &str = "GROUNDING_KEY";

// ============================================================================
// VAULT SECRET NAMES
// ============================================================================
// Secrets written by the apply pass derive their vault name from the
// setting name (see `bindings::vault_secret_name`). The grounding pair is
// seeded out of band and therefore named explicitly.

/// Vault secret holding the grounding endpoint (seeded out of band)
pub const SECRET_GROUNDING_ENDPOINT: &str = "grounding-endpoint";

/// Vault secret holding the grounding key (seeded out of band)
pub const SECRET_GROUNDING_KEY: &str = "grounding-key";

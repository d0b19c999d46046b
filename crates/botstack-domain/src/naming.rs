//! Fixed resource names and derived values
//!
//! Every logical name used across the graph lives in one immutable
//! struct handed explicitly to the graph builder - never implicit global
//! state. Names must not change after the first deploy: the provisioning
//! engine matches desired state to existing resources by name, and a
//! rename reads as "delete and recreate".
//!
//! Endpoint URLs derived from these names are produced by the functions
//! below, tied to the declared name, so a naming change cannot silently
//! diverge from a hand-written format string elsewhere.

use crate::constants::{
    AI_DOMAIN, BOT_MESSAGING_PATH, COGNITIVE_DOMAIN, DATABASE_DOMAIN, SEARCH_DOMAIN,
    STAGING_SLOT_NAME, VAULT_DOMAIN, WEB_HOSTING_DOMAIN,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Search service endpoint URL for a declared service name
pub fn search_endpoint_for(name: &str) -> String {
    format!("https://{}.{}", name, SEARCH_DOMAIN)
}

/// Document database endpoint URL for a declared account name
pub fn database_endpoint_for(name: &str) -> String {
    format!("https://{}.{}:443/", name, DATABASE_DOMAIN)
}

/// Secret vault URI for a declared vault name (trailing slash)
pub fn vault_uri_for(name: &str) -> String {
    format!("https://{}.{}/", name, VAULT_DOMAIN)
}

/// Generative-AI account endpoint URL for a declared account name
pub fn ai_endpoint_for(name: &str) -> String {
    format!("https://{}.{}/", name, AI_DOMAIN)
}

/// Cognitive-service endpoint URL for a declared account name (speech)
pub fn cognitive_endpoint_for(name: &str) -> String {
    format!("https://{}.{}/", name, COGNITIVE_DOMAIN)
}

/// Default public hostname for a declared web application name
pub fn web_app_hostname_for(name: &str) -> String {
    format!("{}.{}", name, WEB_HOSTING_DOMAIN)
}

/// Immutable naming configuration for the whole graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNames {
    /// Secret vault
    pub vault: String,
    /// Blob storage account (lowercase alphanumeric only)
    pub storage: String,
    /// Document database account
    pub database: String,
    /// Search service
    pub search: String,
    /// Speech service account
    pub speech: String,
    /// Generative-AI account
    pub ai_account: String,
    /// App service plan
    pub plan: String,
    /// Web application
    pub web_app: String,
    /// Deployment slot name
    pub slot: String,
    /// Bot channel registration
    pub bot: String,
}

impl Default for ResourceNames {
    fn default() -> Self {
        Self {
            vault: "botstack-vault".to_string(),
            storage: "botstackstorage".to_string(),
            database: "botstack-cosmos".to_string(),
            search: "botstack-search".to_string(),
            speech: "botstack-speech".to_string(),
            ai_account: "botstack-openai".to_string(),
            plan: "botstack-plan".to_string(),
            web_app: "botstack-app".to_string(),
            slot: STAGING_SLOT_NAME.to_string(),
            bot: "botstack-bot".to_string(),
        }
    }
}

impl ResourceNames {
    /// Check the naming rules the providers enforce at creation time
    pub fn validate(&self) -> Result<()> {
        for (field, name) in [
            ("vault", &self.vault),
            ("storage", &self.storage),
            ("database", &self.database),
            ("search", &self.search),
            ("speech", &self.speech),
            ("ai_account", &self.ai_account),
            ("plan", &self.plan),
            ("web_app", &self.web_app),
            ("slot", &self.slot),
            ("bot", &self.bot),
        ] {
            if name.trim().is_empty() {
                return Err(Error::validation(format!(
                    "resource name '{}' must not be empty",
                    field
                )));
            }
        }
        if !self
            .storage
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(Error::validation(format!(
                "storage account name '{}' must be lowercase alphanumeric",
                self.storage
            )));
        }
        Ok(())
    }

    /// Default public hostname of the web application
    pub fn web_app_hostname(&self) -> String {
        web_app_hostname_for(&self.web_app)
    }

    /// HTTPS callback URL registered with the bot channel
    pub fn messaging_endpoint(&self) -> String {
        format!("https://{}{}", self.web_app_hostname(), BOT_MESSAGING_PATH)
    }

    /// Search service endpoint URL
    pub fn search_endpoint(&self) -> String {
        search_endpoint_for(&self.search)
    }

    /// Document database endpoint URL
    pub fn database_endpoint(&self) -> String {
        database_endpoint_for(&self.database)
    }

    /// Secret vault URI (trailing slash, as secret references expect)
    pub fn vault_uri(&self) -> String {
        vault_uri_for(&self.vault)
    }

    /// Generative-AI account endpoint URL
    pub fn ai_endpoint(&self) -> String {
        ai_endpoint_for(&self.ai_account)
    }
}

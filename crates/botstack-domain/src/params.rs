//! Deployment parameters
//!
//! The template exposes exactly two knobs: the region and the app service
//! plan SKU. The SKU token is restricted to a closed allowed set and
//! deterministically maps to a hosting tier; any other token fails
//! validation before a single resource is declared.

use crate::constants::{ALLOWED_APP_SERVICE_SKUS, DEFAULT_APP_SERVICE_SKU, DEFAULT_LOCATION};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hosting tier derived from the SKU token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanTier {
    /// Basic tier, selected by the `B3` token
    Basic,
    /// Premium v3 tier, selected by every other allowed token
    PremiumV3,
}

impl PlanTier {
    /// Tier name as the provider expects it
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::PremiumV3 => "PremiumV3",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an allowed SKU token to its hosting tier
///
/// Fails with [`Error::Validation`] for any token outside the allowed
/// set, before any declaration is produced.
pub fn plan_tier_for(sku: &str) -> Result<PlanTier> {
    if !ALLOWED_APP_SERVICE_SKUS.contains(&sku) {
        return Err(Error::Validation {
            message: format!(
                "app service SKU '{}' is not allowed; use one of {:?}",
                sku, ALLOWED_APP_SERVICE_SKUS
            ),
        });
    }
    Ok(if sku == "B3" {
        PlanTier::Basic
    } else {
        PlanTier::PremiumV3
    })
}

/// Provisioning parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    /// Deployment region code
    pub location: String,

    /// App service plan SKU token; must be in the allowed set
    pub app_service_sku: String,
}

impl Parameters {
    /// Parameters with an explicit SKU and the default region
    pub fn with_sku(sku: impl Into<String>) -> Self {
        Self {
            app_service_sku: sku.into(),
            ..Self::default()
        }
    }

    /// Validate the parameter set (fail-fast, before graph construction)
    pub fn validate(&self) -> Result<()> {
        if self.location.trim().is_empty() {
            return Err(Error::validation("location must not be empty"));
        }
        plan_tier_for(&self.app_service_sku).map(|_| ())
    }

    /// Hosting tier derived from the SKU token
    pub fn plan_tier(&self) -> Result<PlanTier> {
        plan_tier_for(&self.app_service_sku)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            app_service_sku: DEFAULT_APP_SERVICE_SKU.to_string(),
        }
    }
}

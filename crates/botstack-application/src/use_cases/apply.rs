//! Apply service
//!
//! Drives a provisioning engine through the single forward pass: wave by
//! wave, resources inside a wave applied concurrently, computed bindings
//! resolved and injected just before their target resource is applied.
//!
//! Failure semantics follow the engine contract: a failed resource marks
//! its dependents skipped, independent branches continue, nothing is
//! rolled back and no retry is authored here.

use crate::graph::{ResourceGraph, order, validate};
use crate::ports::{AppliedResource, ApplyOutcome, ProvisioningEngine};
use botstack_domain::{
    AppSetting, Error, ResourceDeclaration, ResourceKind, Result, vault_secret_name,
};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Terminal state of one resource after the apply pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "detail")]
pub enum ResourceStatus {
    /// The engine accepted the declaration
    Applied(ApplyOutcome),
    /// The engine rejected the declaration; provider error verbatim
    Failed(String),
    /// A dependency was not provisioned, so this resource was not attempted
    Skipped(String),
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied(outcome) => write!(f, "{}", outcome),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
            Self::Skipped(reason) => write!(f, "skipped: {}", reason),
        }
    }
}

/// Per-resource entry in the apply report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceResult {
    /// Logical name of the resource
    pub name: String,
    /// Terminal state
    pub status: ResourceStatus,
}

/// Outcome of one apply pass
#[derive(Debug, Clone, Serialize)]
pub struct ApplyReport {
    /// When the pass started
    pub started_at: DateTime<Utc>,
    /// When the pass finished
    pub finished_at: DateTime<Utc>,
    /// Engine that executed the pass
    pub engine: String,
    /// Per-resource results in declaration order
    pub results: Vec<ResourceResult>,
    /// Final environment of the web application, references included
    pub settings: Vec<AppSetting>,
}

impl ApplyReport {
    /// Whether every resource reached an applied state
    pub fn succeeded(&self) -> bool {
        self.results
            .iter()
            .all(|r| matches!(r.status, ResourceStatus::Applied(_)))
    }

    /// Status of a named resource, if it appears in the report
    pub fn status_of(&self, name: &str) -> Option<&ResourceStatus> {
        self.results
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.status)
    }
}

/// Applies a validated graph through an injected engine
pub struct ApplyService {
    engine: Arc<dyn ProvisioningEngine>,
}

impl ApplyService {
    /// Service over the given engine
    pub fn new(engine: Arc<dyn ProvisioningEngine>) -> Self {
        Self { engine }
    }

    /// Run the forward pass over the whole graph
    ///
    /// Validation runs first; an invalid graph fails before the engine
    /// sees a single declaration. Re-applying an unchanged graph against
    /// an idempotent engine reports [`ApplyOutcome::Unchanged`] for
    /// every resource.
    pub async fn apply(&self, graph: &ResourceGraph) -> Result<ApplyReport> {
        validate::validate(graph)?;
        let waves = order::waves(graph)?;
        let edges = validate::dependency_edges(graph);
        let started_at = Utc::now();

        let mut statuses: BTreeMap<String, ResourceStatus> = BTreeMap::new();
        let mut settings: Vec<AppSetting> = Vec::new();

        for wave in waves {
            let mut runnable = Vec::new();
            for name in wave {
                let blocked = edges.get(name.as_str()).and_then(|deps| {
                    deps.iter()
                        .find(|dep| {
                            !matches!(statuses.get(**dep), Some(ResourceStatus::Applied(_)))
                        })
                        .copied()
                });
                match blocked {
                    Some(dep) => {
                        warn!(resource = %name, dependency = dep, "skipping, dependency not provisioned");
                        statuses.insert(
                            name,
                            ResourceStatus::Skipped(format!(
                                "dependency '{}' was not provisioned",
                                dep
                            )),
                        );
                    }
                    None => runnable.push(name),
                }
            }

            let outcomes = join_all(
                runnable
                    .iter()
                    .map(|name| self.apply_one(graph, name.as_str())),
            )
            .await;

            for (name, outcome) in runnable.into_iter().zip(outcomes) {
                match outcome {
                    Ok((applied, resolved)) => {
                        info!(resource = %name, outcome = ?applied.outcome, "resource applied");
                        statuses.insert(name, ResourceStatus::Applied(applied.outcome));
                        if let Some(resolved) = resolved {
                            settings = resolved;
                        }
                    }
                    Err(error) => {
                        warn!(resource = %name, %error, "resource failed");
                        statuses.insert(name, ResourceStatus::Failed(error.to_string()));
                    }
                }
            }
        }

        let results = graph
            .resources()
            .iter()
            .map(|resource| ResourceResult {
                name: resource.name.clone(),
                status: statuses
                    .get(&resource.name)
                    .cloned()
                    .unwrap_or_else(|| ResourceStatus::Skipped("not reached".to_string())),
            })
            .collect();

        Ok(ApplyReport {
            started_at,
            finished_at: Utc::now(),
            engine: self.engine.engine_name().to_string(),
            results,
            settings,
        })
    }

    /// Resolve bindings into one declaration, then apply it
    ///
    /// Returns the engine acknowledgement and, for the web application,
    /// the final settings list for the report.
    async fn apply_one(
        &self,
        graph: &ResourceGraph,
        name: &str,
    ) -> Result<(AppliedResource, Option<Vec<AppSetting>>)> {
        let mut declaration = graph
            .get(name)
            .cloned()
            .ok_or_else(|| Error::dependency(name, "resource absent from the graph"))?;

        let mut resolved_settings = Vec::new();
        for binding in graph.bindings_for(name) {
            let value = self.engine.resolve(&binding.source, binding.op).await?;
            let value = if binding.secret {
                // Resolve-then-inject, vault-routed: the setting carries
                // the reference, the cleartext value only reaches the vault.
                self.engine
                    .put_secret(
                        &graph.names().vault,
                        &vault_secret_name(&binding.setting),
                        &value,
                    )
                    .await?
            } else {
                value
            };
            if declaration.kind == ResourceKind::WebSite {
                resolved_settings.push(AppSetting::new(&binding.setting, value));
            } else {
                declaration
                    .properties
                    .insert(binding.setting.clone(), Value::String(value));
            }
        }

        let final_settings = if resolved_settings.is_empty() {
            None
        } else {
            Some(push_settings(&mut declaration, &resolved_settings)?)
        };

        let applied = self.engine.apply(&declaration).await?;
        Ok((applied, final_settings))
    }
}

/// Append resolved settings to the declaration's environment block
///
/// Returns the complete settings list (static and resolved) in the order
/// the declaration now carries them.
fn push_settings(
    declaration: &mut ResourceDeclaration,
    resolved: &[AppSetting],
) -> Result<Vec<AppSetting>> {
    let config = declaration
        .properties
        .entry("siteConfig".to_string())
        .or_insert_with(|| json!({}));
    let entries = config
        .as_object_mut()
        .ok_or_else(|| Error::validation("siteConfig must be an object"))?
        .entry("appSettings".to_string())
        .or_insert_with(|| json!([]));
    let entries = entries
        .as_array_mut()
        .ok_or_else(|| Error::validation("appSettings must be an array"))?;
    for setting in resolved {
        entries.push(serde_json::to_value(setting)?);
    }
    entries
        .iter()
        .map(|entry| serde_json::from_value(entry.clone()).map_err(Error::from))
        .collect()
}

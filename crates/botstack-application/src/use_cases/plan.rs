//! Plan service
//!
//! Renders a validated graph as a deterministic, serializable plan:
//! declarations, apply waves and a preview of the web application's
//! environment. Planning the same parameter set twice yields
//! byte-identical JSON, which is what makes re-apply reviewable as a
//! diff.

use crate::graph::{GraphBuilder, ResourceGraph, order, validate};
use botstack_domain::{
    AppSetting, ModelDeployment, Parameters, ResourceDeclaration, ResourceNames, Result,
    vault_secret_name, vault_secret_reference,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// Preview of one web-application setting in the plan
///
/// Secret-routed settings already show their final vault reference (it
/// is statically derivable); plain computed settings show a resolution
/// placeholder until apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedSetting {
    /// Environment variable name
    pub name: String,
    /// Final value, vault reference or resolution placeholder
    pub value: String,
}

/// Deterministic provisioning plan for one parameter set
#[derive(Debug, Clone, Serialize)]
pub struct ProvisioningPlan {
    /// Parameters the plan was built from
    pub parameters: Parameters,
    /// Logical names, wave by wave, in apply order
    pub waves: Vec<Vec<String>>,
    /// Every declaration in the graph
    pub resources: Vec<ResourceDeclaration>,
    /// Environment preview for the web application
    pub settings: Vec<PlannedSetting>,
}

impl ProvisioningPlan {
    /// Render the plan as pretty JSON (stable across runs)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds and validates graphs, then renders them as plans
#[derive(Debug, Clone)]
pub struct Planner {
    builder: GraphBuilder,
}

impl Planner {
    /// Planner over a fixed naming configuration
    pub fn new(names: ResourceNames) -> Self {
        Self {
            builder: GraphBuilder::new(names),
        }
    }

    /// Build and fully validate the graph for one parameter set
    pub fn graph(
        &self,
        parameters: &Parameters,
        deployments: &[ModelDeployment],
    ) -> Result<ResourceGraph> {
        let graph = self.builder.build(parameters, deployments)?;
        validate::validate(&graph)?;
        Ok(graph)
    }

    /// Produce the plan for one parameter set
    pub fn plan(
        &self,
        parameters: &Parameters,
        deployments: &[ModelDeployment],
    ) -> Result<ProvisioningPlan> {
        let graph = self.graph(parameters, deployments)?;
        let waves = order::waves(&graph)?;
        let settings = settings_preview(&graph);
        info!(
            resources = graph.len(),
            waves = waves.len(),
            "provisioning plan ready"
        );
        Ok(ProvisioningPlan {
            parameters: parameters.clone(),
            waves,
            resources: graph.resources().to_vec(),
            settings,
        })
    }
}

/// Environment preview: static settings plus one entry per binding
fn settings_preview(graph: &ResourceGraph) -> Vec<PlannedSetting> {
    let vault_uri = graph.names().vault_uri();
    let mut settings: Vec<PlannedSetting> = declared_settings(graph)
        .iter()
        .map(|s| PlannedSetting {
            name: s.name.clone(),
            value: s.value.clone(),
        })
        .collect();

    for binding in graph.bindings_for(&graph.names().web_app) {
        let value = if binding.secret {
            vault_secret_reference(&vault_uri, &vault_secret_name(&binding.setting))
        } else {
            format!("${{resolve({}.{})}}", binding.source, binding.op)
        };
        settings.push(PlannedSetting {
            name: binding.setting.clone(),
            value,
        });
    }
    settings
}

/// Static settings already present on the web app declaration
pub(crate) fn declared_settings(graph: &ResourceGraph) -> Vec<AppSetting> {
    graph
        .get(&graph.names().web_app)
        .and_then(|web| web.properties.get("siteConfig"))
        .and_then(|config| config.get("appSettings"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

//! Command implementations behind the CLI
//!
//! Each function takes a loaded configuration and returns data; printing
//! and exit codes stay in `main.rs`.

use botstack_application::graph::{GraphBuilder, order, validate as graph_validate};
use botstack_application::use_cases::{ApplyReport, ApplyService, Planner, ProvisioningPlan};
use botstack_domain::Result;
use botstack_infrastructure::config::{AppConfig, ConfigLoader};
use botstack_infrastructure::engine::InMemoryEngine;
use std::path::Path;
use std::sync::Arc;

/// Load configuration from defaults, file and environment
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    loader.load()
}

/// Result of a validation run
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Number of declarations in the graph
    pub resources: usize,
    /// Number of apply waves
    pub waves: usize,
    /// Every problem found, empty for a valid graph
    pub problems: Vec<String>,
}

impl ValidationReport {
    /// Whether the graph passed every check
    pub fn ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Build the graph and collect every validation problem
///
/// Parameter and naming errors abort with `Err` (there is no graph to
/// report on); graph-level problems land in the report.
pub fn validate(config: &AppConfig) -> Result<ValidationReport> {
    let builder = GraphBuilder::new(config.names.clone());
    let graph = builder.build(&config.parameters, &config.deployments)?;
    let problems: Vec<String> = graph_validate::check(&graph)
        .iter()
        .map(ToString::to_string)
        .collect();
    let waves = if problems.is_empty() {
        order::waves(&graph)?.len()
    } else {
        0
    };
    Ok(ValidationReport {
        resources: graph.len(),
        waves,
        problems,
    })
}

/// Produce the deterministic provisioning plan
pub fn plan(config: &AppConfig) -> Result<ProvisioningPlan> {
    Planner::new(config.names.clone()).plan(&config.parameters, &config.deployments)
}

/// Run the forward pass against the in-memory engine
///
/// A real control-plane engine implements the same port; swapping it in
/// changes nothing else in this pipeline.
pub async fn apply(config: &AppConfig) -> Result<ApplyReport> {
    let planner = Planner::new(config.names.clone());
    let graph = planner.graph(&config.parameters, &config.deployments)?;
    let service = ApplyService::new(Arc::new(InMemoryEngine::new()));
    service.apply(&graph).await
}

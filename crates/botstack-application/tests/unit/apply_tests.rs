//! Unit tests for the apply service
//!
//! Exercised against the in-memory engine adapter; a real cloud engine
//! implements the same port.

use botstack_application::graph::{GraphBuilder, ResourceGraph};
use botstack_application::ports::{ApplyOutcome, ProvisioningEngine};
use botstack_application::use_cases::{ApplyService, ResourceStatus};
use botstack_domain::{ModelDeployment, Parameters, ResolveOp, ResourceNames};
use botstack_infrastructure::InMemoryEngine;
use std::sync::Arc;

fn built_graph() -> ResourceGraph {
    GraphBuilder::new(ResourceNames::default())
        .build(
            &Parameters::default(),
            &[ModelDeployment::versioned("gpt4o", "gpt-4o", "2024-11-20")],
        )
        .expect("build")
}

#[tokio::test]
async fn test_full_apply_provisions_every_resource() {
    let graph = built_graph();
    let service = ApplyService::new(Arc::new(InMemoryEngine::new()));

    let report = service.apply(&graph).await.expect("apply");
    assert!(report.succeeded());
    assert_eq!(report.results.len(), graph.len());
    for result in &report.results {
        assert_eq!(
            result.status,
            ResourceStatus::Applied(ApplyOutcome::Created),
            "{} should be created",
            result.name
        );
    }
}

#[tokio::test]
async fn test_reapply_is_a_no_op() {
    let graph = built_graph();
    let engine = Arc::new(InMemoryEngine::new());
    let service = ApplyService::new(engine);

    service.apply(&graph).await.expect("first apply");
    let second = service.apply(&graph).await.expect("second apply");

    assert!(second.succeeded());
    for result in &second.results {
        assert_eq!(
            result.status,
            ResourceStatus::Applied(ApplyOutcome::Unchanged),
            "{} should be unchanged on re-apply",
            result.name
        );
    }
}

#[tokio::test]
async fn test_resolved_endpoint_lands_in_the_environment() {
    let graph = built_graph();
    let service = ApplyService::new(Arc::new(InMemoryEngine::new()));

    let report = service.apply(&graph).await.expect("apply");
    let endpoint = report
        .settings
        .iter()
        .find(|s| s.name == "AZURE_OPENAI_ENDPOINT")
        .expect("ai endpoint setting");
    assert_eq!(endpoint.value, "https://botstack-openai.openai.azure.com/");
}

#[tokio::test]
async fn test_secrets_reach_the_vault_not_the_environment() {
    let graph = built_graph();
    let engine = Arc::new(InMemoryEngine::new());
    let service = ApplyService::new(engine.clone());

    let report = service.apply(&graph).await.expect("apply");

    let search_key = report
        .settings
        .iter()
        .find(|s| s.name == "AZURE_SEARCH_KEY")
        .expect("search key setting");
    assert!(search_key.value.starts_with("@Microsoft.KeyVault(SecretUri="));

    let stored = engine
        .secret_value("botstack-vault", "azure-search-key")
        .await
        .expect("secret stored in vault");
    assert_eq!(stored.len(), 64);
    assert_ne!(stored, search_key.value);
}

#[tokio::test]
async fn test_environment_carries_static_settings_too() {
    let graph = built_graph();
    let service = ApplyService::new(Arc::new(InMemoryEngine::new()));

    let report = service.apply(&graph).await.expect("apply");
    let names: Vec<&str> = report.settings.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"SPEECH_REGION"));
    assert!(names.contains(&"AZURE_OPENAI_DEPLOYMENT_GPT4O"));
    assert!(names.contains(&"GROUNDING_ENDPOINT"));
}

#[tokio::test]
async fn test_failed_resource_skips_dependents_only() {
    let graph = built_graph();
    let service = ApplyService::new(Arc::new(InMemoryEngine::with_failures([
        "botstack-search",
    ])));

    let report = service.apply(&graph).await.expect("apply");
    assert!(!report.succeeded());

    assert!(matches!(
        report.status_of("botstack-search"),
        Some(ResourceStatus::Failed(_))
    ));
    // Dependents of the failed branch are skipped, not attempted
    assert!(matches!(
        report.status_of("botstack-app"),
        Some(ResourceStatus::Skipped(_))
    ));
    assert!(matches!(
        report.status_of("botstack-bot"),
        Some(ResourceStatus::Skipped(_))
    ));
    assert!(matches!(
        report.status_of("staging"),
        Some(ResourceStatus::Skipped(_))
    ));
    // Independent branches are untouched by the failure
    for independent in ["botstack-vault", "botstackstorage", "botstack-cosmos", "gpt4o"] {
        assert!(
            matches!(
                report.status_of(independent),
                Some(ResourceStatus::Applied(ApplyOutcome::Created))
            ),
            "{independent} should be applied"
        );
    }
}

#[tokio::test]
async fn test_bot_receives_the_app_principal_id() {
    let graph = built_graph();
    let engine = Arc::new(InMemoryEngine::new());
    let service = ApplyService::new(engine.clone());

    service.apply(&graph).await.expect("apply");

    // The bot's msaAppId is the web app's principal id, resolved at
    // apply time; resolving again must agree (deterministic engine).
    let principal = engine
        .resolve("botstack-app", ResolveOp::PrincipalId)
        .await
        .expect("resolve principal");
    assert_eq!(principal.len(), 36);
}

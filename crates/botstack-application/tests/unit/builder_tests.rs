//! Unit tests for the resource graph builder

use botstack_application::graph::GraphBuilder;
use botstack_application::graph::builder::deployment_setting_name;
use botstack_domain::{
    Error, ModelDeployment, Parameters, ResourceKind, ResourceNames,
};
use serde_json::json;

fn builder() -> GraphBuilder {
    GraphBuilder::new(ResourceNames::default())
}

fn one_model() -> Vec<ModelDeployment> {
    vec![ModelDeployment::versioned("gpt4o", "gpt-4o", "2024-11-20")]
}

#[test]
fn test_same_inputs_produce_the_same_graph() {
    let params = Parameters::default();
    let a = builder().build(&params, &one_model()).expect("build");
    let b = builder().build(&params, &one_model()).expect("build");
    assert_eq!(
        serde_json::to_value(a.resources()).unwrap(),
        serde_json::to_value(b.resources()).unwrap()
    );
    assert_eq!(a.bindings(), b.bindings());
}

#[test]
fn test_invalid_sku_fails_before_any_declaration() {
    let params = Parameters::with_sku("S1");
    let err = builder().build(&params, &one_model()).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_b3_scenario_resolves_basic_tier() {
    let params = Parameters::with_sku("B3");
    let graph = builder().build(&params, &one_model()).expect("build");

    let plan = graph.get("botstack-plan").expect("plan declared");
    let sku = plan.sku.as_ref().expect("plan sku");
    assert_eq!(sku.name, "B3");
    assert_eq!(sku.tier.as_deref(), Some("Basic"));
    assert_eq!(sku.capacity, Some(1));
}

#[test]
fn test_single_model_entry_yields_one_child_deployment() {
    let graph = builder()
        .build(&Parameters::default(), &one_model())
        .expect("build");

    let deployments: Vec<_> = graph
        .resources()
        .iter()
        .filter(|r| r.kind == ResourceKind::ModelDeployment)
        .collect();
    assert_eq!(deployments.len(), 1);

    let deployment = deployments[0];
    assert_eq!(deployment.name, "gpt4o");
    assert_eq!(deployment.parent.as_deref(), Some("botstack-openai"));
    assert_eq!(
        deployment.properties["model"],
        json!({ "format": "OpenAI", "name": "gpt-4o", "version": "2024-11-20" })
    );
}

#[test]
fn test_versionless_model_declares_latest() {
    let graph = builder()
        .build(
            &Parameters::default(),
            &[ModelDeployment::latest("embeddings", "text-embedding-3-large")],
        )
        .expect("build");

    let deployment = graph.get("embeddings").expect("deployment declared");
    assert_eq!(deployment.properties["model"]["version"], json!("latest"));
}

#[test]
fn test_web_app_depends_on_every_binding_source() {
    let graph = builder()
        .build(&Parameters::default(), &one_model())
        .expect("build");
    let web = graph.get("botstack-app").expect("web app declared");
    let deps: Vec<&str> = web.dependencies().collect();

    for source in [
        "botstack-plan",
        "botstack-openai",
        "botstack-search",
        "botstack-cosmos",
        "botstackstorage",
        "botstack-speech",
        "botstack-vault",
    ] {
        assert!(deps.contains(&source), "missing dependency on {source}");
    }
}

#[test]
fn test_bot_callback_is_derived_from_the_app_name() {
    let graph = builder()
        .build(&Parameters::default(), &one_model())
        .expect("build");
    let bot = graph.get("botstack-bot").expect("bot declared");
    assert_eq!(
        bot.properties["endpoint"],
        json!("https://botstack-app.azurewebsites.net/api/messages")
    );
}

#[test]
fn test_bot_identity_is_a_computed_binding_on_the_web_app() {
    let graph = builder()
        .build(&Parameters::default(), &one_model())
        .expect("build");
    let binding = graph
        .bindings_for("botstack-bot")
        .next()
        .expect("bot binding");
    assert_eq!(binding.setting, "msaAppId");
    assert_eq!(binding.source, "botstack-app");
    assert!(!binding.secret);
}

#[test]
fn test_secret_bindings_are_vault_routed() {
    let graph = builder()
        .build(&Parameters::default(), &one_model())
        .expect("build");
    let secret_settings: Vec<&str> = graph
        .bindings()
        .iter()
        .filter(|b| b.secret)
        .map(|b| b.setting.as_str())
        .collect();
    assert_eq!(
        secret_settings,
        vec![
            "AZURE_SEARCH_KEY",
            "COSMOS_CONNECTION_STRING",
            "STORAGE_CONNECTION_STRING",
            "SPEECH_KEY",
        ]
    );
}

#[test]
fn test_graph_size_for_one_model() {
    // vault, storage, database, search, speech, ai account, 1 deployment,
    // plan, web app, slot, bot
    let graph = builder()
        .build(&Parameters::default(), &one_model())
        .expect("build");
    assert_eq!(graph.len(), 11);
}

#[test]
fn test_deployment_setting_name_normalization() {
    assert_eq!(
        deployment_setting_name("gpt-4o-mini"),
        "AZURE_OPENAI_DEPLOYMENT_GPT_4O_MINI"
    );
    assert_eq!(deployment_setting_name("gpt4o"), "AZURE_OPENAI_DEPLOYMENT_GPT4O");
}

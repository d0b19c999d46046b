//! Unit tests for resource declarations

use botstack_domain::resources::{Identity, ResourceDeclaration, ResourceKind, SkuSpec};
use serde_json::json;

#[test]
fn test_kind_provider_types() {
    assert_eq!(
        ResourceKind::StorageAccount.provider_type(),
        "Microsoft.Storage/storageAccounts"
    );
    assert_eq!(
        ResourceKind::ModelDeployment.provider_type(),
        "Microsoft.CognitiveServices/accounts/deployments"
    );
    // Speech and AI accounts share the provider type and differ by kind property
    assert_eq!(
        ResourceKind::SpeechAccount.provider_type(),
        ResourceKind::AiAccount.provider_type()
    );
}

#[test]
fn test_every_kind_is_pinned_to_an_api_version() {
    for kind in [
        ResourceKind::Vault,
        ResourceKind::StorageAccount,
        ResourceKind::DatabaseAccount,
        ResourceKind::SearchService,
        ResourceKind::SpeechAccount,
        ResourceKind::AiAccount,
        ResourceKind::ModelDeployment,
        ResourceKind::ServerFarm,
        ResourceKind::WebSite,
        ResourceKind::SiteSlot,
        ResourceKind::BotService,
    ] {
        assert!(!kind.api_version().is_empty());
    }
}

#[test]
fn test_dependencies_include_parent_edge() {
    let declaration = ResourceDeclaration::new(
        ResourceKind::ModelDeployment,
        "gpt4o",
        "swedencentral",
    )
    .with_parent("botstack-openai")
    .depends_on("botstack-vault");

    let deps: Vec<&str> = declaration.dependencies().collect();
    assert_eq!(deps, vec!["botstack-openai", "botstack-vault"]);
}

#[test]
fn test_builder_style_construction() {
    let declaration = ResourceDeclaration::new(ResourceKind::WebSite, "app", "swedencentral")
        .with_sku(SkuSpec::named("P0v3").with_tier("PremiumV3").with_capacity(1))
        .with_identity(Identity::SystemAssigned)
        .with_property("httpsOnly", json!(true));

    assert_eq!(declaration.identity, Some(Identity::SystemAssigned));
    assert_eq!(declaration.properties["httpsOnly"], json!(true));
    let sku = declaration.sku.expect("sku should be set");
    assert_eq!(sku.capacity, Some(1));
}

#[test]
fn test_declaration_serialization_omits_empty_fields() {
    let declaration = ResourceDeclaration::new(ResourceKind::Vault, "vault", "swedencentral");
    let json = serde_json::to_value(&declaration).expect("serialization should succeed");
    let object = json.as_object().expect("declaration serializes to object");
    assert!(!object.contains_key("sku"));
    assert!(!object.contains_key("parent"));
    assert!(!object.contains_key("depends_on"));
}

#[test]
fn test_declaration_json_round_trip() {
    let declaration = ResourceDeclaration::new(ResourceKind::SearchService, "search", "swedencentral")
        .with_sku(SkuSpec::named("basic"));
    let json = serde_json::to_string(&declaration).expect("serialization should succeed");
    let back: ResourceDeclaration =
        serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(declaration, back);
}

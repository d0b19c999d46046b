//! Unit tests for model-deployment entries

use botstack_domain::models::ModelDeployment;

#[test]
fn test_missing_version_resolves_to_latest() {
    let entry = ModelDeployment::latest("embeddings", "text-embedding-3-large");
    assert_eq!(entry.resolved_version(), "latest");
}

#[test]
fn test_explicit_version_is_kept() {
    let entry = ModelDeployment::versioned("gpt4o", "gpt-4o", "2024-11-20");
    assert_eq!(entry.resolved_version(), "2024-11-20");
}

#[test]
fn test_capacity_defaults_when_omitted_from_toml() {
    let entry: ModelDeployment =
        toml::from_str(r#"name = "gpt4o"
model = "gpt-4o""#).expect("deserialization should succeed");
    assert_eq!(entry.capacity, 10);
    assert_eq!(entry.resolved_version(), "latest");
}

#[test]
fn test_json_round_trip() {
    let entry = ModelDeployment::versioned("gpt4o", "gpt-4o", "2024-11-20");
    let json = serde_json::to_string(&entry).expect("serialization should succeed");
    let back: ModelDeployment =
        serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(entry, back);
}

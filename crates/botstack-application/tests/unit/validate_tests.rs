//! Unit tests for graph validation

use botstack_application::graph::{GraphBuilder, ResourceGraph, validate};
use botstack_domain::{
    ComputedBinding, Error, ModelDeployment, Parameters, ResolveOp, ResourceDeclaration,
    ResourceKind, ResourceNames,
};

fn built_graph() -> ResourceGraph {
    GraphBuilder::new(ResourceNames::default())
        .build(
            &Parameters::default(),
            &[ModelDeployment::versioned("gpt4o", "gpt-4o", "2024-11-20")],
        )
        .expect("build")
}

fn hand_graph(
    resources: Vec<ResourceDeclaration>,
    bindings: Vec<ComputedBinding>,
) -> ResourceGraph {
    ResourceGraph::new(
        Parameters::default(),
        ResourceNames::default(),
        resources,
        bindings,
    )
}

#[test]
fn test_built_graph_is_valid() {
    let errors = validate::check(&built_graph());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn test_duplicate_logical_names_conflict() {
    let graph = hand_graph(
        vec![
            ResourceDeclaration::new(ResourceKind::Vault, "twin", "swedencentral"),
            ResourceDeclaration::new(ResourceKind::SearchService, "twin", "swedencentral"),
        ],
        vec![],
    );
    let errors = validate::check(&graph);
    assert!(errors
        .iter()
        .any(|e| matches!(e, Error::NamingConflict { name } if name == "twin")));
}

#[test]
fn test_missing_parent_is_reported() {
    let graph = hand_graph(
        vec![
            ResourceDeclaration::new(ResourceKind::ModelDeployment, "gpt4o", "swedencentral")
                .with_parent("ghost-account"),
        ],
        vec![],
    );
    let errors = validate::check(&graph);
    assert!(errors
        .iter()
        .any(|e| matches!(e, Error::DependencyResolution { .. })));
}

#[test]
fn test_binding_source_must_be_declared() {
    // Referential completeness: a computed binding may never reference a
    // source absent from the graph.
    let graph = hand_graph(
        vec![ResourceDeclaration::new(
            ResourceKind::WebSite,
            "app",
            "swedencentral",
        )],
        vec![ComputedBinding::plain(
            "app",
            "AZURE_SEARCH_ENDPOINT",
            "ghost-search",
            ResolveOp::Endpoint,
        )],
    );
    let errors = validate::check(&graph);
    assert!(errors
        .iter()
        .any(|e| e.to_string().contains("ghost-search")));
}

#[test]
fn test_binding_op_must_match_source_kind() {
    let graph = hand_graph(
        vec![
            ResourceDeclaration::new(ResourceKind::ServerFarm, "plan", "swedencentral"),
            ResourceDeclaration::new(ResourceKind::WebSite, "app", "swedencentral"),
        ],
        vec![ComputedBinding::secret(
            "app",
            "PLAN_KEY",
            "plan",
            ResolveOp::PrimaryKey,
        )],
    );
    let errors = validate::check(&graph);
    assert!(errors.iter().any(|e| matches!(e, Error::Validation { .. })));
}

#[test]
fn test_dependency_cycle_is_reported() {
    let graph = hand_graph(
        vec![
            ResourceDeclaration::new(ResourceKind::Vault, "a", "swedencentral").depends_on("b"),
            ResourceDeclaration::new(ResourceKind::Vault, "b", "swedencentral").depends_on("a"),
        ],
        vec![],
    );
    let errors = validate::check(&graph);
    assert!(errors
        .iter()
        .any(|e| e.to_string().contains("dependency cycle")));
}

#[test]
fn test_validate_stops_at_first_error() {
    let graph = hand_graph(
        vec![
            ResourceDeclaration::new(ResourceKind::Vault, "twin", "swedencentral"),
            ResourceDeclaration::new(ResourceKind::Vault, "twin", "swedencentral"),
        ],
        vec![],
    );
    assert!(matches!(
        validate::validate(&graph),
        Err(Error::NamingConflict { .. })
    ));
}

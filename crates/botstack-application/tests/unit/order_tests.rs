//! Unit tests for wave ordering

use botstack_application::graph::{GraphBuilder, ResourceGraph, order};
use botstack_domain::{ModelDeployment, Parameters, ResourceDeclaration, ResourceKind, ResourceNames};

fn built_graph() -> ResourceGraph {
    GraphBuilder::new(ResourceNames::default())
        .build(
            &Parameters::default(),
            &[ModelDeployment::versioned("gpt4o", "gpt-4o", "2024-11-20")],
        )
        .expect("build")
}

fn wave_of(waves: &[Vec<String>], name: &str) -> usize {
    waves
        .iter()
        .position(|wave| wave.iter().any(|n| n == name))
        .unwrap_or_else(|| panic!("{name} not placed in any wave"))
}

#[test]
fn test_independent_leaves_land_in_wave_zero() {
    let waves = order::waves(&built_graph()).expect("waves");
    for leaf in [
        "botstack-vault",
        "botstackstorage",
        "botstack-cosmos",
        "botstack-search",
        "botstack-speech",
        "botstack-openai",
        "botstack-plan",
    ] {
        assert_eq!(wave_of(&waves, leaf), 0, "{leaf} should be independent");
    }
}

#[test]
fn test_dependents_wait_for_their_dependencies() {
    let graph = built_graph();
    let waves = order::waves(&graph).expect("waves");

    // Model deployment waits for its parent account
    assert!(wave_of(&waves, "gpt4o") > wave_of(&waves, "botstack-openai"));
    // Web app waits for plan and every binding source
    assert!(wave_of(&waves, "botstack-app") > wave_of(&waves, "botstack-plan"));
    assert!(wave_of(&waves, "botstack-app") > wave_of(&waves, "botstack-search"));
    // Slot and bot wait for the web app
    assert!(wave_of(&waves, "staging") > wave_of(&waves, "botstack-app"));
    assert!(wave_of(&waves, "botstack-bot") > wave_of(&waves, "botstack-app"));
}

#[test]
fn test_every_resource_is_placed_exactly_once() {
    let graph = built_graph();
    let waves = order::waves(&graph).expect("waves");
    let placed: Vec<&String> = waves.iter().flatten().collect();
    assert_eq!(placed.len(), graph.len());
}

#[test]
fn test_ordering_is_deterministic() {
    let graph = built_graph();
    assert_eq!(
        order::waves(&graph).expect("waves"),
        order::waves(&graph).expect("waves")
    );
}

#[test]
fn test_cycle_prevents_ordering() {
    let graph = ResourceGraph::new(
        Parameters::default(),
        ResourceNames::default(),
        vec![
            ResourceDeclaration::new(ResourceKind::Vault, "a", "swedencentral").depends_on("b"),
            ResourceDeclaration::new(ResourceKind::Vault, "b", "swedencentral").depends_on("a"),
        ],
        vec![],
    );
    assert!(order::waves(&graph).is_err());
}

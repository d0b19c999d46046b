//! Wave ordering
//!
//! Partitions the graph into waves: wave N holds the resources whose
//! dependencies all lie in earlier waves. The engine may create
//! everything inside one wave in parallel; waves execute in order.
//! Ordering inside a wave follows declaration order, so the result is
//! deterministic for a given graph.

use crate::graph::ResourceGraph;
use crate::graph::validate::dependency_edges;
use botstack_domain::{Error, Result};
use std::collections::HashSet;

/// Partition the graph into dependency waves
///
/// Fails with [`Error::Validation`] if the edges do not form a DAG;
/// full validation normally runs first and reports the cycle witness.
pub fn waves(graph: &ResourceGraph) -> Result<Vec<Vec<String>>> {
    let edges = dependency_edges(graph);
    let mut placed: HashSet<&str> = HashSet::new();
    let mut remaining: Vec<&str> = graph.resources().iter().map(|r| r.name.as_str()).collect();
    let mut result = Vec::new();

    while !remaining.is_empty() {
        let ready: Vec<&str> = remaining
            .iter()
            .copied()
            .filter(|name| {
                edges
                    .get(name)
                    .is_none_or(|deps| deps.iter().all(|dep| placed.contains(dep)))
            })
            .collect();

        if ready.is_empty() {
            return Err(Error::validation(format!(
                "dependency cycle prevents ordering of: {}",
                remaining.join(", ")
            )));
        }

        for name in &ready {
            placed.insert(name);
        }
        remaining.retain(|name| !placed.contains(name));
        result.push(ready.into_iter().map(ToString::to_string).collect());
    }

    Ok(result)
}

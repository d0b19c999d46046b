//! Graph validation
//!
//! Runs before plan or apply: a graph that fails any check here never
//! reaches the engine (fail-fast, not partial apply). Checks cover
//! logical-name uniqueness, parent and dependency references, binding
//! referential completeness, op/kind compatibility and acyclicity.

use crate::graph::ResourceGraph;
use botstack_domain::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Collect every validation failure in the graph
///
/// Returns an empty vector for a valid graph. The CLI uses this to
/// report all problems at once; [`validate`] stops at the first.
pub fn check(graph: &ResourceGraph) -> Vec<Error> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for resource in graph.resources() {
        if !seen.insert(resource.name.as_str()) {
            errors.push(Error::NamingConflict {
                name: resource.name.clone(),
            });
        }
    }

    for resource in graph.resources() {
        if let Some(parent) = &resource.parent {
            if graph.get(parent).is_none() {
                errors.push(Error::dependency(
                    &resource.name,
                    format!("parent '{}' is not declared in the graph", parent),
                ));
            }
        }
        for dep in &resource.depends_on {
            if graph.get(dep).is_none() {
                errors.push(Error::dependency(
                    &resource.name,
                    format!("dependency '{}' is not declared in the graph", dep),
                ));
            }
        }
    }

    for binding in graph.bindings() {
        if graph.get(&binding.target).is_none() {
            errors.push(Error::dependency(
                &binding.target,
                format!(
                    "binding '{}' targets a resource absent from the graph",
                    binding.setting
                ),
            ));
        }
        match graph.get(&binding.source) {
            None => errors.push(Error::dependency(
                &binding.target,
                format!(
                    "binding '{}' references source '{}' absent from the graph",
                    binding.setting, binding.source
                ),
            )),
            Some(source) => {
                if !binding.op.supported_by(source.kind) {
                    errors.push(Error::validation(format!(
                        "binding '{}': operation '{}' is not resolvable on '{}'",
                        binding.setting, binding.op, binding.source
                    )));
                }
            }
        }
    }

    if let Some(cycle) = find_cycle(graph) {
        errors.push(Error::validation(format!(
            "dependency cycle: {}",
            cycle.join(" -> ")
        )));
    }

    errors
}

/// Validate the graph, failing on the first problem found
pub fn validate(graph: &ResourceGraph) -> Result<()> {
    match check(graph).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Depth-first cycle search over declared and binding-implied edges
///
/// Returns one witness cycle as a name path. Edges to undeclared names
/// are ignored here; the reference checks above already reported them.
fn find_cycle(graph: &ResourceGraph) -> Option<Vec<String>> {
    let edges = dependency_edges(graph);

    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Visiting,
        Done,
    }

    let mut marks: HashMap<&str, Mark> = HashMap::new();

    fn visit<'a>(
        node: &'a str,
        edges: &HashMap<&'a str, Vec<&'a str>>,
        marks: &mut HashMap<&'a str, Mark>,
        path: &mut Vec<&'a str>,
    ) -> Option<Vec<String>> {
        match marks.get(node).copied() {
            Some(Mark::Done) => return None,
            Some(Mark::Visiting) => {
                let start = path.iter().position(|n| *n == node).unwrap_or(0);
                let mut cycle: Vec<String> =
                    path[start..].iter().map(ToString::to_string).collect();
                cycle.push(node.to_string());
                return Some(cycle);
            }
            None => {}
        }
        marks.insert(node, Mark::Visiting);
        path.push(node);
        if let Some(deps) = edges.get(node) {
            for dep in deps {
                if let Some(cycle) = visit(dep, edges, marks, path) {
                    return Some(cycle);
                }
            }
        }
        path.pop();
        marks.insert(node, Mark::Done);
        None
    }

    let mut path = Vec::new();
    for resource in graph.resources() {
        if let Some(cycle) = visit(&resource.name, &edges, &mut marks, &mut path) {
            return Some(cycle);
        }
    }
    None
}

/// Dependency map: resource name to the names it must wait for
///
/// Includes parent edges, explicit `depends_on` edges and the implicit
/// edges from computed-value references.
pub(crate) fn dependency_edges(graph: &ResourceGraph) -> HashMap<&str, Vec<&str>> {
    let declared: HashSet<&str> = graph.resources().iter().map(|r| r.name.as_str()).collect();
    let mut edges: HashMap<&str, Vec<&str>> = HashMap::new();

    for resource in graph.resources() {
        let deps = edges.entry(resource.name.as_str()).or_default();
        for dep in resource.dependencies() {
            if declared.contains(dep) && !deps.contains(&dep) {
                deps.push(dep);
            }
        }
    }
    for binding in graph.bindings() {
        if declared.contains(binding.target.as_str()) && declared.contains(binding.source.as_str())
        {
            let deps = edges.entry(binding.target.as_str()).or_default();
            let source = binding.source.as_str();
            if !deps.contains(&source) {
                deps.push(source);
            }
        }
    }
    edges
}

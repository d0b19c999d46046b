//! Resource graph
//!
//! The graph is the complete output of the builder for one parameter
//! set: an ordered list of resource declarations plus the computed
//! bindings between them. It is a value - built once, validated, then
//! handed to the plan or apply service. Re-building with the same
//! inputs yields an identical graph.

pub mod builder;
pub mod order;
pub mod validate;

pub use builder::GraphBuilder;

use botstack_domain::{ComputedBinding, Parameters, ResourceDeclaration, ResourceNames};
use serde::Serialize;

/// Full set of resource declarations and the edges between them
#[derive(Debug, Clone, Serialize)]
pub struct ResourceGraph {
    parameters: Parameters,
    names: ResourceNames,
    resources: Vec<ResourceDeclaration>,
    bindings: Vec<ComputedBinding>,
}

impl ResourceGraph {
    /// Assemble a graph from parts
    ///
    /// The normal path is [`GraphBuilder::build`]; this constructor
    /// exists for assembling hand-written graphs, which still go
    /// through [`validate`](crate::graph::validate) before any use.
    pub fn new(
        parameters: Parameters,
        names: ResourceNames,
        resources: Vec<ResourceDeclaration>,
        bindings: Vec<ComputedBinding>,
    ) -> Self {
        Self {
            parameters,
            names,
            resources,
            bindings,
        }
    }

    /// Parameters the graph was built from
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Naming configuration the graph was built from
    pub fn names(&self) -> &ResourceNames {
        &self.names
    }

    /// Declarations in deterministic declaration order
    pub fn resources(&self) -> &[ResourceDeclaration] {
        &self.resources
    }

    /// All computed bindings
    pub fn bindings(&self) -> &[ComputedBinding] {
        &self.bindings
    }

    /// Look up a declaration by logical name
    pub fn get(&self, name: &str) -> Option<&ResourceDeclaration> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Bindings whose resolved value lands on the given resource
    pub fn bindings_for<'a>(
        &'a self,
        target: &'a str,
    ) -> impl Iterator<Item = &'a ComputedBinding> {
        self.bindings.iter().filter(move |b| b.target == target)
    }

    /// Number of declarations in the graph
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the graph holds no declarations
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

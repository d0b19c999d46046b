//! Application Layer - Botstack
//!
//! Orchestrates the declarative provisioning model:
//! - `graph`: deterministic construction, validation and wave ordering
//!   of the resource graph
//! - `ports`: the provisioning-engine contract (the engine itself is an
//!   external collaborator)
//! - `use_cases`: the plan and apply services driven by the CLI
//!
//! The layer never talks to a provider directly and holds no state
//! between runs; every operation is a pure function of its inputs plus
//! whatever the injected engine reports.

pub mod graph;
pub mod ports;
pub mod use_cases;

pub use graph::{GraphBuilder, ResourceGraph};
pub use ports::{AppliedResource, ApplyOutcome, ProvisioningEngine};
pub use use_cases::{
    ApplyReport, ApplyService, Planner, ProvisioningPlan, ResourceResult, ResourceStatus,
};

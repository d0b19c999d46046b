//! Use cases: the plan and apply services

pub mod apply;
pub mod plan;

pub use apply::{ApplyReport, ApplyService, ResourceResult, ResourceStatus};
pub use plan::{Planner, PlannedSetting, ProvisioningPlan};

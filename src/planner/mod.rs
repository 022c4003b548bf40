//! Planning core - aggregation, costing, consolidation and orchestration
//!
//! Everything here is a pure function over the static data and the caller's
//! current selections; callers recompute from scratch whenever an input
//! changes. There is no cached state.

pub mod aggregate;
pub mod consolidate;
pub mod cost;
pub mod inventory;
pub mod plan;

pub use aggregate::{aggregate, CalculatedMaterial};
pub use consolidate::{
    consolidate, net_against_inventory, sort_for_display, total_waveplates, waveplates_by_source,
    NetRequirement,
};
pub use cost::waveplate_cost;
pub use inventory::Inventory;
pub use plan::{compute_plan, NodeState, PlanRequest, PlanSummary};

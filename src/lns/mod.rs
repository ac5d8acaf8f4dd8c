//! Large Neighborhood Search (LNS) for wave selection.
//!
//! The search repeatedly removes part of the current wave with one of two
//! destroy operators, rebuilds it with a scored greedy repair, and keeps
//! the candidate only when it is feasible and does not lose objective.
//! Destroy intensity grows while the search is stuck.
//!
//! # References
//!
//! Shaw (1998), "Using Constraint Programming and Local Search Methods to
//! Solve Vehicle Routing Problems"

mod config;
mod construct;
mod context;
mod destroy;
mod repair;
mod runner;
mod types;

pub use config::LnsConfig;
pub use construct::{best_construction, ConstructionStrategy};
pub use context::SearchContext;
pub use destroy::{DispersionDestroy, EfficiencyDestroy, WaveDestroy};
pub use repair::ScoredGreedyRepair;
pub use runner::{LnsResult, LnsRunner, OperatorUsage, SearchPhase, StopReason};
pub use types::{removal_count, DestroyOperator, RepairOperator};

//! Order batching domain: instance tables, derived index, solutions and
//! their evaluation.
//!
//! A *wave* is a subset of orders picked together. Its cost driver is the
//! number of aisles the pickers must visit, so the quantity maximized is
//! units picked per visited aisle, subject to a wave size window and
//! per-item stock limits.

mod cache;
mod evaluate;
mod index;
mod problem;
mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cache::{union_of, AisleUnionCache};
pub use index::InstanceIndex;
pub use problem::WaveProblem;
pub use types::{ItemQuantities, WaveInstance, WaveSolution};

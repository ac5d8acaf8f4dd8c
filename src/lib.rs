//! Order batching (wave picking) optimization.
//!
//! Given customer orders and warehouse aisles, both as item → quantity
//! tables, select a *wave* of orders and the aisles needed to pick them so
//! that:
//!
//! - the wave's total units lie in `[wave_size_lb, wave_size_ub]`,
//! - no item is requested beyond what the visited aisles stock,
//! - units picked per visited aisle is as high as possible.
//!
//! The engine is a Large Neighborhood Search under a time budget:
//!
//! - **wave**: instance tables, the derived per-order index, solutions,
//!   feasibility and objective.
//! - **lns**: construction heuristics, destroy and repair operators, and the
//!   search driver.
//! - **budget**: the "has time run out?" seam the caller plugs a clock into.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use u_wavepick::lns::{LnsConfig, LnsRunner};
//! use u_wavepick::wave::{WaveInstance, WaveProblem};
//! use u_wavepick::Unlimited;
//!
//! let instance = WaveInstance::new(
//!     vec![BTreeMap::from([(0, 2)]), BTreeMap::from([(1, 3)]), BTreeMap::from([(0, 100)])],
//!     vec![BTreeMap::from([(0, 5)]), BTreeMap::from([(1, 5)])],
//!     2,
//!     1,
//!     100,
//! );
//! let problem = WaveProblem::new(instance);
//! let config = LnsConfig::default().with_max_no_improve(100).with_seed(42);
//!
//! let result = LnsRunner::run(&problem, &config, &Unlimited);
//! assert!((result.best_objective - 2.5).abs() < 1e-12);
//! ```

pub mod budget;
pub mod lns;
pub mod random;
pub mod wave;

mod solve;

pub use budget::{Deadline, TimeBudget, Unlimited, DEFAULT_TIME_LIMIT};
pub use solve::{solve, solve_with_config};
pub use wave::{WaveInstance, WaveSolution};

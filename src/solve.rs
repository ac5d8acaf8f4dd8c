//! Entry points.

use crate::budget::TimeBudget;
use crate::lns::{LnsConfig, LnsResult, LnsRunner};
use crate::wave::{ItemQuantities, WaveInstance, WaveProblem, WaveSolution};

/// Selects a wave maximizing units picked per visited aisle.
///
/// `orders[i]` and `aisles[j]` map item ids to requested and available
/// quantities. The search runs with default parameters until `budget`
/// expires or it stagnates. The result is either feasible or empty; empty
/// means no feasible wave was found.
///
/// Instance validity (item ids below `n_items`, `lb <= ub`) is the caller's
/// responsibility; see [`WaveInstance::validate`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use std::time::Duration;
/// use u_wavepick::{solve, Deadline};
///
/// let orders = vec![BTreeMap::from([(0, 2)]), BTreeMap::from([(1, 3)])];
/// let aisles = vec![BTreeMap::from([(0, 5)]), BTreeMap::from([(1, 5)])];
///
/// let wave = solve(orders, aisles, 2, 1, 100, &Deadline::new(Duration::from_secs(5)));
/// assert_eq!(wave.orders().len(), 2);
/// assert_eq!(wave.aisles().len(), 2);
/// ```
pub fn solve<B>(
    orders: Vec<ItemQuantities>,
    aisles: Vec<ItemQuantities>,
    n_items: usize,
    wave_size_lb: u64,
    wave_size_ub: u64,
    budget: &B,
) -> WaveSolution
where
    B: TimeBudget + ?Sized,
{
    let instance = WaveInstance::new(orders, aisles, n_items, wave_size_lb, wave_size_ub);
    solve_with_config(instance, &LnsConfig::default(), budget).best
}

/// Like [`solve`], with explicit parameters and full run statistics.
///
/// # Panics
///
/// Panics if `config` fails [`LnsConfig::validate`].
pub fn solve_with_config<B>(instance: WaveInstance, config: &LnsConfig, budget: &B) -> LnsResult
where
    B: TimeBudget + ?Sized,
{
    let problem = WaveProblem::new(instance);
    LnsRunner::run(&problem, config, budget)
}

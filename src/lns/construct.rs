//! Construction heuristics for the seed wave.

use std::collections::BTreeSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::context::SearchContext;
use crate::wave::WaveSolution;

/// How the order list is ranked before greedy insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionStrategy {
    /// Units per touched aisle, highest first.
    Efficiency,
    /// Total units, highest first.
    Units,
    /// Uniformly shuffled.
    Random,
}

impl ConstructionStrategy {
    /// All strategies, in the order the runner tries them.
    pub const ALL: [ConstructionStrategy; 3] = [
        ConstructionStrategy::Efficiency,
        ConstructionStrategy::Units,
        ConstructionStrategy::Random,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConstructionStrategy::Efficiency => "efficiency",
            ConstructionStrategy::Units => "units",
            ConstructionStrategy::Random => "random",
        }
    }

    /// Builds one wave from scratch.
    ///
    /// The result may be empty or infeasible-shaped when no prefix of the
    /// ranking clears the wave size window.
    pub fn construct<R: Rng>(&self, ctx: &mut SearchContext<'_>, rng: &mut R) -> WaveSolution {
        let problem = ctx.problem();
        let mut ranking: Vec<usize> = (0..problem.num_orders()).collect();
        match self {
            ConstructionStrategy::Efficiency => {
                ranking.sort_by(|&a, &b| problem.efficiency(b).total_cmp(&problem.efficiency(a)));
            }
            ConstructionStrategy::Units => {
                ranking.sort_by_key(|&o| std::cmp::Reverse(problem.units_of(o)));
            }
            ConstructionStrategy::Random => ranking.shuffle(rng),
        }
        ctx.greedy_insert(BTreeSet::new(), ranking)
    }
}

/// Runs every strategy and keeps the best feasible wave.
///
/// Ties on the objective go to the earlier strategy. Returns `None` when no
/// strategy produced a feasible wave.
pub fn best_construction<R: Rng>(
    ctx: &mut SearchContext<'_>,
    rng: &mut R,
) -> Option<(ConstructionStrategy, WaveSolution)> {
    let problem = ctx.problem();
    let mut best: Option<(ConstructionStrategy, WaveSolution, f64)> = None;

    for strategy in ConstructionStrategy::ALL {
        let wave = strategy.construct(ctx, rng);
        let feasible = problem.is_feasible(&wave);
        let objective = problem.objective(&wave);
        debug!(
            "[LNS] construction '{}': {} orders, {} aisles, objective {:.4}, feasible {}",
            strategy.name(),
            wave.num_orders(),
            wave.num_aisles(),
            objective,
            feasible
        );

        if feasible && best.as_ref().is_none_or(|(_, _, b)| objective > *b) {
            best = Some((strategy, wave, objective));
        }
    }

    best.map(|(strategy, wave, _)| (strategy, wave))
}

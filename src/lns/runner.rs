//! LNS execution loop.
//!
//! # Algorithm
//!
//! 1. Seeding: run every construction strategy, keep the best feasible wave
//!    (or the empty wave if none is feasible) as current and best.
//! 2. Searching: until the budget expires or the search stagnates,
//!    a. pick a destroy operator uniformly at random,
//!    b. destroy the current wave with a ratio that grows with stagnation,
//!    c. repair it,
//!    d. accept a feasible candidate that improves the objective, or ties
//!       it with strictly more orders.
//! 3. Done: return the best wave if feasible, otherwise the empty wave.

use log::{debug, info, trace};
use rand::Rng;

use super::config::LnsConfig;
use super::construct::{best_construction, ConstructionStrategy};
use super::context::SearchContext;
use super::destroy::WaveDestroy;
use super::repair::ScoredGreedyRepair;
use super::types::{DestroyOperator, RepairOperator};
use crate::budget::TimeBudget;
use crate::random::resolve_rng;
use crate::wave::{WaveProblem, WaveSolution};

/// Why the search loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The time budget expired.
    BudgetExpired,
    /// `max_no_improve` consecutive iterations without an accepted move.
    Stagnated,
    /// `max_iterations` reached.
    IterationLimit,
}

/// Phases of one run, reported in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Seeding,
    Searching,
    Done,
}

/// Usage counters for one destroy operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorUsage {
    pub name: String,
    /// Iterations in which the operator was selected.
    pub uses: usize,
    /// Of those, iterations whose candidate was accepted.
    pub accepted: usize,
}

/// Result of an LNS run.
#[derive(Debug, Clone)]
pub struct LnsResult {
    /// The best wave found; empty if no feasible wave was found.
    pub best: WaveSolution,

    /// Objective of `best` (0.0 when empty).
    pub best_objective: f64,

    /// Strategy that produced the seed wave, if any was feasible.
    pub seed_strategy: Option<ConstructionStrategy>,

    /// Objective of the seed wave.
    pub seed_objective: f64,

    /// Search iterations executed.
    pub iterations: usize,

    /// Number of new best waves found during the search.
    pub improvements: usize,

    /// Number of accepted candidates.
    pub accepted_moves: usize,

    /// Why the search loop ended.
    pub stop_reason: StopReason,

    /// RNG seed actually used.
    pub seed: u64,

    /// Per destroy operator counters, in operator order.
    pub destroy_usage: Vec<OperatorUsage>,

    /// Best objective sampled every `history_interval` iterations.
    pub objective_history: Vec<f64>,

    /// Aisle-union memo hits.
    pub cache_hits: usize,

    /// Aisle-union memo misses.
    pub cache_misses: usize,
}

/// Executes the wave LNS.
pub struct LnsRunner;

impl LnsRunner {
    /// Runs the LNS with the built-in operators.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`LnsConfig::validate`].
    pub fn run<B>(problem: &WaveProblem, config: &LnsConfig, budget: &B) -> LnsResult
    where
        B: TimeBudget + ?Sized,
    {
        let repair = ScoredGreedyRepair::new(config.shared_aisle_bonus);
        Self::run_with_operators(problem, &WaveDestroy::all(), &repair, config, budget)
    }

    /// Runs the LNS with caller-supplied operators.
    ///
    /// One destroy operator is drawn uniformly per iteration.
    ///
    /// # Panics
    ///
    /// Panics if `config` is invalid or `destroy_ops` is empty.
    pub fn run_with_operators<D, RP, B>(
        problem: &WaveProblem,
        destroy_ops: &[D],
        repair: &RP,
        config: &LnsConfig,
        budget: &B,
    ) -> LnsResult
    where
        D: DestroyOperator,
        RP: RepairOperator,
        B: TimeBudget + ?Sized,
    {
        config.validate().expect("invalid LnsConfig");
        assert!(
            !destroy_ops.is_empty(),
            "at least one destroy operator required"
        );

        let (mut rng, seed) = resolve_rng(config.seed);
        let mut ctx = SearchContext::new(problem, config.aisle_cache_max_orders);

        info!(
            "[LNS] {:?}: {} orders, {} aisles, wave size [{}, {}], seed {}",
            SearchPhase::Seeding,
            problem.num_orders(),
            problem.instance().num_aisles(),
            problem.wave_size_lb(),
            problem.wave_size_ub(),
            seed
        );

        let (seed_strategy, mut current) = match best_construction(&mut ctx, &mut rng) {
            Some((strategy, wave)) => (Some(strategy), wave),
            None => {
                debug!("[LNS] no feasible construction, starting from the empty wave");
                (None, WaveSolution::empty())
            }
        };
        let mut current_objective = problem.objective(&current);
        let seed_objective = current_objective;
        let mut best = current.clone();
        let mut best_objective = current_objective;

        let mut destroy_usage: Vec<OperatorUsage> = destroy_ops
            .iter()
            .map(|op| OperatorUsage {
                name: op.name().to_string(),
                uses: 0,
                accepted: 0,
            })
            .collect();

        let mut iterations = 0usize;
        let mut no_improve = 0usize;
        let mut improvements = 0usize;
        let mut accepted_moves = 0usize;

        let history_interval = config.history_interval.max(1);
        let mut objective_history = vec![best_objective];

        info!(
            "[LNS] {:?}: seed objective {:.4} ({} orders, {} aisles)",
            SearchPhase::Searching,
            seed_objective,
            current.num_orders(),
            current.num_aisles()
        );

        let stop_reason = loop {
            if budget.is_expired() {
                break StopReason::BudgetExpired;
            }
            if no_improve >= config.max_no_improve {
                break StopReason::Stagnated;
            }
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break StopReason::IterationLimit;
            }

            let ratio = config.destroy_ratio(no_improve);
            let d_idx = rng.random_range(0..destroy_ops.len());
            destroy_usage[d_idx].uses += 1;

            let destroyed = destroy_ops[d_idx].destroy(&mut ctx, &current, ratio);
            let candidate = repair.repair(&mut ctx, &destroyed);

            // Strict improvement, or a tie that covers more orders.
            let mut accepted = false;
            if problem.is_feasible(&candidate) {
                let objective = problem.objective(&candidate);
                if objective > current_objective
                    || (objective == current_objective
                        && candidate.num_orders() > current.num_orders())
                {
                    current = candidate;
                    current_objective = objective;
                    accepted = true;
                }
            }

            if accepted {
                no_improve = 0;
                accepted_moves += 1;
                destroy_usage[d_idx].accepted += 1;

                if current_objective > best_objective {
                    best = current.clone();
                    best_objective = current_objective;
                    improvements += 1;
                    debug!(
                        "[LNS] iteration {}: new best {:.4} ({} orders, {} aisles) via '{}'",
                        iterations,
                        best_objective,
                        best.num_orders(),
                        best.num_aisles(),
                        destroy_ops[d_idx].name()
                    );
                }
            } else {
                no_improve += 1;
            }

            trace!(
                "[LNS] iteration {}: ratio {:.3}, op '{}', accepted {}, current {:.4}",
                iterations,
                ratio,
                destroy_ops[d_idx].name(),
                accepted,
                current_objective
            );

            iterations += 1;
            if iterations.is_multiple_of(history_interval) {
                objective_history.push(best_objective);
            }
        };

        if objective_history
            .last()
            .is_none_or(|&last| (last - best_objective).abs() > 1e-15)
        {
            objective_history.push(best_objective);
        }

        if !problem.is_feasible(&best) {
            best = WaveSolution::empty();
            best_objective = 0.0;
        }

        info!(
            "[LNS] {:?}: {:?} after {} iterations, best objective {:.4} ({} orders, {} aisles)",
            SearchPhase::Done,
            stop_reason,
            iterations,
            best_objective,
            best.num_orders(),
            best.num_aisles()
        );

        LnsResult {
            best,
            best_objective,
            seed_strategy,
            seed_objective,
            iterations,
            improvements,
            accepted_moves,
            stop_reason,
            seed,
            destroy_usage,
            objective_history,
            cache_hits: ctx.cache().hits(),
            cache_misses: ctx.cache().misses(),
        }
    }

    /// Runs `starts` independent searches and keeps the best result.
    ///
    /// Run `i` uses seed `base + i`, where `base` is `config.seed` or a
    /// random draw. With the `parallel` feature the runs share the rayon
    /// thread pool; otherwise they run one after another. Ties on the
    /// objective go to the wave with more orders, then to the lower run.
    ///
    /// # Panics
    ///
    /// Panics if `config` is invalid or `starts` is zero.
    pub fn run_multi_start<B>(
        problem: &WaveProblem,
        config: &LnsConfig,
        budget: &B,
        starts: usize,
    ) -> LnsResult
    where
        B: TimeBudget + Sync + ?Sized,
    {
        assert!(starts > 0, "at least one start required");
        let base = config.seed.unwrap_or_else(rand::random);
        let run = |i: usize| {
            let run_config = config.clone().with_seed(base.wrapping_add(i as u64));
            Self::run(problem, &run_config, budget)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<LnsResult> = {
            use rayon::prelude::*;
            (0..starts).into_par_iter().map(run).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let results: Vec<LnsResult> = (0..starts).map(run).collect();

        results
            .into_iter()
            .reduce(|best, result| if is_better(&result, &best) { result } else { best })
            .expect("at least one start")
    }
}

fn is_better(a: &LnsResult, b: &LnsResult) -> bool {
    a.best_objective > b.best_objective
        || (a.best_objective == b.best_objective && a.best.num_orders() > b.best.num_orders())
}

//! Per-run search context shared by the operators.

use std::collections::BTreeSet;

use crate::wave::{AisleUnionCache, WaveProblem, WaveSolution};

/// Read-only problem plus the memo tables owned by one search run.
pub struct SearchContext<'p> {
    problem: &'p WaveProblem,
    cache: AisleUnionCache,
}

impl<'p> SearchContext<'p> {
    pub fn new(problem: &'p WaveProblem, aisle_cache_max_orders: usize) -> Self {
        Self {
            problem,
            cache: AisleUnionCache::new(aisle_cache_max_orders),
        }
    }

    pub fn problem(&self) -> &'p WaveProblem {
        self.problem
    }

    pub fn cache(&self) -> &AisleUnionCache {
        &self.cache
    }

    /// Aisle union of `orders`, memoized for small sets.
    pub fn aisles_for(&mut self, orders: &BTreeSet<usize>) -> BTreeSet<usize> {
        self.cache.aisles_for(self.problem.index(), orders)
    }

    /// Builds a solution whose aisle set is derived from `orders`.
    pub fn solution_from(&mut self, orders: BTreeSet<usize>) -> WaveSolution {
        let aisles = self.aisles_for(&orders);
        WaveSolution::new(orders, aisles)
    }

    /// Greedy single-pass insertion shared by construction and repair.
    ///
    /// Starting from `base`, each candidate in turn is skipped if it would
    /// push the wave past the upper bound; otherwise it is added tentatively
    /// and kept only if the tentative wave is feasible. A rejected candidate
    /// is never reconsidered. Candidates already in `base` are ignored.
    pub fn greedy_insert<I>(&mut self, base: BTreeSet<usize>, candidates: I) -> WaveSolution
    where
        I: IntoIterator<Item = usize>,
    {
        let problem = self.problem;
        let ub = problem.wave_size_ub();

        let mut units: u64 = base.iter().map(|&o| problem.units_of(o)).sum();
        let mut aisles = self.aisles_for(&base);
        let mut orders = base;

        for order in candidates {
            if orders.contains(&order) {
                continue;
            }
            let order_units = problem.units_of(order);
            if units + order_units > ub {
                continue;
            }

            let mut tentative_orders = orders.clone();
            tentative_orders.insert(order);
            let mut tentative_aisles = aisles.clone();
            tentative_aisles.extend(problem.aisles_of(order).iter().copied());

            let tentative = WaveSolution::new(tentative_orders, tentative_aisles);
            if problem.is_feasible(&tentative) {
                (orders, aisles) = tentative.into_parts();
                units += order_units;
            }
        }

        self.solution_from(orders)
    }
}

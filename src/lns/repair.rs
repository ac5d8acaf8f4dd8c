//! Scored greedy repair.

use std::collections::BTreeSet;

use super::context::SearchContext;
use super::types::RepairOperator;
use crate::wave::{WaveProblem, WaveSolution};

/// Re-inserts unselected orders in order of an aisle-aware score.
///
/// The score of an unselected order against the current aisle set is
///
/// ```text
/// units / max(1, new_aisles) + shared_aisles * shared_aisle_bonus
/// ```
///
/// where `new_aisles` counts the aisles the order would open and
/// `shared_aisles` those already visited. Orders are tried once, best score
/// first (ties: lowest order id), with the same greedy insertion rule as
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct ScoredGreedyRepair {
    pub shared_aisle_bonus: f64,
}

impl Default for ScoredGreedyRepair {
    fn default() -> Self {
        Self {
            shared_aisle_bonus: 0.5,
        }
    }
}

impl ScoredGreedyRepair {
    pub fn new(shared_aisle_bonus: f64) -> Self {
        Self { shared_aisle_bonus }
    }

    /// Insertion score of `order` against the currently visited aisles.
    pub fn score(&self, problem: &WaveProblem, order: usize, visited: &BTreeSet<usize>) -> f64 {
        let aisles = problem.aisles_of(order);
        let shared = aisles.iter().filter(|&a| visited.contains(a)).count();
        let new = aisles.len() - shared;
        problem.units_of(order) as f64 / new.max(1) as f64
            + shared as f64 * self.shared_aisle_bonus
    }
}

impl RepairOperator for ScoredGreedyRepair {
    fn name(&self) -> &str {
        "scored-greedy"
    }

    fn repair(&self, ctx: &mut SearchContext<'_>, solution: &WaveSolution) -> WaveSolution {
        let problem = ctx.problem();
        let base = solution.orders().clone();
        let visited = ctx.aisles_for(&base);

        let mut scored: Vec<(usize, f64)> = (0..problem.num_orders())
            .filter(|o| !base.contains(o))
            .map(|o| (o, self.score(problem, o, &visited)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        ctx.greedy_insert(base, scored.into_iter().map(|(o, _)| o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::fixtures::{
        exact_ten_instance, quantities, ten_order_instance, two_aisle_instance,
    };
    use crate::wave::WaveInstance;

    #[test]
    fn test_score_formula() {
        let problem = WaveProblem::new(ten_order_instance());
        let repair = ScoredGreedyRepair::default();
        let visited = BTreeSet::from([0, 1]);

        // Order 3: 4 units, aisles 0..=3 → 2 new, 2 shared.
        assert!((repair.score(&problem, 3, &visited) - (2.0 + 1.0)).abs() < 1e-12);
        // Order 8: 9 units in aisle 4 only → 1 new.
        assert!((repair.score(&problem, 8, &visited) - 9.0).abs() < 1e-12);
        // Order 5: 6 units in aisle 1 → 0 new, 1 shared.
        assert!((repair.score(&problem, 5, &visited) - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_repair_restores_two_aisle_wave() {
        let problem = WaveProblem::new(two_aisle_instance());
        let mut ctx = SearchContext::new(&problem, 20);
        let partial = ctx.solution_from(BTreeSet::from([0]));

        let repaired = ScoredGreedyRepair::default().repair(&mut ctx, &partial);
        assert_eq!(repaired.orders(), &BTreeSet::from([0, 1]));
        assert_eq!(repaired.aisles(), &BTreeSet::from([0, 1]));
        assert!(problem.is_feasible(&repaired));
    }

    #[test]
    fn test_repair_from_empty() {
        let problem = WaveProblem::new(ten_order_instance());
        let mut ctx = SearchContext::new(&problem, 20);

        let repaired = ScoredGreedyRepair::default().repair(&mut ctx, &WaveSolution::empty());
        assert_eq!(repaired.num_orders(), 10);
        assert!(problem.is_feasible(&repaired));
    }

    #[test]
    fn test_repair_never_drops_orders() {
        let problem = WaveProblem::new(ten_order_instance());
        let mut ctx = SearchContext::new(&problem, 20);
        let partial = ctx.solution_from(BTreeSet::from([2, 7]));

        let repaired = ScoredGreedyRepair::default().repair(&mut ctx, &partial);
        assert!(repaired.orders().is_superset(partial.orders()));
    }

    #[test]
    fn test_repair_respects_upper_bound() {
        let mut instance = ten_order_instance();
        instance.wave_size_ub = 20;
        let problem = WaveProblem::new(instance);
        let mut ctx = SearchContext::new(&problem, 20);

        let repaired = ScoredGreedyRepair::default().repair(&mut ctx, &WaveSolution::empty());
        assert!(problem.is_feasible(&repaired));
        assert!(problem.total_units(&repaired) <= 20);
    }

    #[test]
    fn test_repair_cannot_clear_exact_bound() {
        let problem = WaveProblem::new(exact_ten_instance());
        let mut ctx = SearchContext::new(&problem, 20);
        let repaired = ScoredGreedyRepair::default().repair(&mut ctx, &WaveSolution::empty());
        assert_eq!(repaired, WaveSolution::empty());
    }

    #[test]
    fn test_repair_tie_break_lowest_id() {
        // Three identical 4-unit orders; only two fit under the upper bound.
        let instance = WaveInstance::new(
            vec![quantities(&[(0, 4)]); 3],
            vec![quantities(&[(0, 100)])],
            1,
            1,
            8,
        );
        let problem = WaveProblem::new(instance);
        let mut ctx = SearchContext::new(&problem, 20);
        let repair = ScoredGreedyRepair::default();

        let visited = BTreeSet::new();
        let scores: Vec<f64> = (0..3).map(|o| repair.score(&problem, o, &visited)).collect();
        assert!(scores.iter().all(|&s| s == scores[0]));

        let repaired = repair.repair(&mut ctx, &WaveSolution::empty());
        assert_eq!(repaired.orders(), &BTreeSet::from([0, 1]));
        assert_eq!(repaired.aisles(), &BTreeSet::from([0]));

        let partial = ctx.solution_from(BTreeSet::from([2]));
        let repaired = repair.repair(&mut ctx, &partial);
        assert_eq!(repaired.orders(), &BTreeSet::from([0, 2]));
    }
}

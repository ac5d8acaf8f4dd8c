//! Destroy operators.
//!
//! Both operators rank the selected orders, drop the first
//! `max(1, round(n × ratio))` of the ranking and re-derive the aisle set.
//! Ties keep ascending order id.

use std::collections::BTreeSet;

use super::context::SearchContext;
use super::types::{removal_count, DestroyOperator};
use crate::wave::WaveSolution;

/// Removes the orders that touch the most aisles first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispersionDestroy;

impl DestroyOperator for DispersionDestroy {
    fn name(&self) -> &str {
        "dispersion"
    }

    fn destroy(
        &self,
        ctx: &mut SearchContext<'_>,
        solution: &WaveSolution,
        ratio: f64,
    ) -> WaveSolution {
        let problem = ctx.problem();
        remove_ranked(ctx, solution, ratio, |ranked| {
            ranked.sort_by_key(|&o| std::cmp::Reverse(problem.aisles_of(o).len()));
        })
    }
}

/// Removes the orders with the fewest units per touched aisle first.
#[derive(Debug, Clone, Copy, Default)]
pub struct EfficiencyDestroy;

impl DestroyOperator for EfficiencyDestroy {
    fn name(&self) -> &str {
        "efficiency"
    }

    fn destroy(
        &self,
        ctx: &mut SearchContext<'_>,
        solution: &WaveSolution,
        ratio: f64,
    ) -> WaveSolution {
        let problem = ctx.problem();
        remove_ranked(ctx, solution, ratio, |ranked| {
            ranked.sort_by(|&a, &b| problem.efficiency(a).total_cmp(&problem.efficiency(b)));
        })
    }
}

/// The built-in destroy operators, picked uniformly by the runner.
#[derive(Debug, Clone, Copy)]
pub enum WaveDestroy {
    Dispersion(DispersionDestroy),
    Efficiency(EfficiencyDestroy),
}

impl WaveDestroy {
    /// Both built-in operators, in a fixed order.
    pub fn all() -> [WaveDestroy; 2] {
        [
            WaveDestroy::Dispersion(DispersionDestroy),
            WaveDestroy::Efficiency(EfficiencyDestroy),
        ]
    }
}

impl DestroyOperator for WaveDestroy {
    fn name(&self) -> &str {
        match self {
            WaveDestroy::Dispersion(d) => d.name(),
            WaveDestroy::Efficiency(d) => d.name(),
        }
    }

    fn destroy(
        &self,
        ctx: &mut SearchContext<'_>,
        solution: &WaveSolution,
        ratio: f64,
    ) -> WaveSolution {
        match self {
            WaveDestroy::Dispersion(d) => d.destroy(ctx, solution, ratio),
            WaveDestroy::Efficiency(d) => d.destroy(ctx, solution, ratio),
        }
    }
}

/// Ranks the selected orders with `rank` (a stable sort over ascending ids)
/// and removes the head of the ranking.
fn remove_ranked<F>(
    ctx: &mut SearchContext<'_>,
    solution: &WaveSolution,
    ratio: f64,
    rank: F,
) -> WaveSolution
where
    F: FnOnce(&mut Vec<usize>),
{
    if solution.orders().is_empty() {
        return solution.clone();
    }

    let mut ranked: Vec<usize> = solution.orders().iter().copied().collect();
    rank(&mut ranked);

    let k = removal_count(ranked.len(), ratio);
    let removed: BTreeSet<usize> = ranked[..k].iter().copied().collect();
    let remaining: BTreeSet<usize> = solution
        .orders()
        .iter()
        .copied()
        .filter(|o| !removed.contains(o))
        .collect();

    ctx.solution_from(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::fixtures::ten_order_instance;
    use crate::wave::WaveProblem;

    fn full_wave(ctx: &mut SearchContext<'_>) -> WaveSolution {
        ctx.solution_from((0..10).collect())
    }

    #[test]
    fn test_dispersion_floor_removes_one() {
        let problem = WaveProblem::new(ten_order_instance());
        let mut ctx = SearchContext::new(&problem, 20);
        let wave = full_wave(&mut ctx);

        let destroyed = DispersionDestroy.destroy(&mut ctx, &wave, 0.1);
        assert_eq!(destroyed.num_orders(), 9);
        assert!(!destroyed.orders().contains(&4));
    }

    #[test]
    fn test_dispersion_ceiling_removes_three() {
        let problem = WaveProblem::new(ten_order_instance());
        let mut ctx = SearchContext::new(&problem, 20);
        let wave = full_wave(&mut ctx);

        let destroyed = DispersionDestroy.destroy(&mut ctx, &wave, 0.3);
        let expected: BTreeSet<usize> = [0, 1, 5, 6, 7, 8, 9].into();
        assert_eq!(destroyed.orders(), &expected);
    }

    #[test]
    fn test_efficiency_removes_least_efficient() {
        let problem = WaveProblem::new(ten_order_instance());
        let mut ctx = SearchContext::new(&problem, 20);
        let wave = full_wave(&mut ctx);

        let destroyed = EfficiencyDestroy.destroy(&mut ctx, &wave, 0.3);
        let expected: BTreeSet<usize> = [3, 4, 5, 6, 7, 8, 9].into();
        assert_eq!(destroyed.orders(), &expected);

        let destroyed = EfficiencyDestroy.destroy(&mut ctx, &wave, 0.1);
        assert!(!destroyed.orders().contains(&0));
        assert_eq!(destroyed.num_orders(), 9);
    }

    #[test]
    fn test_aisles_recomputed() {
        let problem = WaveProblem::new(ten_order_instance());
        let mut ctx = SearchContext::new(&problem, 20);
        let wave = ctx.solution_from([0, 4, 5].into());

        // Order 4 is the only one reaching aisles 2..=4.
        let destroyed = DispersionDestroy.destroy(&mut ctx, &wave, 0.1);
        assert_eq!(destroyed.orders(), &BTreeSet::from([0, 5]));
        assert_eq!(destroyed.aisles(), &BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_empty_wave_unchanged() {
        let problem = WaveProblem::new(ten_order_instance());
        let mut ctx = SearchContext::new(&problem, 20);
        for op in WaveDestroy::all() {
            let destroyed = op.destroy(&mut ctx, &WaveSolution::empty(), 0.3);
            assert_eq!(destroyed, WaveSolution::empty());
        }
    }

    #[test]
    fn test_single_order_wave_emptied() {
        let problem = WaveProblem::new(ten_order_instance());
        let mut ctx = SearchContext::new(&problem, 20);
        let wave = ctx.solution_from([7].into());
        let destroyed = EfficiencyDestroy.destroy(&mut ctx, &wave, 0.1);
        assert!(destroyed.orders().is_empty());
        assert!(destroyed.aisles().is_empty());
    }

    #[test]
    fn test_enum_names() {
        let ops = WaveDestroy::all();
        let names: Vec<&str> = ops.iter().map(|op| op.name()).collect();
        assert_eq!(names, ["dispersion", "efficiency"]);
    }
}

//! Feasibility check and objective.
//!
//! Both are pure functions of a solution and the problem. Infeasibility is
//! an ordinary outcome of search moves and is reported as `false`, never as
//! an error.

use super::problem::WaveProblem;
use super::types::WaveSolution;

impl WaveProblem {
    /// Hard-constraint check with no partial credit.
    ///
    /// A solution is feasible when both sets are non-empty, its total units
    /// lie in `[wave_size_lb, wave_size_ub]`, and no item is requested in
    /// larger quantity than the visited aisles stock. Order or aisle ids
    /// outside the instance make the solution infeasible.
    pub fn is_feasible(&self, solution: &WaveSolution) -> bool {
        if solution.is_empty() {
            return false;
        }

        let instance = self.instance();
        let mut picked = vec![0u64; instance.n_items];
        let mut available = vec![0u64; instance.n_items];

        for &o in solution.orders() {
            let Some(order) = instance.orders.get(o) else {
                return false;
            };
            for (&item, &qty) in order {
                match picked.get_mut(item) {
                    Some(slot) => *slot += u64::from(qty),
                    None if qty == 0 => {}
                    None => return false,
                }
            }
        }

        for &a in solution.aisles() {
            let Some(aisle) = instance.aisles.get(a) else {
                return false;
            };
            for (&item, &qty) in aisle {
                if let Some(slot) = available.get_mut(item) {
                    *slot += u64::from(qty);
                }
            }
        }

        let total: u64 = picked.iter().sum();
        if total < instance.wave_size_lb || total > instance.wave_size_ub {
            return false;
        }

        picked.iter().zip(&available).all(|(p, a)| p <= a)
    }

    /// Total requested units of the selected orders. Unknown order ids
    /// contribute nothing.
    pub fn total_units(&self, solution: &WaveSolution) -> u64 {
        solution
            .orders()
            .iter()
            .filter_map(|&o| self.index().get_units(o))
            .sum()
    }

    /// Units picked per visited aisle. Higher is better.
    ///
    /// 0.0 for a solution with an empty order or aisle set. Feasibility is
    /// not checked here.
    pub fn objective(&self, solution: &WaveSolution) -> f64 {
        if solution.is_empty() {
            return 0.0;
        }
        self.total_units(solution) as f64 / solution.num_aisles().max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::fixtures::{exact_ten_instance, ten_order_instance, two_aisle_instance};
    use std::collections::BTreeSet;

    fn solution(orders: &[usize], aisles: &[usize]) -> WaveSolution {
        WaveSolution::new(
            orders.iter().copied().collect(),
            aisles.iter().copied().collect(),
        )
    }

    #[test]
    fn test_two_orders_two_aisles() {
        let problem = WaveProblem::new(two_aisle_instance());
        let wave = solution(&[0, 1], &[0, 1]);
        assert!(problem.is_feasible(&wave));
        assert!((problem.objective(&wave) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_overpicked_order_infeasible() {
        let problem = WaveProblem::new(two_aisle_instance());
        assert!(!problem.is_feasible(&solution(&[2], &[0])));
        assert!(!problem.is_feasible(&solution(&[2], &[0, 1])));
    }

    #[test]
    fn test_empty_sets_infeasible_and_zero() {
        let problem = WaveProblem::new(two_aisle_instance());
        for wave in [
            WaveSolution::empty(),
            solution(&[0], &[]),
            solution(&[], &[0]),
        ] {
            assert!(!problem.is_feasible(&wave));
            assert_eq!(problem.objective(&wave), 0.0);
        }
    }

    #[test]
    fn test_missing_aisle_infeasible() {
        let problem = WaveProblem::new(two_aisle_instance());
        assert!(!problem.is_feasible(&solution(&[0, 1], &[0])));
    }

    #[test]
    fn test_wave_bounds_inclusive() {
        let problem = WaveProblem::new(exact_ten_instance());
        assert!(!problem.is_feasible(&solution(&[0, 1, 2], &[0])));
        assert!(!problem.is_feasible(&solution(&[0, 1, 2, 3], &[0])));

        let mut instance = exact_ten_instance();
        instance.wave_size_lb = 9;
        instance.wave_size_ub = 9;
        let problem = WaveProblem::new(instance);
        assert!(problem.is_feasible(&solution(&[0, 1, 2], &[0])));
    }

    #[test]
    fn test_out_of_range_ids_infeasible() {
        let problem = WaveProblem::new(two_aisle_instance());
        assert!(!problem.is_feasible(&solution(&[7], &[0])));
        assert!(!problem.is_feasible(&solution(&[0], &[5])));
    }

    #[test]
    fn test_out_of_range_orders_add_no_units() {
        let problem = WaveProblem::new(two_aisle_instance());
        let stray = solution(&[7], &[0]);
        assert_eq!(problem.total_units(&stray), 0);
        assert_eq!(problem.objective(&stray), 0.0);

        let mixed = solution(&[0, 7], &[0]);
        assert!(!problem.is_feasible(&mixed));
        assert_eq!(problem.total_units(&mixed), 2);
        assert!((problem.objective(&mixed) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_objective_ignores_feasibility() {
        let problem = WaveProblem::new(two_aisle_instance());
        let wave = solution(&[2], &[0]);
        assert!(!problem.is_feasible(&wave));
        assert!((problem.objective(&wave) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_wave() {
        let problem = WaveProblem::new(ten_order_instance());
        let orders: BTreeSet<usize> = (0..10).collect();
        let wave = WaveSolution::new(orders, (0..5).collect());
        assert!(problem.is_feasible(&wave));
        assert_eq!(problem.total_units(&wave), 49);
        assert!((problem.objective(&wave) - 49.0 / 5.0).abs() < 1e-12);
    }
}

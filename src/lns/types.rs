//! Operator traits for the wave LNS.

use super::context::SearchContext;
use crate::wave::WaveSolution;

/// A destroy operator removes orders from a wave.
///
/// Implementations return a new solution whose aisle set is recomputed from
/// the remaining orders. `ratio` is the fraction of selected orders to
/// remove, in (0, 1). An empty wave is returned unchanged.
pub trait DestroyOperator: Send + Sync {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Removes part of the wave.
    fn destroy(&self, ctx: &mut SearchContext<'_>, solution: &WaveSolution, ratio: f64)
        -> WaveSolution;
}

/// A repair operator grows a (partially destroyed) wave back.
///
/// Implementations never drop an order they were given and return a
/// solution with a freshly derived aisle set.
pub trait RepairOperator: Send + Sync {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Re-inserts orders into the wave.
    fn repair(&self, ctx: &mut SearchContext<'_>, solution: &WaveSolution) -> WaveSolution;
}

/// Number of orders a destroy step removes from a wave of `selected` orders.
///
/// `max(1, round(selected × ratio))`, never more than `selected`.
pub fn removal_count(selected: usize, ratio: f64) -> usize {
    let k = (selected as f64 * ratio).round() as usize;
    k.max(1).min(selected)
}

//! Instance tables and the solution value type.

use std::collections::{BTreeMap, BTreeSet};

/// Item id → quantity. Used for both order demand and aisle stock.
pub type ItemQuantities = BTreeMap<usize, u32>;

/// Raw order batching instance.
///
/// Order `i` is `orders[i]`, aisle `j` is `aisles[j]`. Item ids are dense in
/// `0..n_items`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveInstance {
    /// Requested quantity per item, one map per order.
    pub orders: Vec<ItemQuantities>,

    /// Available quantity per item, one map per aisle.
    pub aisles: Vec<ItemQuantities>,

    /// Number of distinct item ids.
    pub n_items: usize,

    /// Minimum total units in a wave (inclusive).
    pub wave_size_lb: u64,

    /// Maximum total units in a wave (inclusive).
    pub wave_size_ub: u64,
}

impl WaveInstance {
    pub fn new(
        orders: Vec<ItemQuantities>,
        aisles: Vec<ItemQuantities>,
        n_items: usize,
        wave_size_lb: u64,
        wave_size_ub: u64,
    ) -> Self {
        Self {
            orders,
            aisles,
            n_items,
            wave_size_lb,
            wave_size_ub,
        }
    }

    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn num_aisles(&self) -> usize {
        self.aisles.len()
    }

    /// Validates bounds and item ids.
    ///
    /// The search itself does not call this; loaders should.
    pub fn validate(&self) -> Result<(), String> {
        if self.wave_size_lb > self.wave_size_ub {
            return Err(format!(
                "wave_size_lb ({}) must be <= wave_size_ub ({})",
                self.wave_size_lb, self.wave_size_ub
            ));
        }
        for (o, order) in self.orders.iter().enumerate() {
            if let Some(&item) = order.keys().find(|&&item| item >= self.n_items) {
                return Err(format!(
                    "order {o} references item {item}, but n_items is {}",
                    self.n_items
                ));
            }
        }
        for (a, aisle) in self.aisles.iter().enumerate() {
            if let Some(&item) = aisle.keys().find(|&&item| item >= self.n_items) {
                return Err(format!(
                    "aisle {a} references item {item}, but n_items is {}",
                    self.n_items
                ));
            }
        }
        Ok(())
    }
}

/// A wave: selected orders plus the aisles visited to pick them.
///
/// Operators keep `aisles` equal to the union of the selected orders'
/// aisles; the evaluator trusts it as given. An empty solution means
/// "no feasible wave".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveSolution {
    orders: BTreeSet<usize>,
    aisles: BTreeSet<usize>,
}

impl WaveSolution {
    pub fn new(orders: BTreeSet<usize>, aisles: BTreeSet<usize>) -> Self {
        Self { orders, aisles }
    }

    /// The "no feasible wave" answer.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &BTreeSet<usize> {
        &self.orders
    }

    pub fn aisles(&self) -> &BTreeSet<usize> {
        &self.aisles
    }

    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn num_aisles(&self) -> usize {
        self.aisles.len()
    }

    /// True when either set is empty. Such a solution is never feasible.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() || self.aisles.is_empty()
    }

    pub fn into_parts(self) -> (BTreeSet<usize>, BTreeSet<usize>) {
        (self.orders, self.aisles)
    }
}

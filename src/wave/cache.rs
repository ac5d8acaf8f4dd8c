//! Bounded memo of aisle unions for small order sets.

use std::collections::{BTreeSet, HashMap};

use super::index::InstanceIndex;

/// Maps a set of order ids to the union of their aisles.
///
/// Only sets with at most `max_orders` members are stored, which keeps the
/// table from growing with every large wave the search visits. Entries are
/// never evicted. A miss always recomputes from the index, so the cache
/// can be dropped at any time without changing results.
#[derive(Debug, Clone)]
pub struct AisleUnionCache {
    max_orders: usize,
    entries: HashMap<Vec<usize>, Vec<usize>>,
    hits: usize,
    misses: usize,
}

impl AisleUnionCache {
    pub fn new(max_orders: usize) -> Self {
        Self {
            max_orders,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Aisle union of `orders`.
    pub fn aisles_for(
        &mut self,
        index: &InstanceIndex,
        orders: &BTreeSet<usize>,
    ) -> BTreeSet<usize> {
        if orders.len() > self.max_orders {
            self.misses += 1;
            return union_of(index, orders);
        }

        let key: Vec<usize> = orders.iter().copied().collect();
        if let Some(aisles) = self.entries.get(&key) {
            self.hits += 1;
            return aisles.iter().copied().collect();
        }

        self.misses += 1;
        let aisles = union_of(index, orders);
        self.entries.insert(key, aisles.iter().copied().collect());
        aisles
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

/// Uncached aisle union.
pub fn union_of(index: &InstanceIndex, orders: &BTreeSet<usize>) -> BTreeSet<usize> {
    orders
        .iter()
        .flat_map(|&o| index.aisles_of(o).iter().copied())
        .collect()
}

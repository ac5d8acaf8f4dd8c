//! Derived per-order data, built once per solve call.

use super::types::WaveInstance;

/// Read-only data derived from the raw tables.
///
/// `order_aisles[o]` holds, in ascending order, every aisle that stocks at
/// least one item order `o` requests. Items requested with quantity 0 and
/// aisle entries with quantity 0 do not count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIndex {
    order_units: Vec<u64>,
    order_aisles: Vec<Vec<usize>>,
    item_aisles: Vec<Vec<usize>>,
}

impl InstanceIndex {
    /// Builds the index through an item → aisles inverted index.
    ///
    /// Item ids at or beyond `n_items` are ignored; they can never be
    /// stocked, so orders requesting them simply gain no aisle for them.
    pub fn build(instance: &WaveInstance) -> Self {
        let mut item_aisles = vec![Vec::new(); instance.n_items];
        for (aisle, stock) in instance.aisles.iter().enumerate() {
            for (&item, &qty) in stock {
                if qty > 0 && item < instance.n_items {
                    item_aisles[item].push(aisle);
                }
            }
        }

        let mut index = Self {
            order_units: Vec::with_capacity(instance.num_orders()),
            order_aisles: Vec::with_capacity(instance.num_orders()),
            item_aisles,
        };
        for order in &instance.orders {
            let mut aisles: Vec<usize> = order
                .iter()
                .filter(|&(&item, &qty)| qty > 0 && item < instance.n_items)
                .flat_map(|(&item, _)| index.aisles_stocking(item).iter().copied())
                .collect();
            aisles.sort_unstable();
            aisles.dedup();

            index.order_units.push(order.values().map(|&q| u64::from(q)).sum());
            index.order_aisles.push(aisles);
        }

        index
    }

    pub fn num_orders(&self) -> usize {
        self.order_units.len()
    }

    /// Total requested units of an order.
    pub fn units_of(&self, order: usize) -> u64 {
        self.order_units[order]
    }

    /// Like [`units_of`](Self::units_of), `None` for an unknown order.
    pub fn get_units(&self, order: usize) -> Option<u64> {
        self.order_units.get(order).copied()
    }

    /// Sorted aisles an order touches.
    pub fn aisles_of(&self, order: usize) -> &[usize] {
        &self.order_aisles[order]
    }

    /// Sorted aisles stocking an item.
    pub fn aisles_stocking(&self, item: usize) -> &[usize] {
        &self.item_aisles[item]
    }

    /// Units per touched aisle; orders touching no aisle count as one.
    pub fn efficiency(&self, order: usize) -> f64 {
        self.order_units[order] as f64 / self.order_aisles[order].len().max(1) as f64
    }
}

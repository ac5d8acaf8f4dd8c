//! Small hand-built instances shared by the unit tests.

use super::types::{ItemQuantities, WaveInstance};

pub(crate) fn quantities(pairs: &[(usize, u32)]) -> ItemQuantities {
    pairs.iter().copied().collect()
}

/// Order 0 needs 2 × item 0 (aisle 0), order 1 needs 3 × item 1 (aisle 1),
/// order 2 needs 100 × item 0, more than aisle 0 stocks.
pub(crate) fn two_aisle_instance() -> WaveInstance {
    WaveInstance::new(
        vec![
            quantities(&[(0, 2)]),
            quantities(&[(1, 3)]),
            quantities(&[(0, 100)]),
        ],
        vec![quantities(&[(0, 5)]), quantities(&[(1, 5)])],
        2,
        1,
        100,
    )
}

/// Every order has 3 units and the wave must be exactly 10 units.
pub(crate) fn exact_ten_instance() -> WaveInstance {
    WaveInstance::new(
        (0..5).map(|_| quantities(&[(0, 3)])).collect(),
        vec![quantities(&[(0, 100)])],
        1,
        10,
        10,
    )
}

/// Ten orders over five single-item aisles.
///
/// Orders 0..=4 touch 1..=5 aisles with one unit per aisle, orders 5..=8
/// are single-aisle bulk orders of 6..=9 units, order 9 touches two aisles
/// with 4 units. All ten fit in one feasible wave of 49 units.
pub(crate) fn ten_order_instance() -> WaveInstance {
    let mut orders: Vec<ItemQuantities> = (0..5)
        .map(|k| (0..=k).map(|item| (item, 1)).collect())
        .collect();
    orders.push(quantities(&[(1, 6)]));
    orders.push(quantities(&[(2, 7)]));
    orders.push(quantities(&[(3, 8)]));
    orders.push(quantities(&[(4, 9)]));
    orders.push(quantities(&[(0, 2), (4, 2)]));

    let aisles = (0..5).map(|item| quantities(&[(item, 100)])).collect();
    WaveInstance::new(orders, aisles, 5, 1, 100)
}

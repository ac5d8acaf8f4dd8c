//! An instance bundled with its derived index.

use super::index::InstanceIndex;
use super::types::WaveInstance;

/// The read-only problem handed to every search component.
///
/// Never mutated after construction, so one value can back several
/// concurrent searches.
#[derive(Debug, Clone)]
pub struct WaveProblem {
    instance: WaveInstance,
    index: InstanceIndex,
}

impl WaveProblem {
    pub fn new(instance: WaveInstance) -> Self {
        let index = InstanceIndex::build(&instance);
        Self { instance, index }
    }

    pub fn instance(&self) -> &WaveInstance {
        &self.instance
    }

    pub fn index(&self) -> &InstanceIndex {
        &self.index
    }

    pub fn num_orders(&self) -> usize {
        self.instance.num_orders()
    }

    pub fn wave_size_lb(&self) -> u64 {
        self.instance.wave_size_lb
    }

    pub fn wave_size_ub(&self) -> u64 {
        self.instance.wave_size_ub
    }

    pub fn units_of(&self, order: usize) -> u64 {
        self.index.units_of(order)
    }

    pub fn aisles_of(&self, order: usize) -> &[usize] {
        self.index.aisles_of(order)
    }

    pub fn efficiency(&self, order: usize) -> f64 {
        self.index.efficiency(order)
    }
}

//! Seedable random source for the search.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Resolves an optional seed, drawing one from the thread RNG when absent.
///
/// Returns the RNG together with the seed actually used, so that an
/// unseeded run can be reproduced afterwards.
pub fn resolve_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (create_rng(seed), seed)
}

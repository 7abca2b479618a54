// src/bench/sampler.rs

//! Random control-set sampling for the multi-control benchmarks.

use rand::Rng;
use rand::RngExt;

/// Draws `k` distinct values from `[0, n)`, returned sorted ascending.
///
/// The generator is caller-owned state: the harness threads one RNG
/// through a whole sweep so runs are reproducible from a seed, and tests
/// inject their own. Implemented as a partial Fisher–Yates shuffle over
/// the candidate range (`n` is a qubit count, at most 63, so the scratch
/// allocation is trivial).
///
/// # Panics
/// Panics if `k > n`; callers size their sweeps so this cannot happen.
pub fn sample_sorted_distinct<R: Rng>(rng: &mut R, k: usize, n: usize) -> Vec<usize> {
    assert!(k <= n, "cannot draw {} distinct values from [0, {})", k, n);

    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.random_range(i..n);
        pool.swap(i, j);
    }

    let mut drawn = pool[..k].to_vec();
    drawn.sort_unstable();
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_contract() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let drawn = sample_sorted_distinct(&mut rng, 5, 12);
            assert_eq!(drawn.len(), 5);
            assert!(drawn.iter().all(|&q| q < 12));
            // sorted + strictly increasing implies distinct
            assert!(drawn.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_full_draw_is_identity_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let drawn = sample_sorted_distinct(&mut rng, 8, 8);
        assert_eq!(drawn, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_reproducible_from_seed() {
        let a = sample_sorted_distinct(&mut StdRng::seed_from_u64(99), 4, 20);
        let b = sample_sorted_distinct(&mut StdRng::seed_from_u64(99), 4, 20);
        assert_eq!(a, b);
    }
}

//! Seeded pseudo-random generator for daily word derivation
//!
//! The daily word must be identical for every player on the same date and
//! across releases, so the generator is spelled out here instead of relying on
//! an RNG whose stream may change between crate versions.

/// 64-bit linear congruential generator with Knuth's MMIX constants
///
/// Each output is passed through a xorshift-multiply finalizer so that nearby
/// seeds (consecutive dates) do not yield evenly spaced fractions.
#[derive(Debug, Clone)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    const INCREMENT: u64 = 1_442_695_040_888_963_407;

    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the tempered output
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);

        let mut x = self.state;
        x ^= x >> 33;
        x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
        x ^= x >> 33;
        x
    }

    /// Next fraction in `[0, 1)` built from the top 53 bits
    pub fn next_fraction(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Lcg64::new(20_250_101);
        let mut b = Lcg64::new(20_250_101);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Lcg64::new(20_250_101);
        let mut b = Lcg64::new(20_250_102);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn fractions_stay_in_unit_interval() {
        let mut rng = Lcg64::new(0);
        for _ in 0..10_000 {
            let f = rng.next_fraction();
            assert!((0.0..1.0).contains(&f), "{f} out of range");
        }
    }

    #[test]
    fn fractions_are_spread_out() {
        // Ten equal buckets over consecutive seeds should all be hit
        let mut buckets = [0usize; 10];
        for seed in 0..1_000u64 {
            let f = Lcg64::new(seed).next_fraction();
            buckets[(f * 10.0) as usize] += 1;
        }
        assert!(buckets.iter().all(|&n| n > 50), "{buckets:?}");
    }
}

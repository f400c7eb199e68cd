//! Reproducible pseudo-random stream based on a linear congruential generator.
//!
//! The constants are the classic ANSI C `rand()` set:
//! `seed' = (1103515245 * seed + 12345) mod 2^31`.
//! Starting from seed 42 the first two draws of `next(0.0, 1.0)` are
//! `0.5823075897…` and `0.5198187492…`.

/// LCG multiplier `a`.
pub const LCG_MULTIPLIER: u64 = 1_103_515_245;
/// LCG increment `c`.
pub const LCG_INCREMENT: u64 = 12_345;
/// LCG modulus `m` (2^31). Never zero, so the unit division is always defined.
pub const LCG_MODULUS: u64 = 1 << 31;

/// A deterministic stream of bounded floating-point values.
///
/// The whole state is a single integer. Two sequences with the same seed
/// produce identical output, and [`reseed`](Self::reseed) is the only way the
/// stream is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomSequence {
    seed: u64,
}

impl RandomSequence {
    /// Creates a stream starting from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed: seed % LCG_MODULUS,
        }
    }

    /// Resets the stream to `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed % LCG_MODULUS;
    }

    /// Current raw state.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advances the generator and returns the new raw state in `[0, m)`.
    pub fn next_raw(&mut self) -> u64 {
        self.seed = (LCG_MULTIPLIER * self.seed + LCG_INCREMENT) % LCG_MODULUS;
        self.seed
    }

    /// Advances the generator and maps the new state into `[min, max)`.
    ///
    /// Computed in f64: the unit fraction is at most `1 - 2^-31`, which keeps
    /// the result strictly below `max` for any range the scene uses.
    pub fn next(&mut self, min: f64, max: f64) -> f64 {
        let unit = self.next_raw() as f64 / LCG_MODULUS as f64;
        min + unit * (max - min)
    }

    /// [`next`](Self::next) narrowed to f32 for geometry code.
    pub fn next_f32(&mut self, min: f32, max: f32) -> f32 {
        let value = self.next(f64::from(min), f64::from(max)) as f32;
        // Narrowing can round up onto the open bound.
        if value >= max && max > min {
            min.max(max - (max - min) * f32::EPSILON)
        } else {
            value
        }
    }
}

impl Default for RandomSequence {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_42_first_two_draws() {
        let mut rng = RandomSequence::new(42);
        let a = rng.next(0.0, 1.0);
        let b = rng.next(0.0, 1.0);
        assert!((a - 0.582_307_589_706_033_5).abs() < 1e-12, "got {a}");
        assert!((b - 0.519_818_749_278_783_8).abs() < 1e-12, "got {b}");
        assert_eq!(rng.seed(), 1_116_302_264);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomSequence::new(1234);
        let mut b = RandomSequence::new(1234);
        for _ in 0..1000 {
            assert_eq!(a.next(-5.0, 5.0).to_bits(), b.next(-5.0, 5.0).to_bits());
        }
    }

    #[test]
    fn test_output_within_half_open_range() {
        let mut rng = RandomSequence::new(7);
        for _ in 0..10_000 {
            let v = rng.next(10.0, 20.0);
            assert!((10.0..20.0).contains(&v), "{v} escaped [10, 20)");
            let f = rng.next_f32(0.15, 0.25);
            assert!((0.15..0.25).contains(&f), "{f} escaped [0.15, 0.25)");
        }
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut rng = RandomSequence::new(99);
        let first: Vec<f64> = (0..5).map(|_| rng.next(0.0, 360.0)).collect();
        let _ = rng.next(0.0, 1.0);
        rng.reseed(99);
        let again: Vec<f64> = (0..5).map(|_| rng.next(0.0, 360.0)).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_state_is_pure_function_of_seed() {
        let mut rng = RandomSequence::new(5);
        let raw = rng.next_raw();
        assert_eq!(raw, (LCG_MULTIPLIER * 5 + LCG_INCREMENT) % LCG_MODULUS);
        assert!(raw < LCG_MODULUS);
    }

    #[test]
    fn test_large_seed_is_reduced() {
        let a = RandomSequence::new(LCG_MODULUS + 3);
        assert_eq!(a, RandomSequence::new(3));
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut rng = RandomSequence::new(11);
        assert_eq!(rng.next(2.5, 2.5), 2.5);
        assert_eq!(rng.next_f32(1.0, 1.0), 1.0);
    }
}

//! Pseudo-random draws for decorative variety.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `lo..=hi`.
    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo + 1) as f64;
        let offset = (self.next_f64() * span) as u32;
        lo + offset.min(hi - lo)
    }

    /// Uniform float in `[-radius, radius)`.
    fn symmetric(&mut self, radius: f64) -> f64 {
        (self.next_f64() - 0.5) * 2.0 * radius
    }

    /// Uniform index below `len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// 64-bit linear congruential generator (Knuth's MMIX constants).
///
/// Good enough for scattering particles; not for anything else.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

impl Lcg {
    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds from the wall clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed);
        Self::seeded(nanos)
    }
}

impl RandomSource for Lcg {
    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        // Top 53 bits give every representable step in [0, 1).
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Vec<f64>,
    cursor: usize,
}

impl Sequence {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for Sequence {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999_999)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_is_deterministic_per_seed() {
        let mut a = Lcg::seeded(42);
        let mut b = Lcg::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_lcg_stays_in_unit_interval() {
        let mut rng = Lcg::seeded(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_int_inclusive_hits_both_ends() {
        let mut rng = Sequence::new(vec![0.0, 0.999]);
        assert_eq!(rng.int_inclusive(2, 4), 2);
        assert_eq!(rng.int_inclusive(2, 4), 4);
    }

    #[test]
    fn test_int_inclusive_degenerate_range() {
        let mut rng = Lcg::seeded(1);
        assert_eq!(rng.int_inclusive(5, 5), 5);
        assert_eq!(rng.int_inclusive(5, 3), 5);
    }

    #[test]
    fn test_symmetric_bounds() {
        let mut rng = Sequence::new(vec![0.0, 0.5, 0.999_999]);
        assert_eq!(rng.symmetric(50.0), -50.0);
        assert_eq!(rng.symmetric(50.0), 0.0);
        assert!(rng.symmetric(50.0) < 50.0);
    }

    #[test]
    fn test_index_within_len() {
        let mut rng = Sequence::new(vec![0.999_999]);
        assert_eq!(rng.index(10), 9);
    }
}

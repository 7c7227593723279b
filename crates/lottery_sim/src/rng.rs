//! Mulberry32 pseudo-random generator.
//!
//! The generator reproduces the web reference implementation bit for bit, so
//! a seed typed into the website and into this crate yields the same stream.
//! Statistical quality is adequate for teaching-grade Monte Carlo; it is not
//! a cryptographic generator.
//!
//! State is a single `u32`. [`Mulberry32::advance`] is the pure transition;
//! the `&mut self` methods are thin wrappers over it.

use rand::{RngCore, SeedableRng};

/// Additive step applied to the state on every draw (odd, full period).
pub const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// Scale from a `u32` output to [0, 1).
const U32_SCALE: f64 = 4_294_967_296.0;

/// Mulberry32 generator.
///
/// # Examples
///
/// ```rust
/// use lottery_sim::rng::Mulberry32;
///
/// let mut a = Mulberry32::new(2_703_968_361);
/// let mut b = Mulberry32::new(2_703_968_361);
/// assert_eq!(a.next_uniform(), b.next_uniform());
///
/// let u = a.next_uniform();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator from a raw 32-bit state.
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state.
    #[inline]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advances by one draw, returning the next generator and its raw output.
    #[inline]
    pub const fn advance(self) -> (Self, u32) {
        let a = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = (a ^ (a >> 15)).wrapping_mul(a | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        (Self { state: a }, t ^ (t >> 14))
    }

    /// Next raw 32-bit output.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        let (next, out) = self.advance();
        *self = next;
        out
    }

    /// Next value uniformly distributed in [0, 1).
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        f64::from(self.next_raw()) / U32_SCALE
    }

    /// Fills `buffer` with uniform values in [0, 1).
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }
}

impl RngCore for Mulberry32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_raw());
        let hi = u64::from(self.next_raw());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_golden_values_seed_zero() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_uniform(), 0.26642920868471265);
        assert_eq!(rng.next_uniform(), 0.0003297457005828619);
        assert_eq!(rng.next_uniform(), 0.2232720274478197);
    }

    #[test]
    fn test_golden_values_expanded_seed() {
        // Expanded form of the 5-digit seed 12345.
        let mut rng = Mulberry32::new(2_703_968_361);
        let expected = [
            0.7698555453680456,
            0.018184101907536387,
            0.1489432251546532,
            0.5211388608440757,
            0.06520450650714338,
        ];
        for &e in &expected {
            assert_eq!(rng.next_uniform(), e);
        }
    }

    #[test]
    fn test_advance_is_pure() {
        let rng = Mulberry32::new(42);
        let (a, out_a) = rng.advance();
        let (b, out_b) = rng.advance();

        assert_eq!(a, b);
        assert_eq!(out_a, out_b);
        assert_eq!(rng.state(), 42);
        assert_eq!(a.state(), 42_u32.wrapping_add(STATE_INCREMENT));
    }

    #[test]
    fn test_state_wraps() {
        let rng = Mulberry32::new(u32::MAX);
        let (next, _) = rng.advance();
        assert_eq!(next.state(), STATE_INCREMENT - 1);
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = Mulberry32::new(12345);
        for _ in 0..10_000 {
            let u = rng.next_uniform();
            assert!((0.0..1.0).contains(&u), "value {} outside [0, 1)", u);
        }
    }

    #[test]
    fn test_uniform_mean() {
        let mut rng = Mulberry32::new(99_999);
        let mut buffer = vec![0.0; 100_000];
        rng.fill_uniform(&mut buffer);

        let mean = buffer.iter().sum::<f64>() / buffer.len() as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean {} too far from 0.5", mean);
    }

    #[test]
    fn test_rng_core_bridge() {
        let mut a = Mulberry32::from_seed(7_u32.to_le_bytes());
        let mut b = Mulberry32::new(7);

        assert_eq!(a.next_u32(), b.next_raw());

        let x: u8 = a.gen_range(1..=6);
        assert!((1..=6).contains(&x));
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(1);

        let mut bytes = [0_u8; 6];
        a.fill_bytes(&mut bytes);

        let first = b.next_raw().to_le_bytes();
        let second = b.next_raw().to_le_bytes();
        assert_eq!(&bytes[..4], &first);
        assert_eq!(&bytes[4..], &second[..2]);
    }
}

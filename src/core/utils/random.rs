//! Random sources for the interactive add/remove gestures.
//!
//! The tick itself never reads randomness; only `add_sand`/`remove_sand`
//! take a `RandomSource`, so callers decide where entropy comes from.

/// Source of pseudo-random values passed into gesture operations.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish value in `0..bound` (`0` when `bound == 0`).
    #[inline]
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}

/// Xorshift32 generator
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Xorshift has a fixed point at zero, so a zero seed is remapped.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_does_not_stick() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = XorShift32::new(12345);
        let mut b = XorShift32::new(12345);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn below_respects_bound() {
        let mut rng = XorShift32::new(7);
        for _ in 0..1000 {
            assert!(rng.below(9) < 9);
        }
        assert_eq!(rng.below(0), 0);
    }
}

//! Injectable randomness.
//!
//! Every casting and draw takes a [`RandomSource`] instead of reaching for a
//! global generator. Any [`rand::Rng`] (typically a seeded `StdRng`) is a
//! source; [`ScriptedSource`] replays fixed values for deterministic tests.

use rand::Rng;

/// A source of uniform random bits and bounded integers.
pub trait RandomSource {
    /// Draw a fair random bit.
    fn next_bit(&mut self) -> bool;

    /// Draw a uniform integer in `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn next_bit(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

/// A source that replays scripted values in a cycle.
///
/// Bits and integers are kept in separate scripts. An empty bit script
/// always yields `false`; an empty integer script always yields `low`.
/// Scripted integers are clamped into the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    bits: Vec<bool>,
    ints: Vec<u32>,
    bit_pos: usize,
    int_pos: usize,
}

impl ScriptedSource {
    /// Create a source from a bit script and an integer script.
    pub fn new(bits: Vec<bool>, ints: Vec<u32>) -> Self {
        Self {
            bits,
            ints,
            bit_pos: 0,
            int_pos: 0,
        }
    }

    /// A source whose every bit is `bit`.
    pub fn constant_bit(bit: bool) -> Self {
        Self::new(vec![bit], Vec::new())
    }

    /// A source that replays `bits` and has no integer script.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self::new(bits, Vec::new())
    }

    /// A source that replays `ints` and has no bit script.
    pub fn from_ints(ints: Vec<u32>) -> Self {
        Self::new(Vec::new(), ints)
    }

    /// How many bits have been drawn so far.
    pub fn bits_drawn(&self) -> usize {
        self.bit_pos
    }
}

impl RandomSource for ScriptedSource {
    fn next_bit(&mut self) -> bool {
        if self.bits.is_empty() {
            return false;
        }
        let bit = self.bits[self.bit_pos % self.bits.len()];
        self.bit_pos += 1;
        bit
    }

    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if self.ints.is_empty() {
            return low;
        }
        let value = self.ints[self.int_pos % self.ints.len()];
        self.int_pos += 1;
        value.clamp(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let v = rng.next_in_range(1, 47);
            assert!((1..=47).contains(&v));
        }
    }

    #[test]
    fn std_rng_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let bits_a: Vec<bool> = (0..32).map(|_| a.next_bit()).collect();
        let bits_b: Vec<bool> = (0..32).map(|_| b.next_bit()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn scripted_bits_cycle() {
        let mut src = ScriptedSource::from_bits(vec![true, false]);
        assert!(src.next_bit());
        assert!(!src.next_bit());
        assert!(src.next_bit());
        assert_eq!(src.bits_drawn(), 3);
    }

    #[test]
    fn scripted_ints_clamp_into_range() {
        let mut src = ScriptedSource::from_ints(vec![0, 100, 5]);
        assert_eq!(src.next_in_range(1, 10), 1);
        assert_eq!(src.next_in_range(1, 10), 10);
        assert_eq!(src.next_in_range(1, 10), 5);
    }

    #[test]
    fn empty_scripts_fall_back() {
        let mut src = ScriptedSource::default();
        assert!(!src.next_bit());
        assert_eq!(src.next_in_range(3, 9), 3);
    }
}

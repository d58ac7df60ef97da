// Lumen randomness source
//
// Fire and storm scenes draw from an injected `RandomSource` instead of a
// global generator so tests can script the draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform generator over `[0, 1)`
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;

    /// Uniform draw over `[low, high)`
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }

    /// Uniform index into a collection of `len` items
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_unit() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// OS-seeded generator used outside of tests
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Values are clamped into `[0, 1)` so a script cannot push a scene
/// outside of its documented ranges.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ScriptedRandom needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Always draws the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_wraps() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.2);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_scripted_clamps() {
        let mut rng = ScriptedRandom::new(vec![-3.0, 1.0]);
        assert_eq!(rng.next_unit(), 0.0);
        assert!(rng.next_unit() < 1.0);
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.5]);
        assert_eq!(rng.uniform(80.0, 200.0), 80.0);
        assert_eq!(rng.uniform(80.0, 200.0), 140.0);
    }

    #[test]
    fn test_index_never_out_of_bounds() {
        let mut rng = ScriptedRandom::constant(0.999_999_999_999);
        assert_eq!(rng.index(5), 4);

        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(rng.index(5), 0);
    }

    #[test]
    fn test_entropy_in_unit_interval() {
        let mut rng = EntropyRandom::new();
        for _ in 0..10_000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}

//! Random integer source.

use rand::Rng;

/// Abstraction over random integer generation so games can be scripted in tests.
pub trait RandomSource {
    /// Return an integer in `[low, high]` (inclusive). Requires `low <= high`.
    fn random_integer(&mut self, low: i64, high: i64) -> i64;
}

/// Random source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random_integer(&mut self, low: i64, high: i64) -> i64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

//! Injectable random sources for equation generation.
//!
//! ## Key Features
//!
//! - **Injectable**: the generator and session only see the `RandomSource` trait
//! - **Deterministic**: `QuizRng` with the same seed produces an identical quiz
//! - **Scriptable**: `SequenceRng` replays a fixed list of draws for tests
//!
//! ## Usage
//!
//! ```
//! use math_crunch::core::{QuizRng, RandomSource};
//!
//! let mut rng1 = QuizRng::new(42);
//! let mut rng2 = QuizRng::new(42);
//!
//! // Same seed, same draws
//! assert_eq!(rng1.int_inclusive(0, 9), rng2.int_inclusive(0, 9));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random draws.
///
/// Everything random in a quiz goes through this trait, so a session can be
/// replayed from a seed or driven by a scripted sequence.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        (**self).int_inclusive(low, high)
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

/// Seedable production RNG.
///
/// Uses ChaCha8 so a seed reproduces the same quiz on every platform.
#[derive(Clone, Debug)]
pub struct QuizRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl QuizRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept so a play-through can be reported and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for QuizRng {
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.inner.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Fixed-sequence random source for tests.
///
/// Each call consumes the next scripted value in order. Panics if a value
/// falls outside the requested range or the script runs out, so it is test
/// tooling only: play sessions with `QuizRng`.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    values: VecDeque<i32>,
}

impl SequenceRng {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn next_value(&mut self) -> i32 {
        match self.values.pop_front() {
            Some(value) => value,
            None => panic!("SequenceRng script exhausted"),
        }
    }
}

impl RandomSource for SequenceRng {
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        let value = self.next_value();
        assert!(
            (low..=high).contains(&value),
            "scripted value {value} outside {low}..={high}"
        );
        value
    }

    fn index(&mut self, len: usize) -> usize {
        let value = self.next_value();
        assert!(
            value >= 0 && (value as usize) < len,
            "scripted index {value} outside 0..{len}"
        );
        value as usize
    }
}

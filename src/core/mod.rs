//! Core quiz types: operations, level configuration, randomness.
//!
//! These are the pure building blocks. The equation generator and the
//! session are built on top of them and never reach around them.

pub mod config;
pub mod operation;
pub mod rng;

pub use config::{LevelConfig, LevelTable, QuizConfig, DEFAULT_QUESTIONS_PER_LEVEL};
pub use operation::{BinaryFn, Operation};
pub use rng::{QuizRng, RandomSource, SequenceRng};

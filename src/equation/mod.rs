//! Equation generation and answer checking.
//!
//! - `generator`: builds an `Equation` from a `LevelConfig` and a random source
//! - `instance`: the generated equation, its distractors and presented choices

pub mod generator;
pub mod instance;

pub use generator::{distractor_bounds, evaluate, generate, render, DISTRACTOR_MAX, OPERAND_MAX};
pub use instance::{Equation, CHOICE_COUNT, DISTRACTOR_COUNT};

//! # math-crunch
//!
//! A console math quiz. Equations get harder level by level; one wrong
//! answer ends the game.
//!
//! ## Design
//!
//! 1. **Data-Driven Levels**: difficulty is an ordered `LevelTable` of
//!    immutable `LevelConfig` values. Nothing downstream hardcodes levels.
//!
//! 2. **Injectable Randomness**: all draws go through `RandomSource`.
//!    `QuizRng` is seedable for replay; `SequenceRng` scripts draws in tests and panics
//!    when misused, so it never backs a real session.
//!
//! 3. **Abstract Console**: the session only reads and writes lines through
//!    `Console`, so a whole play-through runs without a terminal.
//!
//! ## Modules
//!
//! - `core`: operations, level configuration, random sources
//! - `equation`: equation generation and answer checking
//! - `session`: console boundary, session state and the play loop
//! - `error`: the crate error type

pub mod core;
pub mod equation;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    LevelConfig, LevelTable, Operation, QuizConfig,
    QuizRng, RandomSource, SequenceRng,
};

pub use crate::equation::{generate, Equation};

pub use crate::error::{QuizError, QuizResult};

pub use crate::session::{
    Console, ScriptedConsole, StdConsole,
    Session, SessionState, Outcome, LossReason,
};

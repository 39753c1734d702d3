//! Error types for the quiz.

use thiserror::Error;

/// Errors raised while configuring or running a quiz.
///
/// Malformed player input is never an error: the session re-prompts instead.
#[derive(Error, Debug)]
pub enum QuizError {
    // Configuration errors
    #[error("Invalid level {level}: {reason}")]
    InvalidLevel { level: u32, reason: &'static str },

    #[error("Level table is empty")]
    EmptyLevelTable,

    #[error("Questions per level must be at least 1, got {0}")]
    InvalidQuestionCount(usize),

    // Console errors
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for quiz operations.
pub type QuizResult<T> = std::result::Result<T, QuizError>;

//! Session progress and outcome.

use serde::{Deserialize, Serialize};

/// Why a session was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// The player picked a presented choice that was not the answer.
    WrongAnswer,
    /// The player typed `quit` or closed the input stream.
    Forfeit,
}

/// Session outcome. `Pending` moves to `Won` or `Lost` exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Pending,
    Won,
    Lost(LossReason),
}

impl Outcome {
    /// Check if the session has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Pending)
    }

    /// Check if the player won.
    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

/// Mutable progress through one play-through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// 1-based number of the question being attempted. After a win this is
    /// one past the last question.
    pub question_number: usize,

    /// Index into the level table of the current level.
    pub level_index: usize,

    /// Current outcome.
    pub outcome: Outcome,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh state: first question of the first level, pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            question_number: 1,
            level_index: 0,
            outcome: Outcome::Pending,
        }
    }

    /// Questions answered correctly so far.
    #[must_use]
    pub fn questions_answered(&self) -> usize {
        self.question_number - 1
    }

    pub(crate) fn enter_level(&mut self, level_index: usize) {
        debug_assert!(!self.outcome.is_terminal());
        self.level_index = level_index;
    }

    pub(crate) fn record_correct(&mut self) {
        debug_assert!(!self.outcome.is_terminal());
        self.question_number += 1;
    }

    pub(crate) fn lose(&mut self, reason: LossReason) {
        debug_assert!(!self.outcome.is_terminal());
        self.outcome = Outcome::Lost(reason);
    }

    pub(crate) fn win(&mut self) {
        debug_assert!(!self.outcome.is_terminal());
        self.outcome = Outcome::Won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = SessionState::new();
        assert_eq!(state.question_number, 1);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.outcome, Outcome::Pending);
        assert_eq!(state.questions_answered(), 0);
    }

    #[test]
    fn test_progress_then_loss() {
        let mut state = SessionState::new();
        state.record_correct();
        state.record_correct();
        state.enter_level(1);
        state.lose(LossReason::WrongAnswer);

        assert_eq!(state.question_number, 3);
        assert_eq!(state.level_index, 1);
        assert_eq!(state.questions_answered(), 2);
        assert_eq!(state.outcome, Outcome::Lost(LossReason::WrongAnswer));
        assert!(state.outcome.is_terminal());
        assert!(!state.outcome.is_won());
    }

    #[test]
    fn test_win() {
        let mut state = SessionState::new();
        state.record_correct();
        state.win();

        assert!(state.outcome.is_terminal());
        assert!(state.outcome.is_won());
    }

    #[test]
    fn test_outcome_pending_not_terminal() {
        assert!(!Outcome::Pending.is_terminal());
        assert!(Outcome::Lost(LossReason::Forfeit).is_terminal());
    }
}

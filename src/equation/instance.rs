//! A generated equation and its answer set.

use smallvec::SmallVec;

use crate::core::Operation;

/// Number of wrong answers shown with each equation.
pub const DISTRACTOR_COUNT: usize = 3;

/// Number of multiple-choice options shown (distractors plus the answer).
pub const CHOICE_COUNT: usize = DISTRACTOR_COUNT + 1;

/// One quiz question.
///
/// Built by the generator and discarded once the question resolves. The
/// presented ordering of choices is fixed at construction, so repeated
/// calls to `presented_choices` always agree.
#[derive(Clone, Debug, PartialEq)]
pub struct Equation {
    display_text: String,
    operands: SmallVec<[u8; 8]>,
    operators: SmallVec<[Operation; 8]>,
    correct_answer: f64,
    distractors: [f64; DISTRACTOR_COUNT],
    choices: SmallVec<[f64; CHOICE_COUNT]>,
    correct_slot: usize,
    source_operations: SmallVec<[Operation; 4]>,
}

impl Equation {
    /// Assemble an equation, placing the correct answer at `correct_slot`
    /// among the distractors.
    pub(crate) fn new(
        display_text: String,
        operands: SmallVec<[u8; 8]>,
        operators: SmallVec<[Operation; 8]>,
        correct_answer: f64,
        distractors: [f64; DISTRACTOR_COUNT],
        correct_slot: usize,
        source_operations: &[Operation],
    ) -> Self {
        debug_assert!(correct_slot < CHOICE_COUNT);

        let mut choices: SmallVec<[f64; CHOICE_COUNT]> = distractors.iter().copied().collect();
        choices.insert(correct_slot, correct_answer);

        Self {
            display_text,
            operands,
            operators,
            correct_answer,
            distractors,
            choices,
            correct_slot,
            source_operations: source_operations.iter().copied().collect(),
        }
    }

    /// The equation as shown to the player, e.g. `"3 + 7 - 2"`.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Operands in generation order.
    #[must_use]
    pub fn operands(&self) -> &[u8] {
        &self.operands
    }

    /// Operators between consecutive operands.
    #[must_use]
    pub fn operators(&self) -> &[Operation] {
        &self.operators
    }

    /// Left-to-right evaluation of the equation. May be non-finite.
    #[must_use]
    pub fn correct_answer(&self) -> f64 {
        self.correct_answer
    }

    /// Wrong answers. None equals the correct answer; they may repeat.
    #[must_use]
    pub fn distractors(&self) -> &[f64; DISTRACTOR_COUNT] {
        &self.distractors
    }

    /// Operations the level allowed when this equation was generated.
    #[must_use]
    pub fn source_operations(&self) -> &[Operation] {
        &self.source_operations
    }

    /// All choices in display order.
    #[must_use]
    pub fn presented_choices(&self) -> &[f64] {
        &self.choices
    }

    /// 0-based position of the correct answer in `presented_choices`.
    #[must_use]
    pub fn correct_slot(&self) -> usize {
        self.correct_slot
    }

    /// True if `candidate` is one of the presented choices.
    #[must_use]
    pub fn is_answer_valid(&self, candidate: f64) -> bool {
        self.is_answer_correct(candidate) || self.distractors.contains(&candidate)
    }

    /// True if `candidate` is exactly the correct answer.
    #[must_use]
    pub fn is_answer_correct(&self, candidate: f64) -> bool {
        candidate == self.correct_answer
    }
}

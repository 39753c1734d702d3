//! Equation generation.
//!
//! `generate` is a pure function of a level and a random source. Draws are
//! taken in a fixed order so a scripted source can pin every detail:
//!
//! 1. `operand_count` operands, each in `0..=9`
//! 2. `operand_count - 1` operator indices into the level's operations
//! 3. one draw per distractor, plus a redraw each time a candidate equals
//!    the correct answer
//! 4. the slot of the correct answer among the choices

use smallvec::SmallVec;

use super::instance::{Equation, CHOICE_COUNT, DISTRACTOR_COUNT};
use crate::core::{LevelConfig, Operation, RandomSource};

/// Largest operand value.
pub const OPERAND_MAX: i32 = 9;

/// Distractors are drawn from `-DISTRACTOR_MAX..=DISTRACTOR_MAX` when the
/// level allows subtraction, otherwise from `0..=DISTRACTOR_MAX`.
pub const DISTRACTOR_MAX: i32 = 20;

/// Generate one equation for a level.
pub fn generate<R: RandomSource + ?Sized>(config: &LevelConfig, rng: &mut R) -> Equation {
    let operand_count = config.operand_count();
    let allowed = config.operations();

    let operands: SmallVec<[u8; 8]> = (0..operand_count)
        .map(|_| rng.int_inclusive(0, OPERAND_MAX) as u8)
        .collect();

    let operators: SmallVec<[Operation; 8]> = (1..operand_count)
        .map(|_| allowed[rng.index(allowed.len())])
        .collect();

    let correct_answer = evaluate(&operands, &operators);
    let display_text = render(&operands, &operators);

    let (low, high) = distractor_bounds(config);
    let mut distractors = [0.0; DISTRACTOR_COUNT];
    for slot in &mut distractors {
        *slot = draw_distractor(correct_answer, low, high, rng);
    }

    let correct_slot = rng.index(CHOICE_COUNT);

    tracing::trace!(
        level = config.level_number(),
        equation = %display_text,
        answer = correct_answer,
        ?distractors,
        correct_slot,
        "generated equation"
    );

    Equation::new(
        display_text,
        operands,
        operators,
        correct_answer,
        distractors,
        correct_slot,
        allowed,
    )
}

/// Fold operands left to right, ignoring precedence.
///
/// `operators[i]` sits between `operands[i]` and `operands[i + 1]`.
#[must_use]
pub fn evaluate(operands: &[u8], operators: &[Operation]) -> f64 {
    let Some((&first, rest)) = operands.split_first() else {
        return 0.0;
    };

    operators
        .iter()
        .zip(rest)
        .fold(f64::from(first), |acc, (op, &operand)| {
            op.apply(acc, f64::from(operand))
        })
}

/// Operands and operator symbols joined with single spaces.
#[must_use]
pub fn render(operands: &[u8], operators: &[Operation]) -> String {
    let mut parts = Vec::with_capacity(operands.len() + operators.len());

    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            if let Some(op) = operators.get(i - 1) {
                parts.push(op.symbol().to_string());
            }
        }
        parts.push(operand.to_string());
    }

    parts.join(" ")
}

/// Inclusive range distractors are drawn from.
#[must_use]
pub fn distractor_bounds(config: &LevelConfig) -> (i32, i32) {
    let low = if config.allows(Operation::Subtract) {
        -DISTRACTOR_MAX
    } else {
        0
    };
    (low, DISTRACTOR_MAX)
}

/// Rejection-sample an integer in `low..=high` that differs from `correct`.
fn draw_distractor<R: RandomSource + ?Sized>(correct: f64, low: i32, high: i32, rng: &mut R) -> f64 {
    loop {
        let candidate = f64::from(rng.int_inclusive(low, high));
        if candidate != correct {
            return candidate;
        }
    }
}

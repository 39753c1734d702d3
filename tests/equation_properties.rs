//! Property tests for equation generation.
//!
//! Every level shape and seed must produce a well-formed answer set.

use math_crunch::core::{LevelConfig, Operation, QuizRng};
use math_crunch::equation::{distractor_bounds, generate, CHOICE_COUNT, DISTRACTOR_COUNT, OPERAND_MAX};
use proptest::prelude::*;

/// Any valid level: a non-empty subset of the arithmetic operations and
/// 1-6 operands.
fn level_strategy() -> impl Strategy<Value = LevelConfig> {
    (proptest::bits::u8::between(0, 4), 1usize..=6).prop_filter_map(
        "at least one operation",
        |(mask, operands)| {
            let ops: Vec<Operation> = Operation::ARITHMETIC
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, op)| *op)
                .collect();
            LevelConfig::new(1, ops, operands).ok()
        },
    )
}

proptest! {
    #[test]
    fn distractors_never_equal_answer(level in level_strategy(), seed in any::<u64>()) {
        let mut rng = QuizRng::new(seed);
        let eq = generate(&level, &mut rng);

        prop_assert_eq!(eq.distractors().len(), DISTRACTOR_COUNT);
        for &d in eq.distractors() {
            prop_assert!(d != eq.correct_answer());
        }
    }

    #[test]
    fn distractors_are_integers_in_bounds(level in level_strategy(), seed in any::<u64>()) {
        let mut rng = QuizRng::new(seed);
        let eq = generate(&level, &mut rng);
        let (low, high) = distractor_bounds(&level);

        for &d in eq.distractors() {
            prop_assert_eq!(d.fract(), 0.0);
            prop_assert!(d >= f64::from(low) && d <= f64::from(high));
        }
    }

    #[test]
    fn correct_answer_is_valid_and_correct(level in level_strategy(), seed in any::<u64>()) {
        let mut rng = QuizRng::new(seed);
        let eq = generate(&level, &mut rng);
        let answer = eq.correct_answer();

        if answer.is_nan() {
            // 0 / 0 has no matching input.
            prop_assert!(!eq.is_answer_correct(answer));
        } else {
            prop_assert!(eq.is_answer_correct(answer));
            prop_assert!(eq.is_answer_valid(answer));
        }
        for &d in eq.distractors() {
            prop_assert!(eq.is_answer_valid(d));
            prop_assert!(!eq.is_answer_correct(d));
        }
    }

    #[test]
    fn values_outside_choices_are_invalid(
        level in level_strategy(),
        seed in any::<u64>(),
        candidate in -100.0f64..100.0,
    ) {
        let mut rng = QuizRng::new(seed);
        let eq = generate(&level, &mut rng);

        let listed = candidate == eq.correct_answer() || eq.distractors().contains(&candidate);
        prop_assert_eq!(eq.is_answer_valid(candidate), listed);
    }

    #[test]
    fn presented_choices_hold_answer_and_distractors(level in level_strategy(), seed in any::<u64>()) {
        let mut rng = QuizRng::new(seed);
        let eq = generate(&level, &mut rng);
        let choices = eq.presented_choices();

        // Compare bit patterns so a NaN answer still counts as stable.
        let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(choices.len(), CHOICE_COUNT);
        prop_assert_eq!(bits(choices), bits(eq.presented_choices()));

        let slot = eq.correct_slot();
        prop_assert!(choices[slot].to_bits() == eq.correct_answer().to_bits());

        let others: Vec<f64> = choices
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != slot)
            .map(|(_, c)| *c)
            .collect();
        prop_assert_eq!(others.as_slice(), eq.distractors().as_slice());
    }

    #[test]
    fn equation_shape_follows_level(level in level_strategy(), seed in any::<u64>()) {
        let mut rng = QuizRng::new(seed);
        let eq = generate(&level, &mut rng);

        prop_assert_eq!(eq.operands().len(), level.operand_count());
        prop_assert_eq!(eq.operators().len(), level.operand_count() - 1);
        prop_assert!(eq.operands().iter().all(|&d| i32::from(d) <= OPERAND_MAX));
        prop_assert!(eq.operators().iter().all(|op| level.allows(*op)));
        prop_assert_eq!(eq.source_operations(), level.operations());

        let tokens: Vec<&str> = eq.display_text().split(' ').collect();
        prop_assert_eq!(tokens.len(), 2 * level.operand_count() - 1);
    }
}

#[test]
fn subtraction_levels_reach_negative_distractors() {
    let level = LevelConfig::new(2, [Operation::Add, Operation::Subtract], 3).unwrap();
    let mut rng = QuizRng::new(11);

    let saw_negative = (0..200)
        .flat_map(|_| *generate(&level, &mut rng).distractors())
        .any(|d| d < 0.0);
    assert!(saw_negative);
}

#[test]
fn addition_levels_keep_distractors_non_negative() {
    let level = LevelConfig::new(1, [Operation::Add], 2).unwrap();
    let mut rng = QuizRng::new(11);

    for _ in 0..200 {
        let eq = generate(&level, &mut rng);
        assert!(eq.distractors().iter().all(|&d| d >= 0.0));
    }
}

#[test]
fn answer_slot_is_spread_across_choices() {
    let level = LevelConfig::new(1, [Operation::Add], 2).unwrap();
    let mut rng = QuizRng::new(3);

    let mut seen = [false; CHOICE_COUNT];
    for _ in 0..200 {
        seen[generate(&level, &mut rng).correct_slot()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

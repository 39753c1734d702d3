//! The interactive session loop.
//!
//! Walks the level table in order, asking `questions_per_level` questions at
//! each level. Input is re-requested until it names one of the presented
//! choices; a wrong choice or a forfeit ends the session immediately.

use tracing::{debug, info, warn};

use super::console::Console;
use super::state::{LossReason, Outcome, SessionState};
use crate::core::{LevelConfig, QuizConfig, RandomSource};
use crate::equation::{generate, Equation};
use crate::error::QuizResult;

/// Prompt shown before each read.
pub const PROMPT: &str = ">> ";

/// Input that forfeits the session, compared case-insensitively.
pub const FORFEIT_COMMAND: &str = "quit";

pub const MSG_NOT_A_NUMBER: &str = "Please enter a real number.";
pub const MSG_NOT_A_CHOICE: &str = "Please enter a selection from the multiple choice options.";
pub const MSG_CORRECT: &str = "You are correct!";
pub const MSG_WRONG: &str = "That is wrong...";
pub const MSG_FORFEIT: &str = "You forfeited.";

/// Result of asking one question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    Correct,
    Wrong,
    Forfeit,
}

/// A validated reply to a question.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Reply {
    Choice(f64),
    Forfeit,
}

/// One play-through of the quiz.
pub struct Session<R, C> {
    config: QuizConfig,
    rng: R,
    console: C,
    state: SessionState,
}

impl<R: RandomSource, C: Console> Session<R, C> {
    /// Create a session. Fails if the configuration is invalid.
    pub fn new(config: QuizConfig, rng: R, console: C) -> QuizResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            console,
            state: SessionState::new(),
        })
    }

    /// The configuration this session plays.
    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Current progress.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The console this session talks to.
    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consume the session, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Play until the session is won or lost.
    ///
    /// Running an already finished session returns its outcome unchanged.
    pub fn run(&mut self) -> QuizResult<Outcome> {
        if self.state.outcome.is_terminal() {
            return Ok(self.state.outcome);
        }

        self.print_rules()?;

        let levels = self.config.levels.clone();
        'levels: for (level_index, level) in levels.iter().enumerate() {
            self.state.enter_level(level_index);
            info!(
                level = level.level_number(),
                operations = ?level.operations(),
                operands = level.operand_count(),
                "starting level"
            );

            for _ in 0..self.config.questions_per_level {
                match self.ask(level)? {
                    Verdict::Correct => self.state.record_correct(),
                    Verdict::Wrong => {
                        self.state.lose(LossReason::WrongAnswer);
                        break 'levels;
                    }
                    Verdict::Forfeit => {
                        self.state.lose(LossReason::Forfeit);
                        break 'levels;
                    }
                }
            }
        }

        if !self.state.outcome.is_terminal() {
            self.state.win();
        }

        self.print_result()?;
        info!(
            outcome = ?self.state.outcome,
            answered = self.state.questions_answered(),
            "session finished"
        );
        Ok(self.state.outcome)
    }

    fn print_rules(&mut self) -> QuizResult<()> {
        let lines = [
            "Welcome to MATH CRUNCH!".to_string(),
            String::new(),
            "The rules are simple:".to_string(),
            "- Solve multiple-choice math problems".to_string(),
            "- Answer incorrectly and the game is over".to_string(),
            format!("- Forfeit (type \"{FORFEIT_COMMAND}\") and the game is over"),
            format!(
                "- Every {} questions, the difficulty is ramped up",
                self.config.questions_per_level
            ),
            format!("- After {} questions, you win", self.config.total_questions()),
            String::new(),
        ];

        for line in &lines {
            self.console.write_line(line)?;
        }
        Ok(())
    }

    fn ask(&mut self, level: &LevelConfig) -> QuizResult<Verdict> {
        let equation = generate(level, &mut self.rng);
        debug!(
            question = self.state.question_number,
            equation = equation.display_text(),
            answer = equation.correct_answer(),
            "asking question"
        );

        self.console.write_line(&format!(
            "Question #{}) {}",
            self.state.question_number,
            equation.display_text()
        ))?;
        for (i, choice) in equation.presented_choices().iter().enumerate() {
            self.console.write_line(&format!("{}. {:.2}", i + 1, choice))?;
        }

        let verdict = match self.read_reply(&equation)? {
            Reply::Forfeit => {
                self.console.write_line(MSG_FORFEIT)?;
                Verdict::Forfeit
            }
            Reply::Choice(answer) if equation.is_answer_correct(answer) => {
                self.console.write_line(MSG_CORRECT)?;
                self.console.write_line("")?;
                Verdict::Correct
            }
            Reply::Choice(_) => {
                self.console.write_line(MSG_WRONG)?;
                Verdict::Wrong
            }
        };

        debug!(question = self.state.question_number, ?verdict, "question resolved");
        Ok(verdict)
    }

    /// Prompt until the player names a presented choice or forfeits.
    fn read_reply(&mut self, equation: &Equation) -> QuizResult<Reply> {
        loop {
            self.console.write_line("")?;
            let Some(line) = self.console.read_line(PROMPT)? else {
                warn!(question = self.state.question_number, "input closed, forfeiting");
                return Ok(Reply::Forfeit);
            };

            let input = line.trim();
            if input.eq_ignore_ascii_case(FORFEIT_COMMAND) {
                return Ok(Reply::Forfeit);
            }

            let Ok(value) = input.parse::<f64>() else {
                debug!(input, "rejected non-numeric input");
                self.console.write_line(MSG_NOT_A_NUMBER)?;
                continue;
            };

            if !equation.is_answer_valid(value) {
                debug!(value, "rejected value outside the choices");
                self.console.write_line(MSG_NOT_A_CHOICE)?;
                continue;
            }

            return Ok(Reply::Choice(value));
        }
    }

    fn print_result(&mut self) -> QuizResult<()> {
        self.console.write_line("")?;
        match self.state.outcome {
            Outcome::Won => self.console.write_line(&format!(
                "Congratulations! You completed all {} questions!",
                self.config.total_questions()
            ))?,
            Outcome::Lost(_) => self.console.write_line(&format!(
                "You lost on question #{}.",
                self.state.question_number
            ))?,
            Outcome::Pending => {}
        }
        Ok(())
    }
}

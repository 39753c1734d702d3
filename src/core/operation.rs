//! Arithmetic operations and their evaluation.
//!
//! Each variant maps to a pure binary function over `f64` and a display
//! symbol. The generator folds operands through these functions without
//! matching on the variant itself.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Binary arithmetic function applied left-to-right during evaluation.
pub type BinaryFn = fn(f64, f64) -> f64;

/// Operation kinds that can appear between operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    /// Real-valued quotient. Division by zero yields ±infinity or NaN.
    Divide,
    /// Reserved. Never admitted by `LevelConfig`.
    Fraction,
}

impl Operation {
    /// All operations usable in a level.
    pub const ARITHMETIC: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The binary function this operation evaluates with.
    #[must_use]
    pub fn function(self) -> BinaryFn {
        match self {
            Operation::Add => <f64 as Add>::add,
            Operation::Subtract => <f64 as Sub>::sub,
            Operation::Multiply => <f64 as Mul>::mul,
            // A fraction is its quotient.
            Operation::Divide | Operation::Fraction => <f64 as Div>::div,
        }
    }

    /// Apply this operation to two values.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        (self.function())(lhs, rhs)
    }

    /// Symbol used when rendering an equation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide | Operation::Fraction => "/",
        }
    }

    /// Whether levels may use this operation.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Operation::Fraction)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

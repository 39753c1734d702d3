//! Quiz configuration types.
//!
//! A quiz is configured at startup by providing:
//! - `LevelConfig`: one difficulty tier (operations and equation length)
//! - `LevelTable`: the ordered difficulty curve
//! - `QuizConfig`: the level table plus session-wide settings
//!
//! The session never hardcodes levels - it walks whatever table it is given.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::operation::Operation;
use crate::error::{QuizError, QuizResult};

/// Questions asked per level unless configured otherwise.
pub const DEFAULT_QUESTIONS_PER_LEVEL: usize = 5;

/// Configuration for a single level.
///
/// Immutable once built. `LevelConfig::new` is the only way to construct
/// one (deserialization goes through it too), so every instance has a
/// non-empty set of non-reserved operations and at least one operand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LevelDef")]
pub struct LevelConfig {
    level_number: u32,
    operations: SmallVec<[Operation; 4]>,
    operand_count: usize,
}

/// Unvalidated wire form of `LevelConfig`.
#[derive(Deserialize)]
struct LevelDef {
    level_number: u32,
    operations: Vec<Operation>,
    operand_count: usize,
}

impl TryFrom<LevelDef> for LevelConfig {
    type Error = QuizError;

    fn try_from(def: LevelDef) -> QuizResult<Self> {
        LevelConfig::new(def.level_number, def.operations, def.operand_count)
    }
}

impl LevelConfig {
    /// Create a new level configuration.
    ///
    /// Duplicate operations are collapsed, keeping first-seen order, so each
    /// allowed operation is equally likely to be drawn.
    pub fn new(
        level_number: u32,
        operations: impl IntoIterator<Item = Operation>,
        operand_count: usize,
    ) -> QuizResult<Self> {
        let invalid = |reason| QuizError::InvalidLevel {
            level: level_number,
            reason,
        };

        if level_number == 0 {
            return Err(invalid("level numbers start at 1"));
        }
        if operand_count == 0 {
            return Err(invalid("equations need at least one operand"));
        }

        let mut allowed: SmallVec<[Operation; 4]> = SmallVec::new();
        for op in operations {
            if op.is_reserved() {
                return Err(invalid("operation is reserved"));
            }
            if !allowed.contains(&op) {
                allowed.push(op);
            }
        }
        if allowed.is_empty() {
            return Err(invalid("at least one operation is required"));
        }

        Ok(Self {
            level_number,
            operations: allowed,
            operand_count,
        })
    }

    /// 1-based level number.
    #[must_use]
    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    /// Operations that may appear between operands.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of operands in each equation.
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.operand_count
    }

    /// Check if an operation is allowed at this level.
    #[must_use]
    pub fn allows(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }
}

/// Ordered, non-empty sequence of levels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelConfig>", into = "Vec<LevelConfig>")]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
}

impl TryFrom<Vec<LevelConfig>> for LevelTable {
    type Error = QuizError;

    fn try_from(levels: Vec<LevelConfig>) -> QuizResult<Self> {
        LevelTable::new(levels)
    }
}

impl From<LevelTable> for Vec<LevelConfig> {
    fn from(table: LevelTable) -> Self {
        table.levels
    }
}

impl LevelTable {
    /// Create a table from levels in play order.
    pub fn new(levels: Vec<LevelConfig>) -> QuizResult<Self> {
        if levels.is_empty() {
            return Err(QuizError::EmptyLevelTable);
        }
        Ok(Self { levels })
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get a level by its position in the table.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LevelConfig> {
        self.levels.get(index)
    }

    /// Iterate over levels in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, LevelConfig> {
        self.levels.iter()
    }
}

impl Default for LevelTable {
    /// The standard two-level curve:
    /// 1. addition of two digits
    /// 2. addition and subtraction of three digits
    fn default() -> Self {
        let levels = vec![
            LevelConfig {
                level_number: 1,
                operations: smallvec::smallvec![Operation::Add],
                operand_count: 2,
            },
            LevelConfig {
                level_number: 2,
                operations: smallvec::smallvec![Operation::Add, Operation::Subtract],
                operand_count: 3,
            },
        ];
        Self { levels }
    }
}

impl<'a> IntoIterator for &'a LevelTable {
    type Item = &'a LevelConfig;
    type IntoIter = std::slice::Iter<'a, LevelConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

/// Complete quiz configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Questions asked at each level before moving on.
    pub questions_per_level: usize,

    /// Difficulty curve, played in order.
    pub levels: LevelTable,

    /// Seed for a reproducible play-through. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_per_level: DEFAULT_QUESTIONS_PER_LEVEL,
            levels: LevelTable::default(),
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Create a config with the default level table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set questions per level.
    #[must_use]
    pub fn with_questions_per_level(mut self, count: usize) -> Self {
        self.questions_per_level = count;
        self
    }

    /// Replace the level table.
    #[must_use]
    pub fn with_levels(mut self, levels: LevelTable) -> Self {
        self.levels = levels;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total questions in a full play-through.
    ///
    /// Saturates on overflow; `validate` rejects such configs.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.levels.len().saturating_mul(self.questions_per_level)
    }

    /// Check settings that builders cannot reject on their own.
    ///
    /// The total question count must fit in a `usize`.
    pub fn validate(&self) -> QuizResult<()> {
        if self.questions_per_level == 0
            || self.levels.len().checked_mul(self.questions_per_level).is_none()
        {
            return Err(QuizError::InvalidQuestionCount(self.questions_per_level));
        }
        Ok(())
    }
}

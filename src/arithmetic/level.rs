//! Difficulty levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Levels with an operand ceiling at or below this never produce `+ 0`.
pub const EASY_MAX_OPERAND: u32 = 5;

/// Arithmetic operator a level may draw from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
        }
    }

    /// Apply the operator. Subtraction saturates at zero.
    pub fn apply(&self, a: u32, b: u32) -> u32 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a.saturating_sub(b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Immutable descriptor of one difficulty tier.
///
/// # Example
///
/// ```rust
/// use mathcraft::arithmetic::{LevelConfig, Operator};
///
/// let level = LevelConfig::new("Mixed", "Mixed 1-10", 10, &[Operator::Add, Operator::Subtract], "⚔️");
/// assert!(level.allows(Operator::Subtract));
/// assert_eq!(level.max_operand(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    name: String,
    description: String,
    max_operand: u32,
    operators: Vec<Operator>,
    icon: String,
}

impl LevelConfig {
    /// Create a level. Duplicate operators are collapsed, keeping first
    /// occurrence order.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        max_operand: u32,
        operators: &[Operator],
        icon: impl Into<String>,
    ) -> Self {
        let mut unique = Vec::with_capacity(operators.len());
        for op in operators {
            if !unique.contains(op) {
                unique.push(*op);
            }
        }
        Self {
            name: name.into(),
            description: description.into(),
            max_operand,
            operators: unique,
            icon: icon.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn max_operand(&self) -> u32 {
        self.max_operand
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn allows(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }

    /// Easy tiers keep the second addend at one or more.
    pub fn is_easy(&self) -> bool {
        self.max_operand <= EASY_MAX_OPERAND
    }
}

/// The eight standard levels, easiest first.
pub fn standard_levels() -> Vec<LevelConfig> {
    use Operator::{Add, Subtract};

    vec![
        LevelConfig::new("Apprentice", "Addition 1-5", 5, &[Add], "🪨"),
        LevelConfig::new("Miner", "Addition 1-10", 10, &[Add], "⛏️"),
        LevelConfig::new("Explorer", "Subtraction 1-5", 5, &[Subtract], "🗺️"),
        LevelConfig::new("Builder", "Subtraction 1-10", 10, &[Subtract], "🏗️"),
        LevelConfig::new("Adventurer", "Mixed 1-10", 10, &[Add, Subtract], "⚔️"),
        LevelConfig::new("Hero", "Addition up to 20", 20, &[Add], "🛡️"),
        LevelConfig::new("Wizard", "Subtraction up to 20", 20, &[Subtract], "✨"),
        LevelConfig::new("Ender Dragon", "Mixed up to 20", 20, &[Add, Subtract], "🐉"),
    ]
}

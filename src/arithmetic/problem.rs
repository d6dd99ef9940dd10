//! Problem generation.
//!
//! Generation is total: any level yields a valid problem. The random source
//! is always passed in, so a seeded `StdRng` makes every draw reproducible.

use super::level::{LevelConfig, Operator};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single arithmetic question and its answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    operand_a: u32,
    operand_b: u32,
    operator: Operator,
    answer: u32,
}

impl Problem {
    pub(crate) fn new(operand_a: u32, operand_b: u32, operator: Operator) -> Self {
        Self {
            operand_a,
            operand_b,
            operator,
            answer: operator.apply(operand_a, operand_b),
        }
    }

    pub fn operand_a(&self) -> u32 {
        self.operand_a
    }

    pub fn operand_b(&self) -> u32 {
        self.operand_b
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn answer(&self) -> u32 {
        self.answer
    }

    pub fn is_answered_by(&self, value: u32) -> bool {
        self.answer == value
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = ?",
            self.operand_a, self.operator, self.operand_b
        )
    }
}

/// Generate one problem for `level`.
///
/// # Example
///
/// ```rust
/// use mathcraft::arithmetic::{generate, standard_levels, Operator};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let levels = standard_levels();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let problem = generate(&levels[2], &mut rng);
/// assert_eq!(problem.operator(), Operator::Subtract);
/// assert!(problem.operand_a() >= problem.operand_b());
/// assert!(problem.operand_b() >= 1);
/// ```
pub fn generate<R: Rng + ?Sized>(level: &LevelConfig, rng: &mut R) -> Problem {
    let operator = level
        .operators()
        .choose(rng)
        .copied()
        .unwrap_or(Operator::Add);
    let max = level.max_operand().max(1);

    match operator {
        Operator::Add => addition(max, level.is_easy(), rng),
        Operator::Subtract => subtraction(max, rng),
    }
}

/// `a` in `[1, max]`, `b` in `[0, max - a)`, shifted up by one on easy levels.
fn addition<R: Rng + ?Sized>(max: u32, easy: bool, rng: &mut R) -> Problem {
    let a = rng.gen_range(1..=max);
    let headroom = max - a;
    let b = if headroom == 0 {
        0
    } else {
        rng.gen_range(0..headroom)
    };
    let b = if easy { b + 1 } else { b };
    Problem::new(a, b, Operator::Add)
}

/// `a` in `[1, max]`, `b` in `[1, a]`; the larger operand always goes first.
fn subtraction<R: Rng + ?Sized>(max: u32, rng: &mut R) -> Problem {
    let a = rng.gen_range(1..=max);
    let b = rng.gen_range(1..=a);
    Problem::new(a.max(b), a.min(b), Operator::Subtract)
}

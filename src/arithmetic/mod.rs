//! Levels and the problem generator.

mod level;
mod problem;

pub use level::{standard_levels, LevelConfig, Operator, EASY_MAX_OPERAND};
pub use problem::{generate, Problem};

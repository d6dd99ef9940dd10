//! Errors for game configuration.

use thiserror::Error;

/// A single problem found while validating a level table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Level table is empty")]
    NoLevels,

    #[error("Level {index} ({name}) has a maximum operand of zero")]
    ZeroMaxOperand { index: usize, name: String },

    #[error("Level {index} ({name}) allows no operators")]
    NoOperators { index: usize, name: String },

    #[error("Level {index} has an empty name")]
    UnnamedLevel { index: usize },
}

/// Errors that can occur when building a [`GameConfig`](super::GameConfig).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Level-up threshold must be at least 1")]
    ZeroThreshold,

    #[error("No test lengths defined. Add at least one with .test_counts()")]
    NoTestCounts,

    #[error("Test length 0 is not allowed")]
    ZeroTestCount,

    #[error("Invalid level table: {}", format_violations(.0))]
    InvalidLevels(Vec<ConfigViolation>),

    #[error("Default test config ({count} problems, level {level}) is not selectable")]
    InvalidDefaultTest { count: usize, level: usize },
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_levels_lists_every_violation() {
        let err = BuildError::InvalidLevels(vec![
            ConfigViolation::ZeroMaxOperand {
                index: 1,
                name: "Miner".to_string(),
            },
            ConfigViolation::NoOperators {
                index: 2,
                name: "Explorer".to_string(),
            },
        ]);

        let message = err.to_string();
        assert!(message.contains("Level 1 (Miner) has a maximum operand of zero"));
        assert!(message.contains("Level 2 (Explorer) allows no operators"));
    }
}

//! Level-table validation using Validation.
//!
//! Every level is checked and all violations are collected, so a broken
//! table reports everything wrong with it at once.

use crate::arithmetic::LevelConfig;
use crate::config::error::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check one level, accumulating all of its violations.
pub fn validate_level(
    index: usize,
    level: &LevelConfig,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

    checks.push(if level.name().trim().is_empty() {
        Validation::fail(ConfigViolation::UnnamedLevel { index })
    } else {
        Validation::success(())
    });

    checks.push(if level.max_operand() == 0 {
        Validation::fail(ConfigViolation::ZeroMaxOperand {
            index,
            name: level.name().to_string(),
        })
    } else {
        Validation::success(())
    });

    checks.push(if level.operators().is_empty() {
        Validation::fail(ConfigViolation::NoOperators {
            index,
            name: level.name().to_string(),
        })
    } else {
        Validation::success(())
    });

    Validation::all_vec(checks).map(|_| ())
}

/// Check a whole level table.
pub fn validate_levels(levels: &[LevelConfig]) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if levels.is_empty() {
        return Validation::fail(ConfigViolation::NoLevels);
    }

    let checks = levels
        .iter()
        .enumerate()
        .map(|(index, level)| validate_level(index, level))
        .collect::<Vec<_>>();

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a failed validation into a plain list.
pub(crate) fn violations<E: Clone>(result: Validation<(), NonEmptyVec<E>>) -> Vec<E> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::{standard_levels, Operator};

    #[test]
    fn standard_table_passes() {
        assert!(validate_levels(&standard_levels()).is_success());
    }

    #[test]
    fn empty_table_fails() {
        let result = validate_levels(&[]);
        assert_eq!(violations(result), vec![ConfigViolation::NoLevels]);
    }

    #[test]
    fn accumulates_all_violations_of_one_level() {
        let level = LevelConfig::new("", "broken", 0, &[], "?");

        let found = violations(validate_level(3, &level));

        assert_eq!(found.len(), 3);
        assert!(found.contains(&ConfigViolation::UnnamedLevel { index: 3 }));
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigViolation::ZeroMaxOperand { index: 3, .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigViolation::NoOperators { index: 3, .. })));
    }

    #[test]
    fn accumulates_across_levels() {
        let levels = vec![
            LevelConfig::new("ok", "fine", 5, &[Operator::Add], "!"),
            LevelConfig::new("zero", "bad max", 0, &[Operator::Add], "!"),
            LevelConfig::new("none", "no ops", 5, &[], "!"),
        ];

        let found = violations(validate_levels(&levels));

        assert_eq!(
            found,
            vec![
                ConfigViolation::ZeroMaxOperand {
                    index: 1,
                    name: "zero".to_string()
                },
                ConfigViolation::NoOperators {
                    index: 2,
                    name: "none".to_string()
                },
            ]
        );
    }
}

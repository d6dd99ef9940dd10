//! Builder for constructing game configurations.

use crate::arithmetic::{standard_levels, LevelConfig};
use crate::config::error::BuildError;
use crate::config::rules::{validate_levels, violations};
use crate::config::{GameConfig, Pacing, LEVEL_UP_THRESHOLD, TEST_COUNTS};
use crate::session::TestConfig;

/// Builder for [`GameConfig`] with a fluent API.
///
/// Every field starts at the standard game's value.
pub struct GameConfigBuilder {
    levels: Vec<LevelConfig>,
    level_up_threshold: u32,
    pacing: Pacing,
    test_counts: Vec<usize>,
    default_test: Option<TestConfig>,
}

impl GameConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            levels: standard_levels(),
            level_up_threshold: LEVEL_UP_THRESHOLD,
            pacing: Pacing::default(),
            test_counts: TEST_COUNTS.to_vec(),
            default_test: None,
        }
    }

    /// Replace the level table.
    pub fn levels(mut self, levels: Vec<LevelConfig>) -> Self {
        self.levels = levels;
        self
    }

    /// Correct answers needed to move up a level.
    pub fn level_up_threshold(mut self, threshold: u32) -> Self {
        self.level_up_threshold = threshold;
        self
    }

    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Test lengths offered on the setup screen.
    pub fn test_counts(mut self, counts: Vec<usize>) -> Self {
        self.test_counts = counts;
        self
    }

    /// Test config selected when the game starts.
    ///
    /// Defaults to 10 problems (or the first offered length) at level 0.
    pub fn default_test(mut self, config: TestConfig) -> Self {
        self.default_test = Some(config);
        self
    }

    /// Build the configuration.
    /// Returns an error if any field is unusable.
    pub fn build(self) -> Result<GameConfig, BuildError> {
        let found = violations(validate_levels(&self.levels));
        if !found.is_empty() {
            return Err(BuildError::InvalidLevels(found));
        }

        if self.level_up_threshold == 0 {
            return Err(BuildError::ZeroThreshold);
        }

        if self.test_counts.is_empty() {
            return Err(BuildError::NoTestCounts);
        }

        if self.test_counts.contains(&0) {
            return Err(BuildError::ZeroTestCount);
        }

        let default_test = match self.default_test {
            Some(config) => config,
            None => {
                let standard = TestConfig::default();
                let count = if self.test_counts.contains(&standard.count) {
                    standard.count
                } else {
                    self.test_counts[0]
                };
                TestConfig { count, level: 0 }
            }
        };

        // A fresh game has only level 0 unlocked.
        if !self.test_counts.contains(&default_test.count) || default_test.level != 0 {
            return Err(BuildError::InvalidDefaultTest {
                count: default_test.count,
                level: default_test.level,
            });
        }

        Ok(GameConfig {
            levels: self.levels,
            level_up_threshold: self.level_up_threshold,
            pacing: self.pacing,
            test_counts: self.test_counts,
            default_test,
        })
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Operator;
    use crate::config::ConfigViolation;

    #[test]
    fn builder_defaults_to_standard_game() {
        let config = GameConfigBuilder::new().build().unwrap();

        assert_eq!(config.levels(), standard_levels().as_slice());
        assert_eq!(config.level_up_threshold(), 5);
        assert_eq!(config.default_test(), TestConfig::default());
    }

    #[test]
    fn builder_rejects_zero_threshold() {
        let result = GameConfigBuilder::new().level_up_threshold(0).build();
        assert!(matches!(result, Err(BuildError::ZeroThreshold)));
    }

    #[test]
    fn builder_rejects_missing_test_counts() {
        let result = GameConfigBuilder::new().test_counts(vec![]).build();
        assert!(matches!(result, Err(BuildError::NoTestCounts)));

        let result = GameConfigBuilder::new().test_counts(vec![5, 0]).build();
        assert!(matches!(result, Err(BuildError::ZeroTestCount)));
    }

    #[test]
    fn builder_reports_all_level_violations() {
        let result = GameConfigBuilder::new()
            .levels(vec![
                LevelConfig::new("a", "a", 0, &[Operator::Add], "?"),
                LevelConfig::new("b", "b", 3, &[], "?"),
            ])
            .build();

        match result {
            Err(BuildError::InvalidLevels(found)) => {
                assert_eq!(found.len(), 2);
                assert!(matches!(found[0], ConfigViolation::ZeroMaxOperand { index: 0, .. }));
                assert!(matches!(found[1], ConfigViolation::NoOperators { index: 1, .. }));
            }
            other => panic!("Expected InvalidLevels, got {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_empty_level_table() {
        let result = GameConfigBuilder::new().levels(vec![]).build();
        match result {
            Err(BuildError::InvalidLevels(found)) => {
                assert_eq!(found, vec![ConfigViolation::NoLevels]);
            }
            other => panic!("Expected InvalidLevels, got {other:?}"),
        }
    }

    #[test]
    fn default_test_follows_custom_counts() {
        let config = GameConfigBuilder::new()
            .test_counts(vec![3, 6])
            .build()
            .unwrap();

        assert_eq!(config.default_test(), TestConfig { count: 3, level: 0 });
    }

    #[test]
    fn default_test_must_be_selectable() {
        let result = GameConfigBuilder::new()
            .default_test(TestConfig { count: 7, level: 0 })
            .build();
        assert!(matches!(
            result,
            Err(BuildError::InvalidDefaultTest { count: 7, level: 0 })
        ));

        let result = GameConfigBuilder::new()
            .default_test(TestConfig { count: 5, level: 2 })
            .build();
        assert!(matches!(result, Err(BuildError::InvalidDefaultTest { .. })));
    }
}

//! Game configuration.
//!
//! Configuration is in-code only: there are no files, flags or environment
//! variables. [`GameConfig::default`] is the standard game; the
//! [`GameConfigBuilder`] exists for variants and for tests that want short
//! tables or different pacing.
//!
//! # Example
//!
//! ```rust
//! use mathcraft::config::{GameConfig, GameConfigBuilder, Pacing};
//! use std::time::Duration;
//!
//! let config = GameConfigBuilder::new()
//!     .level_up_threshold(3)
//!     .pacing(Pacing::instant())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.level_up_threshold(), 3);
//! assert_eq!(config.pacing().correct, Duration::ZERO);
//! assert_eq!(GameConfig::default().levels().len(), 8);
//! ```

pub mod builder;
pub mod error;
pub mod rules;

pub use builder::GameConfigBuilder;
pub use error::{BuildError, ConfigViolation};

use crate::arithmetic::LevelConfig;
use crate::session::TestConfig;
use std::time::Duration;

/// Correct answers within a level needed to move up.
pub const LEVEL_UP_THRESHOLD: u32 = 5;

/// Test lengths offered on the setup screen.
pub const TEST_COUNTS: [usize; 3] = [5, 10, 20];

/// Longest answer the answer box accepts, in digits.
pub const MAX_ANSWER_DIGITS: usize = 4;

/// Delays between a graded answer and what follows it.
///
/// These only pace the presentation; state changes never wait on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Correct practice answer to the next problem
    pub correct: Duration,
    /// Correct practice answer to the level-up banner
    pub level_up_reveal: Duration,
    /// Level-up banner on screen before the next problem
    pub level_up_hold: Duration,
    /// Missed practice answer to the next problem
    pub miss_clear: Duration,
    /// Test answer to the next test problem (or the results)
    pub test_advance: Duration,
}

impl Pacing {
    /// No delays at all.
    pub fn instant() -> Self {
        Self {
            correct: Duration::ZERO,
            level_up_reveal: Duration::ZERO,
            level_up_hold: Duration::ZERO,
            miss_clear: Duration::ZERO,
            test_advance: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            correct: Duration::from_millis(600),
            level_up_reveal: Duration::from_millis(600),
            level_up_hold: Duration::from_millis(2000),
            miss_clear: Duration::from_millis(800),
            test_advance: Duration::from_millis(500),
        }
    }
}

/// Validated game configuration.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub(crate) levels: Vec<LevelConfig>,
    pub(crate) level_up_threshold: u32,
    pub(crate) pacing: Pacing,
    pub(crate) test_counts: Vec<usize>,
    pub(crate) default_test: TestConfig,
}

impl GameConfig {
    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&LevelConfig> {
        self.levels.get(index)
    }

    pub fn last_level(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn level_up_threshold(&self) -> u32 {
        self.level_up_threshold
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn test_counts(&self) -> &[usize] {
        &self.test_counts
    }

    pub fn default_test(&self) -> TestConfig {
        self.default_test
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: crate::arithmetic::standard_levels(),
            level_up_threshold: LEVEL_UP_THRESHOLD,
            pacing: Pacing::default(),
            test_counts: TEST_COUNTS.to_vec(),
            default_test: TestConfig::default(),
        }
    }
}

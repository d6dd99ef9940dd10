//! Test mode: a fixed batch of problems answered once each.

use crate::arithmetic::{generate, LevelConfig, Problem};
use crate::session::results::TestResults;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Length and level of a test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfig {
    pub count: usize,
    pub level: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            count: 10,
            level: 0,
        }
    }
}

/// Why a test configuration can't be selected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetupViolation {
    #[error("{count} problems is not an offered test length (offered: {offered:?})")]
    UnsupportedCount { count: usize, offered: Vec<usize> },

    #[error("Level {level} is locked (highest unlocked: {unlocked})")]
    LockedLevel { level: usize, unlocked: usize },

    #[error("Level {level} does not exist ({available} levels)")]
    UnknownLevel { level: usize, available: usize },
}

/// Check a test configuration, accumulating ALL violations.
pub fn validate_setup(
    config: &TestConfig,
    offered_counts: &[usize],
    unlocked_level: usize,
    level_count: usize,
) -> Validation<(), NonEmptyVec<SetupViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<SetupViolation>>> = Vec::new();

    checks.push(if offered_counts.contains(&config.count) {
        Validation::success(())
    } else {
        Validation::fail(SetupViolation::UnsupportedCount {
            count: config.count,
            offered: offered_counts.to_vec(),
        })
    });

    checks.push(if config.level >= level_count {
        Validation::fail(SetupViolation::UnknownLevel {
            level: config.level,
            available: level_count,
        })
    } else if config.level > unlocked_level {
        Validation::fail(SetupViolation::LockedLevel {
            level: config.level,
            unlocked: unlocked_level,
        })
    } else {
        Validation::success(())
    });

    Validation::all_vec(checks).map(|_| ())
}

/// One submitted test answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub problem: Problem,
    pub user_answer: u32,
    pub correct: bool,
}

/// A running test.
///
/// Answers are appended at submission time; the cursor only moves on
/// [`advance`](Self::advance). Between the two the test is *pending*: the
/// answer for the current problem is in, and no further answer is taken.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestSession {
    config: TestConfig,
    problems: Vec<Problem>,
    current_index: usize,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
}

impl TestSession {
    /// Generate `config.count` independent problems at `level` up front.
    pub fn start<R: Rng + ?Sized>(
        config: TestConfig,
        level: &LevelConfig,
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Self {
        let problems = (0..config.count).map(|_| generate(level, rng)).collect();
        Self {
            config,
            problems,
            current_index: 0,
            answers: Vec::with_capacity(config.count),
            started_at,
        }
    }

    /// Problem awaiting an answer, or the one just answered while pending.
    pub fn current(&self) -> Option<&Problem> {
        self.problems.get(self.current_index)
    }

    /// Record an answer for the current problem.
    ///
    /// Returns `None` without recording when the current problem already has
    /// an answer or the test is over.
    pub fn answer(&mut self, user_answer: u32) -> Option<AnswerRecord> {
        if self.is_pending() {
            return None;
        }
        let problem = *self.current()?;
        let record = AnswerRecord {
            problem,
            user_answer,
            correct: problem.is_answered_by(user_answer),
        };
        self.answers.push(record);
        Some(record)
    }

    /// Move past an answered problem. Returns `true` if another problem
    /// follows.
    pub fn advance(&mut self) -> bool {
        if self.is_pending() {
            self.current_index += 1;
        }
        self.current_index < self.problems.len()
    }

    /// The current problem has been answered but not advanced past.
    pub fn is_pending(&self) -> bool {
        self.answers.len() > self.current_index
    }

    /// Score the answer log.
    pub fn results(&self, finished_at: DateTime<Utc>) -> TestResults {
        TestResults::from_answers(&self.answers, self.started_at, finished_at)
    }

    pub fn config(&self) -> TestConfig {
        self.config
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }
}

//! Practice-mode progression.
//!
//! Pure bookkeeping: a [`PracticeSession`] knows nothing about screens,
//! timers or problems, only how a graded answer moves the numbers.

use serde::{Deserialize, Serialize};

/// Base XP for a correct answer.
pub const BASE_XP: u32 = 10;

/// Extra XP per answer already in the streak.
pub const STREAK_XP: u32 = 2;

/// XP earned by a correct answer given the streak before it.
///
/// ```rust
/// use mathcraft::session::xp_for;
///
/// assert_eq!(xp_for(0), 10);
/// assert_eq!(xp_for(4), 18);
/// ```
pub fn xp_for(streak_before: u32) -> u32 {
    BASE_XP.saturating_add(STREAK_XP.saturating_mul(streak_before))
}

/// How a graded answer changed the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grading {
    Correct {
        xp_gained: u32,
        /// Level moved up to, when this answer completed the current one
        promoted_to: Option<usize>,
    },
    Incorrect,
}

/// Score, streak and level progress of a practice run.
///
/// `xp` and `best_streak` carry over between runs for the lifetime of the
/// process; [`restart`](Self::restart) resets everything else.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSession {
    current_level: usize,
    score: u32,
    streak: u32,
    best_streak: u32,
    total_answered: u32,
    level_progress: u32,
    xp: u32,
}

impl PracticeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new run at `level`.
    pub fn restart(&mut self, level: usize) {
        self.current_level = level;
        self.score = 0;
        self.streak = 0;
        self.total_answered = 0;
        self.level_progress = 0;
    }

    /// Grade one answer.
    ///
    /// On a correct answer that fills the level progress, the session moves to
    /// the next level when `last_level` has not been reached yet. At the last
    /// level progress keeps counting.
    pub fn record(&mut self, correct: bool, threshold: u32, last_level: usize) -> Grading {
        self.total_answered = self.total_answered.saturating_add(1);

        if !correct {
            self.streak = 0;
            return Grading::Incorrect;
        }

        let xp_gained = xp_for(self.streak);
        self.score = self.score.saturating_add(1);
        self.streak = self.streak.saturating_add(1);
        self.best_streak = self.best_streak.max(self.streak);
        self.xp = self.xp.saturating_add(xp_gained);
        self.level_progress = self.level_progress.saturating_add(1);

        let promoted_to = if self.level_progress >= threshold && self.current_level < last_level {
            self.current_level += 1;
            self.level_progress = 0;
            Some(self.current_level)
        } else {
            None
        };

        Grading::Correct {
            xp_gained,
            promoted_to,
        }
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    pub fn level_progress(&self) -> u32 {
        self.level_progress
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }
}

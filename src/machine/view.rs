//! Render snapshot of the machine.

use crate::arithmetic::{LevelConfig, Problem};
use crate::core::Screen;
use crate::machine::event::Feedback;
use crate::session::{AnswerRecord, PracticeSession, TestConfig, TestResults};
use serde::Serialize;

/// Position within a running test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TestProgress {
    /// Zero-based index of the problem on screen
    pub index: usize,
    pub total: usize,
}

/// Everything a presenter needs to draw the current screen.
///
/// Owned, so it can be handed to a presentation effect without borrowing the
/// machine.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct View {
    pub screen: Screen,
    pub epoch: u64,
    pub levels: Vec<LevelConfig>,
    pub unlocked_level: usize,
    pub level_up_threshold: u32,
    pub practice: PracticeSession,
    pub problem: Option<Problem>,
    pub answer_text: String,
    pub feedback: Option<Feedback>,
    /// Level announced by the level-up banner while it is up
    pub level_up_banner: Option<usize>,
    pub test_config: TestConfig,
    pub test_counts: Vec<usize>,
    pub test_progress: Option<TestProgress>,
    pub test_answers: Vec<AnswerRecord>,
    pub results: Option<TestResults>,
    pub decoration_taps: u32,
}

impl View {
    /// Answer box and submit button are usable.
    pub fn can_submit(&self) -> bool {
        self.screen.accepts_answers() && self.feedback.is_none() && !self.answer_text.is_empty()
    }

    /// Level shown on the title screen as the best reached.
    pub fn best_level(&self) -> Option<&LevelConfig> {
        self.levels.get(self.unlocked_level)
    }

    pub fn is_locked(&self, level: usize) -> bool {
        level > self.unlocked_level
    }

    /// JSON snapshot, for logging and debugging front ends.
    pub fn snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

//! Inputs to the machine and what it hands back.

use crate::core::Screen;
use crate::effects::SoundCue;
use crate::session::TestConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A discrete learner action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Menu navigation; only routes in [`ROUTES`](crate::core::ROUTES) are taken
    Navigate(Screen),
    /// Start practice at a level (level select screen only)
    SelectLevel(usize),
    /// Replace the answer box contents
    SetAnswerText(String),
    /// Number pad key
    AppendDigit(u8),
    /// Number pad clear key
    ClearAnswer,
    SubmitAnswer,
    ConfigureTest(TestConfig),
    StartTest,
    RestartTest,
    TapDecoration,
}

/// Work the machine wants done after a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// Clear feedback and the level-up banner, then pose a fresh practice problem
    NextProblem,
    /// Show the level-up banner for `level`
    RevealLevelUp { level: usize },
    /// Move past the answered test problem, or finish the test
    AdvanceTest,
}

/// A deferred effect tied to the screen visit that asked for it.
///
/// The machine drops it if its `epoch` no longer matches by the time it is
/// resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled {
    pub delay: Duration,
    pub epoch: u64,
    pub effect: Deferred,
}

/// Feedback for the answer just given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Correct { xp_gained: u32 },
    Incorrect { expected: u32 },
}

/// Result of feeding one event or deferred effect to the machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    /// State changed and should be rendered
    pub changed: bool,
    /// Sound cues to play, in order
    pub cues: Vec<SoundCue>,
    /// Deferred effects to resolve later
    pub scheduled: Vec<Scheduled>,
}

impl Reaction {
    /// Nothing happened.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// State changed.
    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }

    pub fn cue(mut self, cue: SoundCue) -> Self {
        self.cues.push(cue);
        self
    }

    pub fn schedule(mut self, scheduled: Scheduled) -> Self {
        self.scheduled.push(scheduled);
        self
    }

    /// Something for the presenter to do.
    pub fn is_visible(&self) -> bool {
        self.changed || !self.cues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_reaction_is_invisible() {
        let reaction = Reaction::ignored();
        assert!(!reaction.is_visible());
        assert!(reaction.scheduled.is_empty());
    }

    #[test]
    fn cue_alone_is_visible() {
        let reaction = Reaction::ignored().cue(SoundCue::DecorativeTap);
        assert!(reaction.is_visible());
        assert!(!reaction.changed);
    }

    #[test]
    fn builder_methods_accumulate() {
        let scheduled = Scheduled {
            delay: Duration::from_millis(600),
            epoch: 3,
            effect: Deferred::NextProblem,
        };
        let reaction = Reaction::changed()
            .cue(SoundCue::CorrectAnswer)
            .cue(SoundCue::LevelUp)
            .schedule(scheduled);

        assert!(reaction.changed);
        assert_eq!(reaction.cues, vec![SoundCue::CorrectAnswer, SoundCue::LevelUp]);
        assert_eq!(reaction.scheduled, vec![scheduled]);
    }
}

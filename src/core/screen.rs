//! Screens the game moves between.
//!
//! A screen is a plain value; all session data lives on the machine. Screens
//! only answer questions about themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the learner in the game.
///
/// # Example
///
/// ```rust
/// use mathcraft::core::Screen;
///
/// assert_eq!(Screen::default(), Screen::Title);
/// assert!(Screen::Game.accepts_answers());
/// assert!(!Screen::Results.accepts_answers());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Title,
    LevelSelect,
    Game,
    TestSetup,
    Test,
    Results,
}

impl Screen {
    /// Get the screen's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::LevelSelect => "LevelSelect",
            Self::Game => "Game",
            Self::TestSetup => "TestSetup",
            Self::Test => "Test",
            Self::Results => "Results",
        }
    }

    /// Screens with an answer box and number pad.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, Self::Game | Self::Test)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Screen; 6] = [
        Screen::Title,
        Screen::LevelSelect,
        Screen::Game,
        Screen::TestSetup,
        Screen::Test,
        Screen::Results,
    ];

    #[test]
    fn screen_name_returns_correct_value() {
        assert_eq!(Screen::Title.name(), "Title");
        assert_eq!(Screen::LevelSelect.name(), "LevelSelect");
        assert_eq!(Screen::Game.name(), "Game");
        assert_eq!(Screen::TestSetup.name(), "TestSetup");
        assert_eq!(Screen::Test.name(), "Test");
        assert_eq!(Screen::Results.name(), "Results");
    }

    #[test]
    fn only_play_screens_accept_answers() {
        let accepting: Vec<_> = ALL.iter().filter(|s| s.accepts_answers()).collect();
        assert_eq!(accepting, vec![&Screen::Game, &Screen::Test]);
    }

    #[test]
    fn display_matches_name() {
        for screen in ALL {
            assert_eq!(screen.to_string(), screen.name());
        }
    }

    #[test]
    fn screen_serializes_correctly() {
        let json = serde_json::to_string(&Screen::LevelSelect).unwrap();
        let deserialized: Screen = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Screen::LevelSelect);
    }
}

//! Menu routes between screens.
//!
//! Only plain navigation goes through this table. Entering `Game`, `Test`
//! and `Results` happens through dedicated events (picking a level,
//! starting a test, finishing one), never through a route.

use super::screen::Screen;

/// An allowed move from one screen to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub from: Screen,
    pub to: Screen,
}

/// Every navigation the learner may request.
pub const ROUTES: &[Route] = &[
    Route {
        from: Screen::Title,
        to: Screen::LevelSelect,
    },
    Route {
        from: Screen::Title,
        to: Screen::TestSetup,
    },
    Route {
        from: Screen::LevelSelect,
        to: Screen::Title,
    },
    Route {
        from: Screen::TestSetup,
        to: Screen::Title,
    },
    Route {
        from: Screen::Game,
        to: Screen::Title,
    },
    Route {
        from: Screen::Results,
        to: Screen::Title,
    },
];

impl Route {
    /// Check if this route leads from `current` to `target` (pure).
    pub fn can_execute(&self, current: &Screen, target: &Screen) -> bool {
        self.from == *current && self.to == *target
    }

    /// Look up the route from `current` to `target`, if there is one.
    pub fn find(current: &Screen, target: &Screen) -> Option<&'static Route> {
        ROUTES.iter().find(|r| r.can_execute(current, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_leads_to_both_modes() {
        assert!(Route::find(&Screen::Title, &Screen::LevelSelect).is_some());
        assert!(Route::find(&Screen::Title, &Screen::TestSetup).is_some());
    }

    #[test]
    fn every_menu_returns_to_title() {
        for from in [
            Screen::LevelSelect,
            Screen::TestSetup,
            Screen::Game,
            Screen::Results,
        ] {
            assert!(Route::find(&from, &Screen::Title).is_some(), "{from}");
        }
    }

    #[test]
    fn play_screens_are_not_routable() {
        for from in [Screen::Title, Screen::LevelSelect, Screen::TestSetup] {
            assert!(Route::find(&from, &Screen::Game).is_none());
            assert!(Route::find(&from, &Screen::Test).is_none());
        }
        assert!(Route::find(&Screen::Test, &Screen::Results).is_none());
    }

    #[test]
    fn test_screen_has_no_exit() {
        assert!(ROUTES.iter().all(|r| r.from != Screen::Test));
    }

    #[test]
    fn can_execute_matches_both_ends() {
        let route = ROUTES[0];
        assert!(route.can_execute(&Screen::Title, &Screen::LevelSelect));
        assert!(!route.can_execute(&Screen::Title, &Screen::TestSetup));
        assert!(!route.can_execute(&Screen::Game, &Screen::LevelSelect));
    }
}

//! The game machine: screens, practice progression and test mode.

use crate::arithmetic::{generate, Problem};
use crate::config::rules::violations;
use crate::config::{GameConfig, MAX_ANSWER_DIGITS};
use crate::core::{Guard, Route, Screen};
use crate::effects::SoundCue;
use crate::machine::event::{Deferred, Event, Feedback, Reaction, Scheduled};
use crate::machine::view::{TestProgress, View};
use crate::session::{
    validate_setup, Grading, PracticeSession, SetupViolation, TestConfig, TestResults, TestSession,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Owned game state driven by [`Event`]s.
///
/// `handle` and `resolve` are the only ways state changes. Both return a
/// [`Reaction`] telling the shell what to render, which sounds to play and
/// which deferred effects to resolve later.
///
/// # Example
///
/// ```rust
/// use mathcraft::config::GameConfig;
/// use mathcraft::core::Screen;
/// use mathcraft::machine::{Event, Game};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut game = Game::with_rng(GameConfig::default(), StdRng::seed_from_u64(1));
///
/// game.handle(Event::Navigate(Screen::LevelSelect));
/// game.handle(Event::SelectLevel(0));
/// assert_eq!(game.screen(), Screen::Game);
///
/// let answer = game.current_problem().unwrap().answer();
/// game.handle(Event::SetAnswerText(answer.to_string()));
/// let reaction = game.handle(Event::SubmitAnswer);
///
/// assert_eq!(game.practice().score(), 1);
/// assert_eq!(reaction.scheduled.len(), 1);
/// ```
#[derive(Debug)]
pub struct Game<R = StdRng> {
    config: GameConfig,
    rng: R,
    screen: Screen,
    epoch: u64,
    unlocked_level: usize,
    practice: PracticeSession,
    problem: Option<Problem>,
    answer_text: String,
    feedback: Option<Feedback>,
    level_up_banner: Option<usize>,
    test_config: TestConfig,
    test: Option<TestSession>,
    results: Option<TestResults>,
    decoration_taps: u32,
    input_guard: Guard<str>,
}

impl Game<StdRng> {
    /// New game on the title screen, seeded from OS entropy.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    /// New game on the title screen with an explicit random source.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let test_config = config.default_test();
        Self {
            config,
            rng,
            screen: Screen::Title,
            epoch: 0,
            unlocked_level: 0,
            practice: PracticeSession::new(),
            problem: None,
            answer_text: String::new(),
            feedback: None,
            level_up_banner: None,
            test_config,
            test: None,
            results: None,
            decoration_taps: 0,
            input_guard: Guard::digits(MAX_ANSWER_DIGITS),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Identifier of the current screen visit.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn unlocked_level(&self) -> usize {
        self.unlocked_level
    }

    pub fn practice(&self) -> &PracticeSession {
        &self.practice
    }

    /// Problem on screen, in either mode.
    pub fn current_problem(&self) -> Option<&Problem> {
        match self.screen {
            Screen::Game => self.problem.as_ref(),
            Screen::Test => self.test.as_ref().and_then(TestSession::current),
            _ => None,
        }
    }

    pub fn answer_text(&self) -> &str {
        &self.answer_text
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn level_up_banner(&self) -> Option<usize> {
        self.level_up_banner
    }

    pub fn test_config(&self) -> TestConfig {
        self.test_config
    }

    pub fn test_session(&self) -> Option<&TestSession> {
        self.test.as_ref()
    }

    pub fn results(&self) -> Option<&TestResults> {
        self.results.as_ref()
    }

    pub fn decoration_taps(&self) -> u32 {
        self.decoration_taps
    }

    /// Check a test configuration against the current unlock state.
    pub fn check_test_config(&self, config: &TestConfig) -> Result<(), Vec<SetupViolation>> {
        let found = violations(validate_setup(
            config,
            self.config.test_counts(),
            self.unlocked_level,
            self.config.levels().len(),
        ));
        if found.is_empty() {
            Ok(())
        } else {
            Err(found)
        }
    }

    /// Apply a learner event.
    pub fn handle(&mut self, event: Event) -> Reaction {
        match event {
            Event::Navigate(target) => self.navigate(target),
            Event::SelectLevel(level) => self.select_level(level),
            Event::SetAnswerText(text) => self.set_answer_text(text),
            Event::AppendDigit(digit) => self.append_digit(digit),
            Event::ClearAnswer => self.clear_answer(),
            Event::SubmitAnswer => self.submit(),
            Event::ConfigureTest(config) => self.configure_test(config),
            Event::StartTest if self.screen == Screen::TestSetup => self.begin_test(),
            Event::RestartTest if self.screen == Screen::Results => self.begin_test(),
            Event::TapDecoration => {
                self.decoration_taps = self.decoration_taps.saturating_add(1);
                Reaction::changed().cue(SoundCue::DecorativeTap)
            }
            event => {
                debug!(?event, screen = %self.screen, "event ignored");
                Reaction::ignored()
            }
        }
    }

    /// Apply a deferred effect returned by an earlier reaction.
    ///
    /// Effects scheduled during an earlier screen visit are dropped.
    pub fn resolve(&mut self, scheduled: Scheduled) -> Reaction {
        if scheduled.epoch != self.epoch {
            debug!(
                effect = ?scheduled.effect,
                scheduled_epoch = scheduled.epoch,
                epoch = self.epoch,
                "stale effect dropped"
            );
            return Reaction::ignored();
        }

        match scheduled.effect {
            Deferred::NextProblem if self.screen == Screen::Game => {
                self.pose_problem();
                Reaction::changed()
            }
            Deferred::RevealLevelUp { level } if self.screen == Screen::Game => {
                self.level_up_banner = Some(level);
                let hold = self.config.pacing().level_up_hold;
                Reaction::changed()
                    .cue(SoundCue::LevelUp)
                    .schedule(self.after(hold, Deferred::NextProblem))
            }
            Deferred::AdvanceTest if self.screen == Screen::Test => self.advance_test(),
            effect => {
                debug!(?effect, screen = %self.screen, "effect does not apply here");
                Reaction::ignored()
            }
        }
    }

    /// Render snapshot of the current state.
    pub fn view(&self) -> View {
        View {
            screen: self.screen,
            epoch: self.epoch,
            levels: self.config.levels().to_vec(),
            unlocked_level: self.unlocked_level,
            level_up_threshold: self.config.level_up_threshold(),
            practice: self.practice.clone(),
            problem: self.current_problem().copied(),
            answer_text: self.answer_text.clone(),
            feedback: self.feedback,
            level_up_banner: self.level_up_banner,
            test_config: self.test_config,
            test_counts: self.config.test_counts().to_vec(),
            test_progress: self.test.as_ref().map(|test| TestProgress {
                index: test
                    .current_index()
                    .min(test.problems().len().saturating_sub(1)),
                total: test.problems().len(),
            }),
            test_answers: self
                .test
                .as_ref()
                .map(|test| test.answers().to_vec())
                .unwrap_or_default(),
            results: self.results.clone(),
            decoration_taps: self.decoration_taps,
        }
    }

    fn navigate(&mut self, target: Screen) -> Reaction {
        if Route::find(&self.screen, &target).is_none() {
            debug!(from = %self.screen, to = %target, "no route");
            return Reaction::ignored();
        }

        match self.screen {
            Screen::Game => self.problem = None,
            Screen::Results => {
                self.test = None;
                self.results = None;
            }
            _ => {}
        }

        self.enter(target);
        Reaction::changed().cue(SoundCue::ButtonClick)
    }

    fn select_level(&mut self, level: usize) -> Reaction {
        if self.screen != Screen::LevelSelect {
            debug!(level, screen = %self.screen, "level selection outside level select");
            return Reaction::ignored();
        }
        let unlocked = Guard::at_most(self.unlocked_level);
        if level >= self.config.levels().len() || !unlocked.check(&level) {
            debug!(level, unlocked = self.unlocked_level, "locked level ignored");
            return Reaction::ignored();
        }

        self.practice.restart(level);
        self.enter(Screen::Game);
        self.pose_problem();
        Reaction::changed().cue(SoundCue::ButtonClick)
    }

    fn set_answer_text(&mut self, text: String) -> Reaction {
        if !self.input_open() || text == self.answer_text {
            return Reaction::ignored();
        }
        if !self.input_guard.check(&text) {
            debug!(%text, "answer text rejected");
            return Reaction::ignored();
        }
        self.answer_text = text;
        Reaction::changed()
    }

    fn append_digit(&mut self, digit: u8) -> Reaction {
        if !self.input_open() || digit > 9 {
            return Reaction::ignored();
        }
        let mut text = self.answer_text.clone();
        text.push(char::from(b'0' + digit));
        if !self.input_guard.check(&text) {
            return Reaction::ignored();
        }
        self.answer_text = text;
        Reaction::changed().cue(SoundCue::ButtonClick)
    }

    fn clear_answer(&mut self) -> Reaction {
        if !self.input_open() {
            return Reaction::ignored();
        }
        self.answer_text.clear();
        Reaction::changed().cue(SoundCue::ButtonClick)
    }

    fn submit(&mut self) -> Reaction {
        if !self.input_open() {
            return Reaction::ignored();
        }
        let Ok(value) = self.answer_text.parse::<u32>() else {
            debug!(text = %self.answer_text, "nothing to submit");
            return Reaction::ignored();
        };

        match self.screen {
            Screen::Game => self.grade_practice(value),
            Screen::Test => self.grade_test(value),
            _ => Reaction::ignored(),
        }
    }

    fn grade_practice(&mut self, value: u32) -> Reaction {
        let Some(problem) = self.problem else {
            return Reaction::ignored();
        };
        let pacing = *self.config.pacing();
        let grading = self.practice.record(
            problem.is_answered_by(value),
            self.config.level_up_threshold(),
            self.config.last_level(),
        );

        match grading {
            Grading::Correct {
                xp_gained,
                promoted_to,
            } => {
                self.feedback = Some(Feedback::Correct { xp_gained });
                let reaction = Reaction::changed().cue(SoundCue::CorrectAnswer);
                match promoted_to {
                    Some(level) => {
                        self.unlocked_level = self.unlocked_level.max(level);
                        info!(level, unlocked = self.unlocked_level, "level up");
                        reaction.schedule(
                            self.after(pacing.level_up_reveal, Deferred::RevealLevelUp { level }),
                        )
                    }
                    None => reaction.schedule(self.after(pacing.correct, Deferred::NextProblem)),
                }
            }
            Grading::Incorrect => {
                self.feedback = Some(Feedback::Incorrect {
                    expected: problem.answer(),
                });
                Reaction::changed()
                    .cue(SoundCue::WrongAnswer)
                    .schedule(self.after(pacing.miss_clear, Deferred::NextProblem))
            }
        }
    }

    fn grade_test(&mut self, value: u32) -> Reaction {
        let Some(record) = self.test.as_mut().and_then(|test| test.answer(value)) else {
            return Reaction::ignored();
        };

        let (feedback, cue) = if record.correct {
            (Feedback::Correct { xp_gained: 0 }, SoundCue::CorrectAnswer)
        } else {
            (
                Feedback::Incorrect {
                    expected: record.problem.answer(),
                },
                SoundCue::WrongAnswer,
            )
        };
        self.feedback = Some(feedback);

        let delay = self.config.pacing().test_advance;
        Reaction::changed()
            .cue(cue)
            .schedule(self.after(delay, Deferred::AdvanceTest))
    }

    fn configure_test(&mut self, config: TestConfig) -> Reaction {
        if self.screen != Screen::TestSetup {
            return Reaction::ignored();
        }
        if let Err(found) = self.check_test_config(&config) {
            warn!(?config, ?found, "test configuration rejected");
            return Reaction::ignored();
        }
        self.test_config = config;
        Reaction::changed().cue(SoundCue::ButtonClick)
    }

    fn begin_test(&mut self) -> Reaction {
        let config = self.test_config;
        let Some(level) = self.config.level(config.level) else {
            warn!(?config, "test level missing from level table");
            return Reaction::ignored();
        };

        let test = TestSession::start(config, level, &mut self.rng, Utc::now());
        info!(count = config.count, level = config.level, "test started");
        self.test = Some(test);
        self.results = None;
        self.enter(Screen::Test);
        Reaction::changed().cue(SoundCue::ButtonClick)
    }

    fn advance_test(&mut self) -> Reaction {
        let Some(test) = self.test.as_mut() else {
            return Reaction::ignored();
        };

        if test.advance() {
            self.answer_text.clear();
            self.feedback = None;
            return Reaction::changed();
        }

        let results = test.results(Utc::now());
        info!(
            correct = results.correct_count,
            total = results.total,
            percentage = results.percentage,
            "test finished"
        );
        self.results = Some(results);
        self.enter(Screen::Results);
        Reaction::changed()
    }

    fn enter(&mut self, target: Screen) {
        self.epoch += 1;
        debug!(from = %self.screen, to = %target, epoch = self.epoch, "screen change");

        self.screen = target;
        self.answer_text.clear();
        self.feedback = None;
        self.level_up_banner = None;
    }

    fn pose_problem(&mut self) {
        let level = &self.config.levels[self.practice.current_level()];
        self.problem = Some(generate(level, &mut self.rng));
        self.answer_text.clear();
        self.feedback = None;
        self.level_up_banner = None;
    }

    /// Answer box editable: play screen, no answer awaiting its effect.
    fn input_open(&self) -> bool {
        self.screen.accepts_answers() && self.feedback.is_none()
    }

    fn after(&self, delay: Duration, effect: Deferred) -> Scheduled {
        Scheduled {
            delay,
            epoch: self.epoch,
            effect,
        }
    }
}

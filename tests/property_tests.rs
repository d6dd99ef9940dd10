//! Property-based tests for the generator and the game machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated seeds and answer patterns.

use mathcraft::arithmetic::{generate, standard_levels, Operator};
use mathcraft::config::{GameConfigBuilder, Pacing};
use mathcraft::core::Screen;
use mathcraft::machine::{Event, Game, Reaction};
use mathcraft::session::{xp_for, Grade, TestConfig};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn game(seed: u64) -> Game<StdRng> {
    let config = GameConfigBuilder::new()
        .pacing(Pacing::instant())
        .build()
        .unwrap();
    Game::with_rng(config, StdRng::seed_from_u64(seed))
}

fn settle(game: &mut Game<StdRng>, reaction: Reaction) {
    let mut pending = reaction.scheduled;
    while !pending.is_empty() {
        pending = pending
            .into_iter()
            .flat_map(|scheduled| game.resolve(scheduled).scheduled)
            .collect();
    }
}

fn submit(game: &mut Game<StdRng>, correct: bool) {
    let expected = game.current_problem().unwrap().answer();
    let value = if correct { expected } else { expected + 1 };
    game.handle(Event::SetAnswerText(value.to_string()));
    let reaction = game.handle(Event::SubmitAnswer);
    settle(game, reaction);
}

prop_compose! {
    fn arbitrary_level()(index in 0..8usize) -> usize {
        index
    }
}

prop_compose! {
    fn arbitrary_test()(count in prop::sample::select(vec![5usize, 10, 20])) -> TestConfig {
        TestConfig { count, level: 0 }
    }
}

proptest! {
    #[test]
    fn generated_problems_fit_their_level(seed in any::<u64>(), index in arbitrary_level()) {
        let level = &standard_levels()[index];
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..200 {
            let problem = generate(level, &mut rng);

            prop_assert!(level.allows(problem.operator()));
            prop_assert_eq!(
                problem.answer(),
                problem.operator().apply(problem.operand_a(), problem.operand_b())
            );
            match problem.operator() {
                Operator::Add => {
                    prop_assert!((1..=level.max_operand()).contains(&problem.operand_a()));
                    if level.is_easy() {
                        prop_assert!(problem.operand_b() >= 1);
                    }
                }
                Operator::Subtract => {
                    prop_assert!(problem.operand_a() <= level.max_operand());
                    prop_assert!(problem.operand_b() >= 1);
                    prop_assert!(problem.operand_a() >= problem.operand_b());
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed(seed in any::<u64>(), index in arbitrary_level()) {
        let level = &standard_levels()[index];
        let first = generate(level, &mut StdRng::seed_from_u64(seed));
        let second = generate(level, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn practice_progression_follows_answers(
        seed in any::<u64>(),
        pattern in prop::collection::vec(any::<bool>(), 1..60),
    ) {
        let mut game = game(seed);
        game.handle(Event::Navigate(Screen::LevelSelect));
        game.handle(Event::SelectLevel(0));

        let mut unlocked = game.unlocked_level();
        let mut corrects = 0u32;
        let mut streak = 0u32;
        let mut xp = 0u32;

        for correct in pattern {
            submit(&mut game, correct);

            if correct {
                xp += xp_for(streak);
                streak += 1;
                corrects += 1;
            } else {
                streak = 0;
            }

            let practice = game.practice();
            prop_assert!(game.unlocked_level() >= unlocked);
            unlocked = game.unlocked_level();

            prop_assert_eq!(practice.streak(), streak);
            prop_assert_eq!(practice.score(), corrects);
            prop_assert_eq!(practice.xp(), xp);
            prop_assert_eq!(practice.current_level(), ((corrects / 5) as usize).min(7));
            prop_assert_eq!(game.unlocked_level(), practice.current_level());
            prop_assert!(game.feedback().is_none());
        }
    }

    #[test]
    fn test_logs_one_answer_per_problem(
        seed in any::<u64>(),
        config in arbitrary_test(),
        pattern in prop::collection::vec(any::<bool>(), 20),
    ) {
        let mut game = game(seed);
        game.handle(Event::Navigate(Screen::TestSetup));
        game.handle(Event::ConfigureTest(config));
        game.handle(Event::StartTest);

        for &correct in pattern.iter().take(config.count) {
            prop_assert_eq!(game.screen(), Screen::Test);
            submit(&mut game, correct);
        }

        prop_assert_eq!(game.screen(), Screen::Results);
        let answers = game.test_session().unwrap().answers();
        prop_assert_eq!(answers.len(), config.count);

        let expected_correct = pattern.iter().take(config.count).filter(|c| **c).count();
        let results = game.results().unwrap();
        prop_assert_eq!(results.correct_count, expected_correct);
        prop_assert_eq!(results.total, config.count);
        prop_assert!(results.percentage <= 100);
        prop_assert_eq!(results.grade == Grade::Perfect, expected_correct == config.count);
    }

    #[test]
    fn unroutable_navigation_never_changes_screen(
        seed in any::<u64>(),
        target in prop::sample::select(vec![Screen::Game, Screen::Test, Screen::Results]),
    ) {
        let mut game = game(seed);
        let epoch = game.epoch();

        let reaction = game.handle(Event::Navigate(target));

        prop_assert!(!reaction.is_visible());
        prop_assert_eq!(game.screen(), Screen::Title);
        prop_assert_eq!(game.epoch(), epoch);
    }
}

//! Terminal front end for MathCraft.
//!
//! Reads one command per line from stdin, feeds the resulting events to the
//! game and waits out scheduled effects with tokio timers.

use mathcraft::core::Screen;
use mathcraft::effects::{present, PresentError, Presenter, SoundCue};
use mathcraft::machine::{Event, Feedback, Game, Reaction, Scheduled, View};
use mathcraft::session::TestConfig;
use mathcraft::GameConfig;
use std::io::{self, Write};
use stillwater::effect::Effect;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};
use tracing::debug;

#[derive(Debug, Error)]
enum ShellError {
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),

    #[error(transparent)]
    Present(#[from] PresentError),
}

/// Draws views as plain text on stdout.
#[derive(Clone, Copy, Debug)]
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render(&self, view: &View) -> Result<(), PresentError> {
        match view.snapshot() {
            Ok(json) => debug!(%json, "render"),
            Err(error) => debug!(%error, "view snapshot failed"),
        }

        let mut out = io::stdout().lock();
        write_view(&mut out, view)
            .and_then(|_| out.flush())
            .map_err(|error| PresentError::Render(error.to_string()))
    }

    fn play(&self, cue: SoundCue) -> Result<(), PresentError> {
        // The bell is the only sound a terminal has.
        if matches!(cue, SoundCue::LevelUp | SoundCue::WrongAnswer) {
            let mut out = io::stdout().lock();
            out.write_all(b"\x07")
                .and_then(|_| out.flush())
                .map_err(|error| PresentError::Audio(error.to_string()))?;
        }
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ShellError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let presenter = TerminalPresenter;
    let mut game = Game::new(GameConfig::default());
    let mut pending: Vec<(Instant, Scheduled)> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    present::<TerminalPresenter>(Vec::new(), Some(game.view()))
        .run(&presenter)
        .await?;

    loop {
        let next_due = pending.iter().map(|(at, _)| *at).min();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if matches!(line, "q" | "quit") {
                    break;
                }
                for event in commands(&game.view(), line) {
                    let reaction = game.handle(event);
                    apply(&game, reaction, &mut pending, &presenter).await?;
                }
            }
            _ = sleep_until(next_due.unwrap_or_else(Instant::now)), if next_due.is_some() => {
                let now = Instant::now();
                let (mut due, rest): (Vec<_>, Vec<_>) =
                    pending.into_iter().partition(|(at, _)| *at <= now);
                pending = rest;
                due.sort_by_key(|(at, _)| *at);
                for (_, scheduled) in due {
                    let reaction = game.resolve(scheduled);
                    apply(&game, reaction, &mut pending, &presenter).await?;
                }
            }
        }
    }

    Ok(())
}

/// Queue a reaction's scheduled effects and present it.
async fn apply(
    game: &Game,
    reaction: Reaction,
    pending: &mut Vec<(Instant, Scheduled)>,
    presenter: &TerminalPresenter,
) -> Result<(), ShellError> {
    let now = Instant::now();
    pending.extend(
        reaction
            .scheduled
            .iter()
            .map(|scheduled| (now + scheduled.delay, *scheduled)),
    );

    if reaction.is_visible() {
        let view = reaction.changed.then(|| game.view());
        present::<TerminalPresenter>(reaction.cues, view)
            .run(presenter)
            .await?;
    }
    Ok(())
}

/// Translate one input line into events for the current screen.
fn commands(view: &View, line: &str) -> Vec<Event> {
    if line == "tap" {
        return vec![Event::TapDecoration];
    }

    let mut words = line.split_whitespace();
    let (Some(first), rest) = (words.next(), words.next()) else {
        return Vec::new();
    };
    let number = |word: &str| word.parse::<usize>().ok();

    match (view.screen, first, rest) {
        (Screen::Title, "1" | "p", None) => vec![Event::Navigate(Screen::LevelSelect)],
        (Screen::Title, "2" | "t", None) => vec![Event::Navigate(Screen::TestSetup)],

        (Screen::LevelSelect | Screen::Game | Screen::TestSetup | Screen::Results, "b", None) => {
            vec![Event::Navigate(Screen::Title)]
        }

        (Screen::LevelSelect, choice, None) => number(choice)
            .and_then(|n| n.checked_sub(1))
            .map(|level| vec![Event::SelectLevel(level)])
            .unwrap_or_default(),

        (Screen::Game | Screen::Test, "c", None) => vec![Event::ClearAnswer],
        (Screen::Game | Screen::Test, digits, None) => {
            vec![Event::SetAnswerText(digits.to_string()), Event::SubmitAnswer]
        }

        (Screen::TestSetup, "n", Some(count)) => number(count)
            .map(|count| {
                vec![Event::ConfigureTest(TestConfig {
                    count,
                    ..view.test_config
                })]
            })
            .unwrap_or_default(),
        (Screen::TestSetup, "l", Some(level)) => number(level)
            .and_then(|n| n.checked_sub(1))
            .map(|level| {
                vec![Event::ConfigureTest(TestConfig {
                    level,
                    ..view.test_config
                })]
            })
            .unwrap_or_default(),
        (Screen::TestSetup, "s", None) => vec![Event::StartTest],

        (Screen::Results, "r", None) => vec![Event::RestartTest],

        _ => Vec::new(),
    }
}

fn write_view(out: &mut impl Write, view: &View) -> io::Result<()> {
    writeln!(out)?;
    match view.screen {
        Screen::Title => write_title(out, view),
        Screen::LevelSelect => write_level_select(out, view),
        Screen::Game => write_game(out, view),
        Screen::TestSetup => write_test_setup(out, view),
        Screen::Test => write_test(out, view),
        Screen::Results => write_results(out, view),
    }
}

fn write_title(out: &mut impl Write, view: &View) -> io::Result<()> {
    writeln!(out, "=== MathCraft ===")?;
    if let Some(level) = view.best_level() {
        writeln!(out, "Best level: {} {}", level.icon(), level.name())?;
    }
    writeln!(
        out,
        "XP {}  Best streak {}",
        view.practice.xp(),
        view.practice.best_streak()
    )?;
    if view.decoration_taps > 0 {
        writeln!(out, "Creeper pokes: {}", view.decoration_taps)?;
    }
    writeln!(out, "1) Practice  2) Test  q) Quit")
}

fn write_level_select(out: &mut impl Write, view: &View) -> io::Result<()> {
    writeln!(out, "Choose a level")?;
    for (index, level) in view.levels.iter().enumerate() {
        let lock = if view.is_locked(index) { "🔒" } else { "  " };
        writeln!(
            out,
            "{lock} {}) {} {} - {}",
            index + 1,
            level.icon(),
            level.name(),
            level.description()
        )?;
    }
    writeln!(out, "b) Back")
}

fn write_game(out: &mut impl Write, view: &View) -> io::Result<()> {
    let practice = &view.practice;
    if let Some(level) = view.levels.get(practice.current_level()) {
        writeln!(out, "{} {}", level.icon(), level.name())?;
    }
    let threshold = view.level_up_threshold as usize;
    let filled = (practice.level_progress() as usize).min(threshold);
    writeln!(
        out,
        "Score {}  Streak {}  XP {}  [{}{}]",
        practice.score(),
        practice.streak(),
        practice.xp(),
        "#".repeat(filled),
        "-".repeat(threshold - filled)
    )?;

    if let Some(level) = view.level_up_banner.and_then(|l| view.levels.get(l)) {
        writeln!(out, "*** LEVEL UP! {} {} ***", level.icon(), level.name())?;
        return Ok(());
    }
    write_problem(out, view)?;
    writeln!(out, "digits) answer  c) clear  b) back")
}

fn write_test_setup(out: &mut impl Write, view: &View) -> io::Result<()> {
    let counts: Vec<String> = view.test_counts.iter().map(|c| c.to_string()).collect();
    writeln!(out, "Test setup")?;
    writeln!(
        out,
        "Questions: {} (choose from {})",
        view.test_config.count,
        counts.join(", ")
    )?;
    if let Some(level) = view.levels.get(view.test_config.level) {
        writeln!(
            out,
            "Level: {}) {} {} (up to {})",
            view.test_config.level + 1,
            level.icon(),
            level.name(),
            view.unlocked_level + 1
        )?;
    }
    writeln!(out, "n <count>) questions  l <level>) level  s) start  b) back")
}

fn write_test(out: &mut impl Write, view: &View) -> io::Result<()> {
    if let Some(progress) = view.test_progress {
        writeln!(out, "Question {}/{}", progress.index + 1, progress.total)?;
    }
    write_problem(out, view)
}

fn write_results(out: &mut impl Write, view: &View) -> io::Result<()> {
    let Some(results) = &view.results else {
        return Ok(());
    };
    let (minutes, seconds) = results.minutes_seconds();

    writeln!(out, "{} {}", results.grade.icon(), results.grade.label())?;
    writeln!(
        out,
        "{}/{} correct ({}%) in {}:{:02}",
        results.correct_count, results.total, results.percentage, minutes, seconds
    )?;
    writeln!(out, "{}", "🟩".repeat(results.grade.celebration_count()))?;
    for (index, record) in view.test_answers.iter().enumerate() {
        let mark = if record.correct { "✔" } else { "✘" };
        writeln!(
            out,
            "{:>2}. {} {} {}",
            index + 1,
            record.problem.to_string().replace('?', &record.problem.answer().to_string()),
            mark,
            if record.correct {
                String::new()
            } else {
                format!("(you said {})", record.user_answer)
            }
        )?;
    }
    writeln!(out, "r) retry  b) back")
}

fn write_problem(out: &mut impl Write, view: &View) -> io::Result<()> {
    if let Some(problem) = &view.problem {
        writeln!(out, "{problem}")?;
    }
    match view.feedback {
        Some(Feedback::Correct { xp_gained }) if view.screen == Screen::Game => {
            writeln!(out, "Correct! +{xp_gained} XP")?
        }
        Some(Feedback::Correct { .. }) => writeln!(out, "Correct!")?,
        Some(Feedback::Incorrect { expected }) => {
            writeln!(out, "Not quite, it was {expected}")?
        }
        None if !view.answer_text.is_empty() => writeln!(out, "> {}", view.answer_text)?,
        None => {}
    }
    Ok(())
}

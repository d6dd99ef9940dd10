//! MathCraft: arithmetic practice for young learners
//!
//! MathCraft follows a "pure core, imperative shell" layout. The game is a
//! pure reducer over learner events; timers, rendering and sound live in the
//! shell and are driven through Stillwater effects.
//!
//! # Modules
//!
//! - **arithmetic**: Level table and the random problem generator
//! - **session**: Practice progression, test batches and grading
//! - **config**: Validated game configuration
//! - **core**: Screens, routes and guards
//! - **machine**: The game reducer and its render snapshot
//! - **effects**: Presenter environment and sound cues
//!
//! # Example
//!
//! ```rust
//! use mathcraft::{Event, Game, GameConfig, Screen};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut game = Game::with_rng(GameConfig::default(), StdRng::seed_from_u64(42));
//! game.handle(Event::Navigate(Screen::LevelSelect));
//! game.handle(Event::SelectLevel(0));
//!
//! let problem = *game.current_problem().unwrap();
//! game.handle(Event::SetAnswerText(problem.answer().to_string()));
//! let reaction = game.handle(Event::SubmitAnswer);
//!
//! // The next problem arrives once the shell resolves the scheduled effect.
//! for scheduled in reaction.scheduled {
//!     game.resolve(scheduled);
//! }
//! assert_eq!(game.practice().streak(), 1);
//! ```

pub mod arithmetic;
pub mod config;
pub mod core;
pub mod effects;
pub mod machine;
pub mod session;

// Re-export commonly used types
pub use arithmetic::{generate, LevelConfig, Operator, Problem};
pub use config::{GameConfig, GameConfigBuilder};
pub use self::core::Screen;
pub use effects::{present, PresentError, Presenter, SoundCue};
pub use machine::{Event, Game, Reaction, View};

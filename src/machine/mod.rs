//! The game machine.
//!
//! [`Game`] is a reducer: it takes one [`Event`] (or one due [`Scheduled`]
//! effect) at a time and returns a [`Reaction`]. It never sleeps, spawns or
//! plays anything itself. Timers belong to the shell, which hands each
//! scheduled effect back through [`Game::resolve`] once its delay is up.
//!
//! Every screen entry starts a new *epoch*. A scheduled effect carries the
//! epoch it was issued in and is dropped if the learner has moved on.

mod event;
mod game;
mod view;

pub use event::{Deferred, Event, Feedback, Reaction, Scheduled};
pub use game::Game;
pub use view::{TestProgress, View};

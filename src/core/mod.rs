//! Core navigation types.
//!
//! This module contains the pure building blocks the game machine is made of:
//! - Screen definitions
//! - Guard predicates for gating learner actions
//! - The route table of allowed menu transitions

mod guard;
mod route;
mod screen;

pub use guard::Guard;
pub use route::{Route, ROUTES};
pub use screen::Screen;

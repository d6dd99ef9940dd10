//! Presentation effects around the pure game machine.
//!
//! The machine only reports what changed, which [`SoundCue`]s to play and
//! what to resolve later. Everything that touches a screen or a speaker goes
//! through a [`Presenter`] environment, run as a Stillwater effect:
//!
//! - Functions return `impl Effect` for zero-cost composition
//! - The presenter is the effect environment, so front ends and tests swap it freely

mod present;

pub use present::{present, PresentError, Presenter, SoundCue};

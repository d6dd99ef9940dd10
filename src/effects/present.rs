//! Rendering and sound as effects over a [`Presenter`] environment.

use crate::machine::View;
use serde::{Deserialize, Serialize};
use stillwater::effect::Effect;
use stillwater::prelude::*;
use thiserror::Error;
use tracing::debug;

/// Audible feedback requested by the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    CorrectAnswer,
    WrongAnswer,
    LevelUp,
    /// Tap on a decorative sprite
    DecorativeTap,
    ButtonClick,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CorrectAnswer => "correct",
            Self::WrongAnswer => "wrong",
            Self::LevelUp => "level-up",
            Self::DecorativeTap => "tap",
            Self::ButtonClick => "click",
        }
    }
}

/// Errors raised by a presenter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresentError {
    #[error("render failed: {0}")]
    Render(String),

    #[error("audio unavailable: {0}")]
    Audio(String),
}

/// Output side of a front end.
pub trait Presenter {
    /// Draw the given snapshot.
    fn render(&self, view: &View) -> Result<(), PresentError>;

    /// Play one sound cue.
    fn play(&self, cue: SoundCue) -> Result<(), PresentError>;
}

/// Play `cues` in order, then render `view` when there is one.
///
/// Sound is best effort: a failing cue is logged and skipped so the game
/// keeps going without audio. A render failure fails the effect.
pub fn present<Env>(
    cues: Vec<SoundCue>,
    view: Option<View>,
) -> impl Effect<Output = (), Error = PresentError, Env = Env>
where
    Env: Presenter + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        for cue in &cues {
            if let Err(error) = env.play(*cue) {
                debug!(cue = cue.name(), %error, "sound cue skipped");
            }
        }
        match &view {
            Some(view) => env.render(view),
            None => Ok(()),
        }
    })
}

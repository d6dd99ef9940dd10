//! Session state for both game modes.
//!
//! - Practice: score, streak, XP and level progress
//! - Test: a pre-generated batch of problems and its answer log
//! - Results: scoring and grade bands for a finished test

mod practice;
mod quiz;
mod results;

pub use practice::{xp_for, Grading, PracticeSession, BASE_XP, STREAK_XP};
pub use quiz::{validate_setup, AnswerRecord, SetupViolation, TestConfig, TestSession};
pub use results::{Grade, TestResults};

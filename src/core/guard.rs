//! Guard predicates for gating learner actions.
//!
//! Guards are pure boolean functions. The machine evaluates them before it
//! lets an event change anything: picking a level, typing into the answer
//! box, choosing a test level.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over some subject `T`.
///
/// # Example
///
/// ```rust
/// use mathcraft::core::Guard;
///
/// let unlocked = Guard::at_most(2);
///
/// assert!(unlocked.check(&0));
/// assert!(unlocked.check(&2));
/// assert!(!unlocked.check(&5));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard lets this subject through.
    pub fn check(&self, subject: &T) -> bool {
        (self.predicate)(subject)
    }
}

impl Guard<usize> {
    /// Guard for level indices up to and including `highest`.
    pub fn at_most(highest: usize) -> Self {
        Guard::new(move |level: &usize| *level <= highest)
    }
}

impl Guard<str> {
    /// Guard for answer-box text: empty, or at most `max_len` ASCII digits.
    ///
    /// ```rust
    /// use mathcraft::core::Guard;
    ///
    /// let input = Guard::digits(3);
    /// assert!(input.check(""));
    /// assert!(input.check("12"));
    /// assert!(!input.check("1234"));
    /// assert!(!input.check("-4"));
    /// ```
    pub fn digits(max_len: usize) -> Self {
        Guard::new(move |text: &str| {
            text.len() <= max_len && text.bytes().all(|b| b.is_ascii_digit())
        })
    }
}

impl<T: ?Sized> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

//! Test scoring and grade bands.

use crate::session::quiz::AnswerRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Grade band for a finished test, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Perfect,
    Great,
    Good,
    KeepTrying,
}

impl Grade {
    /// 100 → Perfect, ≥ 80 → Great, ≥ 60 → Good, anything else → KeepTrying.
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 100 => Self::Perfect,
            p if p >= 80 => Self::Great,
            p if p >= 60 => Self::Good,
            _ => Self::KeepTrying,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect!",
            Self::Great => "Amazing!",
            Self::Good => "Well done!",
            Self::KeepTrying => "Almost there!",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Perfect => "🐉",
            Self::Great => "⚔️",
            Self::Good => "⛏️",
            Self::KeepTrying => "🪨",
        }
    }

    /// How many creepers dance on the results screen.
    pub fn celebration_count(&self) -> usize {
        match self {
            Self::Perfect => 8,
            Self::Great => 6,
            Self::Good => 4,
            Self::KeepTrying => 2,
        }
    }
}

/// Summary of a completed test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResults {
    pub correct_count: usize,
    pub total: usize,
    pub percentage: u32,
    pub elapsed: Duration,
    pub grade: Grade,
}

impl TestResults {
    /// Score an answer log. Nothing here depends on anything but the log and
    /// the two timestamps.
    ///
    /// ```rust
    /// use mathcraft::session::{Grade, TestResults};
    /// use chrono::Utc;
    ///
    /// let now = Utc::now();
    /// let results = TestResults::from_answers(&[], now, now);
    /// assert_eq!(results.percentage, 0);
    /// assert_eq!(results.grade, Grade::KeepTrying);
    /// ```
    pub fn from_answers(
        answers: &[AnswerRecord],
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let correct_count = answers.iter().filter(|a| a.correct).count();
        let total = answers.len();
        let percentage = percentage(correct_count, total);
        let elapsed = finished_at
            .signed_duration_since(started_at)
            .to_std()
            .unwrap_or(Duration::ZERO);

        Self {
            correct_count,
            total,
            percentage,
            elapsed,
            grade: Grade::from_percentage(percentage),
        }
    }

    /// Elapsed time as whole minutes and leftover seconds.
    pub fn minutes_seconds(&self) -> (u64, u64) {
        let secs = (self.elapsed.as_millis() as u64 + 500) / 1000;
        (secs / 60, secs % 60)
    }
}

/// `round(100 * correct / total)`, halves rounded up. Zero for an empty log.
fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::{Operator, Problem};

    fn log(pattern: &[bool]) -> Vec<AnswerRecord> {
        pattern
            .iter()
            .map(|&correct| AnswerRecord {
                problem: Problem::new(2, 1, Operator::Add),
                user_answer: if correct { 3 } else { 4 },
                correct,
            })
            .collect()
    }

    #[test]
    fn eight_of_ten_is_great_not_perfect() {
        let mut pattern = vec![true; 8];
        pattern.extend([false, false]);
        let now = Utc::now();

        let results = TestResults::from_answers(&log(&pattern), now, now);

        assert_eq!(results.correct_count, 8);
        assert_eq!(results.total, 10);
        assert_eq!(results.percentage, 80);
        assert_eq!(results.grade, Grade::Great);
    }

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_percentage(100), Grade::Perfect);
        assert_eq!(Grade::from_percentage(99), Grade::Great);
        assert_eq!(Grade::from_percentage(80), Grade::Great);
        assert_eq!(Grade::from_percentage(79), Grade::Good);
        assert_eq!(Grade::from_percentage(60), Grade::Good);
        assert_eq!(Grade::from_percentage(59), Grade::KeepTrying);
        assert_eq!(Grade::from_percentage(0), Grade::KeepTrying);
    }

    #[test]
    fn grades_are_ordered_best_first() {
        assert!(Grade::Perfect < Grade::Great);
        assert!(Grade::Great < Grade::Good);
        assert!(Grade::Good < Grade::KeepTrying);
        assert!(Grade::Perfect.celebration_count() > Grade::KeepTrying.celebration_count());
    }

    #[test]
    fn percentage_rounds_halves_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(0, 20), 0);
    }

    #[test]
    fn elapsed_comes_from_timestamps() {
        let start = Utc::now();
        let end = start + chrono::Duration::seconds(95);

        let results = TestResults::from_answers(&log(&[true]), start, end);

        assert_eq!(results.elapsed, Duration::from_secs(95));
        assert_eq!(results.minutes_seconds(), (1, 35));
    }

    #[test]
    fn clock_going_backwards_counts_as_zero() {
        let start = Utc::now();
        let end = start - chrono::Duration::seconds(5);

        let results = TestResults::from_answers(&log(&[true]), start, end);
        assert_eq!(results.elapsed, Duration::ZERO);
    }
}

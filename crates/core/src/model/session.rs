use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("session had no questions")]
    Empty,

    #[error("correct count ({correct}) exceeds total questions ({total})")]
    CountMismatch { correct: u32, total: u32 },
}

/// Qualitative bucket derived from the final percentage.
///
/// Thresholds are evaluated highest-first and do not overlap. How a tier is
/// worded (titles, messages) is a presentation concern, not modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreTier {
    Basic,
    Good,
    Great,
    Perfect,
}

impl ScoreTier {
    /// Maps a rounded percentage in `[0, 100]` to its tier.
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage == 100 {
            Self::Perfect
        } else if percentage >= 80 {
            Self::Great
        } else if percentage >= 50 {
            Self::Good
        } else {
            Self::Basic
        }
    }
}

/// Aggregate result of a completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    correct: u32,
    total: u32,
    percentage: u32,
    tier: ScoreTier,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Build a summary from final session counts.
    ///
    /// The percentage is `round(100 * correct / total)`; it is only defined
    /// for a non-empty session.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::Empty` if `total` is zero.
    /// Returns `SessionSummaryError::CountMismatch` if `correct` exceeds `total`.
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`.
    pub fn from_counts(
        correct: u32,
        total: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if total == 0 {
            return Err(SessionSummaryError::Empty);
        }
        if correct > total {
            return Err(SessionSummaryError::CountMismatch { correct, total });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percentage = (f64::from(correct) * 100.0 / f64::from(total)).round() as u32;

        Ok(Self {
            correct,
            total,
            percentage,
            tier: ScoreTier::from_percentage(percentage),
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        self.tier
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn summary(correct: u32, total: u32) -> SessionSummary {
        let now = fixed_now();
        SessionSummary::from_counts(correct, total, now, now).unwrap()
    }

    #[test]
    fn percentage_and_tier_for_known_counts() {
        assert_eq!(summary(4, 5).percentage(), 80);
        assert_eq!(summary(4, 5).tier(), ScoreTier::Great);

        assert_eq!(summary(5, 5).percentage(), 100);
        assert_eq!(summary(5, 5).tier(), ScoreTier::Perfect);

        assert_eq!(summary(2, 5).percentage(), 40);
        assert_eq!(summary(2, 5).tier(), ScoreTier::Basic);

        assert_eq!(summary(3, 5).percentage(), 60);
        assert_eq!(summary(3, 5).tier(), ScoreTier::Good);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        // 2/3 = 66.67 -> 67, 1/3 = 33.33 -> 33
        assert_eq!(summary(2, 3).percentage(), 67);
        assert_eq!(summary(1, 3).percentage(), 33);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(ScoreTier::from_percentage(100), ScoreTier::Perfect);
        assert_eq!(ScoreTier::from_percentage(99), ScoreTier::Great);
        assert_eq!(ScoreTier::from_percentage(80), ScoreTier::Great);
        assert_eq!(ScoreTier::from_percentage(79), ScoreTier::Good);
        assert_eq!(ScoreTier::from_percentage(50), ScoreTier::Good);
        assert_eq!(ScoreTier::from_percentage(49), ScoreTier::Basic);
        assert_eq!(ScoreTier::from_percentage(0), ScoreTier::Basic);
    }

    #[test]
    fn empty_session_has_no_summary() {
        let now = fixed_now();
        let err = SessionSummary::from_counts(0, 0, now, now).unwrap_err();
        assert!(matches!(err, SessionSummaryError::Empty));
    }

    #[test]
    fn correct_count_cannot_exceed_total() {
        let now = fixed_now();
        let err = SessionSummary::from_counts(6, 5, now, now).unwrap_err();
        assert!(matches!(
            err,
            SessionSummaryError::CountMismatch {
                correct: 6,
                total: 5
            }
        ));
    }

    #[test]
    fn completion_cannot_precede_start() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::seconds(1);
        let err = SessionSummary::from_counts(1, 1, now, earlier).unwrap_err();
        assert!(matches!(err, SessionSummaryError::InvalidTimeRange));
    }
}

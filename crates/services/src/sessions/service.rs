use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

use quiz_core::model::{QuestionRecord, SessionSummary};

use super::plan::SessionPlan;
use super::progress::SessionProgress;
use super::view::QuestionPrompt;
use crate::error::SessionError;

//
// ─── ANSWER TYPES ──────────────────────────────────────────────────────────────
//

/// Feedback for one submitted answer.
///
/// Carries everything the presentation layer needs to render the result
/// without re-querying the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation: String,
}

/// One entry in the session's answer log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAnswer {
    /// Index into the full question collection.
    pub question_index: usize,
    pub chosen: String,
    pub is_correct: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session over a loaded question collection.
///
/// Owns all mutable session state: the sampled question order, the current
/// position, and the running score. Starting a new session means constructing
/// a new value; there is no carryover and no persistence.
///
/// The lifecycle is linear: `start` → answer each question exactly once →
/// `build_summary`. Out-of-sequence calls fail with `SessionError` rather
/// than being tolerated.
pub struct SessionService {
    questions: Vec<QuestionRecord>,
    order: Vec<usize>,
    position: usize,
    correct: u32,
    answers: Vec<SessionAnswer>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionService {
    /// Start a session over `questions`, asking at most `requested` of them.
    ///
    /// Selection is a uniform without-replacement sample of
    /// `min(requested, questions.len())` indices drawn from `rng`; every
    /// selected index is distinct and valid. `started_at` should come from
    /// the caller's clock to keep time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty or `requested`
    /// is zero — a session with nothing to ask could never be summarized.
    pub fn start<R: Rng + ?Sized>(
        questions: Vec<QuestionRecord>,
        requested: usize,
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let plan = SessionPlan::draw(questions.len(), requested, rng);
        if plan.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            order: plan.into_order(),
            position: 0,
            correct: 0,
            answers: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.order.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of remaining questions that have not been answered yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len().saturating_sub(self.position)
    }

    /// Running number of correct answers.
    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn answers(&self) -> &[SessionAnswer] {
        &self.answers
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// The record at the current position, or `None` once the session is
    /// exhausted. `None` is the terminal signal: the caller should move on to
    /// summary rendering, not request further questions.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.order
            .get(self.position)
            .map(|&index| &self.questions[index])
    }

    /// Presentation view of the current question, with its options freshly
    /// shuffled from `rng`. Each call re-randomizes the ordering so it never
    /// correlates with storage order.
    #[must_use]
    pub fn current_prompt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<QuestionPrompt> {
        let record = self.current_question()?;
        let mut options = record.options.clone();
        options.shuffle(rng);

        Some(QuestionPrompt {
            number: self.position + 1,
            total: self.total_questions(),
            prompt: record.prompt.clone(),
            options,
        })
    }

    /// Score `chosen` against the current question and advance the session.
    ///
    /// Correctness is exact string equality with the record's answer. The
    /// position advances by exactly one whether or not the answer was
    /// correct; answering the last question sets `completed_at` to
    /// `answered_at`. Each logical question can be answered once — replays
    /// are rejected, not tolerated.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn answer_current(
        &mut self,
        chosen: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        let Some(&question_index) = self.order.get(self.position) else {
            return Err(SessionError::Completed);
        };
        let record = &self.questions[question_index];

        let is_correct = record.is_correct(chosen);
        let outcome = AnswerOutcome {
            is_correct,
            correct_answer: record.answer.clone(),
            explanation: record.explanation.clone(),
        };

        if is_correct {
            self.correct += 1;
        }
        self.answers.push(SessionAnswer {
            question_index,
            chosen: chosen.to_string(),
            is_correct,
        });

        self.position += 1;
        if self.position >= self.order.len() {
            self.completed_at = Some(answered_at);
        }

        Ok(outcome)
    }

    /// Compute the final summary for a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` while questions remain unanswered.
    pub fn build_summary(&self) -> Result<SessionSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::Incomplete)?;
        let total = u32::try_from(self.order.len()).unwrap_or(u32::MAX);

        Ok(SessionSummary::from_counts(
            self.correct,
            total,
            self.started_at,
            completed_at,
        )?)
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("questions_len", &self.questions.len())
            .field("order", &self.order)
            .field("position", &self.position)
            .field("correct", &self.correct)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

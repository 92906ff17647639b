use rand::rngs::StdRng;
use std::fmt;

use vocab_core::model::{AnswerResult, DayLabel, FinalScore, QuizSettings, WordEntry};

use super::choices::build_choices;
use super::plan::QuizPlanner;
use super::progress::QuizProgress;
use crate::error::SessionError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a fixed sequence of questions for a chosen day.
///
/// The question list is drawn once at start and never changes. Each question
/// must be answered exactly once before the session can advance; calls made
/// out of that order fail with `SessionError::InvalidState`.
pub struct QuizSession {
    day: DayLabel,
    day_words: Vec<WordEntry>,
    questions: Vec<WordEntry>,
    settings: QuizSettings,
    current: usize,
    score: u32,
    answer: Option<AnswerResult>,
    state: SessionState,
    rng: StdRng,
}

impl QuizSession {
    /// Start a session over `words`, the full list for `day`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InsufficientWords` if the day has fewer than
    /// `min_words_per_day` entries.
    pub fn start(
        day: DayLabel,
        words: &[WordEntry],
        settings: QuizSettings,
        mut rng: StdRng,
    ) -> Result<Self, SessionError> {
        let required = settings.min_words_per_day();
        if words.len() < required {
            return Err(SessionError::InsufficientWords {
                day,
                available: words.len(),
                required,
            });
        }

        let plan = QuizPlanner::new(&settings).build(words, &mut rng);
        if plan.is_short() {
            tracing::warn!(
                day = %day,
                questions = plan.total(),
                available = plan.available,
                shortfall = plan.shortfall(),
                "day has fewer words than a full game; running a shorter session"
            );
        }
        tracing::info!(day = %day, questions = plan.total(), "quiz session started");

        Ok(Self {
            day,
            day_words: words.to_vec(),
            questions: plan.questions,
            settings,
            current: 0,
            score: 0,
            answer: None,
            state: SessionState::InProgress,
            rng,
        })
    }

    #[must_use]
    pub fn day(&self) -> &DayLabel {
        &self.day
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Zero-based index of the question on screen.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Result of the current question, once it has been answered.
    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerResult> {
        self.answer.as_ref()
    }

    #[must_use]
    pub fn is_current_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let answered = self.current + usize::from(self.answer.is_some());
        QuizProgress {
            total: self.questions.len(),
            current: self.current,
            answered,
            remaining: self.questions.len().saturating_sub(answered),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// The entry being asked about.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` once the session is complete.
    pub fn current_question(&self) -> Result<&WordEntry, SessionError> {
        self.ensure_in_progress("read the current question")?;
        self.questions
            .get(self.current)
            .ok_or_else(|| invalid("read the current question", "no question at this index"))
    }

    /// Build a shuffled choice set for the current question.
    ///
    /// Every call draws fresh distractors; callers that render the set should
    /// keep it for the lifetime of the question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` once the session is complete.
    pub fn choices_for_current(&mut self) -> Result<Vec<WordEntry>, SessionError> {
        let correct = self.current_question()?.clone();
        Ok(build_choices(
            &correct,
            &self.day_words,
            self.settings.max_choices(),
            &mut self.rng,
        ))
    }

    /// Grade `chosen` against the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` if the session is complete or the
    /// question was already answered.
    pub fn submit_answer(&mut self, chosen: &WordEntry) -> Result<AnswerResult, SessionError> {
        const OP: &str = "submit an answer";
        self.ensure_in_progress(OP)?;
        if self.answer.is_some() {
            return Err(invalid(OP, "the current question was already answered"));
        }
        let correct = self
            .questions
            .get(self.current)
            .ok_or_else(|| invalid(OP, "no question at this index"))?;

        let result = if chosen.same_word(correct) {
            self.score = self.score.saturating_add(1);
            AnswerResult::Correct
        } else {
            AnswerResult::Incorrect {
                correct_entry: correct.clone(),
            }
        };
        tracing::debug!(
            day = %self.day,
            question = self.current,
            chosen = chosen.word(),
            correct = result.is_correct(),
            "answer submitted"
        );

        self.answer = Some(result.clone());
        Ok(result)
    }

    /// Move to the next question, completing the session after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` if the session is complete or the
    /// current question has not been answered yet.
    pub fn advance(&mut self) -> Result<SessionState, SessionError> {
        const OP: &str = "advance";
        self.ensure_in_progress(OP)?;
        if self.answer.is_none() {
            return Err(invalid(OP, "the current question has not been answered"));
        }

        self.answer = None;
        self.current += 1;
        if self.current >= self.questions.len() {
            self.state = SessionState::Completed;
            tracing::info!(
                day = %self.day,
                score = self.score,
                total = self.questions.len(),
                "quiz session completed"
            );
        }
        Ok(self.state)
    }

    /// The final tally.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` until the session is complete.
    pub fn final_score(&self) -> Result<FinalScore, SessionError> {
        if !self.is_complete() {
            return Err(invalid("read the final score", "the session is not complete"));
        }
        Ok(FinalScore {
            score: self.score,
            total: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
        })
    }

    /// Discard the session.
    #[must_use]
    pub fn reset(self) -> SessionState {
        tracing::debug!(day = %self.day, "quiz session discarded");
        SessionState::NotStarted
    }

    fn ensure_in_progress(&self, operation: &'static str) -> Result<(), SessionError> {
        if self.state == SessionState::InProgress {
            Ok(())
        } else {
            Err(invalid(operation, "the session is not in progress"))
        }
    }
}

fn invalid(operation: &'static str, reason: &'static str) -> SessionError {
    tracing::error!(operation, reason, "quiz session used out of order");
    SessionError::InvalidState { operation, reason }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("day", &self.day)
            .field("day_words_len", &self.day_words.len())
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answered", &self.answer.is_some())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

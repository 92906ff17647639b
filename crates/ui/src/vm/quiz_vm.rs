use std::sync::Arc;

use services::{QuizLoopService, QuizSession, SessionState};
use vocab_core::model::{AnswerResult, WordBank, WordEntry};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Choose(usize),
    Next,
    PlayAgain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Question,
    Answered,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceMark {
    Plain,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub word: String,
    pub mark: ChoiceMark,
    pub disabled: bool,
}

impl ChoiceVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.mark {
            ChoiceMark::Plain => "choice-button",
            ChoiceMark::Correct => "choice-button correct",
            ChoiceMark::Wrong => "choice-button wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameScreenVm {
    pub day_title: String,
    pub definition: String,
    pub choices: Vec<ChoiceVm>,
    pub feedback: Option<FeedbackVm>,
    pub score_line: String,
    pub progress_line: String,
    pub can_advance: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndScreenVm {
    pub day_title: String,
    pub final_line: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Game(GameScreenVm),
    End(EndScreenVm),
}

/// Drives one quiz session on behalf of the views.
///
/// The choice set of a question is drawn once and kept until the session
/// advances, so re-renders never reshuffle the buttons.
pub struct QuizVm {
    quiz_loop: Arc<QuizLoopService>,
    bank: Arc<WordBank>,
    day_index: usize,
    session: QuizSession,
    choices: Vec<WordEntry>,
    chosen: Option<usize>,
}

impl QuizVm {
    /// Start a session for the day at `day_index` in bank order.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::NotEnoughWords` or `ViewError::UnknownDay` when the
    /// day cannot be played, `ViewError::Unknown` otherwise.
    pub fn start(
        quiz_loop: Arc<QuizLoopService>,
        bank: Arc<WordBank>,
        day_index: usize,
    ) -> Result<Self, ViewError> {
        let mut session = quiz_loop
            .start_at(&bank, day_index)
            .map_err(|err| ViewError::from(&err))?;
        let choices = session
            .choices_for_current()
            .map_err(|err| ViewError::from(&err))?;
        Ok(Self {
            quiz_loop,
            bank,
            day_index,
            session,
            choices,
            chosen: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self.session.state() {
            SessionState::Completed => QuizPhase::Completed,
            _ if self.session.is_current_answered() => QuizPhase::Answered,
            _ => QuizPhase::Question,
        }
    }

    #[must_use]
    pub fn day_title(&self) -> &str {
        self.session.day().as_str()
    }

    #[must_use]
    pub fn definition(&self) -> Option<&str> {
        self.session
            .current_question()
            .ok()
            .map(WordEntry::english_meaning)
    }

    /// Position of the correct entry among the cached choices.
    #[must_use]
    pub fn correct_choice_index(&self) -> Option<usize> {
        let correct = self.session.current_question().ok()?;
        self.choices.iter().position(|c| c.same_word(correct))
    }

    #[must_use]
    pub fn score_line(&self) -> String {
        format!(
            "Score: {} / {}",
            self.session.score(),
            self.session.total_questions()
        )
    }

    #[must_use]
    pub fn choices(&self) -> Vec<ChoiceVm> {
        let answered = self.session.is_current_answered();
        let correct = self.correct_choice_index();
        self.choices
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mark = if !answered {
                    ChoiceMark::Plain
                } else if Some(index) == correct {
                    ChoiceMark::Correct
                } else if Some(index) == self.chosen {
                    ChoiceMark::Wrong
                } else {
                    ChoiceMark::Plain
                };
                ChoiceVm {
                    index,
                    word: entry.word().to_string(),
                    mark,
                    disabled: answered,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        match self.session.current_answer()? {
            AnswerResult::Correct => Some(FeedbackVm {
                text: "Correct!".to_string(),
                is_correct: true,
            }),
            AnswerResult::Incorrect { correct_entry } => Some(FeedbackVm {
                text: format!("Wrong. Answer: {}", correct_entry.word()),
                is_correct: false,
            }),
        }
    }

    /// Snapshot of everything the current screen renders.
    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        let day_title = self.day_title().to_string();
        if let Ok(score) = self.session.final_score() {
            return QuizScreenVm::End(EndScreenVm {
                day_title,
                final_line: format!("Final score: {score}"),
            });
        }

        let progress = self.session.progress();
        QuizScreenVm::Game(GameScreenVm {
            day_title,
            definition: self.definition().unwrap_or_default().to_string(),
            choices: self.choices(),
            feedback: self.feedback(),
            score_line: self.score_line(),
            progress_line: format!("Question {} of {}", progress.question_number(), progress.total),
            can_advance: self.session.is_current_answered(),
        })
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for an index outside the choice set or an
    /// out-of-order call.
    pub fn choose(&mut self, index: usize) -> Result<(), ViewError> {
        let entry = self.choices.get(index).ok_or(ViewError::Unknown)?.clone();
        self.session
            .submit_answer(&entry)
            .map_err(|err| ViewError::from(&err))?;
        self.chosen = Some(index);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the current question is unanswered.
    pub fn next(&mut self) -> Result<QuizPhase, ViewError> {
        let state = self
            .session
            .advance()
            .map_err(|err| ViewError::from(&err))?;
        self.chosen = None;
        self.choices = if state == SessionState::InProgress {
            self.session
                .choices_for_current()
                .map_err(|err| ViewError::from(&err))?
        } else {
            Vec::new()
        };
        Ok(self.phase())
    }

    /// Replace the session with a fresh one for the same day.
    ///
    /// # Errors
    ///
    /// Propagates start failures from `QuizVm::start`.
    pub fn play_again(&mut self) -> Result<(), ViewError> {
        *self = Self::start(
            Arc::clone(&self.quiz_loop),
            Arc::clone(&self.bank),
            self.day_index,
        )?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the error of the operation the intent maps to.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        match intent {
            QuizIntent::Choose(index) => self.choose(index),
            QuizIntent::Next => self.next().map(|_| ()),
            QuizIntent::PlayAgain => self.play_again(),
        }
    }
}

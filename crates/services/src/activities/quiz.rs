use path_core::model::{ActivityOutcome, NodeId, QuizBank, QuizQuestion};

use crate::error::QuizError;
use crate::progression::Notice;

/// Feedback for a checked answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    /// Wrong answer; the learner may try the same question again.
    Incorrect { attempts_left: u32 },
    /// Wrong answer that reached the cap. The quiz is over.
    LockedOut,
}

impl AnswerFeedback {
    /// Prompt shown over the question. A correct answer only highlights
    /// the option.
    #[must_use]
    pub fn notice(self) -> Option<Notice> {
        match self {
            AnswerFeedback::Correct => None,
            AnswerFeedback::Incorrect { .. } => Some(Notice::new(
                "quiz_incorrect_title",
                "quiz_incorrect_message",
            )),
            AnswerFeedback::LockedOut => Some(Notice::new(
                "quiz_too_many_errors_title",
                "quiz_too_many_errors_message",
            )),
        }
    }
}

/// Where the quiz stands after `proceed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizProgress {
    /// Moved on to the question at this index.
    NextQuestion(usize),
    /// Retrying the same question after a wrong answer.
    Retry(usize),
    Passed,
}

impl QuizProgress {
    #[must_use]
    pub fn notice(self) -> Option<Notice> {
        match self {
            QuizProgress::Passed => Some(Notice::new(
                "quiz_completed_title",
                "quiz_completed_message",
            )),
            QuizProgress::NextQuestion(_) | QuizProgress::Retry(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizState {
    InProgress,
    Passed,
    LockedOut,
}

/// One opening of a quiz modal.
///
/// The incorrect-attempt counter lives here, so every (re)opening starts
/// from zero. Wrong answers count against a single cap shared by all
/// questions; a correct answer always advances no matter how many misses
/// came before it.
#[derive(Debug, Clone)]
pub struct QuizSession {
    node: NodeId,
    bank: QuizBank,
    current: usize,
    selected: Option<usize>,
    feedback: Option<AnswerFeedback>,
    incorrect_attempts: u32,
    max_incorrect: u32,
    state: QuizState,
}

impl QuizSession {
    #[must_use]
    pub fn open(node: NodeId, bank: QuizBank, max_incorrect: u32) -> Self {
        Self {
            node,
            bank,
            current: 0,
            selected: None,
            feedback: None,
            incorrect_attempts: 0,
            max_incorrect: max_incorrect.max(1),
            state: QuizState::InProgress,
        }
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn bank(&self) -> &QuizBank {
        &self.bank
    }

    /// Zero-based index of the question on screen.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::InProgress => self.bank.question(self.current),
            QuizState::Passed | QuizState::LockedOut => None,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        self.feedback
    }

    #[must_use]
    pub fn incorrect_attempts(&self) -> u32 {
        self.incorrect_attempts
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.state == QuizState::Passed
    }

    #[must_use]
    pub fn is_locked_out(&self) -> bool {
        self.state == QuizState::LockedOut
    }

    fn ensure_in_progress(&self) -> Result<(), QuizError> {
        match self.state {
            QuizState::InProgress => Ok(()),
            QuizState::Passed | QuizState::LockedOut => Err(QuizError::Finished),
        }
    }

    /// Highlight an option. Allowed until the answer is checked.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the quiz is over, the answer was already
    /// checked, or `option` does not exist.
    pub fn select(&mut self, option: usize) -> Result<(), QuizError> {
        self.ensure_in_progress()?;
        if self.feedback.is_some() {
            return Err(QuizError::AwaitingContinue);
        }
        let options = self
            .bank
            .question(self.current)
            .map_or(0, QuizQuestion::option_count);
        if option >= options {
            return Err(QuizError::OptionOutOfRange { option, options });
        }
        self.selected = Some(option);
        Ok(())
    }

    /// Check the selected option against the answer key.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NothingSelected` if no option is highlighted, or
    /// `QuizError::Finished` once the quiz has ended.
    pub fn check(&mut self) -> Result<AnswerFeedback, QuizError> {
        self.ensure_in_progress()?;
        if self.feedback.is_some() {
            return Err(QuizError::AwaitingContinue);
        }
        let selected = self.selected.ok_or(QuizError::NothingSelected)?;
        let correct = self
            .bank
            .question(self.current)
            .is_some_and(|question| question.is_correct(selected));

        let feedback = if correct {
            AnswerFeedback::Correct
        } else {
            self.incorrect_attempts += 1;
            if self.incorrect_attempts >= self.max_incorrect {
                self.state = QuizState::LockedOut;
                tracing::info!(
                    node = %self.node,
                    attempts = self.incorrect_attempts,
                    "quiz attempt cap reached"
                );
                AnswerFeedback::LockedOut
            } else {
                AnswerFeedback::Incorrect {
                    attempts_left: self.max_incorrect - self.incorrect_attempts,
                }
            }
        };
        self.feedback = Some(feedback);
        Ok(feedback)
    }

    /// `select` then `check`.
    ///
    /// # Errors
    ///
    /// See [`QuizSession::select`] and [`QuizSession::check`].
    pub fn answer(&mut self, option: usize) -> Result<AnswerFeedback, QuizError> {
        self.select(option)?;
        self.check()
    }

    /// Dismiss the feedback: continue after a correct answer, or try again
    /// after a wrong one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NothingToContinue` if no answer has been checked.
    pub fn proceed(&mut self) -> Result<QuizProgress, QuizError> {
        self.ensure_in_progress()?;
        let feedback = self.feedback.take().ok_or(QuizError::NothingToContinue)?;
        self.selected = None;

        match feedback {
            AnswerFeedback::Correct => {
                if self.current + 1 < self.bank.len() {
                    self.current += 1;
                    Ok(QuizProgress::NextQuestion(self.current))
                } else {
                    self.state = QuizState::Passed;
                    Ok(QuizProgress::Passed)
                }
            }
            AnswerFeedback::Incorrect { .. } => Ok(QuizProgress::Retry(self.current)),
            // Unreachable while in progress, the lockout ends the quiz.
            AnswerFeedback::LockedOut => Err(QuizError::Finished),
        }
    }

    /// What closing the modal reports to the progression controller.
    #[must_use]
    pub fn outcome(&self) -> ActivityOutcome {
        match self.state {
            QuizState::Passed => ActivityOutcome::Success,
            QuizState::LockedOut => ActivityOutcome::TooManyErrors,
            QuizState::InProgress => ActivityOutcome::Failure,
        }
    }
}

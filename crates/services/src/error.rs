//! Shared error types for the services crate.
//!
//! Progression triggers never fail; these cover presenter misuse of the
//! activity sessions (driving a quiz that is not open, picking an option
//! that does not exist, and so on).

use thiserror::Error;

use path_core::model::{ActivityFamily, QuizBankError};

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no option selected")]
    NothingSelected,
    #[error("option {option} does not exist (question has {options} options)")]
    OptionOutOfRange { option: usize, options: usize },
    #[error("answer already checked; continue before selecting again")]
    AwaitingContinue,
    #[error("no answer has been checked yet")]
    NothingToContinue,
    #[error("quiz already finished")]
    Finished,
    #[error(transparent)]
    Bank(#[from] QuizBankError),
}

/// Errors emitted by `TutorialSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TutorialError {
    #[error("tutorial has no steps")]
    NoSteps,
    #[error("tutorial already closed")]
    Closed,
}

/// Errors emitted by `PathSession` when routing presenter input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no activity is open")]
    NoActivity,
    #[error("the open activity is a {open:?}, not a {expected:?}")]
    WrongActivity {
        expected: ActivityFamily,
        open: ActivityFamily,
    },
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Tutorial(#[from] TutorialError),
}

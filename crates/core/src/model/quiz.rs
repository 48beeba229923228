use thiserror::Error;

use crate::model::activity::Level;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizBankError {
    #[error("quiz bank must contain at least one question")]
    Empty,

    #[error("question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("correct option {correct} is out of range for {options} options")]
    CorrectOutOfRange { correct: usize, options: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question. Text fields hold translation keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    prompt_key: String,
    option_keys: Vec<String>,
    correct: usize,
}

impl QuizQuestion {
    /// # Errors
    ///
    /// Returns `QuizBankError` if there are fewer than two options or the
    /// correct index does not point at one of them.
    pub fn new(
        prompt_key: impl Into<String>,
        option_keys: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuizBankError> {
        if option_keys.len() < 2 {
            return Err(QuizBankError::TooFewOptions(option_keys.len()));
        }
        if correct >= option_keys.len() {
            return Err(QuizBankError::CorrectOutOfRange {
                correct,
                options: option_keys.len(),
            });
        }
        Ok(Self {
            prompt_key: prompt_key.into(),
            option_keys,
            correct,
        })
    }

    #[must_use]
    pub fn prompt_key(&self) -> &str {
        &self.prompt_key
    }

    #[must_use]
    pub fn option_keys(&self) -> &[String] {
        &self.option_keys
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.option_keys.len()
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

/// Ordered questions for one quiz level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizBank {
    level: Level,
    title_key: String,
    questions: Vec<QuizQuestion>,
}

impl QuizBank {
    /// # Errors
    ///
    /// Returns `QuizBankError::Empty` if `questions` is empty.
    pub fn new(
        level: Level,
        title_key: impl Into<String>,
        questions: Vec<QuizQuestion>,
    ) -> Result<Self, QuizBankError> {
        if questions.is_empty() {
            return Err(QuizBankError::Empty);
        }
        Ok(Self {
            level,
            title_key: title_key.into(),
            questions,
        })
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

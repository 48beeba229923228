use thiserror::Error;

use crate::locale::LocaleError;
use crate::model::{ParseIdError, QuizBankError, SettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    QuizBank(#[from] QuizBankError),
    #[error(transparent)]
    Locale(#[from] LocaleError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}

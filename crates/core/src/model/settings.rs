use chrono::Duration;
use thiserror::Error;

use crate::locale::Locale;

/// Default time a video must stay open before it counts as watched.
pub const DEFAULT_VIDEO_REQUIRED_SECS: u32 = 20;

/// Default number of wrong answers that locks a quiz session out.
pub const DEFAULT_MAX_INCORRECT_ATTEMPTS: u32 = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("video required seconds must be between 1 and 3600, got {0}")]
    InvalidVideoRequiredSecs(u32),

    #[error("max incorrect attempts must be between 1 and 10, got {0}")]
    InvalidMaxIncorrectAttempts(u32),
}

/// Tunables for a learning path session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSettings {
    locale: Locale,
    video_required_secs: u32,
    max_incorrect_attempts: u32,
}

/// Unvalidated settings, typically assembled from env vars and flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSettingsDraft {
    pub locale: Option<Locale>,
    pub video_required_secs: Option<u32>,
    pub max_incorrect_attempts: Option<u32>,
}

impl PathSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset fields with defaults and check ranges.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a provided value is out of range.
    pub fn validate(self) -> Result<PathSettings, SettingsError> {
        let video_required_secs = self
            .video_required_secs
            .unwrap_or(DEFAULT_VIDEO_REQUIRED_SECS);
        if !(1..=3600).contains(&video_required_secs) {
            return Err(SettingsError::InvalidVideoRequiredSecs(video_required_secs));
        }

        let max_incorrect_attempts = self
            .max_incorrect_attempts
            .unwrap_or(DEFAULT_MAX_INCORRECT_ATTEMPTS);
        if !(1..=10).contains(&max_incorrect_attempts) {
            return Err(SettingsError::InvalidMaxIncorrectAttempts(
                max_incorrect_attempts,
            ));
        }

        Ok(PathSettings {
            locale: self.locale.unwrap_or_default(),
            video_required_secs,
            max_incorrect_attempts,
        })
    }
}

impl PathSettings {
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn video_required_secs(&self) -> u32 {
        self.video_required_secs
    }

    /// Required watch time as a `chrono` duration, for clock arithmetic.
    #[must_use]
    pub fn video_required(&self) -> Duration {
        Duration::seconds(i64::from(self.video_required_secs))
    }

    #[must_use]
    pub fn max_incorrect_attempts(&self) -> u32 {
        self.max_incorrect_attempts
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            video_required_secs: DEFAULT_VIDEO_REQUIRED_SECS,
            max_incorrect_attempts: DEFAULT_MAX_INCORRECT_ATTEMPTS,
        }
    }
}

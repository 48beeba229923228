//! Built-in display strings for the two supported locales.
//!
//! Lookups never fail: an unknown key is returned unchanged so a missing
//! translation shows up as its key instead of an empty label.

mod en;
mod es;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported locale: {0:?} (expected \"es\" or \"en\")")]
pub struct LocaleError(pub String);

/// Display language. Spanish is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// The other locale; mirrors the single language toggle in the header.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }

    fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::Es => es::ENTRIES,
            Locale::En => en::ENTRIES,
        }
    }

    /// Translate `key`, falling back to the key itself.
    #[must_use]
    pub fn translate<'a>(self, key: &'a str) -> &'a str {
        self.entries()
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(*v))
            .unwrap_or(key)
    }

    /// Translated "Question {current} of {total}" counter, 1-based.
    #[must_use]
    pub fn question_counter(self, current: usize, total: usize) -> String {
        self.translate("quiz_question_counter")
            .replace("{current}", &current.to_string())
            .replace("{total}", &total.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(LocaleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(Locale::En.translate("continue"), "Continue");
        assert_eq!(Locale::Es.translate("continue"), "Continuar");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(Locale::En.translate("no_such_key"), "no_such_key");
    }

    #[test]
    fn both_locales_define_the_same_keys() {
        let en: Vec<_> = en::ENTRIES.iter().map(|(k, _)| *k).collect();
        let es: Vec<_> = es::ENTRIES.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, es);
    }

    #[test]
    fn question_counter_interpolates() {
        assert_eq!(Locale::En.question_counter(2, 6), "Question 2 of 6");
        assert_eq!(Locale::Es.question_counter(1, 6), "Pregunta 1 de 6");
    }

    #[test]
    fn parses_locale_codes() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" es ".parse::<Locale>().unwrap(), Locale::Es);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Es.toggled(), Locale::En);
    }
}

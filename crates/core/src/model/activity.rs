use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty tier shared by videos and quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Basic,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Basic => f.write_str("basic"),
            Level::Advanced => f.write_str("advanced"),
        }
    }
}

//
// ─── ACTIVITY KIND ─────────────────────────────────────────────────────────────
//

/// Declarative tag describing what a node asks the learner to do.
///
/// Progression rules are looked up from the tag's [`ActivityFamily`], never
/// from the node's position on the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "level", rename_all = "snake_case")]
pub enum ActivityKind {
    Tutorial,
    Video(Level),
    Quiz(Level),
}

impl ActivityKind {
    #[must_use]
    pub fn family(self) -> ActivityFamily {
        match self {
            ActivityKind::Tutorial => ActivityFamily::Tutorial,
            ActivityKind::Video(_) => ActivityFamily::Video,
            ActivityKind::Quiz(_) => ActivityFamily::Quiz,
        }
    }

    #[must_use]
    pub fn level(self) -> Option<Level> {
        match self {
            ActivityKind::Tutorial => None,
            ActivityKind::Video(level) | ActivityKind::Quiz(level) => Some(level),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Tutorial => f.write_str("tutorial"),
            ActivityKind::Video(level) => write!(f, "video-{level}"),
            ActivityKind::Quiz(level) => write!(f, "quiz-{level}"),
        }
    }
}

/// Activity kinds grouped by the progression rules they share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityFamily {
    Tutorial,
    Video,
    Quiz,
}

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

/// Result an activity reports when its presenter closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityOutcome {
    /// Tutorial finished, video watched fully, or every quiz question passed.
    Success,
    /// Closed before the activity was satisfied.
    Failure,
    /// The quiz attempt cap was reached.
    TooManyErrors,
    /// The learner explicitly opted out (tutorial skip).
    Skipped,
}

impl fmt::Display for ActivityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityOutcome::Success => "success",
            ActivityOutcome::Failure => "failure",
            ActivityOutcome::TooManyErrors => "too-many-errors",
            ActivityOutcome::Skipped => "skipped",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_ignores_level() {
        assert_eq!(ActivityKind::Video(Level::Basic).family(), ActivityFamily::Video);
        assert_eq!(ActivityKind::Video(Level::Advanced).family(), ActivityFamily::Video);
        assert_eq!(ActivityKind::Quiz(Level::Advanced).family(), ActivityFamily::Quiz);
        assert_eq!(ActivityKind::Tutorial.level(), None);
    }

    #[test]
    fn kind_serializes_with_level_tag() {
        let json = serde_json::to_string(&ActivityKind::Quiz(Level::Advanced)).unwrap();
        assert_eq!(json, r#"{"kind":"quiz","level":"advanced"}"#);
        let json = serde_json::to_string(&ActivityKind::Tutorial).unwrap();
        assert_eq!(json, r#"{"kind":"tutorial"}"#);
    }

    #[test]
    fn kind_display_is_kebab_case() {
        assert_eq!(ActivityKind::Video(Level::Basic).to_string(), "video-basic");
        assert_eq!(ActivityOutcome::TooManyErrors.to_string(), "too-many-errors");
    }
}

mod activity;
mod ids;
mod node;
mod quiz;
mod settings;
mod tutorial;

pub use activity::{ActivityFamily, ActivityKind, ActivityOutcome, Level};
pub use ids::{NodeId, ParseIdError};
pub use node::Node;
pub use quiz::{QuizBank, QuizBankError, QuizQuestion};
pub use settings::{
    DEFAULT_MAX_INCORRECT_ATTEMPTS, DEFAULT_VIDEO_REQUIRED_SECS, PathSettings, PathSettingsDraft,
    SettingsError,
};
pub use tutorial::TutorialStep;

#![forbid(unsafe_code)]

pub mod activities;
pub mod error;
pub mod path_session;
pub mod progression;

pub use path_core::Clock;

pub use activities::{
    AnswerFeedback, QuizProgress, QuizSession, TutorialProgress, TutorialSession, VideoWatch,
    WatchTimer,
};
pub use error::{QuizError, SessionError, TutorialError};
pub use path_session::{ActiveActivity, PathSession};
pub use progression::{
    ActivityHandler, HandlerRegistry, IgnoreReason, Notice, ProgressEvent, ProgressionController,
    TapOutcome, Transition,
};

//! Presenter-facing state for each activity a node can open.

mod quiz;
mod tutorial;
mod video;

pub use quiz::{AnswerFeedback, QuizProgress, QuizSession};
pub use tutorial::{TutorialProgress, TutorialSession};
pub use video::{VideoWatch, WatchTimer};

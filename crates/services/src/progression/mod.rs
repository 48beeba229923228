mod controller;
mod events;
mod handlers;

pub use controller::ProgressionController;
pub use events::{IgnoreReason, Notice, ProgressEvent, TapOutcome, Transition};
pub use handlers::{
    ActivityHandler, AdvanceOnSuccess, HandlerRegistry, QuizHandler, TransitionContext,
};

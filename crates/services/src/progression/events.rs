use path_core::model::{ActivityKind, ActivityOutcome, NodeId};

/// A single state change applied to the path, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Completed(NodeId),
    Unlocked(NodeId),
    /// A previously completed node went back to incomplete after a lockout.
    Reverted(NodeId),
    Relocked(NodeId),
    /// The presenter should reopen this node's activity.
    ReshowActivity { node: NodeId, activity: ActivityKind },
    /// The final node was completed.
    Celebrate,
}

/// Everything one activity outcome did to the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub node: NodeId,
    pub outcome: ActivityOutcome,
    pub events: Vec<ProgressEvent>,
}

impl Transition {
    pub(crate) fn new(node: NodeId, outcome: ActivityOutcome) -> Self {
        Self {
            node,
            outcome,
            events: Vec::new(),
        }
    }

    /// True when the outcome was ignored or changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn celebrates(&self) -> bool {
        self.events.contains(&ProgressEvent::Celebrate)
    }

    /// Blocking message for a lockout, or the completion message.
    ///
    /// `completedLevel` is a prefix; the presenter appends the node title.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        if self.events.iter().any(|e| matches!(e, ProgressEvent::Relocked(_))) {
            Some(Notice::new(
                "quiz_too_many_errors_title",
                "quiz_too_many_errors_message",
            ))
        } else if self.celebrates() {
            Some(Notice::new("congratulations", "allLevelsCompleted"))
        } else if self.events.contains(&ProgressEvent::Completed(self.node)) {
            Some(Notice::new("congratulations", "completedLevel"))
        } else {
            None
        }
    }

    /// Node whose activity must be shown again, if the outcome was a lockout.
    #[must_use]
    pub fn reshow(&self) -> Option<(NodeId, ActivityKind)> {
        self.events.iter().find_map(|event| match event {
            ProgressEvent::ReshowActivity { node, activity } => Some((*node, *activity)),
            _ => None,
        })
    }
}

/// Why a tap did not open anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownNode,
    Locked,
    ActivityOpen,
    /// The node is current but its activity could not be built.
    Unavailable,
}

impl IgnoreReason {
    /// Message to show for this tap, if the learner should see one.
    #[must_use]
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            IgnoreReason::Locked => Some("completePreviousNodes"),
            IgnoreReason::UnknownNode | IgnoreReason::ActivityOpen | IgnoreReason::Unavailable => {
                None
            }
        }
    }
}

/// Translation keys of a message the presenter should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title_key: &'static str,
    pub message_key: &'static str,
}

impl Notice {
    #[must_use]
    pub const fn new(title_key: &'static str, message_key: &'static str) -> Self {
        Self {
            title_key,
            message_key,
        }
    }
}

/// Result of tapping a node on the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The node is current; the presenter should open this activity.
    Open { node: NodeId, activity: ActivityKind },
    /// Informational only; carries the message key to show.
    AlreadyCompleted { node: NodeId, message_key: &'static str },
    Ignored(IgnoreReason),
}

use std::collections::HashMap;
use std::fmt;

use path_core::model::{ActivityFamily, ActivityOutcome, NodeId};
use storage::ProgressStore;

use super::events::{ProgressEvent, Transition};

//
// ─── CONTEXT ───────────────────────────────────────────────────────────────────
//

/// Mutable view a handler works through while applying one outcome.
///
/// Handlers only see the finished node's position and its neighbours, so
/// the same rules serve every node tagged with the same activity family.
pub struct TransitionContext<'a> {
    store: &'a mut dyn ProgressStore,
    position: usize,
    transition: &'a mut Transition,
}

impl<'a> TransitionContext<'a> {
    pub(crate) fn new(
        store: &'a mut dyn ProgressStore,
        position: usize,
        transition: &'a mut Transition,
    ) -> Self {
        Self {
            store,
            position,
            transition,
        }
    }

    fn node_at(&self, position: usize) -> Option<NodeId> {
        self.store.nodes().get(position).map(|node| node.id())
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.transition.node
    }

    fn push(&mut self, event: ProgressEvent) {
        self.transition.events.push(event);
    }

    /// Complete the finished node and open the next one.
    ///
    /// Ignored when the node is locked or already completed, so a replayed
    /// success neither moves later nodes nor celebrates twice.
    pub fn complete_and_advance(&mut self) {
        let id = self.node();
        let Some(node) = self.store.get(id) else {
            return;
        };
        if node.is_locked() {
            tracing::debug!(node = %id, "success on locked node ignored");
            return;
        }
        if node.is_completed() {
            tracing::debug!(node = %id, "success on completed node ignored");
            return;
        }

        self.store.mark_completed(id);
        self.push(ProgressEvent::Completed(id));

        match self.node_at(self.position + 1) {
            Some(next) => {
                if self.store.get(next).is_some_and(|n| n.is_locked()) {
                    self.store.unlock(next);
                    self.push(ProgressEvent::Unlocked(next));
                }
            }
            None => self.push(ProgressEvent::Celebrate),
        }
    }

    /// Send the learner back to the preceding node. That node becomes
    /// incomplete and this one is locked again.
    ///
    /// Ignored when this node is locked or already completed: only a quiz
    /// the learner could actually be taking can lock them out.
    pub fn revert_previous(&mut self) {
        let id = self.node();
        let Some(node) = self.store.get(id) else {
            return;
        };
        if node.is_locked() {
            tracing::debug!(node = %id, "lockout on locked node ignored");
            return;
        }
        if node.is_completed() {
            tracing::debug!(node = %id, "lockout on completed node ignored");
            return;
        }
        let Some(previous_position) = self.position.checked_sub(1) else {
            tracing::debug!(node = %id, "lockout on first node has nothing to revert");
            return;
        };
        let Some(previous) = self.store.nodes().get(previous_position).cloned() else {
            return;
        };

        if previous.is_completed() {
            self.store.mark_incomplete(previous.id());
            self.push(ProgressEvent::Reverted(previous.id()));
        }
        self.store.lock(id);
        self.push(ProgressEvent::Relocked(id));
        if !previous.is_locked() {
            self.push(ProgressEvent::ReshowActivity {
                node: previous.id(),
                activity: previous.activity(),
            });
        }
    }
}

//
// ─── HANDLERS ──────────────────────────────────────────────────────────────────
//

/// Progression rules for one activity family.
pub trait ActivityHandler: Send + Sync {
    fn family(&self) -> ActivityFamily;

    fn apply(&self, ctx: &mut TransitionContext<'_>, outcome: ActivityOutcome);
}

/// Tutorials and videos: success advances, anything else leaves the path alone.
#[derive(Debug, Clone, Copy)]
pub struct AdvanceOnSuccess {
    family: ActivityFamily,
}

impl AdvanceOnSuccess {
    #[must_use]
    pub fn new(family: ActivityFamily) -> Self {
        Self { family }
    }
}

impl ActivityHandler for AdvanceOnSuccess {
    fn family(&self) -> ActivityFamily {
        self.family
    }

    fn apply(&self, ctx: &mut TransitionContext<'_>, outcome: ActivityOutcome) {
        match outcome {
            ActivityOutcome::Success => ctx.complete_and_advance(),
            ActivityOutcome::Failure | ActivityOutcome::Skipped => {}
            ActivityOutcome::TooManyErrors => {
                tracing::debug!(
                    node = %ctx.node(),
                    family = ?self.family,
                    "lockout outcome does not apply to this activity"
                );
            }
        }
    }
}

/// Quizzes: success advances, a lockout reverts the preceding node.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizHandler;

impl ActivityHandler for QuizHandler {
    fn family(&self) -> ActivityFamily {
        ActivityFamily::Quiz
    }

    fn apply(&self, ctx: &mut TransitionContext<'_>, outcome: ActivityOutcome) {
        match outcome {
            ActivityOutcome::Success => ctx.complete_and_advance(),
            ActivityOutcome::TooManyErrors => {
                tracing::warn!(node = %ctx.node(), "quiz lockout, reverting previous node");
                ctx.revert_previous();
            }
            ActivityOutcome::Failure | ActivityOutcome::Skipped => {}
        }
    }
}

//
// ─── REGISTRY ──────────────────────────────────────────────────────────────────
//

/// Maps each activity family to its progression rules.
pub struct HandlerRegistry {
    handlers: HashMap<ActivityFamily, Box<dyn ActivityHandler>>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Rules for the built-in tutorial, video and quiz activities.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with(AdvanceOnSuccess::new(ActivityFamily::Tutorial))
            .with(AdvanceOnSuccess::new(ActivityFamily::Video))
            .with(QuizHandler)
    }

    /// Register `handler`, replacing any handler for the same family.
    #[must_use]
    pub fn with(mut self, handler: impl ActivityHandler + 'static) -> Self {
        self.handlers.insert(handler.family(), Box::new(handler));
        self
    }

    #[must_use]
    pub fn get(&self, family: ActivityFamily) -> Option<&dyn ActivityHandler> {
        self.handlers.get(&family).map(|handler| &**handler)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("families", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

use std::fmt;

use path_core::Locale;
use path_core::model::{ActivityOutcome, NodeId};
use storage::{InMemoryProgressStore, ProgressSnapshot, ProgressStore};

use super::events::{IgnoreReason, TapOutcome, Transition};
use super::handlers::{HandlerRegistry, TransitionContext};

/// Sole writer of the progress store.
///
/// Turns presenter-reported outcomes into store mutations using the rules
/// registered for each activity family. Invalid triggers are logged and
/// ignored; nothing here returns an error.
pub struct ProgressionController<S: ProgressStore = InMemoryProgressStore> {
    store: S,
    registry: HandlerRegistry,
}

impl ProgressionController<InMemoryProgressStore> {
    /// Controller over a fresh built-in path.
    #[must_use]
    pub fn seeded(locale: Locale) -> Self {
        Self::new(InMemoryProgressStore::seeded(locale))
    }
}

impl<S: ProgressStore> ProgressionController<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: HandlerRegistry::standard(),
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: HandlerRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.store.snapshot()
    }

    /// Decide what tapping `id` means. Never mutates the path.
    #[must_use]
    pub fn on_node_tapped(&self, id: NodeId) -> TapOutcome {
        let Some(node) = self.store.get(id) else {
            tracing::debug!(node = %id, "tap on unknown node ignored");
            return TapOutcome::Ignored(IgnoreReason::UnknownNode);
        };

        if node.is_completed() {
            return TapOutcome::AlreadyCompleted {
                node: id,
                message_key: "alreadyCompleted",
            };
        }

        if node.is_locked() {
            tracing::debug!(node = %id, "tap on locked node ignored");
            return TapOutcome::Ignored(IgnoreReason::Locked);
        }

        TapOutcome::Open {
            node: id,
            activity: node.activity(),
        }
    }

    /// Apply the outcome an activity reported for node `id`.
    pub fn on_activity_finished(&mut self, id: NodeId, outcome: ActivityOutcome) -> Transition {
        let mut transition = Transition::new(id, outcome);

        let Some((position, family)) = self
            .store
            .position(id)
            .and_then(|pos| self.store.nodes().get(pos).map(|n| (pos, n.activity().family())))
        else {
            tracing::debug!(node = %id, %outcome, "outcome for unknown node ignored");
            return transition;
        };

        let Some(handler) = self.registry.get(family) else {
            tracing::debug!(node = %id, ?family, "no handler registered");
            return transition;
        };

        let mut ctx = TransitionContext::new(&mut self.store, position, &mut transition);
        handler.apply(&mut ctx, outcome);

        if transition.is_noop() {
            tracing::debug!(node = %id, %outcome, "outcome left the path unchanged");
        } else {
            tracing::info!(node = %id, %outcome, events = ?transition.events, "path updated");
        }
        transition
    }

    /// Start over from the seed state.
    pub fn reset(&mut self) {
        self.store.reset();
        tracing::info!("path reset");
    }

    /// Re-title nodes for `locale`; progression is unaffected.
    pub fn set_locale(&mut self, locale: Locale) {
        self.store.retitle(locale);
    }
}

impl<S: ProgressStore> fmt::Debug for ProgressionController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressionController")
            .field("nodes", &self.store.nodes().len())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use serde::Serialize;

use crate::locale::Locale;
use crate::model::{activity::ActivityKind, ids::NodeId};

/// One step on the learning path.
///
/// A node starts locked and incomplete. Only the progress store mutates the
/// flags; everything else reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    title_key: String,
    title: String,
    activity: ActivityKind,
    completed: bool,
    locked: bool,
}

impl Node {
    /// Creates a locked, incomplete node whose title is the untranslated key.
    #[must_use]
    pub fn new(id: NodeId, title_key: impl Into<String>, activity: ActivityKind) -> Self {
        let title_key = title_key.into();
        Self {
            id,
            title: title_key.clone(),
            title_key,
            activity,
            completed: false,
            locked: true,
        }
    }

    /// Builder-style variant of [`Node::unlock`], used when seeding the entry node.
    #[must_use]
    pub fn unlocked(mut self) -> Self {
        self.locked = false;
        self
    }

    /// Resolves the display title for `locale`.
    #[must_use]
    pub fn localized(mut self, locale: Locale) -> Self {
        self.retitle(locale);
        self
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn activity(&self) -> ActivityKind {
        self.activity
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The node the learner should work on next: unlocked and not yet completed.
    #[must_use]
    pub fn is_current(&self) -> bool {
        !self.locked && !self.completed
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn mark_incomplete(&mut self) {
        self.completed = false;
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn retitle(&mut self, locale: Locale) {
        self.title = locale.translate(&self.title_key).to_owned();
    }
}

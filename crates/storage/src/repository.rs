use path_core::Locale;
use path_core::model::{ActivityKind, Node, NodeId};
use path_core::seed::seed_nodes;
use serde::Serialize;

/// Ordered, id-addressable node list for one session.
///
/// Mutators return whether a node with `id` exists; an unknown id is a
/// silent no-op. Nothing here is persisted.
pub trait ProgressStore {
    /// Nodes in path order.
    fn nodes(&self) -> &[Node];

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node>;

    /// Restore the session's initial state.
    fn reset(&mut self);

    /// Re-resolve every title for `locale`. Progress flags are untouched.
    fn retitle(&mut self, locale: Locale);

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes().iter().find(|node| node.id() == id)
    }

    fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes().iter().position(|node| node.id() == id)
    }

    fn mark_completed(&mut self, id: NodeId) -> bool {
        self.node_mut(id).map(Node::mark_completed).is_some()
    }

    fn mark_incomplete(&mut self, id: NodeId) -> bool {
        self.node_mut(id).map(Node::mark_incomplete).is_some()
    }

    fn unlock(&mut self, id: NodeId) -> bool {
        self.node_mut(id).map(Node::unlock).is_some()
    }

    fn lock(&mut self, id: NodeId) -> bool {
        self.node_mut(id).map(Node::lock).is_some()
    }

    fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::from_nodes(self.nodes())
    }
}

/// In-memory store seeded with a fixed node list.
#[derive(Debug, Clone)]
pub struct InMemoryProgressStore {
    initial: Vec<Node>,
    nodes: Vec<Node>,
    locale: Option<Locale>,
}

impl InMemoryProgressStore {
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            initial: nodes.clone(),
            nodes,
            locale: None,
        }
    }

    /// Store holding the built-in five-node path.
    #[must_use]
    pub fn seeded(locale: Locale) -> Self {
        let mut store = Self::new(seed_nodes(locale));
        store.locale = Some(locale);
        store
    }
}

impl Default for InMemoryProgressStore {
    fn default() -> Self {
        Self::seeded(Locale::default())
    }
}

impl ProgressStore for InMemoryProgressStore {
    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id() == id)
    }

    fn reset(&mut self) {
        self.nodes = self.initial.clone();
        if let Some(locale) = self.locale {
            self.retitle(locale);
        }
    }

    fn retitle(&mut self, locale: Locale) {
        self.locale = Some(locale);
        for node in &mut self.nodes {
            node.retitle(locale);
        }
    }
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Read-only copy of a node handed to observers after each mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub title: String,
    pub activity: ActivityKind,
    pub completed: bool,
    pub locked: bool,
}

/// Point-in-time view of the whole path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    /// First unlocked, incomplete node, if any.
    pub current: Option<NodeId>,
    pub all_completed: bool,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn from_nodes(nodes: &[Node]) -> Self {
        Self {
            nodes: nodes
                .iter()
                .map(|node| NodeSnapshot {
                    id: node.id(),
                    title: node.title().to_owned(),
                    activity: node.activity(),
                    completed: node.is_completed(),
                    locked: node.is_locked(),
                })
                .collect(),
            current: nodes.iter().find(|n| n.is_current()).map(Node::id),
            all_completed: !nodes.is_empty() && nodes.iter().all(Node::is_completed),
        }
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Count of unlocked, incomplete nodes.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| !n.locked && !n.completed)
            .count()
    }
}

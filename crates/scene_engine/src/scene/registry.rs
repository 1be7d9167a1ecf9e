//! Node registry
//!
//! The registry tracks which nodes are live members of the game. It decides
//! whether a node can be destroyed and supplies the candidates for
//! [`Scene::get_collisions`](super::Scene::get_collisions).

use crate::foundation::collections::NodeId;
use indexmap::IndexSet;

/// Registry capability owned by a scene
pub trait NodeRegistry {
    /// Whether the node is tracked
    fn contains(&self, id: NodeId) -> bool;

    /// Start tracking a node. Adding a tracked node is a no-op.
    fn add(&mut self, id: NodeId);

    /// Stop tracking a node. Removing an untracked node is a no-op.
    fn remove(&mut self, id: NodeId);

    /// All tracked nodes, in a stable order
    fn tracked(&self) -> Vec<NodeId>;

    /// Tracked nodes other than `id` for which `overlaps` holds
    fn collisions_for(&self, id: NodeId, overlaps: &dyn Fn(NodeId) -> bool) -> Vec<NodeId> {
        self.tracked()
            .into_iter()
            .filter(|&other| other != id && overlaps(other))
            .collect()
    }
}

/// Default registry, ordered by registration
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    members: IndexSet<NodeId>,
}

impl ObjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked nodes
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether nothing is tracked
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl NodeRegistry for ObjectRegistry {
    fn contains(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    fn add(&mut self, id: NodeId) {
        self.members.insert(id);
    }

    fn remove(&mut self, id: NodeId) {
        // Keeps the registration order of the remaining nodes
        self.members.shift_remove(&id);
    }

    fn tracked(&self) -> Vec<NodeId> {
        self.members.iter().copied().collect()
    }
}

//! Node destruction

use super::Scene;
use crate::foundation::collections::NodeId;
use log::{debug, trace};

impl Scene {
    /// Destroy a node and its whole subtree.
    ///
    /// Does nothing for nodes that are not registered or already destroyed.
    /// Otherwise runs the behavior's `on_destroy` hook, destroys the children
    /// depth-first, detaches the node from its parent, unregisters it and
    /// frees its handle.
    ///
    /// A child that is not registered cannot be destroyed; it is detached and
    /// left alive as a root.
    pub fn destroy(&mut self, id: NodeId) {
        if !self.is_tracked(id) {
            trace!("Ignoring destroy of untracked node {id:?}");
            return;
        }

        let behavior = self.nodes.get_mut(id).and_then(|node| node.behavior.take());
        if let Some(mut behavior) = behavior {
            behavior.on_destroy(self, id);
            if let Some(node) = self.nodes.get_mut(id) {
                node.behavior = Some(behavior);
            }
        }

        // The hook may already have destroyed this node.
        if !self.is_tracked(id) {
            return;
        }

        while let Some(child) = self.nodes.get(id).and_then(|node| node.children.first().copied()) {
            if self.is_tracked(child) {
                self.destroy(child);
            }
            if self.nodes.get(child).is_some_and(|node| node.parent == Some(id)) {
                debug!("Detaching unregistered {} from destroyed parent", self.nodes[child]);
                if let Some(node) = self.nodes.get_mut(id) {
                    node.children.retain(|&c| c != child);
                }
                self.nodes[child].parent = None;
            }
        }

        if let Some(parent) = self.nodes.get(id).and_then(|node| node.parent) {
            if let Some(parent) = self.nodes.get_mut(parent) {
                parent.children.retain(|&c| c != id);
            }
        }

        self.registry.remove(id);
        if let Some(node) = self.nodes.remove(id) {
            debug!("Destroyed {node}");
        }
    }

    fn is_tracked(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id) && self.registry.contains(id)
    }
}

//! Scene node data

use super::behavior::NodeBehavior;
use crate::foundation::collections::NodeId;
use crate::foundation::math::Transform2D;
use crate::physics::Collider;
use std::fmt;

/// A node in the scene tree
///
/// Owns its local transform and optional collider. Parent and child links are
/// handles into the owning [`Scene`](super::Scene) and can only be changed
/// through it, which keeps both directions consistent.
pub struct Node {
    name: String,
    kind: &'static str,
    visible: bool,
    transform: Transform2D,
    collider: Option<Box<dyn Collider>>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Taken out while a hook that needs the whole scene is running
    pub(crate) behavior: Option<Box<dyn NodeBehavior>>,
}

impl Node {
    pub(crate) fn new(name: String, behavior: Box<dyn NodeBehavior>) -> Self {
        let collider = behavior.create_collider();
        Self {
            name,
            kind: behavior.kind(),
            visible: true,
            transform: Transform2D::default(),
            collider,
            parent: None,
            children: Vec::new(),
            behavior: Some(behavior),
        }
    }

    /// Node label, not necessarily unique
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the node
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Kind label reported by the node's behavior
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Whether the node and its subtree are rendered
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the node and its subtree. Collision is unaffected.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Local transform, relative to the parent
    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    /// Mutable local transform
    pub fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    /// Collider created at spawn, if any
    pub fn collider(&self) -> Option<&dyn Collider> {
        self.collider.as_deref()
    }

    /// Parent handle, `None` for a root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in render order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}::{}]", self.kind, self.name)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("visible", &self.visible)
            .field("transform", &self.transform)
            .field("collider", &self.collider)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

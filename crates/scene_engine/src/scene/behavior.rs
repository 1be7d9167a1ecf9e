//! Node behaviors
//!
//! A behavior is what makes a node a particular kind of object: it decides
//! whether the node gets a collider, how it draws itself, and what happens
//! when it is destroyed. Every hook has a default, so a plain container needs
//! no code at all.

use super::node::Node;
use super::render::RenderSink;
use super::Scene;
use crate::foundation::collections::NodeId;
use crate::physics::{CircleCollider, Collider};

/// Per-kind hooks for scene nodes
pub trait NodeBehavior: 'static {
    /// Short label used when printing the node
    fn kind(&self) -> &'static str {
        "Node"
    }

    /// Collider for the node. Called once, when the node is spawned.
    fn create_collider(&self) -> Option<Box<dyn Collider>> {
        None
    }

    /// Draw the node itself. The node's local transform is already on the
    /// sink's stack; children are drawn afterwards by the scene.
    fn render_self(&self, _node: &Node, _sink: &mut dyn RenderSink) {}

    /// Called once when the node is destroyed, before its children.
    ///
    /// The hook may mutate the scene, including destroying this node again.
    fn on_destroy(&mut self, _scene: &mut Scene, _id: NodeId) {}
}

/// Empty container node
#[derive(Debug, Clone, Copy, Default)]
pub struct Pivot;

impl NodeBehavior for Pivot {
    fn kind(&self) -> &'static str {
        "Pivot"
    }
}

/// Node with a circular collider centred on its origin
#[derive(Debug, Clone, Copy)]
pub struct CircleBody {
    /// Collider radius in local units
    pub radius: f32,
}

impl CircleBody {
    /// Create a body with the given radius
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl NodeBehavior for CircleBody {
    fn kind(&self) -> &'static str {
        "CircleBody"
    }

    fn create_collider(&self) -> Option<Box<dyn Collider>> {
        Some(Box::new(CircleCollider::new(self.radius)))
    }
}

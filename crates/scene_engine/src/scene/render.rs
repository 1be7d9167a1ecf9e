//! Render traversal

use super::error::Result;
use super::Scene;
use crate::foundation::collections::NodeId;
use crate::foundation::math::{Mat3, Transformable};

/// Destination of a render traversal
pub trait RenderSink {
    /// Push a node's local matrix onto the transform stack
    fn push_transform(&mut self, matrix: &Mat3);

    /// Pop the most recently pushed matrix
    fn pop_transform(&mut self);
}

/// Sink that keeps the composed model matrix of the current node
#[derive(Debug, Clone)]
pub struct TransformStack {
    stack: Vec<Mat3>,
}

impl TransformStack {
    /// Create a stack holding only the identity matrix
    pub fn new() -> Self {
        Self {
            stack: vec![Mat3::identity()],
        }
    }

    /// Composed matrix at the top of the stack
    pub fn current(&self) -> Mat3 {
        self.stack.last().copied().unwrap_or_else(Mat3::identity)
    }

    /// Number of pushed matrices
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TransformStack {
    fn push_transform(&mut self, matrix: &Mat3) {
        let composed = self.current() * matrix;
        self.stack.push(composed);
    }

    fn pop_transform(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

impl Scene {
    /// Render `id` and its subtree into `sink`.
    ///
    /// Invisible nodes skip themselves and all their descendants.
    pub fn render(&self, id: NodeId, sink: &mut dyn RenderSink) -> Result<()> {
        let node = self.node(id)?;
        if !node.visible() {
            return Ok(());
        }

        sink.push_transform(&node.transform().local_matrix());
        if let Some(behavior) = &node.behavior {
            behavior.render_self(node, sink);
        }
        for &child in node.children() {
            self.render(child, sink)?;
        }
        sink.pop_transform();
        Ok(())
    }
}

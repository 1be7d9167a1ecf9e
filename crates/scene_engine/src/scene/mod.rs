//! Scene graph
//!
//! Nodes form a tree: each has at most one parent and an ordered list of
//! children, and its transform is relative to its parent. All nodes of a
//! scene live in one arena and are addressed with [`NodeId`] handles.
//!
//! ## Structure
//!
//! ```text
//! Scene ── NodeMap<Node> (arena)
//!   │        └─ Node: name, visible, Transform2D, collider, parent, children
//!   └─ NodeRegistry (tracked nodes, collision candidates)
//! ```
//!
//! The scene provides:
//! - Hierarchy edits with cycle protection and z-ordering
//! - Coordinate conversion through the full ancestor chain
//! - Render traversal into a [`RenderSink`]
//! - Recursive destruction
//!
//! Collision queries live in [`crate::physics`] as further `Scene` methods.
//!
//! [`NodeId`]: crate::foundation::collections::NodeId

mod behavior;
mod error;
mod lifecycle;
mod node;
mod registry;
mod render;
mod scene_tree;
mod transforms;

#[cfg(test)]
mod tests;

pub use behavior::{CircleBody, NodeBehavior, Pivot};
pub use error::{Result, SceneError};
pub use node::Node;
pub use registry::{NodeRegistry, ObjectRegistry};
pub use render::{RenderSink, TransformStack};
pub use scene_tree::Scene;

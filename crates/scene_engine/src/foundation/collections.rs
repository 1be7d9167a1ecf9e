//! Handle types for arena-stored scene nodes

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a node in a [`Scene`](crate::scene::Scene)
    ///
    /// Handles stay valid until the node is destroyed; a destroyed node's
    /// handle is never reused for a different node.
    pub struct NodeId;
}

/// Arena of values keyed by [`NodeId`]
pub type NodeMap<T> = SlotMap<NodeId, T>;

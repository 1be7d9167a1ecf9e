//! Scene arena and hierarchy operations

use super::behavior::NodeBehavior;
use super::error::{Result, SceneError};
use super::node::Node;
use super::registry::{NodeRegistry, ObjectRegistry};
use crate::config::{Config, SceneConfig};
use crate::foundation::collections::{NodeId, NodeMap};
use log::{debug, warn};

/// Owner of all scene nodes
///
/// Nodes live in an arena and refer to each other by [`NodeId`]. The scene
/// owns one registry, injected at construction, which tracks the nodes that
/// take part in broad collision queries and lifecycle bookkeeping.
pub struct Scene {
    pub(crate) nodes: NodeMap<Node>,
    pub(crate) registry: Box<dyn NodeRegistry>,
    config: SceneConfig,
}

impl Scene {
    /// Create a scene with the default [`ObjectRegistry`]
    pub fn new(config: SceneConfig) -> Self {
        Self::with_registry(config, Box::new(ObjectRegistry::new()))
    }

    /// Create a scene around an existing registry
    pub fn with_registry(config: SceneConfig, registry: Box<dyn NodeRegistry>) -> Self {
        Self {
            nodes: NodeMap::with_key(),
            registry,
            config,
        }
    }

    /// Create a scene from a TOML or RON config file
    pub fn from_config_file(path: &str) -> Result<Self> {
        Ok(Self::new(SceneConfig::load_from_file(path)?))
    }

    /// Scene settings
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The scene's registry
    pub fn registry(&self) -> &dyn NodeRegistry {
        self.registry.as_ref()
    }

    /// Number of live nodes, registered or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the handle refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Whether the node is tracked by the registry
    pub fn is_registered(&self, id: NodeId) -> bool {
        self.registry.contains(id)
    }

    /// Create a root node, registering it when `auto_register` is set
    pub fn spawn(&mut self, name: impl Into<String>, behavior: impl NodeBehavior) -> NodeId {
        let id = self.spawn_unregistered(name, behavior);
        if self.config.auto_register {
            self.registry.add(id);
        }
        id
    }

    /// Create a root node that is never registered automatically
    pub fn spawn_unregistered(&mut self, name: impl Into<String>, behavior: impl NodeBehavior) -> NodeId {
        let node = Node::new(name.into(), Box::new(behavior));
        let id = self.nodes.insert(node);
        debug!("Spawned {} as {:?}", self.nodes[id], id);
        id
    }

    /// Add a node to the registry
    pub fn register(&mut self, id: NodeId) -> Result<()> {
        self.node(id)?;
        self.registry.add(id);
        Ok(())
    }

    /// Borrow a node
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(SceneError::InvalidNode(id))
    }

    /// Borrow a node mutably
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(SceneError::InvalidNode(id))
    }

    /// Parent of a node, `None` for a root
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Children of a node in render order
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    /// Position of a node among its parent's children, `None` for a root
    pub fn index(&self, id: NodeId) -> Result<Option<usize>> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(None);
        };
        Ok(self.nodes[parent].children.iter().position(|&c| c == id))
    }

    /// Move `child` under `parent`, or detach it with `None`.
    ///
    /// The child is always detached from its current parent first and then
    /// appended to the new parent's children. If `child` is `parent` or one of
    /// its ancestors the attach is refused and the child stays a root.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> Result<()> {
        self.node(child)?;
        if let Some(parent) = parent {
            self.node(parent)?;
        }

        self.detach(child);
        let Some(parent) = parent else {
            return Ok(());
        };

        if self.has_child(child, parent)? {
            debug!(
                "Refused to attach {} under {}: would create a cycle",
                self.nodes[child], self.nodes[parent]
            );
            return Ok(());
        }

        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);

        let depth = self.depth(child);
        if depth > self.config.depth_warning {
            warn!(
                "{} is {} levels deep; every world-space query walks the full chain",
                self.nodes[child], depth
            );
        }
        Ok(())
    }

    /// Append `child` to `parent`'s children
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.set_parent(child, Some(parent))
    }

    /// Detach `child` if it belongs to `parent`; otherwise nothing happens
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        if self.node(child)?.parent == Some(parent) {
            self.set_parent(child, None)?;
        }
        Ok(())
    }

    /// Insert `child` at `index` among `parent`'s children.
    ///
    /// Attaches the child first if needed. The index is clamped into the
    /// valid range, so negative values mean "first" and large values "last".
    pub fn add_child_at(&mut self, parent: NodeId, child: NodeId, index: isize) -> Result<()> {
        self.reposition(parent, child, index)
    }

    /// Move `child` to `index` among `parent`'s children; same rules as
    /// [`Scene::add_child_at`]
    pub fn set_child_index(&mut self, parent: NodeId, child: NodeId, index: isize) -> Result<()> {
        self.reposition(parent, child, index)
    }

    /// Whether `node` is `this` or a descendant of `this`
    pub fn has_child(&self, this: NodeId, node: NodeId) -> Result<bool> {
        self.node(this)?;
        self.node(node)?;

        let mut current = Some(node);
        while let Some(id) = current {
            if id == this {
                return Ok(true);
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        Ok(false)
    }

    fn reposition(&mut self, parent: NodeId, child: NodeId, index: isize) -> Result<()> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            self.add_child(parent, child)?;
            if self.nodes[child].parent != Some(parent) {
                return Ok(());
            }
        }

        let children = &mut self.nodes[parent].children;
        let last = children.len() - 1;
        let target = usize::try_from(index).map_or(0, |i| i.min(last));
        if let Some(current) = children.iter().position(|&c| c == child) {
            children.remove(current);
        }
        children.insert(target, child);
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old) = self.nodes[child].parent.take() {
            if let Some(parent) = self.nodes.get_mut(old) {
                parent.children.retain(|&c| c != child);
            }
        }
    }

    fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.nodes.get(parent).and_then(|n| n.parent);
        }
        depth
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

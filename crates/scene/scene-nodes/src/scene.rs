//! Arena-backed retained scene graph.
//!
//! [`Scene`] owns every node and implements [`LayoutHost`], so the engine can
//! walk it directly. Layout-relevant edits mark the scene dirty;
//! [`Scene::relayout`] runs the engine once per root and clears the flag.

use core::fmt;

use scene_layout::prelude::*;
use thiserror::Error;

use crate::node::{Color, NodeKind, SceneNode};
use crate::props::SizeProps;

/// Handle to a node in a [`Scene`]. Slots are never reused, so the handle of a
/// removed node stays dead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Arena slot of the node.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scene mutation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The id was never issued or the node has been removed.
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    /// Only containers own children.
    #[error("node {0} cannot have children")]
    NotAContainer(NodeId),

    /// Text edits on a non-text node.
    #[error("node {0} is not a text node")]
    NotText(NodeId),

    /// A raw size prop failed to parse.
    #[error(transparent)]
    InvalidSize(#[from] SizeParseError),
}

/// Retained scene graph
#[derive(Debug, Default)]
pub struct Scene {
    slots: Vec<Option<SceneNode>>,
    roots: Vec<NodeId>,
    content_area: Option<ContentArea>,
    dirty: bool,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, node: SceneNode) -> NodeId {
        // More than u32::MAX nodes cannot be laid out in any reasonable time.
        #[allow(clippy::cast_possible_truncation)]
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Some(node));
        self.dirty = true;
        id
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(SceneError::UnknownNode(id))
    }

    /// Adds a top-level node.
    pub fn add_root(&mut self, kind: NodeKind, spec: LayoutSpec) -> NodeId {
        let id = self.insert(SceneNode::new(kind, spec, None));
        self.roots.push(id);
        id
    }

    /// Appends a node to `parent`'s children.
    ///
    /// # Errors
    ///
    /// Fails when `parent` does not exist or is not a container.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        spec: LayoutSpec,
    ) -> Result<NodeId, SceneError> {
        if !self.get(parent).ok_or(SceneError::UnknownNode(parent))?.kind.is_container() {
            return Err(SceneError::NotAContainer(parent));
        }
        let id = self.insert(SceneNode::new(kind, spec, Some(parent)));
        self.get_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Removes `id` and its whole subtree.
    ///
    /// # Errors
    ///
    /// Fails when `id` does not exist.
    pub fn remove(&mut self, id: NodeId) -> Result<(), SceneError> {
        let parent = self.get(id).ok_or(SceneError::UnknownNode(id))?.parent;
        match parent {
            Some(parent) => self.get_mut(parent)?.children.retain(|&child| child != id),
            None => self.roots.retain(|&root| root != id),
        }

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.slots.get_mut(next.index()).and_then(Option::take) {
                pending.extend(node.children);
            }
        }

        tracing::debug!(%id, "node removed");
        self.dirty = true;
        Ok(())
    }

    /// Node by id, if alive.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.slots.get(id.index())?.as_ref()
    }

    /// Top-level nodes in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// `true` when the scene has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when a layout-relevant edit happened since the last
    /// [`relayout`](Self::relayout).
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replaces a node's spec. Returns whether it changed; only a change marks
    /// the scene dirty.
    ///
    /// # Errors
    ///
    /// Fails when `id` does not exist.
    pub fn set_spec(&mut self, id: NodeId, spec: LayoutSpec) -> Result<bool, SceneError> {
        let node = self.get_mut(id)?;
        if node.spec == spec {
            return Ok(false);
        }
        node.spec = spec;
        node.sync_clip_mask();
        tracing::trace!(%id, "layout spec changed");
        self.dirty = true;
        Ok(true)
    }

    /// Parses raw size props and applies them on top of the node's current
    /// spec.
    ///
    /// # Errors
    ///
    /// Fails when `id` does not exist or a prop does not parse; the node is
    /// left untouched in both cases.
    pub fn set_size_props(&mut self, id: NodeId, props: &SizeProps) -> Result<bool, SceneError> {
        let current = *self.get(id).ok_or(SceneError::UnknownNode(id))?.spec();
        let spec = props.apply(current)?;
        self.set_spec(id, spec)
    }

    /// Sets the fill colour. Never affects layout.
    ///
    /// # Errors
    ///
    /// Fails when `id` does not exist.
    pub fn set_fill(&mut self, id: NodeId, fill: Option<Color>) -> Result<(), SceneError> {
        self.get_mut(id)?.fill = fill;
        Ok(())
    }

    /// Replaces a text node's content. Returns whether it changed.
    ///
    /// # Errors
    ///
    /// Fails when `id` does not exist or is not a text node.
    pub fn set_text(&mut self, id: NodeId, content: &str) -> Result<bool, SceneError> {
        let NodeKind::Text(text) = &mut self.get_mut(id)?.kind else {
            return Err(SceneError::NotText(id));
        };
        let changed = text.set_content(content);
        self.dirty |= changed;
        Ok(changed)
    }

    /// Gives the node a hit area that follows its laid-out size.
    ///
    /// # Errors
    ///
    /// Fails when `id` does not exist.
    pub fn enable_hit_area(&mut self, id: NodeId) -> Result<(), SceneError> {
        let node = self.get_mut(id)?;
        node.hit_area = Some(node.size);
        Ok(())
    }

    /// Overrides the roots' percentage basis (viewport by default).
    pub fn set_content_area(&mut self, content_area: Option<ContentArea>) {
        if self.content_area != content_area {
            self.content_area = content_area;
            self.dirty = true;
        }
    }

    /// Lays out every root if the scene is dirty. Returns whether a pass ran.
    pub fn relayout(&mut self, engine: &LayoutEngine) -> bool {
        if !self.dirty {
            tracing::trace!("scene clean, layout skipped");
            return false;
        }

        let _span = tracing::debug_span!("relayout", roots = self.roots.len()).entered();
        let roots = self.roots.clone();
        let content_area = self.content_area;
        for root in roots {
            engine.layout(self, root, content_area);
        }
        self.dirty = false;
        true
    }

    /// Last committed box of `id`.
    pub fn computed(&self, id: NodeId) -> Option<ComputedBox> {
        self.get(id).map(SceneNode::computed)
    }

    /// Hit area of `id`, if enabled.
    pub fn hit_area(&self, id: NodeId) -> Option<Size> {
        self.get(id)?.hit_area()
    }

    /// Clip mask of `id`, present while its overflow is hidden.
    pub fn clip_mask(&self, id: NodeId) -> Option<Size> {
        self.get(id)?.clip_mask()
    }
}

impl LayoutHost for Scene {
    type NodeId = NodeId;

    fn node(&self, id: NodeId) -> Option<&dyn LayoutNode> {
        self.get(id).map(|node| node as &dyn LayoutNode)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut dyn LayoutNode> {
        self.slots
            .get_mut(id.index())?
            .as_mut()
            .map(|node| node as &mut dyn LayoutNode)
    }

    fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        let node = self.get(id)?;
        node.kind
            .is_container()
            .then_some(node.children.as_slice())
    }
}

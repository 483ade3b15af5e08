//! Scene node kinds and per-node state.
//!
//! Every kind answers the same [`LayoutNode`] queries; the engine never
//! inspects [`NodeKind`] itself.

use scene_layout::prelude::*;

use crate::image::Image;
use crate::scene::NodeId;
use crate::text::Text;

/// Packed `0xRRGGBBAA` fill colour.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Self = Self(0x0000_00FF);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Builds a colour from its channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }
}

/// What a node draws and how it sizes itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum NodeKind {
    /// Lays out children; sized by them unless its spec says otherwise.
    Container,
    /// Text measured on a monospace grid.
    Text(Text),
    /// Bitmap with a natural size.
    Image(Image),
    /// Fill behind its parent's content; covers the parent's box and takes
    /// no part in flow.
    Background,
    /// Host-drawn surface with no content of its own. Reports a
    /// near-zero size so the host can tell it apart from an unmeasured
    /// node.
    Overlay,
}

impl NodeKind {
    /// Returns `true` for kinds that own children.
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Container)
    }
}

/// One node of a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub(crate) kind: NodeKind,
    pub(crate) spec: LayoutSpec,
    pub(crate) fill: Option<Color>,
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) hit_area: Option<Size>,
    pub(crate) clip_mask: Option<Size>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl SceneNode {
    pub(crate) fn new(kind: NodeKind, spec: LayoutSpec, parent: Option<NodeId>) -> Self {
        let mut node = Self {
            kind,
            spec,
            fill: None,
            position: Point::ZERO,
            size: Size::ZERO,
            hit_area: None,
            clip_mask: None,
            parent,
            children: Vec::new(),
        };
        node.sync_clip_mask();
        node
    }

    /// The node's kind.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node's current layout spec.
    pub fn spec(&self) -> &LayoutSpec {
        &self.spec
    }

    /// Fill colour, if any.
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Last committed box.
    pub fn computed(&self) -> ComputedBox {
        ComputedBox::from_parts(self.position, self.size)
    }

    /// Hit-test rectangle size, when the node accepts input.
    pub fn hit_area(&self) -> Option<Size> {
        self.hit_area
    }

    /// Clip rectangle size, when the node clips its children.
    pub fn clip_mask(&self) -> Option<Size> {
        self.clip_mask
    }

    /// Parent node, `None` for roots.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in flow order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn sync_clip_mask(&mut self) {
        self.clip_mask = match self.spec.overflow {
            Overflow::Hidden => Some(self.size),
            Overflow::Visible => None,
        };
    }
}

impl LayoutNode for SceneNode {
    fn layout_spec(&self) -> &LayoutSpec {
        &self.spec
    }

    fn intrinsic_size(&self) -> Size {
        match &self.kind {
            NodeKind::Text(text) => text.dimensions(),
            NodeKind::Image(image) => image.dimensions(),
            NodeKind::Overlay => Size::SENTINEL,
            NodeKind::Container | NodeKind::Background => Size::ZERO,
        }
    }

    fn is_decorative(&self) -> bool {
        matches!(self.kind, NodeKind::Background)
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
        if let Some(hit_area) = self.hit_area.as_mut() {
            *hit_area = size;
        }
        self.sync_clip_mask();
    }
}

//! Geometry types and the size provider protocol.
//!
//! The engine never owns scene nodes. It reads them through two traits:
//!
//! - [`LayoutNode`]: the per-node capability (spec, intrinsic size, decorative
//!   flag, position/size setters).
//! - [`LayoutHost`]: access to the tree itself (node lookup and ordered child
//!   lists).
//!
//! # Example
//!
//! ```rust
//! use scene_layout::layout::{LayoutNode, Point, Size};
//! use scene_layout::style::LayoutSpec;
//!
//! struct Label {
//!     spec: LayoutSpec,
//!     chars: usize,
//!     position: Point,
//!     size: Size,
//! }
//!
//! impl LayoutNode for Label {
//!     fn layout_spec(&self) -> &LayoutSpec {
//!         &self.spec
//!     }
//!
//!     fn intrinsic_size(&self) -> Size {
//!         Size::new(self.chars as f32 * 8.0, 16.0)
//!     }
//!
//!     fn set_position(&mut self, position: Point) {
//!         self.position = position;
//!     }
//!
//!     fn set_size(&mut self, size: Size) {
//!         self.size = size;
//!     }
//! }
//!
//! let label = Label {
//!     spec: LayoutSpec::new(),
//!     chars: 5,
//!     position: Point::ZERO,
//!     size: Size::ZERO,
//! };
//! assert_eq!(label.intrinsic_size(), Size::new(40.0, 16.0));
//! ```

use core::fmt;
use core::hash::Hash;

use crate::context::KnownSize;
use crate::style::LayoutSpec;

/// One of the two layout axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (widths).
    Horizontal,
    /// The y axis (heights).
    Vertical,
}

impl Axis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Minimal non-zero size reported by nodes that must stay positionable
    /// without taking up room (pure visual overlays).
    ///
    /// Some hosts treat an exact zero size as "uninitialised", so overlays
    /// report this instead of [`Size::ZERO`].
    pub const SENTINEL: Self = Self::new(0.01, 0.01);

    /// Creates a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Builds a size from main/cross extents for the given main axis.
    #[must_use]
    pub const fn from_axes(main_axis: Axis, main: f32, cross: f32) -> Self {
        match main_axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// Extent along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Clamps both extents to be non-negative.
    #[must_use]
    pub fn non_negative(self) -> Self {
        Self::new(self.width.max(0.0), self.height.max(0.0))
    }
}

/// A position in a parent's local coordinate space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal offset from the parent's left edge.
    pub x: f32,
    /// Vertical offset from the parent's top edge.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds a point from main/cross offsets for the given main axis.
    #[must_use]
    pub const fn from_axes(main_axis: Axis, main: f32, cross: f32) -> Self {
        match main_axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }
}

/// Final box assigned to a node, in its parent's local coordinate space.
///
/// Produced fresh by every layout pass. All four fields are non-negative.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputedBox {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl ComputedBox {
    /// Creates a box, clamping every component to be non-negative.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: x.max(0.0),
            y: y.max(0.0),
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Creates a box from a position and a size.
    #[must_use]
    pub fn from_parts(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Per-axis booleans, used to record which axes a parent fixed for a child.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AxisFlags {
    /// Flag for the horizontal axis.
    pub horizontal: bool,
    /// Flag for the vertical axis.
    pub vertical: bool,
}

impl AxisFlags {
    /// Both flags cleared.
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };

    /// Reads the flag for `axis`.
    #[must_use]
    pub const fn get(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Sets the flag for `axis`.
    pub fn set(&mut self, axis: Axis, value: bool) {
        match axis {
            Axis::Horizontal => self.horizontal = value,
            Axis::Vertical => self.vertical = value,
        }
    }

    /// Keeps the extents of `size` on flagged axes only.
    #[must_use]
    pub fn select(self, size: Size) -> KnownSize {
        KnownSize {
            width: self.horizontal.then_some(size.width),
            height: self.vertical.then_some(size.height),
        }
    }
}

/// Capability every layout-participating node exposes.
///
/// Concrete node kinds (text, image, container, background fill) all sit
/// behind this trait; the algorithm never switches on the kind.
pub trait LayoutNode {
    /// The node's current layout spec. Replaced wholesale on prop updates.
    fn layout_spec(&self) -> &LayoutSpec;

    /// Natural, content-driven size.
    ///
    /// # Contract
    ///
    /// - Cheap and free of side effects; it may be called several times per
    ///   pass.
    /// - Reports unrotated, unscaled dimensions. Rotation and scale are
    ///   visual transforms applied after layout.
    /// - Nodes that must stay positionable without taking up space return
    ///   [`Size::SENTINEL`] rather than [`Size::ZERO`].
    fn intrinsic_size(&self) -> Size;

    /// Decorative nodes (e.g. a container's background fill) are excluded
    /// from sizing and spacing but resized to cover their container.
    fn is_decorative(&self) -> bool {
        false
    }

    /// Moves the node within its parent's local space.
    fn set_position(&mut self, position: Point);

    /// Resizes the node. Hosts also resize any hit-test geometry or clip
    /// mask that tracks the node here.
    fn set_size(&mut self, size: Size);
}

/// Tree access the engine needs from the rendering host.
pub trait LayoutHost {
    /// Stable node identity within the host.
    type NodeId: Copy + Eq + Hash + fmt::Debug;

    /// Returns the node's layout capability, or `None` when the node does not
    /// expose one.
    fn node(&self, id: Self::NodeId) -> Option<&dyn LayoutNode>;

    /// Mutable variant of [`node`](Self::node).
    fn node_mut(&mut self, id: Self::NodeId) -> Option<&mut dyn LayoutNode>;

    /// Ordered children of a container, or `None` for leaf nodes.
    fn children(&self, id: Self::NodeId) -> Option<&[Self::NodeId]>;
}

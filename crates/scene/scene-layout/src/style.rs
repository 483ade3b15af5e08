//! Per-node layout configuration.
//!
//! # Core Types
//!
//! - [`Edges`] - Margin/padding insets (top, right, bottom, left)
//! - [`Direction`] - Row, column, or stacked flow
//! - [`FlexWrap`] - Single or multi-line flow
//! - [`Justify`] - Main axis distribution (also used for line packing)
//! - [`Align`] - Cross axis alignment
//! - [`Overflow`] - Whether the node clips its children
//! - [`LayoutSpec`] - Complete per-node configuration
//!
//! # Example
//!
//! ```
//! use scene_layout::size::SizeValue;
//! use scene_layout::style::*;
//!
//! let toolbar = LayoutSpec::row()
//!     .width(SizeValue::Percent(100.0))
//!     .padding(Edges::horizontal_vertical(16.0, 8.0))
//!     .gap(12.0)
//!     .justify_content(Justify::SpaceBetween)
//!     .align_items(Align::Center);
//!
//! assert_eq!(toolbar.direction, Direction::Row);
//! assert_eq!(toolbar.flex_shrink, 1.0);
//! ```

use crate::layout::Axis;
use crate::size::SizeValue;

/// Edge insets for margins and padding.
///
/// Follows CSS box model convention: top, right, bottom, left.
///
/// # Examples
///
/// ```
/// use scene_layout::style::Edges;
///
/// let uniform = Edges::all(16.0);
/// assert_eq!(uniform.top, 16.0);
///
/// let hv = Edges::horizontal_vertical(24.0, 12.0);
/// assert_eq!(hv.left, 24.0);
/// assert_eq!(hv.top, 12.0);
/// assert_eq!(hv.horizontal(), 48.0);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Edges {
    /// Top edge inset in pixels.
    pub top: f32,

    /// Right edge inset in pixels.
    pub right: f32,

    /// Bottom edge inset in pixels.
    pub bottom: f32,

    /// Left edge inset in pixels.
    pub left: f32,
}

impl Edges {
    /// No insets.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates edges with all sides set to the same value.
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Alias for [`all`](Self::all) for CSS-like naming.
    pub const fn uniform(value: f32) -> Self {
        Self::all(value)
    }

    /// Creates edges with individual values for each side.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates edges with separate horizontal and vertical values.
    pub const fn horizontal_vertical(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal space (left + right).
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical space (top + bottom).
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }

    /// Total space along `axis`.
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    /// Leading inset on `axis` (left or top).
    pub const fn start(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Trailing inset on `axis` (right or bottom).
    pub const fn end(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }
}

/// Flow direction of a container's children.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    /// Horizontal flow, left to right.
    #[default]
    Row,

    /// Vertical flow, top to bottom.
    Column,

    /// Children overlaid at the content origin.
    Stack,
}

impl Direction {
    /// The main axis. `Stack` reports horizontal, the axis `justify_content`
    /// acts on for stacked children.
    pub const fn main_axis(self) -> Axis {
        match self {
            Self::Row | Self::Stack => Axis::Horizontal,
            Self::Column => Axis::Vertical,
        }
    }

    /// Returns `true` for [`Direction::Stack`].
    pub const fn is_stack(self) -> bool {
        matches!(self, Self::Stack)
    }
}

/// Whether children may flow onto additional lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FlexWrap {
    /// All children on one line.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "nowrap"))]
    NoWrap,

    /// Break onto new lines along the cross axis.
    Wrap,

    /// Break onto new lines, stacking lines in reverse order.
    WrapReverse,
}

impl FlexWrap {
    /// Returns `true` for the multi-line modes.
    pub const fn is_wrapping(self) -> bool {
        !matches!(self, Self::NoWrap)
    }
}

/// Main axis distribution (`justify_content`), also used for line packing
/// (`align_content`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Justify {
    /// Pack at the start.
    #[default]
    Start,

    /// Pack at the end.
    End,

    /// Center.
    Center,

    /// First at start, last at end, equal spacing between.
    SpaceBetween,

    /// Equal spacing around each item; edge spacing is half the inner one.
    SpaceAround,

    /// All spacing (edge and inter-item) equal.
    SpaceEvenly,
}

impl Justify {
    /// Leading offset and extra per-item spacing for `count` items sharing
    /// `remaining` free space. Negative free space is treated as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use scene_layout::style::Justify;
    ///
    /// assert_eq!(Justify::Center.distribute(100.0, 3), (50.0, 0.0));
    /// assert_eq!(Justify::SpaceBetween.distribute(100.0, 3), (0.0, 50.0));
    /// assert_eq!(Justify::SpaceEvenly.distribute(100.0, 3), (25.0, 25.0));
    /// assert_eq!(Justify::End.distribute(-40.0, 2), (0.0, 0.0));
    /// ```
    pub fn distribute(self, remaining: f32, count: usize) -> (f32, f32) {
        let remaining = remaining.max(0.0);
        // Item counts are far below f32's exact integer range.
        #[allow(clippy::cast_precision_loss)]
        let n = count as f32;

        match self {
            Self::Start => (0.0, 0.0),
            Self::Center => (remaining / 2.0, 0.0),
            Self::End => (remaining, 0.0),
            Self::SpaceBetween if count > 1 => (0.0, remaining / (n - 1.0)),
            Self::SpaceBetween => (0.0, 0.0),
            Self::SpaceAround if count > 0 => {
                let spacing = remaining / n;
                (spacing / 2.0, spacing)
            }
            Self::SpaceAround => (0.0, 0.0),
            Self::SpaceEvenly => {
                let spacing = remaining / (n + 1.0);
                (spacing, spacing)
            }
        }
    }
}

/// Cross axis alignment (`align_items`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Align {
    /// Align at the start of the line.
    #[default]
    Start,

    /// Align at the end of the line.
    End,

    /// Center within the line.
    Center,

    /// Fill the line's cross thickness (auto cross sizes only).
    Stretch,
}

impl Align {
    /// Offset of an item of thickness `used` within `available`.
    pub fn offset(self, available: f32, used: f32) -> f32 {
        let free = (available - used).max(0.0);
        match self {
            Self::Start | Self::Stretch => 0.0,
            Self::Center => free / 2.0,
            Self::End => free,
        }
    }
}

/// Whether a node clips its children to its own box.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Overflow {
    /// Children may paint outside.
    #[default]
    Visible,

    /// Children are clipped.
    Hidden,
}

/// Complete layout configuration of a node.
///
/// Replaced wholesale whenever a layout-relevant prop changes.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutSpec {
    /// Flow direction of children.
    pub direction: Direction,

    /// Width of the node.
    pub width: SizeValue,

    /// Height of the node.
    pub height: SizeValue,

    /// Lower width bound.
    pub min_width: SizeValue,

    /// Upper width bound.
    pub max_width: SizeValue,

    /// Lower height bound.
    pub min_height: SizeValue,

    /// Upper height bound.
    pub max_height: SizeValue,

    /// Outer spacing.
    pub margin: Edges,

    /// Inner spacing.
    pub padding: Edges,

    /// Spacing between adjacent children and between lines.
    pub gap: f32,

    /// Share of leftover main-axis space. `0` keeps the node rigid.
    #[cfg_attr(feature = "serde", serde(alias = "flex"))]
    pub flex_grow: f32,

    /// Share of main-axis overflow to absorb, weighted by the base size.
    pub flex_shrink: f32,

    /// Main-axis base size before flexing.
    pub flex_basis: SizeValue,

    /// Single or multi-line flow.
    pub flex_wrap: FlexWrap,

    /// Main axis distribution.
    pub justify_content: Justify,

    /// Cross axis alignment.
    pub align_items: Align,

    /// Line packing for multi-line containers.
    pub align_content: Justify,

    /// Clipping behaviour.
    pub overflow: Overflow,
}

impl LayoutSpec {
    /// Creates a spec with all default values.
    pub const fn new() -> Self {
        Self {
            direction: Direction::Row,
            width: SizeValue::Auto,
            height: SizeValue::Auto,
            min_width: SizeValue::Auto,
            max_width: SizeValue::Auto,
            min_height: SizeValue::Auto,
            max_height: SizeValue::Auto,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            gap: 0.0,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: SizeValue::Auto,
            flex_wrap: FlexWrap::NoWrap,
            justify_content: Justify::Start,
            align_items: Align::Start,
            align_content: Justify::Start,
            overflow: Overflow::Visible,
        }
    }

    /// A row container.
    pub const fn row() -> Self {
        Self::new().direction(Direction::Row)
    }

    /// A column container.
    pub const fn column() -> Self {
        Self::new().direction(Direction::Column)
    }

    /// A stacking container.
    pub const fn stack() -> Self {
        Self::new().direction(Direction::Stack)
    }

    /// Width or height, depending on `axis`.
    pub const fn size(&self, axis: Axis) -> SizeValue {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Builder method to set the direction.
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Builder method to set width.
    pub const fn width(mut self, width: SizeValue) -> Self {
        self.width = width;
        self
    }

    /// Builder method to set height.
    pub const fn height(mut self, height: SizeValue) -> Self {
        self.height = height;
        self
    }

    /// Builder method to set the lower width bound.
    pub const fn min_width(mut self, value: SizeValue) -> Self {
        self.min_width = value;
        self
    }

    /// Builder method to set the upper width bound.
    pub const fn max_width(mut self, value: SizeValue) -> Self {
        self.max_width = value;
        self
    }

    /// Builder method to set the lower height bound.
    pub const fn min_height(mut self, value: SizeValue) -> Self {
        self.min_height = value;
        self
    }

    /// Builder method to set the upper height bound.
    pub const fn max_height(mut self, value: SizeValue) -> Self {
        self.max_height = value;
        self
    }

    /// Builder method to set margin.
    pub const fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Builder method to set padding.
    pub const fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Builder method to set the gap.
    pub const fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Builder method to set the grow factor.
    pub const fn flex_grow(mut self, grow: f32) -> Self {
        self.flex_grow = grow;
        self
    }

    /// Builder method to set the shrink factor.
    pub const fn flex_shrink(mut self, shrink: f32) -> Self {
        self.flex_shrink = shrink;
        self
    }

    /// Builder method to set the flex basis.
    pub const fn flex_basis(mut self, basis: SizeValue) -> Self {
        self.flex_basis = basis;
        self
    }

    /// Builder method to set wrapping.
    pub const fn flex_wrap(mut self, wrap: FlexWrap) -> Self {
        self.flex_wrap = wrap;
        self
    }

    /// Builder method to set justify content.
    pub const fn justify_content(mut self, justify: Justify) -> Self {
        self.justify_content = justify;
        self
    }

    /// Builder method to set align items.
    pub const fn align_items(mut self, align: Align) -> Self {
        self.align_items = align;
        self
    }

    /// Builder method to set align content.
    pub const fn align_content(mut self, align: Justify) -> Self {
        self.align_content = align;
        self
    }

    /// Builder method to set overflow.
    pub const fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::new()
    }
}

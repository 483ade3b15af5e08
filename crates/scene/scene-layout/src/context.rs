//! Percentage-context propagation.
//!
//! Percentages resolve against the content-area of the nearest ancestor whose
//! size is known on that axis. The area is threaded explicitly through every
//! recursive call: a container whose size on an axis is explicit (or fixed by
//! its parent through flex or stretch) hands its own content-area to its
//! children on that axis; a content-sized axis passes the inherited value on.

use crate::layout::{Axis, Size};
use crate::size::ViewportAxis;
use crate::style::{Edges, LayoutSpec};

/// The global viewport used by `vw`/`vh` units and as the default root
/// content-area.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent referenced by a `vw`/`vh` unit.
    pub const fn extent(self, axis: ViewportAxis) -> f32 {
        match axis {
            ViewportAxis::Width => self.width,
            ViewportAxis::Height => self.height,
        }
    }
}

/// Width and height percentages resolve against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContentArea {
    /// Basis for horizontal percentages.
    pub width: f32,
    /// Basis for vertical percentages.
    pub height: f32,
}

impl ContentArea {
    /// Creates a content-area.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The root content-area when the caller supplies none.
    pub const fn from_viewport(viewport: Viewport) -> Self {
        Self::new(viewport.width, viewport.height)
    }

    /// Basis along `axis`.
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Content-area a container hands to its children.
    ///
    /// `fixed` holds the container's outer size on the axes where that size
    /// does not depend on its children.
    ///
    /// # Example
    ///
    /// ```
    /// use scene_layout::context::{ContentArea, KnownSize};
    /// use scene_layout::style::Edges;
    ///
    /// let inherited = ContentArea::new(1280.0, 720.0);
    /// let fixed = KnownSize { width: Some(1000.0), height: None };
    ///
    /// let area = inherited.for_children(fixed, Edges::all(50.0));
    /// assert_eq!(area, ContentArea::new(900.0, 720.0));
    /// ```
    #[must_use]
    pub fn for_children(self, fixed: KnownSize, padding: Edges) -> Self {
        Self {
            width: fixed
                .width
                .map_or(self.width, |w| (w - padding.horizontal()).max(0.0)),
            height: fixed
                .height
                .map_or(self.height, |h| (h - padding.vertical()).max(0.0)),
        }
    }
}

/// Outer size of a node on the axes where it is already decided.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct KnownSize {
    /// Known width.
    pub width: Option<f32>,
    /// Known height.
    pub height: Option<f32>,
}

impl KnownSize {
    /// Nothing known.
    pub const UNKNOWN: Self = Self {
        width: None,
        height: None,
    };

    /// Both axes known.
    pub const fn exact(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }

    /// Value along `axis`.
    pub const fn along(self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Replaces the value along `axis`.
    #[must_use]
    pub const fn with(mut self, axis: Axis, value: Option<f32>) -> Self {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
        self
    }
}

/// Resolved min/max bounds of a node.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SizeBounds {
    /// Lower bounds (zero when unset).
    pub min: Size,
    /// Upper bounds (infinite when unset).
    pub max: Size,
}

impl SizeBounds {
    /// No constraints.
    pub const UNBOUNDED: Self = Self {
        min: Size::ZERO,
        max: Size::new(f32::INFINITY, f32::INFINITY),
    };

    /// Clamps `value` on `axis`. When `min > max`, max wins.
    pub fn clamp(&self, axis: Axis, value: f32) -> f32 {
        value.max(self.min.along(axis)).min(self.max.along(axis))
    }

    /// Lower bound on `axis`, never above the upper bound.
    pub fn min_along(&self, axis: Axis) -> f32 {
        self.min.along(axis).min(self.max.along(axis))
    }

    /// Upper bound on `axis`.
    pub const fn max_along(&self, axis: Axis) -> f32 {
        self.max.along(axis)
    }
}

/// Resolves a spec's min/max against `basis`.
pub fn resolve_bounds(spec: &LayoutSpec, basis: ContentArea, viewport: Viewport) -> SizeBounds {
    let bound = |value: crate::size::SizeValue, reference: f32, unset: f32| {
        value
            .resolve_explicit(reference, viewport)
            .map_or(unset, |v| v.max(0.0))
    };

    let bounds = SizeBounds {
        min: Size::new(
            bound(spec.min_width, basis.width, 0.0),
            bound(spec.min_height, basis.height, 0.0),
        ),
        max: Size::new(
            bound(spec.max_width, basis.width, f32::INFINITY),
            bound(spec.max_height, basis.height, f32::INFINITY),
        ),
    };

    if bounds.min.width > bounds.max.width || bounds.min.height > bounds.max.height {
        tracing::debug!(
            min = ?bounds.min,
            max = ?bounds.max,
            "min exceeds max, max wins"
        );
    }

    bounds
}

/// Resolves a spec's explicit width/height against `basis`, clamped by its
/// min/max. Axes sized by content stay `None`.
pub fn resolve_known(spec: &LayoutSpec, basis: ContentArea, viewport: Viewport) -> KnownSize {
    let bounds = resolve_bounds(spec, basis, viewport);
    let explicit = |axis: Axis| {
        spec.size(axis)
            .resolve_explicit(basis.along(axis), viewport)
            .map(|value| bounds.clamp(axis, value.max(0.0)))
    };

    KnownSize {
        width: explicit(Axis::Horizontal),
        height: explicit(Axis::Vertical),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::SizeValue;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 720.0);

    #[test]
    fn test_for_children_passes_auto_axes_through() {
        let inherited = ContentArea::new(500.0, 400.0);
        let area = inherited.for_children(KnownSize::UNKNOWN, Edges::all(10.0));
        assert_eq!(area, inherited);
    }

    #[test]
    fn test_for_children_subtracts_padding() {
        let inherited = ContentArea::new(500.0, 400.0);
        let fixed = KnownSize::exact(Size::new(300.0, 200.0));
        let area = inherited.for_children(fixed, Edges::new(5.0, 10.0, 15.0, 20.0));
        assert_eq!(area, ContentArea::new(270.0, 180.0));
    }

    #[test]
    fn test_for_children_never_negative() {
        let fixed = KnownSize::exact(Size::new(10.0, 10.0));
        let area = ContentArea::new(1.0, 1.0).for_children(fixed, Edges::all(20.0));
        assert_eq!(area, ContentArea::new(0.0, 0.0));
    }

    #[test]
    fn test_bounds_max_wins() {
        let spec = LayoutSpec::new()
            .min_width(SizeValue::Fixed(300.0))
            .max_width(SizeValue::Fixed(200.0));
        let bounds = resolve_bounds(&spec, ContentArea::new(1000.0, 1000.0), VIEWPORT);
        assert_eq!(bounds.clamp(Axis::Horizontal, 50.0), 200.0);
        assert_eq!(bounds.clamp(Axis::Horizontal, 500.0), 200.0);
        assert_eq!(bounds.min_along(Axis::Horizontal), 200.0);
    }

    #[test]
    fn test_bounds_resolve_percentages() {
        let spec = LayoutSpec::new()
            .max_width(SizeValue::Percent(100.0))
            .min_height(SizeValue::Percent(10.0));
        let bounds = resolve_bounds(&spec, ContentArea::new(900.0, 700.0), VIEWPORT);
        assert_eq!(bounds.max.width, 900.0);
        assert_eq!(bounds.min.height, 70.0);
        assert_eq!(bounds.max.height, f32::INFINITY);
    }

    #[test]
    fn test_resolve_known() {
        let spec = LayoutSpec::new()
            .width(SizeValue::Percent(50.0))
            .max_width(SizeValue::Fixed(100.0));
        let known = resolve_known(&spec, ContentArea::new(400.0, 300.0), VIEWPORT);
        assert_eq!(known.width, Some(100.0));
        assert_eq!(known.height, None);
    }

    #[test]
    fn test_resolve_known_negative_fixed_reads_as_zero() {
        let spec = LayoutSpec::new().height(SizeValue::Fixed(-20.0));
        let known = resolve_known(&spec, ContentArea::new(400.0, 300.0), VIEWPORT);
        assert_eq!(known.height, Some(0.0));
    }
}

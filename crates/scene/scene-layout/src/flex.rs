//! Box layout algorithm.
//!
//! Places the direct children of one container. Nested containers are
//! handled by the [engine](crate::engine), which measures them first and
//! hands their content-driven size in as the child's natural size.
//!
//! # Layout Algorithm
//!
//! 1. **Base sizes**: `flex_basis`, else explicit width/height, else the
//!    natural size; then clamped by min/max (max wins on conflict)
//! 2. **Lines**: wrapping containers break a line when the next child's outer
//!    size plus gap would exceed the main content size
//! 3. **Flex**: per line, leftover space grows children by `flex_grow`,
//!    overflow shrinks them by `flex_shrink × base`; children clamped by
//!    min/max are frozen and the rest redistributed
//! 4. **Re-measure**: children whose main size changed and whose cross size
//!    is auto get a new cross size from the caller
//! 5. **Main placement**: `justify_content` plus `gap`
//! 6. **Cross placement**: `align_items` within each line, `align_content`
//!    across lines (`wrap-reverse` flips line order)
//! 7. **Container size**: explicit, or the lines' bounding box plus padding
//!    clamped by the container's own min/max
//!
//! `stack` containers skip lines and flex: every child sits at the content
//! origin, offset by `justify_content` horizontally and `align_items`
//! vertically.
//!
//! # Examples
//!
//! ```
//! use scene_layout::context::{ContentArea, Viewport};
//! use scene_layout::flex::{ChildLayout, ContainerFrame, FlexLayout};
//! use scene_layout::layout::{Point, Size};
//! use scene_layout::style::{Justify, LayoutSpec};
//!
//! let spec = LayoutSpec::row().justify_content(Justify::SpaceBetween).gap(8.0);
//! let children = vec![
//!     ChildLayout::new(LayoutSpec::new(), Size::new(50.0, 50.0)),
//!     ChildLayout::new(LayoutSpec::new(), Size::new(50.0, 50.0)),
//! ];
//!
//! let layout = FlexLayout::new(&spec, Viewport::new(1280.0, 720.0));
//! let outcome = layout.layout(ContainerFrame::tight(Size::new(200.0, 100.0)), &children);
//!
//! assert_eq!(outcome.children[1].position, Point::new(150.0, 0.0));
//! ```

use core::ops::Range;

use crate::context::{resolve_bounds, ContentArea, KnownSize, SizeBounds, Viewport};
use crate::layout::{Axis, AxisFlags, Point, Size};
use crate::style::{Align, FlexWrap, LayoutSpec};

/// Tolerance for float comparisons during flex distribution.
const EPSILON: f32 = 1e-3;

/// A child taking part in box layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildLayout {
    /// The child's layout spec.
    pub spec: LayoutSpec,
    /// Intrinsic size for leaves, content-driven size for containers.
    pub natural: Size,
}

impl ChildLayout {
    /// Creates a new child layout.
    pub const fn new(spec: LayoutSpec, natural: Size) -> Self {
        Self { spec, natural }
    }
}

/// Result of laying out a single child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildLayoutResult {
    /// Top-left corner in the container's local space (padding included).
    pub position: Point,
    /// Final size.
    pub size: Size,
    /// Index of the line the child was packed into.
    pub line: usize,
    /// Axes whose size did not come from the child's own content (explicit,
    /// flexed or stretched).
    pub fixed: AxisFlags,
    /// The child's own min/max, resolved against the container's basis.
    pub bounds: SizeBounds,
}

/// Geometry a container is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerFrame {
    /// Outer size on the axes already decided.
    pub known: KnownSize,
    /// The container's own min/max, applied to content-sized axes.
    pub bounds: SizeBounds,
    /// Percentage basis for the children.
    pub basis: ContentArea,
}

impl ContainerFrame {
    /// A frame with both axes decided and no padding-adjusted basis.
    pub const fn tight(size: Size) -> Self {
        Self {
            known: KnownSize::exact(size),
            bounds: SizeBounds::UNBOUNDED,
            basis: ContentArea::new(size.width, size.height),
        }
    }

    /// A frame sized entirely by its content.
    pub const fn content_sized(basis: ContentArea) -> Self {
        Self {
            known: KnownSize::UNKNOWN,
            bounds: SizeBounds::UNBOUNDED,
            basis,
        }
    }

    /// Replaces the known outer size.
    #[must_use]
    pub const fn with_known(mut self, known: KnownSize) -> Self {
        self.known = known;
        self
    }

    /// Replaces the container's own bounds.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: SizeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replaces the children's percentage basis.
    #[must_use]
    pub const fn with_basis(mut self, basis: ContentArea) -> Self {
        self.basis = basis;
        self
    }
}

/// Outcome of one container layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexOutcome {
    /// The container's outer size.
    pub size: Size,
    /// One result per child, in child order.
    pub children: Vec<ChildLayoutResult>,
    /// Number of lines the children were packed into.
    pub lines: usize,
}

/// Box layout for one container.
#[derive(Debug, Clone, Copy)]
pub struct FlexLayout<'a> {
    spec: &'a LayoutSpec,
    viewport: Viewport,
}

/// Internal representation of a flex item during layout computation.
#[derive(Debug, Clone, Copy)]
struct FlexItem {
    /// Natural main size, before any explicit sizing.
    natural_main: f32,
    /// Base size clamped by min/max.
    hypothetical: f32,
    /// Target main size (after flex).
    main: f32,
    /// Cross size.
    cross: f32,
    min_main: f32,
    max_main: f32,
    min_cross: f32,
    max_cross: f32,
    margin_main: (f32, f32),
    margin_cross: (f32, f32),
    grow: f32,
    shrink: f32,
    fixed: AxisFlags,
    bounds: SizeBounds,
    frozen: bool,
}

impl FlexItem {
    fn outer_main(&self) -> f32 {
        self.main + self.margin_main.0 + self.margin_main.1
    }

    fn outer_hypothetical(&self) -> f32 {
        self.hypothetical + self.margin_main.0 + self.margin_main.1
    }

    fn outer_cross(&self) -> f32 {
        self.cross + self.margin_cross.0 + self.margin_cross.1
    }

    fn clamp_main(&self, value: f32) -> f32 {
        value.max(0.0).max(self.min_main).min(self.max_main)
    }

    fn clamp_cross(&self, value: f32) -> f32 {
        value.max(0.0).max(self.min_cross).min(self.max_cross)
    }

    fn flex_weight(&self, growing: bool) -> f32 {
        if growing {
            self.grow
        } else {
            self.shrink * self.hypothetical
        }
    }
}

/// One packed line.
#[derive(Debug, Clone)]
struct FlexLine {
    items: Range<usize>,
    cross: f32,
    offset: f32,
}

impl<'a> FlexLayout<'a> {
    /// Creates a layout for a container with the given spec.
    pub const fn new(spec: &'a LayoutSpec, viewport: Viewport) -> Self {
        Self { spec, viewport }
    }

    /// Lays out children that never need re-measuring (leaves).
    pub fn layout(&self, frame: ContainerFrame, children: &[ChildLayout]) -> FlexOutcome {
        self.layout_with(frame, children, &mut |_, _, _| None)
    }

    /// Lays out children.
    ///
    /// `remeasure(index, axis, extent)` is asked for the other-axis size of
    /// child `index` once its size along `axis` is settled at `extent`;
    /// returning `None` keeps the natural size.
    pub fn layout_with(
        &self,
        frame: ContainerFrame,
        children: &[ChildLayout],
        remeasure: &mut dyn FnMut(usize, Axis, f32) -> Option<f32>,
    ) -> FlexOutcome {
        let outcome = if self.spec.direction.is_stack() {
            self.layout_stack(frame, children)
        } else {
            self.layout_lines(frame, children, remeasure)
        };

        tracing::trace!(
            direction = ?self.spec.direction,
            children = children.len(),
            lines = outcome.lines,
            width = outcome.size.width,
            height = outcome.size.height,
            "box layout"
        );

        outcome
    }

    fn layout_lines(
        &self,
        frame: ContainerFrame,
        children: &[ChildLayout],
        remeasure: &mut dyn FnMut(usize, Axis, f32) -> Option<f32>,
    ) -> FlexOutcome {
        let main_axis = self.spec.direction.main_axis();
        let cross_axis = main_axis.cross();
        let padding = self.spec.padding;
        let padding_main = padding.along(main_axis);
        let padding_cross = padding.along(cross_axis);
        let gap = self.spec.gap.max(0.0);

        // Step 1: Base and hypothetical sizes
        let mut items: Vec<FlexItem> = children
            .iter()
            .map(|child| self.create_flex_item(child, main_axis, frame.basis))
            .collect();

        // Single-line containers with a known cross size stretch up front, so
        // content-sized children measure their main size at the final cross size
        if self.spec.align_items == Align::Stretch && !self.spec.flex_wrap.is_wrapping() {
            if let Some(outer_cross) = frame.known.along(cross_axis) {
                let inner_cross = (outer_cross - padding_cross).max(0.0);
                for (index, item) in items.iter_mut().enumerate() {
                    if item.fixed.get(cross_axis) {
                        continue;
                    }
                    let stretched = item
                        .clamp_cross(inner_cross - item.margin_cross.0 - item.margin_cross.1);
                    if (stretched - item.cross).abs() > EPSILON && !item.fixed.get(main_axis) {
                        if let Some(main) = remeasure(index, cross_axis, stretched) {
                            item.natural_main = main;
                            item.hypothetical = item.clamp_main(main);
                            item.main = item.hypothetical;
                        }
                    }
                    item.cross = stretched;
                    item.fixed.set(cross_axis, true);
                }
            }
        }

        // Step 2: Line packing, against the known or maximum main size
        let break_limit = frame
            .known
            .along(main_axis)
            .or_else(|| Some(frame.bounds.max_along(main_axis)).filter(|max| max.is_finite()))
            .map(|outer| (outer - padding_main).max(0.0));
        let ranges = collect_lines(&items, break_limit, gap, self.spec.flex_wrap);

        // Step 3: Container main size, then flex within it
        let content_main = ranges
            .iter()
            .map(|range| line_extent(slice(&items, range), gap, FlexItem::outer_hypothetical))
            .fold(0.0, f32::max);
        let outer_main = frame.known.along(main_axis).unwrap_or_else(|| {
            frame.bounds.clamp(main_axis, content_main + padding_main)
        });
        let inner_main = (outer_main - padding_main).max(0.0);

        for range in &ranges {
            if let Some(line) = items.get_mut(range.clone()) {
                resolve_flexible_lengths(line, inner_main, gap);
            }
        }

        // Step 4: Re-measure cross sizes that depend on the settled main size
        for (index, item) in items.iter_mut().enumerate() {
            if (item.main - item.hypothetical).abs() > EPSILON {
                item.fixed.set(main_axis, true);
            }
            if item.fixed.get(cross_axis) || (item.main - item.natural_main).abs() <= EPSILON {
                continue;
            }
            if let Some(cross) = remeasure(index, main_axis, item.main) {
                item.cross = item.clamp_cross(cross);
            }
        }

        // Step 5: Line cross sizes and container cross size
        let mut lines: Vec<FlexLine> = ranges
            .into_iter()
            .map(|range| {
                let cross = slice(&items, &range)
                    .iter()
                    .map(FlexItem::outer_cross)
                    .fold(0.0, f32::max);
                FlexLine {
                    items: range,
                    cross,
                    offset: 0.0,
                }
            })
            .collect();

        let lines_cross = lines.iter().map(|line| line.cross).sum::<f32>()
            + gaps_total(gap, lines.len());
        let outer_cross = frame.known.along(cross_axis).unwrap_or_else(|| {
            frame.bounds.clamp(cross_axis, lines_cross + padding_cross)
        });
        let inner_cross = (outer_cross - padding_cross).max(0.0);

        if !self.spec.flex_wrap.is_wrapping() {
            if let Some(line) = lines.first_mut() {
                line.cross = inner_cross;
            }
        }

        // Step 6: Position lines along the cross axis
        self.position_lines(&mut lines, inner_cross, gap);

        // Step 7: Stretch, then place every child
        let align = self.spec.align_items;
        let mut results = Vec::with_capacity(items.len());

        for (line_index, line) in lines.iter().enumerate() {
            let Some(line_items) = items.get_mut(line.items.clone()) else {
                continue;
            };

            if align == Align::Stretch {
                for item in line_items.iter_mut() {
                    if !item.fixed.get(cross_axis) {
                        item.cross = item.clamp_cross(
                            line.cross - item.margin_cross.0 - item.margin_cross.1,
                        );
                        item.fixed.set(cross_axis, true);
                    }
                }
            }

            let used = line_extent(line_items, gap, FlexItem::outer_main);
            let (offset, spacing) = self
                .spec
                .justify_content
                .distribute(inner_main - used, line_items.len());

            let mut cursor = offset;
            for item in line_items.iter() {
                let main_pos = padding.start(main_axis) + cursor + item.margin_main.0;
                let cross_pos = padding.start(cross_axis)
                    + line.offset
                    + align.offset(line.cross, item.outer_cross())
                    + item.margin_cross.0;
                cursor += item.outer_main() + gap + spacing;

                results.push(ChildLayoutResult {
                    position: Point::from_axes(main_axis, main_pos, cross_pos),
                    size: Size::from_axes(main_axis, item.main, item.cross),
                    line: line_index,
                    fixed: item.fixed,
                    bounds: item.bounds,
                });
            }
        }

        FlexOutcome {
            size: Size::from_axes(main_axis, outer_main, outer_cross),
            children: results,
            lines: lines.len(),
        }
    }

    /// Sets each line's cross offset from `align_content`.
    fn position_lines(&self, lines: &mut [FlexLine], inner_cross: f32, gap: f32) {
        if self.spec.flex_wrap == FlexWrap::WrapReverse {
            lines.reverse();
        }

        let (start, spacing) = if lines.len() > 1 {
            let used = lines.iter().map(|line| line.cross).sum::<f32>()
                + gaps_total(gap, lines.len());
            self.spec
                .align_content
                .distribute(inner_cross - used, lines.len())
        } else {
            (0.0, 0.0)
        };

        let mut cursor = start;
        for line in lines.iter_mut() {
            line.offset = cursor;
            cursor += line.cross + gap + spacing;
        }

        if self.spec.flex_wrap == FlexWrap::WrapReverse {
            lines.reverse();
        }
    }

    /// Overlays children at the content origin.
    fn layout_stack(&self, frame: ContainerFrame, children: &[ChildLayout]) -> FlexOutcome {
        let padding = self.spec.padding;
        let mut items: Vec<FlexItem> = children
            .iter()
            .map(|child| self.create_flex_item(child, Axis::Horizontal, frame.basis))
            .collect();

        let content = items.iter().fold(Size::ZERO, |acc, item| {
            Size::new(
                acc.width.max(item.outer_hypothetical()),
                acc.height.max(item.outer_cross()),
            )
        });
        let outer = Size::new(
            frame.known.width.unwrap_or_else(|| {
                frame
                    .bounds
                    .clamp(Axis::Horizontal, content.width + padding.horizontal())
            }),
            frame.known.height.unwrap_or_else(|| {
                frame
                    .bounds
                    .clamp(Axis::Vertical, content.height + padding.vertical())
            }),
        );
        let inner = Size::new(
            (outer.width - padding.horizontal()).max(0.0),
            (outer.height - padding.vertical()).max(0.0),
        );

        let align = self.spec.align_items;
        let results = items
            .iter_mut()
            .map(|item| {
                item.main = item.hypothetical;
                if align == Align::Stretch && !item.fixed.vertical {
                    item.cross =
                        item.clamp_cross(inner.height - item.margin_cross.0 - item.margin_cross.1);
                    item.fixed.vertical = true;
                }
                let (x_offset, _) = self
                    .spec
                    .justify_content
                    .distribute(inner.width - item.outer_main(), 1);
                let y_offset = align.offset(inner.height, item.outer_cross());

                ChildLayoutResult {
                    position: Point::new(
                        padding.left + x_offset + item.margin_main.0,
                        padding.top + y_offset + item.margin_cross.0,
                    ),
                    size: Size::new(item.main, item.cross),
                    line: 0,
                    fixed: item.fixed,
                    bounds: item.bounds,
                }
            })
            .collect();

        FlexOutcome {
            size: outer,
            children: results,
            lines: usize::from(!children.is_empty()),
        }
    }

    /// Creates a flex item from a child layout.
    fn create_flex_item(
        &self,
        child: &ChildLayout,
        main_axis: Axis,
        basis: ContentArea,
    ) -> FlexItem {
        let cross_axis = main_axis.cross();
        let spec = &child.spec;
        let bounds = resolve_bounds(spec, basis, self.viewport);

        let main_basis = basis.along(main_axis);
        let explicit_main = spec
            .flex_basis
            .resolve_explicit(main_basis, self.viewport)
            .or_else(|| spec.size(main_axis).resolve_explicit(main_basis, self.viewport));
        let natural_main = child.natural.along(main_axis);
        let base = explicit_main.unwrap_or(natural_main).max(0.0);
        let hypothetical = bounds.clamp(main_axis, base);

        let explicit_cross = spec
            .size(cross_axis)
            .resolve_explicit(basis.along(cross_axis), self.viewport);
        let cross = bounds.clamp(
            cross_axis,
            explicit_cross
                .unwrap_or_else(|| child.natural.along(cross_axis))
                .max(0.0),
        );

        let mut fixed = AxisFlags::NONE;
        fixed.set(main_axis, explicit_main.is_some());
        fixed.set(cross_axis, explicit_cross.is_some());

        FlexItem {
            natural_main,
            hypothetical,
            main: hypothetical,
            cross,
            min_main: bounds.min_along(main_axis),
            max_main: bounds.max_along(main_axis),
            min_cross: bounds.min_along(cross_axis),
            max_cross: bounds.max_along(cross_axis),
            margin_main: (spec.margin.start(main_axis), spec.margin.end(main_axis)),
            margin_cross: (spec.margin.start(cross_axis), spec.margin.end(cross_axis)),
            grow: spec.flex_grow.max(0.0),
            shrink: spec.flex_shrink.max(0.0),
            fixed,
            bounds,
            frozen: false,
        }
    }
}

fn slice<'i>(items: &'i [FlexItem], range: &Range<usize>) -> &'i [FlexItem] {
    items.get(range.clone()).unwrap_or_default()
}

fn gaps_total(gap: f32, count: usize) -> f32 {
    // Child counts are far below f32's exact integer range.
    #[allow(clippy::cast_precision_loss)]
    let between = count.saturating_sub(1) as f32;
    gap * between
}

/// Main extent of a line: outer sizes plus gaps.
fn line_extent(items: &[FlexItem], gap: f32, outer: fn(&FlexItem) -> f32) -> f32 {
    items.iter().map(outer).sum::<f32>() + gaps_total(gap, items.len())
}

/// Splits items into lines. Without a limit, or without wrapping, there is
/// exactly one line (none for no items).
fn collect_lines(
    items: &[FlexItem],
    limit: Option<f32>,
    gap: f32,
    wrap: FlexWrap,
) -> Vec<Range<usize>> {
    if items.is_empty() {
        return Vec::new();
    }

    let limit = match limit {
        Some(limit) if wrap.is_wrapping() => limit,
        _ => return vec![0..items.len()],
    };

    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0.0;

    for (index, item) in items.iter().enumerate() {
        let outer = item.outer_hypothetical();
        if index == start {
            used = outer;
            continue;
        }
        let next = used + gap + outer;
        if next > limit + EPSILON {
            lines.push(start..index);
            start = index;
            used = outer;
        } else {
            used = next;
        }
    }
    lines.push(start..items.len());

    lines
}

/// Grows or shrinks one line's items to fill `available`.
///
/// Items clamped by min/max are frozen at the bound and the remaining free
/// space is redistributed among the others until nothing clamps.
fn resolve_flexible_lengths(line: &mut [FlexItem], available: f32, gap: f32) {
    let margins: f32 = line
        .iter()
        .map(|item| item.margin_main.0 + item.margin_main.1)
        .sum();
    let space = available - gaps_total(gap, line.len()) - margins;
    let hypothetical: f32 = line.iter().map(|item| item.hypothetical).sum();
    let growing = space > hypothetical;

    for item in line.iter_mut() {
        item.main = item.hypothetical;
        item.frozen = item.flex_weight(growing) <= 0.0
            || (growing && item.hypothetical >= item.max_main)
            || (!growing && item.hypothetical <= item.min_main);
    }

    loop {
        let frozen_used: f32 = line.iter().filter(|i| i.frozen).map(|i| i.main).sum();
        let unfrozen_base: f32 = line
            .iter()
            .filter(|i| !i.frozen)
            .map(|i| i.hypothetical)
            .sum();
        let free = space - frozen_used - unfrozen_base;
        if (growing && free <= EPSILON) || (!growing && free >= -EPSILON) {
            break;
        }

        let total: f32 = line
            .iter()
            .filter(|i| !i.frozen)
            .map(|i| i.flex_weight(growing))
            .sum();
        if total <= 0.0 {
            break;
        }

        let mut clamped = false;
        for item in line.iter_mut().filter(|i| !i.frozen) {
            let target = item.hypothetical + free * item.flex_weight(growing) / total;
            if target > item.max_main {
                item.main = item.max_main;
                item.frozen = true;
                clamped = true;
            } else if target < item.min_main {
                item.main = item.min_main;
                item.frozen = true;
                clamped = true;
            } else {
                item.main = target;
            }
        }

        if !clamped {
            break;
        }
    }
}

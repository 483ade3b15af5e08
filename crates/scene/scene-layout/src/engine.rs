//! Layout entry point.
//!
//! [`LayoutEngine::compute`] runs one pass over a host's subtree and returns
//! every node's [`ComputedBox`] without touching the host;
//! [`LayoutEngine::layout`] additionally commits the boxes through the host
//! in a single step, so a partially laid-out tree is never observable.
//!
//! A pass works in two phases:
//!
//! 1. **Measure**: nested containers report their content-driven size
//!    bottom-up (memoised per pass by node identity and inputs).
//! 2. **Place**: top-down, each container lays out its children at their
//!    final size; axes the parent fixed become the children's percentage
//!    basis.

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::context::{
    resolve_bounds, resolve_known, ContentArea, KnownSize, SizeBounds, Viewport,
};
use crate::flex::{ChildLayout, ContainerFrame, FlexLayout, FlexOutcome};
use crate::layout::{Axis, AxisFlags, ComputedBox, LayoutHost, LayoutNode, Point, Size};
use crate::style::LayoutSpec;

/// Stateless layout engine.
///
/// # Example
///
/// ```
/// use scene_layout::prelude::*;
///
/// struct Block(LayoutSpec);
///
/// impl LayoutNode for Block {
///     fn layout_spec(&self) -> &LayoutSpec {
///         &self.0
///     }
///     fn intrinsic_size(&self) -> Size {
///         Size::new(40.0, 20.0)
///     }
///     fn set_position(&mut self, _: Point) {}
///     fn set_size(&mut self, _: Size) {}
/// }
///
/// struct Host {
///     nodes: Vec<Block>,
///     children: Vec<Option<Vec<usize>>>,
/// }
///
/// impl LayoutHost for Host {
///     type NodeId = usize;
///
///     fn node(&self, id: usize) -> Option<&dyn LayoutNode> {
///         self.nodes.get(id).map(|n| n as &dyn LayoutNode)
///     }
///     fn node_mut(&mut self, id: usize) -> Option<&mut dyn LayoutNode> {
///         self.nodes.get_mut(id).map(|n| n as &mut dyn LayoutNode)
///     }
///     fn children(&self, id: usize) -> Option<&[usize]> {
///         self.children.get(id)?.as_deref()
///     }
/// }
///
/// let host = Host {
///     nodes: vec![
///         Block(LayoutSpec::row().gap(10.0)),
///         Block(LayoutSpec::new()),
///         Block(LayoutSpec::new()),
///     ],
///     children: vec![Some(vec![1, 2]), None, None],
/// };
///
/// let engine = LayoutEngine::new(LayoutConfig::DEFAULT);
/// let output = engine.compute(&host, 0, None);
///
/// assert_eq!(output.root_size(), Size::new(90.0, 20.0));
/// assert_eq!(output.get(2).map(|b| b.x), Some(50.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates an engine with the given configuration.
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes boxes for `root` and its subtree without mutating the host.
    ///
    /// `content_area` overrides the root's percentage basis; by default the
    /// viewport is used.
    ///
    /// # Panics
    ///
    /// Panics if a node reachable from `root` does not expose the layout
    /// capability.
    pub fn compute<H>(
        &self,
        host: &H,
        root: H::NodeId,
        content_area: Option<ContentArea>,
    ) -> LayoutOutput<H::NodeId>
    where
        H: LayoutHost + ?Sized,
    {
        let viewport = self.config.viewport;
        let basis = content_area.unwrap_or_else(|| ContentArea::from_viewport(viewport));
        let _span = tracing::debug_span!(
            "layout_pass",
            root = ?root,
            basis_width = basis.width,
            basis_height = basis.height,
        )
        .entered();

        let mut pass = LayoutPass::new(host, &self.config);
        let spec = *pass.node(root).layout_spec();
        let known = resolve_known(&spec, basis, viewport);
        let size = pass.measure(root, basis, known);

        let bounds = resolve_bounds(&spec, basis, viewport);
        let root_box = pass.snap(Point::ZERO, size, bounds);
        pass.output.push(root, root_box);

        let fixed = AxisFlags {
            horizontal: known.width.is_some(),
            vertical: known.height.is_some(),
        };
        pass.place(root, basis, root_box.size(), fixed);

        tracing::debug!(
            nodes = pass.output.len(),
            measured = pass.measured.len(),
            "layout pass complete"
        );

        pass.output
    }

    /// Computes boxes for `root` and commits them through the host.
    ///
    /// The root receives its size only; its position belongs to whoever
    /// placed it.
    ///
    /// # Panics
    ///
    /// Panics if a node reachable from `root` does not expose the layout
    /// capability.
    pub fn layout<H>(
        &self,
        host: &mut H,
        root: H::NodeId,
        content_area: Option<ContentArea>,
    ) -> LayoutOutput<H::NodeId>
    where
        H: LayoutHost + ?Sized,
    {
        let output = self.compute(&*host, root, content_area);
        output.commit(host);
        output
    }
}

/// Boxes produced by one pass, in tree order (root first).
#[derive(Debug, Clone)]
pub struct LayoutOutput<Id> {
    boxes: Vec<(Id, ComputedBox)>,
    index: HashMap<Id, usize>,
}

impl<Id: Copy + Eq + Hash + fmt::Debug> LayoutOutput<Id> {
    fn new() -> Self {
        Self {
            boxes: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn push(&mut self, id: Id, computed: ComputedBox) {
        if let Some(entry) = self
            .index
            .get(&id)
            .and_then(|&slot| self.boxes.get_mut(slot))
        {
            entry.1 = computed;
            return;
        }
        self.index.insert(id, self.boxes.len());
        self.boxes.push((id, computed));
    }

    /// Box of `id`, if it was part of the pass.
    pub fn get(&self, id: Id) -> Option<ComputedBox> {
        let slot = *self.index.get(&id)?;
        self.boxes.get(slot).map(|(_, computed)| *computed)
    }

    /// The pass's root node.
    pub fn root(&self) -> Option<Id> {
        self.boxes.first().map(|(id, _)| *id)
    }

    /// Size of the root box.
    pub fn root_size(&self) -> Size {
        self.boxes
            .first()
            .map_or(Size::ZERO, |(_, computed)| computed.size())
    }

    /// Iterates boxes in tree order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, ComputedBox)> + '_ {
        self.boxes.iter().copied()
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// `true` when the pass produced no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Writes every box to its node. The root only receives its size.
    ///
    /// # Panics
    ///
    /// Panics if a node no longer exposes the layout capability.
    pub fn commit<H>(&self, host: &mut H)
    where
        H: LayoutHost<NodeId = Id> + ?Sized,
    {
        for (slot, (id, computed)) in self.boxes.iter().enumerate() {
            let Some(node) = host.node_mut(*id) else {
                missing_capability(*id)
            };
            if slot > 0 {
                node.set_position(computed.position());
            }
            node.set_size(computed.size());
        }
    }
}

impl<Id: PartialEq> PartialEq for LayoutOutput<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.boxes == other.boxes
    }
}

// Hosts must only hand the engine ids of layout-capable nodes.
#[cold]
#[allow(clippy::panic)]
fn missing_capability<Id: fmt::Debug>(id: Id) -> ! {
    panic!("node {id:?} does not expose the layout capability")
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct MeasureKey<Id> {
    node: Id,
    basis: [u32; 2],
    known: [Option<u32>; 2],
}

impl<Id> MeasureKey<Id> {
    fn new(node: Id, basis: ContentArea, known: KnownSize) -> Self {
        Self {
            node,
            basis: [basis.width.to_bits(), basis.height.to_bits()],
            known: [known.width.map(f32::to_bits), known.height.map(f32::to_bits)],
        }
    }
}

/// Children of one container after a box layout run.
struct ContainerRun<Id> {
    outcome: FlexOutcome,
    flow: Vec<Id>,
    decorative: Vec<Id>,
    basis: ContentArea,
}

/// Scratch state of a single pass, dropped when the pass returns.
struct LayoutPass<'h, H: LayoutHost + ?Sized> {
    host: &'h H,
    viewport: Viewport,
    snapping: bool,
    measured: HashMap<MeasureKey<H::NodeId>, Size>,
    output: LayoutOutput<H::NodeId>,
}

impl<'h, H: LayoutHost + ?Sized> LayoutPass<'h, H> {
    fn new(host: &'h H, config: &LayoutConfig) -> Self {
        Self {
            host,
            viewport: config.viewport,
            snapping: config.pixel_snapping,
            measured: HashMap::new(),
            output: LayoutOutput::new(),
        }
    }

    fn node(&self, id: H::NodeId) -> &'h dyn LayoutNode {
        let host = self.host;
        match host.node(id) {
            Some(node) => node,
            None => missing_capability(id),
        }
    }

    fn children(&self, id: H::NodeId) -> Option<&'h [H::NodeId]> {
        let host = self.host;
        host.children(id)
    }

    /// Content-driven outer size of `id` with the given known axes.
    fn measure(&mut self, id: H::NodeId, basis: ContentArea, known: KnownSize) -> Size {
        let key = MeasureKey::new(id, basis, known);
        if let Some(size) = self.measured.get(&key) {
            return *size;
        }

        let node = self.node(id);
        let spec = *node.layout_spec();
        let size = match self.children(id) {
            Some(children) => {
                let fixed = AxisFlags {
                    horizontal: known.width.is_some(),
                    vertical: known.height.is_some(),
                };
                self.run_container(&spec, basis, known, fixed, children)
                    .outcome
                    .size
            }
            None => {
                let bounds = resolve_bounds(&spec, basis, self.viewport);
                let intrinsic = node.intrinsic_size().non_negative();
                Size::new(
                    known
                        .width
                        .unwrap_or_else(|| bounds.clamp(Axis::Horizontal, intrinsic.width)),
                    known
                        .height
                        .unwrap_or_else(|| bounds.clamp(Axis::Vertical, intrinsic.height)),
                )
            }
        };

        self.measured.insert(key, size);
        size
    }

    /// Runs box layout for one container.
    ///
    /// `parent_basis` is the basis the container's own spec resolves against;
    /// `fixed` marks the axes of `known` that do not depend on the children.
    fn run_container(
        &mut self,
        spec: &LayoutSpec,
        parent_basis: ContentArea,
        known: KnownSize,
        fixed: AxisFlags,
        children: &[H::NodeId],
    ) -> ContainerRun<H::NodeId> {
        let fixed_size = KnownSize {
            width: known.width.filter(|_| fixed.horizontal),
            height: known.height.filter(|_| fixed.vertical),
        };
        let basis = parent_basis.for_children(fixed_size, spec.padding);
        let viewport = self.viewport;

        let mut flow = Vec::with_capacity(children.len());
        let mut decorative = Vec::new();
        let mut layouts = Vec::with_capacity(children.len());

        for &child in children {
            let node = self.node(child);
            if node.is_decorative() {
                decorative.push(child);
                continue;
            }
            let child_spec = *node.layout_spec();
            let natural = if self.children(child).is_some() {
                let child_known = resolve_known(&child_spec, basis, viewport);
                self.measure(child, basis, child_known)
            } else {
                node.intrinsic_size().non_negative()
            };
            flow.push(child);
            layouts.push(ChildLayout::new(child_spec, natural));
        }

        let frame = ContainerFrame {
            known,
            bounds: resolve_bounds(spec, parent_basis, viewport),
            basis,
        };

        let outcome = FlexLayout::new(spec, viewport).layout_with(
            frame,
            &layouts,
            &mut |index, axis, extent| {
                let child = *flow.get(index)?;
                self.children(child)?;
                let child_spec = layouts.get(index)?.spec;
                let child_known =
                    resolve_known(&child_spec, basis, viewport).with(axis, Some(extent));
                Some(self.measure(child, basis, child_known).along(axis.cross()))
            },
        );

        ContainerRun {
            outcome,
            flow,
            decorative,
            basis,
        }
    }

    /// Lays out the children of `id` at its final `size` and records their
    /// boxes, recursing into nested containers.
    fn place(&mut self, id: H::NodeId, parent_basis: ContentArea, size: Size, fixed: AxisFlags) {
        let Some(children) = self.children(id) else {
            return;
        };
        let spec = *self.node(id).layout_spec();

        let ContainerRun {
            outcome,
            flow,
            decorative,
            basis,
        } = self.run_container(&spec, parent_basis, KnownSize::exact(size), fixed, children);

        for (child, result) in flow.into_iter().zip(outcome.children) {
            let computed = self.snap(result.position, result.size, result.bounds);
            self.output.push(child, computed);
            self.place(child, basis, computed.size(), result.fixed);
        }

        for child in decorative {
            self.output
                .push(child, ComputedBox::from_parts(Point::ZERO, size));
        }
    }

    /// Rounds box edges to whole pixels when snapping is enabled.
    ///
    /// The snapped extent stays within `bounds`, and a non-empty box never
    /// snaps to zero.
    fn snap(&self, position: Point, size: Size, bounds: SizeBounds) -> ComputedBox {
        if !self.snapping {
            return ComputedBox::from_parts(position, size);
        }
        let width = snap_extent(position.x, size.width, bounds, Axis::Horizontal);
        let height = snap_extent(position.y, size.height, bounds, Axis::Vertical);
        ComputedBox::new(position.x.round(), position.y.round(), width, height)
    }
}

/// Whole-pixel extent of the span `start..start + extent`.
///
/// Rounding both edges may leave `bounds`; a fractional max is floored and a
/// fractional min is ceiled. When no whole pixel fits, or a positive extent
/// would round to zero, the raw extent is kept.
fn snap_extent(start: f32, extent: f32, bounds: SizeBounds, axis: Axis) -> f32 {
    let min = bounds.min_along(axis);
    let max = bounds.max_along(axis);
    let rounded = (start + extent).round() - start.round();
    let snapped = if rounded > max {
        max.floor()
    } else if rounded < min {
        min.ceil()
    } else {
        rounded
    };

    if snapped < min || snapped > max || (snapped <= 0.0 && extent > 0.0) {
        extent
    } else {
        snapped
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::size::SizeValue;
    use crate::style::{Align, Edges, FlexWrap};

    #[derive(Debug)]
    struct TestNode {
        spec: LayoutSpec,
        intrinsic: Size,
        decorative: bool,
        position: Option<Point>,
        size: Option<Size>,
    }

    impl LayoutNode for TestNode {
        fn layout_spec(&self) -> &LayoutSpec {
            &self.spec
        }

        fn intrinsic_size(&self) -> Size {
            self.intrinsic
        }

        fn is_decorative(&self) -> bool {
            self.decorative
        }

        fn set_position(&mut self, position: Point) {
            self.position = Some(position);
        }

        fn set_size(&mut self, size: Size) {
            self.size = Some(size);
        }
    }

    #[derive(Debug, Default)]
    struct TestTree {
        nodes: Vec<TestNode>,
        children: Vec<Option<Vec<usize>>>,
    }

    impl TestTree {
        fn add(&mut self, spec: LayoutSpec, intrinsic: Size, container: bool) -> usize {
            self.nodes.push(TestNode {
                spec,
                intrinsic,
                decorative: false,
                position: None,
                size: None,
            });
            self.children.push(container.then(Vec::new));
            self.nodes.len() - 1
        }

        fn container(&mut self, spec: LayoutSpec) -> usize {
            self.add(spec, Size::ZERO, true)
        }

        fn leaf(&mut self, parent: usize, spec: LayoutSpec, intrinsic: Size) -> usize {
            let id = self.add(spec, intrinsic, false);
            self.attach(parent, id);
            id
        }

        fn attach(&mut self, parent: usize, child: usize) {
            self.children[parent].as_mut().unwrap().push(child);
        }
    }

    impl LayoutHost for TestTree {
        type NodeId = usize;

        fn node(&self, id: usize) -> Option<&dyn LayoutNode> {
            self.nodes.get(id).map(|node| node as &dyn LayoutNode)
        }

        fn node_mut(&mut self, id: usize) -> Option<&mut dyn LayoutNode> {
            self.nodes.get_mut(id).map(|node| node as &mut dyn LayoutNode)
        }

        fn children(&self, id: usize) -> Option<&[usize]> {
            self.children.get(id)?.as_deref()
        }
    }

    fn px(value: f32) -> SizeValue {
        SizeValue::Fixed(value)
    }

    #[test]
    fn test_leaf_root_reports_intrinsic_size() {
        let mut tree = TestTree::default();
        let root = tree.add(LayoutSpec::new(), Size::new(40.0, 16.0), false);

        let output = LayoutEngine::default().compute(&tree, root, None);

        assert_eq!(output.len(), 1);
        assert_eq!(output.root(), Some(root));
        assert_eq!(output.root_size(), Size::new(40.0, 16.0));
    }

    #[test]
    fn test_basic_row_flex_snaps_to_pixels() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::row().width(px(400.0)).height(px(100.0)));
        let basis = LayoutSpec::new().flex_basis(px(100.0));
        let a = tree.leaf(root, basis.flex_grow(1.0), Size::ZERO);
        let b = tree.leaf(root, basis.flex_grow(2.0), Size::ZERO);

        let output = LayoutEngine::default().compute(&tree, root, None);

        assert_eq!(output.get(a), Some(ComputedBox::new(0.0, 0.0, 167.0, 0.0)));
        assert_eq!(output.get(b), Some(ComputedBox::new(167.0, 0.0, 233.0, 0.0)));
    }

    #[test]
    fn test_unsnapped_keeps_fractions() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::row().width(px(300.0)));
        let grow = LayoutSpec::new().flex_grow(1.0);
        let a = tree.leaf(root, grow, Size::ZERO);
        for _ in 0..3 {
            tree.leaf(root, grow, Size::ZERO);
        }

        let output = LayoutEngine::new(LayoutConfig::UNSNAPPED).compute(&tree, root, None);

        assert_eq!(output.get(a).unwrap().width, 75.0);
    }

    #[test]
    fn test_snapping_respects_fractional_max() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::row().width(px(400.0)));
        let a = tree.leaf(root, LayoutSpec::new().width(px(0.4)), Size::ZERO);
        let b = tree.leaf(
            root,
            LayoutSpec::new().width(px(200.0)).max_width(px(100.2)),
            Size::ZERO,
        );

        let output = LayoutEngine::default().compute(&tree, root, None);

        assert_eq!(output.get(a), Some(ComputedBox::new(0.0, 0.0, 0.4, 0.0)));
        assert_eq!(output.get(b), Some(ComputedBox::new(0.0, 0.0, 100.0, 0.0)));
    }

    #[test]
    fn test_snapping_respects_fractional_min() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::row().width(px(400.0)));
        tree.leaf(root, LayoutSpec::new().width(px(0.6)), Size::ZERO);
        let b = tree.leaf(
            root,
            LayoutSpec::new().width(px(50.0)).min_width(px(50.6)),
            Size::ZERO,
        );

        let output = LayoutEngine::default().compute(&tree, root, None);

        assert_eq!(output.get(b), Some(ComputedBox::new(1.0, 0.0, 51.0, 0.0)));
    }

    #[test]
    fn test_snapping_keeps_sentinel_size() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::row().width(px(100.0)));
        tree.leaf(root, LayoutSpec::new(), Size::new(10.4, 10.0));
        let overlay = tree.leaf(root, LayoutSpec::new(), Size::SENTINEL);

        let output = LayoutEngine::default().compute(&tree, root, None);

        let computed = output.get(overlay).unwrap();
        assert_eq!(computed.size(), Size::SENTINEL);
        assert_eq!(computed.x, 10.0);
    }

    #[test]
    fn test_compute_does_not_touch_host() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::row());
        let child = tree.leaf(root, LayoutSpec::new(), Size::new(10.0, 10.0));

        let output = LayoutEngine::default().compute(&tree, root, None);

        assert!(output.get(child).is_some());
        assert!(tree.nodes[child].size.is_none());
        assert!(tree.nodes[child].position.is_none());
    }

    #[test]
    fn test_layout_commits_boxes() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::row().gap(5.0));
        tree.leaf(root, LayoutSpec::new(), Size::new(10.0, 10.0));
        let second = tree.leaf(root, LayoutSpec::new(), Size::new(20.0, 30.0));

        LayoutEngine::default().layout(&mut tree, root, None);

        assert_eq!(tree.nodes[root].size, Some(Size::new(35.0, 30.0)));
        assert_eq!(tree.nodes[root].position, None);
        assert_eq!(tree.nodes[second].position, Some(Point::new(15.0, 0.0)));
        assert_eq!(tree.nodes[second].size, Some(Size::new(20.0, 30.0)));
    }

    #[test]
    fn test_decorative_child_covers_container() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::column().padding(Edges::all(10.0)));
        let background = tree.leaf(root, LayoutSpec::new(), Size::new(500.0, 500.0));
        tree.nodes[background].decorative = true;
        let content = tree.leaf(root, LayoutSpec::new(), Size::new(80.0, 20.0));

        let output = LayoutEngine::default().compute(&tree, root, None);

        assert_eq!(output.root_size(), Size::new(100.0, 40.0));
        assert_eq!(
            output.get(background),
            Some(ComputedBox::new(0.0, 0.0, 100.0, 40.0))
        );
        assert_eq!(
            output.get(content),
            Some(ComputedBox::new(10.0, 10.0, 80.0, 20.0))
        );
    }

    #[test]
    fn test_content_area_override() {
        let mut tree = TestTree::default();
        let root = tree.add(
            LayoutSpec::new().width(SizeValue::Percent(50.0)),
            Size::new(10.0, 10.0),
            false,
        );

        let engine = LayoutEngine::default();
        let viewport = engine.compute(&tree, root, None);
        let overridden = engine.compute(&tree, root, Some(ContentArea::new(600.0, 400.0)));

        assert_eq!(viewport.root_size().width, 640.0);
        assert_eq!(overridden.root_size().width, 300.0);
    }

    #[test]
    fn test_nested_percentages_use_nearest_known_ancestor() {
        let mut tree = TestTree::default();
        let root = tree.container(
            LayoutSpec::row()
                .width(px(1000.0))
                .height(px(800.0))
                .padding(Edges::all(50.0)),
        );
        let inner = tree.container(LayoutSpec::column());
        tree.attach(root, inner);
        let half = tree.leaf(
            inner,
            LayoutSpec::new()
                .width(SizeValue::Percent(50.0))
                .height(SizeValue::Percent(10.0)),
            Size::ZERO,
        );

        let output = LayoutEngine::default().compute(&tree, root, None);

        // `inner` is content-sized, so the percentages see the root's
        // 900×700 content-area
        assert_eq!(output.get(half).unwrap().size(), Size::new(450.0, 70.0));
        assert_eq!(output.get(inner).unwrap().size(), Size::new(450.0, 70.0));
    }

    #[test]
    fn test_stretched_child_lays_out_at_final_width() {
        let mut tree = TestTree::default();
        let root = tree.container(
            LayoutSpec::column()
                .width(px(100.0))
                .align_items(Align::Stretch),
        );
        let grid = tree.container(LayoutSpec::row().flex_wrap(FlexWrap::Wrap));
        tree.attach(root, grid);
        let cells: Vec<_> = (0..3)
            .map(|_| tree.leaf(grid, LayoutSpec::new(), Size::new(40.0, 10.0)))
            .collect();

        let output = LayoutEngine::default().compute(&tree, root, None);

        assert_eq!(output.get(grid).unwrap().size(), Size::new(100.0, 20.0));
        assert_eq!(output.get(cells[2]).unwrap().position(), Point::new(0.0, 10.0));
        assert_eq!(output.root_size(), Size::new(100.0, 20.0));
    }

    #[test]
    fn test_idempotent() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::row().width(px(333.0)).gap(7.0));
        for grow in [1.0, 2.0, 3.0] {
            tree.leaf(root, LayoutSpec::new().flex_grow(grow), Size::new(11.0, 13.0));
        }

        let engine = LayoutEngine::default();
        let first = engine.layout(&mut tree, root, None);
        let second = engine.layout(&mut tree, root, None);

        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "does not expose the layout capability")]
    fn test_missing_node_panics() {
        let mut tree = TestTree::default();
        let root = tree.container(LayoutSpec::row());
        tree.attach(root, 42);

        LayoutEngine::default().compute(&tree, root, None);
    }
}

//! Minimal arena host shared by the integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::indexing_slicing, missing_docs)]

use scene_layout::prelude::*;

/// Installs a test-friendly subscriber once; `RUST_LOG=scene_layout=trace`
/// shows every container pass.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug)]
pub struct TestNode {
    pub spec: LayoutSpec,
    pub intrinsic: Size,
    pub decorative: bool,
    pub position: Option<Point>,
    pub size: Option<Size>,
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
pub struct TestTree {
    pub nodes: Vec<TestNode>,
    pub children: Vec<Option<Vec<usize>>>,
}

impl TestTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, spec: LayoutSpec, intrinsic: Size, container: bool) -> usize {
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

    /// Adds a detached container (usually the root).
    pub fn root(&mut self, spec: LayoutSpec) -> usize {
        self.push(spec, Size::ZERO, true)
    }

    /// Adds a container under `parent`.
    pub fn container(&mut self, parent: usize, spec: LayoutSpec) -> usize {
        let id = self.push(spec, Size::ZERO, true);
        self.children[parent].as_mut().unwrap().push(id);
        id
    }

    /// Adds a leaf under `parent`.
    pub fn leaf(&mut self, parent: usize, spec: LayoutSpec, intrinsic: Size) -> usize {
        let id = self.push(spec, intrinsic, false);
        self.children[parent].as_mut().unwrap().push(id);
        id
    }

    /// Adds a decorative leaf under `parent`.
    pub fn decoration(&mut self, parent: usize) -> usize {
        let id = self.leaf(parent, LayoutSpec::new(), Size::ZERO);
        self.nodes[id].decorative = true;
        id
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

pub fn px(value: f32) -> SizeValue {
    SizeValue::Fixed(value)
}

pub fn pct(value: f32) -> SizeValue {
    SizeValue::Percent(value)
}

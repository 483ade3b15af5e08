//! End-to-end layout scenarios run through [`LayoutEngine`] on a plain arena
//! host.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, missing_docs)]

mod common;

use common::{init_tracing, pct, px, TestTree};
use scene_layout::prelude::*;

#[test]
fn basic_row_flex_splits_free_space_by_grow_weight() {
    init_tracing();
    let mut tree = TestTree::new();
    let root = tree.root(LayoutSpec::row().width(px(400.0)).height(px(100.0)));
    let a = tree.leaf(
        root,
        LayoutSpec::new().flex_grow(1.0).flex_basis(px(100.0)),
        Size::ZERO,
    );
    let b = tree.leaf(
        root,
        LayoutSpec::new().flex_grow(2.0).flex_basis(px(100.0)),
        Size::ZERO,
    );

    let output = LayoutEngine::default().compute(&tree, root, None);

    assert_eq!(output.root_size(), Size::new(400.0, 100.0));
    assert_eq!(output.get(a).unwrap().width, 167.0);
    assert_eq!(output.get(b).unwrap().x, 167.0);
    assert_eq!(output.get(b).unwrap().width, 233.0);
}

#[test]
fn max_width_caps_a_growing_child() {
    init_tracing();
    let mut tree = TestTree::new();
    let root = tree.root(LayoutSpec::row().width(px(800.0)));
    let fixed = tree.leaf(root, LayoutSpec::new().width(px(100.0)), Size::ZERO);
    let capped = tree.leaf(
        root,
        LayoutSpec::new().flex_grow(1.0).max_width(px(500.0)),
        Size::ZERO,
    );

    let output = LayoutEngine::default().compute(&tree, root, None);

    assert_eq!(output.get(fixed).unwrap().width, 100.0);
    assert_eq!(output.get(capped).unwrap().x, 100.0);
    assert_eq!(output.get(capped).unwrap().width, 500.0);
}

#[test]
fn wrap_grid_packs_four_per_line() {
    init_tracing();
    let mut tree = TestTree::new();
    let root = tree.root(
        LayoutSpec::row()
            .width(px(400.0))
            .gap(10.0)
            .flex_wrap(FlexWrap::Wrap),
    );
    let cell = LayoutSpec::new().width(px(90.0)).height(px(90.0));
    let cells: Vec<_> = (0..12)
        .map(|_| tree.leaf(root, cell, Size::ZERO))
        .collect();

    let output = LayoutEngine::default().compute(&tree, root, None);

    assert_eq!(output.root_size(), Size::new(400.0, 290.0));
    for (index, &id) in cells.iter().enumerate() {
        let column = (index % 4) as f32;
        let line = (index / 4) as f32;
        assert_eq!(
            output.get(id),
            Some(ComputedBox::new(column * 100.0, line * 100.0, 90.0, 90.0)),
            "cell {index}"
        );
    }
}

#[test]
fn nested_max_width_percent_resolves_against_padded_content_area() {
    init_tracing();
    let mut tree = TestTree::new();
    let outer = tree.root(
        LayoutSpec::row()
            .width(px(1000.0))
            .height(px(800.0))
            .padding(Edges::all(50.0)),
    );
    let inner = tree.container(outer, LayoutSpec::row().max_width(pct(100.0)));
    let wide = tree.leaf(inner, LayoutSpec::new(), Size::new(1200.0, 10.0));

    let output = LayoutEngine::default().compute(&tree, outer, None);

    assert_eq!(
        output.get(inner),
        Some(ComputedBox::new(50.0, 50.0, 900.0, 10.0))
    );
    assert_eq!(output.get(wide).unwrap().width, 900.0);
}

#[test]
fn column_stacks_children_with_gap_and_padding() {
    let mut tree = TestTree::new();
    let root = tree.root(
        LayoutSpec::column()
            .padding(Edges::horizontal_vertical(8.0, 4.0))
            .gap(6.0),
    );
    let title = tree.leaf(root, LayoutSpec::new(), Size::new(120.0, 24.0));
    let body = tree.leaf(root, LayoutSpec::new(), Size::new(80.0, 40.0));

    let output = LayoutEngine::default().compute(&tree, root, None);

    assert_eq!(output.root_size(), Size::new(136.0, 78.0));
    assert_eq!(output.get(title).unwrap().position(), Point::new(8.0, 4.0));
    assert_eq!(output.get(body).unwrap().position(), Point::new(8.0, 34.0));
}

#[test]
fn space_between_row_pushes_items_to_the_edges() {
    let mut tree = TestTree::new();
    let root = tree.root(
        LayoutSpec::row()
            .width(px(300.0))
            .height(px(50.0))
            .justify_content(Justify::SpaceBetween)
            .align_items(Align::Center),
    );
    let items: Vec<_> = (0..3)
        .map(|_| tree.leaf(root, LayoutSpec::new(), Size::new(50.0, 10.0)))
        .collect();

    let output = LayoutEngine::default().compute(&tree, root, None);

    assert_eq!(output.get(items[0]).unwrap().position(), Point::new(0.0, 20.0));
    assert_eq!(output.get(items[1]).unwrap().position(), Point::new(125.0, 20.0));
    assert_eq!(output.get(items[2]).unwrap().position(), Point::new(250.0, 20.0));
}

#[test]
fn stack_centers_and_stretches_overlaid_children() {
    let mut tree = TestTree::new();
    let root = tree.root(
        LayoutSpec::stack()
            .width(px(200.0))
            .height(px(100.0))
            .justify_content(Justify::Center)
            .align_items(Align::Center),
    );
    let badge = tree.leaf(root, LayoutSpec::new(), Size::new(50.0, 20.0));

    let stretched_root = tree.root(
        LayoutSpec::stack()
            .width(px(200.0))
            .height(px(100.0))
            .align_items(Align::Stretch),
    );
    let layer = tree.leaf(stretched_root, LayoutSpec::new(), Size::new(50.0, 20.0));

    let engine = LayoutEngine::default();
    let centered = engine.compute(&tree, root, None);
    let stretched = engine.compute(&tree, stretched_root, None);

    assert_eq!(
        centered.get(badge),
        Some(ComputedBox::new(75.0, 40.0, 50.0, 20.0))
    );
    assert_eq!(
        stretched.get(layer),
        Some(ComputedBox::new(0.0, 0.0, 50.0, 100.0))
    );
}

#[test]
fn decorative_child_fills_container_and_skips_flow() {
    let mut tree = TestTree::new();
    let root = tree.root(LayoutSpec::row().padding(Edges::all(4.0)).gap(10.0));
    let background = tree.decoration(root);
    let first = tree.leaf(root, LayoutSpec::new(), Size::new(30.0, 12.0));
    let second = tree.leaf(root, LayoutSpec::new(), Size::new(30.0, 12.0));

    let output = LayoutEngine::default().compute(&tree, root, None);

    assert_eq!(output.root_size(), Size::new(78.0, 20.0));
    assert_eq!(
        output.get(background),
        Some(ComputedBox::new(0.0, 0.0, 78.0, 20.0))
    );
    assert_eq!(output.get(first).unwrap().x, 4.0);
    assert_eq!(output.get(second).unwrap().x, 44.0);
}

#[test]
fn viewport_units_ignore_the_content_area() {
    let mut tree = TestTree::new();
    let root = tree.root(LayoutSpec::row().width(px(300.0)).height(px(300.0)));
    let panel = tree.leaf(
        root,
        LayoutSpec::new()
            .width(SizeValue::vw(10.0))
            .height(SizeValue::vh(50.0)),
        Size::ZERO,
    );

    let engine =
        LayoutEngine::new(LayoutConfig::DEFAULT.with_viewport(Viewport::new(800.0, 480.0)));
    let output = engine.compute(&tree, root, None);

    assert_eq!(output.get(panel).unwrap().size(), Size::new(80.0, 240.0));
}

#[test]
fn calc_width_subtracts_from_parent_content_area() {
    let mut tree = TestTree::new();
    let root = tree.root(LayoutSpec::column().width(px(500.0)));
    let bar = tree.leaf(
        root,
        LayoutSpec::new().width(SizeValue::parse("calc(100% - 40px)").unwrap()),
        Size::new(0.0, 8.0),
    );

    let output = LayoutEngine::default().compute(&tree, root, None);

    assert_eq!(output.get(bar).unwrap().width, 460.0);
}

#[test]
fn relayout_after_commit_is_stable() {
    let mut tree = TestTree::new();
    let root = tree.root(
        LayoutSpec::row()
            .width(px(401.0))
            .gap(3.0)
            .flex_wrap(FlexWrap::Wrap)
            .align_items(Align::Stretch),
    );
    for index in 0..7 {
        let grow = (index % 3) as f32;
        tree.leaf(
            root,
            LayoutSpec::new().flex_grow(grow).flex_basis(px(57.5)),
            Size::new(10.0, 10.0 + index as f32),
        );
    }

    let engine = LayoutEngine::default();
    let first = engine.layout(&mut tree, root, None);
    let second = engine.layout(&mut tree, root, None);

    assert_eq!(first, second);
    assert_eq!(tree.nodes[root].size, Some(first.root_size()));
}

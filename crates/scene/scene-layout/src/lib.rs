//! Scene Layout Engine
//!
//! Deterministic, constraint-based box layout for retained-mode scene graphs.
//!
//! # Architecture
//!
//! - Size values: fixed, percent, viewport units, `calc()`, auto
//! - Layout spec: direction, sizing, spacing, flex, wrapping, alignment
//! - Size provider protocol: [`LayoutNode`](layout::LayoutNode) per node,
//!   [`LayoutHost`](layout::LayoutHost) for tree access
//! - Box layout: one container's children (lines, flex, alignment)
//! - Engine: measure/place passes over a whole subtree, pixel snapping
//!
//! The engine keeps no state between calls. The same tree and viewport always
//! produce the same boxes.
//!
//! # Example
//!
//! ```
//! use scene_layout::prelude::*;
//!
//! let sidebar = LayoutSpec::column()
//!     .width(SizeValue::parse("calc(100% - 40px)").unwrap())
//!     .max_width(SizeValue::Fixed(320.0))
//!     .padding(Edges::all(8.0))
//!     .gap(4.0)
//!     .align_items(Align::Stretch);
//!
//! let engine = LayoutEngine::new(LayoutConfig::DEFAULT);
//! assert!(engine.config().pixel_snapping);
//! assert!(sidebar.width.requires_parent());
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod flex;
pub mod layout;
pub mod size;
pub mod style;

/// Common imports.
pub mod prelude {
    // Size-value language
    pub use crate::size::{RawSize, SizeParseError, SizeValue};

    // Layout spec
    pub use crate::style::*;

    // Size provider protocol and geometry
    pub use crate::layout::{Axis, ComputedBox, LayoutHost, LayoutNode, Point, Size};

    // Percentage context
    pub use crate::context::{ContentArea, Viewport};

    // Entry point
    pub use crate::config::LayoutConfig;
    pub use crate::engine::{LayoutEngine, LayoutOutput};
}

//! Scene Nodes
//!
//! Retained scene graph and node kinds built on the scene-layout engine.
//!
//! # Node kinds
//!
//! - `Container` - Lays out children
//! - `Text` - Monospace text
//! - `Image` - Bitmap with a natural size
//! - `Background` - Decorative fill covering its parent
//! - `Overlay` - Host-drawn surface
//!
//! # Example
//!
//! ```
//! use scene_layout::prelude::*;
//! use scene_nodes::prelude::*;
//!
//! let mut scene = Scene::new();
//! let root = scene.add_root(
//!     NodeKind::Container,
//!     LayoutSpec::column().padding(Edges::all(8.0)).gap(4.0),
//! );
//! let title = scene
//!     .add_child(root, NodeKind::Text(Text::new("Queue")), LayoutSpec::new())
//!     .unwrap();
//!
//! scene.relayout(&LayoutEngine::default());
//!
//! assert_eq!(scene.computed(title), Some(ComputedBox::new(8.0, 8.0, 50.0, 20.0)));
//! ```

pub mod image;
pub mod node;
pub mod props;
pub mod scene;
pub mod text;

/// Common imports.
pub mod prelude {
    pub use crate::image::*;
    pub use crate::node::*;
    pub use crate::props::*;
    pub use crate::scene::*;
    pub use crate::text::*;
}

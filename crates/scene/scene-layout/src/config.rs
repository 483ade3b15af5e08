//! Engine configuration

use crate::context::Viewport;

/// Configuration for a [`LayoutEngine`](crate::engine::LayoutEngine)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutConfig {
    /// Viewport for `vw`/`vh` units and the default root content-area
    pub viewport: Viewport,
    /// Round every box edge to whole pixels in the parent's local space
    pub pixel_snapping: bool,
}

impl LayoutConfig {
    /// Default configuration: 1280×720 viewport, pixel snapping on
    pub const DEFAULT: Self = Self {
        viewport: Viewport::new(1280.0, 720.0),
        pixel_snapping: true,
    };

    /// Same viewport, fractional boxes kept as computed
    pub const UNSNAPPED: Self = Self {
        viewport: Viewport::new(1280.0, 720.0),
        pixel_snapping: false,
    };

    /// Builder method to set the viewport.
    #[must_use]
    pub const fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Builder method to toggle pixel snapping.
    #[must_use]
    pub const fn with_pixel_snapping(mut self, enabled: bool) -> Self {
        self.pixel_snapping = enabled;
        self
    }

    /// Returns `true` when boxes are rounded to whole pixels.
    pub const fn snaps(&self) -> bool {
        self.pixel_snapping
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for Viewport {
    fn default() -> Self {
        LayoutConfig::DEFAULT.viewport
    }
}

//! Image node

use scene_layout::prelude::Size;

/// Bitmap placeholder with a natural size.
///
/// `scale` and `rotation` are applied by the renderer only; layout always
/// sees the natural size.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    natural: Size,
    scale: f32,
    rotation: f32,
}

impl Image {
    /// Create a new image of the given natural size
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            natural: Size::new(width, height),
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Set the visual scale factor
    #[must_use]
    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the visual rotation in degrees
    #[must_use]
    pub const fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Get image dimensions as seen by layout
    pub const fn dimensions(&self) -> Size {
        self.natural
    }

    /// Scale factor applied when drawing.
    pub const fn visual_scale(&self) -> f32 {
        self.scale
    }

    /// Rotation in degrees applied when drawing.
    pub const fn visual_rotation(&self) -> f32 {
        self.rotation
    }
}

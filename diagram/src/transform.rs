//! Per-frame placement of fragment outlines in pixel space.
//!
//! A frame maps each normalized outline through four steps:
//!
//! 1. scale into pixels by `base_size * scale`,
//! 2. find the scaled outline's center,
//! 3. pull every vertex toward that center by `1 / scale`,
//! 4. shift by the centering offset `max_size / 2 - current_size / 2`.
//!
//! Step 3 undoes the pulse for the fragment's own extent while step 1 keeps
//! it for the fragment's position, so pieces drift apart and together
//! without stretching.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::fragment::shape_center;
use crate::vector::Vector2;

/// Sizes that govern one frame's transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub base_size: f64,
    pub scale: f64,
    pub max_scale: f64,
}

impl FrameGeometry {
    /// Side of the drawing surface in pixels. Constant across frames.
    #[must_use]
    pub fn max_size(&self) -> f64 {
        self.base_size * self.max_scale
    }

    /// Side of the composition at the current pulse.
    #[must_use]
    pub fn current_size(&self) -> f64 {
        self.base_size * self.scale
    }

    /// Shift that keeps the composition centered on the surface.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.max_size() / 2.0 - self.current_size() / 2.0
    }

    /// Map a normalized outline to its on-surface pixel outline.
    #[must_use]
    pub fn place(&self, vertexes: &[Vector2]) -> Vec<Vector2> {
        let scaled = scale_to_pixels(vertexes, self.current_size());
        let center = shape_center(&scaled);
        let offset = Vector2::new(self.offset(), self.offset());
        scaled
            .into_iter()
            .map(|vertex| shrink_toward(center, vertex, self.scale).pls(offset))
            .collect()
    }
}

/// Scale normalized vertices by `size` on both axes.
#[must_use]
pub fn scale_to_pixels(vertexes: &[Vector2], size: f64) -> Vec<Vector2> {
    let factor = Vector2::new(size, size);
    vertexes.iter().map(|v| v.mul(factor)).collect()
}

/// Move `vertex` toward `center`, keeping `1 / scale` of its offset.
#[must_use]
pub fn shrink_toward(center: Vector2, vertex: Vector2, scale: f64) -> Vector2 {
    center.pls(vertex.sub(center).scl(1.0 / scale))
}

//! Fragment fill colors.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An opaque sRGB color with 8-bit channels.
///
/// `Display` renders the CSS form `rgb(r, g, b)`, which is what every
/// [`crate::surface::DrawingSurface`] accepts as a fill style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw each channel independently and uniformly from `0..=255`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A random color from the thread-local generator.
#[must_use]
pub fn generate_random_color() -> RgbColor {
    RgbColor::random(&mut rand::rng())
}

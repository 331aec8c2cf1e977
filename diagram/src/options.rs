//! Renderer configuration.
//!
//! Field names deserialize in camelCase so a host page can pass the same
//! option object it would hand a JavaScript renderer (`{"maxResizeSize": 350}`).

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BASE_SIZE, DEFAULT_FRAGMENT_COUNT, DEFAULT_MAX_SCALE, DEFAULT_PAUSE, MAX_FRAGMENT_COUNT, MIN_SCALE,
};
use crate::error::DiagramError;
use crate::fragment::ReferenceShape;

/// Options recognized by [`crate::renderer::DiagramRenderer`]. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagramOptions {
    /// Accepted for compatibility; the renderer does not read it.
    pub square_size: Option<f64>,
    /// Base drawing size in pixels. The surface is this times `max_scale`.
    pub max_resize_size: Option<f64>,
    /// Upper bound of the pulse.
    pub max_scale: Option<f64>,
    /// How many fragments to generate.
    pub fragment_count: Option<usize>,
    /// Seed for fragment geometry and colors. Random when absent.
    pub seed: Option<u64>,
    /// Shape the fragments tile.
    pub shape: ReferenceShape,
    /// Rest at each pulse bound, in milliseconds.
    pub pause_ms: Option<u64>,
}

impl DiagramOptions {
    /// Parse options from a JSON object.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the text is not a valid options object.
    pub fn from_json(json: &str) -> Result<Self, DiagramError> {
        serde_json::from_str(json).map_err(|e| DiagramError::invalid(format!("diagram options: {e}")))
    }

    #[must_use]
    pub fn with_max_resize_size(mut self, size: f64) -> Self {
        self.max_resize_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    #[must_use]
    pub fn with_fragment_count(mut self, count: usize) -> Self {
        self.fragment_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: ReferenceShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn base_size(&self) -> f64 {
        self.max_resize_size.unwrap_or(DEFAULT_BASE_SIZE)
    }

    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale.unwrap_or(DEFAULT_MAX_SCALE)
    }

    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragment_count.unwrap_or(DEFAULT_FRAGMENT_COUNT)
    }

    #[must_use]
    pub fn pause(&self) -> Duration {
        self.pause_ms.map_or(DEFAULT_PAUSE, Duration::from_millis)
    }

    /// Check that the resolved values describe a drawable diagram.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a non-finite or non-positive base size, a
    /// maximum scale below 1, or a fragment count outside `1..=MAX_FRAGMENT_COUNT`.
    pub fn validate(&self) -> Result<(), DiagramError> {
        let base_size = self.base_size();
        if !base_size.is_finite() || base_size <= 0.0 {
            return Err(DiagramError::invalid(format!("maxResizeSize must be a positive number, got {base_size}")));
        }
        let max_scale = self.max_scale();
        if !max_scale.is_finite() || max_scale < MIN_SCALE {
            return Err(DiagramError::invalid(format!("maxScale must be at least {MIN_SCALE}, got {max_scale}")));
        }
        let count = self.fragment_count();
        if !(1..=MAX_FRAGMENT_COUNT).contains(&count) {
            return Err(DiagramError::invalid(format!(
                "fragmentCount must be between 1 and {MAX_FRAGMENT_COUNT}, got {count}"
            )));
        }
        Ok(())
    }
}

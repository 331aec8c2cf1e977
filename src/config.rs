//! Host configuration from command-line flags with `SHARDPULSE_*` env fallbacks.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use diagram::DiagramOptions;
use diagram::fragment::ReferenceShape;

use crate::player::HostError;

/// Upper bound on `--frames`; every frame keeps a record in memory until `frames.json` is written.
pub const MAX_FRAMES: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Square,
    Disc,
}

impl From<ShapeArg> for ReferenceShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Square => Self::Square,
            ShapeArg::Disc => Self::Disc,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "shardpulse", about = "Render the pulsing fragment diagram to SVG frames")]
pub struct HostConfig {
    /// Frames to render before exiting.
    #[arg(long, env = "SHARDPULSE_FRAMES", default_value_t = 240)]
    pub frames: usize,

    /// Target frame rate.
    #[arg(long, env = "SHARDPULSE_FPS", default_value_t = 60)]
    pub fps: u32,

    /// Directory that receives `frame-NNNNN.svg` files and `frames.json`.
    #[arg(long, env = "SHARDPULSE_OUT", default_value = "frames")]
    pub out: PathBuf,

    /// Write every Nth frame to disk.
    #[arg(long, env = "SHARDPULSE_CAPTURE_EVERY", default_value_t = 10)]
    pub capture_every: usize,

    /// Do not wait between frames; the pause clock advances one frame interval per frame.
    #[arg(long, env = "SHARDPULSE_FAST")]
    pub fast: bool,

    /// Base options as a JSON object, e.g. `{"maxResizeSize": 350}`. Flags below override it.
    #[arg(long, env = "SHARDPULSE_OPTIONS")]
    pub options: Option<String>,

    /// Base drawing size in pixels.
    #[arg(long, env = "SHARDPULSE_SIZE")]
    pub size: Option<f64>,

    /// Number of fragments.
    #[arg(long, env = "SHARDPULSE_FRAGMENTS")]
    pub fragments: Option<usize>,

    /// Seed for geometry and colors.
    #[arg(long, env = "SHARDPULSE_SEED")]
    pub seed: Option<u64>,

    /// Shape the fragments tile.
    #[arg(long, env = "SHARDPULSE_SHAPE", value_enum)]
    pub shape: Option<ShapeArg>,
}

impl HostConfig {
    /// Resolve the renderer options: JSON base, then flag overrides.
    ///
    /// # Errors
    ///
    /// `HostError::Diagram` if the JSON does not parse or the result is invalid.
    pub fn diagram_options(&self) -> Result<DiagramOptions, HostError> {
        let mut options = match self.options.as_deref() {
            Some(json) => DiagramOptions::from_json(json)?,
            None => DiagramOptions::default(),
        };
        if let Some(size) = self.size {
            options = options.with_max_resize_size(size);
        }
        if let Some(count) = self.fragments {
            options = options.with_fragment_count(count);
        }
        if let Some(seed) = self.seed {
            options = options.with_seed(seed);
        }
        if let Some(shape) = self.shape {
            options = options.with_shape(shape.into());
        }
        options.validate()?;
        Ok(options)
    }

    /// # Errors
    ///
    /// `HostError::Config` for a zero frame rate or capture interval, or more
    /// than [`MAX_FRAMES`] frames.
    pub fn validate(&self) -> Result<(), HostError> {
        if self.frames > MAX_FRAMES {
            return Err(HostError::Config(format!("frames must be at most {MAX_FRAMES}, got {}", self.frames)));
        }
        if self.fps == 0 {
            return Err(HostError::Config("fps must be at least 1".into()));
        }
        if self.capture_every == 0 {
            return Err(HostError::Config("capture-every must be at least 1".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

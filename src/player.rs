//! Headless frame loop.
//!
//! DESIGN
//! ======
//! The diagram core never schedules its own frames, so this loop plays the
//! role a browser's `requestAnimationFrame` plays: a tokio interval ticks at
//! the configured rate and each tick calls `render()` once. Between ticks the
//! manual scheduler's clock is advanced by the time that actually passed, so
//! the pulse pauses last as long in wall time as they would on screen. In
//! fast mode the clock advances by exactly one frame interval instead and the
//! loop does not wait.
//!
//! Everything runs on one thread; the renderer is `!Send` by construction.

use std::path::PathBuf;
use std::rc::Rc;

use diagram::schedule::ManualScheduler;
use diagram::surface::DrawingSurface;
use diagram::svg::SvgSurface;
use diagram::{DiagramError, DiagramRenderer};
use serde::Serialize;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::info;

use crate::config::HostConfig;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Diagram(#[from] DiagramError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("frame index encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// One rendered frame, as listed in `frames.json`.
#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub frame: usize,
    pub scale: f64,
    pub phase: String,
    pub elapsed_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// What a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub width: u32,
    pub height: u32,
    pub fragments: usize,
    pub frames: Vec<FrameRecord>,
}

impl Summary {
    #[must_use]
    pub fn captured(&self) -> usize {
        self.frames.iter().filter(|f| f.file.is_some()).count()
    }
}

/// Render `config.frames` frames, writing every `capture_every`-th as SVG.
///
/// # Errors
///
/// Fails on invalid configuration, renderer construction, or file writes.
pub async fn play(config: &HostConfig) -> Result<Summary, HostError> {
    config.validate()?;
    let options = config.diagram_options()?;
    let clock = Rc::new(ManualScheduler::new());
    let mut renderer = DiagramRenderer::new(SvgSurface::default(), &options, clock.clone())?;

    tokio::fs::create_dir_all(&config.out).await?;
    info!(
        out = %config.out.display(),
        frames = config.frames,
        fps = config.fps,
        fragments = renderer.fragments().len(),
        "rendering diagram"
    );

    let step = config.frame_interval();
    let mut interval = tokio::time::interval(step);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();
    let mut records = Vec::new();

    for frame in 0..config.frames {
        if config.fast {
            clock.advance(step);
        } else {
            interval.tick().await;
            let now = Instant::now();
            clock.advance(now - last_tick);
            last_tick = now;
        }

        renderer.render();

        let file = if frame % config.capture_every == 0 {
            let name = format!("frame-{frame:05}.svg");
            tokio::fs::write(config.out.join(&name), renderer.surface().to_svg()).await?;
            info!(frame, scale = renderer.scale(), file = %name, "captured frame");
            Some(name)
        } else {
            None
        };

        records.push(FrameRecord {
            frame,
            scale: renderer.scale(),
            phase: format!("{:?}", renderer.phase()),
            elapsed_ms: clock.now().as_millis(),
            file,
        });
    }

    let summary = Summary {
        width: renderer.surface().width(),
        height: renderer.surface().height(),
        fragments: renderer.fragments().len(),
        frames: records,
    };
    let index: PathBuf = config.out.join("frames.json");
    tokio::fs::write(&index, serde_json::to_vec_pretty(&summary)?).await?;

    Ok(summary)
}

#[cfg(test)]
#[path = "player_test.rs"]
mod tests;

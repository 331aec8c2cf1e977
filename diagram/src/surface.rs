//! Drawing backends.
//!
//! [`DrawingSurface`] is the immediate-mode capability set the renderer
//! draws through. Anything that can set a fill color, trace a path, fill it,
//! and clear a rectangle qualifies: the browser's 2D canvas
//! ([`crate::web::CanvasSurface`]), an SVG builder ([`crate::svg::SvgSurface`]),
//! or the in-memory [`RecordingSurface`] used by tests.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use serde::Serialize;

use crate::error::DiagramError;

/// A 2D immediate-mode drawing target measured in pixels.
pub trait DrawingSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_size(&mut self, width: u32, height: u32);

    /// Set the color used by subsequent [`DrawingSurface::fill`] calls.
    fn set_fill_style(&mut self, color: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    /// Fill the current path with the current fill style.
    fn fill(&mut self);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// Something a [`DrawingSurface`] can be obtained from.
pub trait SurfaceSource {
    type Surface: DrawingSurface;

    /// # Errors
    ///
    /// `SurfaceUnavailable` if the backend cannot hand out a surface.
    fn acquire(self) -> Result<Self::Surface, DiagramError>;
}

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetSize { width: u32, height: u32 },
    SetFillStyle { color: String },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Fill,
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
}

/// A surface that draws nothing and remembers every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded calls, leaving the log empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::SetSize { width, height });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillStyle { color: color.to_string() });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }
}

impl SurfaceSource for RecordingSurface {
    type Surface = Self;

    fn acquire(self) -> Result<Self, DiagramError> {
        Ok(self)
    }
}

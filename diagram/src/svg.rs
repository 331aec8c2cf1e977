//! SVG output through the immediate-mode surface interface.
//!
//! Each `fill()` snapshots the current path as a `<path>` element with the
//! current fill color. Clearing the whole surface drops every element drawn
//! so far, so after a `render()` the document holds exactly one frame.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::fmt::Write;

use crate::error::DiagramError;
use crate::surface::{DrawingSurface, SurfaceSource};

const DEFAULT_FILL: &str = "black";

#[derive(Debug, Clone, PartialEq)]
enum Element {
    Path { fill: String, d: String },
    Rect { fill: String, x: f64, y: f64, width: f64, height: f64 },
}

/// A [`DrawingSurface`] that builds an SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: String,
    fill_style: String,
    path: String,
    elements: Vec<Element>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new("white")
    }
}

impl SvgSurface {
    /// `background` is painted under everything and over partially cleared regions.
    #[must_use]
    pub fn new(background: &str) -> Self {
        Self {
            width: 0,
            height: 0,
            background: background.to_string(),
            fill_style: DEFAULT_FILL.to_string(),
            path: String::new(),
            elements: Vec::new(),
        }
    }

    /// Number of filled shapes in the current document.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the current drawing as a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        );
        out.push_str(&format!("  <rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n", self.background));
        for element in &self.elements {
            match element {
                Element::Path { fill, d } => {
                    out.push_str(&format!("  <path fill=\"{fill}\" d=\"{}\"/>\n", d.trim_end()));
                }
                Element::Rect { fill, x, y, width, height } => {
                    out.push_str(&format!(
                        "  <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"{fill}\"/>\n"
                    ));
                }
            }
        }
        out.push_str("</svg>\n");
        out
    }

    fn push_segment(&mut self, command: char, x: f64, y: f64) {
        if write!(self.path, "{command}{x:.2} {y:.2} ").is_err() {
            self.path.clear();
        }
    }
}

impl DrawingSurface for SvgSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.elements.clear();
    }

    fn set_fill_style(&mut self, color: &str) {
        color.clone_into(&mut self.fill_style);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_segment('M', x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_segment('L', x, y);
    }

    fn close_path(&mut self) {
        self.path.push_str("Z ");
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.elements.push(Element::Path { fill: self.fill_style.clone(), d: self.path.clone() });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let covers_all = x <= 0.0
            && y <= 0.0
            && x + width >= f64::from(self.width)
            && y + height >= f64::from(self.height);
        if covers_all {
            self.elements.clear();
        } else {
            self.elements.push(Element::Rect { fill: self.background.clone(), x, y, width, height });
        }
    }
}

impl SurfaceSource for SvgSurface {
    type Surface = Self;

    fn acquire(self) -> Result<Self, DiagramError> {
        Ok(self)
    }
}

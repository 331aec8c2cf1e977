//! The pulsing fragment diagram.
//!
//! DESIGN
//! ======
//! `DiagramRenderer` owns everything that survives between frames: the
//! drawing surface, the fragment set with its colors, and the pulse. Geometry
//! and colors are fixed at construction; the pulse is the only state that
//! changes, once per `render()` and once per scheduled resume.
//!
//! The pulse lives behind `Rc<RefCell<_>>` so a resume task can reach it
//! after `render()` returns. The task holds only a `Weak`; once the renderer
//! is dropped the upgrade fails and the task does nothing.

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::color::RgbColor;
use crate::error::DiagramError;
use crate::fragment::{Fragment, generate_fragments_with};
use crate::options::DiagramOptions;
use crate::pulse::{Pulse, PulsePhase};
use crate::schedule::Scheduler;
use crate::surface::{DrawingSurface, SurfaceSource};
use crate::transform::FrameGeometry;
use crate::vector::Vector2;

/// A fragment and the color it is always painted with.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDrawOption {
    pub fragment: Fragment,
    pub color: RgbColor,
}

/// Draws the fragment set onto a surface, one frame per `render()`.
pub struct DiagramRenderer<S: DrawingSurface> {
    surface: S,
    base_size: f64,
    pause: Duration,
    pulse: Rc<RefCell<Pulse>>,
    fragments: Vec<FragmentDrawOption>,
    scheduler: Rc<dyn Scheduler>,
}

impl<S: DrawingSurface> DiagramRenderer<S> {
    /// Generate fragments and colors from `options` and bind to a surface.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for invalid options or degenerate generated geometry;
    /// `SurfaceUnavailable` if `source` cannot provide a surface.
    pub fn new<Src>(source: Src, options: &DiagramOptions, scheduler: Rc<dyn Scheduler>) -> Result<Self, DiagramError>
    where
        Src: SurfaceSource<Surface = S>,
    {
        options.validate()?;

        let mut rng = options.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let fragments = generate_fragments_with(options.fragment_count(), options.shape, &mut rng)?
            .into_iter()
            .map(|fragment| FragmentDrawOption { fragment, color: RgbColor::random(&mut rng) })
            .collect();

        Self::with_fragments(source, options, fragments, scheduler)
    }

    /// Bind an explicit fragment set to a surface.
    ///
    /// `options.fragment_count`, `seed`, and `shape` are ignored.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for invalid options or an empty fragment set;
    /// `SurfaceUnavailable` if `source` cannot provide a surface.
    pub fn with_fragments<Src>(
        source: Src,
        options: &DiagramOptions,
        fragments: Vec<FragmentDrawOption>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, DiagramError>
    where
        Src: SurfaceSource<Surface = S>,
    {
        options.validate()?;
        if fragments.is_empty() {
            return Err(DiagramError::invalid("renderer needs at least one fragment"));
        }

        let mut surface = source.acquire()?;
        let base_size = options.base_size();
        let max_scale = options.max_scale();
        let side = pixel_extent(base_size * max_scale);
        surface.set_size(side, side);

        debug!(fragments = fragments.len(), side, base_size, max_scale, "diagram renderer ready");

        Ok(Self {
            surface,
            base_size,
            pause: options.pause(),
            pulse: Rc::new(RefCell::new(Pulse::new(max_scale))),
            fragments,
            scheduler,
        })
    }

    // --- Queries ---

    /// Side of the drawing surface in pixels (`base_size * max_scale`).
    #[must_use]
    pub fn max_size(&self) -> f64 {
        self.geometry().max_size()
    }

    /// Side of the composition at the current pulse (`base_size * scale`).
    #[must_use]
    pub fn current_size(&self) -> f64 {
        self.geometry().current_size()
    }

    /// Shift applied to every vertex to keep the composition centered.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.geometry().offset()
    }

    #[must_use]
    pub fn base_size(&self) -> f64 {
        self.base_size
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.pulse.borrow().scale()
    }

    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.pulse.borrow().max_scale()
    }

    /// Per-tick scale change; zero while paused.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.pulse.borrow().delta()
    }

    #[must_use]
    pub fn phase(&self) -> PulsePhase {
        self.pulse.borrow().phase()
    }

    #[must_use]
    pub fn fragments(&self) -> &[FragmentDrawOption] {
        &self.fragments
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Pixel outline of `fragment` as the current frame would paint it.
    #[must_use]
    pub fn placed_outline(&self, fragment: &Fragment) -> Vec<Vector2> {
        self.geometry().place(fragment.vertexes())
    }

    // --- Frame ---

    /// Draw one animation frame: advance the pulse, clear, paint every fragment.
    pub fn render(&mut self) {
        self.update_scale();

        let geometry = self.geometry();
        let (width, height) = (f64::from(self.surface.width()), f64::from(self.surface.height()));
        self.surface.clear_rect(0.0, 0.0, width, height);

        for option in &self.fragments {
            let outline = geometry.place(option.fragment.vertexes());
            paint_polygon(&mut self.surface, &outline, &option.color.to_string());
        }
    }

    fn geometry(&self) -> FrameGeometry {
        let pulse = self.pulse.borrow();
        FrameGeometry { base_size: self.base_size, scale: pulse.scale(), max_scale: pulse.max_scale() }
    }

    fn update_scale(&mut self) {
        let entered = self.pulse.borrow_mut().tick();
        let Some(paused) = entered else {
            return;
        };

        debug!(?paused, scale = self.scale(), "pulse paused");
        let pulse = Rc::downgrade(&self.pulse);
        self.scheduler.schedule(self.pause, Box::new(move || resume_pulse(&pulse, paused)));
    }
}

fn resume_pulse(pulse: &Weak<RefCell<Pulse>>, paused: PulsePhase) {
    let Some(pulse) = pulse.upgrade() else {
        return;
    };
    let mut pulse = pulse.borrow_mut();
    if pulse.resume(paused) {
        debug!(phase = ?pulse.phase(), scale = pulse.scale(), "pulse resumed");
    }
}

/// Trace `outline` as a closed path and fill it with `color`.
fn paint_polygon<S: DrawingSurface>(surface: &mut S, outline: &[Vector2], color: &str) {
    let Some(first) = outline.first() else {
        return;
    };

    surface.set_fill_style(color);
    surface.begin_path();
    surface.move_to(first.x, first.y);
    for vertex in &outline[1..] {
        surface.line_to(vertex.x, vertex.y);
    }
    surface.line_to(first.x, first.y);
    surface.close_path();
    surface.fill();
}

/// Whole pixels needed to hold `size`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_extent(size: f64) -> u32 {
    size.ceil() as u32
}

//! Browser backend.
//!
//! This module is the only place that touches `web_sys`. It adapts an
//! `HtmlCanvasElement` and its 2D context to [`DrawingSurface`], maps
//! `setTimeout` onto [`Scheduler`], and drives `render()` from
//! `requestAnimationFrame`.

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::DiagramError;
use crate::options::DiagramOptions;
use crate::renderer::DiagramRenderer;
use crate::schedule::{Scheduler, Task};
use crate::surface::{DrawingSurface, SurfaceSource};

/// A canvas element together with its 2D rendering context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl SurfaceSource for HtmlCanvasElement {
    type Surface = CanvasSurface;

    fn acquire(self) -> Result<CanvasSurface, DiagramError> {
        let ctx = self
            .get_context("2d")
            .map_err(|e| DiagramError::SurfaceUnavailable(format!("get_context failed: {e:?}")))?
            .ok_or_else(|| DiagramError::SurfaceUnavailable("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DiagramError::SurfaceUnavailable("2d context has an unexpected type".into()))?;
        Ok(CanvasSurface { canvas: self, ctx })
    }
}

impl DrawingSurface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }
}

/// [`Scheduler`] over the browser's `setTimeout`.
#[derive(Clone)]
pub struct WindowScheduler {
    window: Window,
}

impl WindowScheduler {
    /// # Errors
    ///
    /// `SurfaceUnavailable` outside a browser window context.
    pub fn new() -> Result<Self, DiagramError> {
        let window = web_sys::window().ok_or_else(|| DiagramError::SurfaceUnavailable("no global window".into()))?;
        Ok(Self { window })
    }
}

impl Scheduler for WindowScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref::<js_sys::Function>(), millis)
        {
            warn!(?err, "setTimeout rejected; pulse stays paused");
        }
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Mount a diagram on `canvas` and animate it on every display refresh.
///
/// The animation runs for the lifetime of the page.
///
/// # Errors
///
/// Propagates construction failures from [`DiagramRenderer::new`], and
/// `SurfaceUnavailable` if the browser refuses the first animation frame.
pub fn start(canvas: HtmlCanvasElement, options: &DiagramOptions) -> Result<(), DiagramError> {
    let scheduler = WindowScheduler::new()?;
    let window = scheduler.window.clone();
    let renderer = Rc::new(RefCell::new(DiagramRenderer::new(canvas, options, Rc::new(scheduler))?));

    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        renderer.borrow_mut().render();
        if let Some(next) = holder_for_cb.borrow().as_ref() {
            if let Err(err) = request_frame(&window_for_cb, next) {
                warn!(%err, "animation stopped");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    *holder.borrow_mut() = Some(cb);
    let first = holder.borrow().as_ref().map_or(Ok(()), |cb| request_frame(&window, cb));
    if first.is_err() {
        // Break the holder <-> closure cycle so the renderer is released.
        holder.borrow_mut().take();
    }
    first
}

fn request_frame(window: &Window, cb: &FrameCallback) -> Result<(), DiagramError> {
    window
        .request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>())
        .map(|_handle| ())
        .map_err(frame_rejected)
}

fn frame_rejected(detail: impl std::fmt::Debug) -> DiagramError {
    DiagramError::SurfaceUnavailable(format!("requestAnimationFrame rejected: {detail:?}"))
}

/// JavaScript entry point: `startDiagram(canvas, '{"maxResizeSize": 350}')`.
///
/// # Errors
///
/// Returns the error message as a JS string if the options do not parse or
/// the renderer cannot be built.
#[wasm_bindgen(js_name = startDiagram)]
pub fn start_diagram(canvas: HtmlCanvasElement, options_json: Option<String>) -> Result<(), JsValue> {
    let options = match options_json.as_deref() {
        Some(json) => DiagramOptions::from_json(json),
        None => Ok(DiagramOptions::default()),
    }
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    start(canvas, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}

//! Pulsing fragment diagram: procedural convex tiling plus a breathing
//! scale animation, drawn through a pluggable 2D surface.
//!
//! The crate compiles both natively and to WebAssembly. In the browser,
//! [`web::start`] binds a canvas element and drives [`renderer::DiagramRenderer::render`]
//! from `requestAnimationFrame`. Natively, a host supplies any
//! [`surface::DrawingSurface`] and calls `render()` on its own cadence.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`renderer`] | Top-level renderer: fragments, colors, pulse, frame drawing |
//! | [`fragment`] | Fragment polygons and the convex-cutting generator |
//! | [`transform`] | Per-frame placement of outlines in pixel space |
//! | [`pulse`] | Scale state machine for the breathing animation |
//! | [`schedule`] | Deferred one-shot tasks and a manual-clock scheduler |
//! | [`surface`] | Drawing capability trait and a recording backend |
//! | [`svg`] | SVG document backend |
//! | [`web`] | Browser canvas backend and animation loop |
//! | [`vector`] | Immutable 2D vector math |
//! | [`color`] | Random fill colors |
//! | [`options`] | Renderer configuration |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Shared numeric constants (pulse step, pause, defaults) |

pub mod color;
pub mod consts;
pub mod error;
pub mod fragment;
pub mod options;
pub mod pulse;
pub mod renderer;
pub mod schedule;
pub mod surface;
pub mod svg;
pub mod transform;
pub mod vector;
pub mod web;

pub use error::DiagramError;
pub use options::DiagramOptions;
pub use renderer::{DiagramRenderer, FragmentDrawOption};

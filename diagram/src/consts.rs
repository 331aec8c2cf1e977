//! Shared numeric constants for the diagram crate.

use std::time::Duration;

// ── Pulse ───────────────────────────────────────────────────────

/// Magnitude of the per-tick scale increment while growing or shrinking.
pub const PULSE_DELTA: f64 = 0.02;

/// Lower bound of the pulse. Reaching it pauses, then the pulse grows.
pub const MIN_SCALE: f64 = 1.0;

/// Default upper bound of the pulse.
pub const DEFAULT_MAX_SCALE: f64 = 2.0;

/// How long the pulse rests at either bound before reversing.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(500);

// ── Layout ──────────────────────────────────────────────────────

/// Base drawing size in pixels when `maxResizeSize` is not given.
pub const DEFAULT_BASE_SIZE: f64 = 350.0;

/// Number of fragments the renderer generates when not configured.
pub const DEFAULT_FRAGMENT_COUNT: usize = 30;

/// Largest fragment count generation accepts.
pub const MAX_FRAGMENT_COUNT: usize = 10_000;

// ── Geometry ────────────────────────────────────────────────────

/// Vertex count of the polygon approximating the reference disc.
pub const DISC_SEGMENTS: usize = 48;

/// Fragments with an area at or below this (in unit-square space) are rejected.
pub const MIN_FRAGMENT_AREA: f64 = 1e-9;

/// Attempts at cutting a fragment before generation gives up.
pub const MAX_CUT_ATTEMPTS: usize = 16;

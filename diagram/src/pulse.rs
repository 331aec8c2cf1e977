//! The breathing animation's scale state machine.
//!
//! DESIGN
//! ======
//! The pulse is a scale factor that walks between [`MIN_SCALE`] and a
//! configured maximum by [`PULSE_DELTA`] per tick, resting at each bound
//! before reversing. The rest is explicit in the phase rather than encoded
//! as a zero delta:
//!
//! | Phase                 | delta | on tick                                  |
//! |-----------------------|-------|------------------------------------------|
//! | `Growing`             | +Δ    | step; bound check                        |
//! | `Shrinking`           | −Δ    | step; bound check                        |
//! | `PausedThenGrowing`   | 0     | nothing                                  |
//! | `PausedThenShrinking` | 0     | nothing                                  |
//!
//! Bound check after a step: `scale <= 1` enters `PausedThenGrowing`,
//! otherwise `scale >= max` enters `PausedThenShrinking`. The scale is not
//! clamped, so it may overshoot a bound by at most one step.
//!
//! Leaving a paused phase is not the tick's job. Entering a pause is
//! reported to the caller, which schedules [`Pulse::resume`] after the
//! pause delay.

#[cfg(test)]
#[path = "pulse_test.rs"]
mod pulse_test;

use crate::consts::{MIN_SCALE, PULSE_DELTA};

/// Where the pulse is in its grow → pause → shrink → pause cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulsePhase {
    Growing,
    PausedThenGrowing,
    Shrinking,
    PausedThenShrinking,
}

impl PulsePhase {
    /// Signed scale change applied per tick in this phase.
    #[must_use]
    pub fn delta(self) -> f64 {
        match self {
            Self::Growing => PULSE_DELTA,
            Self::Shrinking => -PULSE_DELTA,
            Self::PausedThenGrowing | Self::PausedThenShrinking => 0.0,
        }
    }

    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::PausedThenGrowing | Self::PausedThenShrinking)
    }
}

/// Current scale and phase of the pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    scale: f64,
    max_scale: f64,
    phase: PulsePhase,
}

impl Pulse {
    /// A pulse that starts at its maximum, about to grow into the upper pause.
    #[must_use]
    pub fn new(max_scale: f64) -> Self {
        Self::with_state(max_scale, max_scale, PulsePhase::Growing)
    }

    #[must_use]
    pub fn with_state(scale: f64, max_scale: f64, phase: PulsePhase) -> Self {
        Self { scale, max_scale, phase }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    #[must_use]
    pub fn phase(&self) -> PulsePhase {
        self.phase
    }

    #[must_use]
    pub fn delta(&self) -> f64 {
        self.phase.delta()
    }

    /// Advance one animation tick.
    ///
    /// Returns the paused phase just entered, if this tick hit a bound.
    pub fn tick(&mut self) -> Option<PulsePhase> {
        if self.phase.is_paused() {
            return None;
        }

        self.scale += self.phase.delta();
        if self.scale <= MIN_SCALE {
            self.phase = PulsePhase::PausedThenGrowing;
            Some(self.phase)
        } else if self.scale >= self.max_scale {
            self.phase = PulsePhase::PausedThenShrinking;
            Some(self.phase)
        } else {
            None
        }
    }

    /// Leave the pause `from`, if the pulse is still in it.
    ///
    /// Returns whether the phase changed. A resume for a pause the pulse has
    /// already left is ignored.
    pub fn resume(&mut self, from: PulsePhase) -> bool {
        if self.phase != from {
            return false;
        }
        match from {
            PulsePhase::PausedThenGrowing => self.phase = PulsePhase::Growing,
            PulsePhase::PausedThenShrinking => self.phase = PulsePhase::Shrinking,
            PulsePhase::Growing | PulsePhase::Shrinking => return false,
        }
        true
    }
}

#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Tick until the pulse pauses; returns the tick count and the paused phase.
fn run_to_pause(pulse: &mut Pulse) -> (usize, PulsePhase) {
    for ticks in 1..10_000 {
        if let Some(paused) = pulse.tick() {
            return (ticks, paused);
        }
    }
    panic!("pulse never paused: {pulse:?}");
}

// --- Phase ---

#[test]
fn phase_deltas() {
    assert_eq!(PulsePhase::Growing.delta(), 0.02);
    assert_eq!(PulsePhase::Shrinking.delta(), -0.02);
    assert_eq!(PulsePhase::PausedThenGrowing.delta(), 0.0);
    assert_eq!(PulsePhase::PausedThenShrinking.delta(), 0.0);
}

#[test]
fn paused_phases() {
    assert!(PulsePhase::PausedThenGrowing.is_paused());
    assert!(PulsePhase::PausedThenShrinking.is_paused());
    assert!(!PulsePhase::Growing.is_paused());
    assert!(!PulsePhase::Shrinking.is_paused());
}

// --- Construction ---

#[test]
fn new_starts_at_max_growing() {
    let pulse = Pulse::new(2.0);
    assert_eq!(pulse.scale(), 2.0);
    assert_eq!(pulse.max_scale(), 2.0);
    assert_eq!(pulse.phase(), PulsePhase::Growing);
    assert_eq!(pulse.delta(), 0.02);
}

// --- Upper bound ---

#[test]
fn first_tick_from_max_pauses_immediately() {
    let mut pulse = Pulse::new(2.0);
    assert_eq!(pulse.tick(), Some(PulsePhase::PausedThenShrinking));
    assert!(pulse.scale() >= pulse.max_scale());
    assert_eq!(pulse.delta(), 0.0);
}

#[test]
fn paused_tick_keeps_scale() {
    let mut pulse = Pulse::new(2.0);
    pulse.tick();
    let scale = pulse.scale();
    for _ in 0..30 {
        assert_eq!(pulse.tick(), None);
    }
    assert_eq!(pulse.scale(), scale);
}

#[test]
fn resume_after_upper_pause_shrinks() {
    let mut pulse = Pulse::new(2.0);
    pulse.tick();
    assert!(pulse.resume(PulsePhase::PausedThenShrinking));
    assert_eq!(pulse.phase(), PulsePhase::Shrinking);
    assert_eq!(pulse.delta(), -0.02);

    let before = pulse.scale();
    pulse.tick();
    assert!(pulse.scale() < before);
}

// --- Lower bound ---

#[test]
fn shrinking_reaches_lower_pause() {
    let mut pulse = Pulse::with_state(1.5, 2.0, PulsePhase::Shrinking);
    let (ticks, paused) = run_to_pause(&mut pulse);
    assert_eq!(paused, PulsePhase::PausedThenGrowing);
    assert!(pulse.scale() <= 1.0);
    assert!((25..=26).contains(&ticks), "took {ticks} ticks");
}

#[test]
fn resume_after_lower_pause_grows() {
    let mut pulse = Pulse::with_state(1.0, 2.0, PulsePhase::PausedThenGrowing);
    assert!(pulse.resume(PulsePhase::PausedThenGrowing));
    pulse.tick();
    assert!(approx_eq(pulse.scale(), 1.02));
    assert_eq!(pulse.phase(), PulsePhase::Growing);
}

// --- Resume guards ---

#[test]
fn resume_for_other_pause_is_ignored() {
    let mut pulse = Pulse::with_state(1.0, 2.0, PulsePhase::PausedThenGrowing);
    assert!(!pulse.resume(PulsePhase::PausedThenShrinking));
    assert_eq!(pulse.phase(), PulsePhase::PausedThenGrowing);
}

#[test]
fn resume_while_moving_is_ignored() {
    let mut pulse = Pulse::with_state(1.5, 2.0, PulsePhase::Growing);
    assert!(!pulse.resume(PulsePhase::Growing));
    assert!(!pulse.resume(PulsePhase::PausedThenGrowing));
    assert_eq!(pulse.phase(), PulsePhase::Growing);
}

// --- Full cycle ---

#[test]
fn cycle_alternates_between_bounds() {
    let mut pulse = Pulse::with_state(1.5, 2.0, PulsePhase::Growing);
    let mut pauses = Vec::new();
    for _ in 0..4 {
        let (_, paused) = run_to_pause(&mut pulse);
        pauses.push(paused);
        assert!(pulse.resume(paused));
    }
    assert_eq!(
        pauses,
        vec![
            PulsePhase::PausedThenShrinking,
            PulsePhase::PausedThenGrowing,
            PulsePhase::PausedThenShrinking,
            PulsePhase::PausedThenGrowing,
        ]
    );
}

#[test]
fn scale_stays_within_one_step_of_bounds() {
    let mut pulse = Pulse::with_state(1.5, 2.0, PulsePhase::Growing);
    for _ in 0..1_000 {
        if let Some(paused) = pulse.tick() {
            pulse.resume(paused);
        }
        assert!(pulse.scale() >= 1.0 - 0.02 - EPSILON, "{pulse:?}");
        assert!(pulse.scale() <= 2.0 + 0.02 + EPSILON, "{pulse:?}");
    }
}

#[test]
fn max_scale_of_one_still_oscillates() {
    let mut pulse = Pulse::new(1.0);
    assert_eq!(pulse.tick(), Some(PulsePhase::PausedThenShrinking));
    pulse.resume(PulsePhase::PausedThenShrinking);
    let (_, paused) = run_to_pause(&mut pulse);
    assert_eq!(paused, PulsePhase::PausedThenGrowing);
}

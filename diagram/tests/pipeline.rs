//! End-to-end animation over a recording surface and a manual clock.
#![allow(clippy::float_cmp)]

use std::rc::Rc;
use std::time::Duration;

use diagram::pulse::PulsePhase;
use diagram::schedule::ManualScheduler;
use diagram::surface::{DrawCommand, DrawingSurface, RecordingSurface};
use diagram::svg::SvgSurface;
use diagram::{DiagramError, DiagramOptions, DiagramRenderer};

const FRAME: Duration = Duration::from_millis(16);

struct Frame {
    scale: f64,
    phase: PulsePhase,
}

fn run(frames: usize, options: &DiagramOptions) -> Vec<Frame> {
    let clock = Rc::new(ManualScheduler::new());
    let mut renderer = DiagramRenderer::new(RecordingSurface::new(), options, clock.clone()).unwrap();
    (0..frames)
        .map(|_| {
            renderer.render();
            renderer.surface_mut().take_commands();
            clock.advance(FRAME);
            Frame { scale: renderer.scale(), phase: renderer.phase() }
        })
        .collect()
}

/// Consecutive runs of paused frames as (phase, length).
fn pause_runs(frames: &[Frame]) -> Vec<(PulsePhase, usize)> {
    let mut runs: Vec<(PulsePhase, usize)> = Vec::new();
    let mut previous: Option<PulsePhase> = None;
    for frame in frames {
        if frame.phase.is_paused() {
            match runs.last_mut() {
                Some((phase, len)) if previous == Some(*phase) => *len += 1,
                _ => runs.push((frame.phase, 1)),
            }
        }
        previous = Some(frame.phase);
    }
    runs
}

#[test]
fn end_to_end_sizes_for_base_100() {
    let clock = Rc::new(ManualScheduler::new());
    let options = DiagramOptions::default().with_max_resize_size(100.0);
    let renderer = DiagramRenderer::new(RecordingSurface::new(), &options, clock).unwrap();

    assert_eq!(renderer.max_size(), 200.0);
    assert_eq!(renderer.scale(), renderer.max_scale());
    assert_eq!(renderer.current_size(), renderer.max_size());
    assert_eq!(renderer.offset(), 0.0);
}

#[test]
fn scale_oscillates_between_bounds() {
    let frames = run(1_000, &DiagramOptions::default().with_seed(1));
    let min = frames.iter().map(|f| f.scale).fold(f64::INFINITY, f64::min);
    let max = frames.iter().map(|f| f.scale).fold(f64::NEG_INFINITY, f64::max);

    assert!(min <= 1.0 && min >= 0.98 - 1e-9, "min scale {min}");
    assert!(max >= 2.0 && max <= 2.02 + 1e-9, "max scale {max}");
}

#[test]
fn pauses_alternate_and_last_about_half_a_second() {
    let frames = run(1_000, &DiagramOptions::default().with_seed(1));
    let runs = pause_runs(&frames);
    assert!(runs.len() >= 6, "only {} pauses", runs.len());

    // 500 ms at 16 ms per frame; a bound can be hit twice back to back.
    for (_, len) in &runs {
        assert!((30..=66).contains(len), "pause of {len} frames");
    }

    let upper = runs.iter().filter(|(p, _)| *p == PulsePhase::PausedThenShrinking).count();
    let lower = runs.iter().filter(|(p, _)| *p == PulsePhase::PausedThenGrowing).count();
    assert!(upper >= 3 && lower >= 3, "upper {upper}, lower {lower}");
}

#[test]
fn scale_moves_by_delta_between_pauses() {
    let frames = run(400, &DiagramOptions::default().with_seed(1));
    for pair in frames.windows(2) {
        let step = (pair[1].scale - pair[0].scale).abs();
        assert!(step < 1e-9 || (step - 0.02).abs() < 1e-9, "step {step}");
    }
}

#[test]
fn fragment_edges_keep_their_pixel_length_every_frame() {
    let clock = Rc::new(ManualScheduler::new());
    let options = DiagramOptions::default().with_max_resize_size(100.0).with_fragment_count(1).with_seed(3);
    let mut renderer = DiagramRenderer::new(RecordingSurface::new(), &options, clock.clone()).unwrap();

    let outline = renderer.fragments()[0].fragment.vertexes().to_vec();
    let expected = outline[0].dist(outline[1]) * 100.0;

    for _ in 0..200 {
        renderer.surface_mut().take_commands();
        renderer.render();
        clock.advance(FRAME);

        let points: Vec<(f64, f64)> = renderer
            .surface()
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        let edge = (points[1].0 - points[0].0).hypot(points[1].1 - points[0].1);
        assert!((edge - expected).abs() < 1e-9, "edge {edge} vs {expected}");
    }
}

#[test]
fn svg_frame_holds_every_fragment() {
    let clock = Rc::new(ManualScheduler::new());
    let options = DiagramOptions::default().with_seed(8);
    let mut renderer = DiagramRenderer::new(SvgSurface::default(), &options, clock).unwrap();
    renderer.render();
    renderer.render();

    assert_eq!(renderer.surface().width(), 700);
    assert_eq!(renderer.surface().element_count(), 30);
    let svg = renderer.surface().to_svg();
    assert_eq!(svg.matches("<path").count(), 30);
    assert!(svg.contains("fill=\"rgb("));
}

#[test]
fn svg_holds_one_frame_at_fractional_size() {
    let clock = Rc::new(ManualScheduler::new());
    let options = DiagramOptions::default().with_seed(8).with_max_resize_size(100.25);
    let mut renderer = DiagramRenderer::new(SvgSurface::default(), &options, clock).unwrap();
    for _ in 0..3 {
        renderer.render();
    }

    assert_eq!(renderer.surface().width(), 201);
    assert_eq!(renderer.surface().element_count(), 30);
}

#[test]
fn zero_fragments_never_reach_the_surface() {
    let clock = Rc::new(ManualScheduler::new());
    let options = DiagramOptions::default().with_fragment_count(0);
    let result = DiagramRenderer::new(RecordingSurface::new(), &options, clock);
    assert!(matches!(result, Err(DiagramError::InvalidArgument(_))));
}

#[test]
fn unbounded_fragment_count_is_rejected_before_generation() {
    let clock = Rc::new(ManualScheduler::new());
    let options = DiagramOptions::from_json(r#"{"fragmentCount": 18446744073709551615}"#).unwrap();
    let result = DiagramRenderer::new(RecordingSurface::new(), &options, clock);
    assert!(matches!(result, Err(DiagramError::InvalidArgument(_))));
}

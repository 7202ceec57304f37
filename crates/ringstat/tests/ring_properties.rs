//! Ring-level behavior checked through the public API only.

use palette::Srgba;
use ringstat::render::{ArcRole, ArcSegment, RingFrame, RingStyle};
use ringstat::{
    CategorySeries, DrawCommand, Palette, ProgressDriver, RecordingSurface, RenderMode,
    RingGeometry, RingRenderer, StatsConfig, StatsView,
};
use std::time::{Duration, Instant};

const EPS: f64 = 1e-6;

fn series_cases() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 1.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![5.0],
        vec![0.25, 7.0, 3.5, 0.0, 0.0, 12.0],
        vec![100.0, 1.0, 1.0],
        vec![0.0, 3.0],
    ]
}

fn grey(_: usize) -> Srgba<f64> {
    Srgba::new(0.5, 0.5, 0.5, 1.0)
}

fn render(values: &[f64], mode: RenderMode, progress: f64) -> Vec<DrawCommand> {
    let series = CategorySeries::from(values);
    let palette = Palette::new([Srgba::new(1.0, 0.0, 0.0, 1.0)]);
    let style = RingStyle::default();
    let geometry = RingGeometry::resolve(240.0, 240.0, style.stroke_width);
    let renderer = RingRenderer::new(&series, &palette, &style, &geometry)
        .mode(mode)
        .progress(progress);

    let mut surface = RecordingSurface::new();
    renderer.draw(&mut surface, &grey).unwrap();
    surface.into_commands()
}

fn category_arcs(commands: &[DrawCommand]) -> Vec<ArcSegment> {
    commands
        .iter()
        .filter_map(DrawCommand::as_arc)
        .filter(|a| matches!(a.role, ArcRole::Category(_)))
        .copied()
        .collect()
}

#[test]
fn full_synchronous_ring_spans_max_angle() {
    for values in series_cases() {
        let frame = RingFrame::compute(&CategorySeries::from(values.as_slice()), 1.0);
        let total: f64 = category_arcs(&render(&values, RenderMode::Synchronous, 1.0))
            .iter()
            .map(|a| a.sweep)
            .sum();

        assert!((total - frame.max_angle).abs() < EPS, "{:?}", values);
        let all_non_zero = values.iter().all(|&v| v != 0.0);
        assert_eq!((frame.max_angle - 360.0).abs() < EPS, all_non_zero, "{:?}", values);
    }
}

#[test]
fn percent_ignores_magnitudes() {
    for values in series_cases() {
        let expected = 100.0 * values.iter().filter(|&&v| v != 0.0).count() as f64
            / values.len() as f64;
        let scaled: Vec<f64> = values.iter().map(|v| v * 1000.0).collect();

        assert!((CategorySeries::from(values.as_slice()).percent() - expected).abs() < EPS);
        assert!((CategorySeries::from(scaled).percent() - expected).abs() < EPS);
    }
}

#[test]
fn sequential_never_passes_the_frontier() {
    for values in series_cases() {
        let frame = RingFrame::compute(&CategorySeries::from(values.as_slice()), 1.0);
        for step in 0..=20 {
            let progress = step as f64 / 20.0;
            let drawn: f64 = category_arcs(&render(&values, RenderMode::Sequential, progress))
                .iter()
                .map(|a| a.sweep)
                .sum();

            assert!(drawn <= 360.0 * progress + EPS, "{:?} at {}", values, progress);
            assert!(drawn <= frame.max_angle + EPS, "{:?} at {}", values, progress);
        }
    }
}

#[test]
fn bidirectional_halves_mirror_each_other() {
    for values in series_cases() {
        for progress in [0.0, 0.3, 0.75, 1.0] {
            let arcs = category_arcs(&render(&values, RenderMode::Bidirectional, progress));
            assert_eq!(arcs.len(), values.len() * 2);

            for pair in arcs.chunks(2) {
                assert_eq!(pair[0].role, pair[1].role);
                assert_eq!(pair[0].start, pair[1].start);
                assert!((pair[0].sweep + pair[1].sweep).abs() < EPS);
                assert!(pair[0].sweep >= 0.0);
            }
        }
    }
}

#[test]
fn closing_segment_only_for_complete_rings() {
    for mode in [RenderMode::Synchronous, RenderMode::Sequential] {
        let closing = |values: &[f64]| {
            render(values, mode, 1.0)
                .iter()
                .filter_map(DrawCommand::as_arc)
                .filter(|a| a.role == ArcRole::Closing)
                .count()
        };

        assert_eq!(closing(&[1.0, 2.0, 3.0]), 1);
        assert_eq!(closing(&[1.0, 0.0, 1.0]), 0);
    }
}

#[test]
fn example_four_equal_categories_half_way() {
    let commands = render(&[1.0; 4], RenderMode::Synchronous, 0.5);

    assert!(matches!(&commands[0], DrawCommand::Label { text, .. } if text == "100.00%"));
    for arc in category_arcs(&commands) {
        assert!((arc.sweep - 45.0).abs() < EPS);
    }
}

#[test]
fn example_one_empty_of_three() {
    let values = [1.0, 0.0, 1.0];
    let frame = RingFrame::compute(&CategorySeries::from(values), 1.0);
    let commands = render(&values, RenderMode::Synchronous, 1.0);
    let sweeps: Vec<f64> = category_arcs(&commands).iter().map(|a| a.sweep).collect();

    assert_eq!(frame.label(), "66.67%");
    assert!((frame.max_angle - 240.0).abs() < EPS);
    assert_eq!(sweeps.len(), 3);
    assert!((sweeps[0] - 120.0).abs() < EPS);
    assert!(sweeps[1].abs() < EPS);
    assert!((sweeps[2] - 120.0).abs() < EPS);
    assert!(commands.iter().all(|c| c.as_arc().is_none_or(|a| a.role != ArcRole::Closing)));
}

#[test]
fn example_empty_series() {
    assert!(render(&[], RenderMode::Synchronous, 1.0).is_empty());
}

#[test]
fn restart_yields_a_single_tick_stream() {
    let start = Instant::now();
    let mut ticks = 0;
    let mut view = StatsView::with_fallback(&StatsConfig::default(), grey)
        .with_driver(ProgressDriver::new(Duration::from_millis(100)));
    view.on_resize(120.0, 120.0);

    let first = view.set_data([1.0, 2.0], start);
    view.tick(first, start + Duration::from_millis(40));
    let second = view.set_data([3.0, 4.0], start + Duration::from_millis(50));
    let third = view.set_data([5.0, 6.0], start + Duration::from_millis(60));
    assert_eq!(view.progress(), 0.0);

    // Interleave ticks from all three runs; only the latest may land.
    for ms in (70..=200).step_by(10) {
        let now = start + Duration::from_millis(ms);
        for task in [first, second, third] {
            let action = view.tick(task, now);
            if action.should_redraw {
                assert_eq!(task, third);
                ticks += 1;
            }
        }
    }

    // 70..=160 advance the third run, 160 completes it, later ticks are dropped.
    assert_eq!(ticks, 10);
    assert_eq!(view.progress(), 1.0);
    assert_eq!(view.series().values(), &[5.0, 6.0]);
}

#[test]
fn degenerate_viewport_still_renders() {
    let mut view = StatsView::with_fallback(&StatsConfig::default(), grey);
    view.on_resize(4.0, 4.0);
    view.set_data([1.0, 1.0], Instant::now());

    assert!(view.geometry().radius < 0.0);
    assert_eq!(view.commands().len(), 5);
}

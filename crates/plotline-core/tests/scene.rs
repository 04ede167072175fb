// File: crates/plotline-core/tests/scene.rs
// Purpose: End-to-end layout + scene builder checks over small charts.

use plotline_core::types::{Insets, HEIGHT, WIDTH};
use plotline_core::{
    Chart, CurveKind, Dataset, Domain, Hover, Layout, LayoutCache, Node, PointRef, PointerEvent,
};

fn chart_three_points() -> Chart<(f64, f64)> {
    let mut chart: Chart<(f64, f64)> = Chart::new();
    chart.margin = Insets::new(0, 0, 0, 0);
    chart.top_padding = 0.0;
    chart.add_dataset(Dataset::new(
        "series",
        vec![(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)],
        |p: &(f64, f64)| *p,
    ));
    chart
}

#[test]
fn small_chart_layout_end_to_end() {
    let chart = chart_three_points();
    let layout = Layout::compute(&chart, 100, 100);

    assert_eq!(layout.inner_width, 100.0);
    assert_eq!(layout.inner_height, 100.0);
    assert_eq!(layout.domain.x, (0.0, 2.0));
    assert_eq!(layout.domain.y, (0.0, 5.0));

    assert_eq!(layout.x_scale.map(0.0), 0.0);
    assert_eq!(layout.x_scale.map(2.0), 100.0);
    assert_eq!(layout.y_scale.map(0.0), 100.0);
    assert_eq!(layout.y_scale.map(5.0), 0.0);

    // Hit-test at the middle of the top edge finds the apex point.
    let hit = layout.hit_test(50.0, 0.0).expect("apex within radius");
    assert_eq!(hit.source, PointRef { dataset: 0, index: 1 });
    assert_eq!((hit.vx, hit.vy), (1.0, 5.0));
}

#[test]
fn empty_chart_still_renders_axes() {
    let mut chart: Chart<(f64, f64)> = Chart::new();
    chart.title = "Empty".to_string();
    let layout = Layout::compute(&chart, WIDTH, HEIGHT);

    assert_eq!(layout.domain, Domain::FALLBACK);
    assert!(layout.points.is_empty());
    assert_eq!(layout.hit_test(400.0, 400.0), None);

    let scene = chart.scene(&layout, &Hover::Idle);
    assert_eq!(scene.path_count(), 0);
    assert!(scene.tooltip.is_none());
    // Axis lines and tick labels are still present.
    let flat = scene.flat_nodes();
    assert!(flat.iter().any(|n| matches!(n, Node::Line { .. })));
    assert!(flat.iter().any(|n| matches!(n, Node::Text { .. })));
}

#[test]
fn hovering_adds_crosshair_marker_and_tooltip() {
    let chart = chart_three_points();
    let layout = Layout::compute(&chart, 100, 100);

    let idle = chart.scene(&layout, &Hover::Idle);
    assert!(idle.tooltip.is_none());
    let idle_circles = idle
        .flat_nodes()
        .iter()
        .filter(|n| matches!(n, Node::Circle { .. }))
        .count();
    assert_eq!(idle_circles, 0);

    let hover = Hover::Idle.advance(PointerEvent::Move { x: 50.0, y: 0.0 }, &layout);
    let scene = chart.scene(&layout, &hover);
    let flat = scene.flat_nodes();

    // Two dashed crosshair legs plus the point marker.
    let dashed = flat
        .iter()
        .filter(|n| matches!(n, Node::Line { dash: Some(d), .. } if d == "4,2"))
        .count();
    assert_eq!(dashed, 2);
    assert_eq!(
        flat.iter().filter(|n| matches!(n, Node::Circle { .. })).count(),
        1
    );

    let tooltip = scene.tooltip.expect("tooltip while hovering");
    assert!(tooltip.lines.iter().any(|l| l == "x: 1"));
    assert!(tooltip.lines.iter().any(|l| l == "y: 5"));
}

#[test]
fn tooltip_stays_within_the_viewport() {
    let chart = chart_three_points();
    let layout = Layout::compute(&chart, 100, 100);

    // Hover each point, including the corner ones.
    for (qx, qy) in [(0.0, 100.0), (50.0, 0.0), (100.0, 100.0)] {
        let hover = Hover::Idle.advance(PointerEvent::Move { x: qx, y: qy }, &layout);
        let scene = chart.scene(&layout, &hover);
        let t = scene.tooltip.expect("tooltip while hovering");
        assert!(t.x >= 0.0, "tooltip left edge at {}", t.x);
        assert!(t.y >= 0.0, "tooltip top edge at {}", t.y);
        // Never past the right/bottom edge unless wider than the view.
        if t.width <= 100.0 {
            assert!(t.x + t.width <= 100.0 + 1e-9);
        }
        if t.height <= 100.0 {
            assert!(t.y + t.height <= 100.0 + 1e-9);
        }
    }
}

#[test]
fn non_finite_points_are_skipped_everywhere() {
    let mut chart: Chart<(f64, f64)> = Chart::new();
    chart.margin = Insets::new(0, 0, 0, 0);
    chart.top_padding = 0.0;
    chart.add_dataset(Dataset::new(
        "gappy",
        vec![(0.0, 1.0), (1.0, f64::NAN), (2.0, 3.0), (f64::INFINITY, 4.0)],
        |p: &(f64, f64)| *p,
    ));
    let layout = Layout::compute(&chart, 100, 100);

    assert_eq!(layout.points.len(), 2);
    assert_eq!(layout.domain.x, (0.0, 2.0));
    assert_eq!(layout.domain.y, (0.0, 3.0));

    // The series path is drawn from the finite points only.
    let scene = chart.scene(&layout, &Hover::Idle);
    assert_eq!(scene.path_count(), 1);
    let flat = scene.flat_nodes();
    let d = flat
        .iter()
        .find_map(|n| match n {
            Node::Path { d, .. } => Some(d.clone()),
            _ => None,
        })
        .expect("series path");
    assert!(!d.contains("NaN"));
    assert!(!d.contains("inf"));
}

#[test]
fn single_point_series_draws_no_path() {
    let mut chart: Chart<(f64, f64)> = Chart::new();
    chart.add_dataset(Dataset::new("solo", vec![(1.0, 1.0)], |p: &(f64, f64)| *p));
    let layout = Layout::compute(&chart, 1000, 1000);
    let scene = chart.scene(&layout, &Hover::Idle);
    assert_eq!(scene.path_count(), 0);
    // The lone point is still hit-testable.
    let px = layout.x_scale.map(1.0);
    let py = layout.y_scale.map(1.0);
    assert!(layout.hit_test(px, py).is_some());
}

#[test]
fn layout_cache_rebuilds_on_data_and_size_changes() {
    let mut chart = chart_three_points();
    let mut cache = LayoutCache::new();

    let v0 = chart.version();
    let points_before = cache.layout(&chart, 100, 100).points.len();
    assert_eq!(points_before, 3);

    // Same inputs: the cached layout is reused (same contents, no recompute
    // observable, but at minimum the same values).
    assert_eq!(cache.layout(&chart, 100, 100).points.len(), 3);

    // Mutating datasets bumps the version and invalidates the layout.
    chart.datasets_mut()[0].series.push((3.0, 1.0));
    assert!(chart.version() > v0);
    assert_eq!(cache.layout(&chart, 100, 100).points.len(), 4);
    assert_eq!(cache.layout(&chart, 100, 100).domain.x, (0.0, 3.0));

    // Resizing invalidates too.
    assert_eq!(cache.layout(&chart, 300, 200).inner_width, 300.0);
    assert_eq!(cache.layout(&chart, 300, 200).inner_height, 200.0);
}

#[test]
fn custom_tooltip_format_is_used() {
    let mut chart = chart_three_points();
    chart.set_tooltip_format(|payload| match payload {
        plotline_core::TooltipPayload::Line { x, y, .. } => {
            vec![format!("({x}, {y})")]
        }
    });
    let layout = Layout::compute(&chart, 100, 100);
    let hover = Hover::Idle.advance(PointerEvent::Move { x: 50.0, y: 0.0 }, &layout);
    let scene = chart.scene(&layout, &hover);
    let tooltip = scene.tooltip.expect("tooltip while hovering");
    assert_eq!(tooltip.lines, vec!["(1, 5)".to_string()]);
}

#[test]
fn show_cells_adds_one_polygon_per_point() {
    let mut chart = chart_three_points();
    chart.show_cells = true;
    let layout = Layout::compute(&chart, 100, 100);
    let scene = chart.scene(&layout, &Hover::Idle);
    let polys = scene
        .flat_nodes()
        .iter()
        .filter(|n| matches!(n, Node::Polygon { .. }))
        .count();
    assert_eq!(polys, 3);
}

#[test]
fn curve_kind_changes_the_path_shape() {
    let mut chart = chart_three_points();
    chart.curve = CurveKind::Linear;
    let layout = Layout::compute(&chart, 100, 100);
    let linear = chart.scene(&layout, &Hover::Idle);

    chart.curve = CurveKind::CatmullRom;
    let layout = Layout::compute(&chart, 100, 100);
    let smooth = chart.scene(&layout, &Hover::Idle);

    let path_of = |scene: &plotline_core::Scene| {
        scene.flat_nodes().iter().find_map(|n| match n {
            Node::Path { d, .. } => Some(d.clone()),
            _ => None,
        })
    };
    let linear_d = path_of(&linear).expect("linear path");
    let smooth_d = path_of(&smooth).expect("smooth path");

    assert_eq!(linear_d, "M0,100L50,0L100,100");
    assert!(smooth_d.starts_with("M0,100C"));
    assert!(smooth_d.contains('C'));
    assert!(!smooth_d.contains('L'));
}

// File: crates/plotline-svg/tests/svg.rs
// Purpose: Validate SVG document structure and escaping.

use plotline_core::types::Insets;
use plotline_core::{Chart, Dataset, Hover, Layout, PointerEvent};
use plotline_svg::render_scene;

fn small_chart() -> Chart<(f64, f64)> {
    let mut chart: Chart<(f64, f64)> = Chart::new();
    chart.title = "Tiny & Trusty".to_string();
    chart.margin = Insets::new(10, 10, 30, 30);
    chart.add_dataset(Dataset::new(
        "wave",
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.0)],
        |p: &(f64, f64)| *p,
    ));
    chart
}

#[test]
fn document_has_expected_structure() {
    let chart = small_chart();
    let layout = Layout::compute(&chart, 400, 300);
    let svg = render_scene(&chart.scene(&layout, &Hover::Idle));

    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("viewBox=\"0 0 400 300\""));
    // Background rect, series path, axis text, entrance animation.
    assert!(svg.contains("<rect "));
    assert!(svg.contains("<path "));
    assert!(svg.contains("<text "));
    assert!(svg.contains("<animate attributeName=\"opacity\""));
    assert!(svg.contains("fill=\"freeze\""));
    // The plot group is translated by the margins.
    assert!(svg.contains("translate(10,30)"));
}

#[test]
fn text_content_is_escaped() {
    let chart = small_chart();
    let layout = Layout::compute(&chart, 400, 300);
    let svg = render_scene(&chart.scene(&layout, &Hover::Idle));
    assert!(svg.contains("Tiny &amp; Trusty"));
    assert!(!svg.contains("Tiny & Trusty"));
}

#[test]
fn hovered_scene_adds_crosshair_and_tooltip_markup() {
    let chart = small_chart();
    let layout = Layout::compute(&chart, 400, 300);

    let idle = render_scene(&chart.scene(&layout, &Hover::Idle));
    assert!(!idle.contains("stroke-dasharray"));
    assert!(!idle.contains("class=\"tooltip\""));

    let hover = Hover::Idle.advance(
        PointerEvent::Move { x: layout.inner_width / 2.0, y: layout.inner_height / 2.0 },
        &layout,
    );
    assert!(hover.is_hovering());
    let hovered = render_scene(&chart.scene(&layout, &hover));
    assert!(hovered.contains("stroke-dasharray=\"4,2\""));
    assert!(hovered.contains("<circle "));
    assert!(hovered.contains("class=\"tooltip\""));
    assert!(hovered.contains("wave"));
}

#[test]
fn numbers_render_compactly() {
    let chart = small_chart();
    let layout = Layout::compute(&chart, 400, 300);
    let svg = render_scene(&chart.scene(&layout, &Hover::Idle));
    // Rounded pixel coordinates never carry a trailing ".0".
    assert!(!svg.contains(".0\""));
    assert!(!svg.contains(".0,"));
}

#[test]
fn write_svg_creates_parent_directories() {
    let chart = small_chart();
    let layout = Layout::compute(&chart, 400, 300);
    let scene = chart.scene(&layout, &Hover::Idle);

    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target/test_out/nested");
    let path = dir.join("doc.svg");
    std::fs::remove_dir_all(&dir).ok();

    plotline_svg::write_svg(&scene, &path).expect("write svg");
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, render_scene(&scene));
}
